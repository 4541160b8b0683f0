use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MetricsError {
    #[error("this exporter requires specific features")]
    InvalidFeaturesError,

    #[error("failure to convert `{0}` into grpc metadata")]
    ConversionError(String),

    #[error("failure to create the exporter - `{0}`")]
    ExporterError(String),

    #[error("the periodic reader requires a running tokio runtime")]
    RuntimeError,

    #[error("failure to flush the meter provider - `{0}`")]
    FlushError(String),

    #[error("failure to install the otel error handler")]
    ErrorHandlerError,
}
