use configs_builder::errors::ConfigsError;
use logging::LoggingError;
use metrics::MetricsError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AppError {
    #[error(transparent)]
    ConfigsError(#[from] ConfigsError),

    #[error(transparent)]
    LoggingError(#[from] LoggingError),

    #[error(transparent)]
    MetricsError(#[from] MetricsError),

    #[error("failure to create the instrument `{0}`")]
    InstrumentError(String),

    #[error("internal error - `{0}`")]
    InternalError(String),
}
