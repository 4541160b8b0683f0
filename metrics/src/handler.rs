use crate::errors::MetricsError;
use opentelemetry::global;
use tracing::error;

/// Routes the errors the SDK reports through `global::handle_error` (failed
/// exports, failed shutdowns) to the tracing subscriber.
pub fn install_error_handler() -> Result<(), MetricsError> {
    global::set_error_handler(|err| {
        error!(error = err.to_string(), "opentelemetry error");
    })
    .map_err(|err| {
        error!(error = err.to_string(), "failure to set the otel error handler");
        MetricsError::ErrorHandlerError
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_install_error_handler() {
        assert!(install_error_handler().is_ok());

        global::handle_error(opentelemetry::metrics::MetricsError::Other(
            "export failed".to_owned(),
        ));
    }
}
