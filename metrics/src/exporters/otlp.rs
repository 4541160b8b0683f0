use super::selectors::ExportSelectors;
use crate::errors::MetricsError;
use configs::MetricConfigs;
use opentelemetry_otlp::{MetricsExporter, Protocol, TonicExporterBuilder, WithExportConfig};
use std::time::Duration;
use tonic::{
    metadata::{Ascii, MetadataKey, MetadataMap, MetadataValue},
    transport::ClientTlsConfig,
};
use tracing::{debug, error};

const DEFAULT_HEADER_KEY: &str = "authorization";

/// Creates the OTLP/gRPC push exporter.
///
/// The endpoint and the token are not checked here: whatever the config
/// holds is handed to tonic, which is the one rejecting malformed values.
/// Must run inside a tokio runtime, the channel is connected lazily on it.
pub fn install(cfg: &MetricConfigs) -> Result<MetricsExporter, MetricsError> {
    let builder = builder(cfg)?;

    match builder.build_metrics_exporter(Box::new(ExportSelectors), Box::new(ExportSelectors)) {
        Ok(exporter) => {
            debug!(
                endpoint = cfg.endpoint,
                tls = cfg.tls,
                "metrics::otlp exporter created"
            );
            Ok(exporter)
        }
        Err(err) => {
            error!(
                error = err.to_string(),
                endpoint = cfg.endpoint,
                "failure to create the collector exporter"
            );
            Err(MetricsError::ExporterError(err.to_string()))
        }
    }
}

fn builder(cfg: &MetricConfigs) -> Result<TonicExporterBuilder, MetricsError> {
    let builder = opentelemetry_otlp::new_exporter()
        .tonic()
        .with_endpoint(&cfg.endpoint)
        .with_timeout(Duration::from_secs(cfg.export_timeout))
        .with_protocol(Protocol::Grpc)
        .with_metadata(metadata(cfg)?);

    if !cfg.tls {
        return Ok(builder);
    }

    Ok(builder.with_tls_config(ClientTlsConfig::new()))
}

fn metadata(cfg: &MetricConfigs) -> Result<MetadataMap, MetricsError> {
    let key: MetadataKey<Ascii> = match cfg.header_access_key.parse() {
        Ok(key) => key,
        Err(_) => {
            error!(
                key = cfg.header_access_key,
                "failure to convert cfg.metric.header_access_key, using authorization"
            );
            MetadataKey::from_static(DEFAULT_HEADER_KEY)
        }
    };

    let value: MetadataValue<Ascii> = match cfg.bearer().parse() {
        Ok(value) => Ok(value),
        Err(_) => {
            error!("failure to convert cfg.metric.access_key");
            Err(MetricsError::ConversionError(cfg.header_access_key.clone()))
        }
    }?;

    let mut map = MetadataMap::with_capacity(1);
    map.insert(key, value);

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_send_bearer_token_as_metadata() {
        let cfg = MetricConfigs {
            access_key: "some-token".to_owned(),
            ..MetricConfigs::default()
        };

        let map = metadata(&cfg).unwrap();

        assert_eq!(
            map.get("authorization").and_then(|v| v.to_str().ok()),
            Some("Bearer some-token")
        );
    }

    #[test]
    fn should_accept_an_empty_token() {
        let map = metadata(&MetricConfigs::default()).unwrap();

        assert_eq!(map.len(), 1);
        assert!(map.get("authorization").is_some());
    }

    #[test]
    fn should_fallback_to_authorization_on_invalid_header_key() {
        let cfg = MetricConfigs {
            header_access_key: "not a header".to_owned(),
            access_key: "some-token".to_owned(),
            ..MetricConfigs::default()
        };

        let map = metadata(&cfg).unwrap();

        assert!(map.get("authorization").is_some());
    }

    #[test]
    fn should_fail_on_token_with_non_ascii_characters() {
        let cfg = MetricConfigs {
            access_key: "tok\nen".to_owned(),
            ..MetricConfigs::default()
        };

        assert_eq!(
            metadata(&cfg).unwrap_err(),
            MetricsError::ConversionError("authorization".to_owned())
        );
    }

    #[tokio::test]
    async fn should_reach_exporter_construction_without_endpoint() {
        let cfg = MetricConfigs::default();

        // an empty endpoint is the library's call to reject, not ours
        if let Err(err) = install(&cfg) {
            assert!(matches!(err, MetricsError::ExporterError(_)));
        }
    }

    #[tokio::test]
    async fn should_create_tls_exporter_lazily() {
        let cfg = MetricConfigs {
            endpoint: "https://127.0.0.1:4317".to_owned(),
            access_key: "some-token".to_owned(),
            ..MetricConfigs::default()
        };

        assert!(install(&cfg).is_ok());
    }
}
