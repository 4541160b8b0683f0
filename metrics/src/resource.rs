use configs::AppConfigs;
use opentelemetry::KeyValue;
use opentelemetry_sdk::Resource;

/// Static process metadata attached to every export.
///
/// Starts from the SDK defaults (`telemetry.sdk.*` plus whatever
/// `OTEL_RESOURCE_ATTRIBUTES` carries) and overrides the service identity
/// with the configured values.
pub fn build(cfg: &AppConfigs) -> Resource {
    Resource::default().merge(&Resource::new(vec![
        KeyValue::new("service.name", cfg.name.clone()),
        KeyValue::new("service.version", cfg.version.clone()),
        KeyValue::new("environment", cfg.env.to_string()),
    ]))
}
