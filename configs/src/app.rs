use crate::Environment;

#[derive(Debug, Clone)]
pub struct AppConfigs {
    ///Reported as the `service.name` resource attribute and as the
    ///attribute of every emitted measurement.
    ///
    ///Default: go-test-service
    pub name: String,
    ///Default: v1.0.0
    pub version: String,
    ///Default: Environment::Local
    pub env: Environment,
    ///Default: debug
    pub log_level: String,
    ///Default: false
    pub enable_external_creates_logging: bool,
}

impl Default for AppConfigs {
    fn default() -> Self {
        Self {
            name: "go-test-service".to_owned(),
            version: "v1.0.0".to_owned(),
            env: Environment::Local,
            log_level: "debug".to_owned(),
            enable_external_creates_logging: false,
        }
    }
}
