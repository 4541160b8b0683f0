pub const LOCAL_ENV_FILE_NAME: &str = ".env.local";
pub const DEV_ENV_FILE_NAME: &str = ".env.develop";
pub const STAGING_FILE_NAME: &str = ".env.staging";
pub const PROD_FILE_NAME: &str = ".env.prod";

pub const RUST_ENV_KEY: &str = "RUST_ENV";
pub const APP_NAME_ENV_KEY: &str = "APP_NAME";
pub const APP_VERSION_ENV_KEY: &str = "APP_VERSION";
pub const LOG_LEVEL_ENV_KEY: &str = "LOG_LEVEL";
pub const ENABLE_EXTERNAL_LOGGING_ENV_KEY: &str = "ENABLE_EXTERNAL_CRATES_LOGGING";

pub const METRIC_EXPORTER_ENV_KEY: &str = "METRIC_EXPORTER";
pub const CX_ENDPOINT_ENV_KEY: &str = "CX_ENDPOINT";
pub const CX_TOKEN_ENV_KEY: &str = "CX_TOKEN";
pub const CX_HEADER_KEY_ENV_KEY: &str = "CX_HEADER_KEY";
pub const CX_EXPORT_INTERVAL_ENV_KEY: &str = "CX_EXPORT_INTERVAL";
pub const CX_EXPORT_TIMEOUT_ENV_KEY: &str = "CX_EXPORT_TIMEOUT";
pub const CX_INSECURE_ENV_KEY: &str = "CX_INSECURE";
