use crate::{
    env_keys::{
        APP_NAME_ENV_KEY, APP_VERSION_ENV_KEY, CX_ENDPOINT_ENV_KEY, CX_EXPORT_INTERVAL_ENV_KEY,
        CX_EXPORT_TIMEOUT_ENV_KEY, CX_HEADER_KEY_ENV_KEY, CX_INSECURE_ENV_KEY, CX_TOKEN_ENV_KEY,
        DEV_ENV_FILE_NAME, ENABLE_EXTERNAL_LOGGING_ENV_KEY, LOCAL_ENV_FILE_NAME,
        LOG_LEVEL_ENV_KEY, METRIC_EXPORTER_ENV_KEY, PROD_FILE_NAME, RUST_ENV_KEY,
        STAGING_FILE_NAME,
    },
    errors::ConfigsError,
};
use configs::{Configs, Environment};
use dotenvy::from_filename;
use std::{env, str::FromStr};
use tracing::error;

#[derive(Default)]
pub struct ConfigBuilder {
    metric: bool,
}

impl ConfigBuilder {
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn metric(mut self) -> Self {
        self.metric = true;
        self
    }

    /// Loads the `.env` file of the current `RUST_ENV` and then reads the
    /// process environment. Variables already set in the environment take
    /// precedence over the file.
    pub fn build(&self) -> Result<Configs, ConfigsError> {
        match Environment::from_rust_env() {
            Environment::Prod => {
                from_filename(PROD_FILE_NAME).ok();
            }
            Environment::Staging => {
                from_filename(STAGING_FILE_NAME).ok();
            }
            Environment::Dev => {
                from_filename(DEV_ENV_FILE_NAME).ok();
            }
            _ => {
                from_filename(LOCAL_ENV_FILE_NAME).ok();
            }
        }

        self.build_from(env::vars())
    }

    pub fn build_from<I, K, V>(&self, vars: I) -> Result<Configs, ConfigsError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut cfg = Configs::default();
        cfg.metric.enable = self.metric;

        for (key, value) in vars {
            let key: String = key.into();
            let value: String = value.into();

            if self.fill_app(&mut cfg, &key, &value)? {
                continue;
            };
            if self.fill_metric(&mut cfg, &key, &value)? {
                continue;
            };
        }

        Ok(cfg)
    }
}

impl ConfigBuilder {
    fn fill_app(&self, cfg: &mut Configs, key: &str, value: &str) -> Result<bool, ConfigsError> {
        match key {
            RUST_ENV_KEY => {
                cfg.app.env = self.parse(key, value)?;
                Ok(true)
            }
            APP_NAME_ENV_KEY => {
                cfg.app.name = value.to_owned();
                Ok(true)
            }
            APP_VERSION_ENV_KEY => {
                cfg.app.version = value.to_owned();
                Ok(true)
            }
            LOG_LEVEL_ENV_KEY => {
                cfg.app.log_level = value.to_owned();
                Ok(true)
            }
            ENABLE_EXTERNAL_LOGGING_ENV_KEY => {
                cfg.app.enable_external_creates_logging = self.parse(key, value)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn fill_metric(
        &self,
        cfg: &mut Configs,
        key: &str,
        value: &str,
    ) -> Result<bool, ConfigsError> {
        match key {
            METRIC_EXPORTER_ENV_KEY if self.metric => {
                cfg.metric.exporter = self.parse(key, value)?;
                Ok(true)
            }
            // endpoint and token go to the exporter untouched
            CX_ENDPOINT_ENV_KEY if self.metric => {
                cfg.metric.endpoint = value.to_owned();
                Ok(true)
            }
            CX_TOKEN_ENV_KEY if self.metric => {
                cfg.metric.access_key = value.to_owned();
                Ok(true)
            }
            CX_HEADER_KEY_ENV_KEY if self.metric => {
                cfg.metric.header_access_key = value.to_owned();
                Ok(true)
            }
            CX_EXPORT_INTERVAL_ENV_KEY if self.metric => {
                cfg.metric.export_interval = self.parse(key, value)?;
                Ok(true)
            }
            CX_EXPORT_TIMEOUT_ENV_KEY if self.metric => {
                cfg.metric.export_timeout = self.parse(key, value)?;
                Ok(true)
            }
            CX_INSECURE_ENV_KEY if self.metric => {
                let insecure: bool = self.parse(key, value)?;
                cfg.metric.tls = !insecure;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn parse<T>(&self, key: &str, value: &str) -> Result<T, ConfigsError>
    where
        T: FromStr,
    {
        value.parse().map_err(|_| {
            error!(key = key, value = value, "parse went wrong");
            ConfigsError::InvalidValue {
                key: key.to_owned(),
                value: value.to_owned(),
            }
        })
    }
}
