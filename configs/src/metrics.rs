use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MetricExporterKind {
    #[default]
    OtlpGrpc,
    Stdout,
}

impl FromStr for MetricExporterKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stdout" | "console" => Ok(MetricExporterKind::Stdout),
            _ => Ok(MetricExporterKind::OtlpGrpc),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MetricConfigs {
    ///Default: true
    pub enable: bool,
    ///Default: MetricExporterKind::OtlpGrpc
    pub exporter: MetricExporterKind,
    ///Collector address, handed to the exporter as is.
    ///
    ///Default: empty
    pub endpoint: String,
    ///Default: authorization
    pub header_access_key: String,
    ///Bearer token sent on every export.
    ///
    ///Default: empty
    pub access_key: String,
    ///Collection period in seconds.
    ///
    ///Default: 1s
    pub export_interval: u64,
    ///Bounds every export and the final flush on shutdown.
    ///
    ///Default: 1s
    pub export_timeout: u64,
    ///Default: true
    pub tls: bool,
}

impl Default for MetricConfigs {
    fn default() -> Self {
        Self {
            enable: true,
            exporter: Default::default(),
            endpoint: Default::default(),
            header_access_key: "authorization".to_owned(),
            access_key: Default::default(),
            export_interval: 1,
            export_timeout: 1,
            tls: true,
        }
    }
}

impl MetricConfigs {
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_key)
    }
}
