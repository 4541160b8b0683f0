mod app;
mod configs;
mod environment;
mod metrics;

pub use app::AppConfigs;
pub use configs::Configs;
pub use environment::Environment;
pub use metrics::{MetricConfigs, MetricExporterKind};
