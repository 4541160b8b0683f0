pub mod errors;
pub mod exporters;
pub mod handler;
pub mod pipeline;
pub mod provider;
pub mod resource;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;

pub use errors::MetricsError;
pub use pipeline::MetricsPipeline;
