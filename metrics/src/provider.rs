use crate::{errors::MetricsError, pipeline::MetricsPipeline};
use configs::{Configs, MetricExporterKind};
use tracing::{debug, error};

#[cfg(any(feature = "otlp", feature = "stdout"))]
use crate::exporters;

/// Builds the exporter selected by the config and the controller around it,
/// then installs a clone of the provider as the otel global one.
///
/// With metrics disabled a reader-less pipeline is returned, so callers keep
/// creating instruments the same way.
pub fn init(cfg: &Configs) -> Result<MetricsPipeline, MetricsError> {
    if !cfg.metric.enable {
        debug!("metrics::init skipping metrics export setup");
        return Ok(MetricsPipeline::noop());
    }

    debug!("metrics::init configure metrics...");

    match cfg.metric.exporter {
        MetricExporterKind::OtlpGrpc => {
            #[cfg(feature = "otlp")]
            {
                let exporter = exporters::otlp::install(&cfg.metric)?;
                let pipeline = MetricsPipeline::periodic(exporter, cfg)?;
                pipeline.install_global();
                debug!("metrics::init otlp installed");
                Ok(pipeline)
            }

            #[cfg(not(feature = "otlp"))]
            {
                error!("otlp metrics required to configure features = [otlp]");
                Err(MetricsError::InvalidFeaturesError)
            }
        }
        MetricExporterKind::Stdout => {
            #[cfg(feature = "stdout")]
            {
                let pipeline = MetricsPipeline::periodic(exporters::stdout::install(), cfg)?;
                pipeline.install_global();
                debug!("metrics::init stdout installed");
                Ok(pipeline)
            }

            #[cfg(not(feature = "stdout"))]
            {
                error!("stdout metrics required to configure features = [stdout]");
                Err(MetricsError::InvalidFeaturesError)
            }
        }
    }
}
