use crate::{errors::MetricsError, resource};
use configs::Configs;
use opentelemetry::{
    global,
    metrics::{Meter, MeterProvider as _},
};
use opentelemetry_sdk::{
    metrics::{
        exporter::PushMetricsExporter, MeterProvider as SdkMeterProvider, PeriodicReader,
    },
    runtime,
};
use std::{
    fmt,
    sync::atomic::{AtomicBool, Ordering},
    time::Duration,
};
use tracing::{debug, error};

/// Single owner of the meter provider.
///
/// Instruments are created from [`MetricsPipeline::meter`] rather than from
/// the global provider. Shutdown happens at most once: either through an
/// explicit [`MetricsPipeline::shutdown`] call or when the pipeline is
/// dropped, whichever comes first.
pub struct MetricsPipeline {
    provider: SdkMeterProvider,
    is_shutdown: AtomicBool,
}

impl MetricsPipeline {
    /// Wraps `exporter` in a periodic reader collecting every
    /// `export_interval` seconds. Each export, including the last one done
    /// while shutting down, is bounded by `export_timeout`.
    pub fn periodic<E>(exporter: E, cfg: &Configs) -> Result<MetricsPipeline, MetricsError>
    where
        E: PushMetricsExporter,
    {
        // the reader spawns its collect loop on the current runtime
        if tokio::runtime::Handle::try_current().is_err() {
            error!("could not start the metric controller, no tokio runtime");
            return Err(MetricsError::RuntimeError);
        }

        let reader = PeriodicReader::builder(exporter, runtime::Tokio)
            .with_interval(Duration::from_secs(cfg.metric.export_interval))
            .with_timeout(Duration::from_secs(cfg.metric.export_timeout))
            .build();

        let provider = SdkMeterProvider::builder()
            .with_resource(resource::build(&cfg.app))
            .with_reader(reader)
            .build();

        debug!(
            interval = cfg.metric.export_interval,
            timeout = cfg.metric.export_timeout,
            "metrics::pipeline controller started"
        );

        Ok(MetricsPipeline::new(provider))
    }

    /// A provider without readers, every measurement is dropped.
    pub fn noop() -> MetricsPipeline {
        MetricsPipeline::new(SdkMeterProvider::builder().build())
    }

    fn new(provider: SdkMeterProvider) -> MetricsPipeline {
        MetricsPipeline {
            provider,
            is_shutdown: AtomicBool::new(false),
        }
    }

    /// Installs a clone of the provider as the otel global meter provider,
    /// for instrumentation that only knows about `global::meter`. The
    /// pipeline stays the owner: shutting it down shuts the clone down too.
    pub fn install_global(&self) {
        global::set_meter_provider(self.provider.clone());
    }

    pub fn meter(&self, name: &'static str) -> Meter {
        self.provider.meter(name)
    }

    pub fn force_flush(&self) -> Result<(), MetricsError> {
        self.provider.force_flush().map_err(|err| {
            error!(error = err.to_string(), "failure to flush metrics");
            MetricsError::FlushError(err.to_string())
        })
    }

    pub fn is_shutdown(&self) -> bool {
        self.is_shutdown.load(Ordering::SeqCst)
    }

    /// Pushes the last collection to the exporter and closes it.
    ///
    /// Returns `false` when the pipeline was already shut down. Failures are
    /// best effort and go to the otel global error handler.
    ///
    /// Blocks until the reader task acknowledges, so it must not run on a
    /// thread that task depends on: call it from a blocking context.
    pub fn shutdown(&self) -> bool {
        if self.is_shutdown.swap(true, Ordering::SeqCst) {
            debug!("metrics::pipeline already shut down");
            return false;
        }

        debug!("metrics::pipeline shutting down...");

        // the reader marks itself shut down before its final collect, which
        // then always fails: the last collection has to go out as a flush
        if let Err(err) = self.provider.force_flush() {
            global::handle_error(err);
        }

        if let Err(err) = self.provider.shutdown() {
            debug!(error = err.to_string(), "metrics::pipeline reader closed");
        }

        debug!("metrics::pipeline shut down");

        true
    }
}

impl fmt::Debug for MetricsPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetricsPipeline")
            .field("is_shutdown", &self.is_shutdown())
            .finish_non_exhaustive()
    }
}

impl Drop for MetricsPipeline {
    fn drop(&mut self) {
        self.shutdown();
    }
}
