use crate::{
    errors::AppError,
    instruments::{self, METER_NAME, WORK_ITERATIONS},
};
use configs::Configs;
use metrics::{provider, MetricsPipeline};
use opentelemetry::KeyValue;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub counter_adds: usize,
    pub shut_down: bool,
}

/// Application context: the configuration and the pipeline it owns.
pub struct App {
    cfg: Configs,
    pipeline: MetricsPipeline,
}

impl App {
    pub fn new(cfg: Configs, pipeline: MetricsPipeline) -> App {
        App { cfg, pipeline }
    }

    /// Creates the exporter and starts the controller around it.
    pub fn bootstrap(cfg: Configs) -> Result<App, AppError> {
        let pipeline = provider::init(&cfg)?;

        Ok(App::new(cfg, pipeline))
    }

    /// Emits the counter and gauge readings, then stops the controller.
    ///
    /// Consumes the app: if anything fails halfway the pipeline is still
    /// shut down when it is dropped.
    pub fn run(self) -> Result<RunSummary, AppError> {
        let meter = self.pipeline.meter(METER_NAME);
        let attributes = vec![KeyValue::new("service.name", self.cfg.app.name.clone())];

        let counter = instruments::counter(&meter)?;
        let counter_adds = instruments::record_work(&counter, &attributes, WORK_ITERATIONS);

        let _gauge = instruments::gauge(&meter, attributes)?;
        debug!("gauge callback registered");

        let shut_down = self.pipeline.shutdown();
        info!(counter_adds, "metrics pushed, controller stopped");

        Ok(RunSummary {
            counter_adds,
            shut_down,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::{COUNTER_NAME, GAUGE_NAME, GAUGE_VALUE};
    use metrics::mocks::RecordingExporter;

    #[tokio::test(flavor = "multi_thread")]
    async fn should_emit_then_shutdown_once() {
        let exporter = RecordingExporter::default();
        let cfg = Configs::default();
        let pipeline = MetricsPipeline::periodic(exporter.clone(), &cfg).unwrap();

        let summary = tokio::task::spawn_blocking(move || App::new(cfg, pipeline).run())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(
            summary,
            RunSummary {
                counter_adds: 10,
                shut_down: true,
            }
        );

        let recorded = exporter.recorded();
        assert!(recorded.exports >= 1);
        assert_eq!(recorded.shutdowns, 1);
        assert_eq!(recorded.sum_of(COUNTER_NAME), 10.0);
        assert!(!recorded.gauge_values(GAUGE_NAME).is_empty());
        assert!(recorded
            .gauge_values(GAUGE_NAME)
            .iter()
            .all(|v| *v == GAUGE_VALUE));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn should_export_readings_taken_before_the_first_interval() {
        let exporter = RecordingExporter::default();
        let cfg = Configs::default();
        assert_eq!(cfg.metric.export_interval, 1);
        let pipeline = MetricsPipeline::periodic(exporter.clone(), &cfg).unwrap();

        let started = std::time::Instant::now();
        tokio::task::spawn_blocking(move || App::new(cfg, pipeline).run())
            .await
            .unwrap()
            .unwrap();
        assert!(started.elapsed() < std::time::Duration::from_secs(1));

        let recorded = exporter.recorded();
        assert!(recorded.exports >= 1);
        assert_eq!(recorded.sum_of(COUNTER_NAME), 10.0);
        assert_eq!(recorded.gauge_values(GAUGE_NAME).last(), Some(&GAUGE_VALUE));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn should_reach_the_exporter_with_missing_cx_values() {
        let cfg = Configs::default();
        assert!(cfg.metric.endpoint.is_empty());
        assert!(cfg.metric.access_key.is_empty());

        let res = tokio::task::spawn_blocking(move || App::bootstrap(cfg).map(|app| app.run()))
            .await
            .unwrap();

        if let Err(err) = res {
            assert!(matches!(
                err,
                AppError::MetricsError(metrics::MetricsError::ExporterError(_))
            ));
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn should_run_against_an_unreachable_collector() {
        let mut cfg = Configs::default();
        cfg.metric.endpoint = "https://127.0.0.1:1".to_owned();
        cfg.metric.access_key = "some-token".to_owned();

        let started = std::time::Instant::now();
        let summary = tokio::task::spawn_blocking(move || -> Result<RunSummary, AppError> {
            App::bootstrap(cfg)?.run()
        })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(summary.counter_adds, 10);
        assert!(summary.shut_down);
        assert!(started.elapsed() < std::time::Duration::from_secs(2));
    }
}
