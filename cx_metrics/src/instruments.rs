use crate::errors::AppError;
use opentelemetry::{
    metrics::{CallbackRegistration, Counter, Meter, ObservableGauge},
    KeyValue,
};
use tracing::{error, info};

pub const METER_NAME: &str = "my-meter";
pub const COUNTER_NAME: &str = "rust_otel_counter1";
pub const GAUGE_NAME: &str = "rust_otel_gauge1";

pub const WORK_ITERATIONS: usize = 10;
pub const GAUGE_VALUE: f64 = 11.0;

pub fn counter(meter: &Meter) -> Result<Counter<f64>, AppError> {
    meter
        .f64_counter(COUNTER_NAME)
        .with_description("Measures the cumulative epicness of the app")
        .try_init()
        .map_err(|err| {
            error!(error = err.to_string(), "failed to create the instrument");
            AppError::InstrumentError(COUNTER_NAME.to_owned())
        })
}

/// Adds one to `counter` per iteration and returns how many adds were made.
pub fn record_work(counter: &Counter<f64>, attributes: &[KeyValue], iterations: usize) -> usize {
    let mut adds = 0;

    for i in 0..iterations {
        info!("Doing really hard work ({} / {})", i + 1, iterations);
        counter.add(1.0, attributes);
        adds += 1;
    }

    adds
}

/// Keeps the gauge and its callback alive for as long as it is held.
pub struct GaugeRegistration {
    _gauge: ObservableGauge<f64>,
    _registration: Box<dyn CallbackRegistration>,
}

/// Registers a gauge that reports [`GAUGE_VALUE`] on every collection.
pub fn gauge(meter: &Meter, attributes: Vec<KeyValue>) -> Result<GaugeRegistration, AppError> {
    let gauge = meter.f64_observable_gauge(GAUGE_NAME).try_init().map_err(|err| {
        error!(error = err.to_string(), "failed to create the instrument");
        AppError::InstrumentError(GAUGE_NAME.to_owned())
    })?;

    let observed = gauge.clone();
    let registration = meter
        .register_callback(&[gauge.as_any()], move |observer| {
            observer.observe_f64(&observed, GAUGE_VALUE, &attributes)
        })
        .map_err(|err| {
            error!(error = err.to_string(), "failed to register the gauge callback");
            AppError::InstrumentError(GAUGE_NAME.to_owned())
        })?;

    Ok(GaugeRegistration {
        _gauge: gauge,
        _registration: registration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use configs::Configs;
    use metrics::{mocks::RecordingExporter, MetricsPipeline};

    fn attributes() -> Vec<KeyValue> {
        vec![KeyValue::new("service.name", "go-test-service")]
    }

    #[test]
    fn should_run_the_work_loop_exactly_the_requested_times() {
        let pipeline = MetricsPipeline::noop();
        let counter = counter(&pipeline.meter(METER_NAME)).unwrap();

        assert_eq!(record_work(&counter, &attributes(), WORK_ITERATIONS), 10);
        assert_eq!(record_work(&counter, &attributes(), WORK_ITERATIONS), 10);
        assert_eq!(record_work(&counter, &attributes(), 0), 0);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn should_export_the_counter_total() {
        let exporter = RecordingExporter::default();
        let pipeline = MetricsPipeline::periodic(exporter.clone(), &Configs::default()).unwrap();

        let counter = counter(&pipeline.meter(METER_NAME)).unwrap();
        record_work(&counter, &attributes(), WORK_ITERATIONS);

        tokio::task::spawn_blocking(move || pipeline.shutdown())
            .await
            .unwrap();

        assert_eq!(exporter.recorded().sum_of(COUNTER_NAME), 10.0);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn should_always_observe_eleven() {
        let exporter = RecordingExporter::default();
        let mut cfg = Configs::default();
        cfg.metric.export_interval = 60;
        let pipeline = MetricsPipeline::periodic(exporter.clone(), &cfg).unwrap();

        let _gauge = gauge(&pipeline.meter(METER_NAME), attributes()).unwrap();

        let pipeline = tokio::task::spawn_blocking(move || {
            pipeline.force_flush().unwrap();
            pipeline.force_flush().unwrap();
            pipeline
        })
        .await
        .unwrap();

        let values = exporter.recorded().gauge_values(GAUGE_NAME);
        assert!(values.len() >= 2);
        assert!(values.iter().all(|v| *v == GAUGE_VALUE));

        tokio::task::spawn_blocking(move || pipeline.shutdown())
            .await
            .unwrap();
    }
}
