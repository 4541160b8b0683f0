use crate::exporters::selectors::ExportSelectors;
use async_trait::async_trait;
use opentelemetry::metrics::{MetricsError, Result};
use opentelemetry_sdk::metrics::{
    data::{Gauge, ResourceMetrics, Sum, Temporality},
    exporter::PushMetricsExporter,
    reader::{AggregationSelector, TemporalitySelector},
    Aggregation, InstrumentKind,
};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recorded {
    pub exports: usize,
    pub shutdowns: usize,
    /// `(instrument, value)` of every exported sum data point.
    pub sums: Vec<(String, f64)>,
    /// `(instrument, value)` of every exported gauge data point.
    pub gauges: Vec<(String, f64)>,
}

impl Recorded {
    pub fn sum_of(&self, name: &str) -> f64 {
        self.sums
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v)
            .sum()
    }

    pub fn gauge_values(&self, name: &str) -> Vec<f64> {
        self.gauges
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| *v)
            .collect()
    }
}

/// In-memory push exporter keeping the `f64` points it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingExporter {
    recorded: Arc<Mutex<Recorded>>,
}

impl RecordingExporter {
    pub fn recorded(&self) -> Recorded {
        self.recorded
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl AggregationSelector for RecordingExporter {
    fn aggregation(&self, kind: InstrumentKind) -> Aggregation {
        ExportSelectors.aggregation(kind)
    }
}

impl TemporalitySelector for RecordingExporter {
    fn temporality(&self, kind: InstrumentKind) -> Temporality {
        ExportSelectors.temporality(kind)
    }
}

#[async_trait]
impl PushMetricsExporter for RecordingExporter {
    async fn export(&self, metrics: &mut ResourceMetrics) -> Result<()> {
        let mut recorded = self
            .recorded
            .lock()
            .map_err(|err| MetricsError::Other(err.to_string()))?;

        recorded.exports += 1;

        for scope in &metrics.scope_metrics {
            for metric in &scope.metrics {
                let data = metric.data.as_any();

                if let Some(sum) = data.downcast_ref::<Sum<f64>>() {
                    for point in &sum.data_points {
                        recorded.sums.push((metric.name.to_string(), point.value));
                    }
                } else if let Some(gauge) = data.downcast_ref::<Gauge<f64>>() {
                    for point in &gauge.data_points {
                        recorded.gauges.push((metric.name.to_string(), point.value));
                    }
                }
            }
        }

        Ok(())
    }

    async fn force_flush(&self) -> Result<()> {
        Ok(())
    }

    fn shutdown(&self) -> Result<()> {
        let mut recorded = self
            .recorded
            .lock()
            .map_err(|err| MetricsError::Other(err.to_string()))?;

        recorded.shutdowns += 1;

        Ok(())
    }
}
