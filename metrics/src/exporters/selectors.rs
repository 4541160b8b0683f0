use opentelemetry_sdk::metrics::{
    data::Temporality,
    reader::{AggregationSelector, DefaultAggregationSelector, TemporalitySelector},
    Aggregation, InstrumentKind,
};

/// Selectors handed to every push exporter of the pipeline.
///
/// - Delta temporality for counters: each export carries only what was
///   recorded since the previous one, so a collector adding up the points
///   gets the real total no matter how many collections happened.
///
/// - Cumulative temporality for up-down counters, whose meaning is the
///   current level and not a rate.
///
/// Aggregations are the SDK defaults (sum, last value, explicit buckets).
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportSelectors;

impl TemporalitySelector for ExportSelectors {
    fn temporality(&self, kind: InstrumentKind) -> Temporality {
        match kind {
            InstrumentKind::UpDownCounter | InstrumentKind::ObservableUpDownCounter => {
                Temporality::Cumulative
            }
            _ => Temporality::Delta,
        }
    }
}

impl AggregationSelector for ExportSelectors {
    fn aggregation(&self, kind: InstrumentKind) -> Aggregation {
        DefaultAggregationSelector::new().aggregation(kind)
    }
}
