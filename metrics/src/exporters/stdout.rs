use super::selectors::ExportSelectors;
use opentelemetry_stdout::{MetricsExporter, MetricsExporterBuilder};
use tracing::debug;

pub fn install() -> MetricsExporter {
    debug!("metrics::stdout exporter created");

    MetricsExporterBuilder::default()
        .with_temporality_selector(ExportSelectors)
        .with_aggregation_selector(ExportSelectors)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry_sdk::metrics::{
        data::Temporality, reader::TemporalitySelector, InstrumentKind,
    };

    #[test]
    fn should_export_counters_as_delta() {
        let exporter = install();

        assert_eq!(
            exporter.temporality(InstrumentKind::Counter),
            Temporality::Delta
        );
        assert_eq!(
            exporter.temporality(InstrumentKind::ObservableGauge),
            Temporality::Delta
        );
        assert_eq!(
            exporter.temporality(InstrumentKind::UpDownCounter),
            Temporality::Cumulative
        );
    }
}
