use crate::errors::LoggingError;
use configs::{AppConfigs, Environment};
use tracing::warn;
use tracing_bunyan_formatter::BunyanFormattingLayer;
use tracing_log::LogTracer;
use tracing_subscriber::{
    filter::{LevelFilter, Targets},
    fmt::{
        format::{Format, Pretty},
        Layer,
    },
    layer::SubscriberExt,
};

pub fn setup(cfg: &AppConfigs) -> Result<(), LoggingError> {
    if let Err(err) = LogTracer::init() {
        warn!(
            error = err.to_string(),
            "failure to initialize logger, probably the log was already initialized"
        );
    }

    let target_filters = get_target_filters(cfg);

    let mut fmt_pretty: Option<Layer<_, Pretty, Format<Pretty>>> = None;
    let mut fmt_json = None;

    if cfg.env == Environment::Local {
        fmt_pretty = Some(Layer::new().pretty());
    } else {
        fmt_json = Some(BunyanFormattingLayer::new(
            cfg.name.to_owned(),
            std::io::stdout,
        ));
    }

    match tracing::subscriber::set_global_default(
        tracing_subscriber::registry()
            .with(fmt_json)
            .with(fmt_pretty)
            .with(target_filters),
    ) {
        Err(err) => {
            warn!(error = err.to_string(), "failure to set tracing subscribe");
            Err(LoggingError::SubscriberError {})
        }
        _ => Ok(()),
    }
}

/// Crates logging through the exporter transport, capped at WARN unless
/// external crate logging is enabled.
const TRANSPORT_TARGETS: [&str; 6] = ["tonic", "tower", "h2", "hyper", "rustls", "log"];

fn get_target_filters(cfg: &AppConfigs) -> Targets {
    let targets = Targets::new().with_default(get_log_level_filter(cfg));

    if cfg.enable_external_creates_logging {
        return targets;
    }

    TRANSPORT_TARGETS
        .iter()
        .fold(targets, |targets, target| {
            targets.with_target(*target, LevelFilter::WARN)
        })
}

fn get_log_level_filter(cfg: &AppConfigs) -> LevelFilter {
    match cfg.log_level.as_str() {
        "debug" | "Debug" | "DEBUG" => LevelFilter::DEBUG,
        "info" | "Info" | "INFO" => LevelFilter::INFO,
        "warn" | "Warn" | "WARN" => LevelFilter::WARN,
        "error" | "Error" | "ERROR" => LevelFilter::ERROR,
        "trace" | "Trace" | "TRACE" => LevelFilter::TRACE,
        _ => LevelFilter::OFF,
    }
}
