use configs::AppConfigs;
use configs_builder::ConfigBuilder;
use cx_metrics::{
    app::{App, RunSummary},
    errors::AppError,
};
use std::process;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cfg = match ConfigBuilder::new().metric().build() {
        Ok(cfg) => cfg,
        Err(err) => {
            if let Err(log_err) = logging::setup(&AppConfigs::default()) {
                eprintln!("{}", log_err);
            }
            fatal(err.into());
        }
    };

    if let Err(err) = logging::setup(&cfg.app) {
        eprintln!("{}", err);
        process::exit(1);
    }

    if let Err(err) = metrics::handler::install_error_handler() {
        fatal(err.into());
    }

    // the sdk blocks on its reader task while shutting down, keep the
    // sequence off the async workers
    let res = tokio::task::spawn_blocking(move || -> Result<RunSummary, AppError> {
        App::bootstrap(cfg)?.run()
    })
    .await;

    match res {
        Ok(Ok(summary)) => info!(
            counter_adds = summary.counter_adds,
            shut_down = summary.shut_down,
            "done"
        ),
        Ok(Err(err)) => fatal(err),
        Err(err) => fatal(AppError::InternalError(err.to_string())),
    }
}

fn fatal(err: AppError) -> ! {
    error!(error = err.to_string(), "fatal error");
    process::exit(1)
}
