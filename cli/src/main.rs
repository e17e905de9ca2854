use crate::config::Config;
use crate::error::StackTrace;
use error_stack::ResultExt;
use kernel::KernelError;
use std::io::Write;
use std::process::{ExitCode, Termination};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

mod config;
mod error;
mod intake;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(trace) => trace.report(),
    }
}

fn run() -> Result<(), StackTrace> {
    let config = Config::load(std::env::args().nth(1))?;
    let _guard = init_tracing(&config);
    tracing::debug!(?config, "loaded configuration");

    let records = intake::read_records(&config.employees)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = intake::register_all(&config.revision, records, config.output, &mut out)?;
    out.flush()
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| "Failed to flush stdout")?;

    tracing::info!(
        accepted = summary.accepted,
        rejected = summary.rejected,
        "finished intake"
    );
    eprintln!("{summary}");
    Ok(())
}

fn init_tracing(config: &Config) -> Option<WorkerGuard> {
    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "payroll.log");
            let (non_blocking_appender, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::Layer::default()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(tracing_subscriber::EnvFilter::new(
                    std::env::var("RUST_LOG")
                        .unwrap_or_else(|_| "application=debug,cli=debug".into()),
                )),
        )
        .with(file_layer)
        .init();
    guard
}
