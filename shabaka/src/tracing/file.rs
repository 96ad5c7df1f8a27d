use std::path::Path;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::Layer;
use tracing_subscriber::prelude::*;

use super::filter::LevelSetFilter;
use super::format::ShabakaFormat;
use crate::config::LoggingConfig;
use crate::error::EngineError;

// Keeps the non-blocking writers flushing for the life of the process
static GUARDS: OnceLock<Vec<WorkerGuard>> = OnceLock::new();

pub fn setup_tracing(
    engine_name: &str,
    logging_config: &LoggingConfig,
) -> Result<(), EngineError> {
    let base_logs_dir = Path::new(logging_config.directory.as_deref().unwrap_or(".logs"));

    let logs_dirs = [base_logs_dir.to_path_buf(), base_logs_dir.join("debug"), base_logs_dir.join("error")];
    for dir in &logs_dirs {
        std::fs::create_dir_all(dir).map_err(|e| {
            EngineError::SetupTracingError(format!("Failed to create logs directory {}: {}", dir.display(), e))
        })?;
    }

    let log_file = format!("{}.log", engine_name);
    let debug_appender = RollingFileAppender::new(Rotation::DAILY, base_logs_dir.join("debug"), &log_file);
    let error_appender = RollingFileAppender::new(Rotation::DAILY, base_logs_dir.join("error"), &log_file);

    let (non_blocking_debug, debug_guard) = tracing_appender::non_blocking(debug_appender);
    let (non_blocking_error, error_guard) = tracing_appender::non_blocking(error_appender);
    #[allow(unused_mut)]
    let mut guards = vec![debug_guard, error_guard];

    let format = ShabakaFormat {
        engine_name: engine_name.to_string(),
    };

    let subscriber = tracing_subscriber::registry()
        // DEBUG log file
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_ansi(false)
                .event_format(format.clone())
                .with_writer(non_blocking_debug)
                .with_filter(LevelSetFilter::DEBUG_ONLY),
        )
        // ERROR log file - warn and error
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_ansi(false)
                .event_format(format.clone())
                .with_writer(non_blocking_error)
                .with_filter(LevelSetFilter::ERROR_WARN),
        );

    #[cfg(all(feature = "prod", not(feature = "dev")))]
    let subscriber = subscriber.with(
        tracing_subscriber::fmt::Layer::default()
            .with_ansi(true)
            .event_format(format.clone())
            .with_writer(std::io::stderr)
            .with_filter(LevelSetFilter::ERROR_ONLY),
    );

    #[cfg(feature = "dev")]
    let subscriber = {
        let info_appender = RollingFileAppender::new(Rotation::DAILY, base_logs_dir, &log_file);
        let (non_blocking_info, info_guard) = tracing_appender::non_blocking(info_appender);
        guards.push(info_guard);

        subscriber
            // Terminal - INFO and above
            .with(
                tracing_subscriber::fmt::Layer::default()
                    .with_ansi(true)
                    .event_format(format.clone())
                    .with_writer(std::io::stderr)
                    .with_filter(LevelSetFilter::INFO_AND_ABOVE),
            )
            // INFO log file - info and above
            .with(
                tracing_subscriber::fmt::Layer::default()
                    .with_ansi(false)
                    .event_format(format.clone())
                    .with_writer(non_blocking_info)
                    .with_filter(LevelSetFilter::INFO_AND_ABOVE),
            )
    };

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| EngineError::SetupTracingError(e.to_string()))?;

    let _ = GUARDS.set(guards);

    tracing::info!(
        "{}_logging_started::debug_logs::{}::error_logs::{}",
        engine_name,
        base_logs_dir.join("debug").join(&log_file).display(),
        base_logs_dir.join("error").join(&log_file).display()
    );

    Ok(())
}
