//! Tracing configuration for modelist
//!
//! ## Behavior / 行为
//!
//! - Logs go to stderr; stdout is reserved for command output
//! - Optional plain-text log file when a log directory is given
//! - `RUST_LOG` overrides the default directives

use std::{fs, io, path::Path, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry, EnvFilter};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// - **Development**: debug for the workspace crates, warn for everything else
/// - **Production**: info for the workspace crates, warn for everything else
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    let mut directives = vec!["warn".to_string()];
    for target in ["modelist", "ml_core", "ml_app", "ml_infra"] {
        directives.push(format!("{target}={level}"));
    }
    directives
}

/// Initialize the global tracing subscriber.
///
/// Call once, before anything logs:
///
/// ```ignore
/// modelist::bootstrap::tracing::init_tracing_subscriber(None)?;
/// ```
///
/// ## Errors / 错误
///
/// Returns `Err` if a subscriber is already registered.
pub fn init_tracing_subscriber(log_dir: Option<&Path>) -> anyhow::Result<()> {
    let is_dev = is_development();

    let filter_directives = build_filter_directives(is_dev);
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives.join(",")));

    let file_writer = match log_dir.map(build_file_writer).transpose() {
        Ok(writer) => writer,
        Err(err) => {
            eprintln!("Failed to initialize file logging, using stderr only: {err}");
            None
        }
    };

    // "2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(BoxMakeWriter::new(io::stderr));

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(log_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, "modelist.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_directives() {
        let dev_directives = build_filter_directives(true);
        assert_eq!(dev_directives[0], "warn");
        assert!(dev_directives.contains(&"ml_core=debug".to_string()));
        assert!(dev_directives.contains(&"ml_app=debug".to_string()));
        assert!(dev_directives.contains(&"ml_infra=debug".to_string()));

        let prod_directives = build_filter_directives(false);
        assert!(prod_directives.contains(&"modelist=info".to_string()));
        assert!(prod_directives.contains(&"ml_infra=info".to_string()));
        assert!(!prod_directives.iter().any(|d| d.ends_with("=debug")));
    }

    #[test]
    fn test_directives_parse_as_env_filter() {
        let joined = build_filter_directives(false).join(",");
        assert!(EnvFilter::try_new(joined).is_ok());
    }
}
