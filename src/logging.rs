use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Local-time RFC 3339 timestamps, from the same clock as the page stamp.
fn log_timer() -> ChronoLocal {
    ChronoLocal::rfc_3339()
}

/// Initializes console logging, plus a daily-rotated JSON log file when
/// `log_dir` is given.
///
/// The returned guard flushes the file writer on drop; hold it until exit.
pub fn init_logging(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    // Respect RUST_LOG if set; otherwise info for our crate, warn elsewhere
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("sheet_links=info,warn"));

    // Console output goes to stderr so stdout stays free for the run summary.
    // Local time, matching the timestamp stamped on the generated page.
    let console_layer = fmt::layer()
        .with_target(false)
        .with_timer(log_timer())
        .with_writer(std::io::stderr);

    let mut guard = None;
    let file_layer = match log_dir {
        Some(dir) => match fs::create_dir_all(dir) {
            Ok(()) => {
                let file_appender = tracing_appender::rolling::daily(dir, "sheet_links.log");
                let (non_blocking_writer, worker_guard) =
                    tracing_appender::non_blocking(file_appender);
                guard = Some(worker_guard);
                Some(
                    fmt::layer()
                        .json()
                        .with_timer(log_timer())
                        .with_writer(non_blocking_writer),
                )
            }
            Err(e) => {
                eprintln!("⚠️  Could not create log directory {}: {}", dir.display(), e);
                None
            }
        },
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Local, Offset};
    use tracing_subscriber::fmt::format::Writer;
    use tracing_subscriber::fmt::time::FormatTime;

    #[test]
    fn test_log_timestamps_use_local_offset() {
        let mut out = String::new();
        log_timer().format_time(&mut Writer::new(&mut out)).unwrap();

        let stamped = DateTime::parse_from_rfc3339(out.trim()).unwrap();
        assert_eq!(
            stamped.offset().local_minus_utc(),
            Local::now().offset().fix().local_minus_utc()
        );
    }
}
