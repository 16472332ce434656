use crate::common::*;

const LOG_DIRECTORY: &str = "logs";
const LOG_BASENAME: &str = "timeline_mailer";
const KEEP_LOG_FILES: usize = 10;

#[doc = "Line format shared by the log files and stderr"]
fn log_format(w: &mut dyn Write, now: &mut DeferredNow, record: &Record) -> std::io::Result<()> {
    write!(
        w,
        "[{}] [{}] [{}:{}] {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        record.module_path().unwrap_or("<unnamed>"),
        record.line().unwrap_or(0),
        record.args()
    )
}

#[doc = r#"
    Installs the global logger.

    Log level comes from `RUST_LOG` (default `info`). Lines go to daily rotated files under
    `logs/` and are duplicated to stderr so the scheduler's job output shows them too.

    The returned handle must stay alive until the process exits.
"#]
pub fn set_global_logger() -> anyhow::Result<LoggerHandle> {
    let handle: LoggerHandle = Logger::try_with_env_or_str("info")
        .context("[set_global_logger] invalid log specification")?
        .log_to_file(
            FileSpec::default()
                .directory(LOG_DIRECTORY)
                .basename(LOG_BASENAME),
        )
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(KEEP_LOG_FILES),
        )
        .format(log_format)
        .duplicate_to_stderr(Duplicate::Info)
        .start()
        .context("[set_global_logger] failed to start the logger")?;

    Ok(handle)
}
