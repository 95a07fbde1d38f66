//! 文件日志
//!
//! 终端被 TUI 占用，日志只能写入文件。

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志文件名
pub const LOG_FILE_NAME: &str = "apply-form.log";

/// 初始化日志，写入 `dir/apply-form.log`
///
/// 级别由 `RUST_LOG` 控制，默认 `info`。`log` 宏的记录同样会被收集。
pub fn init_logging(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(filter)
        .try_init()
        .context("Failed to install the log subscriber")?;

    tracing::info!("Logging to {}", path.display());
    Ok(())
}
