// prose-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::{env, fs};

use anyhow::{anyhow, Context, Result};
use tracing::metadata::LevelFilter;
pub use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, Registry};

/// Settings shared by the demo binaries.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// JSON file holding the members and their devices.
    pub devices_file: PathBuf,
    pub log_level: Level,
}

/// Reads the config from the command line (`<devices file> [log level]`), falling back to
/// `DEVICES_FILE` and `LOG_LEVEL` from `demos/.env`.
pub fn load_config() -> Result<DemoConfig> {
    let env_path = demos_dir()?.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("Failed to read {:?}.", env_path))?;
    }

    let devices_file = env::args()
        .nth(1)
        .or_else(|| env::var("DEVICES_FILE").ok())
        .map(PathBuf::from)
        .ok_or_else(|| {
            anyhow!(
                "Missing devices file. Pass it as first argument or set DEVICES_FILE in {:?}.",
                env_path
            )
        })?;

    let log_level = match env::args().nth(2).or_else(|| env::var("LOG_LEVEL").ok()) {
        Some(level) => {
            Level::from_str(&level).map_err(|_| anyhow!("Invalid log level '{level}'."))?
        }
        None => Level::INFO,
    };

    Ok(DemoConfig {
        devices_file,
        log_level,
    })
}

/// Writes JSON formatted logs to `demos/<executable>/logs/<executable>.log`.
pub fn enable_debug_logging(max_level: Level) -> Result<()> {
    let exe_path = env::current_exe().context("Failed to get the current executable path")?;

    let exe_stem = exe_path
        .file_stem()
        .and_then(OsStr::to_str)
        .ok_or_else(|| anyhow!("Failed to extract file stem from executable name"))?;

    let log_dir = demos_dir()?.join(exe_stem).join("logs");
    let log_filename = format!("{}.log", exe_stem);

    remove_file_if_exists(&log_dir.join(&log_filename))?;

    let appender = tracing_appender::rolling::never(log_dir, log_filename);

    let json_layer = tracing_subscriber::fmt::Layer::new()
        .json()
        .with_writer(appender)
        .with_ansi(false)
        .with_filter(LevelFilter::from_level(max_level));

    Registry::default().with(json_layer).try_init()?;
    Ok(())
}

fn demos_dir() -> Result<PathBuf> {
    Ok(env::current_dir()
        .context("Cannot determine current directory")?
        .join("demos"))
}

fn remove_file_if_exists(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {:?}.", path))?;
    }
    Ok(())
}
