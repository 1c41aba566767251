//! JSON load/save plumbing for the ripeness config.
//!
//! Loading is fail-open: a missing or malformed file falls back to the
//! built-in defaults and the file is rewritten, so a broken config can
//! never block server startup or normal plant growth. Writes use the
//! write-rename pattern (`{path}.tmp` + `sync_all` + `rename`): a crash
//! mid-write cannot corrupt the existing file.

use bevy::prelude::*;
use std::fmt;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::migrate::migrate_config;
use super::types::RipenessConfig;

// =============================================================================
// Errors
// =============================================================================

/// Errors from config load/save plumbing. Callers treat every variant as
/// "fall back to defaults"; none aborts startup.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error (permission denied, disk full, etc.).
    Io(std::io::Error),
    /// The file exists but is not valid config JSON.
    Parse(serde_json::Error),
    /// The in-memory config could not be serialized.
    Serialize(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "Parse error: {e}"),
            ConfigError::Serialize(e) => write!(f, "Serialize error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) | ConfigError::Serialize(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

// =============================================================================
// Resources
// =============================================================================

/// Config file location for this `App`.
#[derive(Resource, Debug, Clone)]
pub struct ConfigFilePath(pub PathBuf);

/// Marker resource: when present before startup, the config file is neither
/// read nor written and the in-memory defaults stay in place. Inserted by
/// the test harness.
#[derive(Resource, Default)]
pub struct SkipConfigLoad;

// =============================================================================
// Load / save
// =============================================================================

/// Read, migrate, and write back the config file. Any failure falls back to
/// the built-in defaults.
pub fn load_or_default(path: &Path) -> RipenessConfig {
    let mut config = match read_config(path) {
        Ok(Some(config)) => config,
        Ok(None) => {
            info!("No config found at {}, writing defaults", path.display());
            RipenessConfig::default()
        }
        Err(e) => {
            warn!(
                "Failed to read config at {}: {} -- falling back to defaults",
                path.display(),
                e
            );
            RipenessConfig::default()
        }
    };

    migrate_config(&mut config);

    if let Err(e) = write_config(path, &config) {
        warn!("Failed to write config to {}: {}", path.display(), e);
    }
    config
}

/// Read and parse the config file. `Ok(None)` when the file does not exist.
pub fn read_config(path: &Path) -> Result<Option<RipenessConfig>, ConfigError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(ConfigError::Io(e)),
    };
    serde_json::from_str(&raw).map(Some).map_err(ConfigError::Parse)
}

/// Pretty-print and atomically write the config.
pub fn write_config(path: &Path, config: &RipenessConfig) -> Result<(), ConfigError> {
    let json = serde_json::to_string_pretty(config).map_err(ConfigError::Serialize)?;
    atomic_write(path, json.as_bytes())?;
    Ok(())
}

/// Atomically writes `data` to `path` using the write-rename pattern.
///
/// 1. Write to `{path}.tmp`
/// 2. `sync_all()` to flush to disk
/// 3. `rename` temp to final path (atomic on POSIX; near-atomic on Windows)
///
/// If the process crashes during step 1 or 2, the original file at `path`
/// remains untouched.
fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut tmp = path.as_os_str().to_os_string();
    tmp.push(".tmp");
    let tmp_path = PathBuf::from(tmp);

    // Ensure parent directory exists.
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = File::create(&tmp_path)?;
    file.write_all(data)?;
    file.sync_all()?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}
