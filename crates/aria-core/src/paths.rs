//! Filesystem locations for aria data.
//!
//! Resolution is env-first so tests and packaging can relocate
//! everything without touching code.

use std::env;
use std::fs;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from path resolution or directory creation.
#[derive(Debug, Error)]
pub enum PathError {
    /// No home directory could be determined and no override was set.
    #[error("could not determine a home directory; set ARIA_DATA_DIR")]
    NoHomeDir,

    /// A required directory could not be created.
    #[error("failed to create directory {path}: {reason}")]
    DirectoryCreation {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        reason: String,
    },
}

/// Root directory for aria data (state file, endpoint overrides).
///
/// Resolution order:
/// 1. `ARIA_DATA_DIR` environment variable
/// 2. `~/.local/share/aria`
pub fn data_root() -> Result<PathBuf, PathError> {
    if let Ok(path) = env::var("ARIA_DATA_DIR") {
        return Ok(PathBuf::from(path));
    }

    let home = env::var_os("HOME")
        .map(PathBuf::from)
        .ok_or(PathError::NoHomeDir)?;
    Ok(home.join(".local").join("share").join("aria"))
}

/// Directory downloaded music lands in, created on demand.
///
/// Resolution order:
/// 1. `ARIA_MUSIC_DIR` environment variable
/// 2. `data_root()/downloads`
pub fn music_dir() -> Result<PathBuf, PathError> {
    let dir = match env::var("ARIA_MUSIC_DIR") {
        Ok(path) => PathBuf::from(path),
        Err(_) => data_root()?.join("downloads"),
    };

    fs::create_dir_all(&dir).map_err(|e| PathError::DirectoryCreation {
        path: dir.clone(),
        reason: e.to_string(),
    })?;
    Ok(dir)
}

/// Location of the persisted download ledger.
pub fn state_file_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join("download_state.json"))
}

/// Location of the optional mirror override file.
///
/// `ARIA_ENDPOINTS_FILE` points at an arbitrary file; otherwise the
/// file lives next to the ledger.
pub fn endpoints_file_path() -> Result<PathBuf, PathError> {
    if let Ok(path) = env::var("ARIA_ENDPOINTS_FILE") {
        return Ok(PathBuf::from(path));
    }
    Ok(data_root()?.join("api_endpoints.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ENV_LOCK, EnvVarGuard};
    use tempfile::tempdir;

    #[test]
    fn test_data_root_honors_env_override() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = tempdir().unwrap();
        let _env = EnvVarGuard::set("ARIA_DATA_DIR", temp.path().to_string_lossy().as_ref());

        assert_eq!(data_root().unwrap(), temp.path());
        assert_eq!(
            state_file_path().unwrap(),
            temp.path().join("download_state.json")
        );
        assert_eq!(
            endpoints_file_path().unwrap(),
            temp.path().join("api_endpoints.json")
        );
    }

    #[test]
    fn test_music_dir_is_created() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = tempdir().unwrap();
        let target = temp.path().join("music");
        let _env = EnvVarGuard::set("ARIA_MUSIC_DIR", target.to_string_lossy().as_ref());

        let dir = music_dir().unwrap();
        assert_eq!(dir, target);
        assert!(dir.is_dir());
    }

    #[test]
    fn test_endpoints_file_env_override() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = tempdir().unwrap();
        let file = temp.path().join("mirrors.json");
        let _env = EnvVarGuard::set("ARIA_ENDPOINTS_FILE", file.to_string_lossy().as_ref());

        assert_eq!(endpoints_file_path().unwrap(), file);
    }
}
