//! Resolution of the per-application config file path.

use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::{ConfigError, ConfigResult};

/// File name used for every application's config file. The format is not
/// recorded in the name; the config type declares it.
const CONFIG_FILE_NAME: &str = "config";

/// Resolve `<user-config-root>/<app>/config`, creating the `<app>`
/// directory (and missing ancestors) if absent.
///
/// The path is recomputed on every call and returned whether or not a file
/// exists there yet. Directory creation is idempotent. `app` is not
/// validated; a name the filesystem rejects surfaces as
/// [`ConfigError::CreateDir`].
///
/// # Errors
///
/// [`ConfigError::NoConfigDir`] when the platform cannot supply a per-user
/// config directory, [`ConfigError::CreateDir`] when the application
/// subdirectory cannot be created.
pub fn config_file_path(app: &str) -> ConfigResult<PathBuf> {
    let base = BaseDirs::new().ok_or(ConfigError::NoConfigDir)?;
    config_file_path_in(base.config_dir(), app)
}

/// Like [`config_file_path`], but against an explicit config root instead
/// of the platform's.
///
/// # Errors
///
/// [`ConfigError::CreateDir`] when the application subdirectory cannot be
/// created.
pub fn config_file_path_in(root: &Path, app: &str) -> ConfigResult<PathBuf> {
    let app_dir = root.join(app);

    fs::create_dir_all(&app_dir).map_err(|e| ConfigError::CreateDir {
        path: app_dir.clone(),
        source: e,
    })?;

    Ok(app_dir.join(CONFIG_FILE_NAME))
}
