//! The load/update facade: path resolution, codec dispatch, file I/O.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::format::{self, ConfigFormat};
use crate::paths;

/// Load the persisted config for `app` into `config`.
///
/// A missing config file is not an error: `config` is left exactly as
/// passed, which covers the first run before anything has been persisted.
/// On success the value holds either the file's decoded contents or its
/// untouched initial state, never a partial mix.
///
/// # Errors
///
/// [`ConfigError::NoConfigDir`] / [`ConfigError::CreateDir`] from path
/// resolution, [`ConfigError::Read`] for read failures other than
/// not-found, [`ConfigError::Decode`] for malformed content.
pub fn load<T>(config: &mut T, app: &str) -> ConfigResult<()>
where
    T: DeserializeOwned + ConfigFormat,
{
    let path = paths::config_file_path(app)?;
    load_at(config, &path)
}

/// Like [`load`], but against an explicit config root instead of the
/// platform's.
///
/// # Errors
///
/// As [`load`], minus [`ConfigError::NoConfigDir`].
pub fn load_in<T>(config: &mut T, app: &str, root: &Path) -> ConfigResult<()>
where
    T: DeserializeOwned + ConfigFormat,
{
    let path = paths::config_file_path_in(root, app)?;
    load_at(config, &path)
}

/// Encode `config` and persist it as the config file for `app`, replacing
/// any previous content.
///
/// Encoding completes in memory before the file is opened, so an encode
/// failure leaves an existing file byte-for-byte as it was. The write
/// itself is a plain truncate-and-write; concurrent writers race at the
/// filesystem level.
///
/// # Errors
///
/// [`ConfigError::NoConfigDir`] / [`ConfigError::CreateDir`] from path
/// resolution, [`ConfigError::Encode`] when the value cannot be
/// represented, [`ConfigError::Write`] for file write failures.
pub fn update<T>(config: &T, app: &str) -> ConfigResult<()>
where
    T: Serialize + ConfigFormat,
{
    let path = paths::config_file_path(app)?;
    update_at(config, &path)
}

/// Like [`update`], but against an explicit config root instead of the
/// platform's.
///
/// # Errors
///
/// As [`update`], minus [`ConfigError::NoConfigDir`].
pub fn update_in<T>(config: &T, app: &str, root: &Path) -> ConfigResult<()>
where
    T: Serialize + ConfigFormat,
{
    let path = paths::config_file_path_in(root, app)?;
    update_at(config, &path)
}

fn load_at<T>(config: &mut T, path: &Path) -> ConfigResult<()>
where
    T: DeserializeOwned + ConfigFormat,
{
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "config file not found, treating as empty");
            return Ok(());
        },
        Err(e) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source: e,
            });
        },
    };

    format::decode_into(&bytes, config)?;
    debug!(path = %path.display(), format = %T::FORMAT, "loaded config");
    Ok(())
}

fn update_at<T>(config: &T, path: &Path) -> ConfigResult<()>
where
    T: Serialize + ConfigFormat,
{
    let bytes = format::encode(config)?;

    write_file(path, &bytes).map_err(|e| ConfigError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!(path = %path.display(), format = %T::FORMAT, bytes = bytes.len(), "updated config");
    Ok(())
}

// The config file is owner read/write only; the parent directory keeps
// platform-default permissions.
#[cfg(unix)]
fn write_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    use std::io::Write as _;
    use std::os::unix::fs::OpenOptionsExt as _;

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(bytes)
}

#[cfg(not(unix))]
fn write_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    fs::write(path, bytes)
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;
    use crate::format::FormatKind;

    #[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
    struct Prefs {
        user_name: String,
        user_email: String,
    }

    impl ConfigFormat for Prefs {
        const FORMAT: FormatKind = FormatKind::Yaml;
    }

    fn prefs() -> Prefs {
        Prefs {
            user_name: "ada".to_owned(),
            user_email: "ada@example.com".to_owned(),
        }
    }

    #[test]
    fn update_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        update_in(&prefs(), "my-app", dir.path()).unwrap();

        let mut loaded = Prefs::default();
        load_in(&mut loaded, "my-app", dir.path()).unwrap();
        assert_eq!(loaded, prefs());
    }

    #[test]
    fn load_without_prior_update_leaves_value_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let mut conf = prefs();
        load_in(&mut conf, "my-app", dir.path()).unwrap();
        assert_eq!(conf, prefs());
    }

    #[test]
    fn update_replaces_previous_content_entirely() {
        let dir = tempfile::tempdir().unwrap();

        let long = Prefs {
            user_name: "a-rather-long-user-name".to_owned(),
            user_email: "long@example.com".to_owned(),
        };
        update_in(&long, "my-app", dir.path()).unwrap();

        let short = Prefs {
            user_name: "b".to_owned(),
            user_email: "b@x".to_owned(),
        };
        update_in(&short, "my-app", dir.path()).unwrap();

        let mut loaded = Prefs::default();
        load_in(&mut loaded, "my-app", dir.path()).unwrap();
        assert_eq!(loaded, short);
    }

    #[test]
    fn malformed_file_surfaces_decode_and_keeps_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = paths::config_file_path_in(dir.path(), "my-app").unwrap();
        fs::write(&path, "user_name: [unclosed").unwrap();

        let mut conf = prefs();
        let err = load_in(&mut conf, "my-app", dir.path()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Decode {
                format: FormatKind::Yaml,
                ..
            }
        ));
        assert_eq!(conf, prefs());
    }

    #[test]
    fn repeated_calls_share_one_path() {
        let dir = tempfile::tempdir().unwrap();
        update_in(&prefs(), "my-app", dir.path()).unwrap();
        update_in(&prefs(), "my-app", dir.path()).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path().join("my-app"))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn config_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt as _;

        let dir = tempfile::tempdir().unwrap();
        update_in(&prefs(), "my-app", dir.path()).unwrap();

        let path = dir.path().join("my-app").join("config");
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
