//! Config error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::format::FormatKind;

/// Errors from loading or updating an application config file.
///
/// Every internal failure surfaces here as a distinct, inspectable variant;
/// nothing is retried and nothing is swallowed, with one designed
/// exception: a missing config file on load is success, not an error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform could not supply a per-user config directory.
    #[error("could not determine the user config directory")]
    NoConfigDir,

    /// The application's config subdirectory could not be created.
    #[error("failed to create config directory {path}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The config file exists but could not be read.
    #[error("failed to read config file {path}")]
    Read {
        /// Path to the config file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The config file content is malformed for the declared format.
    #[error("failed to decode {format} config")]
    Decode {
        /// Format the file was expected to be in.
        format: FormatKind,
        /// Underlying decoder error.
        #[source]
        source: DecodeError,
    },

    /// The config value cannot be represented in the declared format.
    #[error("failed to encode {format} config")]
    Encode {
        /// Format the value was being encoded into.
        format: FormatKind,
        /// Underlying encoder error.
        #[source]
        source: EncodeError,
    },

    /// The config file could not be written.
    #[error("failed to write config file {path}")]
    Write {
        /// Path to the config file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Decoder failure from one of the supported formats.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// JSON deserialization failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML deserialization failed.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// XML deserialization failed.
    #[error(transparent)]
    Xml(#[from] quick_xml::DeError),
}

/// Encoder failure from one of the supported formats.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// JSON serialization failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML serialization failed.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// XML serialization failed.
    #[error(transparent)]
    Xml(#[from] quick_xml::SeError),
}

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
