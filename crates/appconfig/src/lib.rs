//! Per-user application configuration files.
//!
//! `appconfig` stores one configuration file per application under the
//! platform's conventional per-user config directory and round-trips it
//! through the serde format the config type declares for itself. There is
//! no format parameter to pass and no path to compute: the type picks its
//! format once, and the application name picks the location.
//!
//! # Usage
//!
//! ```rust,no_run
//! use appconfig::ConfigFormat;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Default, Serialize, Deserialize, ConfigFormat)]
//! #[config(yaml)]
//! struct MyConfig {
//!     user_name: String,
//!     user_email: String,
//! }
//!
//! # fn main() -> Result<(), appconfig::ConfigError> {
//! let mut conf = MyConfig::default();
//! appconfig::load(&mut conf, "my-app")?;
//!
//! conf.user_name = "ada".to_owned();
//! appconfig::update(&conf, "my-app")?;
//! # Ok(())
//! # }
//! ```
//!
//! The file lives at `<user-config-root>/my-app/config` (for example
//! `~/.config/my-app/config` on Linux). A missing file on [`load`] is not
//! an error: the value is left as passed, which covers the first run before
//! anything has been persisted.
//!
//! # Scope
//!
//! Every call is a stateless, self-contained transaction — resolve the
//! path, dispatch the codec, do one read or one write. The library holds no
//! locks and performs no atomic-rename dance; callers that need
//! multi-process safety must coordinate externally.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod error;
pub mod format;
pub mod paths;
pub mod store;

/// Derives [`ConfigFormat`](trait@ConfigFormat) from a `#[config(...)]`
/// attribute. See the crate-level example.
pub use appconfig_derive::ConfigFormat;

pub use error::{ConfigError, ConfigResult, DecodeError, EncodeError};
pub use format::{ConfigFormat, FormatKind};
pub use paths::{config_file_path, config_file_path_in};
pub use store::{load, load_in, update, update_in};
