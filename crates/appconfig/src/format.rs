//! Format declaration and the encode/decode dispatch bound to it.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ConfigError, ConfigResult};

/// On-disk serialization format of a config type.
///
/// A closed set: every load and update dispatches on exactly one of these
/// three variants. The kind is a static property of the config type (see
/// [`ConfigFormat`]) and is never recorded in the file itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    /// JSON, pretty-printed with a two-space indent.
    Json,
    /// YAML block style.
    Yaml,
    /// XML, indented four spaces.
    Xml,
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Xml => "xml",
        };
        f.write_str(name)
    }
}

/// Declares the on-disk format of a config type.
///
/// Usually implemented via `#[derive(ConfigFormat)]` with a
/// `#[config(...)]` attribute rather than by hand. Because the format is an
/// associated constant, it depends only on the type — two values of the
/// same config type can never disagree about their format.
pub trait ConfigFormat {
    /// Format used for every load and update of this type.
    const FORMAT: FormatKind;
}

/// Encode `config` into the byte representation of its declared format.
///
/// Output is human-readable where the format has a say in the matter:
/// pretty-printed JSON, indented XML. Encoding happens entirely in memory,
/// so a failure here has touched nothing on disk.
///
/// # Errors
///
/// [`ConfigError::Encode`] tagged with the format when the value cannot be
/// represented in it.
pub fn encode<T>(config: &T) -> ConfigResult<Vec<u8>>
where
    T: Serialize + ConfigFormat,
{
    match T::FORMAT {
        FormatKind::Json => serde_json::to_vec_pretty(config).map_err(|e| ConfigError::Encode {
            format: FormatKind::Json,
            source: e.into(),
        }),
        FormatKind::Yaml => serde_yaml::to_string(config)
            .map(String::into_bytes)
            .map_err(|e| ConfigError::Encode {
                format: FormatKind::Yaml,
                source: e.into(),
            }),
        FormatKind::Xml => encode_xml(config),
    }
}

fn encode_xml<T: Serialize>(config: &T) -> ConfigResult<Vec<u8>> {
    let mut out = String::new();
    let mut ser = quick_xml::se::Serializer::new(&mut out);
    ser.indent(' ', 4);

    config.serialize(ser).map_err(|e| ConfigError::Encode {
        format: FormatKind::Xml,
        source: e.into(),
    })?;

    Ok(out.into_bytes())
}

/// Decode `bytes` in `T`'s declared format, replacing `*config` on success.
///
/// The destination is assigned only after the whole buffer has decoded, so
/// a malformed file never leaves a partially-decoded value behind.
///
/// # Errors
///
/// [`ConfigError::Decode`] tagged with the format when the input is
/// malformed.
pub fn decode_into<T>(bytes: &[u8], config: &mut T) -> ConfigResult<()>
where
    T: DeserializeOwned + ConfigFormat,
{
    let decoded = match T::FORMAT {
        FormatKind::Json => serde_json::from_slice(bytes).map_err(|e| ConfigError::Decode {
            format: FormatKind::Json,
            source: e.into(),
        })?,
        FormatKind::Yaml => serde_yaml::from_slice(bytes).map_err(|e| ConfigError::Decode {
            format: FormatKind::Yaml,
            source: e.into(),
        })?,
        FormatKind::Xml => quick_xml::de::from_reader(bytes).map_err(|e| ConfigError::Decode {
            format: FormatKind::Xml,
            source: e.into(),
        })?,
    };

    *config = decoded;
    Ok(())
}
