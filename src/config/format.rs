//!
//! The declaration file format.
//!

use std::path::Path;

use crate::error::Error;

///
/// The declaration file format.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// The JSON document.
    Json,
    /// The TOML document.
    Toml,
}

impl Format {
    ///
    /// Detects the format by the file extension.
    ///
    pub fn try_from_path(path: &Path) -> Result<Self, Error> {
        match path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(|extension| extension.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(Error::UnsupportedFormat {
                path: path.to_owned(),
            }),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Toml => write!(f, "toml"),
        }
    }
}
