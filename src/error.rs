//!
//! The toolchain configuration error.
//!

use std::path::PathBuf;

///
/// The kind of a named configuration profile.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileKind {
    /// The `networks` section entry.
    Network,
    /// The `compilers` section entry.
    Compiler,
}

impl std::fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network => write!(f, "network"),
            Self::Compiler => write!(f, "compiler"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The declaration violates the schema.
    #[error("Malformed configuration field `{field}`: {reason}")]
    MalformedConfig {
        /// The dotted path of the offending field.
        field: String,
        /// The violation description.
        reason: String,
    },
    /// The profile lookup miss.
    #[error("The {kind} profile `{name}` is not found")]
    NotFound {
        /// The section the lookup was performed in.
        kind: ProfileKind,
        /// The requested profile name.
        name: String,
    },
    /// The declaration file cannot be read.
    #[error("Configuration file {path:?} reading error: {source}")]
    Io {
        /// The declaration file path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The declaration file extension is not recognized.
    #[error("Configuration file {path:?} has an unsupported format, expected `.json` or `.toml`")]
    UnsupportedFormat {
        /// The declaration file path.
        path: PathBuf,
    },
    /// The record cannot be written back into a declaration.
    #[error("Configuration serialization error: {reason}")]
    Serialization {
        /// The serializer error description.
        reason: String,
    },
    /// The process-wide record has been set already.
    #[error("The process-wide configuration is already initialized")]
    AlreadyInitialized,
}

impl Error {
    /// The field name used for errors not bound to a specific field.
    pub const DOCUMENT_FIELD: &'static str = "<document>";

    ///
    /// A shortcut constructor.
    ///
    pub fn malformed<F, R>(field: F, reason: R) -> Self
    where
        F: Into<String>,
        R: ToString,
    {
        Self::MalformedConfig {
            field: field.into(),
            reason: reason.to_string(),
        }
    }

    ///
    /// A shortcut constructor.
    ///
    pub fn not_found(kind: ProfileKind, name: &str) -> Self {
        Self::NotFound {
            kind,
            name: name.to_owned(),
        }
    }

    ///
    /// Whether the error is a schema violation.
    ///
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedConfig { .. })
    }

    ///
    /// Whether the error is a lookup miss.
    ///
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    ///
    /// Returns the offending field path of a schema violation.
    ///
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MalformedConfig { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }
}
