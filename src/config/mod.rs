//!
//! The toolchain configuration record.
//!

pub mod document;
pub mod format;

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

use serde::Serialize;

use crate::compiler::CompilerProfile;
use crate::error::Error;
use crate::error::ProfileKind;
use crate::network::NetworkProfile;

use self::document::Document;
use self::format::Format;

/// The process-wide record.
static GLOBAL: OnceLock<Config> = OnceLock::new();

///
/// The toolchain configuration record.
///
/// Validated once when loaded and immutable afterwards.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// The deployment target networks.
    networks: BTreeMap<String, NetworkProfile>,
    /// The compiler toolchains.
    compilers: BTreeMap<String, CompilerProfile>,
}

impl Config {
    /// The `networks` section key.
    pub const SECTION_NETWORKS: &'static str = "networks";

    /// The `compilers` section key.
    pub const SECTION_COMPILERS: &'static str = "compilers";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        networks: BTreeMap<String, NetworkProfile>,
        compilers: BTreeMap<String, CompilerProfile>,
    ) -> Self {
        Self {
            networks,
            compilers,
        }
    }

    ///
    /// Loads the record from a JSON or TOML file, chosen by the extension.
    ///
    pub fn try_from_path(path: &Path) -> Result<Self, Error> {
        let format = Format::try_from_path(path)?;
        let input = std::fs::read_to_string(path).map_err(|error| Error::Io {
            path: path.to_owned(),
            source: error,
        })?;

        match format {
            Format::Json => Self::try_from_json(input.as_str()),
            Format::Toml => Self::try_from_toml(input.as_str()),
        }
    }

    ///
    /// Loads the record from a JSON document.
    ///
    pub fn try_from_json(input: &str) -> Result<Self, Error> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|error| Error::malformed(Error::DOCUMENT_FIELD, error))?;
        Self::try_from_value(value)
    }

    ///
    /// Loads the record from a TOML document.
    ///
    pub fn try_from_toml(input: &str) -> Result<Self, Error> {
        let value: serde_json::Value =
            toml::from_str(input).map_err(|error| Error::malformed(Error::DOCUMENT_FIELD, error))?;
        Self::try_from_value(value)
    }

    ///
    /// Validates the declaration tree.
    ///
    /// Keys other than the two sections are ignored.
    ///
    pub fn try_from_value(value: serde_json::Value) -> Result<Self, Error> {
        let mut document = Document::try_from_value(String::new(), value).map_err(|error| {
            match error {
                Error::MalformedConfig { reason, .. } => {
                    Error::malformed(Error::DOCUMENT_FIELD, reason)
                }
                error => error,
            }
        })?;

        let mut networks = BTreeMap::new();
        if let Some(section) = document.child(Self::SECTION_NETWORKS)? {
            for (name, path, value) in section.into_entries() {
                let profile = Document::try_from_value(path, value)
                    .and_then(NetworkProfile::try_from_document)?;
                networks.insert(name, profile);
            }
        }

        let mut compilers = BTreeMap::new();
        if let Some(section) = document.child(Self::SECTION_COMPILERS)? {
            for (name, path, value) in section.into_entries() {
                let profile = Document::try_from_value(path, value).and_then(|document| {
                    CompilerProfile::try_from_document(name.clone(), document)
                })?;
                compilers.insert(name, profile);
            }
        }

        Ok(Self::new(networks, compilers))
    }

    ///
    /// Returns the network profile by name.
    ///
    pub fn get_network(&self, name: &str) -> Result<&NetworkProfile, Error> {
        self.networks
            .get(name)
            .ok_or_else(|| Error::not_found(ProfileKind::Network, name))
    }

    ///
    /// Returns the compiler profile by name.
    ///
    pub fn get_compiler(&self, name: &str) -> Result<&CompilerProfile, Error> {
        self.compilers
            .get(name)
            .ok_or_else(|| Error::not_found(ProfileKind::Compiler, name))
    }

    ///
    /// Iterates over the network profiles in the name order.
    ///
    pub fn networks(&self) -> impl Iterator<Item = (&str, &NetworkProfile)> {
        self.networks
            .iter()
            .map(|(name, profile)| (name.as_str(), profile))
    }

    ///
    /// Iterates over the compiler profiles in the name order.
    ///
    pub fn compilers(&self) -> impl Iterator<Item = (&str, &CompilerProfile)> {
        self.compilers
            .iter()
            .map(|(name, profile)| (name.as_str(), profile))
    }

    ///
    /// Writes the record back into a JSON declaration.
    ///
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self).map_err(|error| Error::Serialization {
            reason: error.to_string(),
        })
    }

    ///
    /// Writes the record back into a TOML declaration.
    ///
    pub fn to_toml(&self) -> Result<String, Error> {
        toml::to_string(self).map_err(|error| Error::Serialization {
            reason: error.to_string(),
        })
    }

    ///
    /// Stores the record as the process-wide one.
    ///
    /// The record can be set only once per process.
    ///
    pub fn initialize_global(self) -> Result<&'static Self, Error> {
        GLOBAL
            .set(self)
            .map_err(|_| Error::AlreadyInitialized)?;
        Ok(GLOBAL.get().expect("Always initialized"))
    }

    ///
    /// Returns the process-wide record, if initialized.
    ///
    pub fn global() -> Option<&'static Self> {
        GLOBAL.get()
    }
}

impl Default for Config {
    fn default() -> Self {
        let mut networks = BTreeMap::new();
        networks.insert(
            NetworkProfile::DEFAULT_NAME.to_owned(),
            NetworkProfile::default(),
        );

        let mut compilers = BTreeMap::new();
        compilers.insert(
            CompilerProfile::DEFAULT_NAME.to_owned(),
            CompilerProfile::default(),
        );

        Self::new(networks, compilers)
    }
}
