//!
//! The compiler toolchain profile.
//!

pub mod settings;

use serde::Serialize;

use crate::config::document::Document;
use crate::error::Error;

use self::settings::optimizer::Optimizer;
use self::settings::Settings;

///
/// The compiler toolchain profile.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompilerProfile {
    /// The compiler name. Taken from the profile key.
    #[serde(skip)]
    pub name: String,
    /// The exact compiler release.
    pub version: semver::Version,
    /// The settings passed through to the compiler.
    pub settings: Settings,
}

impl CompilerProfile {
    /// The default compiler profile name.
    pub const DEFAULT_NAME: &'static str = "solc";

    /// The default compiler release.
    pub const DEFAULT_VERSION: semver::Version = semver::Version::new(0, 8, 17);

    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: String, version: semver::Version, settings: Settings) -> Self {
        Self {
            name,
            version,
            settings,
        }
    }

    ///
    /// Validates the declared profile.
    ///
    pub fn try_from_document(name: String, mut document: Document) -> Result<Self, Error> {
        let version: String = document.required("version")?;
        let version = semver::Version::parse(version.as_str()).map_err(|error| {
            Error::malformed(
                document.path_of("version"),
                format!("`{}` is not a semantic version: {}", version, error),
            )
        })?;

        let settings = match document.child("settings")? {
            Some(settings) => Settings::try_from_document(settings)?,
            None => Settings::default(),
        };

        Ok(Self::new(name, version, settings))
    }

    ///
    /// The optimizer settings shortcut.
    ///
    pub fn optimizer(&self) -> &Optimizer {
        &self.settings.optimizer
    }
}

impl Default for CompilerProfile {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_NAME.to_owned(),
            Self::DEFAULT_VERSION,
            Settings::new(Optimizer::new(true, Optimizer::DEFAULT_RUNS), None),
        )
    }
}
