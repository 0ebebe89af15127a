//!
//! The `solc --standard-json` input settings.
//!

pub mod optimizer;

use serde::Serialize;

use crate::config::document::Document;
use crate::error::Error;

use self::optimizer::Optimizer;

///
/// The `solc --standard-json` input settings.
///
/// Only the fields the toolchain declares are kept. The rest of the compiler
/// settings are produced by the consumer.
///
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// The optimizer settings.
    pub optimizer: Optimizer,
    /// The target EVM revision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evm_version: Option<String>,
}

impl Settings {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(optimizer: Optimizer, evm_version: Option<String>) -> Self {
        Self {
            optimizer,
            evm_version,
        }
    }

    ///
    /// Validates the declared settings.
    ///
    pub fn try_from_document(mut document: Document) -> Result<Self, Error> {
        let optimizer = match document.child("optimizer")? {
            Some(optimizer) => Optimizer::try_from_document(optimizer)?,
            None => Optimizer::default(),
        };
        let evm_version = document.optional("evmVersion")?;

        Ok(Self::new(optimizer, evm_version))
    }
}
