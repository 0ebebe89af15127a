//!
//! The untyped declaration node.
//!

use serde::de::DeserializeOwned;

use crate::error::Error;

///
/// A mapping node of the declaration, tracked with its dotted path.
///
/// Fields are taken out one by one, so that every schema violation is reported
/// with the exact path of the offending field. Keys which are never taken are
/// ignored.
///
#[derive(Debug)]
pub struct Document {
    /// The dotted path of the node.
    path: String,
    /// The node fields.
    fields: serde_json::Map<String, serde_json::Value>,
}

impl Document {
    ///
    /// A shortcut constructor.
    ///
    /// Fails if the value is not a mapping.
    ///
    pub fn try_from_value(path: String, value: serde_json::Value) -> Result<Self, Error> {
        match value {
            serde_json::Value::Object(fields) => Ok(Self { path, fields }),
            value => Err(Error::malformed(
                path,
                format!("expected a mapping, found `{}`", value),
            )),
        }
    }

    ///
    /// Takes a required field.
    ///
    pub fn required<T>(&mut self, key: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        self.optional(key)?
            .ok_or_else(|| Error::malformed(self.path_of(key), "the field is missing"))
    }

    ///
    /// Takes an optional field.
    ///
    /// An explicit `null` is treated as a missing field.
    ///
    pub fn optional<T>(&mut self, key: &str) -> Result<Option<T>, Error>
    where
        T: DeserializeOwned,
    {
        match self.fields.remove(key) {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|error| Error::malformed(self.path_of(key), error)),
        }
    }

    ///
    /// Takes an optional mapping field as a child node.
    ///
    pub fn child(&mut self, key: &str) -> Result<Option<Self>, Error> {
        match self.fields.remove(key) {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(value) => Self::try_from_value(self.path_of(key), value).map(Some),
        }
    }

    ///
    /// Consumes the node, returning its entries as child values with their paths.
    ///
    pub fn into_entries(self) -> impl Iterator<Item = (String, String, serde_json::Value)> {
        let path = self.path;
        self.fields.into_iter().map(move |(key, value)| {
            let child_path = Self::join(path.as_str(), key.as_str());
            (key, child_path, value)
        })
    }

    ///
    /// The dotted path of a field of the node.
    ///
    pub fn path_of(&self, key: &str) -> String {
        Self::join(self.path.as_str(), key)
    }

    fn join(path: &str, key: &str) -> String {
        if path.is_empty() {
            key.to_owned()
        } else {
            format!("{}.{}", path, key)
        }
    }
}
