//!
//! The deployment target network profile.
//!

pub mod id;

use serde::Serialize;

use crate::config::document::Document;
use crate::error::Error;

use self::id::Id;

///
/// The deployment target network profile.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkProfile {
    /// The node address.
    pub host: String,
    /// The node RPC port.
    pub port: u16,
    /// The chain identifier matcher.
    pub network_id: Id,
}

impl NetworkProfile {
    /// The local development profile name.
    pub const DEFAULT_NAME: &'static str = "development";

    /// The local development node address.
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";

    /// The local development node port.
    pub const DEFAULT_PORT: u16 = 7545;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(host: String, port: u16, network_id: Id) -> Self {
        Self {
            host,
            port,
            network_id,
        }
    }

    ///
    /// Validates the declared profile.
    ///
    pub fn try_from_document(mut document: Document) -> Result<Self, Error> {
        let host: String = document.required("host")?;
        if host.trim().is_empty() {
            return Err(Error::malformed(
                document.path_of("host"),
                "the address is empty",
            ));
        }

        let port: i64 = document.required("port")?;
        let port = u16::try_from(port).map_err(|_| {
            Error::malformed(
                document.path_of("port"),
                format!(
                    "expected an integer in [{}, {}], found {}",
                    u16::MIN,
                    u16::MAX,
                    port
                ),
            )
        })?;

        let network_id: serde_json::Value = document.required("network_id")?;
        let network_id = Id::try_from_value(document.path_of("network_id"), network_id)?;

        Ok(Self::new(host, port, network_id))
    }

    ///
    /// The node HTTP RPC endpoint.
    ///
    pub fn endpoint(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Default for NetworkProfile {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HOST.to_owned(), Self::DEFAULT_PORT, Id::Any)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::document::Document;
    use crate::network::id::Id;

    use super::NetworkProfile;

    fn parse(value: serde_json::Value) -> Result<NetworkProfile, crate::error::Error> {
        let document = Document::try_from_value("networks.development".to_owned(), value)?;
        NetworkProfile::try_from_document(document)
    }

    #[test]
    fn development() {
        let profile = parse(serde_json::json!({
            "host": "127.0.0.1",
            "port": 7545,
            "network_id": "*",
        }))
        .expect("Always valid");

        assert_eq!(profile, NetworkProfile::default());
        assert_eq!(profile.endpoint(), "http://127.0.0.1:7545");
    }

    #[test]
    fn port_bounds() {
        for port in [0, 65535] {
            let profile = parse(serde_json::json!({
                "host": "localhost",
                "port": port,
                "network_id": "*",
            }))
            .expect("The port is in range");
            assert_eq!(i64::from(profile.port), port);
        }
    }

    #[test]
    fn error_port_out_of_range() {
        for port in [65536, -1] {
            let error = parse(serde_json::json!({
                "host": "localhost",
                "port": port,
                "network_id": "*",
            }))
            .expect_err("The port is out of range");
            assert_eq!(error.field(), Some("networks.development.port"));
        }
    }

    #[test]
    fn error_port_type() {
        let error = parse(serde_json::json!({
            "host": "localhost",
            "port": 7545.5,
            "network_id": "*",
        }))
        .expect_err("The port is not an integer");
        assert_eq!(error.field(), Some("networks.development.port"));
    }

    #[test]
    fn error_empty_host() {
        let error = parse(serde_json::json!({
            "host": " ",
            "port": 7545,
            "network_id": "*",
        }))
        .expect_err("The host is empty");
        assert_eq!(error.field(), Some("networks.development.host"));
    }

    #[test]
    fn error_missing_network_id() {
        let error = parse(serde_json::json!({
            "host": "127.0.0.1",
            "port": 7545,
        }))
        .expect_err("The identifier is missing");
        assert_eq!(error.field(), Some("networks.development.network_id"));
    }

    #[test]
    fn ignores_unknown_keys() {
        let profile = parse(serde_json::json!({
            "host": "127.0.0.1",
            "port": 8545,
            "network_id": 5777,
            "gas": 6721975,
            "websockets": true,
        }))
        .expect("Always valid");

        assert_eq!(profile.network_id, Id::Exact("5777".to_owned()));
    }
}
