//!
//! The `solc --standard-json` input settings optimizer.
//!

use serde::Serialize;

use crate::config::document::Document;
use crate::error::Error;

///
/// The `solc --standard-json` input settings optimizer.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Optimizer {
    /// Whether the optimizer is enabled.
    pub enabled: bool,
    /// The expected number of the deployed code executions.
    pub runs: u64,
}

impl Optimizer {
    /// The `solc` default number of runs.
    pub const DEFAULT_RUNS: u64 = 200;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(enabled: bool, runs: u64) -> Self {
        Self { enabled, runs }
    }

    ///
    /// Validates the declared optimizer.
    ///
    /// Missing fields fall back to the `solc` defaults.
    ///
    pub fn try_from_document(mut document: Document) -> Result<Self, Error> {
        let enabled: bool = document.optional("enabled")?.unwrap_or_default();

        let runs = match document.optional::<serde_json::Number>("runs")? {
            Some(runs) => runs.as_u64().ok_or_else(|| {
                Error::malformed(
                    document.path_of("runs"),
                    format!("expected a non-negative integer, found {}", runs),
                )
            })?,
            None => Self::DEFAULT_RUNS,
        };

        Ok(Self::new(enabled, runs))
    }
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::new(false, Self::DEFAULT_RUNS)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::document::Document;

    use super::Optimizer;

    fn parse(value: serde_json::Value) -> Result<Optimizer, crate::error::Error> {
        let document =
            Document::try_from_value("compilers.solc.settings.optimizer".to_owned(), value)?;
        Optimizer::try_from_document(document)
    }

    #[test]
    fn enabled() {
        let optimizer =
            parse(serde_json::json!({ "enabled": true, "runs": 200 })).expect("Always valid");
        assert_eq!(optimizer, Optimizer::new(true, 200));
    }

    #[test]
    fn zero_runs() {
        let optimizer =
            parse(serde_json::json!({ "enabled": true, "runs": 0 })).expect("Always valid");
        assert_eq!(optimizer.runs, 0);
    }

    #[test]
    fn runs_above_signed_range() {
        let optimizer = parse(serde_json::json!({
            "enabled": true,
            "runs": 9223372036854775808u64,
        }))
        .expect("Always valid");
        assert_eq!(optimizer.runs, 9_223_372_036_854_775_808);

        let optimizer = parse(serde_json::json!({ "runs": u64::MAX })).expect("Always valid");
        assert_eq!(optimizer.runs, u64::MAX);
    }

    #[test]
    fn defaults() {
        let optimizer = parse(serde_json::json!({})).expect("Always valid");
        assert_eq!(optimizer, Optimizer::default());
    }

    #[test]
    fn error_negative_runs() {
        let error = parse(serde_json::json!({ "enabled": true, "runs": -1 }))
            .expect_err("Negative runs");
        assert!(error.is_malformed());
        assert_eq!(error.field(), Some("compilers.solc.settings.optimizer.runs"));
    }

    #[test]
    fn error_fractional_runs() {
        let error = parse(serde_json::json!({ "enabled": true, "runs": 200.5 }))
            .expect_err("Not an integer");
        assert_eq!(error.field(), Some("compilers.solc.settings.optimizer.runs"));
        assert!(error.to_string().contains("expected a non-negative integer"));
    }

    #[test]
    fn error_runs_type() {
        let error = parse(serde_json::json!({ "runs": "200" })).expect_err("Not a number");
        assert_eq!(error.field(), Some("compilers.solc.settings.optimizer.runs"));
    }

    #[test]
    fn error_enabled_type() {
        let error = parse(serde_json::json!({ "enabled": "yes", "runs": 200 }))
            .expect_err("Not a boolean");
        assert_eq!(
            error.field(),
            Some("compilers.solc.settings.optimizer.enabled")
        );
    }
}
