//! Acknowledgement store for unmaintained-build downloads
//!
//! Downloads of builds whose maintainer has stepped away are gated behind a
//! one-time warning per build. Acknowledgements only ever accumulate; there
//! is no un-acknowledge.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Composite key identifying one downloadable build.
pub fn build_identifier(codename: &str, version: &str, filename: &str) -> String {
    format!("{codename}-{version}-{filename}")
}

/// Set of acknowledged unmaintained builds, persisted as a JSON object of
/// identifier to `true`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct AcknowledgedBuilds(BTreeMap<String, bool>);

impl AcknowledgedBuilds {
    pub fn is_acknowledged(&self, identifier: &str) -> bool {
        self.0.get(identifier).copied().unwrap_or(false)
    }

    /// Records an acknowledgement. Idempotent.
    pub fn acknowledge(&mut self, identifier: &str) {
        self.0.insert(identifier.to_string(), true);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parses a persisted store. Corrupt data starts over empty rather than
    /// blocking every future download.
    pub fn from_json(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_default()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
