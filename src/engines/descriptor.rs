//! Engine descriptors and their validation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder replaced by the encoded query in a URL template
pub const PLACEHOLDER: &str = "%s";

/// One searchable destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineDescriptor {
    /// Display name
    pub name: String,
    /// Token selecting this engine via `!shortcut` (empty = none)
    pub shortcut: String,
    /// Target URL containing [`PLACEHOLDER`]
    #[serde(rename = "urlTemplate")]
    pub url_template: String,
}

impl EngineDescriptor {
    pub fn new(
        name: impl Into<String>,
        shortcut: impl Into<String>,
        url_template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            shortcut: shortcut.into(),
            url_template: url_template.into(),
        }
    }

    /// Build a descriptor from an untyped catalog entry, checking its shape
    pub fn from_value(value: serde_json::Value) -> Result<Self, InvalidEntry> {
        let engine: EngineDescriptor =
            serde_json::from_value(value).map_err(|e| InvalidEntry::Shape(e.to_string()))?;
        engine.validate()?;
        Ok(engine)
    }

    /// Check the invariants a loaded descriptor must satisfy
    pub fn validate(&self) -> Result<(), InvalidEntry> {
        if self.name.trim().is_empty() {
            return Err(InvalidEntry::EmptyName);
        }
        if !self.url_template.contains(PLACEHOLDER) {
            return Err(InvalidEntry::MissingPlaceholder(self.name.clone()));
        }
        Ok(())
    }

    /// Whether this engine can be selected with a `!shortcut`
    pub fn has_shortcut(&self) -> bool {
        !self.shortcut.is_empty()
    }
}

impl fmt::Display for EngineDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_shortcut() {
            write!(f, "{} (!{})", self.name, self.shortcut)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

/// Why a catalog entry was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidEntry {
    #[error("malformed entry: {0}")]
    Shape(String),
    #[error("entry has an empty name")]
    EmptyName,
    #[error("url template of '{0}' has no %s placeholder")]
    MissingPlaceholder(String),
}
