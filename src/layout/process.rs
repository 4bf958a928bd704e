//! Role-keyed process layer stack.
//!
//! Fabrication processes name their layers symbolically ("M6", "M5",
//! "vias"); the mapping to numeric layer/datatype pairs lives in a JSON
//! document loaded once at start-up. The stack is read-only and is
//! consumed at the persistence boundary; the geometry kernel itself only
//! ever sees the resolved [`LayerRef`] tags.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ProcessError, Result};

use super::LayerRef;

/// Read-only lookup from symbolic layer roles to layer references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcessStack {
    layers: BTreeMap<String, LayerRef>,
}

impl ProcessStack {
    /// Parses a stack from a JSON object of the form
    /// `{"M6": {"layer": 37, "datatype": 0}, ...}`.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::Parse` on malformed JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json).map_err(ProcessError::Parse)?)
    }

    /// Loads a stack from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::Io` if the file cannot be read and
    /// `ProcessError::Parse` on malformed JSON.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(ProcessError::Io)?;
        Self::from_json_str(&json)
    }

    /// Registers or replaces a role.
    pub fn insert(&mut self, role: impl Into<String>, layer: LayerRef) {
        self.layers.insert(role.into(), layer);
    }

    /// Looks up a role, if present.
    #[must_use]
    pub fn layer(&self, role: &str) -> Option<LayerRef> {
        self.layers.get(role).copied()
    }

    /// Looks up a role that callers require to exist.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::UnknownRole` if the stack has no entry for
    /// `role`.
    pub fn require(&self, role: &str) -> Result<LayerRef> {
        self.layer(role)
            .ok_or_else(|| ProcessError::UnknownRole(role.to_owned()).into())
    }
}
