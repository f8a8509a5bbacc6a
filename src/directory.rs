//! Live component state access.
//!
//! The verifier reads deployed component state through the
//! [`ComponentDirectory`] trait. Handles are resolved by whatever deployed
//! the system; the verifier only reads. [`SnapshotDirectory`] is the
//! file-backed implementation used by the command-line wrapper: it serves
//! reads from a JSON snapshot of live state captured at deployment time.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

/// Errors raised when a live read could not complete.
///
/// Any of these aborts the whole verification run: a state that cannot be
/// read supports no conclusion, so there is no partial report.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Component '{component}' not found in directory")]
    UnknownComponent { component: String },

    #[error("Component '{component}' has no field '{field}'")]
    UnknownField { component: String, field: String },

    #[error("Failed to read deployment snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse deployment snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read access to the live observable state of deployed components.
///
/// All reads are independent and side-effect free; every value comes back
/// as text (addresses as hex strings, numeric telemetry as decimal text).
pub trait ComponentDirectory {
    /// Deployed address of a component
    fn address(&self, component: &str) -> Result<String, FetchError>;

    /// Live `VERSION()` tag of a component
    fn version(&self, component: &str) -> Result<String, FetchError>;

    /// Live `owner()` address of a component
    fn owner(&self, component: &str) -> Result<String, FetchError>;

    /// Live value of a named getter on a component
    fn field(&self, component: &str, field: &str) -> Result<String, FetchError>;
}

/// Captured live state of one component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentState {
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

/// A component directory backed by a JSON snapshot of deployed state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotDirectory {
    components: BTreeMap<String, ComponentState>,
}

impl SnapshotDirectory {
    /// Build from an explicit component -> state map
    pub fn new(components: BTreeMap<String, ComponentState>) -> Self {
        Self { components }
    }

    /// Load a deployment snapshot from a JSON file
    pub fn load(path: &Path) -> Result<Self, FetchError> {
        info!("Loading deployment snapshot from: {:?}", path);
        let file = File::open(path)?;
        let directory: SnapshotDirectory = serde_json::from_reader(file)?;
        info!("Snapshot contains {} component(s)", directory.components.len());
        Ok(directory)
    }

    fn component(&self, component: &str) -> Result<&ComponentState, FetchError> {
        self.components
            .get(component)
            .ok_or_else(|| FetchError::UnknownComponent {
                component: component.to_string(),
            })
    }

    fn named_field<'a>(
        state: &'a ComponentState,
        component: &str,
        field: &str,
    ) -> Result<&'a str, FetchError> {
        let value = match field {
            "version" => state.version.as_deref(),
            "owner" => state.owner.as_deref(),
            _ => state.fields.get(field).map(String::as_str),
        };
        value.ok_or_else(|| FetchError::UnknownField {
            component: component.to_string(),
            field: field.to_string(),
        })
    }
}

impl ComponentDirectory for SnapshotDirectory {
    fn address(&self, component: &str) -> Result<String, FetchError> {
        Ok(self.component(component)?.address.clone())
    }

    fn version(&self, component: &str) -> Result<String, FetchError> {
        let state = self.component(component)?;
        Self::named_field(state, component, "version").map(str::to_string)
    }

    fn owner(&self, component: &str) -> Result<String, FetchError> {
        let state = self.component(component)?;
        Self::named_field(state, component, "owner").map(str::to_string)
    }

    fn field(&self, component: &str, field: &str) -> Result<String, FetchError> {
        let state = self.component(component)?;
        Self::named_field(state, component, field).map(str::to_string)
    }
}
