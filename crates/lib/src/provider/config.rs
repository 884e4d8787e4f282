//! Provider configuration.

use serde::{Deserialize, Serialize};

/// Which record fields are visible to key enumeration and lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyScope {
    /// Only fields declared directly on the record's own type
    #[default]
    DeclaredOnly,
    /// Declared fields followed by the fields of each embedded base record
    IncludeInherited,
}

/// Settings for [`RecordProvider`](super::RecordProvider).
///
/// ```
/// # use structpath::provider::{KeyScope, ProviderConfig};
/// let config = ProviderConfig::from_json_str(r#"{ "key_scope": "include_inherited" }"#)?;
/// assert_eq!(config.key_scope, KeyScope::IncludeInherited);
///
/// // Missing settings fall back to defaults
/// let config = ProviderConfig::from_json_str("{}")?;
/// assert_eq!(config.key_scope, KeyScope::DeclaredOnly);
/// # Ok::<(), structpath::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Field visibility for records
    pub key_scope: KeyScope,
}

impl ProviderConfig {
    /// Decodes a configuration from JSON text.
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        serde_json::from_str(json).map_err(crate::Error::Config)
    }

    /// Sets the key scope.
    pub fn with_key_scope(mut self, key_scope: KeyScope) -> Self {
        self.key_scope = key_scope;
        self
    }

    /// Returns true if inherited fields are visible
    pub fn include_inherited(&self) -> bool {
        self.key_scope == KeyScope::IncludeInherited
    }
}
