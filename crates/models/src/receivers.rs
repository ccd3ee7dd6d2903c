use crate::Provenance;
use std::collections::BTreeMap;

/// A named contact point, which delivers notifications through one or more integrations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Receiver {
    pub uid: String,
    pub name: String,
    pub integrations: Vec<Integration>,
    pub provenance: Provenance,
}

/// A single notification channel of a Receiver, such as an email or webhook target.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Integration {
    pub uid: String,
    pub name: String,
    /// Kind of the integration, like "email" or "slack".
    pub integration_type: String,
    pub disable_resolve_message: bool,
    /// Non-secret settings of the integration.
    pub settings: serde_json::Map<String, serde_json::Value>,
    /// Secret settings, which are write-only. Values are encrypted at rest.
    pub secure_settings: BTreeMap<String, String>,
}

impl Integration {
    /// Names of secure settings which currently hold a value.
    /// Values themselves are never surfaced.
    pub fn secure_fields(&self) -> BTreeMap<String, bool> {
        self.secure_settings
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, _)| (key.clone(), true))
            .collect()
    }
}
