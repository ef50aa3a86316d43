use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// One persisted anomaly row, as the data layer hands it over.
///
/// The engine reads these and never writes them. Every field except `id` is
/// optional and loosely controlled: `content` is free text, `anomaly_set`
/// is the raw taxonomy tag (normalized in [`crate::taxonomy`]), and
/// `configuration` is an opaque JSON blob owned by the caller that the
/// engine carries through untouched.
///
/// `id` is the stable identifier: it seeds every derived property, so two
/// records with the same id synthesize identically forever.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct RawAnomalyRecord {
    pub id: i64,
    pub content: Option<String>,
    pub anomaly_set: Option<String>,
    pub parent_anomaly: Option<i64>,
    pub configuration: Option<serde_json::Value>,
    pub created_at: String,
}

impl RawAnomalyRecord {
    /// A record carrying only its stable identifier.
    ///
    /// Everything optional starts empty; synthesis fills the gaps with its
    /// documented defaults. Mostly useful in tests and examples.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            content: None,
            anomaly_set: None,
            parent_anomaly: None,
            configuration: None,
            created_at: String::new(),
        }
    }

    /// Set the free-text label (builder pattern).
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set the raw taxonomy tag (builder pattern).
    pub fn with_set(mut self, anomaly_set: impl Into<String>) -> Self {
        self.anomaly_set = Some(anomaly_set.into());
        self
    }
}
