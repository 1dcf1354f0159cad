use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::Key;

/// Key under which a pulled settings document is stored.
pub const SITE_CHARACTERISTICS: Key<Value> = Key::new("site_characteristics");

/// Structured data envelope carrying settings pulled during login.
///
/// The envelope never interprets the documents it holds; readers use a [`Key`] to get a typed
/// view of one entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsEnvelope(Map<String, Value>);

impl SettingsEnvelope {
    /// Wraps a pulled settings document under [`SITE_CHARACTERISTICS`].
    pub fn site_characteristics(document: Value) -> Self {
        let mut data = Map::new();
        data.insert(SITE_CHARACTERISTICS.name().to_string(), document);
        Self(data)
    }

    /// Get a value using a type-safe key.
    ///
    /// Returns `None` if the key doesn't exist or if deserialization fails.
    /// Deserialization errors are logged but do not propagate.
    pub fn get<T: DeserializeOwned>(&self, key: Key<T>) -> Option<T> {
        let value = self.0.get(key.name())?;
        match serde_json::from_value::<T>(value.clone()) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Failed to deserialize setting '{}': {:?}", key.name(), e);
                None
            }
        }
    }

    /// The envelope as a JSON object.
    pub fn to_json(&self) -> Value {
        Value::Object(self.0.clone())
    }
}
