//! Router settings as exchanged with the proxy's config endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reserved router setting holding the ordered list of model fallbacks.
pub const FALLBACKS_KEY: &str = "fallbacks";

/// Router configuration as reported by the proxy.
///
/// Values are kept as raw JSON so strings, numbers and nested objects survive
/// a read/write cycle untouched. Keys keep the order the proxy sent them in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouterSettings(Map<String, Value>);

impl RouterSettings {
    /// Creates an empty settings mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Inserts or replaces a setting, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Iterates the settings in proxy order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Number of settings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the proxy reported no settings at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the `fallbacks` entries when present and well-formed.
    ///
    /// A missing key, `null`, or any non-array value yields `None`.
    #[must_use]
    pub fn fallbacks(&self) -> Option<&Vec<Value>> {
        self.0.get(FALLBACKS_KEY).and_then(Value::as_array)
    }

    /// Replaces the `fallbacks` list, keeping the key's position when it
    /// already exists.
    pub fn set_fallbacks(&mut self, entries: Vec<Value>) {
        self.0.insert(FALLBACKS_KEY.to_string(), Value::Array(entries));
    }
}

impl FromIterator<(String, Value)> for RouterSettings {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Response body of `GET /get/config/callbacks`.
///
/// The proxy also reports callbacks and alerting configuration on this
/// endpoint; only the router settings are consumed here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallbacksResponse {
    /// Router settings, absent when the proxy has none configured.
    #[serde(default)]
    pub router_settings: Option<RouterSettings>,
}

impl CallbacksResponse {
    /// Router settings from the response, empty when the proxy omitted them.
    #[must_use]
    pub fn into_router_settings(self) -> RouterSettings {
        self.router_settings.unwrap_or_default()
    }
}

/// Request body of `POST /config/update`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateRouterSettingsRequest {
    /// Complete settings mapping; the proxy replaces its router settings
    /// with it.
    pub router_settings: RouterSettings,
}

impl UpdateRouterSettingsRequest {
    /// Wraps `router_settings` into an update body.
    #[must_use]
    pub fn new(router_settings: RouterSettings) -> Self {
        Self { router_settings }
    }
}
