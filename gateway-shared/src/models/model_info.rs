//! Deployed models listed by the proxy.

use serde::{Deserialize, Serialize};

/// A single deployment reported by `GET /model/info`.
///
/// The proxy returns far more detail per deployment; only the public model
/// name matters to the console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Public model name clients request.
    pub model_name: String,
}

/// Response body of `GET /model/info`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfoResponse {
    /// One entry per deployment.
    #[serde(default)]
    pub data: Vec<ModelInfo>,
}

impl ModelInfoResponse {
    /// Public model names in proxy order, without duplicates.
    ///
    /// Several deployments can share one public name (load-balanced groups),
    /// so the raw list is de-duplicated.
    #[must_use]
    pub fn model_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::with_capacity(self.data.len());
        for info in &self.data {
            if !info.model_name.is_empty() && !names.contains(&info.model_name) {
                names.push(info.model_name.clone());
            }
        }
        names
    }
}
