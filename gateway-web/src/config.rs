//! Console configuration module
//!
//! Values are resolved at build time from the environment so a single static
//! bundle can be pointed at a given proxy.

/// Console configuration for the proxy endpoint and external links
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Base URL of the proxy admin API; empty means the serving origin
    pub proxy_base_url: String,
    /// Documentation URL
    pub documentation_url: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            proxy_base_url: option_env!("GATEWAY_PROXY_BASE_URL")
                .unwrap_or_default()
                .trim_end_matches('/')
                .to_string(),
            documentation_url: option_env!("GATEWAY_DOCUMENTATION_URL")
                .unwrap_or("https://docs.litellm.ai/docs/routing")
                .to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Create a new console configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the proxy base URL
    pub fn proxy_base_url(&self) -> &str {
        &self.proxy_base_url
    }

    /// Get the documentation URL
    pub fn documentation_url(&self) -> &str {
        &self.documentation_url
    }
}
