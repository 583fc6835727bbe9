//! Operator-facing descriptions of well-known router settings.

/// Settings that come with a built-in description, in display order.
pub const DOCUMENTED_SETTINGS: [&str; 7] = [
    "routing_strategy_args",
    "routing_strategy",
    "allowed_fails",
    "cooldown_time",
    "num_retries",
    "timeout",
    "retry_after",
];

/// Returns the help text shown under a router setting's label.
#[must_use]
pub fn param_explanation(key: &str) -> Option<&'static str> {
    let text = match key {
        "routing_strategy_args" => "(dict) Arguments to pass to the routing strategy",
        "routing_strategy" => "(string) Routing strategy to use",
        "allowed_fails" => {
            "(int) Number of times a deployment can fail before being added to cooldown"
        }
        "cooldown_time" => "(int) time in seconds to cooldown a deployment after failure",
        "num_retries" => "(int) Number of retries for failed requests. Defaults to 0.",
        "timeout" => "(float) Timeout for requests. Defaults to None.",
        "retry_after" => "(int) Minimum time to wait before retrying a failed request",
        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_documented_setting_has_text() {
        for key in DOCUMENTED_SETTINGS {
            let text = param_explanation(key).unwrap_or_default();
            assert!(text.starts_with('('), "{key} should start with its type hint");
        }
    }

    #[test]
    fn test_unknown_setting() {
        assert_eq!(param_explanation("fallbacks"), None);
        assert_eq!(param_explanation(""), None);
    }
}
