//! Operator identity used to authorize admin calls.

use serde::{Deserialize, Serialize};

/// Identity of the signed-in operator.
///
/// The proxy authorizes every admin call with the bearer token; the user id
/// and role scope what the config endpoint reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Proxy key sent as the bearer token.
    pub access_token: String,
    /// Operator's user id.
    pub user_id: String,
    /// Operator's role, e.g. `proxy_admin`.
    pub user_role: String,
}

impl Credentials {
    /// Builds credentials only when every part is present and non-blank.
    #[must_use]
    pub fn from_parts(
        access_token: Option<&str>,
        user_id: Option<&str>,
        user_role: Option<&str>,
    ) -> Option<Self> {
        let present = |part: Option<&str>| {
            part.map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };
        Some(Self {
            access_token: present(access_token)?,
            user_id: present(user_id)?,
            user_role: present(user_role)?,
        })
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn bearer(&self) -> String {
        bearer(&self.access_token)
    }
}

/// Formats an access token as a bearer `Authorization` value.
#[must_use]
pub fn bearer(access_token: &str) -> String {
    format!("Bearer {access_token}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_requires_every_part() {
        assert!(
            Credentials::from_parts(Some("sk-1234"), Some("admin"), Some("proxy_admin")).is_some()
        );
        assert!(Credentials::from_parts(None, Some("admin"), Some("proxy_admin")).is_none());
        assert!(Credentials::from_parts(Some("sk-1234"), None, Some("proxy_admin")).is_none());
        assert!(Credentials::from_parts(Some("sk-1234"), Some("admin"), None).is_none());
    }

    #[test]
    fn test_from_parts_rejects_blank_values() {
        assert!(
            Credentials::from_parts(Some("  "), Some("admin"), Some("proxy_admin")).is_none()
        );
        assert!(
            Credentials::from_parts(Some("sk-1234"), Some(""), Some("proxy_admin")).is_none()
        );
    }

    #[test]
    fn test_from_parts_trims() {
        let credentials =
            Credentials::from_parts(Some(" sk-1234 "), Some("admin"), Some("proxy_admin"))
                .unwrap();
        assert_eq!(credentials.access_token, "sk-1234");
        assert_eq!(credentials.bearer(), "Bearer sk-1234");
    }
}
