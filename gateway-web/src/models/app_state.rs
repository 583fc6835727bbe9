use gloo_storage::{LocalStorage, Storage};
use shared::models::Credentials;
use yewdux::Store;

const CREDENTIALS_KEY: &str = "gateway.console.credentials";

/// Session-wide state of the console.
#[derive(Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub credentials: Option<Credentials>,
    /// Public model names offered by the fallback editor.
    pub model_names: Vec<String>,
}

impl AppState {
    /// Restores the operator's session from local storage.
    pub fn restore() -> Self {
        Self {
            credentials: LocalStorage::get(CREDENTIALS_KEY).ok(),
            model_names: Vec::new(),
        }
    }

    pub fn signed_in(credentials: Credentials) -> Self {
        if let Err(err) = LocalStorage::set(CREDENTIALS_KEY, &credentials) {
            crate::log(&format!("Unable to persist session: {err}"));
        }
        Self {
            credentials: Some(credentials),
            model_names: Vec::new(),
        }
    }

    pub fn signed_out() -> Self {
        LocalStorage::delete(CREDENTIALS_KEY);
        Self::default()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.credentials
            .as_ref()
            .map(|credentials| credentials.access_token.as_str())
    }
}
