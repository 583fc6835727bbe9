mod error;
pub mod login;
mod router_settings;

#[cfg(all(test, target_arch = "wasm32"))]
mod router_settings_test;

pub use error::ErrorPage;
pub use login::LoginPage;
pub use router_settings::{SettingsPage, SettingsPageProps};
