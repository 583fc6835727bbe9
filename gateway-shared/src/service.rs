//! Load/save workflow against the proxy's admin API.
//!
//! The HTTP client lives in the web crate; this module only depends on the
//! [`RouterSettingsService`] seam so the workflow can be driven by a fake in
//! tests.

use std::fmt::Display;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::models::{CallbacksResponse, Credentials, RouterSettings, UpdateRouterSettingsRequest};
use crate::notification::Notification;

/// Admin calls the settings page depends on.
///
/// Futures are `?Send`: the browser implementation holds `JsValue`s across
/// await points.
#[async_trait(?Send)]
pub trait RouterSettingsService {
    /// Failure reported by the implementation, shown to the operator.
    type Error: Display;

    /// Reads the proxy's current configuration (`getCallbacksCall`).
    ///
    /// # Errors
    /// Returns the implementation's error when the request fails or the body
    /// cannot be decoded.
    async fn fetch_router_settings(
        &self,
        credentials: &Credentials,
    ) -> Result<CallbacksResponse, Self::Error>;

    /// Persists router settings (`setCallbacksCall`).
    ///
    /// # Errors
    /// Returns the implementation's error when the request fails or the proxy
    /// rejects the update.
    async fn persist_router_settings(
        &self,
        access_token: &str,
        request: &UpdateRouterSettingsRequest,
    ) -> Result<(), Self::Error>;
}

/// Fetches the router settings for display.
///
/// A failed fetch is logged and yields empty settings; the page has no error
/// state for loading.
pub async fn load_router_settings<S>(service: &S, credentials: &Credentials) -> RouterSettings
where
    S: RouterSettingsService + ?Sized,
{
    match service.fetch_router_settings(credentials).await {
        Ok(response) => response.into_router_settings(),
        Err(err) => {
            warn!(user_id = %credentials.user_id, error = %err, "failed to load router settings");
            RouterSettings::new()
        }
    }
}

/// Persists `settings` once and reports the outcome as a notification.
///
/// Failures are not retried.
pub async fn save_router_settings<S>(
    service: &S,
    access_token: &str,
    settings: RouterSettings,
) -> Notification
where
    S: RouterSettingsService + ?Sized,
{
    let request = UpdateRouterSettingsRequest::new(settings);
    let result = service.persist_router_settings(access_token, &request).await;
    match &result {
        Ok(()) => info!(settings = request.router_settings.len(), "router settings saved"),
        Err(err) => warn!(error = %err, "router settings update failed"),
    }
    Notification::for_save_result(&result)
}
