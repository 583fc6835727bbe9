use async_trait::async_trait;
use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, Response, StatusCode, header::AUTHORIZATION};
use shared::RouterSettingsService;
use shared::models::credentials::bearer;
use shared::models::{
    CallbacksResponse, Credentials, ErrorResponse, ModelInfoResponse, UpdateRouterSettingsRequest,
};
use thiserror::Error;

use crate::config::ConsoleConfig;

const CALLBACKS_PATH: &str = "get/config/callbacks";
const CONFIG_UPDATE_PATH: &str = "config/update";
const MODEL_INFO_PATH: &str = "model/info";

thread_local! {
    static SHARED_CLIENT: OnceCell<GatewayClient> = const { OnceCell::new() };
}

/// Failure of a proxy admin call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, DNS).
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    /// The proxy answered with a non-success status.
    #[error("proxy returned {status}: {error}")]
    Status {
        status: StatusCode,
        error: ErrorResponse,
    },
    /// The proxy answered with a body that could not be decoded.
    #[error("unexpected response body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    /// HTTP status for errors the proxy answered.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) | Self::Decode(err) => err.status(),
        }
    }
}

/// Client for the proxy's admin endpoints.
#[derive(Clone, Debug)]
pub struct GatewayClient {
    base_url: String,
    client: Client,
}

impl GatewayClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Client shared by every page, targeting the configured proxy or, when
    /// none is configured, the origin serving the console.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| {
                let config = ConsoleConfig::new();
                match config.proxy_base_url() {
                    "" => Self::new(&current_origin().unwrap_or_default()),
                    base_url => Self::new(base_url),
                }
            })
            .clone()
        })
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorized(&self, request: RequestBuilder, access_token: &str) -> RequestBuilder {
        request.header(AUTHORIZATION, bearer(access_token))
    }

    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let error = ErrorResponse::from_body(&body).unwrap_or_else(|| {
            ErrorResponse::new(status.canonical_reason().unwrap_or("request rejected"))
        });
        Err(ApiError::Status { status, error })
    }

    /// Read the proxy configuration, including router settings.
    pub async fn get_callbacks(
        &self,
        credentials: &Credentials,
    ) -> Result<CallbacksResponse, ApiError> {
        let request = self
            .client
            .get(self.api_url(CALLBACKS_PATH))
            .query(&[
                ("user_id", credentials.user_id.as_str()),
                ("user_role", credentials.user_role.as_str()),
            ]);
        let response = self
            .authorized(request, &credentials.access_token)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        Self::check(response)
            .await?
            .json()
            .await
            .map_err(ApiError::Decode)
    }

    /// Persist updated router settings.
    pub async fn set_callbacks(
        &self,
        access_token: &str,
        payload: &UpdateRouterSettingsRequest,
    ) -> Result<(), ApiError> {
        let request = self.client.post(self.api_url(CONFIG_UPDATE_PATH)).json(payload);
        let response = self
            .authorized(request, access_token)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        Self::check(response).await?;
        Ok(())
    }

    /// List deployed models.
    pub async fn model_info(&self, access_token: &str) -> Result<ModelInfoResponse, ApiError> {
        let request = self.client.get(self.api_url(MODEL_INFO_PATH));
        let response = self
            .authorized(request, access_token)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        Self::check(response)
            .await?
            .json()
            .await
            .map_err(ApiError::Decode)
    }
}

/// Origin of the page serving the console; the browser client needs absolute
/// URLs.
fn current_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[async_trait(?Send)]
impl RouterSettingsService for GatewayClient {
    type Error = ApiError;

    async fn fetch_router_settings(
        &self,
        credentials: &Credentials,
    ) -> Result<CallbacksResponse, ApiError> {
        self.get_callbacks(credentials).await
    }

    async fn persist_router_settings(
        &self,
        access_token: &str,
        request: &UpdateRouterSettingsRequest,
    ) -> Result<(), ApiError> {
        self.set_callbacks(access_token, request).await
    }
}
