//! Wire models exchanged with the proxy's admin API.

pub mod credentials;
pub mod errors;
pub mod model_info;
pub mod router_settings;

pub use credentials::Credentials;
pub use errors::ErrorResponse;
pub use model_info::{ModelInfo, ModelInfoResponse};
pub use router_settings::{
    CallbacksResponse, FALLBACKS_KEY, RouterSettings, UpdateRouterSettingsRequest,
};
