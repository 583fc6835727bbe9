use crate::{api::GatewayClient, models::app_state::AppState, routes::MainRoute};
use reqwest::StatusCode;
use shared::models::Credentials;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::hooks::use_navigator;

/// Roles the proxy recognises for console operators.
pub const USER_ROLES: [&str; 4] = [
    "proxy_admin",
    "proxy_admin_viewer",
    "internal_user",
    "internal_user_viewer",
];

#[derive(yew::Properties, PartialEq)]
pub struct LoginPageProps {
    #[prop_or_default]
    pub on_success: Option<Callback<AppState>>,
}

/// Maps a rejected sign-in to the message shown under the form.
pub fn sign_in_error(status: Option<StatusCode>) -> String {
    status.map_or_else(
        || "Unable to reach the proxy".to_string(),
        |status| match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => "Invalid access key".to_string(),
            _ => format!("Sign in failed: {status}"),
        },
    )
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let access_token = use_state(String::new);
    let user_id = use_state(String::new);
    let user_role = use_state(|| USER_ROLES[0].to_string());
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();

    let onsubmit = {
        let access_token = access_token.clone();
        let user_id = user_id.clone();
        let user_role = user_role.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let on_success = props.on_success.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(credentials) = Credentials::from_parts(
                Some(access_token.as_str()),
                Some(user_id.as_str()),
                Some(user_role.as_str()),
            ) else {
                error_handle.set(Some("Enter an access key and user id".to_string()));
                return;
            };
            loading_handle.set(true);
            error_handle.set(None);
            let on_success_cb = on_success.clone();
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let navigator_handle = navigator.clone();
            spawn_local(async move {
                // The model list doubles as a key check.
                match GatewayClient::shared()
                    .model_info(&credentials.access_token)
                    .await
                {
                    Ok(response) => {
                        let state = AppState {
                            model_names: response.model_names(),
                            ..AppState::signed_in(credentials)
                        };
                        if let Some(ref nav) = navigator_handle {
                            nav.push(&MainRoute::RouterSettings);
                        }
                        if let Some(callback) = on_success_cb {
                            callback.emit(state);
                        }
                    }
                    Err(err) => error_ref.set(Some(sign_in_error(err.status()))),
                }
                loading_ref.set(false);
            });
        })
    };

    let on_token_change = {
        let access_token = access_token.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                access_token.set(input.value());
            }
        })
    };

    let on_user_id_change = {
        let user_id = user_id.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                user_id.set(input.value());
            }
        })
    };

    let on_role_change = {
        let user_role = user_role.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                user_role.set(select.value());
            }
        })
    };

    let is_busy = *loading;
    let disable_submit = access_token.trim().is_empty() || user_id.trim().is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Sign in to the gateway"}</h2>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="access_token">
                            <span class="label-text">{"Access key"}</span>
                        </label>
                        <input
                            id="access_token"
                            class="input input-bordered"
                            type="password"
                            placeholder="sk-..."
                            required=true
                            value={(*access_token).clone()}
                            oninput={on_token_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="user_id">
                            <span class="label-text">{"User ID"}</span>
                        </label>
                        <input
                            id="user_id"
                            class="input input-bordered"
                            type="text"
                            required=true
                            value={(*user_id).clone()}
                            oninput={on_user_id_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="user_role">
                            <span class="label-text">{"Role"}</span>
                        </label>
                        <select id="user_role" class="select select-bordered" onchange={on_role_change}>
                            { for USER_ROLES.iter().map(|role| html! {
                                <option value={*role} selected={*role == user_role.as_str()}>{ *role }</option>
                            }) }
                        </select>
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Signing in..." } else { "Sign in" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
