use crate::api::GatewayClient;
use crate::components::Loading;
use crate::log;
use crate::models::app_state::AppState;
use crate::routes::{MainRoute, switch_with_logout};
use wasm_bindgen_futures::spawn_local;
use yew::suspense::Suspense;
use yew::{Callback, Html, function_component, html, use_effect_with, use_state};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

#[function_component(App)]
pub fn app() -> Html {
    let (_store_state, store_dispatch) = use_store::<AppState>();
    let restored = use_state(|| false);

    {
        let restored = restored.clone();
        let store_dispatch = store_dispatch.clone();
        use_effect_with((), move |_| {
            let state = AppState::restore();
            let access_token = state.access_token().map(str::to_string);
            store_dispatch.set(state);
            restored.set(true);

            // A restored session still needs the model list for the fallback editor.
            if let Some(access_token) = access_token {
                spawn_local(async move {
                    match GatewayClient::shared().model_info(&access_token).await {
                        Ok(response) => {
                            let model_names = response.model_names();
                            store_dispatch.reduce_mut(|state| state.model_names = model_names);
                        }
                        Err(err) => log(&format!("Unable to list models: {err}")),
                    }
                });
            }
            || ()
        });
    }

    let logout_callback = {
        let logout_dispatch = store_dispatch;
        Callback::from(move |()| logout_dispatch.set(AppState::signed_out()))
    };

    html! {
        <Suspense fallback={ html!{ <Loading/> } }>
            if *restored {
                <BrowserRouter>
                    <Switch<MainRoute> render={move |route| switch_with_logout(route, logout_callback.clone())} />
                </BrowserRouter>
            } else {
                <Loading />
            }
        </Suspense>
    }
}
