//! Router settings page.
//!
//! Loads the proxy's router settings once per operator identity, lets the
//! operator edit them row by row and saves the whole mapping in one call.
//! The fallbacks tab lists model fallbacks and hosts the fallback editor,
//! which reports edits back as [`FallbackChange`] messages.

use shared::FallbackChange;
use shared::models::Credentials;
use shared::service::{load_router_settings, save_router_settings};
use strum::{EnumIter, IntoEnumIterator};
use wasm_bindgen_futures::spawn_local;
use yew::{
    AttrValue, Callback, Html, Properties, classes, function_component, html, use_effect_with,
    use_reducer, use_state,
};
use yew_icons::{Icon, IconId};

use crate::api::GatewayClient;
use crate::components::{AddFallbacks, FallbackTable, NotificationToast, SettingsTable};
use crate::log;
use crate::models::settings_state::{SettingsAction, SettingsState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum SettingsTab {
    General,
    Fallbacks,
}

impl SettingsTab {
    fn label(self) -> &'static str {
        match self {
            Self::General => "General Settings",
            Self::Fallbacks => "Fallbacks",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SettingsPageProps {
    #[prop_or_default]
    pub access_token: Option<AttrValue>,
    #[prop_or_default]
    pub user_id: Option<AttrValue>,
    #[prop_or_default]
    pub user_role: Option<AttrValue>,
    /// Public model names offered by the fallback editor.
    #[prop_or_default]
    pub model_names: Vec<String>,
}

#[function_component(SettingsPage)]
pub fn settings_page(props: &SettingsPageProps) -> Html {
    let state = use_reducer(SettingsState::default);
    let active_tab = use_state(|| SettingsTab::General);

    // Reload whenever the operator identity changes. Stale responses are not
    // cancelled.
    {
        let dispatcher = state.dispatcher();
        let identity = (
            props.access_token.clone(),
            props.user_id.clone(),
            props.user_role.clone(),
        );
        use_effect_with(identity, move |(access_token, user_id, user_role)| {
            if let Some(credentials) = Credentials::from_parts(
                access_token.as_deref(),
                user_id.as_deref(),
                user_role.as_deref(),
            ) {
                spawn_local(async move {
                    let settings =
                        load_router_settings(&GatewayClient::shared(), &credentials).await;
                    log(&format!("Loaded {} router settings", settings.len()));
                    dispatcher.dispatch(SettingsAction::Loaded(settings));
                });
            }
            || ()
        });
    }

    let Some(access_token) = props
        .access_token
        .clone()
        .filter(|token| !token.trim().is_empty())
    else {
        return html! {};
    };

    let on_edit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(key, text): (String, String)| {
            dispatcher.dispatch(SettingsAction::Edited { key, text });
        })
    };

    let on_save = {
        let state = state.clone();
        let access_token = access_token.clone();
        Callback::from(move |_: yew::MouseEvent| {
            let payload = state.editor.build_payload();
            let dispatcher = state.dispatcher();
            let access_token = access_token.clone();
            spawn_local(async move {
                let notification =
                    save_router_settings(&GatewayClient::shared(), &access_token, payload.clone())
                        .await;
                if !notification.is_error() {
                    dispatcher.dispatch(SettingsAction::Saved(payload));
                }
                dispatcher.dispatch(SettingsAction::Notify(notification));
            });
        })
    };

    let on_fallback_change = {
        let state = state.clone();
        let access_token = access_token.clone();
        Callback::from(move |change: FallbackChange| {
            let mut editor = state.editor.clone();
            if !editor.apply_fallback_change(&change) {
                return;
            }
            let payload = editor.settings().clone();
            let dispatcher = state.dispatcher();
            let access_token = access_token.clone();
            dispatcher.dispatch(SettingsAction::Fallback(change));
            spawn_local(async move {
                let notification =
                    save_router_settings(&GatewayClient::shared(), &access_token, payload).await;
                dispatcher.dispatch(SettingsAction::Notify(notification));
            });
        })
    };

    let on_remove_fallback = {
        let on_fallback_change = on_fallback_change.clone();
        Callback::from(move |model: String| {
            on_fallback_change.emit(FallbackChange::Remove(model));
        })
    };

    let on_dismiss = {
        let dispatcher = state.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(SettingsAction::DismissNotification))
    };

    let tabs = SettingsTab::iter()
        .map(|tab| {
            let active = (tab == *active_tab).then_some("tab-active");
            let active_tab = active_tab.clone();
            let onclick = Callback::from(move |_: yew::MouseEvent| active_tab.set(tab));
            html! {
                <button class={classes!("tab", active)} role="tab" type="button" {onclick}>
                    { tab.label() }
                </button>
            }
        })
        .collect::<Html>();

    let panel = match *active_tab {
        SettingsTab::General => html! {
            <div class="space-y-4">
                <h2 class="text-xl font-bold">{"Router Settings"}</h2>
                <SettingsTable rows={state.editor.rows().to_vec()} {on_edit} />
                <button class="btn btn-primary gap-2" type="button" onclick={on_save}>
                    <Icon icon_id={IconId::HeroiconsOutlineCheck} class="w-4 h-4" />
                    {"Save Changes"}
                </button>
            </div>
        },
        SettingsTab::Fallbacks => html! {
            <div class="space-y-4">
                <FallbackTable
                    settings={state.editor.settings().clone()}
                    on_remove={on_remove_fallback}
                />
                <AddFallbacks models={props.model_names.clone()} on_change={on_fallback_change} />
            </div>
        },
    };

    html! {
        <div class="w-full p-4 space-y-4">
            <div role="tablist" class="tabs tabs-bordered">
                { tabs }
            </div>
            { panel }
            <NotificationToast notification={state.notification.clone()} {on_dismiss} />
        </div>
    }
}
