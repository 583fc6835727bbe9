use crate::{containers::layout::Layout, log, models::app_state::AppState, pages::*};
use strum::EnumIter;
use yew::Callback;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{use_selector, use_store};

/// The console routes
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/settings/router")]
    RouterSettings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// Header label, for routes shown in the navigation bar.
    pub fn nav_label(&self) -> Option<&'static str> {
        match self {
            Self::RouterSettings => Some("Router Settings"),
            Self::Home | Self::Login | Self::NotFound => None,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
    pub on_logout: Callback<()>,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let credentials = use_selector(|state: &AppState| state.credentials.clone());
    let model_names = use_selector(|state: &AppState| state.model_names.clone());
    let (_, dispatch) = use_store::<AppState>();
    let on_logout = props.on_logout.clone();

    let Some(credentials) = (*credentials).clone() else {
        return match props.route {
            MainRoute::Login => {
                let on_success = Callback::from(move |state: AppState| dispatch.set(state));
                html! { <LoginPage on_success={Some(on_success)} /> }
            }
            _ => html! { <Redirect<MainRoute> to={MainRoute::Login} /> },
        };
    };

    match props.route {
        MainRoute::Home | MainRoute::Login => {
            html! { <Redirect<MainRoute> to={MainRoute::RouterSettings} /> }
        }
        MainRoute::RouterSettings => html! {
            <Layout current_route={MainRoute::RouterSettings} on_logout={Some(on_logout)}>
                <SettingsPage
                    access_token={AttrValue::from(credentials.access_token)}
                    user_id={AttrValue::from(credentials.user_id)}
                    user_role={AttrValue::from(credentials.user_role)}
                    model_names={(*model_names).clone()}
                />
            </Layout>
        },
        MainRoute::NotFound => html! {
            <Layout current_route={MainRoute::NotFound} on_logout={Some(on_logout)}>
                <ErrorPage />
            </Layout>
        },
    }
}

/// Switch function for the console routes.
pub fn switch_with_logout(route: MainRoute, on_logout: Callback<()>) -> Html {
    log(&format!("Switching to route: {route:?}"));
    html! { <MainRouteView {route} {on_logout} /> }
}
