use crate::{config::ConsoleConfig, models::app_state::AppState, routes::MainRoute};
use strum::IntoEnumIterator;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let user_id = use_selector(|state: &AppState| {
        state
            .credentials
            .as_ref()
            .map(|credentials| credentials.user_id.clone())
    });
    let config = ConsoleConfig::new();

    let nav_items = MainRoute::iter()
        .filter_map(|route| route.nav_label().map(|label| (route, label)))
        .map(|(route, label)| {
            let active = (props.current_route.as_ref() == Some(&route)).then_some("menu-active");
            html! {
                <li>
                    <Link<MainRoute> to={route} classes={classes!(active)}>
                        { label }
                    </Link<MainRoute>>
                </li>
            }
        })
        .collect::<Html>();

    let on_logout = props.on_logout.clone().map(|callback| {
        Callback::from(move |_: MouseEvent| callback.emit(()))
    });

    html! {
        <nav class="navbar justify-between bg-base-300">
            <Link<MainRoute> to={MainRoute::RouterSettings} classes="btn btn-ghost text-lg">
                {"Gateway Admin"}
            </Link<MainRoute>>
            <ul class="menu menu-horizontal">
                { nav_items }
            </ul>
            <div class="flex items-center gap-2">
                <a
                    class="btn btn-ghost btn-sm"
                    href={config.documentation_url().to_string()}
                    target="_blank"
                    rel="noopener noreferrer"
                    title="Routing documentation"
                >
                    <Icon icon_id={IconId::HeroiconsOutlineQuestionMarkCircle} class="h-5 w-5" />
                </a>
                if let Some(user_id) = (*user_id).clone() {
                    <span class="text-sm text-base-content/80 mr-2">{ user_id }</span>
                }
                if let Some(onclick) = on_logout {
                    <button class="btn btn-ghost btn-sm gap-1" type="button" {onclick}>
                        <Icon icon_id={IconId::HeroiconsOutlineArrowRightOnRectangle} class="h-5 w-5" />
                        {"Sign out"}
                    </button>
                }
            </div>
        </nav>
    }
}
