use shared::fallbacks::fallback_rows;
use shared::models::RouterSettings;
use yew::{Callback, Html, Properties, function_component, html};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct FallbackTableProps {
    pub settings: RouterSettings,
    /// Shows a remove button per row when set.
    #[prop_or_default]
    pub on_remove: Option<Callback<String>>,
}

/// Key for a table row; models may repeat across fallback entries.
fn row_key(index: usize, model: &str) -> String {
    format!("{index}:{model}")
}

/// Read-only listing of the configured model fallbacks.
#[function_component(FallbackTable)]
pub fn fallback_table(props: &FallbackTableProps) -> Html {
    let rows = fallback_rows(&props.settings);

    html! {
        <table class="table">
            <thead>
                <tr>
                    <th>{"Model Name"}</th>
                    <th>{"Fallbacks"}</th>
                    if props.on_remove.is_some() {
                        <th></th>
                    }
                </tr>
            </thead>
            <tbody>
                { for rows.into_iter().enumerate().map(|(index, row)| {
                    let remove = props.on_remove.clone().map(|on_remove| {
                        let model = row.model.clone();
                        let onclick = Callback::from(move |_: yew::MouseEvent| {
                            on_remove.emit(model.clone());
                        });
                        html! {
                            <td class="text-right">
                                <button class="btn btn-ghost btn-xs" type="button" title="Remove" {onclick}>
                                    <Icon icon_id={IconId::HeroiconsOutlineTrash} class="w-4 h-4" />
                                </button>
                            </td>
                        }
                    });
                    html! {
                        <tr key={row_key(index, &row.model)}>
                            <td>{ row.model.clone() }</td>
                            <td>{ row.fallbacks }</td>
                            { remove.unwrap_or_default() }
                        </tr>
                    }
                }) }
            </tbody>
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_keys_do_not_collide() {
        assert_ne!(row_key(1, "1a"), row_key(11, "a"));
        assert_eq!(row_key(0, "gpt-4"), "0:gpt-4");
    }
}
