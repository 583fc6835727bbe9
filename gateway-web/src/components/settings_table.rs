use shared::SettingRow;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::{Callback, Html, Properties, TargetCast, function_component, html};

#[derive(Properties, PartialEq)]
pub struct SettingsTableProps {
    pub rows: Vec<SettingRow>,
    /// Emits `(key, text)` whenever a field changes.
    pub on_edit: Callback<(String, String)>,
}

/// Editable table of router settings.
#[function_component(SettingsTable)]
pub fn settings_table(props: &SettingsTableProps) -> Html {
    html! {
        <div class="card bg-base-200 shadow">
            <div class="card-body overflow-x-auto">
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Setting"}</th>
                            <th>{"Value"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for props.rows.iter().map(|row| setting_row(row, &props.on_edit)) }
                    </tbody>
                </table>
            </div>
        </div>
    }
}

fn setting_row(row: &SettingRow, on_edit: &Callback<(String, String)>) -> Html {
    let key = row.key().to_string();
    let field = if row.is_multiline() {
        let on_edit = on_edit.clone();
        let key = key.clone();
        let oninput = Callback::from(move |event: yew::InputEvent| {
            let target: HtmlTextAreaElement = event.target_unchecked_into();
            on_edit.emit((key.clone(), target.value()));
        });
        html! {
            <textarea
                class="textarea textarea-bordered w-full font-mono text-sm"
                name={row.key().to_string()}
                rows="6"
                value={row.text().to_string()}
                {oninput}
            />
        }
    } else {
        let on_edit = on_edit.clone();
        let key = key.clone();
        let oninput = Callback::from(move |event: yew::InputEvent| {
            let target: HtmlInputElement = event.target_unchecked_into();
            on_edit.emit((key.clone(), target.value()));
        });
        html! {
            <input
                class="input input-bordered w-full"
                type="text"
                name={row.key().to_string()}
                value={row.text().to_string()}
                {oninput}
            />
        }
    };

    html! {
        <tr key={key}>
            <td>
                <span class="font-medium">{ row.key().to_string() }</span>
                if let Some(explanation) = row.explanation() {
                    <p class="mt-1 text-xs italic text-base-content/60">{ explanation }</p>
                }
            </td>
            <td>{ field }</td>
        </tr>
    }
}
