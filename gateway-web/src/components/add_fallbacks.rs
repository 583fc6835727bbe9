use shared::fallbacks::fallback_candidates;
use shared::{FallbackChange, FallbackEntry};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::{
    AttrValue, Callback, Html, Properties, TargetCast, function_component, html, use_state,
};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct AddFallbacksProps {
    /// Public model names known to the proxy.
    pub models: Vec<String>,
    /// Receives the validated edit; the owner applies and persists it.
    pub on_change: Callback<FallbackChange>,
}

/// Modal form for mapping a model to its fallbacks.
#[function_component(AddFallbacks)]
pub fn add_fallbacks(props: &AddFallbacksProps) -> Html {
    let is_open = use_state(|| false);
    let model = use_state(String::new);
    let selected = use_state(Vec::<String>::new);
    let error = use_state(|| None::<AttrValue>);

    let reset = {
        let is_open = is_open.clone();
        let model = model.clone();
        let selected = selected.clone();
        let error = error.clone();
        move || {
            is_open.set(false);
            model.set(String::new());
            selected.set(Vec::new());
            error.set(None);
        }
    };

    let on_open = {
        let is_open = is_open.clone();
        Callback::from(move |_: yew::MouseEvent| is_open.set(true))
    };

    let on_cancel = {
        let reset = reset.clone();
        Callback::from(move |_: yew::MouseEvent| reset())
    };

    let on_model_change = {
        let model = model.clone();
        let selected = selected.clone();
        Callback::from(move |event: yew::Event| {
            let input: HtmlSelectElement = event.target_unchecked_into();
            let value = input.value();
            selected.set(
                selected
                    .iter()
                    .filter(|candidate| **candidate != value)
                    .cloned()
                    .collect(),
            );
            model.set(value);
        })
    };

    let on_submit = {
        let model = model.clone();
        let selected = selected.clone();
        let error = error.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |event: yew::SubmitEvent| {
            event.prevent_default();
            match FallbackEntry::new(model.as_str(), selected.iter()) {
                Ok(entry) => {
                    on_change.emit(FallbackChange::Upsert(entry));
                    reset();
                }
                Err(err) => error.set(Some(err.to_string().into())),
            }
        })
    };

    let candidates = fallback_candidates(&props.models, model.as_str())
        .map(|candidate| {
            let checked = selected.contains(candidate);
            let onchange = {
                let selected = selected.clone();
                let candidate = candidate.clone();
                Callback::from(move |event: yew::Event| {
                    let input: HtmlInputElement = event.target_unchecked_into();
                    let mut next = (*selected).clone();
                    next.retain(|known| *known != candidate);
                    if input.checked() {
                        next.push(candidate.clone());
                    }
                    selected.set(next);
                })
            };
            html! {
                <label class="label cursor-pointer justify-start gap-3" key={candidate.clone()}>
                    <input type="checkbox" class="checkbox checkbox-sm" {checked} {onchange} />
                    <span class="label-text">{ candidate.clone() }</span>
                </label>
            }
        })
        .collect::<Html>();

    html! {
        <>
            <button class="btn btn-primary mt-4 gap-2" type="button" onclick={on_open}>
                <Icon icon_id={IconId::HeroiconsOutlinePlus} class="w-4 h-4" />
                {"Add Fallbacks"}
            </button>
            if *is_open {
                <div class="modal modal-open">
                    <form class="modal-box space-y-4" onsubmit={on_submit}>
                        <h3 class="font-bold text-lg">{"Add Fallbacks"}</h3>
                        if let Some(message) = (*error).clone() {
                            <div class="alert alert-error"><span>{ message }</span></div>
                        }
                        <div class="form-control">
                            <label class="label" for="fallback-model">
                                <span class="label-text">{"Public Model Name"}</span>
                            </label>
                            <select
                                id="fallback-model"
                                class="select select-bordered"
                                onchange={on_model_change}
                            >
                                <option value="" selected={model.is_empty()}>{"Select a model"}</option>
                                { for props.models.iter().map(|name| html! {
                                    <option value={name.clone()} selected={*name == *model}>
                                        { name.clone() }
                                    </option>
                                }) }
                            </select>
                        </div>
                        <div class="form-control">
                            <span class="label-text">{"Fallback Models"}</span>
                            { candidates }
                        </div>
                        <div class="modal-action">
                            <button class="btn btn-ghost" type="button" onclick={on_cancel}>
                                {"Cancel"}
                            </button>
                            <button class="btn btn-primary" type="submit">
                                {"Add Fallbacks"}
                            </button>
                        </div>
                    </form>
                </div>
            }
        </>
    }
}
