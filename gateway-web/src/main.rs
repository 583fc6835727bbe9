mod api;
mod app;
mod components;
mod config;
mod containers;
mod models;
mod pages;
mod routes;
#[cfg(test)]
mod routes_test;

use app::App;
use wasm_bindgen::prelude::*;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub(crate) fn log(s: &str);
}

#[function_component(ConsoleApp)]
fn console_app() -> Html {
    html! {
        <YewduxRoot>
            <App />
        </YewduxRoot>
    }
}

fn main() {
    // Disable truncation of panic payloads to debug any panics
    std::panic::set_hook(Box::new(|info| {
        if let Some(s) = info.payload().downcast_ref::<String>() {
            web_sys::console::log_1(&format!("Panic: {s}").into());
        } else if let Some(s) = info.payload().downcast_ref::<&str>() {
            web_sys::console::log_1(&format!("Panic: {s}").into());
        } else {
            web_sys::console::log_1(&"Unknown panic".into());
        }
        if let Some(location) = info.location() {
            web_sys::console::log_1(
                &format!(
                    "  at {}:{}:{}",
                    location.file(),
                    location.line(),
                    location.column()
                )
                .into(),
            );
        }
    }));

    log("Starting Gateway Admin console");

    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        log("No document body to mount the console into");
        return;
    };
    Renderer::<ConsoleApp>::with_root(body.into()).render();
}
