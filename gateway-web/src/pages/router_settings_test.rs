//! Rendering tests for the router settings page.

use wasm_bindgen_test::*;
use yew::{AttrValue, LocalServerRenderer};

use super::router_settings::{SettingsPage, SettingsPageProps};

wasm_bindgen_test_configure!(run_in_browser);

async fn render(access_token: Option<&'static str>) -> String {
    LocalServerRenderer::<SettingsPage>::with_props(SettingsPageProps {
        access_token: access_token.map(AttrValue::from),
        user_id: Some(AttrValue::from("admin")),
        user_role: Some(AttrValue::from("proxy_admin")),
        model_names: vec!["gpt-4".to_string(), "claude".to_string()],
    })
    .hydratable(false)
    .render()
    .await
}

#[wasm_bindgen_test]
async fn renders_nothing_without_access_token() {
    assert_eq!(render(None).await, "");
    assert_eq!(render(Some("   ")).await, "");
}

#[wasm_bindgen_test]
async fn renders_general_tab_with_access_token() {
    let rendered = render(Some("sk-1234")).await;
    assert!(rendered.contains("General Settings"));
    assert!(rendered.contains("Fallbacks"));
    assert!(rendered.contains("Router Settings"));
    assert!(rendered.contains("Save Changes"));
}
