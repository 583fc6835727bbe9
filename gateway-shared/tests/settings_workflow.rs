//! End-to-end flow of the router settings page against a scripted proxy:
//! load, edit, save, and fallback edits sharing the same persist call.

use std::cell::RefCell;

use async_trait::async_trait;
use serde_json::{Value, json};
use shared::fallbacks::fallback_rows;
use shared::models::{CallbacksResponse, Credentials, RouterSettings, UpdateRouterSettingsRequest};
use shared::service::{load_router_settings, save_router_settings};
use shared::{
    FallbackChange, FallbackEntry, NotificationKind, RouterSettingsService, SettingsEditor,
};

struct ScriptedProxy {
    body: Value,
    fail_persist: bool,
    persisted: RefCell<Vec<UpdateRouterSettingsRequest>>,
}

impl ScriptedProxy {
    fn new(body: Value) -> Self {
        Self {
            body,
            fail_persist: false,
            persisted: RefCell::new(Vec::new()),
        }
    }
}

#[async_trait(?Send)]
impl RouterSettingsService for ScriptedProxy {
    type Error = String;

    async fn fetch_router_settings(
        &self,
        _credentials: &Credentials,
    ) -> Result<CallbacksResponse, String> {
        serde_json::from_value(self.body.clone()).map_err(|err| err.to_string())
    }

    async fn persist_router_settings(
        &self,
        _access_token: &str,
        request: &UpdateRouterSettingsRequest,
    ) -> Result<(), String> {
        if self.fail_persist {
            return Err("proxy unreachable".to_string());
        }
        self.persisted.borrow_mut().push(request.clone());
        Ok(())
    }
}

fn credentials() -> Credentials {
    Credentials::from_parts(Some("sk-admin"), Some("default_user_id"), Some("proxy_admin"))
        .unwrap()
}

fn proxy_body() -> Value {
    json!({
        "status": "success",
        "callbacks": [],
        "router_settings": {
            "routing_strategy": "simple-shuffle",
            "routing_strategy_args": {"ttl": 60},
            "num_retries": 2,
            "fallbacks": [{"gpt-4": ["gpt-3.5", "claude"]}]
        }
    })
}

#[tokio::test]
async fn unchanged_save_round_trips_every_setting() {
    let proxy = ScriptedProxy::new(proxy_body());
    let settings = load_router_settings(&proxy, &credentials()).await;
    let editor = SettingsEditor::from_settings(settings.clone());

    let notification = save_router_settings(&proxy, "sk-admin", editor.build_payload()).await;
    assert_eq!(notification.kind, NotificationKind::Success);

    let persisted = proxy.persisted.borrow();
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0].router_settings, settings);
    assert_eq!(
        persisted[0].router_settings.get("routing_strategy_args"),
        Some(&json!({"ttl": 60}))
    );
}

#[tokio::test]
async fn edited_field_is_the_only_change() {
    let proxy = ScriptedProxy::new(proxy_body());
    let settings = load_router_settings(&proxy, &credentials()).await;
    let mut editor = SettingsEditor::from_settings(settings.clone());
    editor.set_text("routing_strategy", "least-busy");

    save_router_settings(&proxy, "sk-admin", editor.build_payload()).await;

    let persisted = proxy.persisted.borrow();
    let sent = &persisted[0].router_settings;
    assert_eq!(sent.get("routing_strategy"), Some(&json!("least-busy")));
    for (key, value) in settings.iter().filter(|(key, _)| *key != "routing_strategy") {
        assert_eq!(sent.get(key), Some(value));
    }
}

#[tokio::test]
async fn failed_save_reports_and_keeps_editor_state() {
    let mut proxy = ScriptedProxy::new(proxy_body());
    proxy.fail_persist = true;
    let settings = load_router_settings(&proxy, &credentials()).await;
    let mut editor = SettingsEditor::from_settings(settings);
    editor.set_text("num_retries", "5");

    let notification = save_router_settings(&proxy, "sk-admin", editor.build_payload()).await;
    assert!(notification.is_error());
    assert_eq!(
        notification.message,
        "Failed to update router settings: proxy unreachable"
    );
    assert_eq!(editor.row("num_retries").map(|row| row.text()), Some("5"));
}

#[tokio::test]
async fn missing_router_settings_renders_empty_tables() {
    let proxy = ScriptedProxy::new(json!({"callbacks": []}));
    let settings = load_router_settings(&proxy, &credentials()).await;
    assert!(SettingsEditor::from_settings(settings.clone()).is_empty());
    assert!(fallback_rows(&settings).is_empty());
}

#[tokio::test]
async fn fallback_edit_is_persisted_with_other_settings() {
    let proxy = ScriptedProxy::new(proxy_body());
    let settings = load_router_settings(&proxy, &credentials()).await;
    let mut editor = SettingsEditor::from_settings(settings);

    let entry = FallbackEntry::new("claude", ["gpt-4"]).unwrap();
    assert!(editor.apply_fallback_change(&FallbackChange::Upsert(entry)));
    save_router_settings(&proxy, "sk-admin", editor.settings().clone()).await;

    let persisted = proxy.persisted.borrow();
    let sent: &RouterSettings = &persisted[0].router_settings;
    assert_eq!(
        sent.get("fallbacks"),
        Some(&json!([{"gpt-4": ["gpt-3.5", "claude"]}, {"claude": ["gpt-4"]}]))
    );
    assert_eq!(sent.get("num_retries"), Some(&json!(2)));
    assert_eq!(fallback_rows(sent).len(), 2);
}

#[tokio::test]
async fn fallback_edit_after_save_keeps_saved_settings() {
    let proxy = ScriptedProxy::new(proxy_body());
    let settings = load_router_settings(&proxy, &credentials()).await;
    let mut editor = SettingsEditor::from_settings(settings);

    editor.set_text("num_retries", "5");
    let payload = editor.build_payload();
    let notification = save_router_settings(&proxy, "sk-admin", payload.clone()).await;
    assert!(!notification.is_error());
    editor.mark_saved(payload);

    let entry = FallbackEntry::new("claude", ["gpt-4"]).unwrap();
    assert!(editor.apply_fallback_change(&FallbackChange::Upsert(entry)));
    save_router_settings(&proxy, "sk-admin", editor.settings().clone()).await;

    let persisted = proxy.persisted.borrow();
    assert_eq!(persisted.len(), 2);
    let sent = &persisted[1].router_settings;
    assert_eq!(sent.get("num_retries"), Some(&json!(5)));
    assert_eq!(sent.get("routing_strategy"), Some(&json!("simple-shuffle")));
    assert_eq!(fallback_rows(sent).len(), 2);
}
