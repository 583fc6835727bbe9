use std::rc::Rc;

use shared::models::RouterSettings;
use shared::{FallbackChange, Notification, SettingsEditor};
use yew::Reducible;

/// Messages driving the router settings page.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsAction {
    /// Settings arrived from the proxy.
    Loaded(RouterSettings),
    /// The operator typed into a setting's field.
    Edited { key: String, text: String },
    /// The fallback editor changed a mapping.
    Fallback(FallbackChange),
    /// The proxy accepted this payload.
    Saved(RouterSettings),
    /// A persist call finished.
    Notify(Notification),
    DismissNotification,
}

/// View state of the router settings page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsState {
    pub editor: SettingsEditor,
    pub notification: Option<Notification>,
}

impl Reducible for SettingsState {
    type Action = SettingsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SettingsAction::Loaded(settings) => {
                next.editor = SettingsEditor::from_settings(settings);
            }
            SettingsAction::Edited { key, text } => {
                if !next.editor.set_text(&key, text) {
                    return self;
                }
            }
            SettingsAction::Fallback(change) => {
                if !next.editor.apply_fallback_change(&change) {
                    return self;
                }
            }
            SettingsAction::Saved(settings) => next.editor.mark_saved(settings),
            SettingsAction::Notify(notification) => next.notification = Some(notification),
            SettingsAction::DismissNotification => next.notification = None,
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::FallbackEntry;

    fn loaded() -> Rc<SettingsState> {
        let settings: RouterSettings = serde_json::from_value(json!({
            "routing_strategy": "simple-shuffle",
            "fallbacks": [{"gpt-4": ["gpt-3.5"]}]
        }))
        .unwrap();
        Rc::new(SettingsState::default()).reduce(SettingsAction::Loaded(settings))
    }

    #[test]
    fn test_loaded_seeds_rows() {
        let state = loaded();
        assert_eq!(state.editor.rows().len(), 2);
        assert!(state.notification.is_none());
    }

    #[test]
    fn test_edit_updates_row_text() {
        let state = loaded().reduce(SettingsAction::Edited {
            key: "routing_strategy".to_string(),
            text: "least-busy".to_string(),
        });
        assert_eq!(
            state.editor.row("routing_strategy").map(|row| row.text()),
            Some("least-busy")
        );
    }

    #[test]
    fn test_unknown_edit_keeps_same_state() {
        let state = loaded();
        let next = state.clone().reduce(SettingsAction::Edited {
            key: "missing".to_string(),
            text: "1".to_string(),
        });
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn test_fallback_change_updates_settings() {
        let entry = FallbackEntry::new("claude", ["gpt-4"]).unwrap();
        let state = loaded().reduce(SettingsAction::Fallback(FallbackChange::Upsert(entry)));
        assert_eq!(
            state.editor.settings().get("fallbacks"),
            Some(&json!([{"gpt-4": ["gpt-3.5"]}, {"claude": ["gpt-4"]}]))
        );
    }

    #[test]
    fn test_fallback_change_after_save_keeps_saved_values() {
        let state = loaded().reduce(SettingsAction::Edited {
            key: "routing_strategy".to_string(),
            text: "least-busy".to_string(),
        });
        let payload = state.editor.build_payload();
        let state = state.reduce(SettingsAction::Saved(payload));

        let entry = FallbackEntry::new("claude", ["gpt-4"]).unwrap();
        let state = state.reduce(SettingsAction::Fallback(FallbackChange::Upsert(entry)));
        assert_eq!(
            state.editor.settings().get("routing_strategy"),
            Some(&json!("least-busy"))
        );
        assert!(!state.editor.has_changes());
    }

    #[test]
    fn test_notification_lifecycle() {
        let state = loaded().reduce(SettingsAction::Notify(Notification::error("boom")));
        assert!(state.notification.as_ref().is_some_and(Notification::is_error));
        let state = state.reduce(SettingsAction::DismissNotification);
        assert!(state.notification.is_none());
    }
}
