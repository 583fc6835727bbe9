//! Editable view of the router settings.
//!
//! Each setting is held as an explicit [`SettingRow`] carrying the value the
//! proxy reported, the text the row was seeded with and whatever the operator
//! has typed since. Saving never reads rendered markup back.

use serde_json::Value;
use tracing::debug;

use crate::explanations::param_explanation;
use crate::fallbacks::{FallbackChange, apply_fallback_change};
use crate::models::{FALLBACKS_KEY, RouterSettings};

/// Text a setting's input is seeded with.
///
/// Strings render bare, objects and arrays as two-space indented JSON, and
/// every other scalar in its JSON form.
#[must_use]
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Object(_) | Value::Array(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        other => other.to_string(),
    }
}

/// One editable router setting.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingRow {
    key: String,
    explanation: Option<&'static str>,
    original: Value,
    rendered: String,
    text: String,
}

impl SettingRow {
    /// Row for `key`, seeded with the rendered `original` value.
    #[must_use]
    pub fn new(key: impl Into<String>, original: Value) -> Self {
        let key = key.into();
        let rendered = render_value(&original);
        Self {
            explanation: param_explanation(&key),
            text: rendered.clone(),
            key,
            original,
            rendered,
        }
    }

    /// Setting name.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Help text for documented settings.
    #[must_use]
    pub fn explanation(&self) -> Option<&'static str> {
        self.explanation
    }

    /// Value the row was last seeded with.
    #[must_use]
    pub fn original(&self) -> &Value {
        &self.original
    }

    /// Current contents of the row's input.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the row should be edited in a multi-line field.
    #[must_use]
    pub fn is_multiline(&self) -> bool {
        self.rendered.contains('\n')
    }

    /// Whether the operator changed the seeded text.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.text != self.rendered
    }

    /// Replaces the row's input text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Value submitted for this row on save.
    ///
    /// Untouched or emptied rows submit the original value. Edited rows
    /// submit their text verbatim for string settings; other settings submit
    /// the text parsed as JSON, or the raw text when it does not parse.
    #[must_use]
    pub fn resolved_value(&self) -> Value {
        if self.text.is_empty() || !self.is_dirty() {
            return self.original.clone();
        }
        if self.original.is_string() {
            return Value::String(self.text.clone());
        }
        serde_json::from_str(&self.text).unwrap_or_else(|_| Value::String(self.text.clone()))
    }

    fn reseed(&mut self, original: Value) {
        self.rendered = render_value(&original);
        self.text = self.rendered.clone();
        self.original = original;
    }
}

/// Router settings as currently shown to the operator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsEditor {
    settings: RouterSettings,
    rows: Vec<SettingRow>,
}

impl SettingsEditor {
    /// Seeds one row per setting, in proxy order.
    #[must_use]
    pub fn from_settings(settings: RouterSettings) -> Self {
        let rows = settings
            .iter()
            .map(|(key, value)| SettingRow::new(key.clone(), value.clone()))
            .collect();
        Self { settings, rows }
    }

    /// Settings the proxy currently holds, as far as the console knows:
    /// the last load, saved payload or fallback change.
    #[must_use]
    pub fn settings(&self) -> &RouterSettings {
        &self.settings
    }

    /// Rows in proxy order.
    #[must_use]
    pub fn rows(&self) -> &[SettingRow] {
        &self.rows
    }

    /// Row for `key`, if the setting exists.
    #[must_use]
    pub fn row(&self, key: &str) -> Option<&SettingRow> {
        self.rows.iter().find(|row| row.key == key)
    }

    /// Whether there are no settings to edit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Records the operator's input for `key`. Returns `false` for unknown
    /// keys.
    pub fn set_text(&mut self, key: &str, text: impl Into<String>) -> bool {
        let Some(row) = self.rows.iter_mut().find(|row| row.key == key) else {
            return false;
        };
        row.set_text(text);
        true
    }

    /// Whether any row differs from its seeded text.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.rows.iter().any(SettingRow::is_dirty)
    }

    /// Builds the settings submitted on save, keeping proxy order.
    #[must_use]
    pub fn build_payload(&self) -> RouterSettings {
        let payload: RouterSettings = self
            .rows
            .iter()
            .map(|row| (row.key.clone(), row.resolved_value()))
            .collect();
        debug!(
            settings = payload.len(),
            edited = self.rows.iter().filter(|row| row.is_dirty()).count(),
            "built router settings payload"
        );
        payload
    }

    /// Records a payload the proxy accepted.
    ///
    /// Rows are reseeded from the saved values so later persist calls start
    /// from them. Text typed after the payload was built is kept.
    pub fn mark_saved(&mut self, saved: RouterSettings) {
        for row in &mut self.rows {
            let Some(value) = saved.get(&row.key) else {
                continue;
            };
            let pending = (row.resolved_value() != *value).then(|| row.text.clone());
            row.reseed(value.clone());
            if let Some(text) = pending {
                row.text = text;
            }
        }
        self.settings = saved;
    }

    /// Applies a fallback edit and reseeds the `fallbacks` row from it.
    ///
    /// Pending edits on other rows are kept. Returns `true` when the settings
    /// changed.
    pub fn apply_fallback_change(&mut self, change: &FallbackChange) -> bool {
        if !apply_fallback_change(&mut self.settings, change) {
            return false;
        }
        let Some(updated) = self.settings.get(FALLBACKS_KEY).cloned() else {
            return true;
        };
        match self.rows.iter_mut().find(|row| row.key == FALLBACKS_KEY) {
            Some(row) => row.reseed(updated),
            None => self.rows.push(SettingRow::new(FALLBACKS_KEY, updated)),
        }
        true
    }
}
