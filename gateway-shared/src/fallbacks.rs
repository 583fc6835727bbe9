//! Model fallback mappings stored under the `fallbacks` router setting.
//!
//! The proxy keeps fallbacks as an ordered list of single-key objects, each
//! mapping a public model name to the models tried when it fails:
//! `[{"gpt-4": ["gpt-3.5", "claude"]}]`.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::RouterSettings;

/// One line of the read-only fallback table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackRow {
    /// Model the fallbacks apply to.
    pub model: String,
    /// Fallback models, comma separated.
    pub fallbacks: String,
}

/// Flattens the `fallbacks` setting into table rows.
///
/// Every key of every entry becomes a row. Absent or malformed `fallbacks`
/// yields no rows, as do entries that are not objects.
#[must_use]
pub fn fallback_rows(settings: &RouterSettings) -> Vec<FallbackRow> {
    let Some(entries) = settings.fallbacks() else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(Value::as_object)
        .flat_map(|entry| {
            entry.iter().map(|(model, targets)| FallbackRow {
                model: model.clone(),
                fallbacks: display_targets(targets),
            })
        })
        .collect()
}

fn display_targets(targets: &Value) -> String {
    match targets {
        Value::Array(items) => items.iter().map(plain_text).collect::<Vec<_>>().join(", "),
        other => plain_text(other),
    }
}

fn plain_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Why an operator's fallback selection was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FallbackValidationError {
    /// No model was chosen.
    #[error("select a model to configure fallbacks for")]
    MissingModel,
    /// No fallback model was chosen.
    #[error("select at least one fallback model")]
    NoFallbacks,
    /// The model was listed among its own fallbacks.
    #[error("{0} cannot fall back to itself")]
    SelfFallback(String),
}

/// A validated fallback mapping for a single model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackEntry {
    model: String,
    fallbacks: Vec<String>,
}

impl FallbackEntry {
    /// Validates an operator's selection.
    ///
    /// Blank names are dropped and duplicates collapse to their first
    /// occurrence, so the stored order is the order the operator picked.
    ///
    /// # Errors
    /// Returns a [`FallbackValidationError`] when no model is chosen, no
    /// fallback remains, or the model lists itself as a fallback.
    pub fn new<I, S>(model: &str, fallbacks: I) -> Result<Self, FallbackValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let model = model.trim();
        if model.is_empty() {
            return Err(FallbackValidationError::MissingModel);
        }

        let mut targets: Vec<String> = Vec::new();
        for target in fallbacks {
            let target = target.as_ref().trim();
            if target.is_empty() || targets.iter().any(|known| known == target) {
                continue;
            }
            if target == model {
                return Err(FallbackValidationError::SelfFallback(model.to_string()));
            }
            targets.push(target.to_string());
        }
        if targets.is_empty() {
            return Err(FallbackValidationError::NoFallbacks);
        }

        Ok(Self {
            model: model.to_string(),
            fallbacks: targets,
        })
    }

    /// Model the fallbacks apply to.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Fallback models in the order they are tried.
    #[must_use]
    pub fn fallbacks(&self) -> &[String] {
        &self.fallbacks
    }

    fn targets_value(&self) -> Value {
        Value::Array(self.fallbacks.iter().cloned().map(Value::String).collect())
    }
}

/// Models offered as fallbacks for `model`: every known model but itself.
pub fn fallback_candidates<'a>(
    models: &'a [String],
    model: &'a str,
) -> impl Iterator<Item = &'a String> {
    models.iter().filter(move |candidate| candidate.as_str() != model)
}

/// Edit requested by the fallback editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackChange {
    /// Replace the model's existing mapping in place, or append a new one.
    Upsert(FallbackEntry),
    /// Drop every mapping for the named model.
    Remove(String),
}

/// Applies a fallback edit to the router settings.
///
/// Returns `true` when the settings changed.
pub fn apply_fallback_change(settings: &mut RouterSettings, change: &FallbackChange) -> bool {
    let mut entries = settings.fallbacks().cloned().unwrap_or_default();

    let changed = match change {
        FallbackChange::Upsert(entry) => {
            let targets = entry.targets_value();
            let existing = entries
                .iter_mut()
                .filter_map(Value::as_object_mut)
                .find(|mapping| mapping.contains_key(entry.model()));
            if let Some(mapping) = existing {
                let previous = mapping.insert(entry.model().to_string(), targets.clone());
                previous.as_ref() != Some(&targets)
            } else {
                let mut mapping = Map::new();
                mapping.insert(entry.model().to_string(), targets);
                entries.push(Value::Object(mapping));
                true
            }
        }
        FallbackChange::Remove(model) => {
            let before = entries.len();
            entries.retain(|item| {
                item.as_object()
                    .is_none_or(|mapping| !(mapping.len() == 1 && mapping.contains_key(model)))
            });
            let mut changed = entries.len() != before;
            for mapping in entries.iter_mut().filter_map(Value::as_object_mut) {
                if mapping.contains_key(model) {
                    let kept: Map<String, Value> = mapping
                        .iter()
                        .filter(|(key, _)| key.as_str() != model)
                        .map(|(key, value)| (key.clone(), value.clone()))
                        .collect();
                    *mapping = kept;
                    changed = true;
                }
            }
            changed
        }
    };

    if changed {
        settings.set_fallbacks(entries);
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FALLBACKS_KEY;
    use serde_json::json;

    fn settings(value: Value) -> RouterSettings {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_rows_for_single_entry() {
        let settings = settings(json!({"fallbacks": [{"gpt-4": ["gpt-3.5", "claude"]}]}));
        assert_eq!(
            fallback_rows(&settings),
            vec![FallbackRow {
                model: "gpt-4".to_string(),
                fallbacks: "gpt-3.5, claude".to_string(),
            }]
        );
    }

    #[test]
    fn test_rows_without_fallbacks() {
        let settings = settings(json!({"num_retries": 3}));
        assert!(fallback_rows(&settings).is_empty());
        assert!(fallback_rows(&RouterSettings::new()).is_empty());
    }

    #[test]
    fn test_rows_tolerate_odd_shapes() {
        let settings = settings(json!({
            "fallbacks": [
                {"gpt-4": "claude", "gpt-4o": ["gpt-4", 3]},
                "not-an-object",
                {}
            ]
        }));
        let rows = fallback_rows(&settings);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].fallbacks, "claude");
        assert_eq!(rows[1].model, "gpt-4o");
        assert_eq!(rows[1].fallbacks, "gpt-4, 3");

        let malformed = self::settings(json!({"fallbacks": {"gpt-4": ["claude"]}}));
        assert!(fallback_rows(&malformed).is_empty());
    }

    #[test]
    fn test_entry_validation() {
        assert_eq!(
            FallbackEntry::new("  ", ["claude"]),
            Err(FallbackValidationError::MissingModel)
        );
        assert_eq!(
            FallbackEntry::new("gpt-4", Vec::<String>::new()),
            Err(FallbackValidationError::NoFallbacks)
        );
        assert_eq!(
            FallbackEntry::new("gpt-4", ["", " "]),
            Err(FallbackValidationError::NoFallbacks)
        );
        assert_eq!(
            FallbackEntry::new("gpt-4", ["claude", "gpt-4"]),
            Err(FallbackValidationError::SelfFallback("gpt-4".to_string()))
        );
    }

    #[test]
    fn test_entry_deduplicates_in_order() {
        let entry = FallbackEntry::new("gpt-4", ["claude", "gpt-3.5", "claude"]).unwrap();
        assert_eq!(entry.fallbacks(), ["claude", "gpt-3.5"]);
    }

    #[test]
    fn test_candidates_exclude_selected_model() {
        let models = vec!["gpt-4".to_string(), "claude".to_string(), "gpt-3.5".to_string()];
        let candidates: Vec<&String> = fallback_candidates(&models, "gpt-4").collect();
        assert_eq!(candidates, ["claude", "gpt-3.5"]);
        assert_eq!(fallback_candidates(&models, "").count(), 3);
    }

    #[test]
    fn test_upsert_appends_when_missing() {
        let mut settings = settings(json!({"num_retries": 2}));
        let entry = FallbackEntry::new("gpt-4", ["claude"]).unwrap();
        assert!(apply_fallback_change(&mut settings, &FallbackChange::Upsert(entry)));
        assert_eq!(settings.get(FALLBACKS_KEY), Some(&json!([{"gpt-4": ["claude"]}])));
        assert_eq!(settings.get("num_retries"), Some(&json!(2)));
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut settings = settings(json!({
            "fallbacks": [{"gpt-4": ["gpt-3.5"]}, {"claude": ["gpt-4"]}]
        }));
        let entry = FallbackEntry::new("gpt-4", ["claude", "gpt-3.5"]).unwrap();
        assert!(apply_fallback_change(&mut settings, &FallbackChange::Upsert(entry.clone())));
        assert_eq!(
            settings.get(FALLBACKS_KEY),
            Some(&json!([{"gpt-4": ["claude", "gpt-3.5"]}, {"claude": ["gpt-4"]}]))
        );

        assert!(!apply_fallback_change(&mut settings, &FallbackChange::Upsert(entry)));
    }

    #[test]
    fn test_remove() {
        let mut settings = settings(json!({
            "fallbacks": [
                {"gpt-4": ["gpt-3.5"]},
                {"claude": ["gpt-4"], "gpt-4o": ["claude"]}
            ]
        }));
        assert!(apply_fallback_change(
            &mut settings,
            &FallbackChange::Remove("gpt-4".to_string())
        ));
        assert_eq!(
            settings.get(FALLBACKS_KEY),
            Some(&json!([{"claude": ["gpt-4"], "gpt-4o": ["claude"]}]))
        );

        assert!(apply_fallback_change(
            &mut settings,
            &FallbackChange::Remove("gpt-4o".to_string())
        ));
        assert_eq!(settings.get(FALLBACKS_KEY), Some(&json!([{"claude": ["gpt-4"]}])));

        assert!(!apply_fallback_change(
            &mut settings,
            &FallbackChange::Remove("unknown".to_string())
        ));
    }

    #[test]
    fn test_remove_without_fallbacks_leaves_settings_alone() {
        let mut settings = settings(json!({"timeout": 10}));
        assert!(!apply_fallback_change(
            &mut settings,
            &FallbackChange::Remove("gpt-4".to_string())
        ));
        assert!(settings.get(FALLBACKS_KEY).is_none());
    }
}
