//! Tooltip configuration
//!
//! Options arrive from JavaScript as a loose object. They are merged onto the
//! defaults one key at a time (shallow merge, later wins); a value that does
//! not fit its field is skipped and the default is kept.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::geometry::PlacementPreference;

/// Configuration for a single tooltip widget
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TooltipOptions {
    /// Removal transition duration (ms)
    pub speed: f64,
    /// Delay between trigger-off and removal (ms)
    pub delay: f64,
    /// Configured offset; the applied gap is twice this value
    pub offset: f64,

    #[serde(rename = "class")]
    pub class_name: String,
    pub class_fixed: String,
    pub class_left: String,
    pub class_right: String,
    pub class_top: String,
    pub class_bottom: String,
    pub class_shown: String,

    pub position: PlacementPreference,
    /// Content is read from `data-<data_attr>`
    pub data_attr: String,
    /// `None` means the tooltip is only shown by calling `show()`
    #[serde(serialize_with = "serialize_trigger", deserialize_with = "deserialize_trigger")]
    pub trigger: Option<String>,
    pub trigger_off: String,

    pub fixed: bool,
    pub follow: bool,
    pub html: bool,
    /// Re-measure the tooltip after the width clamp instead of trusting
    /// the pre-clamp size
    pub remeasure_after_clamp: bool,
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self {
            speed: 100.0,
            delay: 0.0,
            offset: 5.0,
            class_name: "tooltip".to_string(),
            class_fixed: "tooltip--fixed".to_string(),
            class_left: "tooltip--left".to_string(),
            class_right: "tooltip--right".to_string(),
            class_top: "tooltip--top".to_string(),
            class_bottom: "tooltip--bottom".to_string(),
            class_shown: "tooltip--is-shown".to_string(),
            position: PlacementPreference::Auto,
            data_attr: "tooltip".to_string(),
            trigger: Some("mouseenter".to_string()),
            trigger_off: "mouseleave".to_string(),
            fixed: false,
            follow: false,
            html: false,
            remeasure_after_clamp: false,
        }
    }
}

/// Alternate option names accepted from callers
fn canonical_key(key: &str) -> &str {
    match key {
        "contentAttribute" => "dataAttr",
        "renderAsHtml" => "html",
        "offsetGap" => "offset",
        "className" => "class",
        other => other,
    }
}

impl TooltipOptions {
    /// Merge caller settings onto the defaults
    pub fn merged(settings: &Value) -> Self {
        Self::default().merge(settings)
    }

    /// Shallow merge: every key in `settings` overrides the same key in `self`.
    ///
    /// Keys whose value can't be read into the field are skipped with a warning.
    pub fn merge(&self, settings: &Value) -> Self {
        let overrides = match settings {
            Value::Object(map) => map,
            Value::Null => return self.clone(),
            other => {
                log::warn!("Ignoring tooltip settings that are not an object: {}", other);
                return self.clone();
            }
        };

        let mut base = match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => return self.clone(),
        };

        for (key, value) in overrides {
            let key = canonical_key(key);
            let mut candidate: Map<String, Value> = base.clone();
            candidate.insert(key.to_string(), value.clone());

            match serde_json::from_value::<TooltipOptions>(Value::Object(candidate.clone())) {
                Ok(_) => base = candidate,
                Err(e) => log::warn!("Skipping tooltip option '{}': {}", key, e),
            }
        }

        serde_json::from_value(Value::Object(base)).unwrap_or_else(|_| self.clone())
    }

    /// Name of the attribute holding the tooltip content
    pub fn content_attribute(&self) -> String {
        format!("data-{}", self.data_attr)
    }

    /// Gap in pixels actually kept between anchor and tooltip
    pub fn effective_gap(&self) -> f64 {
        crate::placement::effective_gap(self.offset)
    }
}

fn serialize_trigger<S: Serializer>(
    trigger: &Option<String>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match trigger {
        Some(event) => serializer.serialize_str(event),
        None => serializer.serialize_bool(false),
    }
}

/// `"click"` binds that event; `false`, `null` or `""` disable the trigger
fn deserialize_trigger<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TriggerSetting {
        Event(String),
        Flag(bool),
    }

    let setting = Option::<TriggerSetting>::deserialize(deserializer)?;
    match setting {
        Some(TriggerSetting::Event(event)) if !event.trim().is_empty() => Ok(Some(event)),
        Some(TriggerSetting::Flag(true)) => Ok(Some("mouseenter".to_string())),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let options = TooltipOptions::default();
        assert_eq!(options.speed, 100.0);
        assert_eq!(options.offset, 5.0);
        assert_eq!(options.class_name, "tooltip");
        assert_eq!(options.trigger.as_deref(), Some("mouseenter"));
        assert_eq!(options.content_attribute(), "data-tooltip");
        assert_eq!(options.effective_gap(), 10.0);
    }

    #[test]
    fn test_null_settings_keep_defaults() {
        assert_eq!(TooltipOptions::merged(&Value::Null), TooltipOptions::default());
        assert_eq!(TooltipOptions::merged(&json!("nonsense")), TooltipOptions::default());
    }

    #[test]
    fn test_merge_overrides_per_key() {
        let options = TooltipOptions::merged(&json!({
            "position": "bottom",
            "delay": 250,
            "follow": true,
            "class": "hint",
        }));

        assert_eq!(options.position, PlacementPreference::Bottom);
        assert_eq!(options.delay, 250.0);
        assert!(options.follow);
        assert_eq!(options.class_name, "hint");
        // untouched keys keep their defaults
        assert_eq!(options.class_shown, "tooltip--is-shown");
        assert_eq!(options.trigger_off, "mouseleave");
    }

    #[test]
    fn test_malformed_keys_fall_back() {
        let options = TooltipOptions::merged(&json!({
            "speed": "fast",
            "position": "diagonal",
            "offset": 8,
        }));

        assert_eq!(options.speed, 100.0);
        assert_eq!(options.position, PlacementPreference::Auto);
        assert_eq!(options.offset, 8.0);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let options = TooltipOptions::merged(&json!({ "animation": "bounce" }));
        assert_eq!(options, TooltipOptions::default());
    }

    #[test]
    fn test_trigger_can_be_disabled() {
        let options = TooltipOptions::merged(&json!({ "trigger": false }));
        assert_eq!(options.trigger, None);

        let options = TooltipOptions::merged(&json!({ "trigger": "" }));
        assert_eq!(options.trigger, None);

        let options = TooltipOptions::merged(&json!({ "trigger": "click" }));
        assert_eq!(options.trigger.as_deref(), Some("click"));
    }

    #[test]
    fn test_aliases() {
        let options = TooltipOptions::merged(&json!({
            "contentAttribute": "hint",
            "renderAsHtml": true,
            "offsetGap": 3,
        }));

        assert_eq!(options.content_attribute(), "data-hint");
        assert!(options.html);
        assert_eq!(options.offset, 3.0);
    }

    #[test]
    fn test_later_merge_wins() {
        let first = TooltipOptions::merged(&json!({ "delay": 10 }));
        let second = first.merge(&json!({ "delay": 20, "fixed": true }));
        assert_eq!(second.delay, 20.0);
        assert!(second.fixed);
    }
}
