//! Global application settings and their JSON form.
//!
//! The globals object carries four optional keys:
//!
//! ```json
//! {
//!   "defaultProfile": "{61c54bbd-c2c6-5271-96e7-009a87ff44bf}",
//!   "initialRows": 30,
//!   "initialCols": 80,
//!   "alwaysShowTabs": false
//! }
//! ```
//!
//! Color schemes and key bindings live on the record but are not part of
//! this object.

use crate::color_scheme::ColorScheme;
use crate::defaults;
use crate::error::{SettingsError, json_type_name};
use crate::guid::{guid_from_string, guid_to_string};
use crate::terminal_settings::TerminalSettings;
use cascade_keybindings::AppKeyBindings;
use serde::{Deserialize, Deserializer};
use serde_json::{Value, json};
use uuid::Uuid;

const DEFAULT_PROFILE_KEY: &str = "defaultProfile";
const ALWAYS_SHOW_TABS_KEY: &str = "alwaysShowTabs";
const INITIAL_ROWS_KEY: &str = "initialRows";
const INITIAL_COLS_KEY: &str = "initialCols";

/// Wire form of the globals object. Absent keys stay `None`; a present key
/// of the wrong type (including `null`) is an error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GlobalsDocument {
    #[serde(default, deserialize_with = "present")]
    default_profile: Option<String>,
    #[serde(default, deserialize_with = "present")]
    always_show_tabs: Option<bool>,
    #[serde(default, deserialize_with = "present")]
    initial_rows: Option<f64>,
    #[serde(default, deserialize_with = "present")]
    initial_cols: Option<f64>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Global settings for the terminal application.
///
/// Cloning the record clones the key-binding *handle*; the clone and the
/// original keep sharing one table.
#[derive(Debug, Clone)]
pub struct GlobalAppSettings {
    keybindings: AppKeyBindings,
    color_schemes: Vec<ColorScheme>,
    default_profile: Uuid,
    always_show_tabs: bool,
    initial_rows: i32,
    initial_cols: i32,
}

impl Default for GlobalAppSettings {
    fn default() -> Self {
        Self {
            keybindings: AppKeyBindings::default(),
            color_schemes: Vec::new(),
            default_profile: Uuid::nil(),
            always_show_tabs: defaults::always_show_tabs(),
            initial_rows: defaults::rows(),
            initial_cols: defaults::cols(),
        }
    }
}

impl GlobalAppSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color_schemes(&self) -> &[ColorScheme] {
        &self.color_schemes
    }

    pub fn color_schemes_mut(&mut self) -> &mut Vec<ColorScheme> {
        &mut self.color_schemes
    }

    /// Find a color scheme by exact name.
    pub fn find_color_scheme(&self, name: &str) -> Option<&ColorScheme> {
        self.color_schemes.iter().find(|scheme| scheme.name == name)
    }

    pub fn set_default_profile(&mut self, default_profile: Uuid) {
        self.default_profile = default_profile;
    }

    pub fn default_profile(&self) -> Uuid {
        self.default_profile
    }

    pub fn keybindings(&self) -> &AppKeyBindings {
        &self.keybindings
    }

    /// Point this record at the host's key-binding table.
    pub fn set_keybindings(&mut self, keybindings: AppKeyBindings) {
        self.keybindings = keybindings;
    }

    pub fn always_show_tabs(&self) -> bool {
        self.always_show_tabs
    }

    pub fn set_always_show_tabs(&mut self, show_tabs: bool) {
        self.always_show_tabs = show_tabs;
    }

    pub fn initial_rows(&self) -> i32 {
        self.initial_rows
    }

    pub fn initial_cols(&self) -> i32 {
        self.initial_cols
    }

    /// Copy the global values a terminal needs into `settings`.
    ///
    /// The key-binding handle is shared, not copied.
    pub fn apply_settings(&self, settings: &mut TerminalSettings) {
        settings.key_bindings = Some(self.keybindings.clone());
        settings.initial_rows = self.initial_rows;
        settings.initial_cols = self.initial_cols;
    }

    /// Serialize the globals object.
    pub fn to_json(&self) -> Value {
        json!({
            DEFAULT_PROFILE_KEY: guid_to_string(&self.default_profile),
            INITIAL_ROWS_KEY: self.initial_rows,
            INITIAL_COLS_KEY: self.initial_cols,
            ALWAYS_SHOW_TABS_KEY: self.always_show_tabs,
        })
    }

    /// Serialize the globals object as pretty-printed JSON text.
    pub fn to_json_string(&self) -> String {
        // Display on Value cannot fail; `{:#}` selects the pretty printer.
        format!("{:#}", self.to_json())
    }

    /// Build a new record from a globals object.
    ///
    /// Keys that are absent keep their defaults and unknown keys are
    /// ignored. Row and column counts are truncated toward zero.
    pub fn from_json(json: &Value) -> Result<Self, SettingsError> {
        if !json.is_object() {
            return Err(SettingsError::NotAnObject {
                found: json_type_name(json),
            });
        }

        let document = GlobalsDocument::deserialize(json)?;
        let mut result = Self::default();

        if let Some(guid) = document.default_profile {
            result.default_profile = guid_from_string(&guid)?;
        }
        if let Some(show_tabs) = document.always_show_tabs {
            result.always_show_tabs = show_tabs;
        }
        if let Some(rows) = document.initial_rows {
            result.initial_rows = truncate_dimension(INITIAL_ROWS_KEY, rows);
        }
        if let Some(cols) = document.initial_cols {
            result.initial_cols = truncate_dimension(INITIAL_COLS_KEY, cols);
        }

        log::debug!(
            "Loaded globals: defaultProfile={} rows={} cols={} alwaysShowTabs={}",
            guid_to_string(&result.default_profile),
            result.initial_rows,
            result.initial_cols,
            result.always_show_tabs
        );
        Ok(result)
    }

    /// Parse JSON text and build a new record from it.
    pub fn from_json_str(text: &str) -> Result<Self, SettingsError> {
        let json: Value = serde_json::from_str(text)?;
        Self::from_json(&json)
    }
}

/// Convert a JSON number to a row or column count. The cast truncates and
/// saturates at the `i32` bounds.
fn truncate_dimension(key: &str, value: f64) -> i32 {
    let dimension = value as i32;
    if dimension <= 0 {
        log::warn!("{key} should be positive, got {value}; keeping {dimension}");
    }
    dimension
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = GlobalAppSettings::new();
        assert_eq!(settings.default_profile(), Uuid::nil());
        assert!(!settings.always_show_tabs());
        assert_eq!(settings.initial_rows(), 30);
        assert_eq!(settings.initial_cols(), 80);
        assert!(settings.color_schemes().is_empty());
        assert!(settings.keybindings().read().is_empty());
    }

    #[test]
    fn test_to_json_has_exactly_four_keys() {
        let json = GlobalAppSettings::new().to_json();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 4);
        assert_eq!(
            object[DEFAULT_PROFILE_KEY],
            "{00000000-0000-0000-0000-000000000000}"
        );
        assert_eq!(object[INITIAL_ROWS_KEY], 30);
        assert_eq!(object[INITIAL_COLS_KEY], 80);
        assert_eq!(object[ALWAYS_SHOW_TABS_KEY], false);
    }

    #[test]
    fn test_truncates_fractional_dimensions() {
        let settings =
            GlobalAppSettings::from_json(&json!({ "initialRows": 40.9, "initialCols": -3.7 }))
                .unwrap();
        assert_eq!(settings.initial_rows(), 40);
        assert_eq!(settings.initial_cols(), -3);
    }

    #[test]
    fn test_huge_dimension_saturates() {
        let settings = GlobalAppSettings::from_json(&json!({ "initialRows": 1e12 })).unwrap();
        assert_eq!(settings.initial_rows(), i32::MAX);
    }

    #[test]
    fn test_null_is_a_type_error() {
        let result = GlobalAppSettings::from_json(&json!({ "alwaysShowTabs": null }));
        assert!(matches!(result, Err(SettingsError::Json(_))));
    }

    #[test]
    fn test_non_object_root() {
        let result = GlobalAppSettings::from_json(&json!("defaultProfile"));
        assert!(matches!(
            result,
            Err(SettingsError::NotAnObject { found: "string" })
        ));
    }

    #[test]
    fn test_from_json_str() {
        let settings =
            GlobalAppSettings::from_json_str(r#"{ "alwaysShowTabs": true, "extra": [1, 2] }"#)
                .unwrap();
        assert!(settings.always_show_tabs());

        let result = GlobalAppSettings::from_json_str("{ \"alwaysShowTabs\": ");
        assert!(matches!(result, Err(SettingsError::Json(_))));
    }

    #[test]
    fn test_to_json_string_is_parseable() {
        let mut settings = GlobalAppSettings::new();
        settings.set_always_show_tabs(true);
        let text = settings.to_json_string();
        assert!(text.contains('\n'));
        let reparsed = GlobalAppSettings::from_json_str(&text).unwrap();
        assert!(reparsed.always_show_tabs());
    }

    #[test]
    fn test_find_color_scheme() {
        let mut settings = GlobalAppSettings::new();
        settings.color_schemes_mut().extend(ColorScheme::builtin());
        assert_eq!(
            settings.find_color_scheme("One Half Dark").map(|s| s.name.as_str()),
            Some("One Half Dark")
        );
        assert!(settings.find_color_scheme("one half dark").is_none());
    }
}
