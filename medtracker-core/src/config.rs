use serde::{Deserialize, Serialize};

use crate::error::PageError;

/// Id of the optional `<script type="application/json">` element whose body
/// overrides [`PageConfig`] fields.
pub const CONFIG_ELEMENT_ID: &str = "medtracker-config";

/// Names the page contract: which ids, classes and keys the enhancements
/// look for. Defaults match the markup the tracker server renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Id of the `<style>` element holding the active theme CSS
    pub style_element_id: String,
    /// Id of the optional theme toggle button
    pub toggle_element_id: String,
    /// Class marking elements whose text is a UTC timestamp
    pub timestamp_class: String,
    /// Class of the single "server time" element
    pub server_time_class: String,
    /// Attribute carrying the UTC timestamp string
    pub utc_attribute: String,
    /// Class marking `datetime-local` inputs shown in local time
    pub datetime_input_class: String,
    /// Local storage key for the theme preference
    pub storage_key: String,
    /// Text placed before the localized server time
    pub server_time_prefix: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            style_element_id: "theme-style".to_string(),
            toggle_element_id: "theme-toggle".to_string(),
            timestamp_class: "utc-datetime".to_string(),
            server_time_class: "server-time".to_string(),
            utc_attribute: "data-utc".to_string(),
            datetime_input_class: "local-datetime-input".to_string(),
            storage_key: "medtracker-theme".to_string(),
            server_time_prefix: "Your time: ".to_string(),
        }
    }
}

impl PageConfig {
    /// Parses a JSON override. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Like [`PageConfig::from_json`], but falls back to the defaults when the
    /// JSON is absent or malformed.
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        let Some(json) = json.map(str::trim).filter(|j| !j.is_empty()) else {
            return Self::default();
        };

        match Self::from_json(json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring page config, using defaults: {}", e);
                Self::default()
            }
        }
    }
}
