//! Page enhancements for the Medication Tracker
//!
//! Target-independent logic used by the browser adapter (`medtracker-ui`):
//! - Theme model and the dark/light style blocks
//! - Preference store over any key-value backend
//! - Document/element capabilities the logic runs against
//! - Timestamp localization and `datetime-local` conversions
//!
//! Nothing in here touches `web-sys`, so every behavior is testable natively.

pub mod config;
pub mod controller;
pub mod datetime_input;
pub mod dom;
pub mod error;
pub mod localize;
pub mod store;
pub mod theme;

#[cfg(test)]
pub(crate) mod testing;

pub use config::PageConfig;
pub use controller::{ensure_style_element, ThemeController};
pub use datetime_input::{
    convert_input_to_utc, local_input_to_utc, prefill_datetime_inputs, utc_to_local_input,
};
pub use dom::{PageDocument, PageElement};
pub use error::PageError;
pub use localize::{localize_all, ChronoFormatter, LocalizeReport, TimestampFormatter};
pub use store::{KeyValueStore, MemoryStore, ThemePreference};
pub use theme::{next_theme, Theme, DARK_CSS, DEFAULT_THEME, LIGHT_CSS};
