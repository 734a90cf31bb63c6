use js_sys::Date;
use medtracker_core::TimestampFormatter;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    /// A `Date` viewed through a local binding so the method below is not an
    /// inherent impl on the foreign `js_sys::Date` type.
    type LocaleDate;

    /// `Date.prototype.toLocaleString()` with the page's default locale.
    #[wasm_bindgen(method, js_name = toLocaleString)]
    fn to_default_locale_string(this: &LocaleDate) -> String;
}

/// Formats with the browser's own `toLocaleString()`, so the output follows
/// the viewer's locale and time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocaleDateFormatter;

impl TimestampFormatter for LocaleDateFormatter {
    fn format_local(&self, utc: &str) -> Option<String> {
        let date = Date::new(&JsValue::from_str(utc));
        if date.get_time().is_nan() {
            return None;
        }

        Some(date.unchecked_ref::<LocaleDate>().to_default_locale_string())
    }
}
