use std::fmt::Display;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::config::PageConfig;
use crate::dom::{PageDocument, PageElement};

/// Offset-less forms the tracker has been seen to emit. They are UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Pattern [`ChronoFormatter::new`] starts from: `1/1/2023, 2:00:00 AM`
pub const DEFAULT_PATTERN: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Parses a timestamp taken to be UTC. RFC 3339 strings keep their own
/// offset; strings without one are read as UTC.
pub fn parse_utc(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Renders a UTC timestamp string for the viewer. `None` means the input
/// did not parse and the caller must leave the page untouched.
pub trait TimestampFormatter {
    fn format_local(&self, utc: &str) -> Option<String>;
}

/// Formats in a fixed [`TimeZone`] with a strftime pattern.
///
/// This is the formatter for callers outside the browser (server-side
/// rendering, native tools). In the page, the wasm adapter formats with the
/// platform's locale instead. Use [`ChronoFormatter::with_pattern`] to pick a
/// rendering other than [`DEFAULT_PATTERN`].
#[derive(Debug, Clone)]
pub struct ChronoFormatter<Tz> {
    tz: Tz,
    pattern: String,
}

impl<Tz: TimeZone> ChronoFormatter<Tz> {
    pub fn new(tz: Tz) -> Self {
        Self {
            tz,
            pattern: DEFAULT_PATTERN.to_string(),
        }
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }
}

impl<Tz> TimestampFormatter for ChronoFormatter<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    fn format_local(&self, utc: &str) -> Option<String> {
        let instant = parse_utc(utc)?;
        Some(
            instant
                .with_timezone(&self.tz)
                .format(&self.pattern)
                .to_string(),
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalizeReport {
    pub converted: usize,
    pub skipped: usize,
    pub server_time: bool,
}

/// Rewrites every UTC timestamp element to local time, then the server-time
/// element with its prefix. Elements whose attribute is missing or does not
/// parse keep their text.
pub fn localize_all<D, F>(document: &D, config: &PageConfig, formatter: &F) -> LocalizeReport
where
    D: PageDocument,
    F: TimestampFormatter + ?Sized,
{
    let mut report = LocalizeReport::default();

    for element in document.elements_by_class(&config.timestamp_class) {
        match localized_text(&element, &config.utc_attribute, formatter) {
            Some(text) => {
                element.set_text(&text);
                report.converted += 1;
            }
            None => report.skipped += 1,
        }
    }

    if let Some(server_time) = document.first_by_class(&config.server_time_class) {
        if let Some(text) = localized_text(&server_time, &config.utc_attribute, formatter) {
            server_time.set_text(&format!("{}{}", config.server_time_prefix, text));
            report.server_time = true;
        }
    }

    log::debug!(
        "Localized {} timestamps ({} skipped, server time: {})",
        report.converted,
        report.skipped,
        report.server_time
    );
    report
}

fn localized_text<E, F>(element: &E, attribute: &str, formatter: &F) -> Option<String>
where
    E: PageElement,
    F: TimestampFormatter + ?Sized,
{
    let utc = element.attribute(attribute).filter(|v| !v.is_empty())?;
    formatter.format_local(&utc)
}
