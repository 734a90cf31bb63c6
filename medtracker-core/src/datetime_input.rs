//! `<input type="datetime-local">` helpers.
//!
//! The server stores and expects UTC, the input shows wall-clock time. Values
//! are shown in local time on load and converted back to UTC on submit.

use std::fmt::Display;

use chrono::{Duration, NaiveDateTime, Offset, TimeZone, Utc};

use crate::config::PageConfig;
use crate::dom::{PageDocument, PageElement};
use crate::localize::parse_utc;

/// Value format of a `datetime-local` input, minute precision.
pub const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

const INPUT_PARSE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

pub fn utc_to_local_input<Tz>(utc: &str, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let instant = parse_utc(utc)?;
    Some(instant.with_timezone(tz).format(INPUT_FORMAT).to_string())
}

/// Reads an input value as wall-clock time in `tz` and renders it in UTC.
/// Ambiguous times take the earlier instant. Times inside a DST gap are read
/// with the offset in force before the gap, which lands them past it, the
/// same instant a browser `Date` picks.
pub fn local_input_to_utc<Tz: TimeZone>(value: &str, tz: &Tz) -> Option<String> {
    let value = value.trim();
    let naive = INPUT_PARSE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())?;

    let utc = match tz.from_local_datetime(&naive).earliest() {
        Some(local) => local.naive_utc(),
        None => {
            let before = tz
                .from_local_datetime(&(naive - Duration::days(1)))
                .earliest()?
                .offset()
                .fix();
            naive - Duration::seconds(i64::from(before.local_minus_utc()))
        }
    };
    Some(Utc.from_utc_datetime(&utc).format(INPUT_FORMAT).to_string())
}

/// Fills every tagged input from its UTC attribute. Returns how many were set.
pub fn prefill_datetime_inputs<D, Tz>(document: &D, config: &PageConfig, tz: &Tz) -> usize
where
    D: PageDocument,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut filled = 0;

    for input in document.elements_by_class(&config.datetime_input_class) {
        let Some(local) = input
            .attribute(&config.utc_attribute)
            .and_then(|utc| utc_to_local_input(&utc, tz))
        else {
            continue;
        };

        if input.set_value(&local) {
            filled += 1;
        }
    }

    filled
}

/// Rewrites one input's local value to UTC in place, ahead of form submit.
pub fn convert_input_to_utc<E: PageElement, Tz: TimeZone>(input: &E, tz: &Tz) -> bool {
    let Some(utc) = input
        .value()
        .and_then(|value| local_input_to_utc(&value, tz))
    else {
        return false;
    };

    log::debug!("Converted datetime input to UTC: {}", utc);
    input.set_value(&utc)
}
