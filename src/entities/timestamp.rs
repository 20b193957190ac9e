//! Flexible timestamp parsing and stable rendering.
//!
//! Record files carry timestamps as free-form local-clock text with no
//! timezone. Parsing tries a fixed list of common layouts in order; rendering
//! always uses one canonical layout so files round-trip byte-for-byte.

use crate::errors::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime};

/// Canonical layout written back to disk.
const CANONICAL: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Accepted input layouts, tried in order.
const ACCEPTED: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Parses free-form timestamp text from a named column.
///
/// Date-only text is accepted and maps to midnight.
///
/// # Errors
/// Returns [`Error::TypeCoercion`] when no accepted layout matches.
pub fn parse(column: &str, raw: &str) -> Result<NaiveDateTime> {
    let trimmed = raw.trim();
    for layout in ACCEPTED {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, layout) {
            return Ok(parsed);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(parsed) = date.and_hms_opt(0, 0, 0) {
            return Ok(parsed);
        }
    }
    Err(Error::TypeCoercion {
        column: column.to_string(),
        value: raw.to_string(),
        expected: "timestamp",
    })
}

/// Parses timestamp text where an empty cell means "absent".
///
/// # Errors
/// Returns [`Error::TypeCoercion`] for non-empty text that does not parse.
pub fn parse_optional(column: &str, raw: &str) -> Result<Option<NaiveDateTime>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse(column, raw).map(Some)
}

/// Renders a timestamp in the canonical on-disk layout.
#[must_use]
pub fn render(timestamp: NaiveDateTime) -> String {
    timestamp.format(CANONICAL).to_string()
}

/// Renders an optional timestamp; absent becomes the empty cell.
#[must_use]
pub fn render_optional(timestamp: Option<NaiveDateTime>) -> String {
    timestamp.map(render).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn parses_common_layouts() {
        let expected = at(2024, 3, 15, 9, 30, 0);
        for raw in [
            "2024-03-15 09:30:00",
            "2024-03-15 09:30:00.000000",
            "2024-03-15T09:30:00",
            "2024-03-15 09:30",
            "03/15/2024 09:30:00",
            "03/15/2024 09:30",
        ] {
            assert_eq!(parse("login_time", raw).unwrap(), expected, "raw {raw:?}");
        }
    }

    #[test]
    fn date_only_maps_to_midnight() {
        assert_eq!(
            parse("sale_time", "2024-03-15").unwrap(),
            at(2024, 3, 15, 0, 0, 0)
        );
    }

    #[test]
    fn garbage_is_a_coercion_error() {
        let err = parse("sale_time", "next tuesday-ish").unwrap_err();
        assert!(matches!(
            err,
            Error::TypeCoercion { expected: "timestamp", .. }
        ));
    }

    #[test]
    fn empty_cell_is_absent_not_an_error() {
        assert_eq!(parse_optional("logout_time", "").unwrap(), None);
        assert_eq!(parse_optional("logout_time", "  ").unwrap(), None);
        assert!(parse_optional("logout_time", "garbage").is_err());
    }

    #[test]
    fn render_round_trips_through_parse() {
        let original = at(2024, 3, 15, 23, 59, 59);
        let text = render(original);
        assert_eq!(text, "2024-03-15 23:59:59.000000");
        assert_eq!(parse("login_time", &text).unwrap(), original);
    }

    #[test]
    fn render_optional_absent_is_empty() {
        assert_eq!(render_optional(None), "");
    }
}
