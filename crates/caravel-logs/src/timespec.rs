//! Time expression resolution for query window boundaries.
//!
//! User-supplied start and end boundaries arrive as strings in one of three
//! shapes, tried in order:
//!
//! 1. A relative duration expression (`-1h`, `10m30s`), resolved against
//!    the instant the invocation started, not against each poll.
//! 2. An absolute timestamp `YYYY-MM-DD HH:MM:SS`, interpreted as UTC.
//! 3. The same timestamp followed by a zone abbreviation
//!    (`2026-08-01 09:00:00 PST`).
//!
//! An empty string leaves the boundary unset. Anything else is a fatal
//! configuration error.

use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, TimeZone, Utc};

use crate::error::{LogError, Result};

/// Wall-clock format shared by both absolute shapes.
const ABSOLUTE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Zone abbreviations accepted in the zoned absolute format, with their
/// UTC offsets in seconds.
const ZONE_OFFSETS: &[(&str, i32)] = &[
    ("UTC", 0),
    ("GMT", 0),
    ("EST", -5 * 3600),
    ("EDT", -4 * 3600),
    ("CST", -6 * 3600),
    ("CDT", -5 * 3600),
    ("MST", -7 * 3600),
    ("MDT", -6 * 3600),
    ("PST", -8 * 3600),
    ("PDT", -7 * 3600),
];

/// Resolves a raw time expression into an absolute instant.
///
/// Returns `Ok(None)` for an empty input, leaving the boundary unbounded.
/// Relative expressions are resolved against the `now` supplied by the
/// caller, so resolving the same string twice with the same `now` is
/// deterministic.
///
/// # Errors
///
/// Returns [`LogError::InvalidTime`] if the input matches none of the
/// supported shapes.
pub fn resolve(input: &str, now: DateTime<Utc>) -> Result<Option<DateTime<Utc>>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    if let Some(delta) = parse_duration_expr(trimmed) {
        return Ok(Some(now + delta));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, ABSOLUTE_FORMAT) {
        return Ok(Some(Utc.from_utc_datetime(&naive)));
    }

    if let Some(instant) = parse_zoned(trimmed) {
        return Ok(Some(instant));
    }

    Err(LogError::InvalidTime(input.to_string()))
}

/// Parses a relative duration expression: an optional sign followed by one
/// or more `<integer><unit>` pairs, units `h`, `m`, `s`.
fn parse_duration_expr(s: &str) -> Option<Duration> {
    let (sign, body) = match s.as_bytes().first()? {
        b'-' => (-1i64, &s[1..]),
        b'+' => (1, &s[1..]),
        _ => (1, s),
    };
    if body.is_empty() {
        return None;
    }

    let mut seconds = 0i64;
    let mut pending: Option<i64> = None;
    for ch in body.chars() {
        if let Some(digit) = ch.to_digit(10) {
            let value = pending.unwrap_or(0);
            pending = Some(value.checked_mul(10)?.checked_add(i64::from(digit))?);
        } else {
            let value = pending.take()?;
            let unit = match ch {
                'h' => 3600,
                'm' => 60,
                's' => 1,
                _ => return None,
            };
            seconds = seconds.checked_add(value.checked_mul(unit)?)?;
        }
    }

    // Trailing digits without a unit are not a duration.
    if pending.is_some() {
        return None;
    }

    Duration::try_seconds(sign * seconds)
}

/// Parses the zoned absolute format by splitting off the trailing zone
/// abbreviation and applying its fixed offset.
fn parse_zoned(s: &str) -> Option<DateTime<Utc>> {
    let (stamp, zone) = s.rsplit_once(' ')?;
    let offset_secs = ZONE_OFFSETS
        .iter()
        .find(|(abbrev, _)| *abbrev == zone)
        .map(|(_, secs)| *secs)?;
    let naive = NaiveDateTime::parse_from_str(stamp.trim_end(), ABSOLUTE_FORMAT).ok()?;
    let offset = FixedOffset::east_opt(offset_secs)?;
    offset
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use test_case::test_case;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 23, 12, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn empty_input_leaves_boundary_unset() {
        assert_eq!(resolve("", fixed_now()).expect("should resolve"), None);
        assert_eq!(resolve("   ", fixed_now()).expect("should resolve"), None);
    }

    #[test]
    fn negative_duration_resolves_before_now() {
        let now = fixed_now();
        let resolved = resolve("-1h", now).expect("should resolve");
        assert_eq!(resolved, Some(now - Duration::hours(1)));
    }

    #[test]
    fn unsigned_compound_duration() {
        let now = fixed_now();
        let resolved = resolve("10m30s", now).expect("should resolve");
        assert_eq!(resolved, Some(now + Duration::seconds(630)));
    }

    #[test]
    fn duration_resolution_is_deterministic_for_same_now() {
        let now = fixed_now();
        let first = resolve("-45m", now).expect("should resolve");
        let second = resolve("-45m", now).expect("should resolve");
        assert_eq!(first, second);
    }

    #[test]
    fn zoneless_absolute_is_utc() {
        let resolved = resolve("2026-08-01 09:30:15", fixed_now()).expect("should resolve");
        let instant = resolved.expect("should be set");
        assert_eq!(instant.hour(), 9);
        assert_eq!(instant.minute(), 30);
        assert_eq!(instant.second(), 15);
        assert_eq!(
            instant,
            Utc.with_ymd_and_hms(2026, 8, 1, 9, 30, 15)
                .single()
                .expect("valid timestamp")
        );
    }

    #[test_case("UTC", 9; "utc keeps wall clock")]
    #[test_case("GMT", 9; "gmt keeps wall clock")]
    #[test_case("EST", 14; "est is five behind")]
    #[test_case("EDT", 13; "edt is four behind")]
    #[test_case("CST", 15; "cst is six behind")]
    #[test_case("CDT", 14; "cdt is five behind")]
    #[test_case("MST", 16; "mst is seven behind")]
    #[test_case("MDT", 15; "mdt is six behind")]
    #[test_case("PST", 17; "pst is eight behind")]
    #[test_case("PDT", 16; "pdt is seven behind")]
    fn zoned_absolute_applies_offset(zone: &str, expected_utc_hour: u32) {
        let input = format!("2026-08-01 09:00:00 {zone}");
        let resolved = resolve(&input, fixed_now()).expect("should resolve");
        let instant = resolved.expect("should be set");
        assert_eq!(instant.hour(), expected_utc_hour);
        assert_eq!(instant.minute(), 0);
    }

    #[test]
    fn unknown_zone_is_rejected() {
        let result = resolve("2026-08-01 09:00:00 XYZ", fixed_now());
        assert!(matches!(result, Err(LogError::InvalidTime(_))));
    }

    #[test]
    fn garbage_is_rejected_with_descriptive_error() {
        let result = resolve("next tuesday", fixed_now());
        match result {
            Err(LogError::InvalidTime(raw)) => assert_eq!(raw, "next tuesday"),
            other => panic!("expected invalid time error, got {other:?}"),
        }
    }

    #[test]
    fn bare_number_is_not_a_duration() {
        assert!(resolve("1200", fixed_now()).is_err());
    }

    #[test]
    fn unit_without_value_is_rejected() {
        assert!(resolve("h", fixed_now()).is_err());
        assert!(resolve("-", fixed_now()).is_err());
    }

    #[test]
    fn zero_duration_resolves_to_now() {
        let now = fixed_now();
        assert_eq!(resolve("0s", now).expect("should resolve"), Some(now));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn duration_grammar_roundtrips(
                hours in 0i64..200,
                minutes in 0i64..60,
                seconds in 0i64..60,
                negative: bool,
            ) {
                let sign = if negative { "-" } else { "" };
                let input = format!("{sign}{hours}h{minutes}m{seconds}s");
                let now = fixed_now();

                let resolved = resolve(&input, now)
                    .expect("grammar-conforming input must resolve")
                    .expect("non-empty input must set the boundary");

                let mut total = hours * 3600 + minutes * 60 + seconds;
                if negative {
                    total = -total;
                }
                prop_assert_eq!(resolved, now + Duration::seconds(total));
            }

            #[test]
            fn absolute_wall_clock_fields_roundtrip(
                hour in 0u32..24,
                minute in 0u32..60,
                second in 0u32..60,
            ) {
                let input = format!("2026-08-01 {hour:02}:{minute:02}:{second:02}");
                let resolved = resolve(&input, fixed_now())
                    .expect("valid timestamp must resolve")
                    .expect("non-empty input must set the boundary");

                prop_assert_eq!(resolved.hour(), hour);
                prop_assert_eq!(resolved.minute(), minute);
                prop_assert_eq!(resolved.second(), second);
            }
        }
    }
}
