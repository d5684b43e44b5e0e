use core::fmt;

use tsql_ast::Duration;

const MICROSECOND: i64 = 1;
const MILLISECOND: i64 = 1_000 * MICROSECOND;
const SECOND: i64 = 1_000 * MILLISECOND;
const MINUTE: i64 = 60 * SECOND;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;

/// `ParseDuration`/`FormatDuration` failed: spec §4.4 and §7 specify this
/// carries no position, unlike every other diagnostic in the catalog.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DurationError;

impl fmt::Display for DurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid duration")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DurationError {}

/// Parses a duration literal: a decimal integer followed by an optional
/// unit (`u`, `µ`, `ms`, `s`, `m`, `h`, `d`, `w`). A missing unit means
/// microseconds; a fractional or empty input, or an unrecognized unit, is
/// an error.
pub fn parse_duration(text: &str) -> Result<Duration, DurationError> {
    if text.is_empty() {
        return Err(DurationError);
    }
    let digits_end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    if digits_end == 0 {
        return Err(DurationError);
    }
    let (digits, unit) = text.split_at(digits_end);
    let value: i64 = digits.parse().map_err(|_| DurationError)?;
    let multiplier = match unit {
        "" | "u" | "µ" => MICROSECOND,
        "ms" => MILLISECOND,
        "s" => SECOND,
        "m" => MINUTE,
        "h" => HOUR,
        "d" => DAY,
        "w" => WEEK,
        _ => return Err(DurationError),
    };
    Ok(Duration::from_micros(value * multiplier))
}

/// Formats a duration, choosing the largest unit for which the value is an
/// integer multiple, preferring `w, d, h, m, s, ms` in that order; if none
/// apply, emits the bare microsecond count with no suffix.
pub fn format_duration(duration: Duration) -> String {
    let micros = duration.micros;
    for (unit_micros, suffix) in [
        (WEEK, "w"),
        (DAY, "d"),
        (HOUR, "h"),
        (MINUTE, "m"),
        (SECOND, "s"),
        (MILLISECOND, "ms"),
    ] {
        if micros != 0 && micros % unit_micros == 0 {
            return format!("{}{}", micros / unit_micros, suffix);
        }
    }
    micros.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_unit_is_microseconds() {
        assert_eq!(parse_duration("3").unwrap(), Duration::from_micros(3));
    }

    #[test]
    fn round_trips_canonical_forms() {
        for s in ["3", "1001", "15ms", "100s", "2m", "2h", "2d", "2w"] {
            let parsed = parse_duration(s).unwrap();
            assert_eq!(format_duration(parsed), s, "round-trip failed for {}", s);
        }
    }

    #[test]
    fn fractional_input_is_invalid() {
        assert_eq!(parse_duration("10.5h"), Err(DurationError));
    }

    #[test]
    fn unknown_unit_is_invalid() {
        assert_eq!(parse_duration("10x"), Err(DurationError));
    }

    #[test]
    fn empty_input_is_invalid() {
        assert_eq!(parse_duration(""), Err(DurationError));
    }
}
