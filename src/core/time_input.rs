// VisitDesk - core/time_input.rs
//
// Bounded time-of-day editing over canonical "HH:MM" strings.
// Core layer: pure functions, no state, no I/O, no UI.
//
// The owning form holds the canonical value. Every edit of the hours or
// minutes field is turned into either a new canonical value or "no
// emission" (None); the owner stays the single source of truth.
//
// Nothing in here returns an error. Malformed input is ignored (non-numeric),
// clamped (out of range), or cascades into a clear (empty hours field).

use chrono::NaiveTime;

/// Separator between the hours and minutes halves.
pub const SEPARATOR: char = ':';

/// Largest valid hour value.
pub const MAX_HOURS: i64 = 23;

/// Largest valid minute value.
pub const MAX_MINUTES: i64 = 59;

/// Value substituted for an empty sub-field at composition time.
pub const ZERO_FIELD: &str = "00";

/// Hours and minutes sub-strings derived from a canonical time.
///
/// Either half may be empty on its own; the two physical fields are edited
/// independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecomposedTime {
    pub hours: String,
    pub minutes: String,
}

/// Split a canonical time into its hours and minutes fields.
///
/// Splits on the first separator. A missing half comes back as an empty
/// string; malformed input degrades rather than failing (`"7:5"` yields
/// `"7"` and `"5"`).
pub fn decompose(value: &str) -> DecomposedTime {
    if value.is_empty() {
        return DecomposedTime::default();
    }
    match value.split_once(SEPARATOR) {
        Some((hours, minutes)) => DecomposedTime {
            hours: hours.to_string(),
            minutes: minutes.to_string(),
        },
        None => DecomposedTime {
            hours: value.to_string(),
            minutes: String::new(),
        },
    }
}

/// Return `field`, or `default` when `field` is empty.
pub fn default_if_empty<'a>(field: &'a str, default: &'a str) -> &'a str {
    if field.is_empty() {
        default
    } else {
        field
    }
}

/// Apply an edit of the hours field against the current canonical value.
///
/// - empty input clears the whole value (`Some("")`), whatever the minutes;
/// - non-numeric input is ignored (`None`);
/// - numeric input is clamped to 0..=23 and joined with the current minutes,
///   which default to `"00"`.
pub fn on_hours_change(current: &str, raw_input: &str) -> Option<String> {
    if raw_input.is_empty() {
        return Some(String::new());
    }
    let hours = parse_int(raw_input)?.clamp(0, MAX_HOURS);
    let fields = decompose(current);
    let minutes = default_if_empty(&fields.minutes, ZERO_FIELD);
    Some(compose(&format!("{hours:02}"), minutes))
}

/// Apply an edit of the minutes field against the current canonical value.
///
/// Unlike the hours field, clearing minutes does not clear the value: it
/// resets minutes to `"00"` and keeps the current hours.
pub fn on_minutes_change(current: &str, raw_input: &str) -> Option<String> {
    let fields = decompose(current);
    let hours = default_if_empty(&fields.hours, ZERO_FIELD);
    if raw_input.is_empty() {
        return Some(compose(hours, ZERO_FIELD));
    }
    let minutes = parse_int(raw_input)?.clamp(0, MAX_MINUTES);
    Some(compose(hours, &format!("{minutes:02}")))
}

/// Build a canonical time from numeric components, clamping each into range.
pub fn serialize(hours: i64, minutes: i64) -> String {
    format!(
        "{:02}{SEPARATOR}{:02}",
        hours.clamp(0, MAX_HOURS),
        minutes.clamp(0, MAX_MINUTES)
    )
}

/// True for the empty ("unset") value or a well-formed in-range `HH:MM`.
pub fn is_canonical(value: &str) -> bool {
    value.is_empty() || parse_canonical(value).is_some()
}

/// Convert a non-empty canonical value into a `NaiveTime`.
///
/// Returns `None` for the empty value and for anything not in canonical form.
pub fn to_naive_time(value: &str) -> Option<NaiveTime> {
    let (hours, minutes) = parse_canonical(value)?;
    NaiveTime::from_hms_opt(hours, minutes, 0)
}

/// Join two fields, left-padding each with zeros to two characters.
///
/// The fields are not re-validated: the "other" field always comes from the
/// owner's value and is only re-padded.
fn compose(hours: &str, minutes: &str) -> String {
    format!("{hours:0>2}{SEPARATOR}{minutes:0>2}")
}

/// Strict `HH:MM` parse: two digits, separator, two digits, in range.
fn parse_canonical(value: &str) -> Option<(u32, u32)> {
    let (hours, minutes) = value.split_once(SEPARATOR)?;
    let two_digits = |s: &str| s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit());
    if !two_digits(hours) || !two_digits(minutes) {
        return None;
    }
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    if i64::from(hours) > MAX_HOURS || i64::from(minutes) > MAX_MINUTES {
        return None;
    }
    Some((hours, minutes))
}

/// Lenient base-10 integer parse of a raw keystroke buffer.
///
/// Skips leading whitespace, accepts one optional sign, then reads the
/// longest run of ASCII digits and ignores whatever follows. Returns `None`
/// when no digit is present. Digit runs too long for `i64` saturate, so they
/// still clamp to the field's upper (or lower) bound.
fn parse_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude = rest[..digits_len].bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}
