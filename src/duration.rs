//! Compound duration parsing
//!
//! Parses strings such as `3h50m`, `1.5h` or `90s` into a [`chrono::Duration`].
//! A duration is one or more `<number><unit>` tokens; numbers may carry a
//! decimal fraction and units are `ns`, `us` (`µs`), `ms`, `s`, `m` and `h`.
//! The literal `0` is accepted on its own. Negative durations are rejected.

use chrono::Duration;

use crate::error::RecordError;

const NANOS_PER_HOUR: f64 = 3_600_000_000_000.0;

/// Largest representable total, in nanoseconds
const MAX_NANOS: u64 = i64::MAX as u64;

/// Parse a compound duration string
pub fn parse_duration(input: &str) -> Result<Duration, RecordError> {
    let invalid = || RecordError::InvalidDuration(input.to_string());

    let mut rest = input.strip_prefix('+').unwrap_or(input);
    if rest.starts_with('-') {
        return Err(invalid());
    }
    if rest == "0" {
        return Ok(Duration::zero());
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        let (token_nanos, remainder) = parse_token(rest).ok_or_else(invalid)?;
        total = total
            .checked_add(token_nanos)
            .filter(|t| *t <= MAX_NANOS)
            .ok_or_else(invalid)?;
        rest = remainder;
    }

    let nanos = i64::try_from(total).map_err(|_| invalid())?;
    Ok(Duration::nanoseconds(nanos))
}

/// Length of a duration in fractional hours
pub fn hours(duration: &Duration) -> f64 {
    match duration.num_nanoseconds() {
        Some(nanos) => nanos as f64 / NANOS_PER_HOUR,
        // Beyond the nanosecond range: fall back to whole seconds
        None => duration.num_seconds() as f64 / 3600.0,
    }
}

/// Parse a single `<number><unit>` token, returning its length in nanoseconds
/// and the unconsumed input
fn parse_token(input: &str) -> Option<(u64, &str)> {
    let first = input.as_bytes().first()?;
    if !(first.is_ascii_digit() || *first == b'.') {
        return None;
    }

    let (whole, rest) = leading_int(input)?;
    let has_whole = rest.len() != input.len();

    let (fraction, scale, rest, has_fraction) = match rest.strip_prefix('.') {
        Some(after_dot) => {
            let (fraction, scale, remainder) = leading_fraction(after_dot);
            (fraction, scale, remainder, remainder.len() != after_dot.len())
        }
        None => (0, 1.0, rest, false),
    };
    if !has_whole && !has_fraction {
        return None;
    }

    let unit_len = rest
        .bytes()
        .position(|b| b == b'.' || b.is_ascii_digit())
        .unwrap_or(rest.len());
    if unit_len == 0 {
        return None;
    }
    let (unit, rest) = rest.split_at(unit_len);
    let unit_nanos = unit_in_nanos(unit)?;

    let mut nanos = whole.checked_mul(unit_nanos).filter(|n| *n <= MAX_NANOS)?;
    if fraction > 0 {
        nanos += (fraction as f64 * (unit_nanos as f64 / scale)) as u64;
        if nanos > MAX_NANOS {
            return None;
        }
    }
    Some((nanos, rest))
}

/// Consume leading ASCII digits; `None` on overflow
fn leading_int(input: &str) -> Option<(u64, &str)> {
    let digits = input.bytes().take_while(u8::is_ascii_digit).count();
    let mut value: u64 = 0;
    for b in input[..digits].bytes() {
        value = value
            .checked_mul(10)?
            .checked_add(u64::from(b - b'0'))
            .filter(|v| *v <= MAX_NANOS)?;
    }
    Some((value, &input[digits..]))
}

/// Consume leading fractional digits, returning the digits as an integer and
/// the power of ten they are scaled by. Digits past the representable
/// precision are consumed but ignored.
fn leading_fraction(input: &str) -> (u64, f64, &str) {
    let digits = input.bytes().take_while(u8::is_ascii_digit).count();
    let mut value: u64 = 0;
    let mut scale = 1.0;
    let mut saturated = false;
    for b in input[..digits].bytes() {
        if saturated {
            continue;
        }
        match value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(b - b'0')))
            .filter(|v| *v <= MAX_NANOS)
        {
            Some(next) => {
                value = next;
                scale *= 10.0;
            }
            None => saturated = true,
        }
    }
    (value, scale, &input[digits..])
}

fn unit_in_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(1_000_000_000),
        "m" => Some(60 * 1_000_000_000),
        "h" => Some(3_600 * 1_000_000_000),
        _ => None,
    }
}
