//! Strict RFC 3339 date-time parsing and formatting.
//!
//! Converts between RFC 3339 `date-time` strings and the internal representation:
//! - whole seconds since Unix epoch (1970-01-01T00:00:00Z)
//! - nanoseconds within that second
//! - UTC offset in minutes
//!
//! Only the exact grammar of RFC 3339 section 5.6 is accepted: a four-digit year,
//! an uppercase `T` separator and an explicit `Z` or `±hh:mm` offset. The space
//! separator allowed by the RFC's prose note is rejected, and so are leap seconds.

use std::ops::RangeInclusive;

use crate::error::{FormatError, FormatErrorKind};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
const NANOS_DIGITS: usize = 9;

/// Wall-clock fields of a timestamp as seen in its own offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

/// Byte cursor over the input. Works on bytes so non-ASCII input can never
/// split a char boundary.
struct Scanner<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    fn fail(&self, kind: FormatErrorKind) -> FormatError {
        FormatError::new(self.input, kind)
    }

    fn is_done(&self) -> bool {
        self.pos == self.bytes.len()
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, byte: u8) -> Result<(), FormatError> {
        if self.eat(byte) {
            Ok(())
        } else {
            Err(self.fail(FormatErrorKind::Separator {
                expected: char::from(byte),
                position: self.pos,
            }))
        }
    }

    /// Reads exactly `width` ASCII digits.
    fn digits(&mut self, width: usize) -> Option<u32> {
        let field = self.bytes.get(self.pos..self.pos + width)?;
        if !field.iter().all(u8::is_ascii_digit) {
            return None;
        }
        self.pos += width;
        Some(field.iter().fold(0, |acc, b| acc * 10 + u32::from(b - b'0')))
    }

    fn field(
        &mut self,
        width: usize,
        range: RangeInclusive<u32>,
        kind: FormatErrorKind,
    ) -> Result<u32, FormatError> {
        self.digits(width)
            .filter(|value| range.contains(value))
            .ok_or_else(|| self.fail(kind))
    }

    /// Reads one or more digits after the decimal point and returns nanoseconds.
    /// Digits past the ninth are consumed but do not contribute.
    fn fraction(&mut self) -> Option<u32> {
        let start = self.pos;
        let mut nanos = 0u32;
        while let Some(b) = self.peek().filter(u8::is_ascii_digit) {
            if self.pos - start < NANOS_DIGITS {
                nanos = nanos * 10 + u32::from(b - b'0');
            }
            self.pos += 1;
        }

        let len = self.pos - start;
        if len == 0 {
            return None;
        }
        let scale = NANOS_DIGITS.saturating_sub(len) as u32;
        Some(nanos * 10u32.pow(scale))
    }

    /// Reads `Z`, `+hh:mm` or `-hh:mm` and returns the offset in minutes.
    fn offset(&mut self) -> Result<i16, FormatError> {
        if self.eat(b'Z') {
            return Ok(0);
        }

        let sign = match self.peek() {
            Some(b'+') => 1i16,
            Some(b'-') => -1i16,
            _ => return Err(self.fail(FormatErrorKind::Offset)),
        };
        self.pos += 1;

        let hours = self.field(2, 0..=23, FormatErrorKind::Offset)?;
        if !self.eat(b':') {
            return Err(self.fail(FormatErrorKind::Offset));
        }
        let minutes = self.field(2, 0..=59, FormatErrorKind::Offset)?;

        Ok(sign * (hours * 60 + minutes) as i16)
    }
}

/// Returns true if the given year is a leap year.
fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Returns the number of days in a given month (1-indexed).
fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Calculates days since Unix epoch for a proleptic Gregorian date.
fn date_to_days(year: i64, month: u32, day: u32) -> i64 {
    // Howard Hinnant's days_from_civil
    let y = if month <= 2 { year - 1 } else { year };
    let m = i64::from(if month <= 2 { month + 9 } else { month - 3 });

    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400; // year of era
    let doy = (153 * m + 2) / 5 + i64::from(day) - 1; // day of year
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // day of era

    era * 146_097 + doe - 719_468
}

/// Converts days since Unix epoch to (year, month, day).
fn days_to_date(days: i64) -> (i64, u32, u32) {
    // Howard Hinnant's civil_from_days
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097; // day of era
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // year of era
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // day of year
    let mp = (5 * doy + 2) / 153; // month index
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };

    let year = if m <= 2 { y + 1 } else { y };
    (year, m as u32, d as u32)
}

/// Formats an offset in minutes as `Z`, `+hh:mm` or `-hh:mm`.
fn format_timezone_offset(offset_min: i16) -> String {
    if offset_min == 0 {
        return "Z".to_string();
    }

    let sign = if offset_min >= 0 { '+' } else { '-' };
    let abs_offset = offset_min.unsigned_abs();
    format!("{}{:02}:{:02}", sign, abs_offset / 60, abs_offset % 60)
}

/// Formats nanoseconds as fractional seconds, omitting them if zero.
fn format_fractional_seconds(nanos: u32) -> String {
    if nanos == 0 {
        return String::new();
    }

    let digits = format!("{:09}", nanos);
    format!(".{}", digits.trim_end_matches('0'))
}

/// Parses a strict RFC 3339 date-time and returns seconds since Unix epoch,
/// nanoseconds and the offset in minutes.
pub fn parse_datetime_rfc3339(input: &str) -> Result<(i64, u32, i16), FormatError> {
    let mut s = Scanner::new(input);

    let year = s.field(4, 0..=9999, FormatErrorKind::Year)?;
    s.expect(b'-')?;
    let month = s.field(2, 1..=12, FormatErrorKind::Month)?;
    s.expect(b'-')?;
    let day = s.field(2, 1..=days_in_month(year, month), FormatErrorKind::Day)?;

    s.expect(b'T')?;

    let hour = s.field(2, 0..=23, FormatErrorKind::Hour)?;
    s.expect(b':')?;
    let minute = s.field(2, 0..=59, FormatErrorKind::Minute)?;
    s.expect(b':')?;
    let second = s.field(2, 0..=59, FormatErrorKind::Second)?;

    let nanos = if s.eat(b'.') {
        s.fraction().ok_or_else(|| s.fail(FormatErrorKind::Fraction))?
    } else {
        0
    };

    let offset_min = s.offset()?;

    if !s.is_done() {
        return Err(s.fail(FormatErrorKind::Trailing { position: s.pos }));
    }

    let local = date_to_days(i64::from(year), month, day) * SECONDS_PER_DAY
        + i64::from(hour) * SECONDS_PER_HOUR
        + i64::from(minute) * SECONDS_PER_MINUTE
        + i64::from(second);

    // local time = UTC + offset, so UTC = local - offset
    let seconds = local - i64::from(offset_min) * SECONDS_PER_MINUTE;

    Ok((seconds, nanos, offset_min))
}

/// Splits an instant into wall-clock fields in the given offset.
pub fn civil_datetime(seconds: i64, offset_min: i16) -> CivilDateTime {
    let local = seconds + i64::from(offset_min) * SECONDS_PER_MINUTE;
    let days = local.div_euclid(SECONDS_PER_DAY);
    let secs_of_day = local.rem_euclid(SECONDS_PER_DAY);

    let (year, month, day) = days_to_date(days);

    CivilDateTime {
        year: year as i32,
        month: month as u8,
        day: day as u8,
        hour: (secs_of_day / SECONDS_PER_HOUR) as u8,
        minute: (secs_of_day % SECONDS_PER_HOUR / SECONDS_PER_MINUTE) as u8,
        second: (secs_of_day % SECONDS_PER_MINUTE) as u8,
    }
}

/// Formats an instant as an RFC 3339 date-time in the given offset.
pub fn format_datetime_rfc3339(seconds: i64, nanos: u32, offset_min: i16) -> String {
    let c = civil_datetime(seconds, offset_min);

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}{}{}",
        c.year,
        c.month,
        c.day,
        c.hour,
        c.minute,
        c.second,
        format_fractional_seconds(nanos),
        format_timezone_offset(offset_min)
    )
}
