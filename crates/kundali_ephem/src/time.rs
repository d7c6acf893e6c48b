//! Civil time at the input boundary: UTC offsets, instants and Julian Dates.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};

use crate::error::EphemerisError;

/// Julian Date of the Unix epoch.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

const MS_PER_DAY: f64 = 86_400_000.0;

/// Parse a `[+-]HH:MM` UTC offset (hours 00-14, minutes 00-59).
pub fn parse_utc_offset(s: &str) -> Result<FixedOffset, EphemerisError> {
    let invalid = || EphemerisError::InvalidTimezoneFormat(s.to_string());
    let bytes = s.as_bytes();
    if bytes.len() != 6 || bytes[3] != b':' {
        return Err(invalid());
    }
    let sign = match bytes[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return Err(invalid()),
    };
    let digits = |a: u8, b: u8| -> Option<i32> {
        (a.is_ascii_digit() && b.is_ascii_digit()).then(|| ((a - b'0') * 10 + (b - b'0')) as i32)
    };
    let hours = digits(bytes[1], bytes[2]).ok_or_else(invalid)?;
    let minutes = digits(bytes[4], bytes[5]).ok_or_else(invalid)?;
    if hours > 14 || minutes > 59 {
        return Err(invalid());
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

/// Format an offset back to `[+-]HH:MM`.
pub fn format_utc_offset(offset: FixedOffset) -> String {
    let secs = offset.local_minus_utc();
    let sign = if secs < 0 { '-' } else { '+' };
    let abs = secs.abs();
    format!("{sign}{:02}:{:02}", abs / 3600, (abs % 3600) / 60)
}

/// Convert local civil fields at a fixed offset to a UTC instant.
pub fn local_to_utc(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    offset: FixedOffset,
) -> Result<DateTime<Utc>, EphemerisError> {
    let naive = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, second))
        .ok_or_else(|| {
            EphemerisError::InvalidDate(format!(
                "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"
            ))
        })?;
    offset
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| EphemerisError::InvalidDate(naive.to_string()))
}

/// Julian Date (UT) of an instant.
pub fn julian_day(instant: DateTime<Utc>) -> f64 {
    instant.timestamp_millis() as f64 / MS_PER_DAY + UNIX_EPOCH_JD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_india_offset() {
        let off = parse_utc_offset("+05:30").unwrap();
        assert_eq!(off.local_minus_utc(), 19_800);
    }

    #[test]
    fn parses_negative_offset() {
        let off = parse_utc_offset("-03:45").unwrap();
        assert_eq!(off.local_minus_utc(), -(3 * 3600 + 45 * 60));
        assert_eq!(format_utc_offset(off), "-03:45");
    }

    #[test]
    fn rejects_malformed_offsets() {
        for bad in ["05:30", "+5:30", "+05-30", "+0530", "+15:00", "+05:60", "", "+ab:cd", "+05:30 "] {
            assert!(
                matches!(parse_utc_offset(bad), Err(EphemerisError::InvalidTimezoneFormat(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn boundary_offsets_accepted() {
        assert!(parse_utc_offset("+14:00").is_ok());
        assert!(parse_utc_offset("-00:00").is_ok());
        assert!(parse_utc_offset("+14:59").is_ok());
    }

    #[test]
    fn local_minus_offset_is_utc() {
        let off = parse_utc_offset("+05:30").unwrap();
        let utc = local_to_utc(1990, 1, 1, 12, 0, 0, off).unwrap();
        assert_eq!(utc.to_rfc3339(), "1990-01-01T06:30:00+00:00");
    }

    #[test]
    fn invalid_calendar_date() {
        let off = parse_utc_offset("+00:00").unwrap();
        assert!(matches!(
            local_to_utc(2023, 2, 30, 0, 0, 0, off),
            Err(EphemerisError::InvalidDate(_))
        ));
        assert!(local_to_utc(2023, 1, 1, 24, 0, 0, off).is_err());
    }

    #[test]
    fn j2000_julian_day() {
        let t = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert!((julian_day(t) - 2_451_545.0).abs() < 1e-9);
    }
}
