//! Reusable formatting utilities for flight summaries
//!
//! Parsing and display helpers for the vendor's durations, prices, and
//! timestamps.

use crate::error::ParseError;

/// Parse an ISO-8601 time duration (`PT[<n>H][<n>M][<n>S]`) into whole
/// minutes.
///
/// Every component is optional and an absent component counts as zero;
/// seconds are accepted but dropped. Components must appear in H, M, S order.
///
/// # Example
/// - `PT2H30M` → 150
/// - `PT45M` → 45
/// - `PT` → 0
pub fn parse_iso_duration(duration: &str) -> Result<u32, ParseError> {
    let invalid = || ParseError::InvalidDuration(duration.to_string());

    let mut rest = duration.strip_prefix("PT").ok_or_else(invalid)?;
    let mut minutes: u32 = 0;

    for (unit, factor) in [('H', 60), ('M', 1), ('S', 0)] {
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 || !rest[digits..].starts_with(unit) {
            continue;
        }

        let value: u32 = rest[..digits].parse().map_err(|_| invalid())?;
        minutes = value
            .checked_mul(factor)
            .and_then(|v| minutes.checked_add(v))
            .ok_or_else(invalid)?;
        rest = &rest[digits + 1..];
    }

    if !rest.is_empty() {
        return Err(invalid());
    }

    Ok(minutes)
}

/// Format minutes as `<H>h <M>m` without zero padding.
pub fn format_duration_minutes(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Format a stop count: `Nonstop`, `1 stop`, `<n> stops`.
pub fn format_stops(stops: usize) -> String {
    match stops {
        0 => "Nonstop".to_string(),
        1 => "1 stop".to_string(),
        n => format!("{} stops", n),
    }
}

/// Round a decimal price string to the nearest whole unit and prefix `$`.
///
/// Always `$`-prefixed, whatever the offer's currency.
pub fn format_price(total: &str) -> Result<String, ParseError> {
    let value: f64 = total
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidPrice(total.to_string()))?;

    let rounded = value.round();
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
    if !rounded.is_finite() || rounded < i64::MIN as f64 || rounded >= i64::MAX as f64 {
        return Err(ParseError::InvalidPrice(total.to_string()));
    }

    Ok(format!("${}", rounded as i64))
}

/// Extract `HH:MM` from a local timestamp like `2025-08-05T17:40:00`.
///
/// Seconds and any offset suffix are dropped.
pub fn time_of_day(timestamp: &str) -> Result<String, ParseError> {
    let invalid = || ParseError::InvalidTimestamp(timestamp.to_string());

    let (_, time) = timestamp.split_once('T').ok_or_else(invalid)?;
    let hh_mm = time.get(..5).ok_or_else(invalid)?;

    let bytes = hh_mm.as_bytes();
    let well_formed =
        bytes[2] == b':' && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit());
    if !well_formed {
        return Err(invalid());
    }

    Ok(hh_mm.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_duration_hours_and_minutes() {
        assert_eq!(parse_iso_duration("PT2H30M"), Ok(150));
        assert_eq!(parse_iso_duration("PT1H15M"), Ok(75));
        assert_eq!(parse_iso_duration("PT10H5M"), Ok(605));
    }

    #[test]
    fn test_parse_iso_duration_single_component() {
        assert_eq!(parse_iso_duration("PT45M"), Ok(45));
        assert_eq!(parse_iso_duration("PT8H"), Ok(480));
        assert_eq!(parse_iso_duration("PT"), Ok(0));
    }

    #[test]
    fn test_parse_iso_duration_drops_seconds() {
        assert_eq!(parse_iso_duration("PT1H2M59S"), Ok(62));
        assert_eq!(parse_iso_duration("PT30S"), Ok(0));
    }

    #[test]
    fn test_parse_iso_duration_rejects_malformed() {
        for raw in ["", "2H30M", "P1DT2H", "PT2X", "PT30M2H", "PTH", "PT2H30M extra"] {
            assert_eq!(
                parse_iso_duration(raw),
                Err(ParseError::InvalidDuration(raw.to_string())),
                "expected {:?} to be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_parse_iso_duration_overflow() {
        assert!(parse_iso_duration("PT99999999999H").is_err());
    }

    #[test]
    fn test_duration_sum_formats() {
        let outbound = parse_iso_duration("PT2H30M").unwrap();
        let inbound = parse_iso_duration("PT1H15M").unwrap();
        let total = outbound + inbound;
        assert_eq!(total, 225);
        assert_eq!(format_duration_minutes(total), "3h 45m");
    }

    #[test]
    fn test_format_duration_minutes_no_padding() {
        assert_eq!(format_duration_minutes(0), "0h 0m");
        assert_eq!(format_duration_minutes(65), "1h 5m");
        assert_eq!(format_duration_minutes(1215), "20h 15m");
    }

    #[test]
    fn test_format_stops() {
        assert_eq!(format_stops(0), "Nonstop");
        assert_eq!(format_stops(1), "1 stop");
        assert_eq!(format_stops(2), "2 stops");
        assert_eq!(format_stops(3), "3 stops");
    }

    #[test]
    fn test_format_price_rounding() {
        assert_eq!(format_price("456.70"), Ok("$457".to_string()));
        assert_eq!(format_price("456.40"), Ok("$456".to_string()));
        assert_eq!(format_price("456.50"), Ok("$457".to_string()));
        assert_eq!(format_price("12345.99"), Ok("$12346".to_string()));
        assert_eq!(format_price("0"), Ok("$0".to_string()));
    }

    #[test]
    fn test_format_price_invalid() {
        assert!(format_price("").is_err());
        assert!(format_price("abc").is_err());
        assert!(format_price("NaN").is_err());
        assert!(format_price("inf").is_err());
        assert!(format_price("1e300").is_err());
        assert!(format_price("-1e300").is_err());
    }

    #[test]
    fn test_time_of_day() {
        assert_eq!(time_of_day("2025-08-05T17:40:00"), Ok("17:40".to_string()));
        assert_eq!(time_of_day("2025-08-06T08:05"), Ok("08:05".to_string()));
        assert_eq!(
            time_of_day("2025-08-06T23:59:59+02:00"),
            Ok("23:59".to_string())
        );
    }

    #[test]
    fn test_time_of_day_invalid() {
        assert!(time_of_day("2025-08-05").is_err());
        assert!(time_of_day("2025-08-05T7:4").is_err());
        assert!(time_of_day("2025-08-05Tab:cd").is_err());
    }
}
