//! Conversions between segment values, their fixed-width display strings,
//! and the right-aligned digit buffers typed by the user.

use crate::SegmentSpec;

/// Render `value` the way the digit display shows it.
///
/// With decimal places the value is rounded to exactly that many fraction
/// digits; otherwise it is shown as an integer. The integer part is then
/// left-padded with zeros to `pad_start`.
pub fn format_value(value: f64, spec: &SegmentSpec) -> String {
    let formatted = match spec.decimal_places {
        Some(places) => format!("{:.*}", places, value),
        None => format!("{}", value.round() as i64),
    };

    match spec.pad_start {
        Some(width) => pad_integer_part(&formatted, width),
        None => formatted,
    }
}

fn pad_integer_part(formatted: &str, width: usize) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut out = format!("{}{:0>width$}", sign, integer, width = width);
    if let Some(f) = fraction {
        out.push('.');
        out.push_str(f);
    }
    out
}

/// Interpret a partially typed digit buffer as a segment value.
///
/// The buffer is right-padded with zeros to `max_digits`; with decimal places
/// the trailing `decimal_places` digits form the fraction. An empty buffer is
/// zero. The result is saturated into the segment's bounds.
pub fn parse_typed_digits(typed: &str, spec: &SegmentSpec) -> f64 {
    let places = spec.decimal_places.unwrap_or(0);

    let raw = if places > 0 {
        let width = spec.max_digits.max(typed.len());
        let padded = typed.chars().chain(std::iter::repeat('0')).take(width);
        fold_digits(padded) / 10f64.powi(places as i32)
    } else {
        fold_digits(typed.chars())
    };

    spec.clamp(raw)
}

fn fold_digits(chars: impl Iterator<Item = char>) -> f64 {
    chars
        .filter_map(|c| c.to_digit(10))
        .fold(0.0, |acc, d| acc * 10.0 + d as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The `max_digits`-wide buffer that types out the magnitude of `value`.
    fn digit_buffer(value: f64, spec: &SegmentSpec) -> String {
        let places = spec.decimal_places.unwrap_or(0);
        let scaled = (spec.clamp(value).abs() * 10f64.powi(places as i32)).round() as u64;
        let full = format!("{:0>width$}", scaled, width = spec.max_digits);
        full[full.len() - spec.max_digits..].to_string()
    }

    fn distance() -> SegmentSpec {
        SegmentSpec::digits(4).decimals(2).range(0.0, 99.99).pad(2)
    }

    fn seconds() -> SegmentSpec {
        SegmentSpec::digits(2).range(0.0, 59.0).pad(2)
    }

    #[test]
    fn formats_decimals_with_padding() {
        assert_eq!(format_value(10.93, &distance()), "10.93");
        assert_eq!(format_value(5.5, &distance()), "05.50");
        assert_eq!(format_value(0.0, &distance()), "00.00");
    }

    #[test]
    fn rounds_to_configured_places() {
        let seg = SegmentSpec::digits(3).decimals(2);
        assert_eq!(format_value(2.346, &seg), "2.35");
        assert_eq!(format_value(2.344, &seg), "2.34");
    }

    #[test]
    fn formats_integers() {
        assert_eq!(format_value(5.0, &seconds()), "05");
        assert_eq!(format_value(7.0, &SegmentSpec::digits(1)), "7");
        assert_eq!(format_value(123.0, &SegmentSpec::digits(3).pad(2)), "123");
    }

    #[test]
    fn padding_keeps_sign_in_front() {
        assert_eq!(format_value(-4.0, &SegmentSpec::digits(2).pad(3)), "-004");
    }

    #[test]
    fn parses_distance_buffer_progressively() {
        let spec = distance();
        assert_eq!(parse_typed_digits("1", &spec), 10.0);
        assert_eq!(parse_typed_digits("10", &spec), 10.0);
        assert_eq!(parse_typed_digits("109", &spec), 10.9);
        assert_eq!(parse_typed_digits("1093", &spec), 10.93);
    }

    #[test]
    fn empty_buffer_is_zero() {
        assert_eq!(parse_typed_digits("", &seconds()), 0.0);
        assert_eq!(parse_typed_digits("", &distance()), 0.0);
    }

    #[test]
    fn empty_buffer_respects_lower_bound() {
        let seg = SegmentSpec::digits(2).range(1.0, 12.0);
        assert_eq!(parse_typed_digits("", &seg), 1.0);
    }

    #[test]
    fn parsed_value_saturates_at_max() {
        assert_eq!(parse_typed_digits("75", &seconds()), 59.0);
        assert_eq!(parse_typed_digits("05", &seconds()), 5.0);
    }

    #[test]
    fn zero_decimal_places_parse_as_integer() {
        let seg = SegmentSpec::digits(2).decimals(0);
        assert_eq!(parse_typed_digits("4", &seg), 4.0);
    }

    #[test]
    fn digit_buffer_round_trips_every_distance() {
        let spec = distance();
        for hundredths in 0..=9999u32 {
            let v = hundredths as f64 / 100.0;
            let buf = digit_buffer(v, &spec);
            assert_eq!(buf.len(), spec.max_digits);
            assert_eq!(parse_typed_digits(&buf, &spec), spec.clamp(v), "value {}", v);
        }
    }

    #[test]
    fn digit_buffer_round_trips_seconds() {
        let spec = seconds();
        for s in 0..=59 {
            let buf = digit_buffer(s as f64, &spec);
            assert_eq!(parse_typed_digits(&buf, &spec), s as f64);
        }
        assert_eq!(digit_buffer(5.0, &spec), "05");
    }
}
