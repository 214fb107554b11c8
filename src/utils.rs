/// Common utility functions.
use crate::FieldValue;

/// Returns `true` if input is a non-empty sequence of decimal digits, without sign or spaces.
#[inline]
pub(crate) fn is_plain_number(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// Converts plain decimal string into unsigned number without bounds validation.
///
/// Numbers which don't fit into `u32` saturate to `u32::MAX`.
pub(crate) fn parse_plain_number(input: &str) -> Option<u32> {
    if is_plain_number(input) {
        // digits only, so the only possible failure is overflow
        Some(input.parse().unwrap_or(u32::MAX))
    } else {
        None
    }
}

/// Converts string into unsigned number with bounds validation.
pub(crate) fn parse_digital_value(input: &str, min: FieldValue, max: FieldValue) -> Option<FieldValue> {
    let value = parse_plain_number(input)?;
    if value < min as u32 || value > max as u32 {
        None
    } else {
        FieldValue::try_from(value).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0", true)]
    #[case("7", true)]
    #[case("0042", true)]
    #[case("99999999999999999999", true)]
    #[case("", false)]
    #[case(" 1", false)]
    #[case("1 ", false)]
    #[case("-1", false)]
    #[case("+1", false)]
    #[case("1.5", false)]
    #[case("abc", false)]
    #[case("١", false)]
    fn test_is_plain_number(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_plain_number(input), expected, "input = {input}");
    }

    #[rstest]
    #[case("0", Some(0))]
    #[case("0059", Some(59))]
    #[case("4294967295", Some(u32::MAX))]
    #[case("4294967296", Some(u32::MAX))]
    #[case("99999999999999999999", Some(u32::MAX))]
    #[case("", None)]
    #[case("-5", None)]
    #[case("5-", None)]
    fn test_parse_plain_number(#[case] input: &str, #[case] expected: Option<u32>) {
        assert_eq!(parse_plain_number(input), expected, "input = {input}");
    }

    #[test]
    fn parse_digital_value_valid_value_within_range() {
        assert_eq!(parse_digital_value("5", 0, 10), Some(5));
        assert_eq!(parse_digital_value("0", 0, 10), Some(0));
        assert_eq!(parse_digital_value("10", 0, 10), Some(10));
        assert_eq!(parse_digital_value("07", 0, 10), Some(7));
    }

    #[test]
    fn parse_digital_value_value_below_minimum() {
        assert_eq!(parse_digital_value("5", 10, 20), None);
    }

    #[test]
    fn parse_digital_value_value_above_maximum() {
        assert_eq!(parse_digital_value("25", 0, 20), None);
        assert_eq!(parse_digital_value("256", 0, 255), None);
        assert_eq!(parse_digital_value("99999999999999999999", 0, 59), None);
    }

    #[test]
    fn parse_digital_value_invalid_input() {
        assert_eq!(parse_digital_value("abc", 0, 10), None);
        assert_eq!(parse_digital_value("", 0, 10), None);
        assert_eq!(parse_digital_value("-1", 0, 10), None);
        assert_eq!(parse_digital_value("+1", 0, 10), None);
        assert_eq!(parse_digital_value("1.5", 0, 10), None);
    }

    #[test]
    fn parse_digital_value_edge_cases() {
        // Test with min equal to max
        assert_eq!(parse_digital_value("5", 5, 5), Some(5));
        assert_eq!(parse_digital_value("4", 5, 5), None);
        assert_eq!(parse_digital_value("6", 5, 5), None);

        // Test with the widest bounds
        assert_eq!(parse_digital_value("255", 0, 255), Some(255));
    }
}
