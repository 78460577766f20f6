use crate::error::{Result, ServiceError};

/// Parses a route path id parameter into a strictly positive integer.
///
/// Accepts an optional leading `+` followed by one or more decimal digits and
/// nothing else; leading zeros parse as decimal (`"007"` -> 7). Anything else
/// (whitespace, `-`, decimals, non-digit text, zero, values beyond `u64`)
/// fails with the fixed 400 "Invalid ID provided" error.
pub fn parse_id(raw: &str) -> Result<u64> {
    // u64::from_str accepts exactly an optional leading '+' and decimal
    // digits, so a single parse covers the whole accepted grammar.
    match raw.parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ServiceError::InvalidId),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid(raw: &str) {
        match parse_id(raw) {
            Err(ServiceError::InvalidId) => {}
            other => panic!("expected InvalidId for {:?}, got {:?}", raw, other),
        }
    }

    #[test]
    fn accepts_positive_integers() {
        assert_eq!(parse_id("1").unwrap(), 1);
        assert_eq!(parse_id("7").unwrap(), 7);
        assert_eq!(parse_id("999999").unwrap(), 999_999);
    }

    #[test]
    fn accepts_leading_zeros_as_decimal() {
        assert_eq!(parse_id("007").unwrap(), 7);
        assert_eq!(parse_id("00010").unwrap(), 10);
    }

    #[test]
    fn accepts_one_leading_plus_sign() {
        assert_eq!(parse_id("+1").unwrap(), 1);
        assert_eq!(parse_id("+42").unwrap(), 42);
    }

    #[test]
    fn accepts_large_values_within_range() {
        assert_eq!(
            parse_id("9007199254740991").unwrap(),
            9_007_199_254_740_991
        );
    }

    #[test]
    fn rejects_zero_in_any_spelling() {
        assert_invalid("0");
        assert_invalid("00");
        assert_invalid("+0");
    }

    #[test]
    fn rejects_malformed_input() {
        for raw in [
            "",
            "abc",
            "1.5",
            "-1",
            " 1",
            "1 ",
            "+",
            "++1",
            "1e3",
            "0x10",
            "Infinity",
            "NaN",
            "null",
            "undefined",
        ] {
            assert_invalid(raw);
        }
    }

    #[test]
    fn rejects_values_beyond_the_id_range() {
        // u64::MAX + 1
        assert_invalid("18446744073709551616");
    }

    #[test]
    fn invalid_id_error_carries_the_fixed_message() {
        let err = parse_id("abc").unwrap_err();
        assert_eq!(err.to_string(), "Invalid ID provided");
    }
}
