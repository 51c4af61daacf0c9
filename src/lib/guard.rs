/// Return `value` when it is a number within `[min, max]`, otherwise `fallback`.
pub fn validate_value(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() || value < min || value > max {
        return fallback;
    }
    value
}

/// Parse textual form input and validate it with [`validate_value`].
/// Unparsable or empty text yields `fallback`.
pub fn validate_number(value: &str, min: f64, max: f64, fallback: f64) -> f64 {
    match value.trim().parse::<f64>() {
        Ok(num) => validate_value(num, min, max, fallback),
        Err(_) => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_value_in_range() {
        assert_eq!(validate_value(16.0, 2.0, 10000.0, 16.0), 16.0);
        assert_eq!(validate_value(2.0, 2.0, 10000.0, 16.0), 2.0);
        assert_eq!(validate_value(10000.0, 2.0, 10000.0, 16.0), 10000.0);
    }

    #[test]
    fn test_validate_value_out_of_range() {
        assert_eq!(validate_value(1.0, 2.0, 10000.0, 16.0), 16.0);
        assert_eq!(validate_value(10001.0, 2.0, 10000.0, 16.0), 16.0);
        assert_eq!(validate_value(f64::NAN, 2.0, 10000.0, 16.0), 16.0);
        assert_eq!(validate_value(f64::INFINITY, 2.0, 10000.0, 16.0), 16.0);
    }

    #[test]
    fn test_validate_number_parses() {
        assert_eq!(validate_number("42", 0.0, 100.0, 50.0), 42.0);
        assert_eq!(validate_number(" 7.5 ", 0.0, 100.0, 50.0), 7.5);
        assert_eq!(validate_number("abc", 0.0, 100.0, 50.0), 50.0);
        assert_eq!(validate_number("", 0.0, 100.0, 50.0), 50.0);
        assert_eq!(validate_number("NaN", 0.0, 100.0, 50.0), 50.0);
        assert_eq!(validate_number("101", 0.0, 100.0, 50.0), 50.0);
    }
}
