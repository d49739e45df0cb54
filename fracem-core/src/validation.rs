//! Guards for physical magnitudes supplied by callers.

use crate::errors::{FracError, FracResult};
use crate::FloatValue;

fn invalid(name: &str, value: FloatValue, reason: &'static str) -> FracError {
    FracError::InvalidArgument {
        name: name.to_string(),
        value,
        reason,
    }
}

/// Value must be finite and strictly positive (used for divisors).
pub(crate) fn ensure_positive(name: &str, value: FloatValue) -> FracResult<FloatValue> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(invalid(name, value, "must be finite and greater than zero"))
    }
}

/// Value must be finite and not negative (amounts, distances).
pub(crate) fn ensure_non_negative(name: &str, value: FloatValue) -> FracResult<FloatValue> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(invalid(name, value, "must be finite and not negative"))
    }
}

/// Value must lie in [0, 1].
pub(crate) fn ensure_fraction(name: &str, value: FloatValue) -> FracResult<FloatValue> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(invalid(name, value, "must be between 0 and 1"))
    }
}

/// Value must lie in (0, 1].
pub(crate) fn ensure_efficiency(name: &str, value: FloatValue) -> FracResult<FloatValue> {
    if value > 0.0 && value <= 1.0 {
        Ok(value)
    } else {
        Err(invalid(name, value, "must be greater than 0 and at most 1"))
    }
}

/// Calculated quantity must be finite; huge but finite inputs can overflow.
pub(crate) fn ensure_finite_result(name: &str, value: FloatValue) -> FracResult<FloatValue> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid(name, value, "inputs are too large to give a finite result"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_rejects_zero_and_nan() {
        assert!(ensure_positive("x", 1.5).is_ok());
        assert!(ensure_positive("x", 0.0).is_err());
        assert!(ensure_positive("x", -2.0).is_err());
        assert!(ensure_positive("x", FloatValue::NAN).is_err());
        assert!(ensure_positive("x", FloatValue::INFINITY).is_err());
    }

    #[test]
    fn test_non_negative_accepts_zero() {
        assert!(ensure_non_negative("x", 0.0).is_ok());
        assert!(ensure_non_negative("x", -0.1).is_err());
    }

    #[test]
    fn test_fraction_bounds() {
        assert!(ensure_fraction("x", 0.0).is_ok());
        assert!(ensure_fraction("x", 1.0).is_ok());
        assert!(ensure_fraction("x", 1.01).is_err());
        assert!(ensure_fraction("x", FloatValue::NAN).is_err());
    }

    #[test]
    fn test_efficiency_excludes_zero() {
        assert!(ensure_efficiency("x", 0.0).is_err());
        assert!(ensure_efficiency("x", 1.0).is_ok());
    }

    #[test]
    fn test_finite_result() {
        assert!(ensure_finite_result("x", 1e300).is_ok());
        assert!(ensure_finite_result("x", FloatValue::INFINITY).is_err());
        assert!(ensure_finite_result("x", FloatValue::NAN).is_err());
    }

    #[test]
    fn test_error_names_argument() {
        let err = ensure_positive("sand_load", 0.0).unwrap_err();
        assert!(err.to_string().contains("sand_load"));
    }
}
