//! Scalar helpers shared by the vector and matrix types.

/// Rounds `value` to `digits` decimal places, half away from zero.
///
/// Negative `digits` round to tens, hundreds and so on.
///
/// ```rust
/// use linalg_core::round_to;
///
/// assert_eq!(round_to(4.56, 1), 4.6);
/// assert_eq!(round_to(54.56, -1), 50.0);
/// assert_eq!(round_to(-3.5, 0), -4.0);
/// ```
#[inline]
pub fn round_to(value: f64, digits: i32) -> f64 {
    if digits == 0 {
        return value.round();
    }
    let factor = 10f64.powi(digits.abs());
    if digits > 0 {
        (value * factor).round() / factor
    } else {
        (value / factor).round() * factor
    }
}

/// Formats a component the way vector and matrix renderings show it.
///
/// Integral values keep a trailing `.0` (`3.0`, not `3`). Magnitudes from
/// `1e16` up, or below `1e-4`, switch to exponent form with no `+` sign and
/// no padding (`1e20`, `1.5e-7`).
#[inline]
pub fn format_real(value: f64) -> String {
    format!("{value:?}")
}

/// Joins components with `", "`.
pub fn join_reals(values: &[f64]) -> String {
    values
        .iter()
        .map(|&v| format_real(v))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_round_positive_digits() {
        assert_eq!(round_to(1.34, 1), 1.3);
        assert_eq!(round_to(-3.89, 1), -3.9);
        assert_eq!(round_to(4.56, 2), 4.56);
        assert_eq!(round_to(1.34, 3), 1.34);
    }

    #[test]
    fn test_round_zero_digits() {
        assert_eq!(round_to(1.34, 0), 1.0);
        assert_eq!(round_to(4.56, 0), 5.0);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
    }

    #[test]
    fn test_round_negative_digits() {
        assert_eq!(round_to(1.34, -1), 0.0);
        assert_eq!(round_to(-23.89, -1), -20.0);
        assert_relative_eq!(round_to(1250.0, -2), 1300.0);
    }

    #[test]
    fn test_format_real() {
        assert_eq!(format_real(0.0), "0.0");
        assert_eq!(format_real(1.1), "1.1");
        assert_eq!(format_real(-4.0), "-4.0");
        assert_eq!(join_reals(&[1.0, 2.5]), "1.0, 2.5");
    }

    #[test]
    fn test_format_real_extreme_magnitudes() {
        assert_eq!(format_real(1e15), "1000000000000000.0");
        assert_eq!(format_real(1e20), "1e20");
        assert_eq!(format_real(-1e20), "-1e20");
        assert_eq!(format_real(1.5e-7), "1.5e-7");
        assert_eq!(join_reals(&[1e20, 0.5]), "1e20, 0.5");
    }
}
