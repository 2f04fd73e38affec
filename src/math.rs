//! Logarithm helper shared by every model stage

/// Logarithm of `value` in `base`, or the natural logarithm when `base` is `None`.
///
/// Computed as `ln(value) / ln(base)` so every stage uses the same
/// base-change convention. No validation is performed: `value <= 0` yields
/// NaN or negative infinity.
///
/// ```
/// use visual_performance::math::log;
///
/// assert!((log(100.0, Some(10.0)) - 2.0).abs() < 1e-15);
/// assert_eq!(log(1.0, None), 0.0);
/// ```
pub fn log(value: f64, base: Option<f64>) -> f64 {
    match base {
        Some(base) => value.ln() / base.ln(),
        None => value.ln(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_natural_log_default() {
        assert_relative_eq!(log(std::f64::consts::E, None), 1.0, epsilon = 1e-15);
        assert_eq!(log(7.5, None), 7.5_f64.ln());
    }

    #[test]
    fn test_explicit_base() {
        assert_relative_eq!(log(1000.0, Some(10.0)), 3.0, epsilon = 1e-12);
        assert_relative_eq!(log(8.0, Some(2.0)), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_non_positive_values() {
        assert_eq!(log(0.0, None), f64::NEG_INFINITY);
        assert!(log(-1.0, None).is_nan());
        assert!(log(-1.0, Some(10.0)).is_nan());
    }
}
