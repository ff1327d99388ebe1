use libm::{trunc, truncf};

use crate::{CoreError, FloorDiv};

macro_rules! impl_floor_div_real {
    ($float:ty, $trunc:path) => {
        impl FloorDiv for $float {
            const SENTINEL: Self = 0.0;

            fn try_floor_div(self, divisor: Self) -> Result<Self, CoreError> {
                // Matches both signed zeros
                if divisor == 0.0 {
                    return Err(CoreError::DivisionByZero);
                }
                let quotient = self / divisor;
                let truncated = $trunc(quotient);
                if quotient > 0.0 && quotient != truncated {
                    Ok(truncated)
                } else if quotient < 0.0 && quotient != truncated {
                    Ok(truncated - 1.0)
                } else {
                    // Integral, or NaN / infinite
                    Ok(quotient)
                }
            }
        }
    };
}

impl_floor_div_real!(f64, trunc);
impl_floor_div_real!(f32, truncf);

/// Floor-divide two reals, returning 0.0 if the divisor is zero.
/// The result is always an integral value (or NaN / infinite for non-finite inputs).
///
/// # Parameters
/// - `a` - The dividend
/// - `b` - The divisor
///
/// # Returns
/// - `floor(a / b)`, or `0.0` if `b` is `0.0` or `-0.0`
pub fn floor_div_real(a: f64, b: f64) -> f64 {
    a.floor_div(b)
}

/// Floor-divide two reals.
///
/// # Returns
/// - `Ok`: `floor(a / b)` with a zero fractional part
/// - `Err(CoreError::DivisionByZero)` if `b` is `0.0` or `-0.0`
pub fn try_floor_div_real(a: f64, b: f64) -> Result<f64, CoreError> {
    a.try_floor_div(b)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(7.0, 2.0, 3.0)]
    #[case(-7.0, 2.0, -4.0)]
    #[case(7.0, -2.0, -4.0)]
    #[case(-7.0, -2.0, 3.0)]
    #[case(6.0, 3.0, 2.0)]
    #[case(-6.0, 3.0, -2.0)]
    #[case(0.5, 1.0, 0.0)]
    #[case(-0.5, 1.0, -1.0)]
    #[case(7.5, 0.5, 15.0)]
    #[case(1e300, 1e-10, f64::INFINITY)]
    fn test_floor_div_real(#[case] a: f64, #[case] b: f64, #[case] expected: f64) {
        assert_eq!(floor_div_real(a, b), expected);
        assert_eq!(try_floor_div_real(a, b), Ok(expected));
    }

    #[test]
    fn test_zero_divisor_returns_sentinel() {
        assert_eq!(floor_div_real(7.0, 0.0), 0.0);
        assert_eq!(floor_div_real(-7.0, -0.0), 0.0);
        assert_eq!(floor_div_real(f64::NAN, 0.0), 0.0);
    }

    #[test]
    fn test_zero_divisor_is_an_error() {
        assert_eq!(try_floor_div_real(7.0, 0.0), Err(CoreError::DivisionByZero));
        assert_eq!(try_floor_div_real(7.0, -0.0), Err(CoreError::DivisionByZero));
    }

    #[test]
    fn test_non_finite_quotients_pass_through() {
        assert!(floor_div_real(f64::NAN, 2.0).is_nan());
        assert_eq!(floor_div_real(f64::INFINITY, 2.0), f64::INFINITY);
        assert_eq!(floor_div_real(f64::NEG_INFINITY, 2.0), f64::NEG_INFINITY);
        assert_eq!(floor_div_real(1.0, f64::INFINITY), 0.0);
    }

    #[test]
    fn test_large_quotients_stay_integral() {
        let result = floor_div_real(-1e18, 3.0);
        assert_eq!(result.fract(), 0.0);
        assert_relative_eq!(result, -1e18 / 3.0, max_relative = 1e-12);
    }

    #[test]
    fn test_f32() {
        assert_eq!((-7f32).floor_div(2.0), -4.0);
        assert_eq!((7f32).floor_div(2.0), 3.0);
        assert_eq!((7f32).try_floor_div(0.0), Err(CoreError::DivisionByZero));
    }
}
