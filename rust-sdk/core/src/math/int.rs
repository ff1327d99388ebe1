use crate::{CoreError, FloorDiv, FloorDivRem};

macro_rules! impl_floor_div_int {
    ($($int:ty),*) => {$(
        impl FloorDiv for $int {
            const SENTINEL: Self = 0;

            #[inline]
            fn try_floor_div(self, divisor: Self) -> Result<Self, CoreError> {
                self.try_floor_div_rem(divisor).map(|(quotient, _)| quotient)
            }
        }

        impl FloorDivRem for $int {
            fn try_floor_div_rem(self, divisor: Self) -> Result<(Self, Self), CoreError> {
                if divisor == 0 {
                    return Err(CoreError::DivisionByZero);
                }
                // Only MIN / -1 fails here
                let quotient = self
                    .checked_div(divisor)
                    .ok_or(CoreError::ArithmeticOverflow)?;
                let remainder = self % divisor;

                // Truncation rounded toward zero, step down to the floor
                if remainder != 0 && ((self < 0) != (divisor < 0)) {
                    Ok((quotient - 1, remainder + divisor))
                } else {
                    Ok((quotient, remainder))
                }
            }
        }
    )*};
}

impl_floor_div_int!(i8, i16, i32, i64, i128, isize);

/// Floor-divide two integers, returning 0 if the division is undefined.
///
/// # Parameters
/// - `a` - The dividend
/// - `b` - The divisor
///
/// # Returns
/// - `floor(a / b)`, or `0` if `b` is zero or the quotient overflows (`i64::MIN / -1`)
pub fn floor_div_int(a: i64, b: i64) -> i64 {
    a.floor_div(b)
}

/// Floor-divide two integers.
///
/// # Parameters
/// - `a` - The dividend
/// - `b` - The divisor
///
/// # Returns
/// - `Ok`: `floor(a / b)`
/// - `Err(CoreError::DivisionByZero)` if `b` is zero
/// - `Err(CoreError::ArithmeticOverflow)` for `i64::MIN / -1`
pub fn try_floor_div_int(a: i64, b: i64) -> Result<i64, CoreError> {
    a.try_floor_div(b)
}

/// Floor-divide two integers and return the quotient with its remainder.
///
/// # Returns
/// - `Ok((q, r))` with `a == q * b + r` and `r` zero or signed like `b`
/// - `Err` under the same conditions as [`try_floor_div_int`]
pub fn try_floor_div_rem_int(a: i64, b: i64) -> Result<(i64, i64), CoreError> {
    a.try_floor_div_rem(b)
}
