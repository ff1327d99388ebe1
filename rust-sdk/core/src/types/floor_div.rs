use crate::CoreError;

/// Division that rounds the quotient toward negative infinity.
///
/// Implemented for every signed primitive integer and, with the `floats`
/// feature, for `f32` and `f64`.
pub trait FloorDiv: Copy {
    /// Value returned by [`FloorDiv::floor_div`] when the checked form fails.
    const SENTINEL: Self;

    /// Floored quotient of `self / divisor`.
    ///
    /// # Returns
    /// - `Ok`: the floored quotient
    /// - `Err(CoreError::DivisionByZero)` if `divisor` is zero
    /// - `Err(CoreError::ArithmeticOverflow)` if the quotient is not representable
    fn try_floor_div(self, divisor: Self) -> Result<Self, CoreError>;

    /// Floored quotient of `self / divisor`, or [`FloorDiv::SENTINEL`] on failure.
    ///
    /// The sentinel is indistinguishable from a legitimate zero quotient. Use
    /// [`FloorDiv::try_floor_div`] when the caller has to tell them apart.
    #[inline]
    fn floor_div(self, divisor: Self) -> Self {
        self.try_floor_div(divisor).unwrap_or(Self::SENTINEL)
    }
}

/// Floored quotient together with the matching remainder.
pub trait FloorDivRem: FloorDiv {
    /// Returns `(quotient, remainder)` such that `self == quotient * divisor + remainder`,
    /// where the remainder is zero or has the sign of `divisor`.
    fn try_floor_div_rem(self, divisor: Self) -> Result<(Self, Self), CoreError>;
}
