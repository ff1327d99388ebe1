pub type ErrorCode = u16;

pub const DIVISION_BY_ZERO: ErrorCode = 9100;

pub const ARITHMETIC_OVERFLOW: ErrorCode = 9101;

/// Failure kinds of the checked arithmetic functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Arithmetic overflow")]
    ArithmeticOverflow,
}

impl CoreError {
    /// Stable numeric code of the error.
    pub const fn code(self) -> ErrorCode {
        match self {
            CoreError::DivisionByZero => DIVISION_BY_ZERO,
            CoreError::ArithmeticOverflow => ARITHMETIC_OVERFLOW,
        }
    }
}

impl From<CoreError> for ErrorCode {
    fn from(error: CoreError) -> Self {
        error.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(CoreError::DivisionByZero.code(), DIVISION_BY_ZERO);
        assert_eq!(ErrorCode::from(CoreError::ArithmeticOverflow), ARITHMETIC_OVERFLOW);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(CoreError::DivisionByZero.to_string(), "Division by zero");
        assert_eq!(CoreError::ArithmeticOverflow.to_string(), "Arithmetic overflow");
    }
}
