use anyhow::{Context, Result};
use floordiv_core::{
    compare_strings, floor_div_int, floor_div_real, try_floor_div_int, try_floor_div_real,
    try_floor_div_rem_int,
};
use tracing::{debug, warn};

use crate::cli::Command;

pub fn run_command(command: &Command) -> Result<String> {
    match *command {
        Command::Int {
            dividend,
            divisor,
            strict,
        } => int_quotient(dividend, divisor, strict).map(|quotient| quotient.to_string()),
        Command::Real {
            dividend,
            divisor,
            strict,
        } => real_quotient(dividend, divisor, strict).map(|quotient| quotient.to_string()),
        Command::Divmod { dividend, divisor } => {
            let (quotient, remainder) = try_floor_div_rem_int(dividend, divisor)
                .with_context(|| format!("Failed to divide {} by {}", dividend, divisor))?;
            Ok(format!("{} {}", quotient, remainder))
        }
        Command::Cmp { ref lhs, ref rhs } => {
            let ordering = compare_strings(lhs, rhs);
            debug!(lhs = %lhs, rhs = %rhs, ordering, "compared strings");
            Ok(ordering.to_string())
        }
    }
}

fn int_quotient(dividend: i64, divisor: i64, strict: bool) -> Result<i64> {
    debug!(dividend, divisor, strict, "integer floor division");
    if strict {
        return try_floor_div_int(dividend, divisor)
            .with_context(|| format!("Failed to divide {} by {}", dividend, divisor));
    }
    if let Err(error) = try_floor_div_int(dividend, divisor) {
        warn!(code = error.code(), "{}, printing 0", error);
    }
    Ok(floor_div_int(dividend, divisor))
}

fn real_quotient(dividend: f64, divisor: f64, strict: bool) -> Result<f64> {
    debug!(dividend, divisor, strict, "real floor division");
    if strict {
        return try_floor_div_real(dividend, divisor)
            .with_context(|| format!("Failed to divide {} by {}", dividend, divisor));
    }
    if let Err(error) = try_floor_div_real(dividend, divisor) {
        warn!(code = error.code(), "{}, printing 0", error);
    }
    Ok(floor_div_real(dividend, divisor))
}
