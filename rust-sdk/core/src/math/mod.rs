mod int;
mod strings;

#[cfg(feature = "floats")]
mod real;

pub use int::*;
pub use strings::*;

#[cfg(feature = "floats")]
pub use real::*;
