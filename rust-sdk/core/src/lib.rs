mod constants;
mod math;
mod types;

pub use constants::*;
pub use math::*;
pub use types::*;
