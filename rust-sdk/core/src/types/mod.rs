mod floor_div;

pub use floor_div::*;
