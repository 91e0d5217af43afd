mod decimal;
mod int;

pub use decimal::*;
pub use int::*;
