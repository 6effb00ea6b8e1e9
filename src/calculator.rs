mod config;
mod decimal;
mod engine;
pub mod format;

pub use config::{Config, OverflowPolicy, DEFAULT_FRACTION_DIGITS, DEFAULT_MAX_EXPONENT};
pub use decimal::{Decimal, Rounding};
pub use engine::Engine;
