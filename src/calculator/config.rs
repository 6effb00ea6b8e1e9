/// The largest exponent accepted by '^' unless configured otherwise
pub const DEFAULT_MAX_EXPONENT: u32 = 999_999_999;

/// The number of decimal places shown in grouped results unless configured
/// otherwise
pub const DEFAULT_FRACTION_DIGITS: u32 = 3;

#[derive(Debug, Eq, PartialEq, Clone, Copy, Default)]
/// What to do when exponentiation overflows
pub enum OverflowPolicy {
    /// Fail the whole evaluation with Error::ValueTooLarge
    #[default]
    Fail,
    /// Report the overflow and carry on with the remainder of the two
    /// operands in place of the power, as earlier versions of the
    /// calculator did
    Legacy,
}

#[derive(Debug, Eq, PartialEq, Clone)]
/// Settings for an evaluation engine
pub struct Config {
    pub fraction_digits: u32,
    pub max_exponent: u32,
    pub overflow: OverflowPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            fraction_digits: DEFAULT_FRACTION_DIGITS,
            max_exponent: DEFAULT_MAX_EXPONENT,
            overflow: OverflowPolicy::default(),
        }
    }
}
