use crate::calculator::{Config, OverflowPolicy, DEFAULT_FRACTION_DIGITS, DEFAULT_MAX_EXPONENT};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
/// Command line options for the calculator
pub struct Options {
    /// Evaluate a single expression and exit
    #[arg(short, long)]
    pub expression: Option<String>,

    /// Also print the postfix form of each expression
    #[arg(long)]
    pub postfix: bool,

    /// Maximum number of decimal places shown in results
    #[arg(long, default_value_t = DEFAULT_FRACTION_DIGITS)]
    pub fraction_digits: u32,

    /// Largest exponent accepted by '^'
    #[arg(long, default_value_t = DEFAULT_MAX_EXPONENT)]
    pub max_exponent: u32,

    /// Report '^' overflow and carry on instead of failing the expression
    #[arg(long)]
    pub legacy_overflow: bool,

    /// Suppress the banner
    #[arg(short, long)]
    pub quiet: bool,

    /// Log more detail to stderr; repeat for more
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Options {
    /// Builds the engine settings selected by the options
    pub fn config(&self) -> Config {
        Config {
            fraction_digits: self.fraction_digits,
            max_exponent: self.max_exponent,
            overflow: if self.legacy_overflow {
                OverflowPolicy::Legacy
            } else {
                OverflowPolicy::Fail
            },
        }
    }

    /// Returns the log level filter selected by the verbosity flag, if any
    pub fn log_level(&self) -> Option<log::LevelFilter> {
        match self.verbose {
            0 => None,
            1 => Some(log::LevelFilter::Debug),
            _ => Some(log::LevelFilter::Trace),
        }
    }
}
