pub mod calculator;
pub mod cli;
pub mod errors;
pub mod lexer;
pub mod postfix;
pub mod stack;
mod utils;
