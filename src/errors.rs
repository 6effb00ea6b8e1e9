use crate::utils::format_char;
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq)]
pub enum Error {
    DivideByZero,
    EmptyInput,
    IncompleteExpression,
    InvalidExpression(String),
    InvalidNumber(String),
    RepeatedChar(char),
    UnbalancedParentheses,
    UnexpectedChar(char),
    ValueTooLarge,
}

impl Error {
    /// Returns true if the error was raised while validating or converting
    /// an expression, before any evaluation took place
    pub fn is_invalid_expression(&self) -> bool {
        matches!(
            self,
            Error::InvalidExpression(_)
                | Error::InvalidNumber(_)
                | Error::RepeatedChar(_)
                | Error::UnbalancedParentheses
                | Error::UnexpectedChar(_)
        )
    }
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::DivideByZero => write!(f, "division by zero"),
            Error::EmptyInput => write!(f, "empty input"),
            Error::IncompleteExpression => write!(f, "incomplete expression"),
            Error::InvalidExpression(s) => write!(f, "invalid expression: {}", s),
            Error::InvalidNumber(s) => write!(f, "invalid number '{}'", s),
            Error::RepeatedChar(c) => {
                write!(f, "repeated character '{}'", format_char(*c))
            }
            Error::UnbalancedParentheses => write!(f, "unbalanced parentheses"),
            Error::UnexpectedChar(c) => {
                write!(f, "unexpected input character '{}'", format_char(*c))
            }
            Error::ValueTooLarge => write!(f, "value too large"),
        }
    }
}
