use super::config::{Config, OverflowPolicy};
use super::decimal::Decimal;
use super::format::format;
use crate::errors::{Error, Result};
use crate::lexer::{self, Operator, Token};
use crate::postfix::Postfix;
use crate::stack::Stack;
use log::{trace, warn};

/// Evaluates infix arithmetic expressions by converting them to postfix
/// form and evaluating the postfix form with a value stack
#[derive(Debug, Default)]
pub struct Engine {
    config: Config,
}

impl Engine {
    /// Returns a new expression evaluation engine with default settings
    pub fn new() -> Engine {
        Engine::with_config(Config::default())
    }

    /// Returns a new expression evaluation engine with the given settings
    pub fn with_config(config: Config) -> Engine {
        Engine { config }
    }

    /// Returns the engine's settings
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Tokenizes, validates and converts an infix expression to postfix
    /// form
    pub fn to_postfix(&self, input: &str) -> Result<Postfix> {
        Postfix::from_infix(&lexer::tokenize(input)?)
    }

    /// Evaluates an infix expression. Returns Error::EmptyInput if the
    /// input contains nothing but whitespace.
    pub fn evaluate(&self, input: &str) -> Result<Decimal> {
        self.evaluate_postfix(&self.to_postfix(input)?)
    }

    /// Evaluates an infix expression and formats the result for display
    pub fn calculate(&self, input: &str) -> Result<String> {
        Ok(self.format(&self.evaluate(input)?))
    }

    /// Formats a value for display
    pub fn format(&self, value: &Decimal) -> String {
        format(value, self.config.fraction_digits)
    }

    /// Evaluates a postfix expression. An operator with no left operand
    /// takes zero in its place if it is '+' or '-'; otherwise, running out
    /// of operands, or finishing with more than one value, is an
    /// incomplete expression.
    pub fn evaluate_postfix(&self, postfix: &Postfix) -> Result<Decimal> {
        let mut stack: Stack<Decimal> = Stack::new();

        for token in postfix {
            match token {
                Token::Number(s) => {
                    stack.push(Decimal::new(s)?);
                }
                Token::Operator(op) => {
                    let Some(x) = stack.pop() else {
                        return Err(Error::IncompleteExpression);
                    };
                    let y = match stack.pop() {
                        Some(y) => y,
                        None if op.is_sign() => Decimal::zero(),
                        None => return Err(Error::IncompleteExpression),
                    };

                    let result = self.apply(y, *op, x)?;
                    trace!("{} => {}", op, result);
                    stack.push(result);
                }
                Token::LeftParen | Token::RightParen => {
                    return Err(Error::InvalidExpression(format!(
                        "unexpected '{}' in postfix expression",
                        token
                    )));
                }
            }
        }

        let Some(result) = stack.pop() else {
            return Err(Error::IncompleteExpression);
        };
        if !stack.is_empty() {
            trace!("unconsumed operands {}", stack);
            return Err(Error::IncompleteExpression);
        }

        Ok(result)
    }

    /// Calculates y op x
    fn apply(&self, y: Decimal, op: Operator, x: Decimal) -> Result<Decimal> {
        trace!("{} {} {}", y, op, x);

        match op {
            Operator::Add => Ok(y + x),
            Operator::Subtract => Ok(y - x),
            Operator::Multiply => y.checked_mul(&x),
            Operator::Divide => y.checked_div(&x),
            Operator::Remainder => y.checked_rem(&x),
            Operator::Power => match y.pow(&x, self.config.max_exponent) {
                Err(Error::ValueTooLarge) if self.config.overflow == OverflowPolicy::Legacy => {
                    warn!("value too large: {}^{}, using {}%{} instead", y, x, y, x);
                    y.checked_rem(&x)
                }
                result => result,
            },
        }
    }
}
