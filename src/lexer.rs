pub mod token;

use crate::errors::{Error, Result};
use log::debug;
pub use token::{Operator, Token};

/// A lexer for infix arithmetic expressions. The lexer operates on
/// normalized input, so it never sees whitespace.
pub struct Lexer {
    input: Vec<char>,
    cursor: usize,
}

impl Lexer {
    /// Returns a new lexer for the given normalized input string
    pub fn new(input: &str) -> Lexer {
        Lexer {
            input: input.chars().collect(),
            cursor: 0,
        }
    }

    /// Returns the lookahead character
    fn lookahead(&self) -> Option<char> {
        self.input.get(self.cursor).copied()
    }

    /// Reads the next character. Panics on end-of-input, so callers must
    /// check the lookahead first.
    fn read(&mut self) -> char {
        let c = self.input[self.cursor];
        self.cursor += 1;
        c
    }

    /// Returns the next lexical token, if any
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        let Some(lookahead) = self.lookahead() else {
            return Ok(None);
        };

        match lookahead {
            '(' => {
                self.read();
                return Ok(Some(Token::LeftParen));
            }
            ')' => {
                self.read();
                return Ok(Some(Token::RightParen));
            }
            '0'..='9' | '.' => {
                return self.lex_number();
            }
            _ => (),
        }

        if let Some(op) = Operator::from_char(lookahead) {
            self.read();
            return Ok(Some(Token::Operator(op)));
        }

        Err(Error::UnexpectedChar(lookahead))
    }

    /// Lexes a number, which is a sequence of digits optionally followed by
    /// a decimal point and another sequence of digits. The longest run of
    /// digits and decimal points is consumed, and rejected if it does not
    /// have that form.
    fn lex_number(&mut self) -> Result<Option<Token>> {
        let mut number = String::new();

        while let Some(lookahead) = self.lookahead() {
            if !(lookahead.is_ascii_digit() || lookahead == '.') {
                break;
            }
            number.push(self.read());
        }

        if !token::is_number_literal(&number) {
            return Err(Error::InvalidNumber(number));
        }

        Ok(Some(Token::Number(number)))
    }
}

impl Iterator for Lexer {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

/// Strips all whitespace from a line and makes implicit multiplication
/// explicit, so that "2(3+4)" becomes "2*(3+4)" and "(3+4)2" becomes
/// "(3+4)*2"
pub fn normalize(line: &str) -> String {
    let mut normalized = String::with_capacity(line.len());

    for c in line.chars().filter(|c| !c.is_whitespace()) {
        let implicit = match normalized.chars().last() {
            Some(prev) if c == '(' => prev.is_ascii_digit(),
            Some(')') => c.is_ascii_digit(),
            _ => false,
        };

        if implicit {
            normalized.push('*');
        }
        normalized.push(c);
    }

    normalized
}

/// Returns true if c may appear anywhere in a normalized expression
fn is_allowed(c: char) -> bool {
    c.is_ascii_digit() || c == '(' || c == ')' || c == '.' || Operator::from_char(c).is_some()
}

/// Checks a normalized expression for disallowed characters, for the same
/// operator or decimal point appearing twice in a row, and for unbalanced
/// parentheses
pub fn validate(expr: &str) -> Result<()> {
    let mut depth: usize = 0;
    let mut prev: Option<char> = None;

    for c in expr.chars() {
        if !is_allowed(c) {
            return Err(Error::UnexpectedChar(c));
        }

        if prev == Some(c) && (c == '.' || Operator::from_char(c).is_some()) {
            return Err(Error::RepeatedChar(c));
        }

        match c {
            '(' => depth += 1,
            ')' => {
                let Some(d) = depth.checked_sub(1) else {
                    return Err(Error::UnbalancedParentheses);
                };
                depth = d;
            }
            _ => (),
        }

        prev = Some(c);
    }

    if depth != 0 {
        return Err(Error::UnbalancedParentheses);
    }

    Ok(())
}

/// Normalizes, validates and tokenizes a raw input line. Returns
/// Error::EmptyInput if the line contains nothing but whitespace.
pub fn tokenize(line: &str) -> Result<Vec<Token>> {
    let normalized = normalize(line);
    if normalized.is_empty() {
        return Err(Error::EmptyInput);
    }

    debug!("normalized input: {}", normalized);
    validate(&normalized)?;

    let tokens = Lexer::new(&normalized).collect::<Result<Vec<Token>>>()?;
    debug!(
        "tokens: {}",
        tokens
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );

    Ok(tokens)
}
