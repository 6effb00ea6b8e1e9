use crate::errors::{Error, Result};
use crate::lexer::{Operator, Token};
use crate::stack::Stack;
use log::{debug, trace};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Eq, PartialEq, Clone, Copy)]
/// An entry on the operator stack used during conversion
enum Marker {
    LeftParen,
    Operator(Operator),
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Marker::LeftParen => write!(f, "("),
            Marker::Operator(op) => write!(f, "{}", op),
        }
    }
}

#[derive(Debug, Eq, PartialEq, Clone, Default)]
/// An expression in postfix (reverse Polish) order. Postfix sequences never
/// contain parentheses when produced by conversion.
pub struct Postfix {
    tokens: Vec<Token>,
}

impl Postfix {
    /// Converts a sequence of infix tokens to postfix order using the
    /// shunting-yard algorithm. The operator stack is seeded with a '(' and
    /// the input is terminated with a ')', so conversion ends exactly when
    /// the operator stack is emptied.
    pub fn from_infix(infix: &[Token]) -> Result<Postfix> {
        let mut stack: Stack<Marker> = Stack::new();
        stack.push(Marker::LeftParen);

        let mut input = infix.iter().cloned().chain(std::iter::once(Token::RightParen));
        let mut output: Vec<Token> = Vec::new();

        while !stack.is_empty() {
            let Some(token) = input.next() else {
                return Err(Error::UnbalancedParentheses);
            };

            trace!("token {}, operator stack {}", token, stack);

            match token {
                Token::Number(_) => {
                    output.push(token);
                }
                Token::LeftParen => {
                    stack.push(Marker::LeftParen);
                }
                Token::Operator(op) => {
                    // Equal precedence also pops, which makes every
                    // operator left-associative, including '^'
                    while let Some(&Marker::Operator(top)) = stack.peek() {
                        if top.precedence() < op.precedence() {
                            break;
                        }
                        output.push(Token::Operator(top));
                        stack.pop();
                    }
                    stack.push(Marker::Operator(op));
                }
                Token::RightParen => loop {
                    match stack.pop() {
                        Some(Marker::Operator(top)) => output.push(Token::Operator(top)),
                        Some(Marker::LeftParen) => break,
                        None => return Err(Error::UnbalancedParentheses),
                    }
                },
            }
        }

        // The sentinel '(' was closed before all the input was consumed
        if input.next().is_some() {
            return Err(Error::UnbalancedParentheses);
        }

        let postfix = Postfix { tokens: output };
        debug!("postfix: {}", postfix);

        Ok(postfix)
    }

    /// Returns the tokens in postfix order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns the number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if there are no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns an iterator over the tokens in postfix order
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl fmt::Display for Postfix {
    /// Formats the sequence with tokens separated by single spaces
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

impl FromStr for Postfix {
    type Err = Error;

    /// Re-splits a whitespace-separated postfix sequence into tokens
    fn from_str(s: &str) -> Result<Postfix> {
        let tokens = s
            .split_whitespace()
            .map(|t| {
                Token::from_text(t).ok_or_else(|| {
                    Error::InvalidExpression(format!("unrecognized postfix token '{}'", t))
                })
            })
            .collect::<Result<Vec<Token>>>()?;

        Ok(Postfix { tokens })
    }
}

impl<'a> IntoIterator for &'a Postfix {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::lexer::tokenize;

    fn convert(s: &str) -> Result<String> {
        Ok(Postfix::from_infix(&tokenize(s)?)?.to_string())
    }

    #[test]
    fn test_convert() -> Result<()> {
        assert_eq!(convert("3+4*2")?, "3 4 2 * +");
        assert_eq!(convert("(3+4)*2")?, "3 4 + 2 *");
        assert_eq!(convert("1-2+3")?, "1 2 - 3 +");
        assert_eq!(convert("8/4/2")?, "8 4 / 2 /");
        assert_eq!(convert("10%4*3")?, "10 4 % 3 *");
        assert_eq!(convert("2^3*4")?, "2 3 ^ 4 *");
        assert_eq!(convert("2*3^4")?, "2 3 4 ^ *");
        assert_eq!(convert("((1))")?, "1");
        assert_eq!(convert("2(3+4)")?, "2 3 4 + *");
        assert_eq!(convert("(3+4)2")?, "3 4 + 2 *");
        assert_eq!(convert("1.5+2.25")?, "1.5 2.25 +");

        Ok(())
    }

    #[test]
    fn test_power_is_left_associative() -> Result<()> {
        assert_eq!(convert("2^3^2")?, "2 3 ^ 2 ^");

        Ok(())
    }

    #[test]
    fn test_convert_signs() -> Result<()> {
        assert_eq!(convert("-3")?, "3 -");
        assert_eq!(convert("*5")?, "5 *");
        assert_eq!(convert("5*-2")?, "5 * 2 -");

        Ok(())
    }

    #[test]
    fn test_convert_structural_failure() {
        // Validation rejects these before conversion, but conversion must
        // not panic if handed them directly
        let tokens = vec![Token::RightParen, Token::Number(String::from("1"))];
        assert_eq!(Postfix::from_infix(&tokens), Err(Error::UnbalancedParentheses));

        let tokens = vec![Token::LeftParen, Token::Number(String::from("1"))];
        assert_eq!(Postfix::from_infix(&tokens), Err(Error::UnbalancedParentheses));
    }

    #[test]
    fn test_from_str() -> Result<()> {
        let postfix: Postfix = "3  4 2\t* +".parse()?;
        assert_eq!(postfix.len(), 5);
        assert_eq!(postfix.to_string(), "3 4 2 * +");
        assert_eq!(postfix.tokens()[3], Token::Operator(Operator::Multiply));

        assert!("".parse::<Postfix>()?.is_empty());
        assert_eq!(
            "3 x +".parse::<Postfix>(),
            Err(Error::InvalidExpression(String::from(
                "unrecognized postfix token 'x'"
            )))
        );

        Ok(())
    }
}
