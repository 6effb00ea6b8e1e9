use std::fmt;

#[derive(Debug, Eq, PartialEq, Clone, Copy)]
/// A binary arithmetic operator
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    Power,
}

impl Operator {
    /// Every operator, in the order they are listed to users
    pub const ALL: [Operator; 6] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Power,
        Operator::Divide,
        Operator::Remainder,
    ];

    /// Returns the operator represented by c, if any
    pub fn from_char(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            '%' => Some(Operator::Remainder),
            '^' => Some(Operator::Power),
            _ => None,
        }
    }

    /// Returns the character used to write the operator
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Remainder => '%',
            Operator::Power => '^',
        }
    }

    /// Returns a short human-readable name for the operator
    pub fn name(&self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Subtract => "subtract",
            Operator::Multiply => "multiply",
            Operator::Divide => "divide",
            Operator::Remainder => "modulus",
            Operator::Power => "power",
        }
    }

    /// Returns the binding strength of the operator. Addition and
    /// subtraction bind loosest.
    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Multiply | Operator::Divide | Operator::Remainder => 1,
            Operator::Power => 2,
            Operator::Add | Operator::Subtract => 0,
        }
    }

    /// Returns true if a missing left operand may be read as zero, so that
    /// the operator acts as a sign
    pub fn is_sign(&self) -> bool {
        matches!(self, Operator::Add | Operator::Subtract)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Eq, PartialEq, Clone)]
/// A lexical token of an arithmetic expression
pub enum Token {
    Number(String),
    Operator(Operator),
    LeftParen,
    RightParen,
}

impl Token {
    /// Parses a single token from its textual form, as written by the
    /// token's Display implementation
    pub fn from_text(s: &str) -> Option<Token> {
        let mut chars = s.chars();
        let first = chars.next()?;

        if chars.as_str().is_empty() {
            match first {
                '(' => return Some(Token::LeftParen),
                ')' => return Some(Token::RightParen),
                _ => (),
            }
            if let Some(op) = Operator::from_char(first) {
                return Some(Token::Operator(op));
            }
        }

        if is_number_literal(s) {
            Some(Token::Number(s.to_string()))
        } else {
            None
        }
    }
}

impl fmt::Display for Token {
    /// Formats the token as it would appear in an expression
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(s) => write!(f, "{}", s),
            Token::Operator(op) => write!(f, "{}", op),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
        }
    }
}

/// Returns true if s is a run of digits, optionally followed by a decimal
/// point and a further run of digits
pub fn is_number_literal(s: &str) -> bool {
    let (int, frac) = match s.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (s, None),
    };

    let all_digits = |p: &str| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit());

    all_digits(int) && frac.map_or(true, all_digits)
}
