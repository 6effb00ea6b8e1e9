#![allow(dead_code)]

/// Generates random arithmetic expressions over small integers using '+',
/// '-', '*', '/' and parentheses
pub struct ExpressionGenerator {
    state: u64,
}

impl ExpressionGenerator {
    /// Returns a new generator with the given seed
    pub fn new(seed: u64) -> ExpressionGenerator {
        ExpressionGenerator { state: seed }
    }

    /// Returns a pseudo-random number below n
    fn below(&mut self, n: u64) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 33) % n
    }

    /// Returns an expression nested at most depth levels deep
    pub fn expression(&mut self, depth: u32) -> String {
        if depth == 0 || self.below(3) == 0 {
            return self.below(10).to_string();
        }

        let op = ['+', '-', '*', '/'][self.below(4) as usize];
        let left = self.expression(depth - 1);

        // Small divisors make exact division likely
        let right = if op == '/' && self.below(2) == 0 {
            (self.below(3) + 1).to_string()
        } else {
            self.expression(depth - 1)
        };

        if self.below(2) == 0 {
            format!("({}{}{})", left, op, right)
        } else {
            format!("{}{}{}", left, op, right)
        }
    }
}

#[derive(Debug, Eq, PartialEq, Clone, Copy)]
/// Why the reference evaluator stopped before producing a value
pub enum Stopped {
    /// A division left a remainder, so the quotient is not an integer
    Inexact,
    DivideByZero,
}

/// Evaluates an expression produced by ExpressionGenerator by recursive
/// descent over integers, with '*' and '/' binding tighter than '+' and
/// '-', and all operators associating to the left. Operations happen in
/// the same order as in a postfix evaluation, so the first division that
/// is inexact or by zero is the first one a postfix evaluator meets.
pub fn reference_eval(expression: &str) -> Result<i128, Stopped> {
    let chars: Vec<char> = expression.chars().collect();
    let mut pos = 0;
    let value = sum(&chars, &mut pos)?;
    assert_eq!(pos, chars.len(), "trailing input in {}", expression);
    Ok(value)
}

fn sum(chars: &[char], pos: &mut usize) -> Result<i128, Stopped> {
    let mut value = product(chars, pos)?;
    while *pos < chars.len() && (chars[*pos] == '+' || chars[*pos] == '-') {
        let op = chars[*pos];
        *pos += 1;
        let right = product(chars, pos)?;
        value = if op == '+' { value + right } else { value - right };
    }
    Ok(value)
}

fn product(chars: &[char], pos: &mut usize) -> Result<i128, Stopped> {
    let mut value = factor(chars, pos)?;
    while *pos < chars.len() && (chars[*pos] == '*' || chars[*pos] == '/') {
        let op = chars[*pos];
        *pos += 1;
        let right = factor(chars, pos)?;
        if op == '*' {
            value *= right;
        } else if right == 0 {
            return Err(Stopped::DivideByZero);
        } else if value % right != 0 {
            return Err(Stopped::Inexact);
        } else {
            value /= right;
        }
    }
    Ok(value)
}

fn factor(chars: &[char], pos: &mut usize) -> Result<i128, Stopped> {
    if chars[*pos] == '(' {
        *pos += 1;
        let value = sum(chars, pos)?;
        assert_eq!(chars[*pos], ')');
        *pos += 1;
        return Ok(value);
    }

    let start = *pos;
    while *pos < chars.len() && chars[*pos].is_ascii_digit() {
        *pos += 1;
    }
    Ok(chars[start..*pos]
        .iter()
        .collect::<String>()
        .parse()
        .expect("bad number"))
}
