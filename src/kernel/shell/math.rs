//! Arithmetic evaluator for `math` and the calculator.
//!
//! Grammar, lowest precedence first:
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := unary (('*' | '/' | '%') unary)*
//! unary  := ('+' | '-') unary | atom
//! atom   := number | '(' expr ')'
//! number := digits ['.' digits] | '.' digits
//! ```

use thiserror::Error;

/// Deepest nesting of parentheses and unary signs accepted before giving up.
pub const MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("empty expression")]
    Empty,
    #[error("unexpected character {found:?} at {offset}")]
    Unexpected { found: char, offset: usize },
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("unbalanced parentheses")]
    Unbalanced,
    #[error("division by zero")]
    DivisionByZero,
    #[error("result is not finite")]
    NotFinite,
    #[error("expression nests deeper than {MAX_DEPTH} levels")]
    TooDeep,
}

pub fn evaluate(expr: &str) -> Result<f64, MathError> {
    let mut parser = Parser {
        chars: expr.char_indices().collect(),
        pos: 0,
        depth: 0,
    };
    parser.skip_ws();
    if parser.peek().is_none() {
        return Err(MathError::Empty);
    }
    let value = parser.expr()?;
    parser.skip_ws();
    match parser.peek() {
        None => {}
        Some(')') => return Err(MathError::Unbalanced),
        Some(found) => {
            return Err(MathError::Unexpected {
                found,
                offset: parser.offset(),
            })
        }
    }
    if !value.is_finite() {
        return Err(MathError::NotFinite);
    }
    Ok(value)
}

/// Integral values print without a fraction; negative zero prints as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

struct Parser {
    chars: Vec<(usize, char)>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).map(|(_, c)| *c)
    }

    fn offset(&self) -> usize {
        self.chars.get(self.pos).map(|(i, _)| *i).unwrap_or_default()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    /// Runs `f` one nesting level deeper; the level is released even when `f` fails.
    fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, MathError>,
    ) -> Result<T, MathError> {
        if self.depth >= MAX_DEPTH {
            return Err(MathError::TooDeep);
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn expr(&mut self) -> Result<f64, MathError> {
        let mut acc = self.term()?;
        loop {
            self.skip_ws();
            match self.peek() {
                Some('+') => {
                    self.bump();
                    acc += self.term()?;
                }
                Some('-') => {
                    self.bump();
                    acc -= self.term()?;
                }
                _ => return Ok(acc),
            }
        }
    }

    fn term(&mut self) -> Result<f64, MathError> {
        let mut acc = self.unary()?;
        loop {
            self.skip_ws();
            let op = match self.peek() {
                Some(op @ ('*' | '/' | '%')) => op,
                _ => return Ok(acc),
            };
            self.bump();
            let rhs = self.unary()?;
            acc = match op {
                '*' => acc * rhs,
                _ if rhs == 0.0 => return Err(MathError::DivisionByZero),
                '/' => acc / rhs,
                _ => acc % rhs,
            };
        }
    }

    fn unary(&mut self) -> Result<f64, MathError> {
        self.skip_ws();
        match self.peek() {
            Some('-') => {
                self.bump();
                Ok(-self.nested(Self::unary)?)
            }
            Some('+') => {
                self.bump();
                self.nested(Self::unary)
            }
            _ => self.atom(),
        }
    }

    fn atom(&mut self) -> Result<f64, MathError> {
        self.skip_ws();
        match self.peek() {
            None => Err(MathError::UnexpectedEnd),
            Some('(') => {
                self.bump();
                let value = self.nested(Self::expr)?;
                self.skip_ws();
                if self.peek() != Some(')') {
                    return Err(MathError::Unbalanced);
                }
                self.bump();
                Ok(value)
            }
            Some(c) if c.is_ascii_digit() || c == '.' => self.number(),
            Some(found) => Err(MathError::Unexpected {
                found,
                offset: self.offset(),
            }),
        }
    }

    fn number(&mut self) -> Result<f64, MathError> {
        let start = self.pos;
        let offset = self.offset();
        let mut digits = 0usize;
        let mut seen_dot = false;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                digits += 1;
            } else if c == '.' && !seen_dot {
                seen_dot = true;
            } else {
                break;
            }
            self.bump();
        }
        if digits == 0 {
            return Err(MathError::Unexpected { found: '.', offset });
        }
        let text: String = self.chars[start..self.pos].iter().map(|(_, c)| *c).collect();
        text.parse::<f64>()
            .map_err(|_| MathError::Unexpected { found: '.', offset })
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/shell/math.rs"]
mod tests;
