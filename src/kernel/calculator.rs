//! Four-function calculator with a single expression buffer.

use crate::kernel::shell::math;

const OPERATORS: &str = "+-*/";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calculator {
    expr: String,
    /// Set after a failed evaluation until the next key.
    error: Option<&'static str>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(&self) -> &str {
        match self.error {
            Some(err) => err,
            None if self.expr.is_empty() => "0",
            None => &self.expr,
        }
    }

    fn last_operand(&self) -> &str {
        self.expr
            .rsplit(|c: char| OPERATORS.contains(c))
            .next()
            .unwrap_or_default()
    }

    /// Feeds one key: a digit, `.`, or an operator. Keys that would build a malformed
    /// expression are ignored.
    pub fn input(&mut self, key: char) -> bool {
        self.error = None;
        match key {
            '.' => {
                if self.last_operand().contains('.') {
                    return false;
                }
                if self.expr.is_empty() || self.expr.ends_with(|c: char| OPERATORS.contains(c)) {
                    self.expr.push('0');
                }
            }
            '0' => {
                if self.last_operand() == "0" {
                    return false;
                }
            }
            c if OPERATORS.contains(c) => {
                if self.expr.is_empty() || self.expr.ends_with(|c: char| "+-*/.".contains(c)) {
                    return false;
                }
            }
            c if c.is_ascii_digit() => {}
            _ => return false,
        }
        self.expr.push(key);
        true
    }

    pub fn evaluate(&mut self) {
        if divides_by_literal_zero(&self.expr) {
            self.expr.clear();
            self.error = Some("Err: ÷0");
            return;
        }
        match math::evaluate(&self.expr) {
            Ok(value) => {
                self.expr = math::format_number(value);
                self.error = None;
            }
            Err(_) => {
                self.expr.clear();
                self.error = Some("Err");
            }
        }
    }

    pub fn clear(&mut self) {
        self.expr.clear();
        self.error = None;
    }
}

/// `/0` not followed by more digits or a decimal point.
fn divides_by_literal_zero(expr: &str) -> bool {
    expr.match_indices("/0").any(|(idx, _)| {
        !expr[idx + 2..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit() || c == '.')
    })
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/calculator.rs"]
mod tests;
