//! Binary infix arithmetic for the `math` command.
//!
//! An expression is exactly `<number> <operator> <number>`, with optional
//! whitespace between the parts (`4 / 0` and `4/0` are the same). There is
//! no precedence and no chaining.

use std::fmt;
use std::str::FromStr;

use super::interpreter::{Command, CommandOutput, CommandRegistry, Session};
use super::style::Line;
use crate::error::{ArgosError, Result};

/// Register `math` into a registry.
pub fn register_math(reg: &mut CommandRegistry) {
    reg.register(Box::new(MathCmd));
}

/// Arithmetic faults. Display strings are shown after
/// "Math evaluation error: ".
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MathError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Invalid operator: {0}")]
    InvalidOperator(char),

    #[error("Malformed expression: {0}")]
    Malformed(String),

    /// Overflow or an undefined power such as `(-8) ^ 0.5`.
    #[error("Result is not a finite number")]
    NonFinite,
}

/// The five supported operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Pow),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }

    /// Applies the operator. Division by zero and non-finite results are
    /// errors.
    pub fn apply(self, lhs: f64, rhs: f64) -> std::result::Result<f64, MathError> {
        let value = match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => {
                if rhs == 0.0 {
                    return Err(MathError::DivisionByZero);
                }
                lhs / rhs
            }
            Self::Pow => lhs.powf(rhs),
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(MathError::NonFinite)
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A parsed `lhs op rhs` expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryExpr {
    pub lhs: f64,
    pub op: Operator,
    pub rhs: f64,
}

impl BinaryExpr {
    pub fn evaluate(&self) -> std::result::Result<f64, MathError> {
        self.op.apply(self.lhs, self.rhs)
    }
}

impl FromStr for BinaryExpr {
    type Err = MathError;

    fn from_str(input: &str) -> std::result::Result<Self, MathError> {
        let rest = input.trim_start();
        let (lhs, rest) = take_number(rest)?;

        let rest = rest.trim_start();
        let mut chars = rest.chars();
        let op_char = chars
            .next()
            .ok_or_else(|| MathError::Malformed("missing operator".to_string()))?;
        let op = Operator::from_char(op_char).ok_or(MathError::InvalidOperator(op_char))?;

        let (rhs, rest) = take_number(chars.as_str().trim_start())?;
        if !rest.trim().is_empty() {
            return Err(MathError::Malformed(format!(
                "unexpected trailing input '{}'",
                rest.trim()
            )));
        }

        Ok(Self { lhs, op, rhs })
    }
}

/// Splits a leading decimal number (optional sign, digits, point, exponent)
/// off `input`.
fn take_number(input: &str) -> std::result::Result<(f64, &str), MathError> {
    let bytes = input.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    while end < bytes.len() && (bytes[end].is_ascii_digit() || bytes[end] == b'.') {
        end += 1;
    }
    // Exponent only counts when digits follow it
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let digits = bytes[exp..].iter().take_while(|b| b.is_ascii_digit()).count();
        if digits > 0 {
            end = exp + digits;
        }
    }

    let literal = &input[..end];
    if literal.is_empty() {
        let found = input.split_whitespace().next().unwrap_or("end of input");
        return Err(MathError::Malformed(format!("expected a number, found '{found}'")));
    }
    let value = literal
        .parse::<f64>()
        .map_err(|_| MathError::Malformed(format!("invalid number '{literal}'")))?;
    Ok((value, &input[end..]))
}

/// Parses and evaluates a binary expression.
///
/// # Example
///
/// ```
/// use argos_shell::shell::{math, MathError};
///
/// assert_eq!(math::evaluate("2 ^ 10"), Ok(1024.0));
/// assert_eq!(math::evaluate("4 / 0"), Err(MathError::DivisionByZero));
/// ```
pub fn evaluate(expression: &str) -> std::result::Result<f64, MathError> {
    expression.parse::<BinaryExpr>()?.evaluate()
}

// ---------------------------------------------------------------------------
// math
// ---------------------------------------------------------------------------

struct MathCmd;
impl Command for MathCmd {
    fn name(&self) -> &str {
        "math"
    }
    fn description(&self) -> &str {
        "Perform mathematical operations"
    }
    fn usage(&self) -> &str {
        "math <expression>"
    }
    fn execute(&self, args: &[&str], _session: &mut Session) -> Result<CommandOutput> {
        let expression = args.join(" ");
        if expression.trim().is_empty() {
            return Err(ArgosError::Usage(self.usage().to_string()));
        }
        let value = evaluate(&expression)?;
        log::debug!("math {expression} = {value}");
        Ok(CommandOutput::Text(vec![Line::success(format!(
            "{expression} = {value}"
        ))]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_operators() {
        assert_eq!(evaluate("1 + 2"), Ok(3.0));
        assert_eq!(evaluate("5 - 7.5"), Ok(-2.5));
        assert_eq!(evaluate("3 * 4"), Ok(12.0));
        assert_eq!(evaluate("9 / 2"), Ok(4.5));
        assert_eq!(evaluate("2 ^ 3"), Ok(8.0));
    }

    #[test]
    fn test_spacing_and_signs() {
        assert_eq!(evaluate("4/2"), Ok(2.0));
        assert_eq!(evaluate("-3 - -4"), Ok(1.0));
        assert_eq!(evaluate("  1e3+1 "), Ok(1001.0));
        assert_eq!(evaluate("10-2"), Ok(8.0));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(evaluate("4 / 0"), Err(MathError::DivisionByZero));
        assert_eq!(evaluate("0 / -0"), Err(MathError::DivisionByZero));
    }

    #[test]
    fn test_invalid_operator() {
        assert_eq!(evaluate("4 % 2"), Err(MathError::InvalidOperator('%')));
        // Operator is rejected before the right operand is looked at
        assert_eq!(evaluate("4 x"), Err(MathError::InvalidOperator('x')));
    }

    #[test]
    fn test_malformed() {
        for input in ["", "abc + 1", "4 +", "4", "1 + 2 + 3", "1.2.3 + 1"] {
            assert!(
                matches!(evaluate(input), Err(MathError::Malformed(_))),
                "{input:?}"
            );
        }
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(evaluate("10 ^ 400"), Err(MathError::NonFinite));
        assert_eq!(evaluate("-8 ^ 0.5"), Err(MathError::NonFinite));
    }

    #[test]
    fn test_binary_expr_parse() {
        let expr: BinaryExpr = "6 * 7".parse().unwrap();
        assert_eq!(expr.op, Operator::Mul);
        assert_eq!(expr.op.to_string(), "*");
        assert_eq!(expr.evaluate(), Ok(42.0));
    }

    fn run(line: &str) -> Result<CommandOutput> {
        let mut reg = CommandRegistry::new();
        register_math(&mut reg);
        let mut session = Session::new(Box::new(SmallRng::seed_from_u64(0)), 10);
        reg.execute(line, &mut session)
    }

    #[test]
    fn test_math_command() {
        match run("math 2 ^ 10").unwrap() {
            CommandOutput::Text(lines) => assert_eq!(lines[0].text, "2 ^ 10 = 1024"),
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_math_command_errors() {
        let err = run("math 4 / 0").unwrap_err();
        assert_eq!(err.to_string(), "Math evaluation error: Division by zero");
        assert!(matches!(run("math").unwrap_err(), ArgosError::Usage(_)));
    }
}
