//! Operator semantics.
//!
//! Equality is handled before type dispatch because it works on any pair
//! and never errors. Everything else dispatches on the `(Value, Value)`
//! pair: two numbers, two strings, or a type error. There is no coercion.

use hearth_ir::{Token, TokenKind};

use crate::errors::{
    operand_must_be_number, operands_must_be_numbers, operands_must_be_numbers_or_strings,
};
use crate::{EvalResult, Value};

/// Apply a binary operator to two already-evaluated operands.
pub fn evaluate_binary(operator: &Token, left: Value, right: Value) -> EvalResult {
    match operator.kind {
        // Structural equality on any pair of values.
        TokenKind::EqualEqual => Ok(Value::Bool(left == right)),
        TokenKind::BangEqual => Ok(Value::Bool(left != right)),
        _ => match (left, right) {
            (Value::Number(a), Value::Number(b)) => eval_number_binary(operator, a, b),
            (Value::Str(a), Value::Str(b)) => eval_string_binary(operator, a, &b),
            _ => {
                if operator.kind == TokenKind::Plus {
                    Err(operands_must_be_numbers_or_strings(operator))
                } else {
                    Err(operands_must_be_numbers(operator))
                }
            }
        },
    }
}

/// Arithmetic and ordering on two numbers. IEEE double semantics: division
/// by zero yields `inf`/`NaN` rather than an error.
fn eval_number_binary(operator: &Token, a: f64, b: f64) -> EvalResult {
    match operator.kind {
        TokenKind::Plus => Ok(Value::Number(a + b)),
        TokenKind::Minus => Ok(Value::Number(a - b)),
        TokenKind::Star => Ok(Value::Number(a * b)),
        TokenKind::Slash => Ok(Value::Number(a / b)),
        TokenKind::Greater => Ok(Value::Bool(a > b)),
        TokenKind::GreaterEqual => Ok(Value::Bool(a >= b)),
        TokenKind::Less => Ok(Value::Bool(a < b)),
        TokenKind::LessEqual => Ok(Value::Bool(a <= b)),
        _ => Err(operands_must_be_numbers(operator)),
    }
}

/// Strings support `+` (concatenation) and nothing else; ordering on
/// strings is a type error.
fn eval_string_binary(operator: &Token, mut a: String, b: &str) -> EvalResult {
    match operator.kind {
        TokenKind::Plus => {
            a.push_str(b);
            Ok(Value::Str(a))
        }
        _ => Err(operands_must_be_numbers(operator)),
    }
}

/// Apply a unary operator to an already-evaluated operand.
pub fn evaluate_unary(operator: &Token, value: Value) -> EvalResult {
    match operator.kind {
        // Works on any value; result is always a Bool.
        TokenKind::Bang => Ok(Value::Bool(!value.is_truthy())),
        TokenKind::Minus => match value {
            Value::Number(n) => Ok(Value::Number(-n)),
            _ => Err(operand_must_be_number(operator)),
        },
        _ => Err(operand_must_be_number(operator)),
    }
}
