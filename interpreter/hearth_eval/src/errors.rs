//! Runtime error type and factory functions.
//!
//! The factories keep the exact wording in one place; operator code never
//! formats messages inline.

use std::fmt;

use hearth_ir::Token;

/// A runtime error: operand type violation or undefined variable.
///
/// Carries the operator or identifier token so the error can be attributed
/// to a source line. The first runtime error terminates the run.
#[derive(Debug, Clone, PartialEq)]
pub struct EvalError {
    pub token: Token,
    pub message: String,
}

impl EvalError {
    pub fn new(token: &Token, message: impl Into<String>) -> Self {
        EvalError {
            token: token.clone(),
            message: message.into(),
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] {}", self.token.line, self.message)
    }
}

impl std::error::Error for EvalError {}

pub type EvalResult<T = crate::Value> = Result<T, EvalError>;

/// `-` or a comparison applied to a non-number operand.
pub(crate) fn operand_must_be_number(token: &Token) -> EvalError {
    EvalError::new(token, "Operand must be a number.")
}

/// Arithmetic or comparison on a pair that is not two numbers.
pub(crate) fn operands_must_be_numbers(token: &Token) -> EvalError {
    EvalError::new(token, "Operands must be numbers.")
}

/// `+` on a pair that is neither two numbers nor two strings.
pub(crate) fn operands_must_be_numbers_or_strings(token: &Token) -> EvalError {
    EvalError::new(token, "Operands must be two numbers or two strings.")
}

/// Read or assignment of a name with no binding.
pub(crate) fn undefined_variable(name: &Token) -> EvalError {
    EvalError::new(name, format!("Undefined variable '{}'.", name.lexeme))
}

#[cfg(test)]
mod tests {
    use hearth_ir::TokenKind;

    use super::*;

    #[test]
    fn undefined_variable_names_the_identifier() {
        let token = Token::dummy(TokenKind::Identifier, "count");
        let err = undefined_variable(&token);
        assert_eq!(err.message, "Undefined variable 'count'.");
    }

    #[test]
    fn display_includes_line() {
        let mut token = Token::dummy(TokenKind::Plus, "+");
        token.line = 4;
        let err = operands_must_be_numbers(&token);
        assert_eq!(err.to_string(), "[line 4] Operands must be numbers.");
    }
}
