//! AST node types.
//!
//! Expressions and statements are closed sum types consumed by
//! pattern-matching walkers (the evaluator and the pretty-printer) rather
//! than visitor double-dispatch. Each parent exclusively owns its boxed
//! children; there is no sharing and no cycles.

use std::fmt;

use crate::Token;

/// Literal payload carried by a [`Expr::Literal`] node.
///
/// Numbers are stored as `f64` (the language has a single numeric type
/// following IEEE double semantics), so this type is `PartialEq` but not
/// `Eq`.
#[derive(Clone, Debug, PartialEq)]
pub enum LiteralValue {
    Nil,
    Bool(bool),
    Number(f64),
    Str(String),
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Nil => write!(f, "nil"),
            LiteralValue::Bool(b) => write!(f, "{b}"),
            LiteralValue::Number(n) => write!(f, "{n}"),
            LiteralValue::Str(s) => write!(f, "{s}"),
        }
    }
}

/// Expression node.
///
/// Operator-bearing variants keep the operator [`Token`] so runtime errors
/// can be attributed to a source line.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Infix operation: `left op right`.
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    /// Parenthesized sub-expression. Carries no semantics beyond the
    /// precedence already resolved by the parser.
    Grouping { inner: Box<Expr> },
    /// Literal constant.
    Literal { value: LiteralValue },
    /// Prefix operation: `!x` or `-x`.
    Unary { operator: Token, right: Box<Expr> },
    /// Variable reference.
    Variable { name: Token },
    /// Assignment. Itself an expression: yields the assigned value.
    Assign { name: Token, value: Box<Expr> },
}

/// Statement node. A program is an ordered `Vec<Stmt>`.
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    /// Expression evaluated for its side effects, result discarded.
    Expression { expr: Expr },
    /// `print expr;`
    Print { expr: Expr },
    /// `var name;` or `var name = initializer;`
    Var {
        name: Token,
        initializer: Option<Expr>,
    },
}

impl Expr {
    /// Shorthand for a boxed literal, used by parser and tests.
    pub fn literal(value: LiteralValue) -> Expr {
        Expr::Literal { value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TokenKind;

    #[test]
    fn literal_display() {
        assert_eq!(LiteralValue::Nil.to_string(), "nil");
        assert_eq!(LiteralValue::Bool(true).to_string(), "true");
        assert_eq!(LiteralValue::Number(2.5).to_string(), "2.5");
        assert_eq!(LiteralValue::Number(7.0).to_string(), "7");
        assert_eq!(LiteralValue::Str("a".to_string()).to_string(), "a");
    }

    #[test]
    fn trees_compare_structurally() {
        let make = || Expr::Binary {
            left: Box::new(Expr::literal(LiteralValue::Number(1.0))),
            operator: Token::dummy(TokenKind::Plus, "+"),
            right: Box::new(Expr::literal(LiteralValue::Number(2.0))),
        };
        assert_eq!(make(), make());
    }
}
