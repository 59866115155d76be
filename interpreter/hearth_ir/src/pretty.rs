//! Parenthesized debug rendering of AST trees.
//!
//! Used by the `hearth parse` command and by parser tests to assert tree
//! shape: `1 + 2 * 3` renders as `(+ 1 (* 2 3))`, which makes precedence
//! mistakes visible at a glance.

use std::fmt::Write;

use crate::{Expr, LiteralValue, Stmt};

/// Render an expression tree in prefix parenthesized form.
pub fn render_expr(expr: &Expr) -> String {
    let mut out = String::new();
    write_expr(&mut out, expr);
    out
}

/// Render a statement in prefix parenthesized form.
///
/// `print x;` renders as `(print x)`, `var x = 1;` as `(var x 1)`, and a
/// bare expression statement as its expression.
pub fn render_stmt(stmt: &Stmt) -> String {
    let mut out = String::new();
    write_stmt(&mut out, stmt);
    out
}

/// Render a whole program, one statement per line.
pub fn render_program(stmts: &[Stmt]) -> String {
    let mut out = String::new();
    for stmt in stmts {
        write_stmt(&mut out, stmt);
        out.push('\n');
    }
    out
}

fn write_expr(out: &mut String, expr: &Expr) {
    match expr {
        Expr::Binary {
            left,
            operator,
            right,
        } => {
            let _ = write!(out, "({} ", operator.lexeme);
            write_expr(out, left);
            out.push(' ');
            write_expr(out, right);
            out.push(')');
        }
        Expr::Grouping { inner } => {
            out.push_str("(group ");
            write_expr(out, inner);
            out.push(')');
        }
        Expr::Literal { value } => write_literal(out, value),
        Expr::Unary { operator, right } => {
            let _ = write!(out, "({} ", operator.lexeme);
            write_expr(out, right);
            out.push(')');
        }
        Expr::Variable { name } => out.push_str(&name.lexeme),
        Expr::Assign { name, value } => {
            let _ = write!(out, "(assign {} ", name.lexeme);
            write_expr(out, value);
            out.push(')');
        }
    }
}

fn write_stmt(out: &mut String, stmt: &Stmt) {
    match stmt {
        Stmt::Expression { expr } => write_expr(out, expr),
        Stmt::Print { expr } => {
            out.push_str("(print ");
            write_expr(out, expr);
            out.push(')');
        }
        Stmt::Var { name, initializer } => {
            let _ = write!(out, "(var {}", name.lexeme);
            if let Some(init) = initializer {
                out.push(' ');
                write_expr(out, init);
            }
            out.push(')');
        }
    }
}

fn write_literal(out: &mut String, value: &LiteralValue) {
    match value {
        // Strings are quoted so `"1"` and `1` render differently.
        LiteralValue::Str(s) => {
            let _ = write!(out, "\"{s}\"");
        }
        other => {
            let _ = write!(out, "{other}");
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Token, TokenKind};

    fn num(n: f64) -> Expr {
        Expr::literal(LiteralValue::Number(n))
    }

    fn op(kind: TokenKind, lexeme: &str) -> Token {
        Token::dummy(kind, lexeme)
    }

    #[test]
    fn renders_precedence_shape() {
        // 1 + 2 * 3
        let tree = Expr::Binary {
            left: Box::new(num(1.0)),
            operator: op(TokenKind::Plus, "+"),
            right: Box::new(Expr::Binary {
                left: Box::new(num(2.0)),
                operator: op(TokenKind::Star, "*"),
                right: Box::new(num(3.0)),
            }),
        };
        assert_eq!(render_expr(&tree), "(+ 1 (* 2 3))");
    }

    #[test]
    fn renders_grouping_and_unary() {
        let tree = Expr::Unary {
            operator: op(TokenKind::Minus, "-"),
            right: Box::new(Expr::Grouping {
                inner: Box::new(num(7.0)),
            }),
        };
        assert_eq!(render_expr(&tree), "(- (group 7))");
    }

    #[test]
    fn renders_strings_quoted() {
        let tree = Expr::literal(LiteralValue::Str("hi".to_string()));
        assert_eq!(render_expr(&tree), "\"hi\"");
    }

    #[test]
    fn renders_statements() {
        let print = Stmt::Print {
            expr: Expr::Variable {
                name: op(TokenKind::Identifier, "x"),
            },
        };
        assert_eq!(render_stmt(&print), "(print x)");

        let var_init = Stmt::Var {
            name: op(TokenKind::Identifier, "x"),
            initializer: Some(num(1.0)),
        };
        assert_eq!(render_stmt(&var_init), "(var x 1)");

        let var_bare = Stmt::Var {
            name: op(TokenKind::Identifier, "x"),
            initializer: None,
        };
        assert_eq!(render_stmt(&var_bare), "(var x)");
    }

    #[test]
    fn renders_assignment() {
        let tree = Expr::Assign {
            name: op(TokenKind::Identifier, "x"),
            value: Box::new(num(2.0)),
        };
        assert_eq!(render_expr(&tree), "(assign x 2)");
    }

    #[test]
    fn program_is_line_per_statement() {
        let stmts = vec![
            Stmt::Expression { expr: num(1.0) },
            Stmt::Print { expr: num(2.0) },
        ];
        assert_eq!(render_program(&stmts), "1\n(print 2)\n");
    }
}
