//! The grammar, one method per rule.
//!
//! ```text
//! program     → declaration* EOF
//! declaration → "var" IDENTIFIER ( "=" expression )? ";" | statement
//! statement   → "print" expression ";" | expression ";"
//! expression  → assignment
//! assignment  → equality ( "=" assignment )?
//! equality    → comparison ( ( "!=" | "==" ) comparison )*
//! comparison  → term ( ( ">" | ">=" | "<" | "<=" ) term )*
//! term        → factor ( ( "-" | "+" ) factor )*
//! factor      → unary ( ( "/" | "*" ) unary )*
//! unary       → ( "!" | "-" ) unary | primary
//! primary     → "false" | "true" | "nil" | NUMBER | STRING
//!             | "(" expression ")" | IDENTIFIER
//! ```

use hearth_diagnostic::{parse_error, DiagnosticSink};
use hearth_ir::{Expr, LiteralValue, Stmt, Token, TokenKind};
use tracing::trace;

use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use crate::recovery::{TokenSet, STATEMENT_BOUNDARY};

const EQUALITY_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::BangEqual)
    .with(TokenKind::EqualEqual);

const COMPARISON_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::Greater)
    .with(TokenKind::GreaterEqual)
    .with(TokenKind::Less)
    .with(TokenKind::LessEqual);

const TERM_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::Minus)
    .with(TokenKind::Plus);

const FACTOR_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::Slash)
    .with(TokenKind::Star);

const UNARY_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::Bang)
    .with(TokenKind::Minus);

/// Parse a token stream into statements.
///
/// Every syntax error is reported into `sink`; the statements that parsed
/// cleanly are still returned. Callers must check
/// `sink.had_syntax_error()` before interpreting.
pub fn parse(tokens: Vec<Token>, sink: &mut DiagnosticSink) -> Vec<Stmt> {
    let mut parser = Parser {
        cursor: Cursor::new(tokens),
    };
    let mut statements = Vec::new();
    while !parser.cursor.is_at_end() {
        if let Some(stmt) = parser.declaration(sink) {
            statements.push(stmt);
        }
    }
    statements
}

struct Parser {
    cursor: Cursor,
}

impl Parser {
    /// Parse one declaration, synchronizing on error. `None` means the
    /// statement was malformed and has been discarded.
    fn declaration(&mut self, sink: &mut DiagnosticSink) -> Option<Stmt> {
        let result = if self.cursor.match_kind(TokenKind::Var) {
            self.var_declaration(sink)
        } else {
            self.statement(sink)
        };
        match result {
            Ok(stmt) => Some(stmt),
            Err(ParseError) => {
                self.synchronize();
                None
            }
        }
    }

    fn var_declaration(&mut self, sink: &mut DiagnosticSink) -> ParseResult<Stmt> {
        let name = self
            .consume(TokenKind::Identifier, "Expect variable name.", sink)?
            .clone();
        let initializer = if self.cursor.match_kind(TokenKind::Equal) {
            Some(self.expression(sink)?)
        } else {
            None
        };
        self.consume(
            TokenKind::Semicolon,
            "Expect ';' after variable declaration.",
            sink,
        )?;
        trace!(name = %name.lexeme, "parsed var declaration");
        Ok(Stmt::Var { name, initializer })
    }

    fn statement(&mut self, sink: &mut DiagnosticSink) -> ParseResult<Stmt> {
        if self.cursor.match_kind(TokenKind::Print) {
            return self.print_statement(sink);
        }
        self.expression_statement(sink)
    }

    fn print_statement(&mut self, sink: &mut DiagnosticSink) -> ParseResult<Stmt> {
        let expr = self.expression(sink)?;
        self.consume(TokenKind::Semicolon, "Expect ';' after value.", sink)?;
        Ok(Stmt::Print { expr })
    }

    fn expression_statement(&mut self, sink: &mut DiagnosticSink) -> ParseResult<Stmt> {
        let expr = self.expression(sink)?;
        self.consume(TokenKind::Semicolon, "Expect ';' after expression.", sink)?;
        Ok(Stmt::Expression { expr })
    }

    fn expression(&mut self, sink: &mut DiagnosticSink) -> ParseResult<Expr> {
        self.assignment(sink)
    }

    /// Right-associative assignment. The left-hand side is parsed as an
    /// ordinary expression first; if an `=` follows, the LHS must turn out
    /// to be a plain variable. A bad target is reported against the `=`
    /// token but does not unwind: the parsed LHS is returned and parsing
    /// continues.
    fn assignment(&mut self, sink: &mut DiagnosticSink) -> ParseResult<Expr> {
        let expr = self.equality(sink)?;

        if self.cursor.match_kind(TokenKind::Equal) {
            let equals = self.cursor.previous().clone();
            let value = self.assignment(sink)?;

            return match expr {
                Expr::Variable { name } => Ok(Expr::Assign {
                    name,
                    value: Box::new(value),
                }),
                other => {
                    sink.report(parse_error(&equals, "Invalid assignment target."));
                    Ok(other)
                }
            };
        }

        Ok(expr)
    }

    fn equality(&mut self, sink: &mut DiagnosticSink) -> ParseResult<Expr> {
        let mut expr = self.comparison(sink)?;
        while self.cursor.match_set(EQUALITY_OPS) {
            let operator = self.cursor.previous().clone();
            let right = self.comparison(sink)?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    fn comparison(&mut self, sink: &mut DiagnosticSink) -> ParseResult<Expr> {
        let mut expr = self.term(sink)?;
        while self.cursor.match_set(COMPARISON_OPS) {
            let operator = self.cursor.previous().clone();
            let right = self.term(sink)?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    fn term(&mut self, sink: &mut DiagnosticSink) -> ParseResult<Expr> {
        let mut expr = self.factor(sink)?;
        while self.cursor.match_set(TERM_OPS) {
            let operator = self.cursor.previous().clone();
            let right = self.factor(sink)?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    fn factor(&mut self, sink: &mut DiagnosticSink) -> ParseResult<Expr> {
        let mut expr = self.unary(sink)?;
        while self.cursor.match_set(FACTOR_OPS) {
            let operator = self.cursor.previous().clone();
            let right = self.unary(sink)?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    fn unary(&mut self, sink: &mut DiagnosticSink) -> ParseResult<Expr> {
        if self.cursor.match_set(UNARY_OPS) {
            let operator = self.cursor.previous().clone();
            let right = self.unary(sink)?;
            return Ok(Expr::Unary {
                operator,
                right: Box::new(right),
            });
        }
        self.primary(sink)
    }

    fn primary(&mut self, sink: &mut DiagnosticSink) -> ParseResult<Expr> {
        let token = self.cursor.peek().clone();
        match token.kind {
            TokenKind::False => {
                self.cursor.advance();
                Ok(Expr::literal(LiteralValue::Bool(false)))
            }
            TokenKind::True => {
                self.cursor.advance();
                Ok(Expr::literal(LiteralValue::Bool(true)))
            }
            TokenKind::Nil => {
                self.cursor.advance();
                Ok(Expr::literal(LiteralValue::Nil))
            }
            TokenKind::Number => {
                self.cursor.advance();
                // The scanner guarantees a digit run, so this parse cannot
                // fail; the fallback is unreachable.
                let value = token
                    .literal
                    .as_deref()
                    .and_then(|text| text.parse::<f64>().ok())
                    .unwrap_or_default();
                Ok(Expr::literal(LiteralValue::Number(value)))
            }
            TokenKind::Str => {
                self.cursor.advance();
                let value = token.literal.clone().unwrap_or_default();
                Ok(Expr::literal(LiteralValue::Str(value)))
            }
            TokenKind::Identifier => {
                self.cursor.advance();
                Ok(Expr::Variable { name: token })
            }
            TokenKind::LeftParen => {
                self.cursor.advance();
                let inner = self.expression(sink)?;
                self.consume(
                    TokenKind::RightParen,
                    "Expect ')' after expression.",
                    sink,
                )?;
                Ok(Expr::Grouping {
                    inner: Box::new(inner),
                })
            }
            _ => Err(self.error(&token, "Expect expression.", sink)),
        }
    }

    /// Consume a token of the given kind or report `message` at the current
    /// token.
    fn consume(
        &mut self,
        kind: TokenKind,
        message: &str,
        sink: &mut DiagnosticSink,
    ) -> ParseResult<&Token> {
        if self.cursor.check(kind) {
            return Ok(self.cursor.advance());
        }
        let token = self.cursor.peek().clone();
        Err(self.error(&token, message, sink))
    }

    fn error(&self, token: &Token, message: &str, sink: &mut DiagnosticSink) -> ParseError {
        sink.report(parse_error(token, message));
        ParseError
    }

    /// Panic-mode recovery: discard tokens until just after a `;` or until
    /// the next token begins a statement.
    fn synchronize(&mut self) {
        trace!(line = self.cursor.peek().line, "synchronizing");
        self.cursor.advance();
        while !self.cursor.is_at_end() {
            if self.cursor.previous().kind == TokenKind::Semicolon {
                return;
            }
            if STATEMENT_BOUNDARY.contains(self.cursor.peek().kind) {
                return;
            }
            self.cursor.advance();
        }
    }
}
