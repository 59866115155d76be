//! Hearth IR - shared representation types for the interpreter.
//!
//! This crate contains the data structures every pipeline stage agrees on:
//! - Spans for source locations
//! - Tokens and `TokenKind` for scanner output
//! - AST nodes (`Expr`, `Stmt`) for parser output
//! - The debug pretty-printer that renders a tree back to text
//!
//! # Design Philosophy
//!
//! - **Closed sum types**: `TokenKind`, `Expr`, and `Stmt` are closed
//!   enumerations consumed by exhaustive matching. Adding a variant is a
//!   deliberate grammar change that every consumer must acknowledge.
//! - **Owned trees**: each AST node exclusively owns its boxed children;
//!   the tree is acyclic and torn down with its owning statement.

mod ast;
pub mod pretty;
mod span;
mod token;

pub use ast::{Expr, LiteralValue, Stmt};
pub use span::Span;
pub use token::{Token, TokenKind, TOKEN_KIND_COUNT};
