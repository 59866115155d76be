//! Tree-walking evaluator.
//!
//! Statements execute in order against a single mutable [`Environment`];
//! expressions reduce to a [`Value`] by structural recursion. There is no
//! intermediate representation beyond the AST and no optimization: the tree
//! is the program.
//!
//! Runtime errors carry the operator or identifier token they occurred at
//! and abort the run; converting them into diagnostics is the caller's job.

mod environment;
mod errors;
mod interpreter;
mod operators;
mod print_handler;
mod value;

pub use environment::{AssignError, Environment};
pub use errors::{EvalError, EvalResult};
pub use interpreter::Interpreter;
pub use operators::{evaluate_binary, evaluate_unary};
pub use print_handler::PrintHandler;
pub use value::Value;
