//! Recursive-descent parser for Hearth.
//!
//! One grammar rule per method, precedence encoded by the call chain:
//! assignment → equality → comparison → term → factor → unary → primary.
//! Errors are recoverable: each is reported into the sink, then panic-mode
//! synchronization discards tokens to the next statement boundary and
//! parsing resumes, so a single pass collects every syntax error in the
//! program.
//!
//! If the sink records no error, every returned statement is fully formed.

mod cursor;
mod error;
mod parser;
mod recovery;

pub use parser::parse;
pub use recovery::TokenSet;
