//! Scanner for Hearth source text.
//!
//! A single left-to-right pass over the source bytes turns text into a
//! `Vec<Token>`. The scanner never aborts: malformed input produces a
//! diagnostic in the sink and scanning resumes at the next character, so one
//! pass collects every lexical error. The token stream always ends with
//! exactly one `Eof` marker.
//!
//! Errors are reported, never printed; emission is the caller's concern.

mod cursor;
mod keywords;
mod scanner;

pub use scanner::scan;
