//! Hearth interpreter CLI.
//!
//! The binary is a thin dispatcher; the pipeline module owns the
//! scan → parse → interpret sequence and its exit-code mapping, and each
//! command handler lives in its own submodule.

pub mod commands;
pub mod pipeline;
