//! Command handlers for the Hearth CLI.
//!
//! Each submodule implements one CLI command. Shared utilities like
//! `read_file` and `report_errors` live here in the module root. Handlers
//! return the process exit code; only `main` calls `process::exit`.

use std::io::IsTerminal;

use hearth_diagnostic::{ColorMode, DiagnosticSink, TerminalEmitter};

mod debug;
mod repl;
mod run;

pub use debug::{lex_file, parse_file};
pub use repl::run_repl;
pub use run::run_file;

use crate::pipeline::USAGE_EXIT;

/// Read a source file, reporting a usage error on failure.
pub(crate) fn read_file(path: &str) -> Result<String, i32> {
    std::fs::read_to_string(path).map_err(|err| {
        eprintln!("error: cannot read '{path}': {err}");
        USAGE_EXIT
    })
}

/// Render every collected diagnostic to stderr, with source snippets.
pub(crate) fn report_errors(sink: &DiagnosticSink, source: &str) {
    if sink.is_empty() {
        return;
    }
    let mut emitter = TerminalEmitter::stderr(ColorMode::Auto, std::io::stderr().is_terminal())
        .with_source(source);
    emitter.emit_all(sink.diagnostics());
    emitter.flush();
}
