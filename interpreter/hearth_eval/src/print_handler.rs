//! Output routing for `print` statements.

use parking_lot::Mutex;

/// Where `print` output goes.
///
/// Enum dispatch instead of a trait object: there are exactly two
/// destinations, stdout for real runs and an in-memory buffer for tests.
#[derive(Debug, Default)]
pub enum PrintHandler {
    #[default]
    Stdout,
    Buffer(Mutex<String>),
}

impl PrintHandler {
    pub fn stdout() -> Self {
        PrintHandler::Stdout
    }

    /// Capturing handler for tests.
    pub fn buffer() -> Self {
        PrintHandler::Buffer(Mutex::new(String::new()))
    }

    /// Emit one line of program output.
    pub fn print_line(&self, text: &str) {
        match self {
            PrintHandler::Stdout => println!("{text}"),
            PrintHandler::Buffer(buffer) => {
                let mut buffer = buffer.lock();
                buffer.push_str(text);
                buffer.push('\n');
            }
        }
    }

    /// Captured output so far; `None` for the stdout handler.
    pub fn captured(&self) -> Option<String> {
        match self {
            PrintHandler::Stdout => None,
            PrintHandler::Buffer(buffer) => Some(buffer.lock().clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn buffer_accumulates_lines() {
        let handler = PrintHandler::buffer();
        handler.print_line("one");
        handler.print_line("two");
        assert_eq!(handler.captured().as_deref(), Some("one\ntwo\n"));
    }

    #[test]
    fn stdout_captures_nothing() {
        assert_eq!(PrintHandler::stdout().captured(), None);
    }
}
