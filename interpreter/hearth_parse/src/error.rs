//! Parse error marker.

/// Recoverable parse failure.
///
/// The diagnostic has already been reported into the sink by the time this
/// is constructed; the value itself only unwinds the expression call chain
/// back to `declaration`, where synchronization takes over. It carries no
/// payload on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ParseError;

pub(crate) type ParseResult<T> = Result<T, ParseError>;
