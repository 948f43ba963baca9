/// Parsing errors.
///
/// Defines the errors that can occur while lexing and parsing a statement:
/// unrecognized characters, missing punctuation and malformed declarations.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while evaluating a parsed statement, such as
/// division by zero, unknown variables or duplicate declarations.
pub mod runtime_error;
/// Token stream errors.
///
/// Failures of the input source itself and violations of the single-slot
/// pushback invariant. These are never recoverable within a session.
pub mod stream_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use stream_error::StreamError;

/// Any error that can surface while a session processes one statement.
#[derive(Debug)]
pub enum CalcError {
    /// A lexical or syntactic failure.
    Parse(ParseError),
    /// A failure while evaluating a well-formed statement.
    Runtime(RuntimeError),
    /// A failure of the token stream. Always fatal.
    Stream(StreamError),
}

impl CalcError {
    /// Returns `true` if the session can resynchronize and keep going after
    /// this error.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Stream(_))
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
            Self::Stream(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
            Self::Stream(e) => Some(e),
        }
    }
}

impl From<ParseError> for CalcError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for CalcError {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl From<StreamError> for CalcError {
    fn from(value: StreamError) -> Self {
        Self::Stream(value)
    }
}
