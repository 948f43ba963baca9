use std::io;

/// Failures of the token stream itself.
///
/// None of these can be recovered from by resynchronizing: either the input
/// source is broken, or the parser broke the pushback discipline.
#[derive(Debug)]
pub enum StreamError {
    /// A token was pushed back while the pushback slot was still occupied.
    FullBuffer {
        /// The token already waiting in the slot.
        held:     String,
        /// The token that was rejected.
        rejected: String,
    },
    /// Reading from or writing to the session streams failed.
    Io(io::Error),
}

impl StreamError {
    /// The process exit status a session aborted by this error ends with.
    ///
    /// Input failures and a broken pushback discipline are told apart so that
    /// scripts driving the calculator can distinguish them.
    #[must_use]
    pub const fn exit_status(&self) -> u8 {
        match self {
            Self::Io(_) => 1,
            Self::FullBuffer { .. } => 2,
        }
    }
}

impl std::fmt::Display for StreamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FullBuffer { held, rejected } => write!(f,
                                                          "putback into full buffer: holding {held}, rejected {rejected}"),
            Self::Io(e) => write!(f, "i/o failure: {e}"),
        }
    }
}

impl std::error::Error for StreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FullBuffer { .. } => None,
            Self::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for StreamError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}
