use std::io::{BufRead, Write};

use log::{debug, warn};

use crate::{
    error::{CalcError, StreamError},
    interpreter::{
        evaluator::core::Context,
        lexer::Token,
        parser::statement::parse_statement,
        symbol_table::SymbolTable,
        token_stream::TokenStream,
    },
};

/// Written before each statement is read.
pub const PROMPT: &str = "> ";
/// Written before each computed value.
pub const RESULT_MARKER: &str = "= ";
/// Character that ends a statement and that error recovery skips to.
pub const PRINT_CHAR: char = ';';
/// Extra guidance written after a diagnostic in interactive mode.
pub const REENTRY_HINT: &str =
    "Please re-enter your expression. If you don't see the '>' prompt, type ; followed by [Enter].";

/// Outcome of processing one statement.
#[derive(Debug)]
pub enum Step {
    /// The statement evaluated to this value.
    Value(f64),
    /// The statement was rejected. The input has already been resynchronized
    /// to the next statement separator.
    Failed(CalcError),
    /// `quit` was read or the input ran out. Further steps keep returning
    /// this.
    Terminated,
}

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Ready to read the next statement.
    AwaitingStatement,
    /// Finished; no more input is read.
    Terminated,
}

/// One interactive calculator session.
///
/// A session owns its token stream and its evaluation context. Nothing is
/// shared between sessions, so a host serving several users creates one
/// session each.
///
/// # Example
/// ```
/// use reckon::interpreter::session::Session;
///
/// let mut session = Session::new("let x = 3; x * x; quit".as_bytes());
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// session.run(&mut out, &mut err).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "= 3\n= 9\n");
/// assert!(err.is_empty());
/// ```
pub struct Session<R> {
    tokens:      TokenStream<R>,
    context:     Context,
    state:       State,
    interactive: bool,
}

impl<R: BufRead> Session<R> {
    /// Creates a non-interactive session over `input` with the predefined
    /// constants in scope.
    pub fn new(input: R) -> Self {
        Self::with_context(input, Context::new())
    }

    /// Creates a session over `input` that evaluates against `context`.
    pub fn with_context(input: R, context: Context) -> Self {
        Self { tokens: TokenStream::new(input),
               context,
               state: State::AwaitingStatement,
               interactive: false }
    }

    /// Enables or disables prompts and the re-entry hint in [`Session::run`].
    #[must_use]
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// The current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    /// The variables of this session.
    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        &self.context.symbols
    }

    /// Processes one statement.
    ///
    /// Leading `;` separators are skipped. `quit` or the end of input
    /// terminates the session. Otherwise one statement is parsed and
    /// evaluated. If it fails with a recoverable error, the input is skipped
    /// up to the next `;` before the failure is reported.
    ///
    /// # Errors
    /// Returns a [`StreamError`] when the input cannot be read or the
    /// pushback discipline was violated. The session cannot continue after
    /// either.
    pub fn step(&mut self) -> Result<Step, StreamError> {
        if self.state == State::Terminated {
            return Ok(Step::Terminated);
        }

        match self.read_statement() {
            Ok(Some(value)) => Ok(Step::Value(value)),
            Ok(None) => {
                debug!("session terminated on line {}", self.tokens.line());
                self.state = State::Terminated;
                Ok(Step::Terminated)
            },
            Err(CalcError::Stream(e)) => {
                warn!("fatal stream error on line {}: {e}", self.tokens.line());
                Err(e)
            },
            Err(e) => {
                debug!("recovering from: {e}");
                self.tokens.ignore(PRINT_CHAR)?;
                Ok(Step::Failed(e))
            },
        }
    }

    /// Runs the read-evaluate-print loop until the session terminates.
    ///
    /// Values are written to `out` as `"= <value>"`, one per line. Failures
    /// are written to `err` as `"Error: <message>"`. In interactive mode a
    /// `"> "` prompt precedes each statement and failures are followed by a
    /// hint on how to resume.
    ///
    /// # Errors
    /// Returns a [`StreamError`] if reading input, writing output or the
    /// token stream itself fails.
    pub fn run<O, E>(&mut self, out: &mut O, err: &mut E) -> Result<(), StreamError>
        where O: Write,
              E: Write
    {
        loop {
            if self.interactive {
                write!(out, "{PROMPT}")?;
                out.flush()?;
            }

            match self.step()? {
                Step::Value(value) => writeln!(out, "{RESULT_MARKER}{value}")?,
                Step::Failed(e) => {
                    writeln!(err, "Error: {e}")?;
                    if self.interactive {
                        writeln!(err, "{REENTRY_HINT}")?;
                    }
                },
                Step::Terminated => {
                    if self.interactive {
                        writeln!(out)?;
                    }
                    return Ok(());
                },
            }
        }
    }

    /// Reads and evaluates the next statement.
    ///
    /// # Returns
    /// `None` once the session should terminate.
    fn read_statement(&mut self) -> Result<Option<f64>, CalcError> {
        let token = loop {
            match self.tokens.get()? {
                Token::Print => {},
                token => break token,
            }
        };
        if matches!(token, Token::Quit | Token::End) {
            return Ok(None);
        }
        self.tokens.unget(token)?;

        let statement = parse_statement(&mut self.tokens)?;
        debug!("parsed {statement:?}");
        let value = self.context.eval_statement(&statement)?;
        Ok(Some(value))
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Read};

    use super::*;
    use crate::error::{ParseError, RuntimeError};

    fn session(source: &str) -> Session<&[u8]> {
        Session::new(source.as_bytes())
    }

    /// A source whose every read fails.
    struct BrokenSource;

    impl Read for BrokenSource {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("device unplugged"))
        }
    }

    impl BufRead for BrokenSource {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            Err(io::Error::other("device unplugged"))
        }

        fn consume(&mut self, _amount: usize) {}
    }

    #[test]
    fn separators_are_absorbed() {
        let mut s = session(";;; 1 + 1 ;;;; quit");
        assert!(matches!(s.step().unwrap(), Step::Value(v) if v == 2.0));
        assert!(matches!(s.step().unwrap(), Step::Terminated));
        assert_eq!(s.state(), State::Terminated);
    }

    #[test]
    fn terminated_session_reads_nothing_more() {
        let mut s = session("quit; 1;");
        assert!(matches!(s.step().unwrap(), Step::Terminated));
        assert!(matches!(s.step().unwrap(), Step::Terminated));
    }

    #[test]
    fn end_of_input_terminates_after_last_statement() {
        let mut s = session("2 * 3");
        assert!(matches!(s.step().unwrap(), Step::Value(v) if v == 6.0));
        assert!(matches!(s.step().unwrap(), Step::Terminated));
    }

    #[test]
    fn failure_resynchronizes_to_next_separator() {
        let mut s = session("1 + ) 2 3; 4;");
        assert!(matches!(s.step().unwrap(),
                         Step::Failed(CalcError::Parse(ParseError::PrimaryExpected { .. }))));
        assert!(matches!(s.step().unwrap(), Step::Value(v) if v == 4.0));
    }

    #[test]
    fn separator_that_ends_bad_statement_is_not_skipped_twice() {
        let mut s = session("(1 + 2; 5;");
        assert!(matches!(s.step().unwrap(),
                         Step::Failed(CalcError::Parse(ParseError::ExpectedCloseParen { line: 1 }))));
        assert!(matches!(s.step().unwrap(), Step::Value(v) if v == 5.0));
    }

    #[test]
    fn runtime_failure_leaves_symbols_untouched() {
        let mut s = session("let x = 5 % 0; x;");
        assert!(matches!(s.step().unwrap(),
                         Step::Failed(CalcError::Runtime(RuntimeError::ModuloByZero { .. }))));
        assert!(!s.symbols().is_declared("x"));
        assert!(matches!(s.step().unwrap(),
                         Step::Failed(CalcError::Runtime(RuntimeError::UndefinedName { .. }))));
    }

    #[test]
    fn read_failure_ends_step_with_fatal_error() {
        let mut s = Session::new(BrokenSource);
        let err = s.step().unwrap_err();
        assert!(matches!(err, StreamError::Io(_)));
        assert_eq!(err.exit_status(), 1);
    }

    #[test]
    fn read_failure_aborts_run_without_diagnostics() {
        let mut s = Session::new(BrokenSource);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = s.run(&mut out, &mut err);

        assert!(matches!(result, Err(StreamError::Io(_))));
        assert!(out.is_empty());
        assert!(err.is_empty());
    }

    #[test]
    fn invalid_utf8_does_not_end_the_session() {
        let mut s = Session::new(&b"1 + \xff;\n5;\n"[..]);
        assert!(matches!(s.step().unwrap(),
                         Step::Failed(CalcError::Parse(ParseError::BadToken { line: 1, .. }))));
        assert!(matches!(s.step().unwrap(), Step::Value(v) if v == 5.0));
        assert!(matches!(s.step().unwrap(), Step::Terminated));
    }

    #[test]
    fn interactive_run_writes_prompts_and_hints() {
        let mut s = session("1;\n$;\nquit\n").interactive(true);
        let mut out = Vec::new();
        let mut err = Vec::new();
        s.run(&mut out, &mut err).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "> = 1\n> > \n");
        let err = String::from_utf8(err).unwrap();
        assert!(err.starts_with("Error: line 2: bad token '$'\n"));
        assert!(err.ends_with(&format!("{REENTRY_HINT}\n")));
    }
}
