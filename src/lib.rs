//! # reckon
//!
//! reckon is an interactive arithmetic calculator written in Rust.
//! It reads `;`-terminated statements from any character stream, evaluates
//! them to floating-point numbers and keeps declared variables for the rest
//! of the session. A malformed statement is reported and skipped without
//! ending the session.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::StreamError,
    interpreter::session::{Session, Step},
};

/// Defines the structure of parsed statements.
///
/// This module declares the `Expr` and `Statement` types that represent one
/// parsed statement as a tree. The tree is built by the parser and walked by
/// the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing or
/// evaluating a statement, and the fatal errors of the token stream.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator,
///   stream).
/// - Attaches line numbers to every recoverable error.
/// - Separates recoverable failures from fatal ones.
pub mod error;
/// Orchestrates reading, parsing and evaluating statements.
///
/// This module ties together the lexer, token stream, parser, evaluator,
/// symbol table and session driver.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Provides the `Session` entry point for interactive use.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General numeric helpers.
///
/// # Responsibilities
/// - Narrow `f64` values to integers for integer-only operators.
pub mod util;

/// Evaluates every statement in `source` with a fresh session.
///
/// Evaluation stops at `quit` or at the end of the source. Statements that
/// fail are reported as [`Step::Failed`] and do not stop the remaining ones,
/// exactly as in an interactive session. The final [`Step::Terminated`] is not
/// included.
///
/// # Errors
/// Returns an error only if the session hits a fatal stream failure.
///
/// # Examples
/// ```
/// use reckon::{evaluate_script, interpreter::session::Step};
///
/// let steps = evaluate_script("let r = 2; pi * r * r; 1 / 0; r;").unwrap();
/// assert_eq!(steps.len(), 4);
/// assert!(matches!(steps[0], Step::Value(v) if v == 2.0));
/// assert!(matches!(steps[2], Step::Failed(_)));
/// assert!(matches!(steps[3], Step::Value(v) if v == 2.0));
/// ```
pub fn evaluate_script(source: &str) -> Result<Vec<Step>, StreamError> {
    let mut session = Session::new(source.as_bytes());
    let mut steps = Vec::new();

    loop {
        match session.step()? {
            Step::Terminated => return Ok(steps),
            step => steps.push(step),
        }
    }
}
