use std::io::BufRead;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult, token_stream::TokenStream},
};

/// Consumes the next token if it equals `expected`.
///
/// On a mismatch the offending token is pushed back before the error is
/// returned, so a `;` that ends a malformed statement still ends it for
/// resynchronization.
///
/// # Parameters
/// - `ts`: Token stream.
/// - `expected`: The token that must come next.
/// - `error`: Builds the error from the line the mismatch was found on.
///
/// # Errors
/// The error built by `error`, or any stream failure.
pub(in crate::interpreter::parser) fn expect<R>(ts: &mut TokenStream<R>,
                                                expected: &Token,
                                                error: impl FnOnce(usize) -> ParseError)
                                                -> ParseResult<()>
    where R: BufRead
{
    let token = ts.get()?;
    if &token == expected {
        return Ok(());
    }

    let line = ts.line();
    ts.unget(token)?;
    Err(error(line).into())
}
