use std::io::BufRead;

use crate::{
    ast::Expr,
    error::CalcError,
    interpreter::{parser::binary::parse_additive, token_stream::TokenStream},
};

/// Result type used by the parser.
///
/// Besides syntax errors, parsing can hit stream failures while pulling
/// tokens, so the error side is the full [`CalcError`].
pub type ParseResult<T> = Result<T, CalcError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `ts`: Token stream positioned at the first token of the expression.
///
/// # Returns
/// The parsed expression node. The token that ended the expression is left
/// in the stream's pushback slot.
pub fn parse_expression<R>(ts: &mut TokenStream<R>) -> ParseResult<Expr>
    where R: BufRead
{
    parse_additive(ts)
}
