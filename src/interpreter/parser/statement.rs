use std::io::BufRead;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::{continue_additive, continue_multiplicative},
            core::{ParseResult, parse_expression},
            utils::expect,
        },
        token_stream::TokenStream,
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a variable declaration, introduced by `let`.
/// - an assignment, a name directly followed by `=`.
/// - an expression used as a statement.
///
/// The terminating `;` is not consumed; it stays in the pushback slot.
///
/// # Parameters
/// - `ts`: Token stream positioned at the first token of the statement.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<R>(ts: &mut TokenStream<R>) -> ParseResult<Statement>
    where R: BufRead
{
    let token = ts.get()?;
    let line = ts.line();

    match token {
        Token::Let => parse_declaration(ts, line),
        Token::Name(name) => parse_assignment_or_expression(ts, name, line),
        other => {
            ts.unget(other)?;
            let expr = parse_expression(ts)?;
            Ok(Statement::Expression { expr, line })
        },
    }
}

/// Parses the remainder of `let <name> = <expression>`.
///
/// # Errors
/// - `NameExpectedInDeclaration` if `let` is not followed by a name.
/// - `MissingEqualsInDeclaration` if the name is not followed by `=`.
fn parse_declaration<R>(ts: &mut TokenStream<R>, line: usize) -> ParseResult<Statement>
    where R: BufRead
{
    let name = match ts.get()? {
        Token::Name(name) => name,
        other => {
            let line = ts.line();
            ts.unget(other)?;
            return Err(ParseError::NameExpectedInDeclaration { line }.into());
        },
    };

    expect(ts, &Token::Equals, |line| ParseError::MissingEqualsInDeclaration { name: name.clone(),
                                                                                line })?;
    let value = parse_expression(ts)?;

    Ok(Statement::Declaration { name, value, line })
}

/// Decides between `name = expression` and an expression starting with
/// `name`.
///
/// The name has already been consumed and the pushback slot only holds one
/// token, so when no `=` follows, the name becomes the leading primary and
/// parsing resumes at the multiplicative level.
fn parse_assignment_or_expression<R>(ts: &mut TokenStream<R>,
                                     name: String,
                                     line: usize)
                                     -> ParseResult<Statement>
    where R: BufRead
{
    let next = ts.get()?;
    if next == Token::Equals {
        let value = parse_expression(ts)?;
        return Ok(Statement::Assignment { name, value, line });
    }
    ts.unget(next)?;

    let left = Expr::Variable { name, line };
    let term = continue_multiplicative(ts, left)?;
    let expr = continue_additive(ts, term)?;

    Ok(Statement::Expression { expr, line })
}
