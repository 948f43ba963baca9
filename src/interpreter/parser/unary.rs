use std::io::BufRead;

use crate::{
    ast::{Builtin, Call, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::expect,
        },
        token_stream::TokenStream,
    },
};

/// Parses a primary expression, the highest-precedence unit.
///
/// Grammar:
/// ```text
/// primary := number
///          | name
///          | "(" expression ")"
///          | "-" primary
///          | "+" primary
///          | "sqrt" "(" expression ")"
///          | "pow" "(" expression "," expression ")"
/// ```
///
/// # Parameters
/// - `ts`: Token stream.
///
/// # Returns
/// The parsed primary node.
///
/// # Errors
/// - `PrimaryExpected` if the next token cannot start a primary. The token is
///   pushed back.
/// - `ExpectedCloseParen` for an unbalanced parenthesis.
/// - Errors from [`parse_call`] for built-in calls.
pub fn parse_primary<R>(ts: &mut TokenStream<R>) -> ParseResult<Expr>
    where R: BufRead
{
    let token = ts.get()?;
    let line = ts.line();

    match token {
        Token::Number(value) => Ok(Expr::Number { value, line }),
        Token::Name(name) => Ok(Expr::Variable { name, line }),
        Token::LParen => {
            let expr = parse_expression(ts)?;
            expect(ts, &Token::RParen, |line| ParseError::ExpectedCloseParen { line })?;
            Ok(expr)
        },
        Token::Minus => {
            let expr = parse_primary(ts)?;
            Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                               expr: Box::new(expr),
                               line })
        },
        Token::Plus => parse_primary(ts),
        Token::Sqrt => parse_call(ts, Builtin::Sqrt, line),
        Token::Pow => parse_call(ts, Builtin::Pow, line),
        other => {
            let found = other.to_string();
            ts.unget(other)?;
            Err(ParseError::PrimaryExpected { token: found,
                                              line }.into())
        },
    }
}

/// Parses the parenthesized argument list of a built-in.
///
/// `sqrt` takes one argument and `pow` two, separated by a comma.
///
/// Grammar (simplified): `call := "(" expression ("," expression)? ")"`
///
/// # Parameters
/// - `ts`: Token stream positioned after the function keyword.
/// - `function`: The built-in being called.
/// - `line`: Line of the function keyword.
///
/// # Errors
/// `ExpectedOpenParen`, `ExpectedComma` or `ExpectedCloseParen` when the
/// punctuation is missing, plus anything raised by the arguments.
pub fn parse_call<R>(ts: &mut TokenStream<R>, function: Builtin, line: usize) -> ParseResult<Expr>
    where R: BufRead
{
    expect(ts, &Token::LParen, |line| ParseError::ExpectedOpenParen { line })?;

    let first = Box::new(parse_expression(ts)?);
    let call = match function {
        Builtin::Sqrt => Call::Sqrt(first),
        Builtin::Pow => {
            expect(ts, &Token::Comma, |line| ParseError::ExpectedComma { line })?;
            let exponent = Box::new(parse_expression(ts)?);
            Call::Pow { base: first,
                        exponent }
        },
    };

    expect(ts, &Token::RParen, |line| ParseError::ExpectedCloseParen { line })?;

    Ok(Expr::Call { call, line })
}
