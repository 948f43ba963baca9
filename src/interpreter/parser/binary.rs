use std::io::BufRead;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_primary},
        token_stream::TokenStream,
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `ts`: Token stream.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<R>(ts: &mut TokenStream<R>) -> ParseResult<Expr>
    where R: BufRead
{
    let left = parse_multiplicative(ts)?;
    continue_additive(ts, left)
}

/// Continues an additive expression whose first operand is already parsed.
///
/// Used by the statement parser, which has to consume a leading name before
/// it knows whether it is looking at an assignment or an expression.
///
/// # Parameters
/// - `ts`: Token stream positioned after `left`.
/// - `left`: The first term.
pub fn continue_additive<R>(ts: &mut TokenStream<R>, mut left: Expr) -> ParseResult<Expr>
    where R: BufRead
{
    loop {
        let op = match ts.get()? {
            Token::Plus => BinaryOperator::Add,
            Token::Minus => BinaryOperator::Sub,
            other => {
                ts.unget(other)?;
                return Ok(left);
            },
        };
        let line = ts.line();
        let right = parse_multiplicative(ts)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }
}

/// Parses multiplication-level expressions.
///
/// Handles `*` and `/` with a primary on the right, left-associative, and `%`
/// with a whole multiplicative expression on the right. The latter makes
/// `7 % 3 * 2` mean `7 % (3 * 2)`.
///
/// The rule is: `multiplicative := primary (("*" | "/") primary | "%"
/// multiplicative)*`
///
/// # Parameters
/// - `ts`: Token stream.
///
/// # Returns
/// A binary expression tree combining primary nodes.
pub fn parse_multiplicative<R>(ts: &mut TokenStream<R>) -> ParseResult<Expr>
    where R: BufRead
{
    let left = parse_primary(ts)?;
    continue_multiplicative(ts, left)
}

/// Continues a multiplicative expression whose first operand is already
/// parsed.
///
/// # Parameters
/// - `ts`: Token stream positioned after `left`.
/// - `left`: The first primary.
pub fn continue_multiplicative<R>(ts: &mut TokenStream<R>, mut left: Expr) -> ParseResult<Expr>
    where R: BufRead
{
    loop {
        let op = match ts.get()? {
            Token::Star => BinaryOperator::Mul,
            Token::Slash => BinaryOperator::Div,
            Token::Percent => BinaryOperator::Mod,
            other => {
                ts.unget(other)?;
                return Ok(left);
            },
        };
        let line = ts.line();
        let right = match op {
            BinaryOperator::Mod => parse_multiplicative(ts)?,
            _ => parse_primary(ts)?,
        };
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }
}
