use std::io::BufRead;

use log::trace;
use logos::Logos;

use crate::{
    error::{CalcError, ParseError, StreamError},
    interpreter::lexer::{Lexeme, Token},
};

/// A pull-based stream of tokens over a buffered character source.
///
/// Input is read one line at a time, only when the parser asks for a token
/// that is not available yet, so an interactive session blocks exactly where
/// it needs more input. The stream offers a single pushback slot used by the
/// parser for its one-token lookahead.
///
/// ## Invariants
/// - At most one token is pushed back at any time. A second
///   [`TokenStream::unget`] before the slot is drained is rejected with
///   [`StreamError::FullBuffer`] and the held token is kept.
/// - `pos` always lies on a character boundary of `line`.
pub struct TokenStream<R> {
    reader:  R,
    line:    String,
    pos:     usize,
    line_no: usize,
    buffer:  Option<Token>,
}

impl<R: BufRead> TokenStream<R> {
    /// Creates a token stream reading from `reader`.
    pub fn new(reader: R) -> Self {
        Self { reader,
               line: String::new(),
               pos: 0,
               line_no: 0,
               buffer: None }
    }

    /// The number of the input line most recently read, starting at 1.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line_no
    }

    /// Returns `true` if a token is waiting in the pushback slot.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.buffer.is_some()
    }

    /// Returns the next token.
    ///
    /// A pushed-back token is returned first. Otherwise whitespace is skipped
    /// and the next lexeme is read, pulling further lines from the source as
    /// needed. Once the source is exhausted, every call yields [`Token::End`].
    ///
    /// # Errors
    /// - [`ParseError::BadToken`] if the next character cannot start a token.
    ///   The offending characters are consumed.
    /// - [`StreamError::Io`] if the source cannot be read.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::{lexer::Token, token_stream::TokenStream};
    ///
    /// let mut ts = TokenStream::new("let x = 2;".as_bytes());
    /// assert_eq!(ts.get().unwrap(), Token::Let);
    /// assert_eq!(ts.get().unwrap(), Token::Name("x".to_string()));
    /// assert_eq!(ts.get().unwrap(), Token::Equals);
    /// assert_eq!(ts.get().unwrap(), Token::Number(2.0));
    /// assert_eq!(ts.get().unwrap(), Token::Print);
    /// assert_eq!(ts.get().unwrap(), Token::End);
    /// ```
    pub fn get(&mut self) -> Result<Token, CalcError> {
        if let Some(token) = self.buffer.take() {
            return Ok(token);
        }

        loop {
            if self.pos >= self.line.len() {
                if !self.fill_line()? {
                    return Ok(Token::End);
                }
                continue;
            }

            let mut lexer = Lexeme::lexer(&self.line[self.pos..]);
            let Some(lexed) = lexer.next() else {
                // Only whitespace was left on this line.
                self.pos = self.line.len();
                continue;
            };
            let slice = lexer.slice().to_string();
            self.pos += lexer.span().end;

            return match lexed {
                Ok(lexeme) => {
                    let token = Token::from(lexeme);
                    trace!("line {}: lexed {token}", self.line_no);
                    Ok(token)
                },
                Err(()) => Err(ParseError::BadToken { token: slice,
                                                      line:  self.line_no, }.into()),
            };
        }
    }

    /// Puts `token` back so that the next [`TokenStream::get`] returns it.
    ///
    /// # Errors
    /// Returns [`StreamError::FullBuffer`] if a token is already waiting. The
    /// waiting token is left untouched.
    pub fn unget(&mut self, token: Token) -> Result<(), StreamError> {
        if let Some(held) = &self.buffer {
            return Err(StreamError::FullBuffer { held:     held.to_string(),
                                                 rejected: token.to_string(), });
        }
        self.buffer = Some(token);
        Ok(())
    }

    /// Discards input up to and including the next `delimiter` character.
    ///
    /// The pushback slot is checked first: if it holds the token spelled
    /// `delimiter`, emptying the slot is enough. Otherwise the slot is cleared
    /// and raw characters are skipped without lexing them, so garbage in the
    /// skipped region cannot raise further errors. Stops silently when the
    /// source runs out.
    ///
    /// # Errors
    /// Returns [`StreamError::Io`] if the source cannot be read.
    pub fn ignore(&mut self, delimiter: char) -> Result<(), StreamError> {
        if let Some(token) = self.buffer.take()
           && token.as_char() == Some(delimiter)
        {
            return Ok(());
        }

        loop {
            if let Some(offset) = self.line[self.pos..].find(delimiter) {
                self.pos += offset + delimiter.len_utf8();
                return Ok(());
            }
            self.pos = self.line.len();
            if !self.fill_line()? {
                return Ok(());
            }
        }
    }

    /// Replaces the current line with the next one from the source.
    ///
    /// Bytes that are not valid UTF-8 become `U+FFFD`, which the lexer then
    /// reports as a bad token.
    ///
    /// # Returns
    /// `false` once the source is exhausted.
    fn fill_line(&mut self) -> Result<bool, StreamError> {
        self.line.clear();
        self.pos = 0;
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(false);
        }
        self.line.push_str(&String::from_utf8_lossy(&bytes));
        self.line_no += 1;
        trace!("read line {}: {:?}", self.line_no, self.line.trim_end());
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(source: &str) -> TokenStream<&[u8]> {
        TokenStream::new(source.as_bytes())
    }

    fn drain(ts: &mut TokenStream<&[u8]>) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            match ts.get().unwrap() {
                Token::End => return tokens,
                token => tokens.push(token),
            }
        }
    }

    #[test]
    fn lexes_operators_and_punctuation() {
        let mut ts = stream("( ) + - * / % ; = ,");
        assert_eq!(drain(&mut ts),
                   vec![Token::LParen,
                        Token::RParen,
                        Token::Plus,
                        Token::Minus,
                        Token::Star,
                        Token::Slash,
                        Token::Percent,
                        Token::Print,
                        Token::Equals,
                        Token::Comma]);
    }

    #[test]
    fn lexes_number_forms() {
        let mut ts = stream("12 3.5 .25 1e2 2.5E-1");
        assert_eq!(drain(&mut ts),
                   vec![Token::Number(12.0),
                        Token::Number(3.5),
                        Token::Number(0.25),
                        Token::Number(100.0),
                        Token::Number(0.25)]);
    }

    #[test]
    fn keywords_take_priority_over_names() {
        let mut ts = stream("let quit q sqrt pow letter quits q1 x_1");
        assert_eq!(drain(&mut ts),
                   vec![Token::Let,
                        Token::Quit,
                        Token::Quit,
                        Token::Sqrt,
                        Token::Pow,
                        Token::Name("letter".to_string()),
                        Token::Name("quits".to_string()),
                        Token::Name("q1".to_string()),
                        Token::Name("x_1".to_string())]);
    }

    #[test]
    fn tokens_span_multiple_lines() {
        let mut ts = stream("1 +\n\n   2\n;");
        assert_eq!(drain(&mut ts),
                   vec![Token::Number(1.0), Token::Plus, Token::Number(2.0), Token::Print]);
        assert_eq!(ts.line(), 4);
    }

    #[test]
    fn bad_token_is_consumed_and_reported() {
        let mut ts = stream("1 $ 2");
        assert_eq!(ts.get().unwrap(), Token::Number(1.0));
        let err = ts.get().unwrap_err();
        assert!(matches!(err, CalcError::Parse(ParseError::BadToken { ref token, line: 1 }) if token == "$"));
        assert_eq!(ts.get().unwrap(), Token::Number(2.0));
    }

    #[test]
    fn invalid_utf8_is_a_bad_token() {
        let mut ts = TokenStream::new(&b"1 + \xff;\n5;\n"[..]);
        assert_eq!(ts.get().unwrap(), Token::Number(1.0));
        assert_eq!(ts.get().unwrap(), Token::Plus);
        let err = ts.get().unwrap_err();
        assert!(matches!(err, CalcError::Parse(ParseError::BadToken { ref token, line: 1 }) if token == "\u{fffd}"));
        assert_eq!(ts.get().unwrap(), Token::Print);
        assert_eq!(ts.get().unwrap(), Token::Number(5.0));
        assert_eq!(ts.line(), 2);
    }

    #[test]
    fn exponent_without_digits_is_a_bad_token() {
        let mut ts = stream("1e; 2E+ 3e1");
        let err = ts.get().unwrap_err();
        assert!(matches!(err, CalcError::Parse(ParseError::BadToken { ref token, .. }) if token == "1e"));
        assert_eq!(ts.get().unwrap(), Token::Print);
        let err = ts.get().unwrap_err();
        assert!(matches!(err, CalcError::Parse(ParseError::BadToken { ref token, .. }) if token == "2E+"));
        assert_eq!(ts.get().unwrap(), Token::Number(30.0));
    }

    #[test]
    fn unget_returns_token_once() {
        let mut ts = stream("2");
        ts.unget(Token::Plus).unwrap();
        assert!(ts.is_full());
        assert_eq!(ts.get().unwrap(), Token::Plus);
        assert!(!ts.is_full());
        assert_eq!(ts.get().unwrap(), Token::Number(2.0));
    }

    #[test]
    fn second_unget_is_rejected_and_keeps_first() {
        let mut ts = stream("");
        ts.unget(Token::Plus).unwrap();
        let err = ts.unget(Token::Minus).unwrap_err();
        assert!(matches!(err, StreamError::FullBuffer { .. }));
        assert_eq!(ts.get().unwrap(), Token::Plus);
        assert_eq!(ts.get().unwrap(), Token::End);
    }

    #[test]
    fn ignore_stops_at_buffered_delimiter() {
        let mut ts = stream("4;");
        ts.unget(Token::Print).unwrap();
        ts.ignore(';').unwrap();
        assert_eq!(ts.get().unwrap(), Token::Number(4.0));
    }

    #[test]
    fn ignore_skips_raw_characters_across_lines() {
        let mut ts = stream("1 $ @ (\n # ) ; 7;");
        ts.unget(Token::RParen).unwrap();
        ts.ignore(';').unwrap();
        assert_eq!(ts.get().unwrap(), Token::Number(7.0));
        assert_eq!(ts.get().unwrap(), Token::Print);
    }

    #[test]
    fn ignore_at_end_of_input_is_silent() {
        let mut ts = stream("1 2 3");
        ts.ignore(';').unwrap();
        assert_eq!(ts.get().unwrap(), Token::End);
    }
}
