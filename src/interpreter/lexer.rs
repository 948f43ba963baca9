use logos::Logos;

/// Raw lexemes recognized in a line of input.
///
/// This is the `logos` view of the grammar. It knows nothing about input
/// boundaries; [`crate::interpreter::token_stream::TokenStream`] feeds it one
/// line at a time and converts each lexeme into a [`Token`].
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Lexeme {
    /// Numeric literals, such as `3`, `3.14`, `.5`, `2.` or `1e2`.
    ///
    /// An exponent marker without digits (`1e`, `2E+`) is still matched here
    /// so that `parse_float` rejects it as a bad token instead of it splitting
    /// into a number and the name `e`.
    #[regex(r"([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]*)?", parse_float)]
    Number(f64),
    /// Identifiers; variable names such as `x` or `rate_2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Name(String),
    /// `let`
    #[token("let")]
    Let,
    /// `quit`, or the single-letter sentinel `q`.
    #[token("quit")]
    #[token("q", priority = 3)]
    Quit,
    /// `sqrt`
    #[token("sqrt")]
    Sqrt,
    /// `pow`
    #[token("pow")]
    Pow,
    /// `;`
    #[token(";")]
    Print,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,
    /// `,`
    #[token(",")]
    Comma,
}

/// A lexical token handed to the parser.
///
/// Mirrors [`Lexeme`] and adds [`Token::End`], which the token stream produces
/// once its input source is exhausted.
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    /// A floating-point literal.
    Number(f64),
    /// A variable name.
    Name(String),
    /// The declaration keyword `let`.
    Let,
    /// `quit` or `q`.
    Quit,
    /// The built-in `sqrt`.
    Sqrt,
    /// The built-in `pow`.
    Pow,
    /// The statement separator `;`.
    Print,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `=`
    Equals,
    /// `,`
    Comma,
    /// The input source has no more characters.
    End,
}

impl Token {
    /// Returns the character a punctuation token is spelled with.
    ///
    /// # Returns
    /// - `Some(char)` for single-character tokens such as `;` or `(`.
    /// - `None` for numbers, names, keywords and [`Token::End`].
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::Print.as_char(), Some(';'));
    /// assert_eq!(Token::Name("x".to_string()).as_char(), None);
    /// ```
    #[must_use]
    pub const fn as_char(&self) -> Option<char> {
        match self {
            Self::Print => Some(';'),
            Self::Plus => Some('+'),
            Self::Minus => Some('-'),
            Self::Star => Some('*'),
            Self::Slash => Some('/'),
            Self::Percent => Some('%'),
            Self::LParen => Some('('),
            Self::RParen => Some(')'),
            Self::Equals => Some('='),
            Self::Comma => Some(','),
            Self::Number(_)
            | Self::Name(_)
            | Self::Let
            | Self::Quit
            | Self::Sqrt
            | Self::Pow
            | Self::End => None,
        }
    }
}

impl From<Lexeme> for Token {
    fn from(lexeme: Lexeme) -> Self {
        match lexeme {
            Lexeme::Number(value) => Self::Number(value),
            Lexeme::Name(name) => Self::Name(name),
            Lexeme::Let => Self::Let,
            Lexeme::Quit => Self::Quit,
            Lexeme::Sqrt => Self::Sqrt,
            Lexeme::Pow => Self::Pow,
            Lexeme::Print => Self::Print,
            Lexeme::Plus => Self::Plus,
            Lexeme::Minus => Self::Minus,
            Lexeme::Star => Self::Star,
            Lexeme::Slash => Self::Slash,
            Lexeme::Percent => Self::Percent,
            Lexeme::LParen => Self::LParen,
            Lexeme::RParen => Self::RParen,
            Lexeme::Equals => Self::Equals,
            Lexeme::Comma => Self::Comma,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "number {value}"),
            Self::Name(name) => write!(f, "name '{name}'"),
            Self::Let => write!(f, "'let'"),
            Self::Quit => write!(f, "'quit'"),
            Self::Sqrt => write!(f, "'sqrt'"),
            Self::Pow => write!(f, "'pow'"),
            Self::End => write!(f, "end of input"),
            other => match other.as_char() {
                Some(c) => write!(f, "'{c}'"),
                None => write!(f, "{other:?}"),
            },
        }
    }
}

/// Parses a floating-point literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_float(lex: &logos::Lexer<Lexeme>) -> Option<f64> {
    lex.slice().parse().ok()
}
