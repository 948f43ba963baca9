#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// A character that cannot start any token.
    BadToken {
        /// The offending source text.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A token that cannot start a primary expression.
    PrimaryExpected {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An opening parenthesis `(` was expected after a built-in function name.
    ExpectedOpenParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedCloseParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The `,` between the two arguments of `pow` was not found.
    ExpectedComma {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `let` was not followed by a variable name.
    NameExpectedInDeclaration {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A declaration is missing the `=` after the variable name.
    MissingEqualsInDeclaration {
        /// The name being declared.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadToken { token, line } => write!(f, "line {line}: bad token '{token}'"),

            Self::PrimaryExpected { token, line } => {
                write!(f, "line {line}: primary expected, found {token}")
            },

            Self::ExpectedOpenParen { line } => write!(f, "line {line}: '(' expected"),

            Self::ExpectedCloseParen { line } => write!(f, "line {line}: ')' expected"),

            Self::ExpectedComma { line } => write!(f,
                                                   "line {line}: ',' expected; the format for power is pow(x, i), meaning x^i"),

            Self::NameExpectedInDeclaration { line } => {
                write!(f, "line {line}: name expected in declaration")
            },

            Self::MissingEqualsInDeclaration { name, line } => {
                write!(f, "line {line}: = missing in declaration of {name}")
            },
        }
    }
}

impl std::error::Error for ParseError {}
