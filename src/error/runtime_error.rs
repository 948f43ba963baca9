#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read or assign a variable that was never declared.
    UndefinedName {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to declare a variable that already exists.
    DeclaredTwice {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The right operand of `/` was zero.
    DivideByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The truncated right operand of `%` was zero.
    ModuloByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `sqrt` was applied to a negative value.
    NegativeSqrt {
        /// The rejected argument.
        value: f64,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedName { name, line } => {
                write!(f, "line {line}: undefined name '{name}'")
            },
            Self::DeclaredTwice { name, line } => write!(f, "line {line}: {name} declared twice"),
            Self::DivideByZero { line } => write!(f, "line {line}: divide by zero"),
            Self::ModuloByZero { line } => write!(f, "line {line}: %: divide by zero"),
            Self::NegativeSqrt { value, line } => {
                write!(f, "line {line}: can't take sqrt of negative number {value}")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
