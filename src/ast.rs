/// An abstract syntax tree (AST) node representing an expression.
///
/// Every variant records the source line it started on, so evaluation errors
/// can point back at the input.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The literal value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (e.g. negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A call to one of the built-in functions (e.g. `pow(2, 10)`).
    Call {
        /// The function and its arguments.
        call: Call,
        /// Line number in the source code.
        line: usize,
    },
}

/// A single statement, terminated by `;` in the input.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `let name = value`
    Declaration {
        /// The new variable.
        name:  String,
        /// Its initial value.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `name = value`, for a variable that already exists.
    Assignment {
        /// The variable being updated.
        name:  String,
        /// The new value.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A bare expression whose value is printed.
    Expression {
        /// The expression.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `-x`
    Negate,
}

/// Infix operators, grouped by precedence level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`, on operands truncated to integers.
    Mod,
}

/// A built-in function applied to its arguments.
///
/// Each function carries exactly the operands it takes, so a call with the
/// wrong number of arguments cannot be represented.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    /// `sqrt(x)`
    Sqrt(Box<Expr>),
    /// `pow(base, exponent)`, meaning `base` raised to `exponent`.
    Pow {
        /// The value being raised.
        base:     Box<Expr>,
        /// The power it is raised to.
        exponent: Box<Expr>,
    },
}

/// The function keywords the parser recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// `sqrt`
    Sqrt,
    /// `pow`
    Pow,
}
