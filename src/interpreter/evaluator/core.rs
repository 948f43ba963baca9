use log::debug;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::symbol_table::SymbolTable,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the variables of one session.
///
/// ## Usage
///
/// `Context` is created once per session and reused for every statement, so
/// declarations persist from one statement to the next. A failed statement
/// leaves the context exactly as it was.
#[derive(Debug, Clone)]
pub struct Context {
    /// Variables visible to every statement of the session.
    pub symbols: SymbolTable,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a new evaluation context holding the predefined constants.
    #[must_use]
    pub fn new() -> Self {
        Self::with_symbols(SymbolTable::with_constants())
    }

    /// Creates a context over an existing symbol table.
    #[must_use]
    pub const fn with_symbols(symbols: SymbolTable) -> Self {
        Self { symbols }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// The evaluator dispatches on the expression variant: literals,
    /// variables, unary and binary operations and built-in calls. Operands
    /// are evaluated left to right.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed value.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let expr = Expr::BinaryOp { left:  Box::new(Expr::Number { value: 2.0, line: 1 }),
    ///                             op:    BinaryOperator::Mul,
    ///                             right: Box::new(Expr::Variable { name: "k".to_string(),
    ///                                                              line: 1 }),
    ///                             line:  1, };
    /// assert_eq!(Context::new().eval(&expr).unwrap(), 2000.0);
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Number { value, .. } => Ok(*value),
            Expr::Variable { name, line } => self.symbols.get_value(name, *line),
            Expr::UnaryOp { op, expr, .. } => {
                let value = self.eval(expr)?;
                Ok(Self::eval_unary(*op, value))
            },
            Expr::BinaryOp { left, op, right, line } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right, *line)
            },
            Expr::Call { call, line } => self.eval_call(call, *line),
        }
    }

    /// Evaluates a single statement.
    ///
    /// Handles variable declarations, assignments and plain expression
    /// statements. Declarations and assignments modify the context; every
    /// statement yields a value.
    ///
    /// A declaration of an existing name is rejected before its right-hand
    /// side is evaluated.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    ///
    /// # Returns
    /// The value of the statement: the expression result, or the value just
    /// stored for declarations and assignments.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<f64> {
        match statement {
            Statement::Declaration { name, value, line } => {
                if self.symbols.is_declared(name) {
                    return Err(RuntimeError::DeclaredTwice { name: name.clone(),
                                                             line: *line, });
                }

                let value = self.eval(value)?;
                self.symbols.declare(name, value, *line)?;
                debug!("declared {name} = {value}");
                Ok(value)
            },
            Statement::Assignment { name, value, line } => {
                let value = self.eval(value)?;
                self.symbols.set_value(name, value, *line)?;
                debug!("assigned {name} = {value}");
                Ok(value)
            },
            Statement::Expression { expr, .. } => self.eval(expr),
        }
    }
}
