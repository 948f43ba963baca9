use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
    util::num::truncate_to_i32,
};

impl Context {
    /// Evaluates a binary operation on two values.
    ///
    /// `/` rejects an exact zero divisor. `%` truncates both operands to
    /// `i32` first and rejects a divisor that truncates to zero, so
    /// `7.9 % 2` is `1` and `5 % 0.5` is an error.
    ///
    /// # Parameters
    /// - `op`: Binary operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed value wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use reckon::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Mod, 7.9, 2.0, 1).unwrap(), 1.0);
    /// assert!(Context::eval_binary(BinaryOperator::Div, 1.0, 0.0, 1).is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64, line: usize) -> EvalResult<f64> {
        match op {
            BinaryOperator::Add => Ok(left + right),
            BinaryOperator::Sub => Ok(left - right),
            BinaryOperator::Mul => Ok(left * right),
            BinaryOperator::Div => {
                if right == 0.0 {
                    return Err(RuntimeError::DivideByZero { line });
                }
                Ok(left / right)
            },
            BinaryOperator::Mod => {
                let dividend = truncate_to_i32(left);
                let divisor = truncate_to_i32(right);
                if divisor == 0 {
                    return Err(RuntimeError::ModuloByZero { line });
                }
                Ok(f64::from(dividend.wrapping_rem(divisor)))
            },
        }
    }
}
