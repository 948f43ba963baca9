use crate::{
    ast::Call,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Evaluates the arguments of a built-in call and applies the function.
    ///
    /// # Parameters
    /// - `call`: The function with its argument expressions.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// Anything raised by the arguments or by the function itself.
    pub fn eval_call(&self, call: &Call, line: usize) -> EvalResult<f64> {
        match call {
            Call::Sqrt(x) => sqrt(self.eval(x)?, line),
            Call::Pow { base, exponent } => {
                let base = self.eval(base)?;
                let exponent = self.eval(exponent)?;
                Ok(pow(base, exponent))
            },
        }
    }
}

/// Computes the square root of a non-negative value.
///
/// # Errors
/// Returns `RuntimeError::NegativeSqrt` for `x < 0`.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::function::sqrt;
///
/// assert_eq!(sqrt(16.0, 1).unwrap(), 4.0);
/// assert!(sqrt(-1.0, 1).is_err());
/// ```
pub fn sqrt(x: f64, line: usize) -> EvalResult<f64> {
    if x < 0.0 {
        return Err(RuntimeError::NegativeSqrt { value: x, line });
    }
    Ok(x.sqrt())
}

/// Raises `base` to the power `exponent`; both may be any real number.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::function::pow;
///
/// assert_eq!(pow(2.0, 10.0), 1024.0);
/// assert_eq!(pow(2.0, -1.0), 0.5);
/// ```
#[must_use]
pub fn pow(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}
