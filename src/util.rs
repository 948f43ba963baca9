/// Numeric conversion helpers.
///
/// This module provides the narrowing conversions the evaluator needs when an
/// operator is defined on integers but the calculator works in `f64`.
pub mod num;
