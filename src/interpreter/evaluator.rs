/// Core evaluation logic for statements and expressions.
///
/// Contains the evaluation [`core::Context`], which owns the session's symbol
/// table, and the dispatch over AST nodes.
pub mod core;

/// Unary operator evaluation.
///
/// Handles the prefix operators, currently only negation.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements `+`, `-`, `*`, `/` and the integer remainder `%`, including
/// their division-by-zero checks.
pub mod binary;

/// Built-in function evaluation.
///
/// Implements `sqrt` and `pow`.
pub mod function;
