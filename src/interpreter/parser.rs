/// Core parsing types and the expression entry point.
///
/// Provides `ParseResult` and the top-level `parse_expression` used by every
/// other parser module.
pub mod core;

/// Infix operator parsing.
///
/// Implements the two binary precedence levels: `+`/`-` and `*`, `/`, `%`.
pub mod binary;

/// Primary expression parsing.
///
/// Handles literals, names, parentheses, unary signs and built-in calls.
pub mod unary;

/// Statement parsing.
///
/// Distinguishes declarations, assignments and bare expressions.
pub mod statement;

/// Helpers shared by the parser modules.
pub mod utils;
