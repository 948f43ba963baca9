/// The evaluator module computes the value of parsed statements.
///
/// The evaluator walks the AST, performs the arithmetic, calls the built-in
/// functions and reads and writes the session's variables.
///
/// # Responsibilities
/// - Evaluates AST nodes to `f64` values.
/// - Declares and assigns variables in the symbol table.
/// - Reports runtime errors such as division by zero or unknown names.
pub mod evaluator;
/// The lexer module defines the tokens of the calculator language.
///
/// It declares the `logos` lexeme rules (numbers, names, keywords and
/// punctuation) and the `Token` type handed to the parser.
///
/// # Responsibilities
/// - Recognizes floating-point literals, including exponent notation.
/// - Separates the keywords `let`, `quit`, `sqrt` and `pow` from names.
/// - Rejects characters that cannot start a token.
pub mod lexer;
/// The parser module builds statements from the token stream.
///
/// The parser is a predictive recursive-descent parser with one token of
/// lookahead, provided by the token stream's pushback slot.
///
/// # Responsibilities
/// - Converts tokens into `Statement` and `Expr` nodes.
/// - Encodes operator precedence and associativity.
/// - Pushes back every token it does not consume.
pub mod parser;
/// The session module drives the read-evaluate-print loop.
///
/// # Responsibilities
/// - Owns one token stream and one evaluation context.
/// - Prints prompts, results and diagnostics.
/// - Resynchronizes the input after a failed statement.
pub mod session;
/// The symbol table module stores the variables of a session.
pub mod symbol_table;
/// The token stream module turns a character source into tokens on demand.
///
/// # Responsibilities
/// - Reads input lazily, one line at a time.
/// - Provides a single-slot pushback buffer for lookahead.
/// - Skips raw input up to a delimiter for error recovery.
pub mod token_stream;
