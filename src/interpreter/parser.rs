/// Parser state, the expression loop and the `parse` entry point.
///
/// Holds the token cursor and the tables mapping token kinds to prefix and
/// infix handlers.
pub mod core;

/// Prefix handlers.
///
/// Literals, identifiers and calls, parenthesized groups and the prefix
/// operators `+`, `-` and `!`.
pub mod prefix;

/// Infix handlers and operator precedence.
pub mod infix;

/// Statement parsing.
///
/// Dispatches on the first token of a statement: declarations, assignments,
/// conditionals, function definitions, returns and expression statements.
pub mod statement;

/// Block parsing.
///
/// Parses brace-delimited statement lists and the top-level program, and
/// checks that `elif` and `else` follow a conditional.
pub mod block;

/// Small helpers shared by the parser modules.
pub mod utils;
