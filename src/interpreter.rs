/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the syntax tree statement by statement, evaluates
/// expressions, applies operators, calls functions and carries `return`
/// values out of nested blocks.
///
/// # Responsibilities
/// - Evaluates every statement and expression kind.
/// - Calls user-defined functions and host builtins.
/// - Reports runtime errors such as undefined names or operator type
///   mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens,
/// each corresponding to a meaningful language element such as a number,
/// identifier, operator, delimiter or keyword. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, lexeme and
///   line.
/// - Handles numeric and string literals, identifiers, keywords and
///   operators.
/// - Reports unterminated string literals.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// Expressions are parsed with a Pratt parser driven by prefix and infix
/// handler tables; statements are recognized by their leading token.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Applies operator precedence and left associativity.
/// - Reports the first syntax error with its line.
pub mod parser;
/// Lexical environments.
///
/// A scope maps names to values and may point at an enclosing scope. The
/// host creates the root scope; every function call opens a child scope.
pub mod scope;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements truthiness, display and the equality relations.
pub mod value;
