/// Infix operator evaluation.
///
/// Implements evaluation for all binary operations: arithmetic and string
/// concatenation, comparisons and equality, and logical operators.
pub mod infix;

/// Prefix operator evaluation.
///
/// Handles the operators that take a single operand: `+`, `-` and `!`.
pub mod prefix;

/// Core evaluation logic.
///
/// Contains program, statement, block and expression evaluation and the
/// `Completion` type that carries `return` values out of nested blocks.
pub mod core;

/// Function evaluation.
///
/// Handles user-defined and built-in function calls, argument checking, and
/// return value computation.
pub mod function;
