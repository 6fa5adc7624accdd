//! # sprout
//!
//! sprout is a small imperative scripting language written in Rust.
//! Source text is tokenized, parsed into a syntax tree by a Pratt parser and
//! run by a tree-walking evaluator. The language has numbers, strings and
//! booleans, `let` bindings, `if`/`elif`/`else`, first-class functions and a
//! `print` builtin.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::evaluate_program, lexer::tokenize, parser::core::parse, scope::Scope,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of a program as a tree. The AST is
/// built by the parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Names the infix and prefix operators.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Defines one error enum per stage, each carrying enough context to
///   point at the problem.
/// - Wraps them in a single `Error` so the stages compose with `?`.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, scopes, evaluation and value
/// representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
pub mod interpreter;
/// A line-oriented read-eval-print loop.
pub mod repl;
/// General helpers for numeric conversion and formatting.
pub mod util;

/// Tokenizes, parses and runs `source` in `scope`.
///
/// Returns the value of the first top-level `return`, or `None` if the
/// program finished without one. Bindings made by the program stay in
/// `scope`, so repeated calls with the same scope see each other's
/// definitions.
///
/// # Errors
/// Returns the first lexing, parsing or runtime error. Nothing is evaluated
/// unless the whole source parses.
///
/// # Examples
/// ```
/// use sprout::{interpreter::{scope::Scope, value::core::Value}, run};
///
/// let scope = Scope::with_builtins();
///
/// let result = run("let a = 2; return a * 21;", &scope).unwrap();
/// assert_eq!(result, Some(Value::Number(42.0)));
///
/// // 'b' is not defined
/// assert!(run("let c = b + 1;", &scope).is_err());
/// ```
pub fn run(source: &str, scope: &Scope<'_>) -> Result<Option<Value>, Error> {
    let tokens = tokenize(source)?;
    let program = parse(&tokens)?;
    Ok(evaluate_program(&program, scope)?)
}
