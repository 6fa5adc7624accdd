/// Lexing errors.
///
/// Raised while turning source text into tokens. The only lexical failure is
/// a string literal whose closing quote is missing.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree:
/// unexpected tokens, missing handlers, premature end of input, and `elif` or
/// `else` branches that do not follow an `if` or `elif`.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: undefined
/// identifiers, redefinitions, arity mismatches, operator type mismatches and
/// illegal return values.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of the tokenize, parse, evaluate pipeline.
///
/// Each stage has its own error type; this enum lets callers that run the
/// whole pipeline use `?` across stage boundaries.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source text could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The program failed while running.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
