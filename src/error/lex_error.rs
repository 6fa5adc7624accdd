use thiserror::Error;

/// Represents all errors that can occur during lexing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A string literal was opened but never closed.
    #[error("Error on line {line}: Unterminated string literal, expected a closing {quote}.")]
    UnterminatedString {
        /// The quote character that opened the literal.
        quote: char,
        /// The source line where the input ended.
        line:  usize,
    },
}
