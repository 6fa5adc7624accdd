use thiserror::Error;

/// Represents all errors that can occur during parsing.
///
/// Besides plain syntax errors this covers one structural rule: `elif` and
/// `else` are only accepted directly after an `if` or `elif` statement of
/// the same statement list. A leading or stray branch is reported as
/// [`ParseError::DanglingBranch`] instead of being parsed on its own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a token other than the one the grammar requires.
    #[error("Error on line {line}: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// Description of what the grammar required.
        expected: String,
        /// Description of the token encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of input while more tokens were required.
    #[error("Error on line {line}: Unexpected end of input, expected {expected}.")]
    UnexpectedEndOfInput {
        /// Description of what the grammar required.
        expected: String,
        /// The line of the last token read.
        line:     usize,
    },
    /// No expression can start with this token.
    #[error("Error on line {line}: No prefix parser for {token}.")]
    MissingPrefixHandler {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The token has a precedence but no infix parser.
    #[error("Error on line {line}: No infix parser for {token}.")]
    MissingInfixHandler {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// No statement can start with this token.
    #[error("Error on line {line}: Don't know how to parse a statement starting with {token}.")]
    UnknownStatement {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An `elif` or `else` that does not follow an `if` or `elif`.
    #[error("Error on line {line}: '{keyword}' must follow an 'if' or 'elif' block.")]
    DanglingBranch {
        /// The offending keyword.
        keyword: &'static str,
        /// The source line where the error occurred.
        line:    usize,
    },
}
