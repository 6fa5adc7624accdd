use thiserror::Error;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Tried to use a name that no scope in the chain binds.
    #[error("Undefined identifier '{name}'.")]
    UndefinedIdentifier {
        /// The name that was looked up.
        name: String,
    },
    /// Tried to declare a name that is already visible.
    #[error("Cannot redefine '{name}'.")]
    Redefinition {
        /// The name of the variable.
        name: String,
    },
    /// A function was called with the wrong number of arguments.
    #[error("'{name}' requires {expected} arguments, but got {found}.")]
    ArityMismatch {
        /// The name of the function.
        name:     String,
        /// The number of declared parameters.
        expected: usize,
        /// The number of supplied arguments.
        found:    usize,
    },
    /// An operator was applied to operands of incompatible types.
    #[error("Type error: {details}.")]
    TypeMismatch {
        /// Details about the type mismatch.
        details: String,
    },
    /// A `return` tried to hand back a function value.
    #[error("Cannot return {kind} values.")]
    IllegalReturnValue {
        /// The kind of value that was returned.
        kind: &'static str,
    },
    /// A call expression named a value that is not a function.
    #[error("'{name}' is a {kind} and cannot be called.")]
    NotCallable {
        /// The name used as callee.
        name: String,
        /// The kind of value bound to that name.
        kind: &'static str,
    },
}

impl RuntimeError {
    /// Shorthand for a [`RuntimeError::TypeMismatch`] with the given details.
    pub fn type_mismatch(details: impl Into<String>) -> Self {
        Self::TypeMismatch { details: details.into() }
    }
}
