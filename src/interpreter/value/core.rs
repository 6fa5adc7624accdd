use std::rc::Rc;

use crate::{
    ast::FunctionDef,
    error::RuntimeError,
    interpreter::evaluator::{core::EvalResult, function::builtin::BuiltinFunction},
    util::num::{format_number, string_to_number},
};

/// Represents a runtime value in the interpreter.
///
/// Values are what expressions evaluate to and what scopes store. Functions
/// are first-class: a `function` statement binds a [`Value::Function`], and
/// host builtins are bound as [`Value::Builtin`].
#[derive(Debug, Clone)]
pub enum Value {
    /// A double precision number.
    Number(f64),
    /// A string.
    String(String),
    /// A boolean value (`true` or `false`).
    Boolean(bool),
    /// The absence of a value, e.g. the result of a function without
    /// `return`.
    Undefined,
    /// A user-defined function.
    Function(Rc<FunctionDef>),
    /// A host-provided function.
    Builtin(Rc<BuiltinFunction>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<BuiltinFunction> for Value {
    fn from(v: BuiltinFunction) -> Self {
        Self::Builtin(Rc::new(v))
    }
}

impl Value {
    /// Returns the name of the value's type, as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Boolean(_) => "boolean",
            Self::Undefined => "undefined",
            Self::Function(_) => "function",
            Self::Builtin(_) => "builtin function",
        }
    }

    /// Returns `true` for function and builtin values.
    #[must_use]
    pub const fn is_callable(&self) -> bool {
        matches!(self, Self::Function(_) | Self::Builtin(_))
    }

    /// Tests whether the value counts as true in a condition.
    ///
    /// `0`, `NaN`, the empty string, `false` and `undefined` are falsy;
    /// every other value, including functions, is truthy.
    ///
    /// # Example
    /// ```
    /// use sprout::interpreter::value::core::Value;
    ///
    /// assert!(Value::Number(2.0).is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(!Value::Undefined.is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::String(s) => !s.is_empty(),
            Self::Boolean(b) => *b,
            Self::Undefined => false,
            Self::Function(_) | Self::Builtin(_) => true,
        }
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// # Parameters
    /// - `operation`: Verb used in the error message, e.g. `"subtract"`.
    pub fn as_number(&self, operation: &str) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => {
                Err(RuntimeError::type_mismatch(format!("cannot {operation} a {}",
                                                        self.type_name())))
            },
        }
    }

    /// Strict equality: same type and same value.
    ///
    /// Numbers compare by IEEE rules, so `NaN` is never strictly equal to
    /// itself. Functions compare by identity.
    #[must_use]
    pub fn strict_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Undefined, Self::Undefined) => true,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Loose equality with type coercion.
    ///
    /// Values of the same type compare strictly. A number and a string
    /// compare after converting the string to a number, and a boolean is
    /// compared as `1` or `0`. `undefined` equals only itself.
    ///
    /// # Example
    /// ```
    /// use sprout::interpreter::value::core::Value;
    ///
    /// assert!(Value::Number(1.0).loose_eq(&Value::from("1")));
    /// assert!(Value::Boolean(true).loose_eq(&Value::Number(1.0)));
    /// assert!(!Value::Undefined.loose_eq(&Value::Number(0.0)));
    /// ```
    #[must_use]
    pub fn loose_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::String(b)) => *a == string_to_number(b),
            (Self::String(a), Self::Number(b)) => string_to_number(a) == *b,
            (Self::Boolean(a), Self::Number(_) | Self::String(_)) => {
                Self::Number(f64::from(u8::from(*a))).loose_eq(other)
            },
            (Self::Number(_) | Self::String(_), Self::Boolean(b)) => {
                self.loose_eq(&Self::Number(f64::from(u8::from(*b))))
            },
            _ => self.strict_eq(other),
        }
    }
}

impl PartialEq for Value {
    /// Structural equality used by tests and hosts.
    ///
    /// Unlike [`Value::strict_eq`], `NaN` equals `NaN` here so that results
    /// can be compared directly.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            _ => self.strict_eq(other),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::String(s) => write!(f, "{s}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Undefined => write!(f, "undefined"),
            Self::Function(def) => write!(f, "<function {}({})>", def.name, def.params.join(", ")),
            Self::Builtin(builtin) => write!(f, "<builtin {}>", builtin.name()),
        }
    }
}
