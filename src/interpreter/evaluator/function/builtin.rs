use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Signature of the native code behind a builtin.
///
/// A builtin receives the evaluated arguments in call order.
pub type NativeFn = dyn Fn(&[Value]) -> EvalResult<Value>;

/// A native function exposed to scripts under a fixed name and arity.
///
/// Builtins are registered into a root scope before any program runs and
/// are immutable afterwards. Calls are arity checked before the native code
/// runs.
///
/// # Example
/// ```
/// use sprout::interpreter::{evaluator::function::builtin::BuiltinFunction, value::core::Value};
///
/// let double = BuiltinFunction::new("double", 1, |args| {
///     Ok(Value::Number(args[0].as_number("double")? * 2.0))
/// });
///
/// assert_eq!(double.invoke(&[Value::Number(4.0)]).unwrap(), Value::Number(8.0));
/// assert!(double.invoke(&[]).is_err());
/// ```
pub struct BuiltinFunction {
    name:   String,
    arity:  usize,
    native: Box<NativeFn>,
}

impl BuiltinFunction {
    /// Wraps `native` as a builtin called `name` taking exactly `arity`
    /// arguments.
    pub fn new<F>(name: impl Into<String>, arity: usize, native: F) -> Self
        where F: Fn(&[Value]) -> EvalResult<Value> + 'static
    {
        Self { name: name.into(),
               arity,
               native: Box::new(native) }
    }

    /// The name scripts call this builtin by.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The exact number of arguments the builtin accepts.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Runs the native code after checking the argument count.
    ///
    /// # Errors
    /// Returns [`RuntimeError::ArityMismatch`] if `args` does not have
    /// exactly [`arity`](Self::arity) elements, and otherwise whatever the
    /// native code returns.
    pub fn invoke(&self, args: &[Value]) -> EvalResult<Value> {
        if args.len() != self.arity {
            return Err(RuntimeError::ArityMismatch { name:     self.name.clone(),
                                                     expected: self.arity,
                                                     found:    args.len(), });
        }
        (self.native)(args)
    }
}

impl std::fmt::Debug for BuiltinFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuiltinFunction")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}
