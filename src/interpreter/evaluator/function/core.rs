use tracing::trace;

use crate::{
    ast::{Expr, FunctionDef},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            function::{builtin::BuiltinFunction, print},
        },
        scope::Scope,
        value::core::Value,
    },
};

/// Registers the standard builtins into `scope`.
///
/// Currently this is only `print`, which writes its single argument to
/// standard output followed by a newline.
pub fn register_builtins(scope: &Scope<'_>) {
    scope.define_builtin(BuiltinFunction::new("print", 1, print::print));
}

impl Scope<'_> {
    /// Evaluates a call expression.
    ///
    /// The callee is resolved through the scope chain. Builtins receive
    /// their evaluated arguments directly. A user-defined function runs its
    /// body in a fresh scope whose parent is the scope making the call, with
    /// each parameter bound to the matching argument.
    ///
    /// # Errors
    /// - [`RuntimeError::UndefinedIdentifier`] if `callee` is not bound.
    /// - [`RuntimeError::NotCallable`] if it is bound to a non-function.
    /// - [`RuntimeError::ArityMismatch`] if the argument count is wrong.
    /// - Any error raised while evaluating arguments or the body.
    ///
    /// # Example
    /// ```
    /// use sprout::{
    ///     ast::Expr,
    ///     interpreter::{
    ///         evaluator::function::builtin::BuiltinFunction, scope::Scope, value::core::Value,
    ///     },
    /// };
    ///
    /// let scope = Scope::new();
    /// scope.define_builtin(BuiltinFunction::new("twice", 1, |args| {
    ///     Ok(Value::Number(args[0].as_number("double")? * 2.0))
    /// }));
    ///
    /// let result = scope.eval_call("twice", &[Expr::number(21)]).unwrap();
    /// assert_eq!(result, Value::Number(42.0));
    /// ```
    pub fn eval_call(&self, callee: &str, arguments: &[Expr]) -> EvalResult<Value> {
        let function = self.eval_identifier(callee)?;

        match function {
            Value::Builtin(builtin) => {
                let args = self.eval_arguments(arguments)?;
                trace!(builtin = builtin.name(), "invoking builtin");
                builtin.invoke(&args)
            },
            Value::Function(def) => self.call_user_defined_function(&def, arguments),
            other => Err(RuntimeError::NotCallable { name: callee.to_string(),
                                                     kind: other.type_name(), }),
        }
    }

    fn call_user_defined_function(&self,
                                  def: &FunctionDef,
                                  arguments: &[Expr])
                                  -> EvalResult<Value> {
        if arguments.len() != def.params.len() {
            return Err(RuntimeError::ArityMismatch { name:     def.name.clone(),
                                                     expected: def.params.len(),
                                                     found:    arguments.len(), });
        }

        let args = self.eval_arguments(arguments)?;
        let call_scope = Scope::with_parent(self);

        for (param, arg) in def.params.iter().zip(args) {
            call_scope.define(param.clone(), arg);
        }

        trace!(function = %def.name, "entering function body");
        Ok(call_scope.eval_block(&def.body)?.into_value())
    }

    /// Evaluates call arguments left to right in this scope.
    fn eval_arguments(&self, arguments: &[Expr]) -> EvalResult<Vec<Value>> {
        arguments.iter().map(|arg| self.eval_expression(arg)).collect()
    }
}
