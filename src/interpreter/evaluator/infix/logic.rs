use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, scope::Scope, value::core::Value},
};

impl Scope<'_> {
    /// Evaluates `||` and `&&`.
    ///
    /// The result is one of the operands, not a boolean: `||` yields the
    /// left operand when it is truthy and the right one otherwise, `&&`
    /// yields the left operand when it is falsy and the right one otherwise.
    /// Operands must be strings, numbers or booleans.
    ///
    /// # Example
    /// ```
    /// use sprout::{
    ///     ast::InfixOperator,
    ///     interpreter::{scope::Scope, value::core::Value},
    /// };
    ///
    /// let empty = Value::from("");
    /// let name = Value::from("guest");
    ///
    /// assert_eq!(Scope::eval_logic(InfixOperator::Or, &empty, &name).unwrap(), name);
    /// assert_eq!(Scope::eval_logic(InfixOperator::And, &empty, &name).unwrap(), empty);
    /// ```
    pub fn eval_logic(op: InfixOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        for operand in [left, right] {
            if !matches!(operand, Value::String(_) | Value::Number(_) | Value::Boolean(_)) {
                return Err(RuntimeError::type_mismatch(format!("'{op}' cannot take a {}",
                                                               operand.type_name())));
            }
        }

        let pick_left = match op {
            InfixOperator::Or => left.is_truthy(),
            InfixOperator::And => !left.is_truthy(),
            _ => unreachable!("eval_logic used with {op}"),
        };

        Ok(if pick_left { left.clone() } else { right.clone() })
    }
}
