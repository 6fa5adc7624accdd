use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, scope::Scope, value::core::Value},
};

impl Scope<'_> {
    /// Evaluates `+`.
    ///
    /// Two numbers are added. Every other combination converts both sides
    /// to text and concatenates them, so `true + 1` is `"true1"`.
    /// `undefined` is rejected on either side.
    ///
    /// # Example
    /// ```
    /// use sprout::interpreter::{scope::Scope, value::core::Value};
    ///
    /// assert_eq!(Scope::eval_add(&Value::Number(2.0), &Value::Number(3.0)).unwrap(),
    ///            Value::Number(5.0));
    /// assert_eq!(Scope::eval_add(&Value::Number(2.0), &Value::from("x")).unwrap(),
    ///            Value::from("2x"));
    /// assert_eq!(Scope::eval_add(&Value::Boolean(true), &Value::Number(1.0)).unwrap(),
    ///            Value::from("true1"));
    /// assert!(Scope::eval_add(&Value::Undefined, &Value::from("x")).is_err());
    /// ```
    pub fn eval_add(left: &Value, right: &Value) -> EvalResult<Value> {
        match (left, right) {
            (Value::Undefined, _) | (_, Value::Undefined) => {
                Err(RuntimeError::type_mismatch("cannot add undefined"))
            },
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
            _ => Ok(Value::String(format!("{left}{right}"))),
        }
    }

    /// Evaluates `-`, `*` and `/` on two numbers.
    ///
    /// Division follows IEEE 754, so dividing by zero yields an infinity or
    /// `NaN` rather than an error.
    ///
    /// # Errors
    /// Returns a [`RuntimeError::TypeMismatch`] if either operand is not a
    /// number.
    pub fn eval_arithmetic(op: InfixOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        let verb = match op {
            InfixOperator::Sub => "subtract",
            InfixOperator::Mul => "multiply",
            InfixOperator::Div => "divide",
            _ => unreachable!("eval_arithmetic used with {op}"),
        };

        let a = left.as_number(verb)?;
        let b = right.as_number(verb)?;

        Ok(Value::Number(match op {
                             InfixOperator::Sub => a - b,
                             InfixOperator::Mul => a * b,
                             _ => a / b,
                         }))
    }
}
