use crate::{
    ast::InfixOperator,
    interpreter::{evaluator::core::EvalResult, scope::Scope, value::core::Value},
};

impl Scope<'_> {
    /// Evaluates `<`, `>`, `<=` and `>=`.
    ///
    /// Relational operators only accept numbers. Any comparison involving
    /// `NaN` is false.
    ///
    /// # Example
    /// ```
    /// use sprout::{
    ///     ast::InfixOperator,
    ///     interpreter::{scope::Scope, value::core::Value},
    /// };
    ///
    /// let a = Value::Number(3.0);
    /// let b = Value::Number(5.0);
    ///
    /// assert_eq!(Scope::eval_comparison(InfixOperator::Less, &a, &b).unwrap(),
    ///            Value::Boolean(true));
    /// assert!(Scope::eval_comparison(InfixOperator::Less, &a, &Value::from("5")).is_err());
    /// ```
    pub fn eval_comparison(op: InfixOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        let a = left.as_number("compare")?;
        let b = right.as_number("compare")?;

        let result = match op {
            InfixOperator::Less => a < b,
            InfixOperator::Greater => a > b,
            InfixOperator::LessEqual => a <= b,
            InfixOperator::GreaterEqual => a >= b,
            _ => unreachable!("eval_comparison used with {op}"),
        };

        Ok(Value::Boolean(result))
    }
}
