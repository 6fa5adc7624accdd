use crate::{
    ast::{Expr, InfixOperator},
    interpreter::{evaluator::core::EvalResult, scope::Scope, value::core::Value},
};

impl Scope<'_> {
    /// Evaluates both operands, left first, and applies the operator.
    ///
    /// Both sides are always evaluated; `||` and `&&` do not short-circuit.
    pub fn eval_infix_op(&self,
                         left: &Expr,
                         op: InfixOperator,
                         right: &Expr)
                         -> EvalResult<Value> {
        let left = self.eval_expression(left)?;
        let right = self.eval_expression(right)?;
        Self::eval_infix(op, &left, &right)
    }

    /// Applies an infix operator to two evaluated values.
    ///
    /// # Example
    /// ```
    /// use sprout::{
    ///     ast::InfixOperator,
    ///     interpreter::{scope::Scope, value::core::Value},
    /// };
    ///
    /// let result = Scope::eval_infix(InfixOperator::Add, &Value::from("a"), &Value::Number(1.0));
    /// assert_eq!(result.unwrap(), Value::from("a1"));
    /// ```
    pub fn eval_infix(op: InfixOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        use InfixOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Sub,
        };

        match op {
            Add => Self::eval_add(left, right),
            Sub | Mul | Div => Self::eval_arithmetic(op, left, right),
            Less | Greater | LessEqual | GreaterEqual => Self::eval_comparison(op, left, right),
            Equal => Ok(Value::Boolean(left.loose_eq(right))),
            NotEqual => Ok(Value::Boolean(!left.strict_eq(right))),
            Or | And => Self::eval_logic(op, left, right),
        }
    }
}
