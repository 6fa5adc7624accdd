use crate::{
    ast::{Expr, PrefixOperator},
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, scope::Scope, value::core::Value},
    util::num::parse_number_lexeme,
};

impl Scope<'_> {
    /// Applies a prefix operator to its operand node.
    ///
    /// The operand must be a number literal: `-5` is accepted, while `-a`,
    /// `-(1 + 2)` and `--5` are type mismatches.
    pub fn eval_prefix_op(&self, op: PrefixOperator, operand: &Expr) -> EvalResult<Value> {
        let Expr::Number(lexeme) = operand else {
            return Err(RuntimeError::type_mismatch(format!("prefix '{op}' only applies to a \
                                                            number literal")));
        };

        let value = Value::Number(parse_number_lexeme(lexeme)?);
        Self::eval_prefix(op, &value)
    }

    /// Applies a prefix operator to an already evaluated value.
    ///
    /// Prefix operators only accept numbers. `+` returns the number
    /// unchanged, `-` negates it and `!` yields its logical negation.
    ///
    /// # Errors
    /// Returns a [`RuntimeError::TypeMismatch`] for any non-number operand.
    ///
    /// # Example
    /// ```
    /// use sprout::{
    ///     ast::PrefixOperator,
    ///     interpreter::{scope::Scope, value::core::Value},
    /// };
    ///
    /// let five = Value::Number(5.0);
    ///
    /// assert_eq!(Scope::eval_prefix(PrefixOperator::Negate, &five).unwrap(),
    ///            Value::Number(-5.0));
    /// assert_eq!(Scope::eval_prefix(PrefixOperator::Not, &Value::Number(0.0)).unwrap(),
    ///            Value::Boolean(true));
    /// assert!(Scope::eval_prefix(PrefixOperator::Negate, &Value::from("5")).is_err());
    /// ```
    pub fn eval_prefix(op: PrefixOperator, value: &Value) -> EvalResult<Value> {
        let Value::Number(n) = value else {
            return Err(RuntimeError::type_mismatch(format!("prefix '{op}' expects a number, found a {}",
                                                           value.type_name())));
        };

        match op {
            PrefixOperator::Plus => Ok(Value::Number(*n)),
            PrefixOperator::Negate => Ok(Value::Number(-n)),
            PrefixOperator::Not => Ok(Value::Boolean(!value.is_truthy())),
        }
    }
}
