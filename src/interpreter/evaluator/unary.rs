use crate::{
    ast::UnaryOperator,
    error::EvalResult,
    interpreter::{evaluator::core::Evaluator, value::Value},
};

impl Evaluator {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation.
    /// - `Plus`: numeric identity; still rejects booleans.
    /// - `Not`: boolean negation.
    ///
    /// # Example
    /// ```
    /// use exprkit::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::Evaluator, value::Value},
    /// };
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Negate, &Value::Number(5.0), 0).unwrap();
    /// assert_eq!(v, Value::Number(-5.0));
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Not, &Value::Bool(false), 0).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, position: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => Ok(Value::Number(-value.as_number(position)?)),
            UnaryOperator::Plus => Ok(Value::Number(value.as_number(position)?)),
            UnaryOperator::Not => Ok(Value::Bool(!value.as_bool(position)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuntimeError;

    #[test]
    fn operators_check_operand_types() {
        assert_eq!(Evaluator::eval_unary(UnaryOperator::Plus, &Value::Bool(true), 3),
                   Err(RuntimeError::ExpectedNumber { position: 3 }));
        assert_eq!(Evaluator::eval_unary(UnaryOperator::Not, &Value::Number(0.0), 3),
                   Err(RuntimeError::ExpectedBoolean { position: 3 }));
    }
}
