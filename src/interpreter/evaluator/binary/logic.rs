use crate::{
    ast::{BinaryOperator, Expr},
    error::EvalResult,
    interpreter::{environment::Environment, evaluator::core::Evaluator, value::Value},
};

impl Evaluator {
    /// Evaluates a logical operation between two boolean values.
    ///
    /// Both operands have already been evaluated, which is what gives `&` and
    /// `|` their eager behavior.
    ///
    /// # Example
    /// ```
    /// use exprkit::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::Evaluator, value::Value},
    /// };
    ///
    /// let result = Evaluator::eval_logic(BinaryOperator::EagerOr,
    ///                                    &Value::Bool(false),
    ///                                    &Value::Bool(true),
    ///                                    0);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_logic(op: BinaryOperator,
                      left: &Value,
                      right: &Value,
                      position: usize)
                      -> EvalResult<Value> {
        use BinaryOperator::{And, EagerAnd, EagerOr, Or};

        let left = left.as_bool(position)?;
        let right = right.as_bool(position)?;
        match op {
            And | EagerAnd => Ok(Value::Bool(left && right)),
            Or | EagerOr => Ok(Value::Bool(left || right)),
            _ => unreachable!("eval_logic used with non logical operator"),
        }
    }

    /// Evaluates `&&` or `||` with short-circuiting.
    ///
    /// The right operand is only evaluated when the left one does not already
    /// decide the result, so `false && undefined_name` is `false`.
    pub(crate) fn eval_short_circuit(&self,
                                     op: BinaryOperator,
                                     left: &Expr,
                                     right: &Expr,
                                     env: &Environment)
                                     -> EvalResult<Value> {
        let decided = match op {
            BinaryOperator::And => false,
            BinaryOperator::Or => true,
            _ => unreachable!("eval_short_circuit used with non short-circuit operator"),
        };

        let left_value = self.eval(left, env)?.as_bool(left.position())?;
        if left_value == decided {
            return Ok(Value::Bool(decided));
        }

        let right_value = self.eval(right, env)?.as_bool(right.position())?;
        Ok(Value::Bool(right_value))
    }
}
