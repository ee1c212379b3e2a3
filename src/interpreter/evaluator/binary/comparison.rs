use crate::{
    ast::BinaryOperator,
    error::{EvalResult, RuntimeError},
    interpreter::{evaluator::core::Evaluator, value::Value},
};

impl Evaluator {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// `==` and `!=` compare two numbers or two booleans; mixing the two is a
    /// type error. The ordering operators require numbers.
    ///
    /// # Example
    /// ```
    /// use exprkit::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::Evaluator, value::Value},
    /// };
    ///
    /// let result = Evaluator::eval_comparison(BinaryOperator::Less,
    ///                                         &Value::Number(3.0),
    ///                                         &Value::Number(5.0),
    ///                                         0);
    ///
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           position: usize)
                           -> EvalResult<Value> {
        Ok(Value::Bool(match op {
                           BinaryOperator::Equal | BinaryOperator::NotEqual => {
                               let equality = strict_eq(left, right, position)?;
                               if op == BinaryOperator::Equal { equality } else { !equality }
                           },

                           BinaryOperator::Less
                           | BinaryOperator::Greater
                           | BinaryOperator::LessEqual
                           | BinaryOperator::GreaterEqual => {
                               let left = left.as_number(position)?;
                               let right = right.as_number(position)?;

                               match op {
                                   BinaryOperator::Less => left < right,
                                   BinaryOperator::Greater => left > right,
                                   BinaryOperator::LessEqual => left <= right,
                                   BinaryOperator::GreaterEqual => left >= right,
                                   _ => unreachable!(),
                               }
                           },

                           _ => unreachable!("eval_comparison used with non comparison operator"),
                       }))
    }
}

/// Compares two values of the same type for equality.
///
/// # Errors
/// [`RuntimeError::TypeError`] if one value is a number and the other a
/// boolean.
fn strict_eq(left: &Value, right: &Value, position: usize) -> EvalResult<bool> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(a == b),
        (Value::Bool(a), Value::Bool(b)) => Ok(a == b),
        _ => {
            Err(RuntimeError::TypeError { details: format!("cannot compare {} with {}",
                                                           left.type_name(),
                                                           right.type_name()),
                                          position })
        },
    }
}
