use crate::{
    ast::BinaryOperator,
    error::{EvalResult, RuntimeError},
    interpreter::{
        evaluator::{core::Evaluator, utils::checked_number},
        value::Value,
    },
};

impl Evaluator {
    /// Applies an arithmetic operator to two numbers.
    ///
    /// `/`, `//` and `%` by zero are errors rather than infinities. `%` keeps
    /// the sign of the dividend and `//` rounds the quotient toward negative
    /// infinity. Results that overflow or are undefined are rejected by
    /// [`checked_number`].
    ///
    /// # Example
    /// ```
    /// use exprkit::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::Evaluator, value::Value},
    /// };
    ///
    /// let r = Evaluator::eval_arithmetic(BinaryOperator::FloorDiv, -7.0, 2.0, 0).unwrap();
    /// assert_eq!(r, Value::Number(-4.0));
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: f64,
                           right: f64,
                           position: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, FloorDiv, Mod, Mul, Pow, Sub};

        if matches!(op, Div | FloorDiv | Mod) && right == 0.0 {
            return Err(RuntimeError::DivisionByZero { position });
        }

        let result = match op {
            Add => left + right,
            Sub => left - right,
            Mul => left * right,
            Div => left / right,
            FloorDiv => (left / right).floor(),
            Mod => left % right,
            Pow => left.powf(right),
            _ => unreachable!("eval_arithmetic used with non arithmetic operator"),
        };

        checked_number(result, position)
    }
}
