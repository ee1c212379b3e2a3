use crate::{
    ast::BinaryOperator,
    error::EvalResult,
    interpreter::{evaluator::core::Evaluator, value::Value},
};

impl Evaluator {
    /// Evaluates a binary operation between two already-evaluated values.
    ///
    /// Arithmetic operators require numbers and delegate to
    /// `eval_arithmetic`. Equality and ordering operators use
    /// `eval_comparison`. The eager logical operators use `eval_logic`.
    ///
    /// `&&` and `||` are accepted here too, but they are applied to both
    /// values without short-circuiting; the tree walk routes them through
    /// `eval_short_circuit` instead.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Source position for error reporting.
    ///
    /// # Example
    /// ```
    /// use exprkit::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::Evaluator, value::Value},
    /// };
    ///
    /// let result = Evaluator::eval_binary(BinaryOperator::Add,
    ///                                     &Value::Number(3.0),
    ///                                     &Value::Number(4.0),
    ///                                     0);
    /// assert_eq!(result.unwrap(), Value::Number(7.0));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       position: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, EagerAnd, EagerOr, Equal, FloorDiv, Greater, GreaterEqual, Less,
            LessEqual, Mod, Mul, NotEqual, Or, Pow, Sub,
        };

        match op {
            Add | Sub | Mul | Div | FloorDiv | Mod | Pow => {
                let l = left.as_number(position)?;
                let r = right.as_number(position)?;
                Self::eval_arithmetic(op, l, r, position)
            },

            Less | Greater | LessEqual | GreaterEqual | Equal | NotEqual => {
                Self::eval_comparison(op, left, right, position)
            },

            And | Or | EagerAnd | EagerOr => Self::eval_logic(op, left, right, position),
        }
    }
}
