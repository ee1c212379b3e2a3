use log::debug;

use crate::{
    ast::{BinaryOperator, Expr},
    error::{EvalResult, RuntimeError},
    interpreter::{
        environment::Environment,
        evaluator::{function::core::FunctionTable, utils::checked_number},
        value::Value,
    },
};

/// Evaluates expression trees.
///
/// An `Evaluator` owns the table of functions that calls resolve against. The
/// table is fixed once the evaluator is built; evaluation only borrows the
/// evaluator and the environment, so one evaluator can be shared freely and
/// evaluating the same tree twice always gives the same result.
///
/// # Example
/// ```
/// use exprkit::interpreter::{
///     environment::Environment, evaluator::Evaluator, lexer::tokenize, parser::parse,
///     value::Value,
/// };
///
/// let expr = parse(&tokenize("(2 + 3) * x").unwrap()).unwrap();
/// let env: Environment = [("x", 4.0)].into_iter().collect();
///
/// let evaluator = Evaluator::new();
/// assert_eq!(evaluator.evaluate(&expr, &env).unwrap(), Value::Number(20.0));
/// ```
#[derive(Debug, Clone)]
pub struct Evaluator {
    functions: FunctionTable,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Creates an evaluator with the built-in function table.
    #[must_use]
    pub fn new() -> Self {
        Self::with_functions(FunctionTable::builtin())
    }

    /// Creates an evaluator that resolves calls against `functions`.
    #[must_use]
    pub const fn with_functions(functions: FunctionTable) -> Self {
        Self { functions }
    }

    /// The function table calls are resolved against.
    #[must_use]
    pub const fn functions(&self) -> &FunctionTable {
        &self.functions
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Children are
    /// evaluated before their parent, left to right, except that the right
    /// side of `&&` and `||` is skipped once the left side decides the result.
    ///
    /// An assignment evaluates to the assigned value but does not change
    /// `env`; binding names is left to the caller.
    ///
    /// # Errors
    /// - [`RuntimeError::UndefinedVariable`] for a name missing from `env`.
    /// - [`RuntimeError::UnknownFunction`] for a call to a name missing from
    ///   the function table.
    /// - Type, domain and arithmetic errors from operators and functions.
    pub fn evaluate(&self, expr: &Expr, env: &Environment) -> EvalResult<Value> {
        let value = self.eval(expr, env)?;
        debug!("evaluated '{expr}' to {value}");
        Ok(value)
    }

    /// Post-order walk behind [`Evaluator::evaluate`].
    pub(crate) fn eval(&self, expr: &Expr, env: &Environment) -> EvalResult<Value> {
        match expr {
            Expr::Number { value, position } => checked_number(*value, *position),
            Expr::Identifier { name, position } => {
                env.get(name)
                   .ok_or_else(|| RuntimeError::UndefinedVariable { name:     name.clone(),
                                                                    position: *position, })
            },
            Expr::Unary { op,
                          operand,
                          position, } => {
                let value = self.eval(operand, env)?;
                Self::eval_unary(*op, &value, *position)
            },
            Expr::Binary { left,
                           op: op @ (BinaryOperator::And | BinaryOperator::Or),
                           right,
                           .. } => self.eval_short_circuit(*op, left, right, env),
            Expr::Binary { left,
                           op,
                           right,
                           position, } => {
                let left = self.eval(left, env)?;
                let right = self.eval(right, env)?;
                Self::eval_binary(*op, &left, &right, *position)
            },
            Expr::FunctionCall { name,
                                 arguments,
                                 position, } => {
                let args = arguments.iter()
                                    .map(|argument| self.eval(argument, env))
                                    .collect::<EvalResult<Vec<_>>>()?;
                self.functions.call(name, &args, *position)
            },
            Expr::Group { inner, .. } => self.eval(inner, env),
            Expr::Assign { value, .. } => self.eval(value, env),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::{lexer::tokenize, parser::parse};

    fn eval_with(source: &str, env: &Environment) -> EvalResult<Value> {
        let expr = parse(&tokenize(source).unwrap()).unwrap();
        Evaluator::new().evaluate(&expr, env)
    }

    fn eval(source: &str) -> EvalResult<Value> {
        eval_with(source, &Environment::new())
    }

    #[test]
    fn grouping_overrides_precedence() {
        assert_eq!(eval("(2 + 3) * 4"), Ok(Value::Number(20.0)));
        assert_eq!(eval("2 + 3 * 4"), Ok(Value::Number(14.0)));
        assert_eq!(eval("[2 + 3] * {4 - 1}"), Ok(Value::Number(15.0)));
    }

    #[test]
    fn exponent_groups_from_the_right() {
        assert_eq!(eval("2 ** 3 ** 2"), Ok(Value::Number(512.0)));
        assert_eq!(eval("(2 ** 3) ** 2"), Ok(Value::Number(64.0)));
        assert_eq!(eval("2 ^ -1"), Ok(Value::Number(0.5)));
    }

    #[test]
    fn undefined_variable_names_the_variable() {
        assert_eq!(eval("x + 1"),
                   Err(RuntimeError::UndefinedVariable { name:     "x".to_string(),
                                                         position: 0, }));
    }

    #[test]
    fn variables_come_from_the_environment() {
        let env: Environment = [("width", 3.0), ("height", 4.0)].into_iter().collect();
        assert_eq!(eval_with("hypot(width, height)", &env), Ok(Value::Number(5.0)));
    }

    #[test]
    fn assignment_yields_value_without_binding() {
        let env = Environment::new();
        assert_eq!(eval_with("y = 6 * 7", &env), Ok(Value::Number(42.0)));
        assert!(env.is_empty());
    }

    #[test]
    fn same_tree_evaluates_identically_twice() {
        let expr = parse(&tokenize("sin(a) * 3 - a // 2").unwrap()).unwrap();
        let env: Environment = [("a", 7.25)].into_iter().collect();
        let evaluator = Evaluator::new();
        assert_eq!(evaluator.evaluate(&expr, &env), evaluator.evaluate(&expr, &env));
    }

    #[test]
    fn unknown_function_is_reported() {
        assert_eq!(eval("frobnicate(1)"),
                   Err(RuntimeError::UnknownFunction { name:     "frobnicate".to_string(),
                                                       position: 0, }));
    }

    #[test]
    fn arguments_are_evaluated_before_the_call() {
        assert_eq!(eval("nope(missing)"),
                   Err(RuntimeError::UndefinedVariable { name:     "missing".to_string(),
                                                         position: 5, }));
    }

    #[test]
    fn huge_literal_overflows() {
        let literal = "9".repeat(400);
        assert_eq!(eval(&literal), Err(RuntimeError::Overflow { position: 0 }));
    }

    #[test]
    fn custom_function_table() {
        fn double(args: &[Value], position: usize) -> EvalResult<Value> {
            Ok(Value::Number(args[0].as_number(position)? * 2.0))
        }

        let table = FunctionTable::empty().with("double",
                                                crate::interpreter::evaluator::function::core::Arity::Exact(1),
                                                double);
        let evaluator = Evaluator::with_functions(table);
        let expr = parse(&tokenize("double(21)").unwrap()).unwrap();
        assert_eq!(evaluator.evaluate(&expr, &Environment::new()), Ok(Value::Number(42.0)));

        let expr = parse(&tokenize("sqrt(4)").unwrap()).unwrap();
        assert!(matches!(evaluator.evaluate(&expr, &Environment::new()),
                         Err(RuntimeError::UnknownFunction { .. })));
    }
}
