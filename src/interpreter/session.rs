use log::trace;

use crate::{
    ast::Expr,
    error::Error,
    interpreter::{
        environment::Environment, evaluator::Evaluator, lexer::tokenize, parser::parse,
        value::Value,
    },
};

/// Name the result of every successful line is stored under.
pub const ANSWER: &str = "ans";

/// Evaluates lines one after another against a shared environment.
///
/// Unlike [`crate::calculate`], a session remembers state between calls:
/// - `name = expr` at the top level binds `name` (and `a = b = expr` binds
///   both),
/// - every successful result is stored as `ans`.
///
/// A failed line leaves the environment untouched.
///
/// # Example
/// ```
/// use exprkit::interpreter::{session::Session, value::Value};
///
/// let mut session = Session::new();
/// session.run("r = 2").unwrap();
/// assert_eq!(session.run("r * 3").unwrap(), Value::Number(6.0));
/// assert_eq!(session.run("ans + 1").unwrap(), Value::Number(7.0));
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    evaluator:   Evaluator,
    environment: Environment,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session with the built-in functions and the constants `pi`,
    /// `e` and `tau`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_environment(Evaluator::new(), Environment::with_constants())
    }

    /// Creates a session from explicit parts.
    #[must_use]
    pub const fn with_environment(evaluator: Evaluator, environment: Environment) -> Self {
        Self { evaluator,
               environment }
    }

    /// The variables visible to the next line.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Mutable access to the variables, e.g. to predefine some.
    pub const fn environment_mut(&mut self) -> &mut Environment {
        &mut self.environment
    }

    /// The evaluator lines are run with.
    #[must_use]
    pub const fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Tokenizes, parses and evaluates one line, then records its bindings.
    ///
    /// # Errors
    /// Any [`crate::error::ParseError`] or [`crate::error::RuntimeError`] from
    /// the pipeline, wrapped in [`Error`].
    pub fn run(&mut self, source: &str) -> Result<Value, Error> {
        let tokens = tokenize(source)?;
        let expr = parse(&tokens)?;
        let value = self.evaluator.evaluate(&expr, &self.environment)?;

        let mut target = &expr;
        while let Expr::Assign { name, value: rhs, .. } = target {
            trace!("binding {name} = {value}");
            self.environment.set(name.as_str(), value);
            target = rhs;
        }
        self.environment.set(ANSWER, value);

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuntimeError;

    #[test]
    fn chained_assignment_binds_every_name() {
        let mut session = Session::new();
        assert_eq!(session.run("a = b = 4"), Ok(Value::Number(4.0)));
        assert_eq!(session.environment().get("a"), Some(Value::Number(4.0)));
        assert_eq!(session.environment().get("b"), Some(Value::Number(4.0)));
    }

    #[test]
    fn failed_line_changes_nothing() {
        let mut session = Session::new();
        session.run("x = 1").unwrap();
        let before = session.environment().len();
        assert_eq!(session.run("x = y"),
                   Err(Error::Runtime(RuntimeError::UndefinedVariable { name:     "y".to_string(),
                                                                        position: 4, })));
        assert_eq!(session.environment().len(), before);
        assert_eq!(session.environment().get("x"), Some(Value::Number(1.0)));
    }

    #[test]
    fn grouped_assignment_is_not_a_binding() {
        let mut session = Session::new();
        assert_eq!(session.run("2 * (z = 3)"), Ok(Value::Number(6.0)));
        assert!(!session.environment().contains("z"));
    }

    #[test]
    fn predefined_variables_are_visible() {
        let mut session = Session::new();
        session.environment_mut().set("rate", 0.25);
        assert_eq!(session.run("rate * 8"), Ok(Value::Number(2.0)));
        assert!(session.evaluator().functions().contains("max"));
    }

    #[test]
    fn constants_can_be_shadowed() {
        let mut session = Session::new();
        session.run("pi = 3").unwrap();
        assert_eq!(session.run("pi"), Ok(Value::Number(3.0)));
    }
}
