use std::collections::{HashMap, hash_map};

use crate::interpreter::value::Value;

/// Maps variable names to values for the evaluator.
///
/// The evaluator only ever reads from an environment; bindings are added by
/// the caller (or by a [`crate::interpreter::session::Session`]).
///
/// # Example
/// ```
/// use exprkit::interpreter::{environment::Environment, value::Value};
///
/// let mut env = Environment::new();
/// env.set("x", 4.0);
///
/// assert_eq!(env.get("x"), Some(Value::Number(4.0)));
/// assert_eq!(env.get("y"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an environment holding the mathematical constants `pi`, `e`
    /// and `tau`.
    #[must_use]
    pub fn with_constants() -> Self {
        [("pi", std::f64::consts::PI),
         ("e", std::f64::consts::E),
         ("tau", std::f64::consts::TAU)].into_iter()
                                          .collect()
    }

    /// Looks up a variable.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.variables.get(name).copied()
    }

    /// Binds `name` to `value`, returning the previous binding if there was
    /// one.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.variables.insert(name.into(), value.into())
    }

    /// Removes a binding, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.variables.remove(name)
    }

    /// Whether `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether there are no bindings at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over all bindings in arbitrary order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, Value> {
        self.variables.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Environment {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self { variables: iter.into_iter()
                              .map(|(k, v)| (k.into(), v.into()))
                              .collect(), }
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Environment {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        self.variables
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_are_preloaded() {
        let env = Environment::with_constants();
        assert_eq!(env.len(), 3);
        assert_eq!(env.get("pi"), Some(Value::Number(std::f64::consts::PI)));
        assert!(Environment::new().is_empty());
    }

    #[test]
    fn iter_visits_every_binding() {
        let env: Environment = [("a", 1.0), ("b", 2.0)].into_iter().collect();
        let mut names: Vec<&str> = env.iter().map(|(name, _)| name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn set_returns_previous_binding() {
        let mut env = Environment::new();
        assert_eq!(env.set("flag", true), None);
        assert_eq!(env.set("flag", 1.0), Some(Value::Bool(true)));
        assert_eq!(env.remove("flag"), Some(Value::Number(1.0)));
        assert!(!env.contains("flag"));
    }
}
