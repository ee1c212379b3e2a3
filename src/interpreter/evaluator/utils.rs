use crate::{
    error::{EvalResult, RuntimeError},
    interpreter::value::Value,
};

/// Checks that a function received exactly `expected` arguments.
///
/// ## Example
/// ```
/// use exprkit::interpreter::evaluator::utils::check_arity;
///
/// assert!(check_arity("sin", &[1, 2], 2, 0).is_ok());
/// assert!(check_arity("sin", &[1], 2, 0).is_err());
/// ```
pub fn check_arity<T>(name: &str, args: &[T], expected: usize, position: usize) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                  found: args.len(),
                                                  position })
    }
}

/// Wraps a computed number in a [`Value`], rejecting non-finite results.
///
/// Infinities become [`RuntimeError::Overflow`]; NaN means the operation was
/// undefined for its inputs and becomes [`RuntimeError::DomainError`].
///
/// ## Example
/// ```
/// use exprkit::{error::RuntimeError, interpreter::evaluator::utils::checked_number};
///
/// assert!(checked_number(1.5, 0).is_ok());
/// assert_eq!(checked_number(f64::INFINITY, 7), Err(RuntimeError::Overflow { position: 7 }));
/// ```
pub fn checked_number(value: f64, position: usize) -> EvalResult<Value> {
    if value.is_nan() {
        return Err(RuntimeError::DomainError { details: "Result is undefined".to_string(),
                                               position });
    }
    if value.is_infinite() {
        return Err(RuntimeError::Overflow { position });
    }
    Ok(Value::Number(value))
}
