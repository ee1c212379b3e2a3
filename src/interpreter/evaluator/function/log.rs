use crate::{
    error::{EvalResult, RuntimeError},
    interpreter::{
        evaluator::utils::{check_arity, checked_number},
        value::Value,
    },
};

/// Reads a strictly positive logarithm argument.
fn positive(value: &Value, what: &str, position: usize) -> EvalResult<f64> {
    let x = value.as_number(position)?;
    if x <= 0.0 {
        return Err(RuntimeError::DomainError { details: format!("{what} must be positive"),
                                               position });
    }
    Ok(x)
}

/// Natural logarithm, `ln(x)`.
pub fn ln(args: &[Value], position: usize) -> EvalResult<Value> {
    check_arity("ln", args, 1, position)?;
    checked_number(positive(&args[0], "Logarithm argument", position)?.ln(), position)
}

/// Base-2 logarithm, `log2(x)`.
pub fn log2(args: &[Value], position: usize) -> EvalResult<Value> {
    check_arity("log2", args, 1, position)?;
    checked_number(positive(&args[0], "Logarithm argument", position)?.log2(), position)
}

/// Base-10 logarithm, `log10(x)`.
pub fn log10(args: &[Value], position: usize) -> EvalResult<Value> {
    check_arity("log10", args, 1, position)?;
    checked_number(positive(&args[0], "Logarithm argument", position)?.log10(), position)
}

/// Computes a logarithm.
///
/// - `log(x)` is the natural logarithm.
/// - `log(x, base)` uses the given base.
///
/// # Errors
/// [`RuntimeError::DomainError`] for a non-positive argument, a non-positive
/// base, or base `1`.
///
/// # Example
/// ```
/// use exprkit::interpreter::{evaluator::function::log::log, value::Value};
///
/// assert_eq!(log(&[Value::Number(1.0)], 0).unwrap(), Value::Number(0.0));
/// assert_eq!(log(&[Value::Number(8.0), Value::Number(2.0)], 0).unwrap(),
///            Value::Number(3.0));
/// ```
pub fn log(args: &[Value], position: usize) -> EvalResult<Value> {
    match args {
        [x] => checked_number(positive(x, "Logarithm argument", position)?.ln(), position),
        [x, base] => {
            let x = positive(x, "Logarithm argument", position)?;
            let base = positive(base, "Logarithm base", position)?;
            if base == 1.0 {
                return Err(RuntimeError::DomainError { details: "Logarithm base cannot be 1".to_string(),
                                                       position });
            }
            checked_number(x.log(base), position)
        },
        _ => Err(RuntimeError::ArgumentCountMismatch { name: "log".to_string(),
                                                       found: args.len(),
                                                       position }),
    }
}
