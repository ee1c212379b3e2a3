use crate::{
    error::{EvalResult, RuntimeError},
    interpreter::{evaluator::utils::checked_number, value::Value},
};

/// Computes a square root, or an `n`-th root when a second argument is given.
///
/// - `sqrt(x)` requires `x >= 0`.
/// - `sqrt(x, n)` takes the `n`-th root. A negative `x` is accepted only for
///   odd integer `n`, where the root is real.
///
/// # Errors
/// - [`RuntimeError::DomainError`] for roots that have no real value.
/// - [`RuntimeError::DivisionByZero`] for `n == 0`.
///
/// # Example
/// ```
/// use exprkit::interpreter::{evaluator::function::sqrt::sqrt, value::Value};
///
/// assert_eq!(sqrt(&[Value::Number(16.0)], 0).unwrap(), Value::Number(4.0));
/// assert_eq!(sqrt(&[Value::Number(-32.0), Value::Number(5.0)], 0).unwrap(),
///            Value::Number(-2.0));
/// assert!(sqrt(&[Value::Number(-1.0)], 0).is_err());
/// ```
pub fn sqrt(args: &[Value], position: usize) -> EvalResult<Value> {
    let x = args.first()
                .ok_or_else(|| RuntimeError::ArgumentCountMismatch { name: "sqrt".to_string(),
                                                                     found: 0,
                                                                     position })?
                .as_number(position)?;

    let Some(n) = args.get(1) else {
        if x < 0.0 {
            return Err(RuntimeError::DomainError { details: "sqrt is not defined for negative numbers".to_string(),
                                                   position });
        }
        return checked_number(x.sqrt(), position);
    };

    let n = n.as_number(position)?;
    if n == 0.0 {
        return Err(RuntimeError::DivisionByZero { position });
    }
    if x < 0.0 {
        let odd_integer = n.fract() == 0.0 && n.rem_euclid(2.0) == 1.0;
        if !odd_integer {
            return Err(RuntimeError::DomainError { details: "Even root of a negative number".to_string(),
                                                   position });
        }
        return checked_number(-(-x).powf(n.recip()), position);
    }
    checked_number(x.powf(n.recip()), position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nth_roots() {
        let r = sqrt(&[Value::Number(32.0), Value::Number(5.0)], 0).unwrap();
        let Value::Number(r) = r else { panic!("expected number") };
        assert!((r - 2.0).abs() < 1e-12);
        assert!(matches!(sqrt(&[Value::Number(-16.0), Value::Number(4.0)], 0),
                         Err(RuntimeError::DomainError { .. })));
        assert_eq!(sqrt(&[Value::Number(8.0), Value::Number(0.0)], 3),
                   Err(RuntimeError::DivisionByZero { position: 3 }));
    }

    #[test]
    fn negative_square_root_is_a_domain_error() {
        assert!(matches!(sqrt(&[Value::Number(-4.0)], 6),
                         Err(RuntimeError::DomainError { position: 6, .. })));
    }
}
