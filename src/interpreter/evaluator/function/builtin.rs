use crate::{
    error::{EvalResult, RuntimeError},
    interpreter::{
        evaluator::utils::{check_arity, checked_number},
        value::Value,
    },
};

/// Applies a one-argument real function to a numeric value.
///
/// The generated functions accept exactly one argument, which must be a
/// number. A non-finite result is rejected by [`checked_number`], so `asin(2)`
/// fails with a domain error instead of producing NaN.
///
/// # Parameters
/// - `args`: Slice containing one argument.
/// - `position`: Byte offset of the call for error reporting.
///
/// # Example
/// ```
/// use exprkit::interpreter::{evaluator::function::builtin::sin, value::Value};
///
/// let x = Value::Number(std::f64::consts::PI / 2.0);
/// assert_eq!(sin(&[x], 0).unwrap(), Value::Number(1.0));
/// ```
macro_rules! real_builtin {
    ($fname:ident, $real_fn:ident) => {
        #[doc = concat!("`", stringify!($fname), "(x)`")]
        pub fn $fname(args: &[Value], position: usize) -> EvalResult<Value> {
            check_arity(stringify!($fname), args, 1, position)?;
            checked_number(args[0].as_number(position)?.$real_fn(), position)
        }
    };
}

real_builtin!(sin, sin);
real_builtin!(cos, cos);
real_builtin!(tan, tan);
real_builtin!(asin, asin);
real_builtin!(acos, acos);
real_builtin!(atan, atan);
real_builtin!(sinh, sinh);
real_builtin!(cosh, cosh);
real_builtin!(tanh, tanh);
real_builtin!(exp, exp);
real_builtin!(cbrt, cbrt);
real_builtin!(abs, abs);
real_builtin!(floor, floor);
real_builtin!(ceil, ceil);
real_builtin!(round, round);
real_builtin!(trunc, trunc);

/// Applies a two-argument real function, `first.$real_fn(second)`.
macro_rules! binary_real_builtin {
    ($fname:ident, $real_fn:ident) => {
        #[doc = concat!("`", stringify!($fname), "(a, b)`")]
        pub fn $fname(args: &[Value], position: usize) -> EvalResult<Value> {
            check_arity(stringify!($fname), args, 2, position)?;
            let a = args[0].as_number(position)?;
            let b = args[1].as_number(position)?;
            checked_number(a.$real_fn(b), position)
        }
    };
}

binary_real_builtin!(pow, powf);
binary_real_builtin!(atan2, atan2);
binary_real_builtin!(hypot, hypot);

/// Returns the sign of a number: `-1`, `0` or `1`.
///
/// Unlike [`f64::signum`], zero maps to zero.
///
/// # Example
/// ```
/// use exprkit::interpreter::{evaluator::function::builtin::sign, value::Value};
///
/// assert_eq!(sign(&[Value::Number(-3.5)], 0).unwrap(), Value::Number(-1.0));
/// assert_eq!(sign(&[Value::Number(0.0)], 0).unwrap(), Value::Number(0.0));
/// ```
pub fn sign(args: &[Value], position: usize) -> EvalResult<Value> {
    check_arity("sign", args, 1, position)?;
    let x = args[0].as_number(position)?;
    let s = if x == 0.0 { 0.0 } else { x.signum() };
    Ok(Value::Number(s))
}

/// Asserts that a boolean argument is true.
///
/// Evaluates to `true` when the assertion holds.
///
/// # Errors
/// - [`RuntimeError::AssertionFailed`] if the argument is `false`.
/// - [`RuntimeError::ExpectedBoolean`] if the argument is a number.
pub fn assert_fn(args: &[Value], position: usize) -> EvalResult<Value> {
    check_arity("assert", args, 1, position)?;

    if args[0].as_bool(position)? {
        Ok(Value::Bool(true))
    } else {
        Err(RuntimeError::AssertionFailed { position })
    }
}
