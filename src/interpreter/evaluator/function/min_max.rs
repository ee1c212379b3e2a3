use ordered_float::OrderedFloat;

use crate::{
    error::{EvalResult, RuntimeError},
    interpreter::value::Value,
};

/// Computes the minimum or maximum of one or more numeric values.
///
/// The operation is selected by the `name` parameter, which must be `"min"` or
/// `"max"`. Any non-numeric argument produces an `ExpectedNumber` error.
///
/// # Parameters
/// - `name`: Either `"min"` or `"max"`.
/// - `args`: At least one argument.
/// - `position`: Byte offset of the call for error reporting.
///
/// # Example
/// ```
/// use exprkit::interpreter::{evaluator::function::min_max::min_max, value::Value};
///
/// let args = [Value::Number(3.0), Value::Number(7.0), Value::Number(-1.0)];
/// assert_eq!(min_max("min", &args, 0).unwrap(), Value::Number(-1.0));
/// assert_eq!(min_max("max", &args, 0).unwrap(), Value::Number(7.0));
/// ```
pub fn min_max(name: &str, args: &[Value], position: usize) -> EvalResult<Value> {
    let numbers = args.iter()
                      .map(|arg| arg.as_number(position).map(OrderedFloat))
                      .collect::<EvalResult<Vec<_>>>()?;

    let result = if name == "min" {
        numbers.into_iter().min()
    } else {
        numbers.into_iter().max()
    };

    result.map(|n| Value::Number(n.into_inner()))
          .ok_or_else(|| RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                               found: 0,
                                                               position })
}
