/// Built-in function implementations.
///
/// Contains the single-argument math functions, rounding, two-argument
/// helpers like `pow`, and `assert`.
pub mod builtin;
/// The function table.
///
/// Defines `FunctionTable`, arity checking and the list of built-ins.
pub mod core;
/// Logarithm function implementations.
///
/// Supports natural, base-2, base-10 and arbitrary-base logarithms.
pub mod log;
/// `min` and `max` function implementations.
///
/// Returns the minimum or maximum value from a list of arguments.
pub mod min_max;
/// The `sqrt` (square root) function implementation.
pub mod sqrt;
