/// Arithmetic operators on numbers.
pub mod arithmetic;
/// Equality and ordering comparisons.
pub mod comparison;
/// Dispatch from a binary operator to its implementation.
pub mod core;
/// Logical operators, eager and short-circuiting.
pub mod logic;
