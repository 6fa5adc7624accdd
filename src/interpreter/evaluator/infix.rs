/// Dispatch from an infix operator to its evaluator.
pub mod core;

/// Addition, concatenation, subtraction, multiplication and division.
pub mod arithmetic;

/// Relational comparisons and equality.
pub mod comparison;

/// `||` and `&&`.
pub mod logic;
