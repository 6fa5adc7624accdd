/// Runtime values and their comparison rules.
///
/// Defines the `Value` enum, its display form, truthiness, and the loose and
/// strict equality relations used by `==` and `!=`.
pub mod core;
