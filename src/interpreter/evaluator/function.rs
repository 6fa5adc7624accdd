/// Host function support.
///
/// Defines `BuiltinFunction`, the handle through which native Rust code is
/// exposed to scripts under a fixed name and arity.
pub mod builtin;
/// The `print` function implementation.
///
/// Writes a value to standard output.
pub mod print;

/// Function call evaluation and builtin registration.
pub mod core;
