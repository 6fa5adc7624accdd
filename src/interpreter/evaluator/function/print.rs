use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Prints a value to standard output.
///
/// Accepts exactly one argument. Build longer messages with `+`, which
/// concatenates strings.
///
/// # Returns
/// `Value::Undefined`.
///
/// # Example
/// ```
/// use sprout::interpreter::{evaluator::function::print::print, value::core::Value};
///
/// let result = print(&[Value::from("hello")]).unwrap();
/// assert_eq!(result, Value::Undefined);
/// assert!(print(&[Value::from("a"), Value::from("b")]).is_err());
/// ```
pub fn print(args: &[Value]) -> EvalResult<Value> {
    let [value] = args else {
        return Err(RuntimeError::ArityMismatch { name:     "print".to_string(),
                                                 expected: 1,
                                                 found:    args.len(), });
    };

    println!("{value}");
    Ok(Value::Undefined)
}
