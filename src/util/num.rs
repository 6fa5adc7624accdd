use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Parses the raw lexeme of a number literal.
///
/// Lexemes are digits with at most one decimal point. A trailing point is
/// accepted (`"1."` is `1.0`).
///
/// ## Errors
/// Returns a type mismatch if the text is not a decimal literal. The lexer
/// never produces such lexemes, but hand-built syntax trees can.
///
/// ## Example
/// ```
/// use sprout::util::num::parse_number_lexeme;
///
/// assert_eq!(parse_number_lexeme("3.25").unwrap(), 3.25);
/// assert_eq!(parse_number_lexeme("7.").unwrap(), 7.0);
/// assert!(parse_number_lexeme("abc").is_err());
/// ```
pub fn parse_number_lexeme(lexeme: &str) -> EvalResult<f64> {
    let digits = lexeme.strip_suffix('.').unwrap_or(lexeme);

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(RuntimeError::type_mismatch(format!("'{lexeme}' is not a number literal")));
    }

    digits.parse()
          .map_err(|_| RuntimeError::type_mismatch(format!("'{lexeme}' is not a number literal")))
}

/// Converts a string to a number for loose comparisons.
///
/// Surrounding whitespace is ignored and the empty string is `0`. Text that
/// is not a decimal number (optionally signed, with an exponent) or a signed
/// `Infinity` yields `NaN`.
///
/// ## Example
/// ```
/// use sprout::util::num::string_to_number;
///
/// assert_eq!(string_to_number(" 42 "), 42.0);
/// assert_eq!(string_to_number(""), 0.0);
/// assert!(string_to_number("inf").is_nan());
/// ```
#[must_use]
pub fn string_to_number(text: &str) -> f64 {
    let trimmed = text.trim();

    match trimmed {
        "" => 0.0,
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ if trimmed.chars()
                    .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-')) =>
        {
            trimmed.parse().unwrap_or(f64::NAN)
        },
        _ => f64::NAN,
    }
}

/// Formats a number for display and string concatenation.
///
/// Magnitudes below `1e-6` or from `1e21` upwards use exponent notation
/// with an explicit sign on positive exponents (`1e-7`, `1.5e+21`); all
/// other values are written out in full.
///
/// ## Example
/// ```
/// use sprout::util::num::format_number;
///
/// assert_eq!(format_number(3.0), "3");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(-1.0 / 0.0), "-Infinity");
/// assert_eq!(format_number(0.000_000_1), "1e-7");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(1e20), "100000000000000000000");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else if value.abs() < 1e-6 || value.abs() >= 1e21 {
        let formatted = format!("{value:e}");
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            },
            _ => formatted,
        }
    } else {
        value.to_string()
    }
}
