/// Numeric conversion helpers.
///
/// This module converts number lexemes and strings to `f64` and renders
/// `f64` values the way scripts expect to see them: integral values without
/// a fractional part, infinities spelled out.
pub mod num;
