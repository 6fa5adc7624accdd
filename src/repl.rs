use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::{interpreter::scope::Scope, run};

/// The prompt written before each line is read.
pub const PROMPT: &str = ">> ";

/// Runs the read-eval-print loop until `input` is exhausted.
///
/// Every line is a complete program evaluated in `scope`, so definitions
/// carry over from one line to the next. A returned value is written to
/// `output`; errors go to `errors` and do not end the loop.
///
/// # Errors
/// Fails only when reading from `input` or writing to either sink fails.
///
/// # Example
/// ```
/// use sprout::{interpreter::scope::Scope, repl};
///
/// let input = "let x = 4;\nreturn x * 2;\nreturn y;\n";
/// let mut output = Vec::new();
/// let mut errors = Vec::new();
///
/// repl::start(input.as_bytes(), &mut output, &mut errors, &Scope::with_builtins()).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), ">> >> 8\n>> >> ");
/// assert_eq!(String::from_utf8(errors).unwrap(), "Undefined identifier 'y'.\n");
/// ```
pub fn start<R, W, E>(mut input: R,
                      mut output: W,
                      mut errors: E,
                      scope: &Scope<'_>)
                      -> io::Result<()>
    where R: BufRead,
          W: Write,
          E: Write
{
    let mut line = String::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("end of input, leaving repl");
            return Ok(());
        }

        match run(&line, scope) {
            Ok(Some(value)) => writeln!(output, "{value}")?,
            Ok(None) => {},
            Err(e) => writeln!(errors, "{e}")?,
        }
    }
}
