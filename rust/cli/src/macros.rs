//! Small macros shared by the command handlers.

/// Write a line and return [`crate::exit_code::ERROR`] from the enclosing
/// function if the stream is gone.
#[macro_export]
macro_rules! write_or_exit {
    ($dest:expr, $($arg:tt)*) => {
        if writeln!($dest, $($arg)*).is_err() {
            return $crate::exit_code::ERROR;
        }
    };
}

/// Parse a JSON line or report it and `continue` the enclosing loop.
///
/// ```ignore
/// let record: RoundRecord = parse_json_or_continue!(line, err, format!("line {}", n));
/// ```
#[macro_export]
macro_rules! parse_json_or_continue {
    ($line:expr, $err:expr, $context:expr) => {
        match serde_json::from_str($line) {
            Ok(r) => r,
            Err(e) => {
                let _ = $crate::ui::display_warning(
                    $err,
                    &format!("Failed to parse {}: {}", $context, e),
                );
                continue;
            }
        }
    };
}
