//! Line and file reading helpers.

use std::io::BufRead;

/// Reads one line, distinguishing EOF (`Ok(None)`) from read errors.
/// The line is trimmed.
///
/// ```rust
/// # use nike_cli::io_utils::read_input_line;
/// let mut input = std::io::Cursor::new("dice 5\n");
/// assert_eq!(read_input_line(&mut input).unwrap(), Some("dice 5".to_string()));
/// assert_eq!(read_input_line(&mut input).unwrap(), None);
/// ```
pub fn read_input_line(stdin: &mut dyn BufRead) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    match stdin.read_line(&mut line)? {
        0 => Ok(None),
        _ => Ok(Some(line.trim().to_string())),
    }
}

/// Reads a text file, stripping a leading UTF-8 BOM.
pub fn read_text(path: &std::path::Path) -> std::io::Result<String> {
    let mut content = std::fs::read_to_string(path)?;
    strip_utf8_bom(&mut content);
    Ok(content)
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
