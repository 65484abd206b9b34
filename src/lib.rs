#![allow(clippy::module_inception)]

use std::{fmt::Display, path::Path, rc::Rc};

use tracing::{subscriber::SetGlobalDefaultError, Level};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod compiler;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A location in a source file. Lines and columns start at 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(line: u32, column: u32, file: Rc<String>) -> Self {
        Position { line, column, file }
    }

    pub fn null() -> Self {
        Position::new(0, 0, Rc::new(String::from("<null>")))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Installs a stderr logger for the [tracing] macros used across the crate.
pub fn init_subscriber(level: Level) -> Result<(), SetGlobalDefaultError> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
}

/// Returns the text of a 1-based line, or `None` when the line does not exist.
pub fn get_line_at_position(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }
    source.lines().nth((line - 1) as usize)
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\n\n  second\nTesting { }\n";

        assert_eq!(super::get_line_at_position(source, 1), Some("Hello, world!"));
        assert_eq!(super::get_line_at_position(source, 4), Some("Testing { }"));
        assert_eq!(super::get_line_at_position(source, 5), None);
        assert_eq!(super::get_line_at_position(source, 0), None);
    }

    #[test]
    fn test_render_error_points_at_column() {
        use crate::errors::errors::{Error, ErrorImpl};
        use std::rc::Rc;

        let source = "int x = 1;\n    int y = #;\n";
        let error = Error::new(
            ErrorImpl::UnexpectedCharacter { character: '#' },
            super::Position::new(2, 13, Rc::new("test.qur".to_string())),
        );

        let rendered = super::render_error(&error, source, std::path::Path::new("test.qur"));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Error: UnexpectedCharacter (Unexpected character `#`, it is not part of the language)");
        assert_eq!(lines[1], "-> test.qur:2:13");
        assert_eq!(lines[3], "2 | int y = #;");
        assert_eq!(lines[4], "  | --------^");
    }
}

/// Renders an error against the source it came from.
///
/// ```text
/// Error: UnexpectedCharacter (Unexpected character `#`, ...)
/// -> final.qur:20:9
///    |
/// 20 | int a = #;
///    | --------^
/// ```
///
/// Errors without a usable line (aggregate failures, end of input) render the
/// header only.
pub fn render_error(error: &Error, source: &str, file: &Path) -> String {
    let mut out = String::new();
    let position = error.get_position();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }

    let Some(line_text) = get_line_at_position(source, position.line) else {
        out.push_str(&format!("-> {}: {}\n", file.to_string_lossy(), error));
        return out;
    };

    out.push_str(&format!(
        "-> {}:{}:{}\n",
        file.to_string_lossy(),
        position.line,
        position.column
    ));

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize).saturating_sub(removed_whitespace).max(1);
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

/// Writes [render_error] output to stderr.
pub fn display_error(error: &Error, source: &str, file: &Path) {
    eprint!("{}", render_error(error, source, file));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
