#![allow(clippy::module_inception)]

use std::{fmt, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A byte offset into a named source.
#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }

    pub fn is_null(&self) -> bool {
        self.1.as_str() == "<null>"
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line holding byte `position` of `content`.
///
/// Returns the 1-based line number, the line text and the offset of
/// `position` within that line. Offsets at or past the end of the content
/// (an EOF token) resolve to the last line.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    let mut start = 0;
    let mut line_number = 1;
    let mut last = None;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        last = Some((line_number, line.to_string(), line.trim_end_matches('\n').len()));
        start = end;
        line_number += 1;
    }

    last
}

/// A syntax error paired with the source it came from, displayed the way
/// the CLI prints it:
///
/// ```text
/// Error: UnexpectedToken (Unexpected token: `)`, did you miss a semicolon?)
/// -> main.src
///    |
/// 20 | a = );
///    | ----^
/// ```
pub struct ErrorReport<'a> {
    pub error: &'a Error,
    pub source: &'a str,
    pub file: &'a str,
}

impl fmt::Display for ErrorReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let error = self.error;

        if let ErrorTip::None = error.get_tip() {
            writeln!(f, "Error: {}", error.get_error_name())?;
        } else {
            writeln!(f, "Error: {} ({})", error.get_error_name(), error.get_tip())?;
        }
        writeln!(f, "-> {}", self.file)?;

        let position = error.get_position();
        let (line, line_text, line_pos) = match get_line_at_position(self.source, position.0) {
            Some(found) => found,
            None => return writeln!(f, "{}", error),
        };

        let line_string = line.to_string();
        let padding = line_string.len() + 2;

        writeln!(f, "{:>padding$}", "|")?;

        let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
        writeln!(f, "{} | {}", line_string, line_text_removed.trim_end())?;

        let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

        writeln!(f, "{:>padding$} {:->arrows$}", "|", "^")
    }
}

/// Renders an error with its source line and a caret under the offending token.
pub fn format_error(error: &Error, source: &str, file: &str) -> String {
    ErrorReport {
        error,
        source,
        file,
    }
    .to_string()
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    const SOURCE: &str = "Hello, world!\nfoo;\nbar\n  Testing { }\n";

    #[test]
    fn test_get_line_at_position() {
        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 34).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "  Testing { }\n");
        assert_eq!(line_pos, 11);
    }

    #[test]
    fn test_get_line_past_end() {
        let (line_number, _, line_pos) = super::get_line_at_position("a;\nb", 4).unwrap();
        assert_eq!(line_number, 2);
        assert_eq!(line_pos, 1);

        assert!(super::get_line_at_position("", 0).is_none());
    }

    #[test]
    fn test_format_error() {
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                token: String::from(")"),
            },
            Position(4, Rc::new(String::from("main.src"))),
        );

        let rendered = super::format_error(&error, "a = );", "main.src");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(
            lines[0],
            "Error: UnexpectedToken (Unexpected token: `)`, did you miss a semicolon?)"
        );
        assert_eq!(lines[1], "-> main.src");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "1 | a = );");
        assert_eq!(lines[4], "  | ----^");
    }

    #[test]
    fn test_error_report_without_source_line() {
        let error = Error::new(
            ErrorImpl::UnknownOperator {
                operator: String::from("=-"),
            },
            Position(0, Rc::new(String::from("main.src"))),
        );

        let report = super::ErrorReport {
            error: &error,
            source: "",
            file: "main.src",
        };
        let rendered = report.to_string();

        assert_eq!(rendered, super::format_error(&error, "", "main.src"));
        assert_eq!(
            rendered.lines().collect::<Vec<&str>>(),
            vec![
                "Error: UnknownOperator (Operator `=-` has no precedence, is it a typo?)",
                "-> main.src",
                "SyntaxError: unknown operator \"=-\"",
            ]
        );
    }
}
