//! Miscellaneous utility functions for displaying parsed values.

use anyhow::Context as _;
use colored::Colorize;
use std::fmt::Write as _;
use std::io::Write;
use std::io::{self, ErrorKind};

use crate::tokenizer::Number;
use crate::value::Value;

// ==============================================================================
// Colorized Value Output
// ==============================================================================

/// Write a parsed value with syntax highlighting to `writer`, followed by a
/// newline. Silently returns `Ok(())` on broken pipe so that piping to tools
/// like `less` or `head` exits cleanly.
///
/// Strings keep the escape sequences they had in the input. Raw control
/// characters and backslashes that do not start a JSON escape are escaped on
/// the way out, and non-finite floats print as `null`, so the output is
/// always valid JSON text.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_colored_value<W: Write>(
    writer: &mut W,
    value: &Value,
    pretty: bool,
) -> anyhow::Result<()> {
    let result = (|| -> io::Result<()> {
        write_colored(writer, value, 0, pretty)?;
        writeln!(writer)?;
        Ok(())
    })();

    match result {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::BrokenPipe => Ok(()),
        Err(err) => Err(err).context("write colorized value to stdout"),
    }
}

/// Recursively write a value with syntax highlighting.
fn write_colored<W: Write>(
    writer: &mut W,
    value: &Value,
    indent: usize,
    pretty: bool,
) -> io::Result<()> {
    let next_indent = indent + 2;

    match value {
        Value::Null => write!(writer, "{}", "null".red().dimmed()),
        Value::Boolean(b) => {
            write!(writer, "{}", b.to_string().yellow().bold())
        }
        Value::Integer(n) => {
            write!(writer, "{}", Number::Integer(*n).to_string().yellow())
        }
        Value::Float(n) if !n.is_finite() => write!(writer, "{}", "null".red().dimmed()),
        Value::Float(n) => {
            write!(writer, "{}", Number::Float(*n).to_string().yellow())
        }
        Value::String(s) => write!(writer, "{}", quote(s).green()),
        Value::Array(arr) => {
            write!(writer, "[")?;
            for (i, item) in arr.iter().enumerate() {
                if pretty {
                    writeln!(writer)?;
                    write!(writer, "{:width$}", "", width = next_indent)?;
                }
                write_colored(writer, item, next_indent, pretty)?;
                if i < arr.len() - 1 {
                    write!(writer, ",")?;
                }
            }
            if pretty && !arr.is_empty() {
                writeln!(writer)?;
                write!(writer, "{:width$}", "", width = indent)?;
            }
            write!(writer, "]")
        }
        Value::Object(obj) => {
            write!(writer, "{{")?;
            for (i, (key, val)) in obj.iter().enumerate() {
                if pretty {
                    writeln!(writer)?;
                    write!(writer, "{:width$}", "", width = next_indent)?;
                }
                write!(writer, "{}", quote(key).cyan())?;
                if pretty {
                    write!(writer, ": ")?;
                } else {
                    write!(writer, ":")?;
                }
                write_colored(writer, val, next_indent, pretty)?;
                if i < obj.len() - 1 {
                    write!(writer, ",")?;
                }
            }
            if pretty && !obj.is_empty() {
                writeln!(writer)?;
                write!(writer, "{:width$}", "", width = indent)?;
            }
            write!(writer, "}}")
        }
    }
}

/// Wrap stored string content in quotes for display.
///
/// Escape pairs from the input pass through unchanged. A backslash that does
/// not start a valid JSON escape is doubled, and raw control characters are
/// written as escapes.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');

    let mut chars = s.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                let rest = &s[i + 1..];
                match rest.chars().next() {
                    Some('"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't') => {
                        out.push('\\');
                        if let Some((_, escaped)) = chars.next() {
                            out.push(escaped);
                        }
                    }
                    Some('u')
                        if rest.len() >= 5
                            && rest.as_bytes()[1..5].iter().all(u8::is_ascii_hexdigit) =>
                    {
                        out.push('\\');
                    }
                    _ => out.push_str("\\\\"),
                }
            }
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if c < ' ' => {
                let _ = write!(out, "\\u{:04x}", u32::from(c));
            }
            c => out.push(c),
        }
    }

    out.push('"');
    out
}
