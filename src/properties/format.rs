//! Line-oriented `key=value` text format
//!
//! Reading is best-effort: comments and blank lines are ignored, malformed
//! lines are skipped, and content that is not UTF-8 yields an empty snapshot.
//! Only I/O failures of the underlying reader are reported.

use std::io::{Read, Write};

use tracing::{debug, warn};

use crate::properties::error::PropertiesError;
use crate::properties::types::Properties;

/// Read a properties snapshot from a byte stream
pub fn read<R: Read>(mut reader: R) -> Result<Properties, PropertiesError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(parse(&text)),
        Err(e) => {
            warn!("Ignoring properties content that is not valid UTF-8: {}", e);
            Ok(Properties::default())
        }
    }
}

/// Whitespace recognised by the format; other Unicode spaces are content
const WHITESPACE: [char; 3] = [' ', '\t', '\u{c}'];

/// Parse properties text, skipping anything that is not a valid entry.
///
/// Lines end at `\r\n`, `\n` or a lone `\r`. A line ending in an odd number
/// of backslashes continues on the next line, whose leading whitespace is
/// dropped.
pub fn parse(text: &str) -> Properties {
    let mut entries = Vec::new();
    let mut lines = physical_lines(text).into_iter().enumerate();

    while let Some((index, line)) = lines.next() {
        let line = line.trim_start_matches(WHITESPACE);
        if line.is_empty() || line.starts_with(['#', '!']) {
            continue;
        }

        let mut logical = line.to_string();
        while is_continued(&logical) {
            logical.pop();
            match lines.next() {
                Some((_, next)) => logical.push_str(next.trim_start_matches(WHITESPACE)),
                None => break,
            }
        }

        match parse_entry(&logical) {
            Some(entry) => entries.push(entry),
            None => debug!("Skipping malformed properties line {}: {:?}", index + 1, logical),
        }
    }

    entries.into_iter().collect()
}

/// Write a snapshot as one `key=value` line per entry, in insertion order
pub fn write<W: Write>(properties: &Properties, mut writer: W) -> Result<(), PropertiesError> {
    writer.write_all(to_string(properties).as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Render a snapshot in the text format
pub fn to_string(properties: &Properties) -> String {
    properties
        .iter()
        .map(|(key, value)| format!("{}={}\n", escape(key, true), escape(value, false)))
        .collect()
}

fn physical_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        match rest.find(['\r', '\n']) {
            Some(end) => {
                lines.push(&rest[..end]);
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }

    lines
}

fn is_continued(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Split a logical line into key and value.
///
/// The key ends at the first unescaped `=`, `:` or whitespace. Whitespace may
/// be followed by one `=` or `:`. A line holding only a key has an empty value.
fn parse_entry(line: &str) -> Option<(String, String)> {
    let mut escaped = false;
    let terminator = line.char_indices().find(|&(_, c)| {
        if escaped {
            escaped = false;
            false
        } else if c == '\\' {
            escaped = true;
            false
        } else {
            c == '=' || c == ':' || WHITESPACE.contains(&c)
        }
    });

    let (key, value) = match terminator {
        None => (line, ""),
        Some((end, c)) => {
            let mut value = line[end + c.len_utf8()..].trim_start_matches(WHITESPACE);
            if WHITESPACE.contains(&c) {
                if let Some(rest) = value.strip_prefix(['=', ':']) {
                    value = rest.trim_start_matches(WHITESPACE);
                }
            }
            (&line[..end], value)
        }
    };

    let key = unescape(key)?;
    let value = unescape(value)?;

    if key.is_empty() {
        return None;
    }

    Some((key, value))
}

fn unescape(raw: &str) -> Option<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        match chars.next()? {
            't' => out.push('\t'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            'f' => out.push('\u{c}'),
            'u' => {
                let hex: String = chars.by_ref().take(4).collect();
                if hex.chars().count() != 4 {
                    return None;
                }
                let code = u32::from_str_radix(&hex, 16).ok()?;
                out.push(char::from_u32(code)?);
            }
            other => out.push(other),
        }
    }

    Some(out)
}

/// Keys escape every space; values only a leading one, which the reader
/// would otherwise trim.
fn escape(raw: &str, is_key: bool) -> String {
    let mut out = String::with_capacity(raw.len());

    for (i, c) in raw.chars().enumerate() {
        match c {
            '\\' | '=' | ':' => {
                out.push('\\');
                out.push(c);
            }
            '#' | '!' if i == 0 => {
                out.push('\\');
                out.push(c);
            }
            ' ' if is_key || i == 0 => out.push_str("\\ "),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{c}' => out.push_str("\\f"),
            _ => out.push(c),
        }
    }

    out
}
