//! Parser for the `.properties` text format.
//!
//! Supports `#`/`!` comments, `=`, `:` or whitespace separators, backslash
//! line continuations and the usual escapes (`\t`, `\n`, `\r`, `\f`, `\\`,
//! `\uXXXX`). The last occurrence of a key wins.

use std::sync::Arc;

use crate::{PropertiesError, ResolveResult};

/// One logical line with the physical line number where it starts.
struct LogicalLine {
    number: usize,
    text: String,
}

/// Returns `true` when `line` ends in an odd number of backslashes.
fn continues(line: &str) -> bool {
    !line
        .chars()
        .rev()
        .take_while(|c| *c == '\\')
        .count()
        .is_multiple_of(2)
}

fn logical_lines(input: &str) -> Vec<LogicalLine> {
    let mut lines = Vec::new();
    let mut pending: Option<LogicalLine> = None;
    for (idx, raw) in input.lines().enumerate() {
        let (text, number) = match pending.take() {
            Some(mut open) => {
                open.text.push_str(raw.trim_start());
                (open.text, open.number)
            }
            None => {
                let trimmed = raw.trim_start();
                if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                    continue;
                }
                (trimmed.to_owned(), idx + 1)
            }
        };
        if continues(&text) {
            let mut text = text;
            text.pop();
            pending = Some(LogicalLine { number, text });
        } else {
            lines.push(LogicalLine { number, text });
        }
    }
    if let Some(open) = pending {
        lines.push(open);
    }
    lines
}

/// Finds the byte offset of the first unescaped separator, if any.
fn split_point(text: &str) -> Option<(usize, char)> {
    let mut escaped = false;
    for (offset, ch) in text.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '=' | ':' => return Some((offset, ch)),
            c if c.is_whitespace() => return Some((offset, ch)),
            _ => {}
        }
    }
    None
}

fn split_entry(text: &str) -> (&str, &str) {
    let Some((offset, sep)) = split_point(text) else {
        return (text, "");
    };
    let (key, rest) = text.split_at(offset);
    let rest = rest.get(sep.len_utf8()..).unwrap_or_default().trim_start();
    // A whitespace separator may be followed by one explicit separator.
    let rest = if sep.is_whitespace() {
        rest.strip_prefix(['=', ':']).map_or(rest, str::trim_start)
    } else {
        rest
    };
    (key, rest)
}

fn unescape(raw: &str, line: usize) -> ResolveResult<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{000c}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                let decoded = u32::from_str_radix(&hex, 16)
                    .ok()
                    .filter(|_| hex.len() == 4)
                    .and_then(char::from_u32)
                    .ok_or_else(|| {
                        Arc::new(PropertiesError::parse(
                            line,
                            format!("invalid unicode escape '\\u{hex}'"),
                        ))
                    })?;
                out.push(decoded);
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    Ok(out)
}

/// Parses `input` into ordered key/value pairs.
pub(super) fn parse_entries(input: &str) -> ResolveResult<Vec<(String, String)>> {
    logical_lines(input)
        .into_iter()
        .map(|line| {
            let (key, value) = split_entry(&line.text);
            Ok((unescape(key, line.number)?, unescape(value, line.number)?))
        })
        .collect()
}
