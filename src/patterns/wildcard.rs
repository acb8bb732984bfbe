// patterns/wildcard.rs
use crate::error::GlobError;
use std::iter::Peekable;
use std::str::Chars;

/// Escapes a character for regex if necessary
fn regex_escape_char(c: char) -> String {
    match c {
        '.' | '+' | '?' | '*' | '(' | ')' | '[' | ']' | '{' | '}' | '^' | '$' | '|' | '\\' => {
            format!("\\{}", c)
        }
        other => other.to_string(),
    }
}

/// Escapes a character for use inside a regex character class
fn class_escape_char(c: char) -> String {
    match c {
        '\\' | ']' | '[' | '^' => format!("\\{}", c),
        other => other.to_string(),
    }
}

/// Translates a `[...]` character class into its regex form
///
/// The opening `[` has already been consumed. A leading `!` negates the
/// class; a `]` right after the opening (or the negation) is a literal
/// member. `-` passes through so ranges like `a-z` keep working.
fn class_to_regex(chars: &mut Peekable<Chars<'_>>) -> Result<String, GlobError> {
    let mut class = String::from("[");

    if matches!(chars.peek(), Some('!') | Some('^')) {
        chars.next();
        class.push('^');
    }

    if chars.peek() == Some(&']') {
        chars.next();
        class.push_str("\\]");
    }

    let mut closed = false;
    while let Some(c) = chars.next() {
        match c {
            ']' => {
                closed = true;
                break;
            }
            '\\' => {
                if let Some(esc) = chars.next() {
                    class.push_str(&class_escape_char(esc));
                }
            }
            '-' => class.push('-'),
            other => class.push_str(&class_escape_char(other)),
        }
    }

    if !closed {
        return Err(GlobError::InvalidPattern(
            "unbalanced character class".into(),
        ));
    }

    class.push(']');
    Ok(class)
}

/// Converts a single wildcard path segment to an anchored regex string
///
/// Shell-style single-segment globbing: `*` matches any run of characters,
/// `?` exactly one character, `[abc]`/`[a-z]`/`[!abc]` a character set,
/// `\x` a literal `x`. Path separators never occur in a segment, so `*`
/// cannot cross directory levels.
///
/// # Errors
///
/// Returns `GlobError::InvalidPattern` for an unbalanced character class.
pub fn segment_to_regex(segment: &str) -> Result<String, GlobError> {
    let mut out = String::from("^");
    let mut chars = segment.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            '[' => out.push_str(&class_to_regex(&mut chars)?),
            '\\' => match chars.next() {
                Some(esc) => out.push_str(&regex_escape_char(esc)),
                None => out.push_str("\\\\"),
            },
            other => out.push_str(&regex_escape_char(other)),
        }
    }

    out.push('$');
    Ok(out)
}
