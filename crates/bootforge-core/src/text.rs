//! Null-safe text helpers
//!
//! Widget configuration frequently hands around optional strings. The
//! helpers here accept `Option<&str>` subjects and substitute a
//! type-appropriate neutral value for `None` without invoking the wrapped
//! operation, so call sites never branch on presence themselves. For
//! present subjects the underlying semantics are preserved unchanged,
//! including negative offsets and optional lengths where the operation
//! supports them. This layer never errors.

use regex::Regex;

/// Trim whitespace from both ends; `None` yields the empty string
pub fn trim(s: Option<&str>) -> &str {
    s.map(str::trim).unwrap_or("")
}

/// Character count of the subject; `None` yields 0
pub fn length(s: Option<&str>) -> usize {
    s.map(|v| v.chars().count()).unwrap_or(0)
}

/// Lowercase the subject; `None` yields the empty string
pub fn to_lowercase(s: Option<&str>) -> String {
    s.map(str::to_lowercase).unwrap_or_default()
}

/// Uppercase the subject; `None` yields the empty string
pub fn to_uppercase(s: Option<&str>) -> String {
    s.map(str::to_uppercase).unwrap_or_default()
}

/// Uppercase the first character of the subject
pub fn ucfirst(s: Option<&str>) -> String {
    let Some(s) = s else {
        return String::new();
    };
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Extract part of a string by character offset and optional length
///
/// Follows the classic substring contract:
/// - a negative `offset` counts from the end of the subject;
/// - a positive `length` takes at most that many characters;
/// - a negative `length` omits that many characters from the end;
/// - an out-of-range window yields the empty string.
///
/// ```
/// use bootforge_core::text::substr;
///
/// assert_eq!(substr(Some("abcdef"), -1, None), "f");
/// assert_eq!(substr(Some("abcdef"), 0, Some(-1)), "abcde");
/// assert_eq!(substr(Some("abcdef"), -3, Some(1)), "d");
/// assert_eq!(substr(None, 0, None), "");
/// ```
pub fn substr(s: Option<&str>, offset: isize, length: Option<isize>) -> String {
    let Some(s) = s else {
        return String::new();
    };
    let chars: Vec<char> = s.chars().collect();
    let n = chars.len();
    let start = if offset < 0 {
        (n as isize + offset).max(0) as usize
    } else {
        let offset = offset as usize;
        if offset > n {
            return String::new();
        }
        offset
    };
    let end = match length {
        None => n,
        Some(len) if len >= 0 => (start + len as usize).min(n),
        Some(len) => {
            let end = n as isize + len;
            if end <= start as isize {
                return String::new();
            }
            end as usize
        }
    };
    chars[start..end].iter().collect()
}

/// Character position of the first occurrence of `needle` at or after `offset`
///
/// `None` for an absent subject or needle, or when nothing matches.
pub fn find(haystack: Option<&str>, needle: Option<&str>, offset: usize) -> Option<usize> {
    let haystack = haystack?;
    let needle = needle?;
    let (byte_offset, skipped) = char_offset(haystack, offset)?;
    haystack[byte_offset..]
        .find(needle)
        .map(|pos| skipped + haystack[byte_offset..byte_offset + pos].chars().count())
}

/// Character position of the last occurrence of `needle`
pub fn rfind(haystack: Option<&str>, needle: Option<&str>) -> Option<usize> {
    let haystack = haystack?;
    let needle = needle?;
    haystack
        .rfind(needle)
        .map(|pos| haystack[..pos].chars().count())
}

/// Whether the subject starts with the given prefix
pub fn starts_with(s: Option<&str>, prefix: Option<&str>) -> bool {
    match (s, prefix) {
        (Some(s), Some(prefix)) => s.starts_with(prefix),
        _ => false,
    }
}

/// Replace every occurrence of `from` with `to`
///
/// An absent subject yields the empty string; an absent `from` leaves the
/// subject unchanged; an absent `to` removes the matches.
pub fn replace(subject: Option<&str>, from: Option<&str>, to: Option<&str>) -> String {
    let Some(subject) = subject else {
        return String::new();
    };
    let Some(from) = from else {
        return subject.to_string();
    };
    if from.is_empty() {
        return subject.to_string();
    }
    subject.replace(from, to.unwrap_or(""))
}

/// Split the subject on a separator string
///
/// An absent subject or separator yields an empty collection, as does an
/// empty separator (splitting on nothing is not a meaningful request).
pub fn explode(separator: Option<&str>, subject: Option<&str>) -> Vec<String> {
    let (Some(separator), Some(subject)) = (separator, subject) else {
        return Vec::new();
    };
    if separator.is_empty() {
        return Vec::new();
    }
    subject.split(separator).map(str::to_string).collect()
}

/// Repeat the subject `times` times; `None` yields the empty string
pub fn repeat(s: Option<&str>, times: usize) -> String {
    s.map(|v| v.repeat(times)).unwrap_or_default()
}

/// Whether the pattern matches anywhere in the subject; `None` never matches
pub fn is_match(pattern: &Regex, subject: Option<&str>) -> bool {
    subject.map(|s| pattern.is_match(s)).unwrap_or(false)
}

/// First capture group set for the pattern, if the subject is present and matches
pub fn first_match<'t>(pattern: &Regex, subject: Option<&'t str>) -> Option<regex::Captures<'t>> {
    pattern.captures(subject?)
}

/// Replace every pattern match in the subject; `None` yields the empty string
pub fn regex_replace(pattern: &Regex, replacement: &str, subject: Option<&str>) -> String {
    match subject {
        Some(s) => pattern.replace_all(s, replacement).into_owned(),
        None => String::new(),
    }
}

/// Byte offset and chars skipped for a character offset into `s`
fn char_offset(s: &str, offset: usize) -> Option<(usize, usize)> {
    if offset == 0 {
        return Some((0, 0));
    }
    let mut count = 0;
    for (byte, _) in s.char_indices() {
        if count == offset {
            return Some((byte, offset));
        }
        count += 1;
    }
    if count == offset {
        return Some((s.len(), offset));
    }
    None
}
