//! Date format conversion for client date/time plugins
//!
//! Client-side pickers use their own format tokens; the table below
//! translates PHP-style date tokens into them character by character.
//! Tokens without an entry pass through unchanged (separators, literal
//! text, and tokens that happen to agree across the two schemes).

use bootforge_core::{Error, Result};

/// PHP date token to plugin token translations
static PHP_TO_PLUGIN: &[(char, &str)] = &[
    // meridian lowercase / uppercase
    ('a', "p"),
    ('A', "P"),
    // second (with leading zeros)
    ('s', "ss"),
    // minute (with leading zeros)
    ('i', "ii"),
    // hour in 12-hour format (no leading zeros)
    ('g', "H"),
    // hour in 24-hour format (no leading zeros)
    ('G', "h"),
    // hour in 12-hour format (with leading zeros)
    ('h', "HH"),
    // hour in 24-hour format (with leading zeros)
    ('H', "hh"),
    // day of month (no leading zero)
    ('j', "d"),
    // day of month (two digit)
    ('d', "dd"),
    // day name long
    ('l', "DD"),
    // month of year (no leading zero)
    ('n', "m"),
    // month of year (two digit)
    ('m', "mm"),
    // month name long
    ('F', "MM"),
    // year (two digit)
    ('y', "yy"),
    // year (four digit)
    ('Y', "yyyy"),
];

/// Convert a PHP-style date format to the client plugin format
pub fn convert_date_format(format: &str) -> String {
    let mut out = String::with_capacity(format.len());
    for ch in format.chars() {
        match PHP_TO_PLUGIN.iter().find(|(token, _)| *token == ch) {
            Some((_, replacement)) => out.push_str(replacement),
            None => out.push(ch),
        }
    }
    out
}

/// Prefix marking a format string as PHP-style
pub const PHP_FORMAT_PREFIX: &str = "php:";

/// Derive the plugin-native format string for an attribute kind
///
/// The explicit plugin option wins: a `php:`-prefixed value is converted,
/// anything else is assumed plugin-native already. Otherwise the host
/// formatter's format (PHP-style, optionally `php:`-prefixed) is converted.
/// With nothing derivable this is a fatal configuration error.
pub fn plugin_date_format(
    kind: &str,
    explicit: Option<&str>,
    app_format: Option<&str>,
) -> Result<String> {
    if let Some(format) = explicit.filter(|f| !f.is_empty()) {
        return Ok(match format.strip_prefix(PHP_FORMAT_PREFIX) {
            Some(php) => convert_date_format(php),
            None => format.to_string(),
        });
    }
    match app_format.filter(|f| !f.is_empty()) {
        Some(format) => {
            let php = format.strip_prefix(PHP_FORMAT_PREFIX).unwrap_or(format);
            Ok(convert_date_format(php))
        }
        None => Err(Error::invalid_format(kind)),
    }
}
