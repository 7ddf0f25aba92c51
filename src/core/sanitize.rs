//! Name and value sanitizers applied to matched declarations.

/// Conventional prefix stripped from component names.
pub const STYLED_PREFIX: &str = "Styled";

/// Remove a leading `Styled` from a component name.
///
/// ```
/// use styledset::core::sanitize::strip_prefix;
///
/// assert_eq!(strip_prefix("StyledButton"), "Button");
/// assert_eq!(strip_prefix("Button"), "Button");
/// ```
pub fn strip_prefix(name: &str) -> &str {
    name.strip_prefix(STYLED_PREFIX).unwrap_or(name)
}

/// Split before every uppercase ASCII letter, join with `-`, lowercase.
pub fn tokenize_upper_camel_case(name: &str) -> String {
    split_before(name, |c| c.is_ascii_uppercase()).to_lowercase()
}

/// Split before every ASCII digit, join with `-`, lowercase.
pub fn tokenize_number(name: &str) -> String {
    split_before(name, |c| c.is_ascii_digit()).to_lowercase()
}

/// Camel-case split followed by digit split.
///
/// ```
/// use styledset::core::sanitize::tokenize;
///
/// assert_eq!(tokenize("IconButton2"), "icon-button-2");
/// ```
pub fn tokenize(name: &str) -> String {
    tokenize_number(&tokenize_upper_camel_case(name))
}

/// `name_t` of an output record: strip the prefix, then tokenize.
pub fn sanitize_name(name: &str) -> String {
    tokenize(strip_prefix(name))
}

/// Trim every line of a template text.
///
/// Returns None when the text is empty or whitespace only. Line structure is
/// kept: each line is trimmed on its own and lines are rejoined with `\n`.
pub fn sanitize_value(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return None;
    }

    Some(value.split('\n').map(str::trim).collect::<Vec<_>>().join("\n"))
}

/// Insert `-` before every char matching `boundary`, except at the start.
fn split_before(text: &str, boundary: impl Fn(char) -> bool) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    for (i, c) in text.char_indices() {
        if i > 0 && boundary(c) {
            out.push('-');
        }
        out.push(c);
    }
    out
}
