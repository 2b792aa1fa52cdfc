//! Helpers for naming host-managed items.

/// Turn arbitrary text into a valid item name.
/// Quotes are deleted; `.`, `(`, `)` and spaces become underscores.
pub fn safe_item_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '"' | '\''))
        .map(|c| match c {
            '.' | '(' | ')' | ' ' => '_',
            other => other,
        })
        .collect()
}
