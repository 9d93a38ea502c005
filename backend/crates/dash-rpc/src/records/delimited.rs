use crate::LIST_DELIMITER;

use std::sync::LazyLock;

use regex::Regex;

static PLACEHOLDER_USER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^_+$").expect("placeholder user regex is valid"));

/// Split a `:`-delimited directory list, dropping empty entries.
pub fn split_delimited(text: &str) -> Vec<String> {
    text.split(LIST_DELIMITER)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}

/// Entries made only of underscores pad the user list and are not accounts.
pub fn is_placeholder_user(entry: &str) -> bool {
    PLACEHOLDER_USER.is_match(entry)
}
