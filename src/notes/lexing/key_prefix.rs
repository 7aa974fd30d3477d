//! Key prefix extraction
//!
//!     A note line may start with a pair of keys referencing externally stored
//!     entities:
//!
//!         <link-key>:<target-key>: <rest of the line>
//!
//!     Keys are one or more ASCII letters, digits, `@` or `&`. Only the text up to and
//!     including the first space is examined, so a key-like token later in the line is
//!     never taken for a prefix. The keys describe their own line only.

use once_cell::sync::Lazy;
use regex::Regex;

/// Valid key prefixes, including both colons and the trailing space.
static KEY_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-zA-Z0-9@&]+):([a-zA-Z0-9@&]+): $").expect("key prefix pattern is valid")
});

/// The keys found at the start of a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPrefix<'a> {
    pub link_key: &'a str,
    pub target_key: &'a str,
    /// The line with the prefix (and its trailing space) removed.
    pub rest: &'a str,
}

/// Split a key prefix off `line`, if it has one.
pub fn extract_key_prefix(line: &str) -> Option<KeyPrefix<'_>> {
    let first_space = line.find(' ')?;
    let candidate = &line[..=first_space];
    let captures = KEY_PREFIX.captures(candidate)?;

    let link_key = captures.get(1)?.as_str();
    let target_key = captures.get(2)?.as_str();

    Some(KeyPrefix {
        link_key,
        target_key,
        rest: &line[first_space + 1..],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_is_split_off() {
        let prefix = extract_key_prefix("00001:00042: n  hello").unwrap();
        assert_eq!(prefix.link_key, "00001");
        assert_eq!(prefix.target_key, "00042");
        assert_eq!(prefix.rest, "n  hello");
    }

    #[test]
    fn test_prefix_keeps_indentation_of_rest() {
        let prefix = extract_key_prefix("a@b:c&d:     m  child").unwrap();
        assert_eq!(prefix.link_key, "a@b");
        assert_eq!(prefix.target_key, "c&d");
        assert_eq!(prefix.rest, "    m  child");
    }

    #[test]
    fn test_keys_later_in_line_are_ignored() {
        assert_eq!(extract_key_prefix("n  see 00001:00002: here"), None);
    }

    #[test]
    fn test_malformed_prefixes() {
        // missing trailing space
        assert_eq!(extract_key_prefix("00001:00042:n  x"), None);
        // one key only
        assert_eq!(extract_key_prefix(":00042: n  x"), None);
        assert_eq!(extract_key_prefix("00001:: n  x"), None);
        // characters outside the key alphabet
        assert_eq!(extract_key_prefix("0-1:00042: n  x"), None);
        // three keys
        assert_eq!(extract_key_prefix("1:2:3: n  x"), None);
    }

    #[test]
    fn test_line_without_space() {
        assert_eq!(extract_key_prefix("00001:00042:"), None);
    }
}
