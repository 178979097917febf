//! Parsing helpers for Gherkin step arguments.

use redblack::{Color, Key};

/// Parse a comma-separated key list such as `"87, 10, 68"`. Surrounding
/// quotes are ignored. Panics on a malformed entry so the step fails loudly.
pub fn parse_keys(list: &str) -> Vec<Key> {
    list.trim()
        .trim_matches('"')
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.parse() {
            Ok(key) => key,
            Err(e) => panic!("bad key '{entry}' in '{list}': {e}"),
        })
        .collect()
}

/// Parse `red` or `black`, case-insensitively.
pub fn parse_color(word: &str) -> Option<Color> {
    match word.trim().to_ascii_lowercase().as_str() {
        "red" => Some(Color::Red),
        "black" => Some(Color::Black),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keys() {
        assert_eq!(parse_keys("87, 10, 68"), vec![87, 10, 68]);
        assert_eq!(parse_keys("\"1,2, -3\""), vec![1, 2, -3]);
        assert!(parse_keys("").is_empty());
    }

    #[test]
    #[should_panic(expected = "bad key 'x'")]
    fn test_parse_keys_rejects_garbage() {
        parse_keys("1, x");
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color("BLACK"), Some(Color::Black));
        assert_eq!(parse_color("green"), None);
    }
}
