use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Shape of a well-formed slug as produced by `shared::slug::slugify`.
    /// Used to reject malformed slug path parameters before touching the
    /// database.
    /// - Valid: "nunta", "trash-the-dress", "absolvire2024"
    /// - Invalid: "-nunta", "nunta-", "nunta--mare", "Nunta", "nunta_mare"
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_regex_valid() {
        assert!(SLUG_REGEX.is_match("nunta"));
        assert!(SLUG_REGEX.is_match("trash-the-dress"));
        assert!(SLUG_REGEX.is_match("absolvire2024"));
        assert!(SLUG_REGEX.is_match("a"));
        assert!(SLUG_REGEX.is_match("a-b-c"));
    }

    #[test]
    fn test_slug_regex_invalid() {
        assert!(!SLUG_REGEX.is_match("-nunta")); // starts with hyphen
        assert!(!SLUG_REGEX.is_match("nunta-")); // ends with hyphen
        assert!(!SLUG_REGEX.is_match("nunta--mare")); // double hyphen
        assert!(!SLUG_REGEX.is_match("Nunta")); // uppercase
        assert!(!SLUG_REGEX.is_match("nunta_mare")); // underscore
        assert!(!SLUG_REGEX.is_match("")); // empty
        assert!(!SLUG_REGEX.is_match("nunta mare")); // space
    }
}
