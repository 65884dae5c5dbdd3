pub(crate) const TXT_EXTENSION: &str = "txt";

/// Strips ASCII punctuation and turns spaces into underscores.
///
/// `_` survives the punctuation pass, so sanitizing an already sanitized
/// name returns it unchanged.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c == '_' || !c.is_ascii_punctuation())
        .map(|c| if c == ' ' { '_' } else { c })
        .collect()
}

pub fn file_name(title: &str) -> String {
    format!("{}.{}", sanitize_file_name(title), TXT_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sanitize_removes_punctuation_and_spaces() {
        assert_eq!(
            sanitize_file_name("Coronavirus: the first three months, as it happened"),
            "Coronavirus_the_first_three_months_as_it_happened"
        );
        assert_eq!(sanitize_file_name("a/b\\c?d*e"), "abcde");
        assert_eq!(sanitize_file_name("What’s next?"), "What’s_next");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        for title in [
            "Plain title",
            "Double  space",
            "Under_score & ampersand",
            "  leading and trailing  ",
            "Ünïcödé — dash",
            "",
        ] {
            let once = sanitize_file_name(title);
            assert_eq!(sanitize_file_name(&once), once);
            assert!(!once.contains(' '));
            assert!(once.chars().all(|c| c == '_' || !c.is_ascii_punctuation()));
        }
    }

    #[test]
    fn test_file_name_extension() {
        assert_eq!(file_name(""), ".txt");
        assert_eq!(file_name("Hello, World!"), "Hello_World.txt");
        assert!(file_name("anything at all...").ends_with(".txt"));
    }
}
