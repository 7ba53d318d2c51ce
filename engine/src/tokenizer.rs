use crate::error::{Error, Result};

/// Split `text` into words on ASCII spaces.
///
/// Runs of spaces collapse; leading and trailing spaces yield no empty words.
/// Other whitespace (tabs, newlines) is not a separator.
pub fn split_into_words(text: &str) -> Vec<&str> {
    text.split(' ').filter(|word| !word.is_empty()).collect()
}

/// A word is valid when none of its characters fall in the control range
/// U+0000..=U+001F.
pub fn is_valid_word(word: &str) -> bool {
    !word.chars().any(|c| ('\u{0}'..='\u{1f}').contains(&c))
}

pub(crate) fn validate_word(word: &str) -> Result<()> {
    if is_valid_word(word) {
        Ok(())
    } else {
        Err(Error::InvalidWord(word.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_collapses_repeated_spacing() {
        assert_eq!(split_into_words(" a  b "), vec!["a", "b"]);
        assert_eq!(split_into_words("a b"), vec!["a", "b"]);
        assert_eq!(split_into_words("   a    b   "), vec!["a", "b"]);
    }

    #[test]
    fn empty_input_yields_no_words() {
        assert!(split_into_words("").is_empty());
        assert!(split_into_words("     ").is_empty());
    }

    #[test]
    fn only_ascii_space_separates() {
        assert_eq!(split_into_words("a\tb c"), vec!["a\tb", "c"]);
        assert_eq!(split_into_words("a\nb"), vec!["a\nb"]);
    }

    #[test]
    fn control_characters_invalidate_a_word() {
        assert!(is_valid_word("cat"));
        assert!(is_valid_word("c-a-t_9"));
        assert!(!is_valid_word("ca\u{1}t"));
        assert!(!is_valid_word("\u{0}"));
        assert!(!is_valid_word("tail\u{1f}"));
        assert!(is_valid_word(""));
    }
}
