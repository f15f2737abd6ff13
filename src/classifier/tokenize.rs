use regex::Regex;
use std::sync::LazyLock;

// Word tokens of at least two word characters; \w is Unicode-aware.
static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("Failed to compile word regex"));

/// Lowercased bag-of-words tokens in document order.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_REGEX
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_splits_on_punctuation() {
        assert_eq!(
            tokenize("Breaking: Markets RALLY, again!"),
            vec!["breaking", "markets", "rally", "again"]
        );
    }

    #[test]
    fn drops_single_character_tokens() {
        assert_eq!(tokenize("I saw a dog"), vec!["saw", "dog"]);
    }

    #[test]
    fn keeps_digits_and_accented_words() {
        assert_eq!(
            tokenize("économie 2024 crisis"),
            vec!["économie", "2024", "crisis"]
        );
    }

    #[test]
    fn empty_and_symbol_text_yield_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("!?! ... --- ,").is_empty());
    }
}
