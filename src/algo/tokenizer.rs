use std::sync::LazyLock;

use regex::Regex;

static MARKUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s-]").unwrap());

/// Tokenize free text into lowercase unigrams followed by adjacent-token
/// bigrams, so both compete as vocabulary candidates.
///
/// Markup-like angle-bracket spans are removed, punctuation becomes
/// whitespace (hyphens and underscores survive inside tokens), and tokens
/// of length <= 2 or on the stopword list are dropped before bigrams are
/// formed.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let stripped = MARKUP.replace_all(&lower, " ");
    let cleaned = NON_WORD.replace_all(&stripped, " ");

    let mut tokens: Vec<String> = cleaned
        .split_whitespace()
        .filter(|w| w.chars().count() > 2 && !is_stopword(w))
        .map(|w| w.to_string())
        .collect();

    let bigrams: Vec<String> = tokens
        .windows(2)
        .map(|w| format!("{} {}", w[0], w[1]))
        .collect();
    tokens.extend(bigrams);
    tokens
}

fn is_stopword(word: &str) -> bool {
    matches!(
        word,
        "the" | "and" | "for" | "are" | "was" | "were" | "with" | "this" | "that"
        | "these" | "those" | "from" | "into" | "has" | "have" | "had" | "not"
        | "but" | "its" | "his" | "her" | "their" | "our" | "your" | "which"
        | "when" | "where" | "what" | "who" | "how" | "all" | "also" | "more"
        | "most" | "other" | "some" | "such" | "than" | "too" | "very" | "will"
        | "would" | "can" | "could" | "should" | "about" | "out"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_splits() {
        let tokens = tokenize("Red Forest Photo");
        assert_eq!(tokens, vec!["red", "forest", "photo", "red forest", "forest photo"]);
    }

    #[test]
    fn drops_short_tokens_and_stopwords() {
        let tokens = tokenize("the art of it is joy");
        assert_eq!(tokens, vec!["art", "joy", "art joy"]);
    }

    #[test]
    fn strips_markup_spans() {
        let tokens = tokenize("hello <b>bold</b> world");
        assert_eq!(tokens, vec!["hello", "bold", "world", "hello bold", "bold world"]);
    }

    #[test]
    fn punctuation_becomes_whitespace() {
        let tokens = tokenize("rust, fast! (really)");
        assert_eq!(tokens, vec!["rust", "fast", "really", "rust fast", "fast really"]);
    }

    #[test]
    fn hyphens_and_underscores_survive() {
        let tokens = tokenize("mixed-media install_art");
        assert_eq!(
            tokens,
            vec!["mixed-media", "install_art", "mixed-media install_art"]
        );
    }

    #[test]
    fn empty_text_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("an of the").is_empty());
    }

    #[test]
    fn single_token_has_no_bigram() {
        let tokens = tokenize("sculpture");
        assert_eq!(tokens, vec!["sculpture"]);
    }
}
