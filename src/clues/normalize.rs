//! Word normalization shared by the board, the graph and clue submission.

/// Canonical form of a board or clue word.
///
/// Case-folds, trims, and collapses runs of whitespace and underscores
/// into a single space. No other transformation is applied.
///
/// ```
/// use rust_codenames::clues::normalize_word;
///
/// assert_eq!(normalize_word("  Ice_Cream "), "ice cream");
/// assert_eq!(normalize_word("NEW   York"), "new york");
/// assert_eq!(normalize_word("   "), "");
/// ```
#[must_use]
pub fn normalize_word(word: &str) -> String {
    word.split(|c: char| c.is_whitespace() || c == '_')
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_is_idempotent() {
        for word in ["Apple", "  hot_dog", "Sea  Lion", "x-ray", "ÉCOLE"] {
            let once = normalize_word(word);
            assert_eq!(normalize_word(&once), once);
        }
    }

    #[test]
    fn test_normalize_keeps_hyphens() {
        assert_eq!(normalize_word("X-Ray"), "x-ray");
    }
}
