//! Accent folding applied to words and text before blacklist comparison.
//!
//! Folding rewrites a fixed table of accented Latin letters, covering the
//! diacritics common in Brazilian Portuguese, to their ASCII base letters.
//! Characters outside the table pass through unchanged, so folding an
//! already-folded string is a no-op.

/// Fold a single character to its ASCII base letter.
///
/// Characters not covered by the table are returned unchanged. Note that the
/// table is not symmetric across cases: `ë` and `ĩ` are untouched even though
/// `Ë` and `Ĩ` fold.
pub(crate) fn fold_char(c: char) -> char {
    match c {
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'È' | 'É' | 'Ê' | 'Ë' => 'E',
        'è' | 'é' | 'ê' | 'ẽ' => 'e',
        'Ì' | 'Í' | 'Î' | 'Ĩ' => 'I',
        'ì' | 'í' | 'î' => 'i',
        'Ò' | 'Ó' | 'Ô' | 'Õ' => 'O',
        'ò' | 'ó' | 'ô' | 'õ' => 'o',
        'Ù' | 'Ú' | 'Û' | 'Ũ' => 'U',
        'ù' | 'ú' | 'û' | 'ũ' => 'u',
        'Ç' => 'C',
        'ç' => 'c',
        _ => c,
    }
}

/// Fold every character of `text`.
pub(crate) fn fold(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

/// Fold a sequence of words, preserving order and length.
pub(crate) fn fold_words<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words.into_iter().map(|word| fold(word.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use crate::normalize::{fold, fold_words};
    use proptest::prelude::*;

    #[test]
    fn folds_accented_letters() {
        assert_eq!(fold("dóg"), "dog");
        assert_eq!(fold("GÓ"), "GO");
        assert_eq!(fold("maçã"), "maca");
        assert_eq!(fold("ÀÉÎõũÇç"), "AEIouCc");
    }

    #[test]
    fn folds_every_occurrence() {
        assert_eq!(fold("àà"), "aa");
        assert_eq!(fold("coração"), "coracao");
    }

    #[test]
    fn passes_other_characters_through() {
        assert_eq!(fold("plain text 123 !?"), "plain text 123 !?");
        assert_eq!(fold(""), "");
    }

    #[test]
    fn case_asymmetries_preserved() {
        assert_eq!(fold("Ë"), "E");
        assert_eq!(fold("ë"), "ë");
        assert_eq!(fold("Ĩ"), "I");
        assert_eq!(fold("ĩ"), "ĩ");
    }

    #[test]
    fn folds_words_in_order() {
        assert_eq!(fold_words(["gó", "dóg", "ok"]), vec!["go", "dog", "ok"]);
        assert!(fold_words(Vec::<String>::new()).is_empty());
    }

    proptest! {
        #[test]
        fn fold_is_idempotent(text in ".*") {
            let once = fold(&text);
            prop_assert_eq!(fold(&once), once);
        }

        #[test]
        fn fold_preserves_char_count(text in ".*") {
            prop_assert_eq!(fold(&text).chars().count(), text.chars().count());
        }
    }
}
