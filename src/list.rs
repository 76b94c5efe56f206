//! Built-in default word lists.
//!
//! Two lists ship embedded in the crate: a Brazilian Portuguese locale list
//! stored as JSON, and an English base list stored one word per line. Both
//! are parsed once on first use and treated as opaque sequences of words.

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Deserialize)]
struct LocaleList {
    words: Vec<String>,
}

static LOCALE_WORDS: Lazy<Vec<String>> = Lazy::new(|| {
    let list: LocaleList = serde_json::from_str(include_str!("data/lang.json"))
        .expect("embedded locale list is valid JSON");
    list.words
});

static BASE_WORDS: Lazy<Vec<&'static str>> =
    Lazy::new(|| include_str!("data/base.txt").lines().collect());

/// All default words, locale list first, in list order.
pub(crate) fn default_words() -> impl Iterator<Item = &'static str> {
    LOCALE_WORDS
        .iter()
        .map(String::as_str)
        .chain(BASE_WORDS.iter().copied())
}

#[cfg(test)]
mod tests {
    use crate::list::default_words;

    #[test]
    fn lists_are_not_empty() {
        assert!(default_words().count() > 100);
    }

    #[test]
    fn entries_are_well_formed() {
        for word in default_words() {
            assert!(!word.is_empty());
            assert_eq!(word, word.trim());
            assert_eq!(word.to_lowercase(), word);
        }
    }

    #[test]
    fn locale_list_precedes_base_list() {
        let words: Vec<_> = default_words().collect();
        let merda = words.iter().position(|w| *w == "merda").unwrap();
        let shit = words.iter().position(|w| *w == "shit").unwrap();
        assert!(merda < shit);
    }
}
