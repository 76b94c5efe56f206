//! A profanity filter for detecting and censoring profane words in text.
//!
//! [`ProfanityFilter`] matches input against a blacklist of words, folding
//! the accented letters common in Brazilian Portuguese to their ASCII base
//! forms before comparison. The built-in blacklist combines a Brazilian
//! Portuguese locale list with an English base list; callers can extend it,
//! start from an empty list, or exempt individual words through the exclude
//! (whitelist) list.
//!
//! # Examples
//! Detecting and censoring with the default configuration:
//!
//! ```
//! use profanity_filter::ProfanityFilter;
//!
//! let mut filter = ProfanityFilter::new();
//!
//! assert!(filter.is_profane("que merda!"));
//! assert_eq!(filter.clean("que merda!").unwrap(), "que *****!");
//!
//! filter.add_words(["heck"]);
//!
//! assert_eq!(filter.clean("oh heck no").unwrap(), "oh **** no");
//! ```
//!
//! Configuration beyond the defaults goes through [`ProfanityFilterBuilder`]:
//!
//! ```
//! use profanity_filter::ProfanityFilterBuilder;
//!
//! let filter = ProfanityFilterBuilder::new()
//!     .word("dog")
//!     .placeholder('#')
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(filter.clean("Go dog go").unwrap(), "Go ### go");
//! ```

mod builder;
mod error;
mod list;
mod normalize;

pub use builder::ProfanityFilterBuilder;
pub use error::Error;

use regex::{NoExpand, Regex};

/// A blacklist entry.
///
/// Holds the case-folded key compared against the exclude list and the
/// compiled matcher for the word.
#[derive(Clone, Debug)]
pub(crate) struct Entry {
    key: String,
    pattern: Regex,
}

impl Entry {
    /// Compiles an entry for `word`, which must already be accent-folded.
    ///
    /// The pattern matches the word case-insensitively anywhere in a token,
    /// allowing runs of `/` on either side.
    pub(crate) fn new(word: &str) -> Self {
        let pattern = Regex::new(&format!("(?i)/*{}/*", regex::escape(word)))
            .expect("escaped word is a valid pattern");

        Self {
            key: word.to_lowercase(),
            pattern,
        }
    }
}

/// A configured profanity filter.
///
/// The filter owns its blacklist and exclude list; queries take `&self` and
/// the two list-editing operations take `&mut self`, so sharing a filter
/// across threads follows the usual borrowing rules with no internal
/// locking.
///
/// Construct one with [`new`] for the default configuration or through a
/// [`ProfanityFilterBuilder`] for anything else.
///
/// [`new`]: Self::new
#[derive(Clone, Debug)]
pub struct ProfanityFilter {
    pub(crate) list: Vec<Entry>,
    pub(crate) exclude: Vec<String>,
    pub(crate) placeholder: char,
    pub(crate) strip: Regex,
    pub(crate) replace: Regex,
    pub(crate) split: Regex,
}

impl ProfanityFilter {
    /// Creates a filter with the default configuration and the built-in word
    /// lists.
    ///
    /// # Example
    /// ```
    /// use profanity_filter::ProfanityFilter;
    ///
    /// let filter = ProfanityFilter::new();
    ///
    /// assert!(filter.is_profane("merda"));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        ProfanityFilterBuilder::new()
            .build()
            .expect("default patterns are valid")
    }

    /// Checks whether `text` contains any blacklisted word.
    ///
    /// `text` is accent-folded before comparison, and every blacklist entry
    /// not suppressed by the exclude list is tested as a case-insensitive
    /// substring match. With the default lists, empty or all-symbol input is
    /// never profane.
    ///
    /// # Example
    /// ```
    /// use profanity_filter::ProfanityFilter;
    ///
    /// let filter = ProfanityFilter::new();
    ///
    /// assert!(filter.is_profane("que pórra é essa"));
    /// assert!(!filter.is_profane("bom dia"));
    /// ```
    #[must_use]
    pub fn is_profane(&self, text: &str) -> bool {
        let folded = normalize::fold(text);

        self.list
            .iter()
            .filter(|entry| !self.exclude.contains(&entry.key))
            .any(|entry| entry.pattern.is_match(&folded))
    }

    /// Redacts every profane token of `text`.
    ///
    /// `text` is split with the configured split pattern, profane tokens are
    /// redacted, and the result is rejoined with the first separator the
    /// split pattern finds in `text`, repeated for every gap. Under the
    /// default zero-width split pattern that separator is empty and the
    /// input reassembles exactly.
    ///
    /// # Errors
    /// Returns [`Error::NoTokenBoundary`] if the split pattern matches
    /// nowhere in `text`, since no separator then exists to rejoin with.
    ///
    /// # Example
    /// ```
    /// use profanity_filter::ProfanityFilter;
    ///
    /// let mut filter = ProfanityFilter::new();
    /// filter.add_words(["dog", "go"]);
    ///
    /// assert_eq!(filter.clean("Go dog go").unwrap(), "** *** **");
    /// assert!(filter.clean("").is_err());
    /// ```
    pub fn clean(&self, text: &str) -> Result<String, Error> {
        let separator = self
            .split
            .find(text)
            .ok_or(Error::NoTokenBoundary)?
            .as_str();

        let tokens = self
            .split
            .split(text)
            .map(|token| {
                if self.is_profane(token) {
                    self.redact_word(token)
                } else {
                    token.to_owned()
                }
            })
            .collect::<Vec<_>>();

        Ok(tokens.join(separator))
    }

    /// Adds words to the blacklist.
    ///
    /// Each word is accent-folded before insertion; duplicates are
    /// permitted. Adding a word also removes the first matching entry for
    /// its case-folded form from the exclude list, revoking a prior
    /// [`remove_words`] exemption.
    ///
    /// # Panics
    /// Panics if a word is so large that its compiled matcher exceeds the
    /// regex engine's default size limit; the limit accommodates words
    /// several megabytes long.
    ///
    /// # Example
    /// ```
    /// use profanity_filter::ProfanityFilter;
    ///
    /// let mut filter = ProfanityFilter::new();
    /// filter.add_words(["dóg", "gó"]);
    ///
    /// assert_eq!(filter.clean("Go dog go").unwrap(), "** *** **");
    /// ```
    ///
    /// [`remove_words`]: Self::remove_words
    pub fn add_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in normalize::fold_words(words) {
            let key = word.to_lowercase();
            if let Some(index) = self.exclude.iter().position(|excluded| *excluded == key) {
                self.exclude.remove(index);
            }
            self.list.push(Entry::new(&word));
        }
    }

    /// Adds words to the exclude (whitelist) list, exempting them from
    /// matching.
    ///
    /// Words are case-folded but not accent-folded, and exclusion compares
    /// them against each entry's folded key by exact equality, so an
    /// accented spelling does not exempt its folded form. Excluding a word
    /// absent from the blacklist is legal and has no observable effect.
    ///
    /// # Example
    /// ```
    /// use profanity_filter::ProfanityFilter;
    ///
    /// let mut filter = ProfanityFilter::new();
    /// filter.add_words(["dog"]);
    /// filter.remove_words(["dog"]);
    ///
    /// assert!(!filter.is_profane("dog"));
    /// ```
    pub fn remove_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exclude
            .extend(words.into_iter().map(|word| word.as_ref().to_lowercase()));
    }

    /// Deletes strip-pattern matches from `token`, then replaces every
    /// replace-pattern match with the placeholder.
    fn redact_word(&self, token: &str) -> String {
        let placeholder = self.placeholder.to_string();
        let stripped = self.strip.replace_all(token, "");

        self.replace
            .replace_all(&stripped, NoExpand(&placeholder))
            .into_owned()
    }
}

impl Default for ProfanityFilter {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::ProfanityFilter;

    #[test]
    fn check_default_list() {
        let filter = ProfanityFilter::new();

        assert!(filter.is_profane("merda"));
        assert!(filter.is_profane("shit"));
        assert!(!filter.is_profane("bom dia"));
    }

    #[test]
    fn clean_default_list() {
        let filter = ProfanityFilter::new();

        assert_eq!(filter.clean("que merda!").unwrap(), "que *****!");
    }

    #[test]
    fn add_words() {
        let mut filter = ProfanityFilter::new();
        filter.add_words(["dog"]);

        assert!(filter.is_profane("dog"));
    }

    #[test]
    fn remove_words() {
        let mut filter = ProfanityFilter::new();
        filter.remove_words(["merda"]);

        assert!(!filter.is_profane("merda"));
    }

    #[test]
    fn empty_input_is_not_profane() {
        let filter = ProfanityFilter::new();

        assert!(!filter.is_profane(""));
        assert!(!filter.is_profane("..."));
    }
}
