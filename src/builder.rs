//! Builder for configuring and constructing [`ProfanityFilter`]s.
//!
//! [`ProfanityFilter`]: crate::ProfanityFilter

use crate::{list, normalize, Entry, Error, ProfanityFilter};
use regex::Regex;

const DEFAULT_PLACEHOLDER: char = '*';
const DEFAULT_STRIP_PATTERN: &str = r"[^a-zA-Z0-9|$|@]|\^";
const DEFAULT_REPLACE_PATTERN: &str = r"\w";
const DEFAULT_SPLIT_PATTERN: &str = r"\b";

/// A non-consuming builder for [`ProfanityFilter`]s.
///
/// Every configuration method has a default, so the minimal invocation
/// `ProfanityFilterBuilder::new().build()` produces a filter over the
/// built-in word lists with `*` redaction and word-boundary tokenization.
///
/// # Example
/// ```
/// use profanity_filter::ProfanityFilterBuilder;
///
/// let filter = ProfanityFilterBuilder::new().word("dang").build().unwrap();
///
/// assert!(filter.is_profane("dang it"));
/// ```
///
/// [`ProfanityFilter`]: crate::ProfanityFilter
#[derive(Clone, Debug)]
pub struct ProfanityFilterBuilder {
    words: Vec<String>,
    excludes: Vec<String>,
    empty_list: bool,
    placeholder: char,
    strip_pattern: String,
    replace_pattern: String,
    split_pattern: String,
}

impl ProfanityFilterBuilder {
    /// Creates a new builder with all options at their defaults.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            words: Vec::new(),
            excludes: Vec::new(),
            empty_list: false,
            placeholder: DEFAULT_PLACEHOLDER,
            strip_pattern: DEFAULT_STRIP_PATTERN.to_owned(),
            replace_pattern: DEFAULT_REPLACE_PATTERN.to_owned(),
            split_pattern: DEFAULT_SPLIT_PATTERN.to_owned(),
        }
    }

    /// Adds a word to the blacklist, after the built-in lists.
    ///
    /// # Example
    /// ```
    /// use profanity_filter::ProfanityFilterBuilder;
    ///
    /// let filter = ProfanityFilterBuilder::new().word("dog").build().unwrap();
    ///
    /// assert_eq!(filter.clean("Go dog go").unwrap(), "Go *** go");
    /// ```
    #[inline]
    pub fn word<S>(&mut self, word: &S) -> &mut Self
    where
        S: ToString + ?Sized,
    {
        self.words.push(word.to_string());
        self
    }

    /// Adds multiple words to the blacklist, after the built-in lists.
    ///
    /// # Example
    /// ```
    /// use profanity_filter::ProfanityFilterBuilder;
    ///
    /// let filter = ProfanityFilterBuilder::new()
    ///     .words(["dog", "heck"])
    ///     .build()
    ///     .unwrap();
    ///
    /// assert!(filter.is_profane("hotdogs"));
    /// assert!(filter.is_profane("oh heck no"));
    /// ```
    #[inline]
    pub fn words<I, S>(&mut self, words: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.words.extend(words.into_iter().map(|s| s.to_string()));
        self
    }

    /// Adds an initial exclude (whitelist) entry.
    ///
    /// Entries are stored as given. Matching compares them against the
    /// case-folded form of each blacklist word, so excludes are effective
    /// when supplied in lowercase.
    ///
    /// # Example
    /// ```
    /// use profanity_filter::ProfanityFilterBuilder;
    ///
    /// let filter = ProfanityFilterBuilder::new()
    ///     .word("dog")
    ///     .exclude("dog")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert!(!filter.is_profane("Go dog go"));
    /// ```
    #[inline]
    pub fn exclude<S>(&mut self, exclude: &S) -> &mut Self
    where
        S: ToString + ?Sized,
    {
        self.excludes.push(exclude.to_string());
        self
    }

    /// Adds multiple initial exclude (whitelist) entries.
    #[inline]
    pub fn excludes<I, S>(&mut self, excludes: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.excludes
            .extend(excludes.into_iter().map(|s| s.to_string()));
        self
    }

    /// Starts the filter with an empty blacklist.
    ///
    /// This discards words supplied through [`word`] and [`words`] as well as
    /// the built-in lists; a filter built this way only gains entries through
    /// [`add_words`].
    ///
    /// # Example
    /// ```
    /// use profanity_filter::ProfanityFilterBuilder;
    ///
    /// let filter = ProfanityFilterBuilder::new().empty_list(true).build().unwrap();
    ///
    /// assert!(!filter.is_profane("merda"));
    /// ```
    ///
    /// [`word`]: Self::word
    /// [`words`]: Self::words
    /// [`add_words`]: crate::ProfanityFilter::add_words
    #[inline]
    pub fn empty_list(&mut self, empty_list: bool) -> &mut Self {
        self.empty_list = empty_list;
        self
    }

    /// Sets the character used to redact profane tokens.
    ///
    /// # Example
    /// ```
    /// use profanity_filter::ProfanityFilterBuilder;
    ///
    /// let filter = ProfanityFilterBuilder::new()
    ///     .word("dog")
    ///     .placeholder('#')
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(filter.clean("Go dog go").unwrap(), "Go ### go");
    /// ```
    #[inline]
    pub fn placeholder(&mut self, placeholder: char) -> &mut Self {
        self.placeholder = placeholder;
        self
    }

    /// Sets the pattern whose matches are deleted from a profane token before
    /// placeholder substitution.
    ///
    /// The default deletes everything outside ASCII letters, digits, `|`,
    /// `$`, and `@`.
    ///
    /// # Example
    /// ```
    /// use profanity_filter::ProfanityFilterBuilder;
    ///
    /// let filter = ProfanityFilterBuilder::new()
    ///     .word("dog")
    ///     .strip_pattern(r"\d")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(filter.clean("dog42!").unwrap(), "***!");
    /// ```
    #[inline]
    pub fn strip_pattern(&mut self, pattern: &str) -> &mut Self {
        self.strip_pattern = pattern.to_owned();
        self
    }

    /// Sets the pattern whose matches are replaced by the placeholder.
    ///
    /// # Example
    /// ```
    /// use profanity_filter::ProfanityFilterBuilder;
    ///
    /// let filter = ProfanityFilterBuilder::new()
    ///     .word("dog")
    ///     .replace_pattern("[aeiou]")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(filter.clean("Go dog go").unwrap(), "Go d*g go");
    /// ```
    #[inline]
    pub fn replace_pattern(&mut self, pattern: &str) -> &mut Self {
        self.replace_pattern = pattern.to_owned();
        self
    }

    /// Sets the pattern used to split input into tokens.
    ///
    /// The default is the zero-width word boundary `\b`, which keeps the
    /// separators between words as tokens of their own and reassembles the
    /// input exactly. A non-zero-width pattern makes [`clean`] rejoin every
    /// gap with the first separator found in the input.
    ///
    /// # Example
    /// ```
    /// use profanity_filter::ProfanityFilterBuilder;
    ///
    /// let filter = ProfanityFilterBuilder::new()
    ///     .word("dog")
    ///     .split_pattern(r"\s+")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(filter.clean("say dog!!! now").unwrap(), "say *** now");
    /// ```
    ///
    /// [`clean`]: crate::ProfanityFilter::clean
    #[inline]
    pub fn split_pattern(&mut self, pattern: &str) -> &mut Self {
        self.split_pattern = pattern.to_owned();
        self
    }

    /// Builds a [`ProfanityFilter`] from the current configuration.
    ///
    /// The builder is not consumed and can build further filters.
    ///
    /// # Errors
    /// Returns [`Error::InvalidPattern`] if the strip, replace, or split
    /// pattern fails to compile.
    ///
    /// ```
    /// use profanity_filter::ProfanityFilterBuilder;
    ///
    /// assert!(ProfanityFilterBuilder::new().split_pattern("(").build().is_err());
    /// ```
    ///
    /// # Panics
    /// Panics if a supplied word is so large that its compiled matcher
    /// exceeds the regex engine's default size limit.
    ///
    /// [`ProfanityFilter`]: crate::ProfanityFilter
    pub fn build(&self) -> Result<ProfanityFilter, Error> {
        let strip = Regex::new(&self.strip_pattern)?;
        let replace = Regex::new(&self.replace_pattern)?;
        let split = Regex::new(&self.split_pattern)?;

        let list = if self.empty_list {
            Vec::new()
        } else {
            normalize::fold_words(
                list::default_words()
                    .map(str::to_owned)
                    .chain(self.words.iter().cloned()),
            )
            .iter()
            .map(|word| Entry::new(word))
            .collect()
        };

        Ok(ProfanityFilter {
            list,
            exclude: self.excludes.clone(),
            placeholder: self.placeholder,
            strip,
            replace,
            split,
        })
    }
}

impl Default for ProfanityFilterBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
