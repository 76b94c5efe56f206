use thiserror::Error;

/// Errors returned while configuring or running a [`ProfanityFilter`].
///
/// [`ProfanityFilter`]: crate::ProfanityFilter
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied strip, replace, or split pattern failed to compile.
    #[error("invalid filter pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The split pattern matched nowhere in the input, so no separator exists
    /// to rejoin tokens with.
    ///
    /// Returned by [`clean`] when the input contains no token boundary, for
    /// example an empty string or all-symbol input under the default
    /// word-boundary split pattern.
    ///
    /// [`clean`]: crate::ProfanityFilter::clean
    #[error("no token boundary found in input")]
    NoTokenBoundary,
}
