use rdf_isomorphism_common::error::GraphNotIsomorphicError;
use rdf_isomorphism_model::UnsupportedTermError;

/// An error raised while comparing two graphs with the [GraphMatcher](crate::GraphMatcher).
///
/// Only [MatchingError::NotIsomorphic] is a verdict. The other variants indicate that no verdict
/// could be reached within the configured bounds or that the input cannot be compared.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum MatchingError {
    /// The graphs are provably not isomorphic.
    #[error(transparent)]
    NotIsomorphic(#[from] GraphNotIsomorphicError),
    /// The bijection search tried the maximum number of candidate pairings.
    #[error("Gave up resolving ambiguous blank nodes after {attempts} attempts")]
    SearchBudgetExceeded { attempts: usize },
    /// An ambiguous group is too large for an exhaustive permutation search.
    #[error("Ambiguous group of {size} blank nodes exceeds the maximum group size of {max_size}")]
    GroupTooLarge { size: usize, max_size: usize },
    /// Ambiguous groups remain, but resolving them is disabled.
    #[error("{groups} ambiguous blank node groups remain and resolution is disabled")]
    Unresolved { groups: usize },
    /// The input contains a term that cannot be compared.
    #[error(transparent)]
    UnsupportedTerm(#[from] UnsupportedTermError),
}

impl MatchingError {
    /// Returns whether this error proves that the graphs are not isomorphic.
    pub fn is_not_isomorphic(&self) -> bool {
        matches!(self, MatchingError::NotIsomorphic(_))
    }
}
