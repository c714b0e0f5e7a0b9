use thiserror::Error;

/// Raised when a term cannot take part in a graph comparison.
///
/// Graph matching works on plain RDF 1.1 terms. Quoted triples (RDF-star) have no counterpart in
/// [MatchTerm](crate::MatchTerm) and are rejected when converting.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Unsupported term in graph comparison: {term}")]
pub struct UnsupportedTermError {
    term: String,
}

impl UnsupportedTermError {
    /// Creates a new [UnsupportedTermError] for the given printed term.
    pub fn new(term: impl Into<String>) -> Self {
        Self { term: term.into() }
    }

    /// Returns the printed form of the rejected term.
    pub fn term(&self) -> &str {
        &self.term
    }
}
