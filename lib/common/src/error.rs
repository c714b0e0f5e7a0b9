use std::fmt::{Display, Formatter};

/// Proof that two graphs are not isomorphic.
///
/// This is the only way a graph comparison can fail on well-formed input. The error is terminal:
/// retrying the comparison on the same graphs yields the same result.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
#[error("The graphs are not isomorphic: {reason}")]
pub struct GraphNotIsomorphicError {
    reason: NotIsomorphicReason,
}

impl GraphNotIsomorphicError {
    /// Creates a new [GraphNotIsomorphicError].
    pub fn new(reason: NotIsomorphicReason) -> Self {
        Self { reason }
    }

    /// Returns the structural difference that was detected.
    pub fn reason(&self) -> &NotIsomorphicReason {
        &self.reason
    }
}

impl From<NotIsomorphicReason> for GraphNotIsomorphicError {
    fn from(reason: NotIsomorphicReason) -> Self {
        Self::new(reason)
    }
}

/// The structural difference that proves two graphs are not isomorphic.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotIsomorphicReason {
    /// The graphs contain a different number of triples.
    TripleCountMismatch { left: usize, right: usize },
    /// A triple without blank nodes exists in only one of the graphs.
    GroundTripleMismatch,
    /// The hash classes of the blank nodes differ after the given refinement round.
    HashClassMismatch { round: usize },
    /// A hash class has a different number of blank nodes in the two graphs.
    ClassCardinalityMismatch {
        round: usize,
        hash: u64,
        left: usize,
        right: usize,
    },
    /// No pairing of the remaining ambiguous blank nodes makes the graphs equal.
    NoBijection,
}

impl Display for NotIsomorphicReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NotIsomorphicReason::TripleCountMismatch { left, right } => {
                write!(f, "triple counts differ ({left} vs. {right})")
            }
            NotIsomorphicReason::GroundTripleMismatch => {
                f.write_str("a ground triple has no counterpart")
            }
            NotIsomorphicReason::HashClassMismatch { round } => {
                write!(f, "blank node hash classes differ in round {round}")
            }
            NotIsomorphicReason::ClassCardinalityMismatch {
                round,
                hash,
                left,
                right,
            } => write!(
                f,
                "hash class {hash:#x} has {left} vs. {right} blank nodes in round {round}"
            ),
            NotIsomorphicReason::NoBijection => {
                f.write_str("no bijection between the ambiguous blank nodes exists")
            }
        }
    }
}
