//! Resolution of the ambiguous groups that remain after refinement.
//!
//! Refinement cannot distinguish blank nodes that are swapped by an automorphism of the graph. A
//! [BijectionResolver] searches for a pairing of these nodes that turns both graphs into the same
//! ground graph. The search is exponential in the worst case, hence every resolver is bounded.

mod backtracking;
mod permutation;

pub use backtracking::BacktrackingResolver;
pub use permutation::PermutationResolver;

use crate::{BlankNodeMapping, MatchingError, MatchingGroup};
use rdf_isomorphism_common::TripleCollection;
use rdf_isomorphism_model::{MatchTerm, MatchTriple};
use rdf_isomorphism_storage::memory::MemTripleCollection;

/// Completes a partial matching by pairing the nodes of ambiguous groups.
pub trait BijectionResolver {
    /// Finds a mapping for all nodes in `groups` under which `left` equals `right`.
    ///
    /// `left` and `right` are the graphs as left behind by the refinement. Groups never cross-match,
    /// so a node of one group is only paired with a node of the same group. The returned mapping
    /// only contains the nodes of the groups.
    ///
    /// Returns [MatchingError::NotIsomorphic] if no such mapping exists and
    /// [MatchingError::SearchBudgetExceeded] if the search gave up.
    fn resolve(
        &self,
        left: &MemTripleCollection,
        right: &MemTripleCollection,
        groups: &[MatchingGroup],
    ) -> Result<BlankNodeMapping, MatchingError>;
}

/// Counts the candidates tried by a resolver.
#[derive(Debug)]
struct ResolutionBudget {
    max_attempts: usize,
    attempts: usize,
}

impl ResolutionBudget {
    fn new(max_attempts: usize) -> Self {
        Self {
            max_attempts,
            attempts: 0,
        }
    }

    /// Registers another attempt. Fails if no attempts are left.
    fn attempt(&mut self) -> Result<(), MatchingError> {
        if self.attempts >= self.max_attempts {
            return Err(MatchingError::SearchBudgetExceeded {
                attempts: self.attempts,
            });
        }
        self.attempts += 1;
        Ok(())
    }
}

/// Returns whether applying `mapping` to `left` yields exactly `right`.
///
/// Blank nodes of `left` without a mapping are left unchanged.
pub(crate) fn check_mapping(
    left: &(impl TripleCollection + ?Sized),
    right: &(impl TripleCollection + ?Sized),
    mapping: &BlankNodeMapping,
) -> bool {
    let map_term = |term: MatchTerm| match term.as_blank_node().and_then(|node| mapping.get(node)) {
        Some(mapped) => MatchTerm::from(mapped.clone()),
        None => term,
    };

    left.len() == right.len()
        && left.iter().all(|triple| {
            let mapped = MatchTriple {
                subject: map_term(triple.subject),
                predicate: triple.predicate,
                object: map_term(triple.object),
            };
            right.contains(&mapped)
        })
}
