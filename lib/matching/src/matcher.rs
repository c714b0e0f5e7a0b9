use crate::grounding::remove_grounded;
use crate::resolver::{BacktrackingResolver, BijectionResolver, PermutationResolver};
use crate::{BlankNodeMapping, EquivalenceRefiner, MatchingConfig, MatchingError, ResolutionStrategy};
use rdf_isomorphism_common::error::NotIsomorphicReason;
use rdf_isomorphism_common::TripleCollection;
use rdf_isomorphism_model::Graph;
use rdf_isomorphism_storage::memory::MemTripleCollection;

/// Decides whether two triple collections are isomorphic.
///
/// The inputs are never modified. The matcher copies both collections, removes their common ground
/// triples, refines the blank nodes, and finally resolves the remaining ambiguous groups with the
/// configured [ResolutionStrategy].
///
/// # Example
///
/// ```
/// # use rdf_isomorphism_matching::GraphMatcher;
/// # use rdf_isomorphism_model::{BlankNode, MatchTriple, NamedNode};
/// # use rdf_isomorphism_storage::memory::MemTripleCollection;
/// let p = NamedNode::new_unchecked("http://example.org/p");
/// let left: MemTripleCollection =
///     [MatchTriple::new(BlankNode::new_unchecked("a"), p.clone(), BlankNode::new_unchecked("b"))]
///         .into_iter()
///         .collect();
/// let right: MemTripleCollection =
///     [MatchTriple::new(BlankNode::new_unchecked("x"), p, BlankNode::new_unchecked("y"))]
///         .into_iter()
///         .collect();
///
/// let mapping = GraphMatcher::default().valid_mapping(&left, &right)?;
/// assert_eq!(mapping[&BlankNode::new_unchecked("a")], BlankNode::new_unchecked("x"));
/// # Ok::<_, rdf_isomorphism_matching::MatchingError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct GraphMatcher {
    config: MatchingConfig,
}

impl GraphMatcher {
    /// Creates a new [GraphMatcher] with the given `config`.
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Returns a mapping from the blank nodes of `left` to the blank nodes of `right` under which
    /// both collections are equal.
    ///
    /// Fails with [MatchingError::NotIsomorphic] if no such mapping exists. The other errors
    /// indicate that no verdict was reached.
    pub fn valid_mapping(
        &self,
        left: &(impl TripleCollection + ?Sized),
        right: &(impl TripleCollection + ?Sized),
    ) -> Result<BlankNodeMapping, MatchingError> {
        if left.len() != right.len() {
            return Err(MatchingError::NotIsomorphic(
                NotIsomorphicReason::TripleCountMismatch {
                    left: left.len(),
                    right: right.len(),
                }
                .into(),
            ));
        }

        tracing::debug!(triples = left.len(), "Matching graphs");
        let mut left = MemTripleCollection::copy_of(left);
        let mut right = MemTripleCollection::copy_of(right);
        remove_grounded(&mut left, &mut right)?;

        let outcome = EquivalenceRefiner::new().refine(&mut left, &mut right)?;
        let (mut mapping, groups) = outcome.into_parts();
        if left.is_empty() && right.is_empty() {
            return Ok(mapping);
        }

        let resolver = self
            .resolver()
            .ok_or(MatchingError::Unresolved {
                groups: groups.len(),
            })?;
        mapping.extend(resolver.resolve(&left, &right, &groups)?);
        Ok(mapping)
    }

    /// Returns whether `left` and `right` are isomorphic.
    ///
    /// Errors that do not decide the question are propagated.
    pub fn is_isomorphic(
        &self,
        left: &(impl TripleCollection + ?Sized),
        right: &(impl TripleCollection + ?Sized),
    ) -> Result<bool, MatchingError> {
        match self.valid_mapping(left, right) {
            Ok(_) => Ok(true),
            Err(MatchingError::NotIsomorphic(error)) => {
                tracing::debug!(%error, "Graphs differ");
                Ok(false)
            }
            Err(error) => Err(error),
        }
    }

    fn resolver(&self) -> Option<Box<dyn BijectionResolver>> {
        match self.config.resolution() {
            ResolutionStrategy::Backtracking => {
                Some(Box::new(BacktrackingResolver::from_config(&self.config)))
            }
            ResolutionStrategy::Permutation => {
                Some(Box::new(PermutationResolver::from_config(&self.config)))
            }
            ResolutionStrategy::Disabled => None,
        }
    }
}

/// Returns whether two [Graph]s are isomorphic using the default [MatchingConfig].
pub fn are_isomorphic(left: &Graph, right: &Graph) -> Result<bool, MatchingError> {
    let left = MemTripleCollection::try_from(left)?;
    let right = MemTripleCollection::try_from(right)?;
    GraphMatcher::default().is_isomorphic(&left, &right)
}
