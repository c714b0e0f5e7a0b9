use crate::grounding::ground_pair;
use crate::resolver::{check_mapping, BijectionResolver, ResolutionBudget};
use crate::{BlankNodeMapping, EquivalenceRefiner, MatchingConfig, MatchingError, MatchingGroup};
use rdf_isomorphism_common::error::NotIsomorphicReason;
use rdf_isomorphism_storage::memory::MemTripleCollection;

/// Pairs one blank node at a time and refines the graphs after each guess.
///
/// The resolver picks the smallest group and tentatively pairs its first node with every
/// candidate of the other graph. A guess grounds the pair on a copy of the graphs and lets the
/// [EquivalenceRefiner] propagate it. Contradictions discard the guess, otherwise the search
/// continues with the groups that are still ambiguous.
///
/// Compared to the [PermutationResolver](crate::resolver::PermutationResolver), a single guess
/// often resolves the entire group, so groups of any size are accepted.
#[derive(Clone, Debug)]
pub struct BacktrackingResolver {
    max_attempts: usize,
}

impl BacktrackingResolver {
    pub fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    pub fn from_config(config: &MatchingConfig) -> Self {
        Self::new(config.max_attempts())
    }

    fn search(
        &self,
        left: &MemTripleCollection,
        right: &MemTripleCollection,
        groups: &[MatchingGroup],
        budget: &mut ResolutionBudget,
    ) -> Result<Option<BlankNodeMapping>, MatchingError> {
        let Some(group) = groups.iter().min_by_key(|group| group.len()) else {
            let empty = BlankNodeMapping::default();
            return Ok(check_mapping(left, right, &empty).then_some(empty));
        };
        let Some(pivot) = group.left().first() else {
            return Ok(None);
        };

        for candidate in group.right() {
            budget.attempt()?;
            tracing::trace!(%pivot, %candidate, attempt = budget.attempts, "Trying pairing");

            let mut left = left.clone();
            let mut right = right.clone();
            if ground_pair(&mut left, &mut right, pivot, candidate).is_err() {
                continue;
            }
            let Ok(outcome) = EquivalenceRefiner::new().refine(&mut left, &mut right) else {
                continue;
            };

            let (matchings, remaining) = outcome.into_parts();
            if let Some(mut mapping) = self.search(&left, &right, &remaining, budget)? {
                mapping.insert(pivot.clone(), candidate.clone());
                mapping.extend(matchings);
                return Ok(Some(mapping));
            }
        }
        Ok(None)
    }
}

impl BijectionResolver for BacktrackingResolver {
    fn resolve(
        &self,
        left: &MemTripleCollection,
        right: &MemTripleCollection,
        groups: &[MatchingGroup],
    ) -> Result<BlankNodeMapping, MatchingError> {
        tracing::debug!(groups = groups.len(), "Backtracking over ambiguous groups");
        let mut budget = ResolutionBudget::new(self.max_attempts);
        match self.search(left, right, groups, &mut budget)? {
            Some(mapping) => {
                tracing::debug!(attempts = budget.attempts, "Found bijection");
                Ok(mapping)
            }
            None => Err(MatchingError::NotIsomorphic(
                NotIsomorphicReason::NoBijection.into(),
            )),
        }
    }
}
