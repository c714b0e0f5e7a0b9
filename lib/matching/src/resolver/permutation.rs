use crate::resolver::{check_mapping, BijectionResolver, ResolutionBudget};
use crate::{BlankNodeMapping, MatchingConfig, MatchingError, MatchingGroup};
use itertools::Itertools;
use rdf_isomorphism_common::error::NotIsomorphicReason;
use rdf_isomorphism_storage::memory::MemTripleCollection;

/// Tries every combination of permutations of the ambiguous groups.
///
/// Each candidate is verified against the complete graphs. The number of candidates is the
/// product of the factorials of all group sizes, so this resolver refuses groups larger than
/// `max_group_size`.
#[derive(Clone, Debug)]
pub struct PermutationResolver {
    max_group_size: usize,
    max_attempts: usize,
}

impl PermutationResolver {
    pub fn new(max_group_size: usize, max_attempts: usize) -> Self {
        Self {
            max_group_size,
            max_attempts,
        }
    }

    pub fn from_config(config: &MatchingConfig) -> Self {
        Self::new(config.max_group_size(), config.max_attempts())
    }
}

impl BijectionResolver for PermutationResolver {
    fn resolve(
        &self,
        left: &MemTripleCollection,
        right: &MemTripleCollection,
        groups: &[MatchingGroup],
    ) -> Result<BlankNodeMapping, MatchingError> {
        if let Some(group) = groups.iter().find(|g| g.len() > self.max_group_size) {
            return Err(MatchingError::GroupTooLarge {
                size: group.len(),
                max_size: self.max_group_size,
            });
        }

        let empty = BlankNodeMapping::default();
        if groups.is_empty() {
            return if check_mapping(left, right, &empty) {
                Ok(empty)
            } else {
                Err(MatchingError::NotIsomorphic(
                    NotIsomorphicReason::NoBijection.into(),
                ))
            };
        }

        tracing::debug!(groups = groups.len(), "Searching permutations of ambiguous groups");
        let mut budget = ResolutionBudget::new(self.max_attempts);
        let candidates = groups
            .iter()
            .map(|group| group.right().iter().permutations(group.len()))
            .multi_cartesian_product();
        for candidate in candidates {
            budget.attempt()?;

            let mapping = groups
                .iter()
                .zip(candidate)
                .flat_map(|(group, permutation)| {
                    group.left().iter().cloned().zip(permutation.into_iter().cloned())
                })
                .collect::<BlankNodeMapping>();
            if check_mapping(left, right, &mapping) {
                tracing::debug!(attempts = budget.attempts, "Found bijection");
                return Ok(mapping);
            }
        }

        Err(MatchingError::NotIsomorphic(
            NotIsomorphicReason::NoBijection.into(),
        ))
    }
}
