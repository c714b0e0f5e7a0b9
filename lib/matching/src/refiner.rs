use crate::grounding::ground_pair;
use crate::property::{BlankNodeHashes, PropertyHasher};
use rdf_isomorphism_common::error::{GraphNotIsomorphicError, NotIsomorphicReason};
use rdf_isomorphism_common::TripleCollection;
use rdf_isomorphism_model::BlankNode;
use rustc_hash::FxHashMap;
use std::fmt::{Display, Formatter};

/// Maps blank nodes of the first graph to blank nodes of the second graph.
pub type BlankNodeMapping = FxHashMap<BlankNode, BlankNode>;

/// Blank nodes that share a hash class but cannot yet be told apart.
///
/// Every node in `left` corresponds to some node in `right`, but the refinement could not determine
/// which one. Both sides have the same size and are sorted by label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchingGroup {
    hash: u64,
    left: Vec<BlankNode>,
    right: Vec<BlankNode>,
}

impl MatchingGroup {
    /// Creates a new [MatchingGroup].
    ///
    /// # Panics
    ///
    /// Panics if both sides have a different size.
    pub fn new(hash: u64, left: Vec<BlankNode>, right: Vec<BlankNode>) -> Self {
        assert_eq!(
            left.len(),
            right.len(),
            "Both sides of a matching group must have the same size."
        );
        Self { hash, left, right }
    }

    /// The hash class shared by all nodes in the group.
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// The blank nodes of the first graph.
    pub fn left(&self) -> &[BlankNode] {
        &self.left
    }

    /// The blank nodes of the second graph.
    pub fn right(&self) -> &[BlankNode] {
        &self.right
    }

    /// The number of blank nodes per side.
    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }
}

impl Display for MatchingGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let join = |nodes: &[BlankNode]| {
            nodes
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };
        write!(f, "{{{}}} ~ {{{}}}", join(&self.left), join(&self.right))
    }
}

/// The result of a successful refinement.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RefinementOutcome {
    matchings: BlankNodeMapping,
    groups: Vec<MatchingGroup>,
    rounds: usize,
}

impl RefinementOutcome {
    /// The confirmed pairings.
    pub fn matchings(&self) -> &BlankNodeMapping {
        &self.matchings
    }

    /// The groups of blank nodes that remain ambiguous, ordered by their hash.
    pub fn groups(&self) -> &[MatchingGroup] {
        &self.groups
    }

    /// The number of rounds until the fixpoint was reached.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Returns whether every blank node has been matched.
    pub fn is_complete(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn into_parts(self) -> (BlankNodeMapping, Vec<MatchingGroup>) {
        (self.matchings, self.groups)
    }
}

/// Pairs the blank nodes of two graphs by iterative color refinement.
///
/// Each round hashes every remaining blank node from its properties and buckets the nodes of both
/// graphs by their hash. The bucket keys of both graphs must agree, as must the size of each
/// bucket. Buckets with a single node per graph are confirmed matches and are grounded right away,
/// which makes the hashes of their neighbours more specific in the next round. Larger buckets
/// become [MatchingGroup]s.
///
/// The refinement stops once a round neither confirms a match nor increases the number or the
/// size of the groups.
/// A refiner is consumed by [EquivalenceRefiner::refine], so hash tables are never shared between
/// two comparisons.
#[derive(Debug, Default)]
pub struct EquivalenceRefiner {
    /// The hashes of the previous round. One table per graph, as labels may be equal in both.
    hashes: [BlankNodeHashes; 2],
    matchings: BlankNodeMapping,
    groups: Vec<MatchingGroup>,
    round: usize,
}

impl EquivalenceRefiner {
    /// Creates a new [EquivalenceRefiner] where every blank node starts with the hash `0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Refines `left` and `right` until a fixpoint is reached.
    ///
    /// Both graphs are rewritten in place. Confirmed pairs are replaced by a mapped node and
    /// triples without blank nodes are removed. Therefore, both graphs must not contain ground
    /// triples when calling this method (see [remove_grounded](crate::grounding::remove_grounded)).
    pub fn refine<L, R>(
        mut self,
        left: &mut L,
        right: &mut R,
    ) -> Result<RefinementOutcome, GraphNotIsomorphicError>
    where
        L: TripleCollection + ?Sized,
        R: TripleCollection + ?Sized,
    {
        // Without the own hash in the fingerprint, partitions may alternate between rounds.
        let max_rounds = left.blank_nodes().len() + 1;

        let mut found_matchings = 0;
        let mut found_sizes = Vec::new();
        loop {
            self.round += 1;
            self.refine_round(left, right)?;

            let sizes = group_sizes(&self.groups);
            let stable =
                self.matchings.len() == found_matchings && !groups_grew(&found_sizes, &sizes);
            if stable || self.round >= max_rounds {
                break;
            }
            found_matchings = self.matchings.len();
            found_sizes = sizes;
        }

        tracing::debug!(
            rounds = self.round,
            matchings = self.matchings.len(),
            groups = self.groups.len(),
            "Refinement reached fixpoint"
        );
        Ok(RefinementOutcome {
            matchings: self.matchings,
            groups: self.groups,
            rounds: self.round,
        })
    }

    fn refine_round<L, R>(&mut self, left: &mut L, right: &mut R) -> Result<(), GraphNotIsomorphicError>
    where
        L: TripleCollection + ?Sized,
        R: TripleCollection + ?Sized,
    {
        let [left_hashes, right_hashes] = &self.hashes;
        let mut left_buckets = PropertyHasher::new(left_hashes).bucket_nodes(left);
        let mut right_buckets = PropertyHasher::new(right_hashes).bucket_nodes(right);

        if left_buckets.len() != right_buckets.len()
            || left_buckets.keys().any(|hash| !right_buckets.contains_key(hash))
        {
            tracing::debug!(round = self.round, "Hash classes differ");
            return Err(NotIsomorphicReason::HashClassMismatch { round: self.round }.into());
        }

        let mut keys = left_buckets.keys().copied().collect::<Vec<_>>();
        keys.sort_unstable();

        let matchings_before = self.matchings.len();
        self.groups.clear();
        for hash in &keys {
            let left_nodes = &left_buckets[hash];
            let right_nodes = &right_buckets[hash];
            if left_nodes.len() != right_nodes.len() {
                return Err(NotIsomorphicReason::ClassCardinalityMismatch {
                    round: self.round,
                    hash: *hash,
                    left: left_nodes.len(),
                    right: right_nodes.len(),
                }
                .into());
            }

            match (left_nodes.as_slice(), right_nodes.as_slice()) {
                ([left_node], [right_node]) => {
                    tracing::trace!(round = self.round, %left_node, %right_node, "Confirmed match");
                    ground_pair(left, right, left_node, right_node)?;
                    self.matchings
                        .insert(left_node.clone(), right_node.clone());
                }
                _ => self.groups.push(MatchingGroup::new(
                    *hash,
                    left_nodes.clone(),
                    right_nodes.clone(),
                )),
            }
        }

        tracing::debug!(
            round = self.round,
            classes = keys.len(),
            new_matchings = self.matchings.len() - matchings_before,
            groups = self.groups.len(),
            "Finished refinement round"
        );

        self.hashes = [
            invert(&mut left_buckets),
            invert(&mut right_buckets),
        ];
        Ok(())
    }
}

/// The sizes of `groups`, largest first.
fn group_sizes(groups: &[MatchingGroup]) -> Vec<usize> {
    let mut sizes = groups.iter().map(MatchingGroup::len).collect::<Vec<_>>();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes
}

/// Returns whether there are more groups than before or a group has become larger.
///
/// Both slices must be sorted in descending order.
fn groups_grew(previous: &[usize], current: &[usize]) -> bool {
    current.len() > previous.len()
        || current
            .iter()
            .zip(previous)
            .any(|(current, previous)| current > previous)
}

fn invert(buckets: &mut FxHashMap<u64, Vec<BlankNode>>) -> BlankNodeHashes {
    buckets
        .drain()
        .flat_map(|(hash, nodes)| nodes.into_iter().map(move |node| (node, hash)))
        .collect()
}
