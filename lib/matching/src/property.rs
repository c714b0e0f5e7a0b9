use rdf_isomorphism_common::TripleCollection;
use rdf_isomorphism_model::{BlankNode, MatchTerm, NamedNode, TriplePattern};
use rustc_hash::{FxBuildHasher, FxHashMap, FxHashSet};
use std::hash::BuildHasher;

/// The hashes assigned to blank nodes in the previous refinement round.
///
/// Blank nodes without an entry hash to `0`.
pub type BlankNodeHashes = FxHashMap<BlankNode, u64>;

/// Distinguishes backward properties from forward properties with the same terms.
const BACKWARD_MASK: u64 = 0xFF;

/// An edge as seen from one of its endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    /// The node is the subject of the triple.
    Forward {
        predicate: NamedNode,
        object: MatchTerm,
    },
    /// The node is the object of the triple.
    Backward {
        subject: MatchTerm,
        predicate: NamedNode,
    },
}

/// Computes the structural fingerprints of blank nodes.
///
/// The hash of a node only depends on the multiset of its property hashes. Ground terms hash to
/// their identity, blank nodes to the hash they were assigned in the previous round.
#[derive(Clone, Copy, Debug)]
pub struct PropertyHasher<'hashes> {
    hashes: &'hashes BlankNodeHashes,
}

impl<'hashes> PropertyHasher<'hashes> {
    /// Creates a new [PropertyHasher] that looks up blank node hashes in `hashes`.
    pub fn new(hashes: &'hashes BlankNodeHashes) -> Self {
        Self { hashes }
    }

    /// Returns the properties of all triples in which `node` is subject or object.
    ///
    /// A self-loop contributes a forward and a backward property.
    ///
    /// # Panics
    ///
    /// Panics if `node` does not occur in `graph`. Hashing such a node would silently assign it
    /// the hash `0`.
    pub fn properties(
        node: &BlankNode,
        graph: &(impl TripleCollection + ?Sized),
    ) -> FxHashSet<Property> {
        let term = MatchTerm::from(node.clone());
        let mut result = FxHashSet::default();
        for triple in graph.filter(TriplePattern::with_subject(&term)) {
            result.insert(Property::Forward {
                predicate: triple.predicate,
                object: triple.object,
            });
        }
        for triple in graph.filter(TriplePattern::with_object(&term)) {
            result.insert(Property::Backward {
                subject: triple.subject,
                predicate: triple.predicate,
            });
        }

        assert!(
            !result.is_empty(),
            "Blank node {node} does not occur in the graph."
        );
        result
    }

    /// Returns the hash of a term that appears in a property.
    pub fn node_hash(&self, term: &MatchTerm) -> u64 {
        match term.as_blank_node() {
            Some(node) => self.hashes.get(node).copied().unwrap_or(0),
            None => term.identity_hash(),
        }
    }

    /// Returns the hash of a single property.
    pub fn property_hash(&self, property: &Property) -> u64 {
        match property {
            Property::Forward { predicate, object } => {
                predicate_hash(predicate) ^ self.node_hash(object)
            }
            Property::Backward { subject, predicate } => {
                BACKWARD_MASK ^ predicate_hash(predicate) ^ self.node_hash(subject)
            }
        }
    }

    /// Returns the fingerprint of a node with the given properties.
    ///
    /// Property hashes are summed instead of xor-ed, so two properties with the same hash do not
    /// cancel each other out.
    pub fn fingerprint<'a>(&self, properties: impl IntoIterator<Item = &'a Property>) -> u64 {
        properties
            .into_iter()
            .fold(0u64, |acc, property| {
                acc.wrapping_add(self.property_hash(property))
            })
    }

    /// Computes the fingerprint of every blank node in `graph` and groups the nodes by it.
    ///
    /// The nodes of each bucket are sorted by their label.
    pub fn bucket_nodes(
        &self,
        graph: &(impl TripleCollection + ?Sized),
    ) -> FxHashMap<u64, Vec<BlankNode>> {
        let mut result: FxHashMap<u64, Vec<BlankNode>> = FxHashMap::default();
        for node in graph.blank_nodes() {
            let properties = Self::properties(&node, graph);
            let hash = self.fingerprint(&properties);
            result.entry(hash).or_default().push(node);
        }
        for nodes in result.values_mut() {
            nodes.sort_unstable_by(|a, b| a.as_str().cmp(b.as_str()));
        }
        result
    }
}

fn predicate_hash(predicate: &NamedNode) -> u64 {
    FxBuildHasher.hash_one(predicate)
}
