use rdf_isomorphism_model::{BlankNode, MatchTriple, TriplePattern};
use rustc_hash::FxHashSet;
use std::collections::HashSet;

/// A mutable set of [MatchTriple]s that can be compared with another collection.
///
/// The graph matching algorithms rewrite both compared collections in place. Implementations only
/// need to provide set semantics and a pattern lookup; no internal synchronization is expected as
/// the matcher holds exclusive access for the whole comparison.
pub trait TripleCollection {
    /// Returns the number of triples in the collection.
    fn len(&self) -> usize;

    /// Returns whether the collection has no triples.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns whether `triple` is part of the collection.
    fn contains(&self, triple: &MatchTriple) -> bool;

    /// Inserts `triple`. Returns false if the triple was already present.
    fn insert(&mut self, triple: MatchTriple) -> bool;

    /// Removes `triple`. Returns false if the triple was not present.
    fn remove(&mut self, triple: &MatchTriple) -> bool;

    /// Iterates over all triples in the collection.
    fn iter(&self) -> Box<dyn Iterator<Item = MatchTriple> + '_>;

    /// Iterates over all triples that match `pattern`.
    ///
    /// The default implementation scans the entire collection.
    fn filter<'a>(
        &'a self,
        pattern: TriplePattern<'a>,
    ) -> Box<dyn Iterator<Item = MatchTriple> + 'a> {
        Box::new(self.iter().filter(move |triple| pattern.matches(triple)))
    }

    /// Returns all blank nodes that occur as subject or object.
    fn blank_nodes(&self) -> FxHashSet<BlankNode> {
        let mut result = FxHashSet::default();
        for triple in self.iter() {
            if let Some(subject) = triple.subject.as_blank_node() {
                result.insert(subject.clone());
            }
            if let Some(object) = triple.object.as_blank_node() {
                result.insert(object.clone());
            }
        }
        result
    }
}

impl TripleCollection for FxHashSet<MatchTriple> {
    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn contains(&self, triple: &MatchTriple) -> bool {
        HashSet::contains(self, triple)
    }

    fn insert(&mut self, triple: MatchTriple) -> bool {
        HashSet::insert(self, triple)
    }

    fn remove(&mut self, triple: &MatchTriple) -> bool {
        HashSet::remove(self, triple)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = MatchTriple> + '_> {
        Box::new(HashSet::iter(self).cloned())
    }
}
