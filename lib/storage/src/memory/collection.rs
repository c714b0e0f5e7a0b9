use crate::memory::index::{IndexComponents, MemHashTripleIndex};
use crate::memory::object_id::{EncodedObjectId, EncodedTriple};
use crate::memory::object_id_mapping::MemObjectIdMapping;
use rdf_isomorphism_common::TripleCollection;
use rdf_isomorphism_model::{
    BlankNode, Graph, MatchTerm, MatchTriple, NamedNode, TriplePattern, UnsupportedTermError,
};
use rustc_hash::FxHashSet;

/// An in-memory [TripleCollection] that answers pattern lookups with hash indexes.
///
/// Terms are encoded into dense object ids. The collection maintains three indexes (SPO, POS, and
/// OSP) such that every combination of bound components has an index where the bound components
/// form a prefix.
///
/// Predicates are encoded by a separate mapping, as they are always named nodes.
#[derive(Debug, Clone)]
pub struct MemTripleCollection {
    terms: MemObjectIdMapping<MatchTerm>,
    predicates: MemObjectIdMapping<NamedNode>,
    indexes: [MemHashTripleIndex; 3],
    len: usize,
}

impl Default for MemTripleCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl MemTripleCollection {
    /// Creates a new empty [MemTripleCollection].
    pub fn new() -> Self {
        Self {
            terms: MemObjectIdMapping::default(),
            predicates: MemObjectIdMapping::default(),
            indexes: [
                MemHashTripleIndex::new(IndexComponents::SPO),
                MemHashTripleIndex::new(IndexComponents::POS),
                MemHashTripleIndex::new(IndexComponents::OSP),
            ],
            len: 0,
        }
    }

    /// Creates a copy of any other [TripleCollection].
    pub fn copy_of(collection: &(impl TripleCollection + ?Sized)) -> Self {
        collection.iter().collect()
    }

    fn encode(&mut self, triple: &MatchTriple) -> EncodedTriple {
        EncodedTriple([
            self.terms.encode(&triple.subject),
            self.predicates.encode(&triple.predicate),
            self.terms.encode(&triple.object),
        ])
    }

    fn try_encode(&self, triple: &MatchTriple) -> Option<EncodedTriple> {
        Some(EncodedTriple([
            self.terms.try_get_object_id(&triple.subject)?,
            self.predicates.try_get_object_id(&triple.predicate)?,
            self.terms.try_get_object_id(&triple.object)?,
        ]))
    }

    fn decode(&self, triple: EncodedTriple) -> MatchTriple {
        let [subject, predicate, object] = triple.0;
        MatchTriple {
            subject: self.terms.decode(subject).clone(),
            predicate: self.predicates.decode(predicate).clone(),
            object: self.terms.decode(object).clone(),
        }
    }

    /// Returns the index whose leading components cover most of the bound components.
    fn best_index(&self, pattern: [Option<EncodedObjectId>; 3]) -> &MemHashTripleIndex {
        let bound = pattern.map(|component| component.is_some());
        self.indexes
            .iter()
            .max_by_key(|index| index.components().bound_prefix_len(bound))
            .unwrap_or(&self.indexes[0])
    }
}

impl TripleCollection for MemTripleCollection {
    fn len(&self) -> usize {
        self.len
    }

    fn contains(&self, triple: &MatchTriple) -> bool {
        self.try_encode(triple)
            .is_some_and(|encoded| self.indexes[0].contains(&encoded))
    }

    fn insert(&mut self, triple: MatchTriple) -> bool {
        let encoded = self.encode(&triple);
        if !self.indexes[0].insert(&encoded) {
            return false;
        }

        for index in &mut self.indexes[1..] {
            index.insert(&encoded);
        }
        self.len += 1;
        true
    }

    fn remove(&mut self, triple: &MatchTriple) -> bool {
        let Some(encoded) = self.try_encode(triple) else {
            return false;
        };
        if !self.indexes[0].remove(&encoded) {
            return false;
        }

        for index in &mut self.indexes[1..] {
            index.remove(&encoded);
        }
        self.len -= 1;
        true
    }

    fn iter(&self) -> Box<dyn Iterator<Item = MatchTriple> + '_> {
        Box::new(
            self.indexes[0]
                .scan([None, None, None])
                .map(|triple| self.decode(triple)),
        )
    }

    fn filter<'a>(
        &'a self,
        pattern: TriplePattern<'a>,
    ) -> Box<dyn Iterator<Item = MatchTriple> + 'a> {
        let subject = pattern.subject.map(|s| self.terms.try_get_object_id(s));
        let predicate = pattern
            .predicate
            .map(|p| self.predicates.try_get_object_id(p));
        let object = pattern.object.map(|o| self.terms.try_get_object_id(o));

        // A bound term that was never encoded cannot match anything.
        let (Some(subject), Some(predicate), Some(object)) = (
            subject.map_or(Some(None), |s| s.map(Some)),
            predicate.map_or(Some(None), |p| p.map(Some)),
            object.map_or(Some(None), |o| o.map(Some)),
        ) else {
            return Box::new(std::iter::empty());
        };

        let encoded = [subject, predicate, object];
        Box::new(
            self.best_index(encoded)
                .scan(encoded)
                .map(|triple| self.decode(triple)),
        )
    }

    fn blank_nodes(&self) -> FxHashSet<BlankNode> {
        let subjects = self.indexes[0].scan_first_level();
        let objects = self.indexes[2].scan_first_level();
        subjects
            .chain(objects)
            .filter_map(|id| self.terms.decode(id).as_blank_node().cloned())
            .collect()
    }
}

impl FromIterator<MatchTriple> for MemTripleCollection {
    fn from_iter<T: IntoIterator<Item = MatchTriple>>(iter: T) -> Self {
        let mut result = Self::new();
        result.extend(iter);
        result
    }
}

impl Extend<MatchTriple> for MemTripleCollection {
    fn extend<T: IntoIterator<Item = MatchTriple>>(&mut self, iter: T) {
        for triple in iter {
            self.insert(triple);
        }
    }
}

impl TryFrom<&Graph> for MemTripleCollection {
    type Error = UnsupportedTermError;

    fn try_from(graph: &Graph) -> Result<Self, Self::Error> {
        graph.iter().map(MatchTriple::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p() -> NamedNode {
        NamedNode::new_unchecked("http://example.org/p")
    }

    fn q() -> NamedNode {
        NamedNode::new_unchecked("http://example.org/q")
    }

    fn bnode(id: &str) -> MatchTerm {
        MatchTerm::from(BlankNode::new_unchecked(id))
    }

    fn iri(iri: &str) -> MatchTerm {
        MatchTerm::from(NamedNode::new_unchecked(iri))
    }

    fn collection() -> MemTripleCollection {
        [
            MatchTriple::new(bnode("a"), p(), bnode("b")),
            MatchTriple::new(bnode("b"), q(), iri("http://example.org/u")),
            MatchTriple::new(bnode("a"), p(), bnode("a")),
        ]
        .into_iter()
        .collect()
    }

    fn sorted(triples: impl Iterator<Item = MatchTriple>) -> Vec<String> {
        let mut result = triples.map(|t| t.to_string()).collect::<Vec<_>>();
        result.sort();
        result
    }

    #[test]
    fn insert_has_set_semantics() {
        let mut collection = collection();
        assert_eq!(collection.len(), 3);
        assert!(!collection.insert(MatchTriple::new(bnode("a"), p(), bnode("b"))));
        assert_eq!(collection.len(), 3);
    }

    #[test]
    fn remove_updates_all_indexes() {
        let mut collection = collection();
        let triple = MatchTriple::new(bnode("a"), p(), bnode("b"));
        assert!(collection.remove(&triple));
        assert!(!collection.remove(&triple));
        assert!(!collection.contains(&triple));
        assert_eq!(collection.len(), 2);
        assert_eq!(
            collection.filter(TriplePattern::with_object(&bnode("b"))).count(),
            0
        );
    }

    #[test]
    fn filter_by_subject() {
        let collection = collection();
        let a = bnode("a");
        insta::assert_debug_snapshot!(sorted(collection.filter(TriplePattern::with_subject(&a))), @r#"
        [
            "_:a <http://example.org/p> _:a",
            "_:a <http://example.org/p> _:b",
        ]
        "#);
    }

    #[test]
    fn filter_by_object_and_predicate() {
        let collection = collection();
        let b = bnode("b");
        let p = p();
        let pattern = TriplePattern {
            subject: None,
            predicate: Some(&p),
            object: Some(&b),
        };
        assert_eq!(
            sorted(collection.filter(pattern)),
            vec!["_:a <http://example.org/p> _:b"]
        );
    }

    #[test]
    fn filter_with_unknown_term_is_empty() {
        let collection = collection();
        let unknown = bnode("unknown");
        assert_eq!(
            collection.filter(TriplePattern::with_subject(&unknown)).count(),
            0
        );
    }

    #[test]
    fn blank_nodes_ignores_removed_triples() {
        let mut collection = collection();
        collection.remove(&MatchTriple::new(bnode("a"), p(), bnode("b")));
        collection.remove(&MatchTriple::new(bnode("a"), p(), bnode("a")));

        let nodes = collection.blank_nodes();
        assert_eq!(nodes.len(), 1);
        assert!(nodes.contains(&BlankNode::new_unchecked("b")));
    }

    #[test]
    fn try_from_graph() {
        let mut graph = Graph::new();
        graph.insert(&rdf_isomorphism_model::Triple::new(
            BlankNode::new_unchecked("a"),
            p(),
            NamedNode::new_unchecked("http://example.org/u"),
        ));

        let collection = MemTripleCollection::try_from(&graph).unwrap();
        assert_eq!(
            sorted(collection.iter()),
            vec!["_:a <http://example.org/p> <http://example.org/u>"]
        );
    }

    #[test]
    fn copy_of_other_collection() {
        let original = collection();
        let copy = MemTripleCollection::copy_of(&original);
        assert_eq!(sorted(copy.iter()), sorted(original.iter()));
    }
}
