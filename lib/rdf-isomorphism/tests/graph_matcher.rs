#![cfg(test)]
#![allow(clippy::panic_in_result_fn)]

use rdf_isomorphism::error::{MatchingError, NotIsomorphicReason};
use rdf_isomorphism::matching::BlankNodeMapping;
use rdf_isomorphism::model::{BlankNode, MatchTerm, MatchTriple, NamedNode};
use rdf_isomorphism::storage::memory::MemTripleCollection;
use rdf_isomorphism::storage::TripleCollection;
use rdf_isomorphism::{GraphMatcher, MatchingConfig, ResolutionStrategy};
use std::collections::BTreeSet;

fn u1() -> NamedNode {
    NamedNode::new_unchecked("http://example.org/u1")
}

/// Hands out fresh blank nodes, like a parser would.
struct BlankNodes {
    prefix: &'static str,
    next: usize,
}

impl BlankNodes {
    fn new(prefix: &'static str) -> Self {
        Self { prefix, next: 0 }
    }

    fn fresh(&mut self) -> MatchTerm {
        self.next += 1;
        BlankNode::new_unchecked(format!("{}{}", self.prefix, self.next)).into()
    }
}

/// A directed cycle of `size` edges that starts and ends at `first`.
fn circle(nodes: &mut BlankNodes, size: usize, first: MatchTerm) -> Vec<MatchTriple> {
    let mut result = Vec::new();
    let mut last = first.clone();
    for _ in 0..(size - 1) {
        let next = nodes.fresh();
        result.push(MatchTriple::new(last, u1(), next.clone()));
        last = next;
    }
    result.push(MatchTriple::new(last, u1(), first));
    result
}

/// A directed path of `size` edges that starts at `first`.
fn line(nodes: &mut BlankNodes, size: usize, first: MatchTerm) -> Vec<MatchTriple> {
    let mut result = Vec::new();
    let mut last = first;
    for _ in 0..size {
        let next = nodes.fresh();
        result.push(MatchTriple::new(last, u1(), next.clone()));
        last = next;
    }
    result
}

fn graph(triples: impl IntoIterator<Item = MatchTriple>) -> MemTripleCollection {
    triples.into_iter().collect()
}

fn apply(graph: &MemTripleCollection, mapping: &BlankNodeMapping) -> BTreeSet<String> {
    let map = |term: MatchTerm| match term.as_blank_node() {
        Some(node) => MatchTerm::from(mapping[node].clone()),
        None => term,
    };
    graph
        .iter()
        .map(|triple| MatchTriple::new(map(triple.subject), triple.predicate, map(triple.object)))
        .map(|triple| triple.to_string())
        .collect()
}

fn strings(graph: &MemTripleCollection) -> BTreeSet<String> {
    graph.iter().map(|triple| triple.to_string()).collect()
}

/// Returns the mapping found by every resolution strategy and checks that it is valid.
fn valid_mapping(
    left: &MemTripleCollection,
    right: &MemTripleCollection,
) -> Result<BlankNodeMapping, MatchingError> {
    let mut result = None;
    for strategy in [ResolutionStrategy::Backtracking, ResolutionStrategy::Permutation] {
        let matcher = GraphMatcher::new(MatchingConfig::new().with_resolution(strategy));
        let mapping = matcher.valid_mapping(left, right)?;
        assert_eq!(apply(left, &mapping), strings(right), "{strategy:?}");
        result = Some(mapping);
    }
    Ok(result.unwrap_or_default())
}

fn assert_not_isomorphic(left: &MemTripleCollection, right: &MemTripleCollection) {
    for strategy in [ResolutionStrategy::Backtracking, ResolutionStrategy::Permutation] {
        let matcher = GraphMatcher::new(MatchingConfig::new().with_resolution(strategy));
        assert!(!matcher.is_isomorphic(left, right).unwrap(), "{strategy:?}");
        assert!(!matcher.is_isomorphic(right, left).unwrap(), "{strategy:?}");
    }
}

#[test]
fn empty_graphs() {
    let empty = MemTripleCollection::new();
    let mapping = valid_mapping(&empty, &empty).unwrap();
    assert!(mapping.is_empty());
}

#[test]
fn ground_triple_against_empty_graph() {
    assert_not_isomorphic(
        &graph([MatchTriple::new(u1(), u1(), u1())]),
        &MemTripleCollection::new(),
    );
}

#[test]
fn equal_ground_graphs() {
    let triples = [MatchTriple::new(u1(), u1(), u1())];
    let mapping = valid_mapping(&graph(triples.clone()), &graph(triples)).unwrap();
    assert!(mapping.is_empty());
}

#[test]
fn different_ground_graphs() {
    let other = NamedNode::new_unchecked("http://example.org/u2");
    let error = GraphMatcher::default()
        .valid_mapping(
            &graph([MatchTriple::new(u1(), u1(), u1())]),
            &graph([MatchTriple::new(u1(), u1(), other)]),
        )
        .unwrap_err();
    let MatchingError::NotIsomorphic(error) = error else {
        panic!("Unexpected error: {error}");
    };
    assert_eq!(error.reason(), &NotIsomorphicReason::GroundTripleMismatch);
}

#[test]
fn single_blank_object() {
    let (mut l, mut r) = (BlankNodes::new("l"), BlankNodes::new("r"));
    let left = graph([MatchTriple::new(u1(), u1(), l.fresh())]);
    let right = graph([MatchTriple::new(u1(), u1(), r.fresh())]);
    assert_eq!(valid_mapping(&left, &right).unwrap().len(), 1);
}

#[test]
fn blank_subject_and_object() {
    let (mut l, mut r) = (BlankNodes::new("l"), BlankNodes::new("r"));
    let left = graph([MatchTriple::new(l.fresh(), u1(), l.fresh())]);
    let right = graph([MatchTriple::new(r.fresh(), u1(), r.fresh())]);
    assert_eq!(valid_mapping(&left, &right).unwrap().len(), 2);
}

#[test]
fn shared_object_against_single_edge() {
    let (mut l, mut r) = (BlankNodes::new("l"), BlankNodes::new("r"));
    let shared = l.fresh();
    let left = graph([
        MatchTriple::new(l.fresh(), u1(), shared.clone()),
        MatchTriple::new(l.fresh(), u1(), shared),
    ]);
    let right = graph([MatchTriple::new(r.fresh(), u1(), r.fresh())]);
    assert_not_isomorphic(&left, &right);
}

#[test]
fn circle_of_two() {
    let (mut l, mut r) = (BlankNodes::new("l"), BlankNodes::new("r"));
    let first = l.fresh();
    let left = graph(circle(&mut l, 2, first));
    let first = r.fresh();
    let right = graph(circle(&mut r, 2, first));
    assert_eq!(valid_mapping(&left, &right).unwrap().len(), 2);
}

#[test]
fn circle_of_five() {
    let (mut l, mut r) = (BlankNodes::new("l"), BlankNodes::new("r"));
    let first = l.fresh();
    let left = graph(circle(&mut l, 5, first));
    let first = r.fresh();
    let right = graph(circle(&mut r, 5, first));
    assert_eq!(valid_mapping(&left, &right).unwrap().len(), 5);
}

#[test]
fn circles_crossing_in_ground_node() {
    let crossing = MatchTerm::from(NamedNode::new_unchecked("http://example.org/"));
    let (mut l, mut r) = (BlankNodes::new("l"), BlankNodes::new("r"));
    let left = graph(
        circle(&mut l, 2, crossing.clone())
            .into_iter()
            .chain(circle(&mut l, 3, crossing.clone())),
    );
    let right = graph(
        circle(&mut r, 2, crossing.clone())
            .into_iter()
            .chain(circle(&mut r, 3, crossing)),
    );
    assert_eq!(left.len(), 5);
    assert_eq!(valid_mapping(&left, &right).unwrap().len(), 3);
}

#[test]
fn circles_crossing_in_blank_node() {
    let (mut l, mut r) = (BlankNodes::new("l"), BlankNodes::new("r"));
    let crossing = l.fresh();
    let left = graph(
        circle(&mut l, 2, crossing.clone())
            .into_iter()
            .chain(circle(&mut l, 3, crossing)),
    );
    let crossing = r.fresh();
    let right = graph(
        circle(&mut r, 2, crossing.clone())
            .into_iter()
            .chain(circle(&mut r, 3, crossing)),
    );
    assert_eq!(left.len(), 5);
    assert_eq!(valid_mapping(&left, &right).unwrap().len(), 4);
}

#[test]
fn circles_of_different_sizes() {
    let (mut l, mut r) = (BlankNodes::new("l"), BlankNodes::new("r"));
    let crossing = l.fresh();
    let left = graph(
        circle(&mut l, 2, crossing.clone())
            .into_iter()
            .chain(circle(&mut l, 4, crossing)),
    );
    let crossing = r.fresh();
    let right = graph(
        circle(&mut r, 3, crossing.clone())
            .into_iter()
            .chain(circle(&mut r, 3, crossing)),
    );
    assert_eq!(left.len(), 6);
    assert_eq!(right.len(), 6);
    assert_not_isomorphic(&left, &right);
}

#[test]
fn lines_from_same_start() {
    let (mut l, mut r) = (BlankNodes::new("l"), BlankNodes::new("r"));
    let start = l.fresh();
    let left = graph(
        line(&mut l, 4, start.clone())
            .into_iter()
            .chain(line(&mut l, 5, start)),
    );
    let start = r.fresh();
    let right = graph(
        line(&mut r, 5, start.clone())
            .into_iter()
            .chain(line(&mut r, 4, start)),
    );
    assert_eq!(left.len(), 9);
    assert_eq!(valid_mapping(&left, &right).unwrap().len(), 10);
}

#[test]
fn lines_of_different_lengths() {
    let (mut l, mut r) = (BlankNodes::new("l"), BlankNodes::new("r"));
    let start = l.fresh();
    let left = graph(
        line(&mut l, 4, start.clone())
            .into_iter()
            .chain(line(&mut l, 5, start)),
    );
    let start = r.fresh();
    let right = graph(
        line(&mut r, 3, start.clone())
            .into_iter()
            .chain(line(&mut r, 3, start)),
    );
    let error = GraphMatcher::default()
        .valid_mapping(&left, &right)
        .unwrap_err();
    let MatchingError::NotIsomorphic(error) = error else {
        panic!("Unexpected error: {error}");
    };
    assert_eq!(
        error.reason(),
        &NotIsomorphicReason::TripleCountMismatch { left: 9, right: 6 }
    );
}

#[test]
fn self_loop_against_edge() {
    let a = MatchTerm::from(BlankNode::new_unchecked("a"));
    let left = graph([MatchTriple::new(a.clone(), u1(), a)]);
    let right = graph([MatchTriple::new(
        BlankNode::new_unchecked("x"),
        u1(),
        BlankNode::new_unchecked("y"),
    )]);
    assert_not_isomorphic(&left, &right);
}

#[test]
fn same_labels_in_both_graphs() {
    // The labels agree, but the structure is mirrored.
    let a = MatchTerm::from(BlankNode::new_unchecked("a"));
    let b = MatchTerm::from(BlankNode::new_unchecked("b"));
    let left = graph([
        MatchTriple::new(u1(), u1(), a.clone()),
        MatchTriple::new(a.clone(), u1(), b.clone()),
    ]);
    let right = graph([
        MatchTriple::new(u1(), u1(), b.clone()),
        MatchTriple::new(b, u1(), a),
    ]);

    let mapping = valid_mapping(&left, &right).unwrap();
    insta::assert_debug_snapshot!(
        mapping
            .iter()
            .map(|(from, to)| format!("{from} -> {to}"))
            .collect::<BTreeSet<_>>(),
        @r#"
    {
        "_:a -> _:b",
        "_:b -> _:a",
    }
    "#
    );
}

#[test]
fn large_symmetric_group_exceeds_permutation_limit() {
    let (mut l, mut r) = (BlankNodes::new("l"), BlankNodes::new("r"));
    let first = l.fresh();
    let left = graph(circle(&mut l, 9, first));
    let first = r.fresh();
    let right = graph(circle(&mut r, 9, first));

    let permutation = GraphMatcher::new(
        MatchingConfig::new().with_resolution(ResolutionStrategy::Permutation),
    );
    assert!(matches!(
        permutation.valid_mapping(&left, &right),
        Err(MatchingError::GroupTooLarge {
            size: 9,
            max_size: 8
        })
    ));

    let backtracking = GraphMatcher::default();
    assert_eq!(backtracking.valid_mapping(&left, &right).unwrap().len(), 9);
}
