//! Substitution of confirmed blank node pairs and removal of ground triples.
//!
//! Both compared graphs are rewritten in lock-step. Once a triple has no blank node left, it must
//! exist in both graphs and is removed from both. Whatever remains afterward still needs matching.

use rdf_isomorphism_common::error::{GraphNotIsomorphicError, NotIsomorphicReason};
use rdf_isomorphism_common::TripleCollection;
use rdf_isomorphism_model::{BlankNode, MappedNode, MatchTerm, MatchTriple, TriplePattern};
use rustc_hash::FxHashSet;

/// Replaces every occurrence of `node` in `graph` with `replacement`.
///
/// The affected triples are collected before the graph is modified. Returns the number of
/// replaced triples.
///
/// # Panics
///
/// Panics if `node` does not occur in `graph`, which happens if a node is grounded twice.
pub fn replace_node<G: TripleCollection + ?Sized>(
    graph: &mut G,
    node: &BlankNode,
    replacement: &MatchTerm,
) -> usize {
    let term = MatchTerm::from(node.clone());
    let mut to_remove = FxHashSet::default();
    let mut to_add = FxHashSet::default();
    let occurrences = graph
        .filter(TriplePattern::with_subject(&term))
        .chain(graph.filter(TriplePattern::with_object(&term)));
    for triple in occurrences {
        if let Some(replaced) = triple.substitute(&term, replacement) {
            to_add.insert(replaced);
            to_remove.insert(triple);
        }
    }

    assert!(
        !to_remove.is_empty(),
        "Blank node {node} does not occur in the graph. Was it already grounded?"
    );

    for triple in &to_remove {
        graph.remove(triple);
    }
    let count = to_remove.len();
    for triple in to_add {
        graph.insert(triple);
    }
    count
}

/// Removes all triples without blank nodes from both graphs.
///
/// Returns an error if one of the graphs contains a ground triple that the other graph lacks.
pub fn remove_grounded<L, R>(left: &mut L, right: &mut R) -> Result<(), GraphNotIsomorphicError>
where
    L: TripleCollection + ?Sized,
    R: TripleCollection + ?Sized,
{
    let grounded = left
        .iter()
        .filter(MatchTriple::is_ground)
        .collect::<Vec<_>>();
    remove_pairwise(left, right, grounded)?;

    if right.iter().any(|triple| triple.is_ground()) {
        return Err(NotIsomorphicReason::GroundTripleMismatch.into());
    }
    Ok(())
}

/// Removes the triples that became ground after `mapped` has been substituted into both graphs.
///
/// Only triples that contain `mapped` are inspected. All other ground triples must already have
/// been removed.
pub fn remove_grounded_around<L, R>(
    left: &mut L,
    right: &mut R,
    mapped: &MatchTerm,
) -> Result<(), GraphNotIsomorphicError>
where
    L: TripleCollection + ?Sized,
    R: TripleCollection + ?Sized,
{
    let grounded = ground_triples_around(left, mapped);
    remove_pairwise(left, right, grounded)?;

    if !ground_triples_around(right, mapped).is_empty() {
        return Err(NotIsomorphicReason::GroundTripleMismatch.into());
    }
    Ok(())
}

/// Grounds the confirmed pairing of `left_node` and `right_node`.
///
/// A new [MappedNode] is substituted for the blank nodes in their respective graph, and the
/// triples that thereby became ground are removed. Returns the substituted term.
pub fn ground_pair<L, R>(
    left: &mut L,
    right: &mut R,
    left_node: &BlankNode,
    right_node: &BlankNode,
) -> Result<MatchTerm, GraphNotIsomorphicError>
where
    L: TripleCollection + ?Sized,
    R: TripleCollection + ?Sized,
{
    let mapped = MatchTerm::from(MappedNode::new(left_node.clone(), right_node.clone()));
    replace_node(left, left_node, &mapped);
    replace_node(right, right_node, &mapped);
    remove_grounded_around(left, right, &mapped)?;
    Ok(mapped)
}

fn ground_triples_around<G: TripleCollection + ?Sized>(
    graph: &G,
    term: &MatchTerm,
) -> FxHashSet<MatchTriple> {
    graph
        .filter(TriplePattern::with_subject(term))
        .chain(graph.filter(TriplePattern::with_object(term)))
        .filter(MatchTriple::is_ground)
        .collect()
}

fn remove_pairwise<L, R>(
    left: &mut L,
    right: &mut R,
    triples: impl IntoIterator<Item = MatchTriple>,
) -> Result<(), GraphNotIsomorphicError>
where
    L: TripleCollection + ?Sized,
    R: TripleCollection + ?Sized,
{
    for triple in triples {
        if !right.remove(&triple) {
            return Err(NotIsomorphicReason::GroundTripleMismatch.into());
        }
        left.remove(&triple);
    }
    Ok(())
}
