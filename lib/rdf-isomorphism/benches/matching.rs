use codspeed_criterion_compat::{criterion_group, criterion_main, Criterion};
use rdf_isomorphism::model::{BlankNode, MatchTriple, NamedNode};
use rdf_isomorphism::storage::memory::MemTripleCollection;
use rdf_isomorphism::{GraphMatcher, MatchingConfig, ResolutionStrategy};

fn matching_tree(c: &mut Criterion) {
    let left = generate_tree("l", 2_000);
    let right = generate_tree("r", 2_000);
    c.bench_function("GraphMatcher::valid_mapping (tree)", |b| {
        b.iter(|| {
            GraphMatcher::default().valid_mapping(&left, &right).unwrap();
        });
    });
}

fn matching_cycle(c: &mut Criterion) {
    let left = generate_cycle("l", 200);
    let right = generate_cycle("r", 200);
    let matcher = GraphMatcher::new(
        MatchingConfig::new().with_resolution(ResolutionStrategy::Backtracking),
    );
    c.bench_function("GraphMatcher::valid_mapping (cycle)", |b| {
        b.iter(|| {
            matcher.valid_mapping(&left, &right).unwrap();
        });
    });
}

criterion_group!(matching, matching_tree, matching_cycle);
criterion_main!(matching);

fn predicate(i: usize) -> NamedNode {
    NamedNode::new_unchecked(format!("http://example.com/predicate{}", i % 7))
}

fn bnode(prefix: &str, i: usize) -> BlankNode {
    BlankNode::new_unchecked(format!("{prefix}{i}"))
}

/// A binary tree of blank nodes with a named root.
fn generate_tree(prefix: &str, count: usize) -> MemTripleCollection {
    let root = NamedNode::new_unchecked("http://example.com/root");
    let mut result: MemTripleCollection = [MatchTriple::new(root, predicate(0), bnode(prefix, 1))]
        .into_iter()
        .collect();
    result.extend((2..count).map(|i| {
        MatchTriple::new(bnode(prefix, i / 2), predicate(i), bnode(prefix, i))
    }));
    result
}

fn generate_cycle(prefix: &str, count: usize) -> MemTripleCollection {
    (0..count)
        .map(|i| {
            MatchTriple::new(
                bnode(prefix, i),
                predicate(0),
                bnode(prefix, (i + 1) % count),
            )
        })
        .collect()
}
