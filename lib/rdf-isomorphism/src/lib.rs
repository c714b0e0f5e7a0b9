//! Structural equality of RDF graphs.
//!
//! Two graphs are isomorphic if renaming their blank nodes makes them equal. Blank nodes carry no
//! identity of their own, so a naive set comparison of two graphs fails as soon as a parser picked
//! different labels. This crate pairs blank nodes by iterative color refinement and falls back to
//! a bounded search for the symmetric cases that refinement cannot decide.
//!
//! ```
//! use rdf_isomorphism::are_isomorphic;
//! use rdf_isomorphism::model::{BlankNode, Graph, NamedNode, Triple};
//!
//! let knows = NamedNode::new_unchecked("http://xmlns.com/foaf/0.1/knows");
//! let mut left = Graph::new();
//! left.insert(&Triple::new(BlankNode::new_unchecked("a"), knows.clone(), BlankNode::new_unchecked("b")));
//! let mut right = Graph::new();
//! right.insert(&Triple::new(BlankNode::new_unchecked("x"), knows, BlankNode::new_unchecked("y")));
//!
//! assert!(are_isomorphic(&left, &right)?);
//! # Ok::<_, rdf_isomorphism::error::MatchingError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod error {
    pub use rdf_isomorphism_common::error::*;
    pub use rdf_isomorphism_matching::MatchingError;
    pub use rdf_isomorphism_model::UnsupportedTermError;
}

pub mod model {
    pub use rdf_isomorphism_model::*;
}

pub mod storage {
    pub use rdf_isomorphism_common::TripleCollection;
    pub use rdf_isomorphism_storage::*;
}

pub mod matching {
    pub use rdf_isomorphism_matching::*;
}

pub use rdf_isomorphism_matching::{
    are_isomorphic, GraphMatcher, MatchingConfig, ResolutionStrategy,
};
