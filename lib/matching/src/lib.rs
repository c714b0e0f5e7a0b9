//! Decides whether two RDF graphs are equal up to the labelling of their blank nodes.
//!
//! The [EquivalenceRefiner] iteratively hashes every blank node from the edges it takes part in.
//! Blank nodes whose hash is unique in both graphs are paired and replaced by a synthetic ground
//! node, which in turn refines the hashes of their neighbours. Groups of blank nodes that cannot
//! be told apart by hashing alone are handed to a [BijectionResolver].
//!
//! Most users only need the [GraphMatcher].

mod config;
mod error;
pub mod grounding;
mod matcher;
mod property;
mod refiner;
pub mod resolver;

pub use config::{MatchingConfig, ResolutionStrategy};
pub use error::MatchingError;
pub use matcher::{are_isomorphic, GraphMatcher};
pub use property::{BlankNodeHashes, Property, PropertyHasher};
pub use refiner::{BlankNodeMapping, EquivalenceRefiner, MatchingGroup, RefinementOutcome};
pub use resolver::BijectionResolver;
