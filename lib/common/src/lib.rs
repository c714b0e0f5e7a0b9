pub mod error;
mod triple_collection;

pub use triple_collection::TripleCollection;
