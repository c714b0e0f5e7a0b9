//! An in-memory triple collection with hash indexes.
mod collection;
mod index;
mod object_id;
mod object_id_mapping;

pub use collection::MemTripleCollection;
