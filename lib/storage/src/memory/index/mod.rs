mod components;
mod hash_index;

pub(super) use components::IndexComponents;
pub(super) use hash_index::MemHashTripleIndex;
