use crate::memory::object_id::EncodedObjectId;
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Maintains a mapping between terms and object IDs in memory.
///
/// Currently, we simply use a counter to allocate new object IDs. Ids are never released, even if
/// no triple refers to the term anymore. A collection only lives for the duration of a graph
/// comparison, so the mapping does not need to be compacted.
#[derive(Debug, Clone)]
pub struct MemObjectIdMapping<TTerm> {
    /// Maps object ids to terms. The object id is the index into this vector.
    id2term: Vec<TTerm>,
    /// Maps terms to their object id.
    term2id: FxHashMap<TTerm, EncodedObjectId>,
}

impl<TTerm> Default for MemObjectIdMapping<TTerm> {
    fn default() -> Self {
        Self {
            id2term: Vec::new(),
            term2id: FxHashMap::default(),
        }
    }
}

impl<TTerm: Clone + Eq + Hash> MemObjectIdMapping<TTerm> {
    /// Returns the object id of `term`, allocating a new one if necessary.
    ///
    /// # Panics
    ///
    /// Panics if the 32-bit object id space is exhausted.
    pub fn encode(&mut self, term: &TTerm) -> EncodedObjectId {
        if let Some(object_id) = self.term2id.get(term) {
            return *object_id;
        }

        let next = u32::try_from(self.id2term.len())
            .unwrap_or_else(|_| panic!("Object id space of the mapping is exhausted."));
        let object_id = EncodedObjectId::from(next);
        self.id2term.push(term.clone());
        self.term2id.insert(term.clone(), object_id);
        object_id
    }

    /// Returns the object id of `term` without allocating a new one.
    pub fn try_get_object_id(&self, term: &TTerm) -> Option<EncodedObjectId> {
        self.term2id.get(term).copied()
    }

    /// Decodes the given `object_id`.
    ///
    /// # Panics
    ///
    /// Panics if `object_id` was not created by this mapping.
    pub fn decode(&self, object_id: EncodedObjectId) -> &TTerm {
        &self.id2term[object_id.as_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_returns_same_id_for_same_term() {
        let mut mapping = MemObjectIdMapping::default();
        let first = mapping.encode(&"a");
        let second = mapping.encode(&"b");
        assert_ne!(first, second);
        assert_eq!(mapping.encode(&"a"), first);
        assert_eq!(*mapping.decode(second), "b");
    }

    #[test]
    fn try_get_does_not_allocate() {
        let mut mapping = MemObjectIdMapping::default();
        assert_eq!(mapping.try_get_object_id(&"a"), None);
        let id = mapping.encode(&"a");
        assert_eq!(mapping.try_get_object_id(&"a"), Some(id));
    }
}
