use std::fmt::{Display, Formatter};

/// The encoded object id represents a term in the storage layer.
///
/// Ids are allocated by a [MemObjectIdMapping](super::object_id_mapping::MemObjectIdMapping) and
/// are only meaningful together with the mapping that created them.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
pub struct EncodedObjectId(u32);

impl EncodedObjectId {
    pub fn as_index(&self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for EncodedObjectId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl Display for EncodedObjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A triple of object ids in subject, predicate, object order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EncodedTriple(pub [EncodedObjectId; 3]);
