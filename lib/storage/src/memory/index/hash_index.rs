use crate::memory::index::IndexComponents;
use crate::memory::object_id::{EncodedObjectId, EncodedTriple};
use rustc_hash::{FxHashMap, FxHashSet};

/// Represents the index. Each level is keyed by the component at the given position of the
/// [IndexComponents].
type IndexDataStructure =
    FxHashMap<EncodedObjectId, FxHashMap<EncodedObjectId, FxHashSet<EncodedObjectId>>>;

/// A three-level hash index over encoded triples.
///
/// Empty inner levels are removed eagerly, so the keys of the first level are exactly the terms
/// that occur at the first indexed position.
#[derive(Debug, Clone)]
pub struct MemHashTripleIndex {
    /// The configuration of the index.
    components: IndexComponents,
    /// The index.
    data: IndexDataStructure,
}

impl MemHashTripleIndex {
    /// Creates a new [MemHashTripleIndex].
    pub fn new(components: IndexComponents) -> Self {
        Self {
            components,
            data: IndexDataStructure::default(),
        }
    }

    /// Returns the index configuration.
    pub fn components(&self) -> IndexComponents {
        self.components
    }

    pub fn contains(&self, triple: &EncodedTriple) -> bool {
        let [first, second, third] = self.components.reorder_from_spo(triple.0);
        self.data
            .get(&first)
            .and_then(|level| level.get(&second))
            .is_some_and(|level| level.contains(&third))
    }

    /// Inserts a single triple.
    ///
    /// Returns false if the triple already exists in the index.
    pub fn insert(&mut self, triple: &EncodedTriple) -> bool {
        let [first, second, third] = self.components.reorder_from_spo(triple.0);
        self.data
            .entry(first)
            .or_default()
            .entry(second)
            .or_default()
            .insert(third)
    }

    /// Removes a single triple.
    ///
    /// Returns false if the triple does not exist in the index.
    pub fn remove(&mut self, triple: &EncodedTriple) -> bool {
        let [first, second, third] = self.components.reorder_from_spo(triple.0);
        let Some(first_level) = self.data.get_mut(&first) else {
            return false;
        };
        let Some(second_level) = first_level.get_mut(&second) else {
            return false;
        };
        if !second_level.remove(&third) {
            return false;
        }

        if second_level.is_empty() {
            first_level.remove(&second);
        }
        if first_level.is_empty() {
            self.data.remove(&first);
        }
        true
    }

    /// Returns all triples that match `pattern`. The pattern is given in SPO order and [None]
    /// matches any term.
    ///
    /// Any pattern can be answered by any index. Lookups are only efficient if the bound
    /// components form a prefix of the index components.
    pub fn scan(
        &self,
        pattern: [Option<EncodedObjectId>; 3],
    ) -> Box<dyn Iterator<Item = EncodedTriple> + '_> {
        let [first, second, third] = self.components.reorder_from_spo(pattern);
        let components = self.components;
        Box::new(select(&self.data, first).flat_map(move |(a, first_level)| {
            select(first_level, second).flat_map(move |(b, second_level)| {
                select_set(second_level, third)
                    .map(move |c| EncodedTriple(components.reorder_to_spo([*a, *b, *c])))
            })
        }))
    }

    /// Returns the distinct terms that occur at the first indexed position.
    pub fn scan_first_level(&self) -> impl Iterator<Item = EncodedObjectId> + '_ {
        self.data.keys().copied()
    }
}

fn select<'a, V>(
    level: &'a FxHashMap<EncodedObjectId, V>,
    key: Option<EncodedObjectId>,
) -> Box<dyn Iterator<Item = (&'a EncodedObjectId, &'a V)> + 'a>
where
    V: 'a,
{
    match key {
        Some(key) => Box::new(level.get_key_value(&key).into_iter()),
        None => Box::new(level.iter()),
    }
}

fn select_set(
    level: &FxHashSet<EncodedObjectId>,
    key: Option<EncodedObjectId>,
) -> Box<dyn Iterator<Item = &EncodedObjectId> + '_> {
    match key {
        Some(key) => Box::new(level.get(&key).into_iter()),
        None => Box::new(level.iter()),
    }
}
