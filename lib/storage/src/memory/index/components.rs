use std::fmt::{Display, Formatter};

/// Represents a list of *disjunct* index components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexComponents([IndexComponent; 3]);

impl IndexComponents {
    /// An SPO index.
    pub const SPO: IndexComponents = IndexComponents([
        IndexComponent::Subject,
        IndexComponent::Predicate,
        IndexComponent::Object,
    ]);

    /// A POS index.
    pub const POS: IndexComponents = IndexComponents([
        IndexComponent::Predicate,
        IndexComponent::Object,
        IndexComponent::Subject,
    ]);

    /// An OSP index.
    pub const OSP: IndexComponents = IndexComponents([
        IndexComponent::Object,
        IndexComponent::Subject,
        IndexComponent::Predicate,
    ]);

    /// Reorders `values`, given in SPO order, into the order of this index.
    pub fn reorder_from_spo<T: Copy>(&self, values: [T; 3]) -> [T; 3] {
        self.0.map(|component| values[component.spo_index()])
    }

    /// Reorders `values`, given in the order of this index, into SPO order.
    pub fn reorder_to_spo<T: Copy>(&self, values: [T; 3]) -> [T; 3] {
        let mut result = values;
        for (value, component) in values.into_iter().zip(self.0) {
            result[component.spo_index()] = value;
        }
        result
    }

    /// Returns how many leading components of this index are bound in `bound` (SPO order).
    pub fn bound_prefix_len(&self, bound: [bool; 3]) -> usize {
        self.0
            .iter()
            .take_while(|component| bound[component.spo_index()])
            .count()
    }
}

impl Display for IndexComponents {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for component in self.0.iter() {
            write!(f, "{component}")?;
        }
        Ok(())
    }
}

/// Represents what part of an RDF triple is indexed at the given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IndexComponent {
    /// The subject
    Subject,
    /// The predicate
    Predicate,
    /// The object
    Object,
}

impl Display for IndexComponent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexComponent::Subject => write!(f, "S"),
            IndexComponent::Predicate => write!(f, "P"),
            IndexComponent::Object => write!(f, "O"),
        }
    }
}

impl IndexComponent {
    /// Returns the index of the component in an SPO triple pattern.
    pub fn spo_index(&self) -> usize {
        match self {
            IndexComponent::Subject => 0,
            IndexComponent::Predicate => 1,
            IndexComponent::Object => 2,
        }
    }
}
