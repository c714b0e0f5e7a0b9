use crate::{MatchTerm, UnsupportedTermError};
use oxrdf::{NamedNode, Triple, TripleRef};
use std::fmt::{Display, Formatter};

/// A triple whose subject and object are [MatchTerm]s.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct MatchTriple {
    pub subject: MatchTerm,
    pub predicate: NamedNode,
    pub object: MatchTerm,
}

impl MatchTriple {
    /// Creates a new [MatchTriple].
    pub fn new(
        subject: impl Into<MatchTerm>,
        predicate: impl Into<NamedNode>,
        object: impl Into<MatchTerm>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// Returns whether neither the subject nor the object is a blank node.
    pub fn is_ground(&self) -> bool {
        self.subject.is_ground() && self.object.is_ground()
    }

    /// Returns a copy of this triple where every occurrence of `from` is replaced by `to`.
    ///
    /// Returns [None] if `from` occurs neither as subject nor as object.
    pub fn substitute(&self, from: &MatchTerm, to: &MatchTerm) -> Option<MatchTriple> {
        let subject_matches = self.subject == *from;
        let object_matches = self.object == *from;
        if !subject_matches && !object_matches {
            return None;
        }

        Some(MatchTriple {
            subject: if subject_matches {
                to.clone()
            } else {
                self.subject.clone()
            },
            predicate: self.predicate.clone(),
            object: if object_matches {
                to.clone()
            } else {
                self.object.clone()
            },
        })
    }
}

impl Display for MatchTriple {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)
    }
}

impl TryFrom<TripleRef<'_>> for MatchTriple {
    type Error = UnsupportedTermError;

    fn try_from(value: TripleRef<'_>) -> Result<Self, Self::Error> {
        Ok(Self {
            subject: MatchTerm::try_from(value.subject)?,
            predicate: value.predicate.into_owned(),
            object: MatchTerm::try_from(value.object)?,
        })
    }
}

impl TryFrom<&Triple> for MatchTriple {
    type Error = UnsupportedTermError;

    fn try_from(value: &Triple) -> Result<Self, Self::Error> {
        Self::try_from(value.as_ref())
    }
}

/// A pattern for looking up triples. A [None] component matches any term.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TriplePattern<'pattern> {
    pub subject: Option<&'pattern MatchTerm>,
    pub predicate: Option<&'pattern NamedNode>,
    pub object: Option<&'pattern MatchTerm>,
}

impl<'pattern> TriplePattern<'pattern> {
    /// A pattern that matches every triple.
    pub fn any() -> Self {
        Self::default()
    }

    /// A pattern that matches all triples with the given subject.
    pub fn with_subject(subject: &'pattern MatchTerm) -> Self {
        Self {
            subject: Some(subject),
            ..Self::default()
        }
    }

    /// A pattern that matches all triples with the given object.
    pub fn with_object(object: &'pattern MatchTerm) -> Self {
        Self {
            object: Some(object),
            ..Self::default()
        }
    }

    /// Returns whether `triple` adheres to this pattern.
    pub fn matches(&self, triple: &MatchTriple) -> bool {
        self.subject.is_none_or(|s| *s == triple.subject)
            && self.predicate.is_none_or(|p| *p == triple.predicate)
            && self.object.is_none_or(|o| *o == triple.object)
    }
}
