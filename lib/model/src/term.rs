use crate::UnsupportedTermError;
use oxrdf::{BlankNode, Literal, NamedNode, SubjectRef, TermRef};
use rustc_hash::FxBuildHasher;
use std::fmt::{Display, Formatter};
use std::hash::BuildHasher;

/// A term as seen by the graph matching algorithms.
///
/// Compared to a regular RDF term, a [MatchTerm] can also be a [MappedNode]. Mapped nodes are
/// synthetic ground terms that replace blank nodes once a pairing between the two compared graphs
/// has been confirmed.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub enum MatchTerm {
    NamedNode(NamedNode),
    Literal(Literal),
    BlankNode(BlankNode),
    Mapped(MappedNode),
}

impl MatchTerm {
    /// Returns whether this term has a stable identity. Everything except blank nodes is ground.
    pub fn is_ground(&self) -> bool {
        !self.is_blank_node()
    }

    pub fn is_blank_node(&self) -> bool {
        matches!(self, MatchTerm::BlankNode(_))
    }

    /// Returns the blank node if this term is one.
    pub fn as_blank_node(&self) -> Option<&BlankNode> {
        match self {
            MatchTerm::BlankNode(inner) => Some(inner),
            _ => None,
        }
    }

    /// Returns the hash of the term's identity.
    ///
    /// The value is stable for the lifetime of the process, so the same ground term yields the
    /// same hash in both compared graphs. For blank nodes the value only reflects the label and
    /// carries no structural meaning.
    pub fn identity_hash(&self) -> u64 {
        FxBuildHasher.hash_one(self)
    }
}

impl Display for MatchTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchTerm::NamedNode(inner) => write!(f, "{inner}"),
            MatchTerm::Literal(inner) => write!(f, "{inner}"),
            MatchTerm::BlankNode(inner) => write!(f, "{inner}"),
            MatchTerm::Mapped(inner) => write!(f, "{inner}"),
        }
    }
}

impl From<NamedNode> for MatchTerm {
    fn from(value: NamedNode) -> Self {
        MatchTerm::NamedNode(value)
    }
}

impl From<Literal> for MatchTerm {
    fn from(value: Literal) -> Self {
        MatchTerm::Literal(value)
    }
}

impl From<BlankNode> for MatchTerm {
    fn from(value: BlankNode) -> Self {
        MatchTerm::BlankNode(value)
    }
}

impl From<MappedNode> for MatchTerm {
    fn from(value: MappedNode) -> Self {
        MatchTerm::Mapped(value)
    }
}

impl TryFrom<TermRef<'_>> for MatchTerm {
    type Error = UnsupportedTermError;

    fn try_from(value: TermRef<'_>) -> Result<Self, Self::Error> {
        match value {
            TermRef::NamedNode(inner) => Ok(MatchTerm::NamedNode(inner.into_owned())),
            TermRef::BlankNode(inner) => Ok(MatchTerm::BlankNode(inner.into_owned())),
            TermRef::Literal(inner) => Ok(MatchTerm::Literal(inner.into_owned())),
            #[expect(unreachable_patterns, reason = "Quoted triples only exist with rdf-star")]
            other => Err(UnsupportedTermError::new(other.to_string())),
        }
    }
}

impl TryFrom<SubjectRef<'_>> for MatchTerm {
    type Error = UnsupportedTermError;

    fn try_from(value: SubjectRef<'_>) -> Result<Self, Self::Error> {
        match value {
            SubjectRef::NamedNode(inner) => Ok(MatchTerm::NamedNode(inner.into_owned())),
            SubjectRef::BlankNode(inner) => Ok(MatchTerm::BlankNode(inner.into_owned())),
            #[expect(unreachable_patterns, reason = "Quoted triples only exist with rdf-star")]
            other => Err(UnsupportedTermError::new(other.to_string())),
        }
    }
}

/// A synthetic ground node that stands for a confirmed pairing of two blank nodes.
///
/// The same [MappedNode] is substituted for `left` in the first graph and for `right` in the
/// second graph. Afterward, triples that only differed in the two blank nodes compare equal.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct MappedNode {
    left: BlankNode,
    right: BlankNode,
}

impl MappedNode {
    /// Creates a new [MappedNode] for the pairing of `left` and `right`.
    pub fn new(left: BlankNode, right: BlankNode) -> Self {
        Self { left, right }
    }

    /// The blank node of the first graph.
    pub fn left(&self) -> &BlankNode {
        &self.left
    }

    /// The blank node of the second graph.
    pub fn right(&self) -> &BlankNode {
        &self.right
    }
}

impl Display for MappedNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}={}]", self.left, self.right)
    }
}
