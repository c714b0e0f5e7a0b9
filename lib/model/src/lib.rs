mod error;
mod term;
mod triple;

pub use error::*;
pub use term::*;
pub use triple::*;

// Re-export some oxrdf types.
pub use oxrdf::{
    BlankNode, BlankNodeRef, Graph, Literal, LiteralRef, NamedNode, NamedNodeRef, Subject,
    SubjectRef, Term, TermRef, Triple, TripleRef,
};
