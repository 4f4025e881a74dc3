/*!
# Errors

The failure taxonomy of the crate. All variants describe *recoverable* conditions
that are returned to the caller; the graph is left unchanged by any rejected
mutation and remains usable afterwards. Contract violations at the index level
(out-of-range nodes, self-loops handed to the matrix, querying a stale engine)
are programming errors and panic instead.
*/

use thiserror::Error;

/// Rejected mutations and failed lookups on a [`LabeledGraph`](crate::graph::LabeledGraph)
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// The label failed [`Label::is_valid`](crate::repr::Label::is_valid), e.g. an empty word
    #[error("label is not a valid vertex label")]
    InvalidLabel,

    /// A vertex with an equal label (by value, not identity) already exists
    #[error("a vertex with this label already exists")]
    DuplicateVertex,

    /// No vertex carries the given label
    #[error("no vertex with this label exists")]
    VertexNotFound,

    /// Both endpoints refer to the same vertex; the diagonal stays false
    #[error("self-loops are not allowed")]
    SelfLoop,
}

/// Failures while (re-)building a graph from a word source
#[derive(Debug, Error)]
pub enum BuildError {
    /// The word source could not be read or iterated; the graph is left empty
    #[error("cannot read word source: {0}")]
    SourceUnavailable(#[from] std::io::Error),
}

/// Failed shortest-path queries. `Unreachable` is a valid answer about two known
/// vertices and deliberately distinct from `NotFound`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    /// At least one queried label is absent from the graph
    #[error("word is not in the graph")]
    NotFound,

    /// Both words exist but no connecting path does
    #[error("no ladder connects the two words")]
    Unreachable,
}
