//! Typed search errors.
//!
//! Only precondition violations are errors. An unreachable goal is reported
//! through the returned [`crate::search::path::Path`] instead.
use crate::{constants::VertexId, graph::NodeIndex};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Vertex index {0} is not part of the graph")]
    InvalidVertex(NodeIndex),

    #[error("No vertex with id {0}")]
    UnknownVertexId(VertexId),

    #[error("No vertex labeled {0:?}")]
    UnknownLabel(String),
}
