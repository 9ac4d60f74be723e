//! Error types for document tree operations

use super::NodeId;
use thiserror::Error;

/// Errors that can occur while mutating the document tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    /// The id never existed or its node was removed
    #[error("unknown node {0:?}")]
    UnknownNode(NodeId),

    /// Operation needs an element but the node is a text node
    #[error("node {0:?} is not an element")]
    NotAnElement(NodeId),

    /// Appending would make a node its own ancestor
    #[error("cannot append {child:?} inside itself ({parent:?})")]
    Cycle { parent: NodeId, child: NodeId },

    /// The document root cannot be detached
    #[error("the document root cannot be removed")]
    RootRemoval,
}

/// Result type alias for document operations
pub type DomResult<T> = Result<T, DomError>;
