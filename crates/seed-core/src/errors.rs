//! Error types for the Seed layout engine.

use thiserror::Error;

use crate::types::Entity;

/// Top-level error type for the Seed layout engine.
#[derive(Debug, Error, PartialEq)]
pub enum SeedError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error(transparent)]
    Viewport(#[from] ViewportError),
}

/// Malformed box trees, detected while linearizing.
///
/// All of these abort the layout call before any shape is written.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("Multiple root boxes: {first} and {second} have no parent")]
    MultipleRoots { first: Entity, second: Entity },

    #[error("No root box among {boxes} boxes")]
    MissingRoot { boxes: usize },

    #[error("Inconsistent sibling chain at box {entity}: {fault}")]
    InconsistentSibling { entity: Entity, fault: SiblingFault },

    #[error("Box {entity} references unknown box {target}")]
    UnknownBox { entity: Entity, target: Entity },

    #[error("Box tree cycle detected involving box {entity}")]
    CycleDetected { entity: Entity },
}

/// Ways a previous-sibling chain can disagree with the parent links.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SiblingFault {
    #[error("previous sibling {sibling} has a different parent")]
    ParentMismatch { sibling: Entity },

    #[error("previous sibling {sibling} is already claimed by another box")]
    SharedPrevious { sibling: Entity },

    #[error("parent {parent} already has a first child")]
    DuplicateFirstChild { parent: Entity },
}

/// Errors configuring the viewport.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ViewportError {
    #[error("Viewport must have positive size, got {width}x{height}")]
    Empty { width: u32, height: u32 },
}
