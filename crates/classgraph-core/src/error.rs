//! Errors raised by workspace mutations and vertex updates

use thiserror::Error;

/// Resolution never fails; only edits to the workspace do.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HierarchyError {
    #[error("class not found in workspace: {0}")]
    ClassNotFound(String),

    #[error("class already defined in workspace: {0}")]
    ClassExists(String),

    #[error("descriptor for {found} cannot replace vertex data of {expected}")]
    NameMismatch { expected: String, found: String },

    #[error("class {0} lists itself as a supertype")]
    SelfInheritance(String),
}

pub type Result<T> = std::result::Result<T, HierarchyError>;
