//! Error types for the reference engine

use thiserror::Error;

/// Errors raised while activating or deactivating constraints
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    /// A required constraint conflicts with the active set
    #[error("unable to satisfy constraint '{constraint}': conflicts with active constraints")]
    Unsatisfiable { constraint: String },

    /// The solver already holds this constraint
    #[error("constraint '{constraint}' is already active")]
    DuplicateConstraint { constraint: String },

    /// The solver does not hold this constraint
    #[error("constraint '{constraint}' is not active")]
    UnknownConstraint { constraint: String },

    #[error("internal solver error for '{constraint}': {message}")]
    Internal { constraint: String, message: String },
}

impl EngineError {
    pub(crate) fn from_add(err: kasuari::AddConstraintError, constraint: &str) -> Self {
        let constraint = constraint.to_string();
        match err {
            kasuari::AddConstraintError::UnsatisfiableConstraint => Self::Unsatisfiable { constraint },
            kasuari::AddConstraintError::DuplicateConstraint => {
                Self::DuplicateConstraint { constraint }
            }
            kasuari::AddConstraintError::InternalSolverError(msg) => Self::Internal {
                constraint,
                message: msg.to_string(),
            },
        }
    }

    pub(crate) fn from_remove(err: kasuari::RemoveConstraintError, constraint: &str) -> Self {
        let constraint = constraint.to_string();
        match err {
            kasuari::RemoveConstraintError::UnknownConstraint => Self::UnknownConstraint { constraint },
            kasuari::RemoveConstraintError::InternalSolverError(msg) => Self::Internal {
                constraint,
                message: msg.to_string(),
            },
        }
    }

    /// Description of the constraint that failed
    pub fn constraint(&self) -> &str {
        match self {
            Self::Unsatisfiable { constraint }
            | Self::DuplicateConstraint { constraint }
            | Self::UnknownConstraint { constraint }
            | Self::Internal { constraint, .. } => constraint,
        }
    }
}
