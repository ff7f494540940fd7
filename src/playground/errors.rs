//! Operation errors
//!
//! This module defines [`OperationError`], the outcome of an intent that was
//! rejected. None of these are fatal: the playground reports them and keeps
//! running with its state untouched.

use super::intent::IntentKind;
use crate::structure::StructureKind;
use std::fmt;

/// Reasons an intent is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    /// Add-type intent without a value (ignored, nothing is logged)
    Validation { intent: IntentKind },

    /// Remove-type intent on an empty structure (logged)
    Underflow { structure: StructureKind },

    /// Intent that belongs to a different structure kind (ignored)
    Mismatch {
        intent: IntentKind,
        structure: StructureKind,
    },
}

impl OperationError {
    /// Check if the rejection produces a log entry
    pub fn is_logged(&self) -> bool {
        matches!(self, OperationError::Underflow { .. })
    }
}

impl fmt::Display for OperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationError::Validation { intent } => {
                write!(f, "{} requires a value", intent)
            }
            OperationError::Underflow { structure } => {
                write!(f, "{} Underflow", structure)
            }
            OperationError::Mismatch { intent, structure } => {
                write!(f, "{} is not a {} operation", intent, structure)
            }
        }
    }
}

impl std::error::Error for OperationError {}
