//! # Error Types
//!
//! Structured error types for matprop_core. Lookups that fail carry enough
//! context (material, property, condition) to be diagnosed without a stack
//! trace, and every error serializes to JSON for log pipelines and tooling.
//!
//! ## Example
//!
//! ```rust
//! use matprop_core::errors::{MatError, MatResult};
//!
//! fn validate_axis(temps_k: &[f64]) -> MatResult<()> {
//!     if temps_k.is_empty() {
//!         return Err(MatError::InvalidPropertyData {
//!             property: "YieldStrength".to_string(),
//!             reason: "temperature table must not be empty".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for matprop_core operations
pub type MatResult<T> = Result<T, MatError>;

/// Structured error type for material property operations.
///
/// Missing-property and missing-condition failures are distinct variants so
/// callers can tell "no such property at all" apart from "property exists,
/// but not for that heat-treat condition".
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum MatError {
    /// Property construction data is malformed (length mismatch, unsorted axis, etc.)
    #[error("Invalid data for property '{property}': {reason}")]
    InvalidPropertyData { property: String, reason: String },

    /// Material has no property with the requested name under any condition
    #[error("Material '{material}' has no property '{property}'")]
    PropertyNotFound { material: String, property: String },

    /// Property exists on the material, but not for the requested condition
    #[error("Property '{property}' on material '{material}' has no data for condition '{condition}'")]
    ConditionNotFound {
        material: String,
        property: String,
        condition: String,
    },

    /// Material has no fatigue curves for the requested condition
    #[error("Material '{material}' has no fatigue curves for condition '{condition}'")]
    FatigueNotFound { material: String, condition: String },
}

impl MatError {
    /// Create an InvalidPropertyData error
    pub fn invalid_property_data(property: impl Into<String>, reason: impl Into<String>) -> Self {
        MatError::InvalidPropertyData {
            property: property.into(),
            reason: reason.into(),
        }
    }

    /// Create a PropertyNotFound error
    pub fn property_not_found(material: impl Into<String>, property: impl Into<String>) -> Self {
        MatError::PropertyNotFound {
            material: material.into(),
            property: property.into(),
        }
    }

    /// Create a ConditionNotFound error
    pub fn condition_not_found(
        material: impl Into<String>,
        property: impl Into<String>,
        condition: impl Into<String>,
    ) -> Self {
        MatError::ConditionNotFound {
            material: material.into(),
            property: property.into(),
            condition: condition.into(),
        }
    }

    /// Create a FatigueNotFound error
    pub fn fatigue_not_found(material: impl Into<String>, condition: impl Into<String>) -> Self {
        MatError::FatigueNotFound {
            material: material.into(),
            condition: condition.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            MatError::InvalidPropertyData { .. } => "INVALID_PROPERTY_DATA",
            MatError::PropertyNotFound { .. } => "PROPERTY_NOT_FOUND",
            MatError::ConditionNotFound { .. } => "CONDITION_NOT_FOUND",
            MatError::FatigueNotFound { .. } => "FATIGUE_NOT_FOUND",
        }
    }
}
