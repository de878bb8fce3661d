//! Error types for the document model

use crate::element::{ElementId, ElementType};
use crate::fields::FieldValue;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Unknown element type: {0}")]
    UnknownElementType(String),

    #[error("Duplicate element id: {0}")]
    DuplicateId(ElementId),

    #[error("Field '{key}' is not registered for {element_type} elements")]
    UnknownField { element_type: ElementType, key: String },

    #[error("Invalid value '{value}' for field '{key}' of {element_type} elements")]
    InvalidValue {
        element_type: ElementType,
        key: String,
        value: FieldValue,
    },

    #[error("Invalid template JSON: {0}")]
    Json(#[from] serde_json::Error),
}
