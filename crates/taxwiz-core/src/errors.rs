//! Errores del motor de pasos.
//!
//! Todos los errores se devuelven como valores; la capa de presentación
//! decide cómo mostrarlos (errores en línea, toasts, controles deshabilitados).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Violación de una regla de campo detectada por la compuerta de validación.
#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("missing required field `{0}`")] MissingRequiredField(String),
    #[error("invalid format for field `{0}`")] InvalidFormat(String),
}

impl ValidationError {
    /// Campo al que se refiere el error.
    pub fn field_id(&self) -> &str {
        match self {
            ValidationError::MissingRequiredField(id) | ValidationError::InvalidFormat(id) => id,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum WizardError {
    #[error("step index {index} out of range (step count {step_count})")]
    OutOfRange { index: usize, step_count: usize },
    #[error("field `{0}` is not a valid target in the current step")] InvalidField(String),
    #[error("step validation failed with {} error(s)", .0.len())] Validation(Vec<ValidationError>),
    #[error("boundary: {0}")] Boundary(String),
    #[error("result generation failed: {0}")] GenerationFailed(String),
    #[error("wizard is busy generating a result")] Busy,
    #[error("wizard already completed; restart or reopen it first")] AlreadyComplete,
    #[error("internal: {0}")] Internal(String),
}

impl WizardError {
    /// Errores de validación si el error es de tipo `Validation`.
    pub fn validation_errors(&self) -> Option<&[ValidationError]> {
        match self {
            WizardError::Validation(errs) => Some(errs),
            _ => None,
        }
    }
}

/// Fallo reportado por un `ResultGenerator`.
#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[error("{reason}")]
pub struct GenerationError {
    pub reason: String,
}

impl GenerationError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

impl From<GenerationError> for WizardError {
    fn from(e: GenerationError) -> Self {
        WizardError::GenerationFailed(e.reason)
    }
}

/// Errores de construcción del registro de pasos.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum RegistryError {
    #[error("registry must declare at least one step")] Empty,
    #[error("duplicate step id `{0}`")] DuplicateStep(String),
    #[error("duplicate field id `{field_id}` in step `{step_id}`")] DuplicateField { step_id: String, field_id: String },
    #[error("single-select field `{0}` requires a non-empty option list")] MissingOptions(String),
    #[error("field `{0}` declares options but is not single-select")] UnexpectedOptions(String),
    #[error("field `{0}` has min_length greater than max_length")] InvalidLengthBounds(String),
}
