use thiserror::Error;

/// Error del dominio del asistente fiscal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Error de validación: {0}")]
    ValidationError(String),

    #[error("Valor desconocido para {kind}: `{value}`")]
    UnknownVariant { kind: &'static str, value: String },
}
