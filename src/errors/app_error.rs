use taxwiz_core::{RegistryError, WizardError};
use taxwiz_domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Credenciales inválidas: {0}")]
    Auth(String),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Wizard(#[from] WizardError),
    #[error("Registro de pasos inválido: {0}")]
    Registry(#[from] RegistryError),
    #[error("Error interno: {0}")]
    Internal(String),
}
