//! Generador de resultados: paso terminal asíncrono del wizard.
//!
//! Recibe el snapshot tomado al enviar el paso final y produce un
//! `ResultArtifact` opaco. Las implementaciones deben ser idempotentes:
//! dos llamadas con snapshots iguales producen artifacts iguales (sin
//! contadores ocultos ni efectos externos).
use async_trait::async_trait;

use crate::errors::GenerationError;
use crate::model::{ResultArtifact, WizardSnapshot};

#[async_trait]
pub trait ResultGenerator: Send + Sync {
    /// Nombre para logs.
    fn name(&self) -> &str;

    async fn generate(&self, snapshot: &WizardSnapshot) -> Result<ResultArtifact, GenerationError>;
}

#[async_trait]
impl<T: ResultGenerator + ?Sized> ResultGenerator for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn generate(&self, snapshot: &WizardSnapshot) -> Result<ResultArtifact, GenerationError> {
        (**self).generate(snapshot).await
    }
}

/// Adaptador de una función síncrona a `ResultGenerator`.
pub struct FnGenerator<F> {
    name: String,
    f: F,
}

impl<F> FnGenerator<F> where F: Fn(&WizardSnapshot) -> Result<ResultArtifact, GenerationError> + Send + Sync
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self { name: name.into(), f }
    }
}

#[async_trait]
impl<F> ResultGenerator for FnGenerator<F> where F: Fn(&WizardSnapshot) -> Result<ResultArtifact, GenerationError> + Send + Sync
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate(&self, snapshot: &WizardSnapshot) -> Result<ResultArtifact, GenerationError> {
        (self.f)(snapshot)
    }
}
