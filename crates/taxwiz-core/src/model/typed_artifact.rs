//! Infraestructura opcional de tipado fuerte para `ResultArtifact`
//! manteniendo el núcleo agnóstico del dominio.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::ResultArtifact;
use crate::constants::SCHEMA_VERSION_FIELD;
use crate::errors::GenerationError;

/// Errores posibles al decodificar un artifact tipado.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArtifactDecodeError {
    #[error("kind mismatch: expected {expected}, found {found}")]
    KindMismatch { expected: String, found: String },
    #[error("schema version mismatch: expected {expected}, found {found:?}")]
    VersionMismatch { expected: u32, found: Option<u32> },
    #[error("deserialize: {0}")] Deserialize(String),
    #[error("validation: {0}")] Validation(String),
}

/// Especificación de un artifact tipado.
pub trait ArtifactSpec: Sized + Serialize + DeserializeOwned + Clone {
    /// Kind asociado (permite distinguir en runtime).
    const KIND: &'static str;
    /// Versión de esquema (incrementar en cambios incompatibles).
    const SCHEMA_VERSION: u32 = 1;

    /// Validación semántica ligera, sin efectos secundarios.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }

    /// Serializa a `ResultArtifact` insertando la versión si falta.
    fn into_artifact(self) -> Result<ResultArtifact, GenerationError> {
        let mut value = serde_json::to_value(&self).map_err(|e| GenerationError::new(format!("serialize artifact: {e}")))?;
        if let Value::Object(map) = &mut value {
            map.entry(SCHEMA_VERSION_FIELD.to_string()).or_insert(Value::from(Self::SCHEMA_VERSION));
        }
        Ok(ResultArtifact::new(Self::KIND, value))
    }

    /// Decodifica desde el artifact neutro verificando kind, versión y validación.
    fn from_artifact(a: &ResultArtifact) -> Result<Self, ArtifactDecodeError> {
        if a.kind != Self::KIND {
            return Err(ArtifactDecodeError::KindMismatch { expected: Self::KIND.to_string(),
                                                           found: a.kind.clone() });
        }
        let found = a.payload.get(SCHEMA_VERSION_FIELD).and_then(|v| v.as_u64()).map(|v| v as u32);
        if found != Some(Self::SCHEMA_VERSION) {
            return Err(ArtifactDecodeError::VersionMismatch { expected: Self::SCHEMA_VERSION,
                                                              found });
        }
        let decoded: Self =
            serde_json::from_value(a.payload.clone()).map_err(|e| ArtifactDecodeError::Deserialize(e.to_string()))?;
        decoded.validate().map_err(ArtifactDecodeError::Validation)?;
        Ok(decoded)
    }
}
