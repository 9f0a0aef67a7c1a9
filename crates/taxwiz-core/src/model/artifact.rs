//! Artifact neutral producido por el generador de resultados.
//!
//! - `kind` identifica el shape del payload (definido por el dominio).
//! - `payload` es JSON genérico; el motor no interpreta su semántica.
//! - `fingerprint` es el hash del payload canónico; dos generaciones sobre el
//!   mismo snapshot deben producir el mismo fingerprint.
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::hashing::hash_value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultArtifact {
    pub kind: String,
    pub payload: Value,
    pub fingerprint: String,
}

impl ResultArtifact {
    pub fn new(kind: impl Into<String>, payload: Value) -> Self {
        let fingerprint = hash_value(&payload);
        Self { kind: kind.into(),
               payload,
               fingerprint }
    }
}
