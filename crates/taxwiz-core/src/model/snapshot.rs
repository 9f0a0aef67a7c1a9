use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use super::{Answers, UploadedFileRecord};
use crate::constants::ENGINE_VERSION;
use crate::hashing::hash_value;

/// Copia inmutable del estado de un wizard en el momento de enviar el paso
/// final. Es la única entrada del `ResultGenerator`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardSnapshot {
    pub wizard_id: Uuid,
    pub registry_hash: String,
    pub step_index: usize,
    pub answers: Answers,
    pub uploaded_files: Vec<UploadedFileRecord>,
}

impl WizardSnapshot {
    /// Fingerprint del contenido (respuestas + archivos + registro). No incluye
    /// el id del wizard ni los ids de los adjuntos: dos sesiones con el mismo
    /// contenido comparten fingerprint.
    pub fn fingerprint(&self) -> String {
        let files: Vec<_> = self.uploaded_files
                                .iter()
                                .map(|f| {
                                    json!({
                                        "owner_field_id": f.owner_field_id,
                                        "name": f.name,
                                        "mime_type": f.mime_type,
                                        "size_bytes": f.size_bytes,
                                    })
                                })
                                .collect();
        hash_value(&json!({
            "engine_version": ENGINE_VERSION,
            "registry_hash": self.registry_hash,
            "answers": self.answers,
            "uploaded_files": files,
        }))
    }

    /// Archivos adjuntos a un campo concreto, en orden de adjunción.
    pub fn files_for<'a>(&'a self, field_id: &'a str) -> impl Iterator<Item = &'a UploadedFileRecord> + 'a {
        self.uploaded_files.iter().filter(move |f| f.owner_field_id == field_id)
    }

    pub fn answer_text(&self, field_id: &str) -> Option<String> {
        self.answers.get(field_id).filter(|v| !v.is_blank()).map(|v| v.to_string())
    }

    pub fn answer_number(&self, field_id: &str) -> Option<f64> {
        self.answers.get(field_id).and_then(|v| v.as_number())
    }
}
