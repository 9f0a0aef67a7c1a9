use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Descriptor de un archivo entregado por la capa de presentación. Los bytes
/// los persiste un colaborador externo; el motor sólo guarda metadatos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

impl FileDescriptor {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self { name: name.into(),
               mime_type: String::new(),
               size_bytes }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }
}

/// Registro inmutable de un archivo adjuntado a un campo `FileUpload`.
///
/// Se crea en `attach_file` y nunca se modifica ni se elimina; `owner_field_id`
/// es sólo una referencia de búsqueda al campo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFileRecord {
    pub id: Uuid,
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub owner_field_id: String,
}

impl UploadedFileRecord {
    pub(crate) fn from_descriptor(owner_field_id: &str, file: FileDescriptor) -> Self {
        Self { id: Uuid::new_v4(),
               name: file.name,
               mime_type: file.mime_type,
               size_bytes: file.size_bytes,
               owner_field_id: owner_field_id.to_string() }
    }

    /// Tamaño en KB con un decimal, como lo muestra el resumen de documentos.
    pub fn size_kb(&self) -> f64 {
        (self.size_bytes as f64 / 1024.0 * 10.0).round() / 10.0
    }
}
