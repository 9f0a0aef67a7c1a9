//! Constantes del motor de formularios.
//!
//! `ENGINE_VERSION` participa en el fingerprint de los snapshots: un cambio de
//! versión invalida determinísticamente los fingerprints aunque las respuestas
//! y los archivos adjuntos no cambien. Mantener estable mientras no haya
//! cambios incompatibles en la forma del snapshot.

/// Versión lógica del motor de pasos.
pub const ENGINE_VERSION: &str = "W1.0";

/// Nombre del campo que lleva la versión de esquema dentro del payload de un
/// artifact tipado.
pub const SCHEMA_VERSION_FIELD: &str = "schema_version";
