//! Modelos neutrales (respuestas, archivos adjuntos, snapshot, artifacts).

pub mod answer;
pub mod artifact;
pub mod snapshot;
pub mod typed_artifact;
pub mod upload;

pub use answer::{AnswerValue, Answers};
pub use artifact::ResultArtifact;
pub use snapshot::WizardSnapshot;
pub use typed_artifact::{ArtifactDecodeError, ArtifactSpec};
pub use upload::{FileDescriptor, UploadedFileRecord};
