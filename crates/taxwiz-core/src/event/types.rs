//! Tipos de evento del wizard y estructura `WizardEvent`.
//!
//! Cada transición de la máquina de estados emite un evento a un
//! `EventStore` append-only. El log no se usa para reconstruir estado (la
//! máquina es dueña exclusiva de su estado); sirve como traza observable y
//! estable para la capa de presentación y para tests.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WizardEventKind {
    /// Primer evento de un `wizard_id`: fija el registro usado.
    WizardInitialized { registry_hash: String, step_count: usize },
    /// Se adjuntó un archivo a un campo del paso actual.
    FileAttached { step_index: usize, field_id: String, file_id: Uuid },
    /// Un paso pasó la validación y sus respuestas se fusionaron.
    StepSubmitted { step_index: usize, step_id: String },
    /// Un paso fue rechazado por la compuerta de validación (estado sin cambios).
    StepRejected { step_index: usize, step_id: String, error_count: usize },
    /// Se retrocedió un paso.
    StepReverted { from_index: usize, to_index: usize },
    /// Comenzó la generación del resultado sobre el snapshot indicado.
    GenerationStarted { snapshot_fingerprint: String },
    /// La generación falló; el wizard vuelve a recolectar en el paso final.
    GenerationFailed { reason: String },
    /// La generación terminó y el artifact quedó disponible.
    WizardCompleted { artifact_fingerprint: String },
    /// Reinicio completo: paso 0, sin respuestas ni archivos.
    WizardRestarted,
    /// Vuelta a edición desde `Complete` conservando respuestas.
    WizardReopened,
}

impl WizardEventKind {
    /// Letra compacta usada en trazas (`event_variants`).
    pub fn letter(&self) -> &'static str {
        match self {
            WizardEventKind::WizardInitialized { .. } => "I",
            WizardEventKind::FileAttached { .. } => "A",
            WizardEventKind::StepSubmitted { .. } => "S",
            WizardEventKind::StepRejected { .. } => "X",
            WizardEventKind::StepReverted { .. } => "B",
            WizardEventKind::GenerationStarted { .. } => "G",
            WizardEventKind::GenerationFailed { .. } => "E",
            WizardEventKind::WizardCompleted { .. } => "C",
            WizardEventKind::WizardRestarted => "R",
            WizardEventKind::WizardReopened => "O",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardEvent {
    pub seq: u64, // asignado por el store (orden append)
    pub wizard_id: Uuid,
    pub kind: WizardEventKind,
    pub ts: DateTime<Utc>, // metadato, no entra en fingerprints
}
