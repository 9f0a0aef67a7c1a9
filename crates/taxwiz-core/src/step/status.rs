use serde::{Deserialize, Serialize};

/// Fase de un wizard en tiempo de ejecución.
///
/// Las transiciones válidas son:
/// - `Collecting` -> `Generating` (envío válido del paso final)
/// - `Generating` -> `Complete` (el generador resolvió)
/// - `Generating` -> `Collecting` (el generador falló; mismo paso)
/// - `Complete` -> `Collecting` (`restart` o `reopen`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardPhase {
    /// El wizard recolecta respuestas paso a paso.
    Collecting,
    /// Hay una generación de resultado en curso; no se aceptan mutaciones.
    Generating,
    /// El resultado está disponible.
    Complete,
}
