//! Engine module for the wizard state machine
//!
//! Provides the synchronous state machine, the async session handle used when
//! several callers share one wizard, and a builder for both.

pub mod builder;
pub mod machine;
pub mod session;

pub use builder::WizardBuilder;
pub use machine::WizardMachine;
pub use session::WizardSession;

use serde::{Deserialize, Serialize};

use crate::model::{ResultArtifact, WizardSnapshot};

/// Resultado síncrono de `WizardMachine::submit_step`.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Paso intermedio aceptado; índice del nuevo paso actual.
    Advanced { step_index: usize },
    /// Paso final aceptado; la fase es `Generating` y este snapshot debe
    /// entregarse al generador.
    Generate(WizardSnapshot),
}

/// Resultado de un envío conducido hasta el final (incluye la generación).
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    Advanced { step_index: usize },
    Completed(ResultArtifact),
}

impl StepOutcome {
    pub fn artifact(&self) -> Option<&ResultArtifact> {
        match self {
            StepOutcome::Completed(a) => Some(a),
            StepOutcome::Advanced { .. } => None,
        }
    }
}

/// Progreso para la barra de la presentación: "Paso n de m" y porcentaje.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub step_number: usize,
    pub step_count: usize,
    pub percent: u8,
}

impl Progress {
    pub fn new(step_index: usize, step_count: usize) -> Self {
        let step_number = step_index + 1;
        let percent = if step_count == 0 {
            0
        } else {
            ((step_number as f64 / step_count as f64) * 100.0).round().min(100.0) as u8
        };
        Self { step_number,
               step_count,
               percent }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_rounds_like_the_progress_bar() {
        assert_eq!(Progress::new(0, 4).percent, 25);
        assert_eq!(Progress::new(0, 3).percent, 33);
        assert_eq!(Progress::new(1, 3).percent, 67);
        assert_eq!(Progress::new(2, 3).percent, 100);
    }
}
