//! Definiciones relacionadas a pasos.
//!
//! Un wizard es una secuencia fija y ordenada de pasos; cada paso declara sus
//! campos. Este módulo define:
//! - `FieldDefinition` / `FieldKind`: qué se pregunta y cómo se valida.
//! - `StepDefinition`: un paso con sus campos en orden.
//! - `StepRegistry`: el catálogo inmutable y compartido de pasos.
//! - `WizardPhase`: la fase del wizard en tiempo de ejecución.

pub mod definition;
pub mod registry;
mod status;

pub use definition::{FieldDefinition, FieldKind, StepDefinition};
pub use registry::{StepRegistry, StepRegistryBuilder};
pub use status::WizardPhase;
