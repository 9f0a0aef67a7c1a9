//! taxwiz-adapters: Capa de adaptación Dominio ↔ Core
//!
//! Este crate provee:
//! - Artifacts tipados de cada wizard (borrador de declaración, confirmación
//!   de reserva, recomendación de inversión).
//! - Los registros de pasos concretos y sus generadores de resultado.
//! - `WizardKind` para que la CLI elija wizard por nombre.
//!
//! Nota: El core sólo conoce `ResultArtifact { kind, payload, fingerprint }`.
//! Aquí nos apoyamos en artifacts tipados que serializan a payload JSON.

pub mod artifacts;
pub mod latency;
pub mod wizards;

pub use latency::Latency;
pub use wizards::{booking, investment, tax_form, WizardKind};
