//! Compuerta de validación por paso.
//!
//! Función pura: (definición del paso, respuestas enviadas, archivos
//! adjuntos) → lista de errores. No depende del estado del wizard ni de
//! ninguna capa de UI.

mod gate;

pub use gate::{validate_field, validate_step};
