//! TaxWiz Library
//!
//! Librería de aplicación del asistente fiscal:
//! - `config`: configuración desde el entorno (`CONFIG`).
//! - `errors`: errores de aplicación (`AppError`).
//! - `session`: sesión explícita con autenticación simulada.
//! - `chat` y `providers`: asistente de chat con proveedor de respuestas inyectado.
//! - `logging`: subscriber de `tracing` para los binarios.
//!
//! El motor de formularios vive en `taxwiz-core`; los wizards concretos en
//! `taxwiz-adapters`.

pub mod chat;
pub mod config;
pub mod errors;
pub mod logging;
pub mod providers;
pub mod session;

pub use chat::{provider_from_config, ChatAssistant, ChatMessage};
pub use config::{config, AppConfig, ResponseMode, CONFIG};
pub use errors::AppError;
pub use session::Session;
