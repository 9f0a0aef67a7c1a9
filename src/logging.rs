//! Inicialización de logs para los binarios.
//!
//! Las librerías del workspace emiten por la fachada `log`; el subscriber de
//! `tracing` instalado aquí la recoge (puente `tracing-log`).
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::errors::AppError;

pub fn init_logging(filter: &str) -> Result<(), AppError> {
    let env_filter =
        EnvFilter::try_new(filter).map_err(|e| AppError::Config(format!("TAXWIZ_LOG `{filter}`: {e}")))?;
    tracing_subscriber::registry().with(env_filter)
                                  .with(fmt::layer().with_target(true))
                                  .try_init()
                                  .map_err(|e| AppError::Internal(format!("logger already installed: {e}")))
}
