//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) y expone una estructura inmutable (`CONFIG`).
use once_cell::sync::Lazy;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::AppError;

/// Cómo elige el asistente de chat su respuesta enlatada.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    Random,
    Sequence,
}

impl FromStr for ResponseMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(ResponseMode::Random),
            "sequence" => Ok(ResponseMode::Sequence),
            other => Err(AppError::Config(format!("TAXWIZ_RESPONSE_MODE must be `random` or `sequence`, got `{other}`"))),
        }
    }
}

/// Configuración global de la aplicación.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Latencia simulada de los generadores de resultado.
    pub generation_latency: Duration,
    pub response_mode: ResponseMode,
    /// Semilla opcional para respuestas aleatorias reproducibles.
    pub response_seed: Option<u64>,
    /// Filtro de logs (sintaxis de `EnvFilter`).
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { generation_latency: Duration::ZERO,
               response_mode: ResponseMode::Random,
               response_seed: None,
               log_filter: "info".to_string() }
    }
}

impl AppConfig {
    /// Lee la configuración de las variables de entorno del proceso.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables inyectada.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
        where F: Fn(&str) -> Option<String>
    {
        let defaults = Self::default();
        let generation_latency = match lookup("TAXWIZ_GENERATION_LATENCY_MS") {
            Some(v) => Duration::from_millis(v.trim().parse::<u64>().map_err(|e| {
                                                 AppError::Config(format!("TAXWIZ_GENERATION_LATENCY_MS `{v}`: {e}"))
                                             })?),
            None => defaults.generation_latency,
        };
        let response_mode = match lookup("TAXWIZ_RESPONSE_MODE") {
            Some(v) => v.parse()?,
            None => defaults.response_mode,
        };
        let response_seed = match lookup("TAXWIZ_RESPONSE_SEED") {
            Some(v) => Some(v.trim()
                             .parse::<u64>()
                             .map_err(|e| AppError::Config(format!("TAXWIZ_RESPONSE_SEED `{v}`: {e}")))?),
            None => None,
        };
        let log_filter = lookup("TAXWIZ_LOG").filter(|v| !v.trim().is_empty()).unwrap_or(defaults.log_filter);
        Ok(Self { generation_latency,
                  response_mode,
                  response_seed,
                  log_filter })
    }
}

/// Instancia global perezosa de configuración, evaluada una sola vez (carga
/// `.env` si existe).
pub static CONFIG: Lazy<Result<AppConfig, AppError>> = Lazy::new(|| {
    let _ = dotenvy::dotenv();
    AppConfig::from_env()
});

/// Acceso a la configuración global.
pub fn config() -> Result<&'static AppConfig, AppError> {
    CONFIG.as_ref().map_err(|e| e.clone())
}
