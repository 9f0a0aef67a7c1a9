//! Sesión explícita del usuario (autenticación simulada, en memoria).
//!
//! Reemplaza el almacenamiento global clave/valor: `init` crea una sesión
//! anónima, `register` da de alta una cuenta, `login` aplica la regla de
//! formato y `teardown` cierra la sesión.
use log::{debug, warn};
use std::collections::HashMap;
use taxwiz_domain::{validate_login, validate_security_question, Pin, UserId};

use crate::errors::AppError;

#[derive(Debug, Clone)]
struct Account {
    pin: Pin,
    security_question: String,
    security_answer: String,
}

#[derive(Debug, Default)]
pub struct Session {
    accounts: HashMap<UserId, Account>,
    current_user: Option<UserId>,
}

impl Session {
    pub fn init() -> Self {
        Self::default()
    }

    /// Registra una cuenta y devuelve el id generado. No inicia sesión.
    pub fn register(&mut self, pin: &str, security_question: &str, security_answer: &str) -> Result<UserId, AppError> {
        let pin = Pin::parse(pin)?;
        validate_security_question(security_question)?;
        if security_answer.trim().is_empty() {
            return Err(AppError::Auth("Security answer is required".to_string()));
        }
        let mut user_id = UserId::generate();
        while self.accounts.contains_key(&user_id) {
            user_id = UserId::generate();
        }
        self.accounts.insert(user_id.clone(),
                             Account { pin,
                                       security_question: security_question.to_string(),
                                       security_answer: security_answer.trim().to_string() });
        debug!("registered {user_id}");
        Ok(user_id)
    }

    /// Inicia sesión. Para cuentas registradas en esta sesión el PIN debe
    /// coincidir; para el resto basta la regla de formato.
    pub fn login(&mut self, user_id: &str, pin: &str) -> Result<&UserId, AppError> {
        let (id, _) = validate_login(user_id, pin).map_err(|e| AppError::Auth(e.to_string()))?;
        if let Some(account) = self.accounts.get(&id) {
            if !account.pin.matches(pin) {
                warn!("login rejected for {id}");
                return Err(AppError::Auth("Invalid User ID or PIN".to_string()));
            }
        }
        debug!("logged in as {id}");
        Ok(self.current_user.insert(id))
    }

    /// Pregunta de seguridad de una cuenta registrada.
    pub fn security_question(&self, user_id: &UserId) -> Option<&str> {
        self.accounts.get(user_id).map(|a| a.security_question.as_str())
    }

    /// Compara la respuesta de seguridad sin distinguir mayúsculas.
    pub fn verify_security_answer(&self, user_id: &UserId, answer: &str) -> bool {
        self.accounts
            .get(user_id)
            .is_some_and(|a| a.security_answer.eq_ignore_ascii_case(answer.trim()))
    }

    pub fn current_user(&self) -> Option<&UserId> {
        self.current_user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn teardown(&mut self) {
        if let Some(id) = self.current_user.take() {
            debug!("logged out {id}");
        }
    }
}
