//! Credenciales del asistente: PIN numérico, preguntas de seguridad e
//! identificador de usuario generado.
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DomainError;

pub const SECURITY_QUESTIONS: [&str; 6] = ["What was the name of your first pet?",
                                           "What is your mother's maiden name?",
                                           "What was the name of your first school?",
                                           "What city were you born in?",
                                           "What is your favorite color?",
                                           "What was your first car model?"];

const USER_ID_PREFIX: &str = "TAX";
const USER_ID_SUFFIX_LEN: usize = 8;

/// PIN de 4 a 6 dígitos ASCII.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pin(String);

impl Pin {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if !(4..=6).contains(&raw.len()) {
            return Err(DomainError::ValidationError("PIN must be 4 to 6 digits".to_string()));
        }
        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::ValidationError("PIN must contain only numbers".to_string()));
        }
        Ok(Pin(raw.to_string()))
    }

    pub fn matches(&self, raw: &str) -> bool {
        self.0 == raw
    }
}

// El PIN nunca se imprime.
impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pin(****)")
    }
}

/// Identificador de usuario: `TAX` seguido de 8 caracteres alfanuméricos en
/// mayúsculas.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let suffix: String = rng.sample_iter(&Alphanumeric)
                                .take(USER_ID_SUFFIX_LEN)
                                .map(|b| char::from(b).to_ascii_uppercase())
                                .collect();
        UserId(format!("{USER_ID_PREFIX}{suffix}"))
    }

    /// Acepta cualquier id no vacío (los ids antiguos no siguen el formato
    /// generado).
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(DomainError::ValidationError("User ID is required".to_string()));
        }
        Ok(UserId(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_generated_format(&self) -> bool {
        self.0.len() == USER_ID_PREFIX.len() + USER_ID_SUFFIX_LEN
        && self.0.starts_with(USER_ID_PREFIX)
        && self.0[USER_ID_PREFIX.len()..].chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Regla de formato del login: id de más de 3 caracteres y PIN válido.
pub fn validate_login(user_id: &str, pin: &str) -> Result<(UserId, Pin), DomainError> {
    let id = UserId::parse(user_id)?;
    if id.as_str().chars().count() <= 3 {
        return Err(DomainError::ValidationError("Invalid credentials".to_string()));
    }
    let pin = Pin::parse(pin)?;
    Ok((id, pin))
}

/// Valida que la pregunta elegida sea una de las ofrecidas.
pub fn validate_security_question(question: &str) -> Result<(), DomainError> {
    if SECURITY_QUESTIONS.contains(&question) {
        Ok(())
    } else {
        Err(DomainError::UnknownVariant { kind: "security question",
                                          value: question.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn pin_accepts_four_to_six_digits() {
        assert!(Pin::parse("1234").is_ok());
        assert!(Pin::parse("123456").is_ok());
        assert!(Pin::parse("123").is_err());
        assert!(Pin::parse("1234567").is_err());
        assert!(Pin::parse("12a4").is_err());
        assert_eq!(format!("{:?}", Pin::parse("1234").unwrap()), "Pin(****)");
    }

    #[test]
    fn generated_ids_follow_the_format() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let id = UserId::generate_with(&mut rng);
            assert!(id.is_generated_format(), "{id}");
        }
        assert!(UserId::generate().as_str().starts_with("TAX"));
    }

    #[test]
    fn login_rule() {
        assert!(validate_login("TAX12345678", "1234").is_ok());
        assert!(validate_login("abc", "1234").is_err());
        assert!(validate_login("abcd", "12").is_err());
        assert!(validate_login("  ", "1234").is_err());
    }

    #[test]
    fn security_question_must_be_offered() {
        assert!(validate_security_question(SECURITY_QUESTIONS[0]).is_ok());
        assert!(validate_security_question("What is your PIN?").is_err());
    }
}
