//! Catálogo de reservas con expertos: tipo de servicio, tipo de agente,
//! modalidad de consulta y franjas horarias.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// Franjas horarias ofrecidas (una por hora).
pub const TIME_SLOTS: [&str; 9] = ["9:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "1:00 PM", "2:00 PM", "3:00 PM", "4:00 PM",
                                   "5:00 PM"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    Hourly,
    FullService,
}

impl ServiceType {
    pub const ALL: [ServiceType; 2] = [ServiceType::Hourly, ServiceType::FullService];

    pub fn id(self) -> &'static str {
        match self {
            ServiceType::Hourly => "hourly",
            ServiceType::FullService => "full-service",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ServiceType::Hourly => "Hourly Consultation",
            ServiceType::FullService => "Full Tax Service",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentType {
    TaxProfessional,
    TaxLawyer,
}

impl AgentType {
    pub const ALL: [AgentType; 2] = [AgentType::TaxProfessional, AgentType::TaxLawyer];

    pub fn id(self) -> &'static str {
        match self {
            AgentType::TaxProfessional => "tax-professional",
            AgentType::TaxLawyer => "tax-lawyer",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AgentType::TaxProfessional => "Certified Tax Professional",
            AgentType::TaxLawyer => "Tax Attorney",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AgentType::TaxProfessional => "Licensed tax preparers with extensive experience",
            AgentType::TaxLawyer => "Licensed attorneys specializing in tax law",
        }
    }

    pub fn qualifications(self) -> &'static [&'static str] {
        match self {
            AgentType::TaxProfessional => &["CPA or EA certification", "10+ years experience", "IRS enrolled agent"],
            AgentType::TaxLawyer => &["JD with tax specialization", "Bar admission", "IRS representation"],
        }
    }

    /// Tarifa por hora en dólares.
    pub fn hourly_rate(self) -> u32 {
        match self {
            AgentType::TaxProfessional => 150,
            AgentType::TaxLawyer => 300,
        }
    }

    /// Precio cerrado del servicio completo en dólares.
    pub fn full_service_rate(self) -> u32 {
        match self {
            AgentType::TaxProfessional => 800,
            AgentType::TaxLawyer => 1500,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConsultationType {
    Phone,
    Video,
    InPerson,
}

impl ConsultationType {
    pub const ALL: [ConsultationType; 3] = [ConsultationType::Phone, ConsultationType::Video, ConsultationType::InPerson];

    pub fn id(self) -> &'static str {
        match self {
            ConsultationType::Phone => "phone",
            ConsultationType::Video => "video",
            ConsultationType::InPerson => "in-person",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ConsultationType::Phone => "Phone Call",
            ConsultationType::Video => "Video Call (Recommended)",
            ConsultationType::InPerson => "In-Person (Additional fees may apply)",
        }
    }
}

/// Costo estimado: tarifa horaria para `Hourly`, precio cerrado para
/// `FullService`.
pub fn estimated_cost(agent: AgentType, service: ServiceType) -> u32 {
    match service {
        ServiceType::Hourly => agent.hourly_rate(),
        ServiceType::FullService => agent.full_service_rate(),
    }
}

/// Interpreta una fecha de consulta en formato `YYYY-MM-DD`.
pub fn parse_preferred_date(raw: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| {
                                                         DomainError::ValidationError(format!("invalid date `{raw}`: {e}"))
                                                     })
}

/// Chequeo de forma de un e-mail: `local@dominio.tld`, sin espacios.
pub fn is_plausible_email(raw: &str) -> bool {
    let raw = raw.trim();
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    match raw.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
            && !domain.contains('@')
            && domain.split('.').count() >= 2
            && domain.split('.').all(|label| !label.is_empty())
        }
        None => false,
    }
}

macro_rules! wire_id_impls {
    ($ty:ident, $kind:literal) => {
        impl FromStr for $ty {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $ty::ALL.iter()
                        .copied()
                        .find(|v| v.id() == s)
                        .ok_or_else(|| DomainError::UnknownVariant { kind: $kind,
                                                                     value: s.to_string() })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.id())
            }
        }
    };
}

wire_id_impls!(ServiceType, "service type");
wire_id_impls!(AgentType, "agent type");
wire_id_impls!(ConsultationType, "consultation type");
