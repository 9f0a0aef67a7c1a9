//! Artifacts tipados producidos por los generadores de cada wizard.
//!
//! Estos tipos sólo definen la forma del `payload` JSON que se serializa a
//! `taxwiz_core::ResultArtifact` con un `schema_version` estable. El
//! fingerprint lo calcula el core a partir del payload canónico.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use taxwiz_core::typed_artifact;
use taxwiz_domain::{AgentType, ConsultationType, InvestmentAdvice, ServiceType};

// Documento adjunto tal como aparece en el resumen del borrador.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftDocument {
    pub name: String,
    pub size_kb: f64,
    pub field_id: String,
    pub maps_to: Option<String>,
}

// Borrador de declaración: documentos recolectados, conteo por paso y
// próximos pasos.
// - sections: id de paso → cantidad de documentos (orden estable por BTreeMap).
typed_artifact!(DraftSummary {
    document_count: usize,
    documents: Vec<DraftDocument>,
    sections: BTreeMap<String, usize>,
    next_steps: Vec<String>,
} kind: "draft-summary");

// Confirmación de una reserva con un experto.
typed_artifact!(BookingConfirmation {
    service_type: ServiceType,
    agent_type: AgentType,
    agent_title: String,
    consultation_type: ConsultationType,
    preferred_date: String,
    preferred_time: String,
    description: String,
    contact_phone: String,
    contact_email: String,
    estimated_cost: u32,
} kind: "booking-confirmation");

// Recomendación de inversión con el perfil que la originó.
typed_artifact!(InvestmentReport {
    monthly_income: f64,
    current_age: Option<f64>,
    filing_status: String,
    investment_goals: String,
    advice: InvestmentAdvice,
} kind: "investment-report");
