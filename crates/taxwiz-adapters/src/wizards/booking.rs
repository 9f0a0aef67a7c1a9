//! Reserva de consulta con un experto: selección de servicio y formulario de
//! reserva.
//!
//! La forma de la fecha y del e-mail no es un `FieldKind`; el generador las
//! verifica y falla con `GenerationFailed`, lo que devuelve el wizard al paso
//! final para corregirlas.

use async_trait::async_trait;
use log::warn;
use std::sync::Arc;
use taxwiz_core::{ArtifactSpec, FieldDefinition, GenerationError, RegistryError, ResultArtifact, ResultGenerator,
                  StepDefinition, StepRegistry, WizardSnapshot};
use taxwiz_domain::{estimated_cost, is_plausible_email, parse_preferred_date, AgentType, ConsultationType, ServiceType,
                    TIME_SLOTS};

use crate::artifacts::BookingConfirmation;
use crate::Latency;

pub fn registry() -> Result<Arc<StepRegistry>, RegistryError> {
    let selection = StepDefinition::new("selection",
                                        "Connect with Tax Experts",
                                        "Get personalized assistance from certified tax professionals or attorneys")
        .field(FieldDefinition::select("serviceType", ServiceType::ALL.map(ServiceType::id)).label("Service").required());
    let booking = StepDefinition::new("booking", "Book Your Consultation", "Fill out the form below to schedule")
        .field(FieldDefinition::select("agentType", AgentType::ALL.map(AgentType::id)).label("Select Expert Type")
                                                                                     .required())
        .field(FieldDefinition::select("consultationType", ConsultationType::ALL.map(ConsultationType::id))
            .label("Consultation Method")
            .required())
        .field(FieldDefinition::text("preferredDate").label("Preferred Date").help("YYYY-MM-DD").required())
        .field(FieldDefinition::select("preferredTime", TIME_SLOTS).label("Preferred Time").required())
        .field(FieldDefinition::multiline("description").label("Describe Your Tax Needs").min_length(10).required())
        .field(FieldDefinition::text("contactPhone").label("Phone Number").min_length(10).required())
        .field(FieldDefinition::text("contactEmail").label("Email Address").required());
    Ok(Arc::new(StepRegistry::builder().step(selection).step(booking).build()?))
}

fn required_text(snapshot: &WizardSnapshot, field_id: &str) -> Result<String, GenerationError> {
    snapshot.answer_text(field_id)
            .ok_or_else(|| GenerationError::new(format!("{field_id} is missing")))
}

fn parse_choice<T: std::str::FromStr<Err = taxwiz_domain::DomainError>>(snapshot: &WizardSnapshot,
                                                                         field_id: &str)
                                                                         -> Result<T, GenerationError> {
    required_text(snapshot, field_id)?.parse::<T>().map_err(|e| GenerationError::new(e.to_string()))
}

pub fn booking_confirmation(snapshot: &WizardSnapshot) -> Result<BookingConfirmation, GenerationError> {
    let service_type: ServiceType = parse_choice(snapshot, "serviceType")?;
    let agent_type: AgentType = parse_choice(snapshot, "agentType")?;
    let consultation_type: ConsultationType = parse_choice(snapshot, "consultationType")?;
    let preferred_date =
        parse_preferred_date(&required_text(snapshot, "preferredDate")?).map_err(|e| GenerationError::new(e.to_string()))?;
    let contact_email = required_text(snapshot, "contactEmail")?;
    if !is_plausible_email(&contact_email) {
        warn!("booking rejected: malformed e-mail");
        return Err(GenerationError::new("Please provide a valid email address"));
    }
    Ok(BookingConfirmation { service_type,
                             agent_type,
                             agent_title: agent_type.title().to_string(),
                             consultation_type,
                             preferred_date: preferred_date.format("%Y-%m-%d").to_string(),
                             preferred_time: required_text(snapshot, "preferredTime")?,
                             description: required_text(snapshot, "description")?,
                             contact_phone: required_text(snapshot, "contactPhone")?,
                             contact_email: contact_email.trim().to_string(),
                             estimated_cost: estimated_cost(agent_type, service_type),
                             schema_version: 1 })
}

#[derive(Default)]
pub struct BookingGenerator {
    latency: Latency,
}

impl BookingGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl ResultGenerator for BookingGenerator {
    fn name(&self) -> &str {
        "expert-booking"
    }

    async fn generate(&self, snapshot: &WizardSnapshot) -> Result<ResultArtifact, GenerationError> {
        self.latency.wait().await;
        booking_confirmation(snapshot)?.into_artifact()
    }
}
