//! Wizards concretos: registro de pasos + generador de resultado.

pub mod booking;
pub mod investment;
pub mod tax_form;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use taxwiz_core::{RegistryError, ResultGenerator, StepRegistry};

use crate::Latency;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardKind {
    TaxForm,
    Booking,
    Investment,
}

impl WizardKind {
    pub const ALL: [WizardKind; 3] = [WizardKind::TaxForm, WizardKind::Booking, WizardKind::Investment];

    pub fn name(self) -> &'static str {
        match self {
            WizardKind::TaxForm => "tax-form",
            WizardKind::Booking => "booking",
            WizardKind::Investment => "investment",
        }
    }

    pub fn registry(self) -> Result<Arc<StepRegistry>, RegistryError> {
        match self {
            WizardKind::TaxForm => tax_form::registry(),
            WizardKind::Booking => booking::registry(),
            WizardKind::Investment => investment::registry(),
        }
    }

    /// Generador del wizard. `registry` debe ser el devuelto por
    /// `registry()` para el mismo kind.
    pub fn generator(self, registry: &Arc<StepRegistry>, latency: Latency) -> Box<dyn ResultGenerator> {
        match self {
            WizardKind::TaxForm => Box::new(tax_form::DraftGenerator::new(Arc::clone(registry)).with_latency(latency)),
            WizardKind::Booking => Box::new(booking::BookingGenerator::new().with_latency(latency)),
            WizardKind::Investment => Box::new(investment::InvestmentAdvisorGenerator::new().with_latency(latency)),
        }
    }
}

impl FromStr for WizardKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.iter()
                 .copied()
                 .find(|k| k.name() == s)
                 .ok_or_else(|| format!("unknown wizard `{s}` (expected one of: tax-form, booking, investment)"))
    }
}

impl fmt::Display for WizardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
