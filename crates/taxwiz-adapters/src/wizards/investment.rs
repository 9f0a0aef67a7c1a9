//! Asesor de inversiones: un único paso `profile`.

use async_trait::async_trait;
use std::sync::Arc;
use taxwiz_core::{ArtifactSpec, FieldDefinition, GenerationError, RegistryError, ResultArtifact, ResultGenerator,
                  StepDefinition, StepRegistry, WizardSnapshot};
use taxwiz_domain::{FilingStatus, InvestmentAdvice};

use crate::artifacts::InvestmentReport;
use crate::Latency;

pub fn registry() -> Result<Arc<StepRegistry>, RegistryError> {
    let profile = StepDefinition::new("profile",
                                      "Investment Profile",
                                      "Get personalized recommendations for tax-deductible investments")
        .field(FieldDefinition::number("monthlyIncome").label("Monthly Income ($)").required())
        .field(FieldDefinition::number("currentAge").label("Current Age").required())
        .field(FieldDefinition::select("filingStatus", FilingStatus::labels()).label("Filing Status").required())
        .field(FieldDefinition::multiline("currentInvestments").label("Current Investments (Optional)"))
        .field(FieldDefinition::multiline("investmentGoals").label("Investment Goals").required());
    Ok(Arc::new(StepRegistry::builder().step(profile).build()?))
}

pub fn investment_report(snapshot: &WizardSnapshot) -> Result<InvestmentReport, GenerationError> {
    let monthly_income =
        snapshot.answer_number("monthlyIncome")
                .ok_or_else(|| GenerationError::new("monthlyIncome is missing or not a number"))?;
    let advice = InvestmentAdvice::compute(monthly_income).map_err(|e| GenerationError::new(e.to_string()))?;
    Ok(InvestmentReport { monthly_income,
                          current_age: snapshot.answer_number("currentAge"),
                          filing_status: snapshot.answer_text("filingStatus").unwrap_or_default(),
                          investment_goals: snapshot.answer_text("investmentGoals").unwrap_or_default(),
                          advice,
                          schema_version: 1 })
}

#[derive(Default)]
pub struct InvestmentAdvisorGenerator {
    latency: Latency,
}

impl InvestmentAdvisorGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl ResultGenerator for InvestmentAdvisorGenerator {
    fn name(&self) -> &str {
        "investment-advisor"
    }

    async fn generate(&self, snapshot: &WizardSnapshot) -> Result<ResultArtifact, GenerationError> {
        self.latency.wait().await;
        investment_report(snapshot)?.into_artifact()
    }
}
