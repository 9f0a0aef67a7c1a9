//! Wizard de documentos fiscales (4 pasos, sólo cargas de archivos).
//!
//! Sólo `w2Documents` es obligatorio. El generador arma un borrador con los
//! documentos recolectados agrupados por paso.

use async_trait::async_trait;
use log::debug;
use std::collections::BTreeMap;
use std::sync::Arc;
use taxwiz_core::{ArtifactSpec, FieldDefinition, GenerationError, RegistryError, ResultArtifact, ResultGenerator,
                  StepDefinition, StepRegistry, WizardSnapshot};

use crate::artifacts::{DraftDocument, DraftSummary};
use crate::Latency;

pub const NEXT_STEPS: [&str; 4] = ["A tax professional will review your uploaded documents",
                                   "Data will be extracted and verified for accuracy",
                                   "Your tax forms will be prepared based on the provided documents",
                                   "You will receive a complete draft for review before filing"];

fn upload(id: &str, label: &str, help: &str, maps_to: &str) -> FieldDefinition {
    FieldDefinition::file(id).label(label).help(help).maps_to(maps_to)
}

pub fn registry() -> Result<Arc<StepRegistry>, RegistryError> {
    let employment =
        StepDefinition::new("employment",
                            "Employment Income",
                            "Upload your salary statements and employment documents")
            .field(upload("w2Documents",
                          "Upload W-2 Forms (Salary Statements)",
                          "Upload all W-2 forms you received from employers for the tax year",
                          "Form 1040, Line 1a").required())
            .field(upload("paystubDocuments",
                          "Upload Final Pay Stubs",
                          "Upload your final pay stub from each employer to verify annual earnings",
                          "Form 1040, Line 1a"))
            .field(upload("unemploymentBenefits",
                          "Upload 1099-G Forms (Unemployment Benefits)",
                          "If you received unemployment benefits, upload the 1099-G form",
                          "Schedule 1, Line 7"));
    let investments =
        StepDefinition::new("investments", "Investment Income", "Upload your investment and financial documents")
            .field(upload("investmentDocuments",
                          "Upload 1099-INT Forms (Interest Income)",
                          "Upload forms showing interest earned from banks, savings accounts, and bonds",
                          "Form 1040, Line 2b"))
            .field(upload("dividendDocuments",
                          "Upload 1099-DIV Forms (Dividend Income)",
                          "Upload forms showing dividends received from stocks and mutual funds",
                          "Form 1040, Line 3b"))
            .field(upload("brokerageStatements",
                          "Upload 1099-B Forms (Investment Sales)",
                          "Upload forms showing proceeds from stock sales and other investment transactions",
                          "Schedule D"))
            .field(upload("retirementDocuments",
                          "Upload 1099-R Forms (Retirement Distributions)",
                          "Upload forms if you received distributions from retirement accounts",
                          "Form 1040, Line 4b"));
    let deductions =
        StepDefinition::new("deductions", "Deduction Documents", "Upload receipts and documents for tax deductions")
            .field(upload("mortgageDocuments",
                          "Upload 1098 Forms (Mortgage Interest)",
                          "Upload mortgage interest statements from your lender",
                          "Schedule A, Line 8a"))
            .field(upload("charitableDocuments",
                          "Upload Charitable Donation Receipts",
                          "Upload receipts for donations over $250 and written acknowledgments",
                          "Schedule A, Line 11"))
            .field(upload("medicalDocuments",
                          "Upload Medical Expense Receipts",
                          "Upload receipts for unreimbursed medical and dental expenses",
                          "Schedule A, Line 1"))
            .field(upload("educationDocuments",
                          "Upload 1098-T Forms (Education Expenses)",
                          "Upload tuition statements for education tax credits",
                          "Form 8863"));
    let business =
        StepDefinition::new("business", "Business Documentation", "Upload business income and expense documents")
            .field(upload("businessIncomeDocuments",
                          "Upload 1099-NEC Forms (Business Income)",
                          "Upload forms showing non-employee compensation and business income",
                          "Schedule C, Line 1"))
            .field(upload("businessExpenseReceipts",
                          "Upload Business Expense Receipts",
                          "Upload receipts for office supplies, equipment, travel, and other business expenses",
                          "Schedule C, Part II"))
            .field(upload("homeOfficeDocuments",
                          "Upload Home Office Documentation",
                          "Upload utility bills, mortgage statements, or rent receipts for home office deduction",
                          "Form 8829"))
            .field(upload("vehicleDocuments",
                          "Upload Vehicle Expense Records",
                          "Upload mileage logs or actual expense receipts for business vehicle use",
                          "Schedule C, Line 9"));

    let reg = StepRegistry::builder().step(employment)
                                     .step(investments)
                                     .step(deductions)
                                     .step(business)
                                     .build()?;
    Ok(Arc::new(reg))
}

/// Arma el borrador a partir del snapshot. Pura: mismo snapshot, mismo
/// borrador.
pub fn draft_summary(registry: &StepRegistry, snapshot: &WizardSnapshot) -> DraftSummary {
    let mut sections = BTreeMap::new();
    let mut documents = Vec::with_capacity(snapshot.uploaded_files.len());
    for step in registry.iter() {
        let mut count = 0;
        for field in &step.fields {
            for file in snapshot.files_for(&field.id) {
                count += 1;
                documents.push(DraftDocument { name: file.name.clone(),
                                               size_kb: file.size_kb(),
                                               field_id: field.id.clone(),
                                               maps_to: field.maps_to.clone() });
            }
        }
        sections.insert(step.id.clone(), count);
    }
    DraftSummary { document_count: documents.len(),
                   documents,
                   sections,
                   next_steps: NEXT_STEPS.iter().map(|s| s.to_string()).collect(),
                   schema_version: 1 }
}

pub struct DraftGenerator {
    registry: Arc<StepRegistry>,
    latency: Latency,
}

impl DraftGenerator {
    pub fn new(registry: Arc<StepRegistry>) -> Self {
        Self { registry,
               latency: Latency::none() }
    }

    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl ResultGenerator for DraftGenerator {
    fn name(&self) -> &str {
        "tax-form-draft"
    }

    async fn generate(&self, snapshot: &WizardSnapshot) -> Result<ResultArtifact, GenerationError> {
        self.latency.wait().await;
        let summary = draft_summary(&self.registry, snapshot);
        debug!("draft summary with {} document(s)", summary.document_count);
        summary.into_artifact()
    }
}
