use std::process::ExitCode;

use taxwiz::{config, logging, provider_from_config, AppError, ChatAssistant, Session};
use taxwiz_adapters::artifacts::{BookingConfirmation, DraftSummary, InvestmentReport};
use taxwiz_adapters::{Latency, WizardKind};
use taxwiz_core::{answers, ArtifactSpec, FileDescriptor, StepOutcome, WizardError, WizardMachine};
use taxwiz_domain::{format_usd, SECURITY_QUESTIONS};
use tracing::{error, info, warn};

/// Demo guionada: registro, chat y los tres wizards de punta a punta.
#[tokio::main]
async fn main() -> ExitCode {
    let cfg = match config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("[taxwiz] {e}");
            return ExitCode::from(2);
        }
    };
    if let Err(e) = logging::init_logging(&cfg.log_filter) {
        eprintln!("[taxwiz] {e}");
        return ExitCode::from(2);
    }
    match run_demo(Latency::of(cfg.generation_latency), cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("demo failed: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run_demo(latency: Latency, cfg: &taxwiz::AppConfig) -> Result<(), AppError> {
    // Sesión
    let mut session = Session::init();
    let user_id = session.register("2468", SECURITY_QUESTIONS[0], "Rex")?;
    session.login(user_id.as_str(), "2468")?;
    info!("logged in as {user_id}");

    // Chat
    let mut chat = ChatAssistant::new(provider_from_config(cfg));
    for prompt in ["Tax form preparation", "Investment tax savings"] {
        if let Some(reply) = chat.send(prompt).await {
            println!("> {prompt}\n{}\n", reply.content);
        }
    }

    // Wizard de documentos
    let kind = WizardKind::TaxForm;
    let registry = kind.registry()?;
    let tax = WizardMachine::builder(registry.clone()).into_session(kind.generator(&registry, latency));
    tax.attach_file("w2Documents", FileDescriptor::new("w2-2024.pdf", 84_310).with_mime_type("application/pdf"))?;
    for _ in 0..registry.step_count() {
        let progress = tax.progress();
        info!("tax form step {} of {} ({}%)", progress.step_number, progress.step_count, progress.percent);
        if let StepOutcome::Completed(art) = tax.submit_step(answers! {}).await? {
            let draft = DraftSummary::from_artifact(&art).map_err(|e| AppError::Internal(e.to_string()))?;
            println!("draft ready: {} document(s)", draft.document_count);
            for doc in &draft.documents {
                println!("  {} ({:.1} KB) -> {}", doc.name, doc.size_kb, doc.maps_to.as_deref().unwrap_or("-"));
            }
        }
    }

    // Reserva con un experto: el primer intento tiene un e-mail inválido
    let kind = WizardKind::Booking;
    let registry = kind.registry()?;
    let booking = WizardMachine::builder(registry.clone()).into_session(kind.generator(&registry, latency));
    booking.submit_step(answers! { "serviceType" => "hourly" }).await?;
    let form = |email: &str| {
        answers! {
            "agentType" => "tax-professional",
            "consultationType" => "video",
            "preferredDate" => "2025-03-10",
            "preferredTime" => "11:00 AM",
            "description" => "Questions about my home office deduction",
            "contactPhone" => "555-010-2030",
            "contactEmail" => email,
        }
    };
    match booking.submit_step(form("user-at-example")).await {
        Err(WizardError::GenerationFailed(reason)) => warn!("booking not confirmed: {reason}"),
        other => return Err(AppError::Internal(format!("unexpected booking outcome: {other:?}"))),
    }
    if let StepOutcome::Completed(art) = booking.submit_step(form("user@example.com")).await? {
        let confirmation = BookingConfirmation::from_artifact(&art).map_err(|e| AppError::Internal(e.to_string()))?;
        println!("booked {} on {} at {}: {}",
                 confirmation.agent_title,
                 confirmation.preferred_date,
                 confirmation.preferred_time,
                 format_usd(confirmation.estimated_cost as f64));
    }

    // Asesor de inversiones
    let kind = WizardKind::Investment;
    let registry = kind.registry()?;
    let advisor = WizardMachine::builder(registry.clone()).into_session(kind.generator(&registry, latency));
    let profile = answers! {
        "monthlyIncome" => 6500,
        "currentAge" => 41,
        "filingStatus" => "Married Filing Jointly",
        "investmentGoals" => "Retirement and college savings",
    };
    if let StepOutcome::Completed(art) = advisor.submit_step(profile).await? {
        let report = InvestmentReport::from_artifact(&art).map_err(|e| AppError::Internal(e.to_string()))?;
        println!("max tax-deductible: {}, recommended monthly: {}, estimated savings: {}",
                 format_usd(report.advice.max_tax_deductible_amount),
                 format_usd(report.advice.recommended_monthly_investment),
                 format_usd(report.advice.estimated_tax_savings));
    }

    session.teardown();
    Ok(())
}
