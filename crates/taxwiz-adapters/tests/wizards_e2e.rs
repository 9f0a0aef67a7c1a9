use std::time::Duration;

use taxwiz_adapters::artifacts::{BookingConfirmation, DraftSummary, InvestmentReport};
use taxwiz_adapters::{booking, investment, tax_form, Latency, WizardKind};
use taxwiz_core::{answers, ArtifactSpec, FileDescriptor, StepOutcome, ValidationError, WizardError, WizardMachine,
                  WizardPhase};

fn complete(outcome: StepOutcome) -> taxwiz_core::ResultArtifact {
    match outcome {
        StepOutcome::Completed(a) => a,
        other => panic!("expected Completed, got {other:?}"),
    }
}

#[tokio::test]
async fn tax_form_collects_documents_into_a_draft() {
    let registry = tax_form::registry().expect("registry");
    let generator = tax_form::DraftGenerator::new(registry.clone());
    let mut m = WizardMachine::new(registry);

    let err = m.submit_step(answers! {}).unwrap_err();
    assert_eq!(err, WizardError::Validation(vec![ValidationError::MissingRequiredField("w2Documents".into())]));

    m.attach_file("w2Documents", FileDescriptor::new("w2-acme.pdf", 2048).with_mime_type("application/pdf"))
     .expect("attach w2");
    m.attach_file("w2Documents", FileDescriptor::new("w2-globex.pdf", 1536)).expect("attach second w2");
    m.submit_step_with(answers! {}, &generator).await.expect("employment");

    m.attach_file("dividendDocuments", FileDescriptor::new("1099-div.pdf", 512)).expect("attach div");
    m.submit_step_with(answers! {}, &generator).await.expect("investments");
    m.submit_step_with(answers! {}, &generator).await.expect("deductions");
    let art = complete(m.submit_step_with(answers! {}, &generator).await.expect("business"));

    let draft = DraftSummary::from_artifact(&art).expect("decode draft");
    assert_eq!(draft.document_count, 3);
    assert_eq!(draft.sections.get("employment"), Some(&2));
    assert_eq!(draft.sections.get("investments"), Some(&1));
    assert_eq!(draft.sections.get("business"), Some(&0));
    assert_eq!(draft.documents[0].size_kb, 2.0);
    assert_eq!(draft.documents[1].size_kb, 1.5);
    assert_eq!(draft.documents[0].maps_to.as_deref(), Some("Form 1040, Line 1a"));
    assert_eq!(draft.next_steps.len(), 4);
    assert_eq!(m.phase(), WizardPhase::Complete);
}

#[tokio::test]
async fn attaching_a_field_of_another_step_is_rejected() {
    let mut m = WizardMachine::new(tax_form::registry().expect("registry"));
    let err = m.attach_file("dividendDocuments", FileDescriptor::new("x.pdf", 1)).unwrap_err();
    assert_eq!(err, WizardError::InvalidField("dividendDocuments".into()));
}

fn booking_answers(email: &str, date: &str) -> taxwiz_core::Answers {
    answers! {
        "agentType" => "tax-lawyer",
        "consultationType" => "video",
        "preferredDate" => date,
        "preferredTime" => "10:00 AM",
        "description" => "Need help with an audit letter",
        "contactPhone" => "5551234567",
        "contactEmail" => email,
    }
}

#[tokio::test]
async fn booking_confirms_with_estimated_cost() {
    let generator = booking::BookingGenerator::new();
    let mut m = WizardMachine::new(booking::registry().expect("registry"));
    m.submit_step_with(answers! { "serviceType" => "full-service" }, &generator).await.expect("selection");
    let art = complete(m.submit_step_with(booking_answers("ada@example.com", "2025-04-01"), &generator)
                        .await
                        .expect("booking"));
    let confirmation = BookingConfirmation::from_artifact(&art).expect("decode");
    assert_eq!(confirmation.estimated_cost, 1500);
    assert_eq!(confirmation.agent_title, "Tax Attorney");
    assert_eq!(confirmation.preferred_date, "2025-04-01");
}

#[tokio::test]
async fn booking_form_rules_are_enforced_by_the_gate() {
    let mut m = WizardMachine::new(booking::registry().expect("registry"));
    m.submit_step(answers! { "serviceType" => "hourly" }).expect("selection");
    let short = answers! {
        "agentType" => "notary",
        "consultationType" => "video",
        "preferredDate" => "2025-04-01",
        "preferredTime" => "10:00 AM",
        "description" => "short",
        "contactPhone" => "555",
    };
    let err = m.submit_step(short).unwrap_err();
    assert_eq!(err.validation_errors().map(|e| e.iter().map(|v| v.field_id().to_string()).collect::<Vec<_>>()),
               Some(vec!["agentType".to_string(),
                         "description".to_string(),
                         "contactPhone".to_string(),
                         "contactEmail".to_string()]));
}

#[tokio::test]
async fn malformed_email_fails_generation_and_can_be_fixed() {
    let generator = booking::BookingGenerator::new();
    let mut m = WizardMachine::new(booking::registry().expect("registry"));
    m.submit_step_with(answers! { "serviceType" => "hourly" }, &generator).await.expect("selection");

    let err = m.submit_step_with(booking_answers("not-an-email", "2025-04-01"), &generator).await.unwrap_err();
    assert!(matches!(err, WizardError::GenerationFailed(_)));
    assert_eq!(m.phase(), WizardPhase::Collecting);
    assert_eq!(m.current_step_index(), 1);

    let err = m.submit_step_with(booking_answers("ada@example.com", "April 1st"), &generator).await.unwrap_err();
    assert!(matches!(err, WizardError::GenerationFailed(_)));

    let art = complete(m.submit_step_with(booking_answers("ada@example.com", "2025-04-01"), &generator)
                        .await
                        .expect("fixed"));
    assert_eq!(BookingConfirmation::from_artifact(&art).expect("decode").estimated_cost, 300);
}

#[tokio::test]
async fn investment_advice_from_profile() {
    let generator = investment::InvestmentAdvisorGenerator::new();
    let mut m = WizardMachine::new(investment::registry().expect("registry"));
    let profile = answers! {
        "monthlyIncome" => "5000",
        "currentAge" => 35,
        "filingStatus" => "Single",
        "investmentGoals" => "Retire early",
    };
    let art = complete(m.submit_step_with(profile, &generator).await.expect("profile"));
    let report = InvestmentReport::from_artifact(&art).expect("decode");
    assert_eq!(report.advice.max_tax_deductible_amount, 9_000.0);
    assert_eq!(report.advice.recommended_monthly_investment, 750.0);
    assert_eq!(report.current_age, Some(35.0));
}

#[tokio::test]
async fn same_snapshot_same_artifact_even_with_latency() {
    let kind = WizardKind::Investment;
    let registry = kind.registry().expect("registry");
    let generator = kind.generator(&registry, Latency::of(Duration::from_millis(5)));
    let profile = || {
        answers! {
            "monthlyIncome" => 12000,
            "currentAge" => 50,
            "filingStatus" => "Head of Household",
            "investmentGoals" => "College fund",
        }
    };
    let mut m1 = WizardMachine::new(registry.clone());
    let mut m2 = WizardMachine::new(registry);
    let a1 = complete(m1.submit_step_with(profile(), &generator).await.expect("first"));
    let a2 = complete(m2.submit_step_with(profile(), &generator).await.expect("second"));
    assert_eq!(a1, a2);
}

#[test]
fn wizard_kinds_parse_by_name() {
    for kind in WizardKind::ALL {
        assert_eq!(kind.name().parse::<WizardKind>(), Ok(kind));
        assert!(kind.registry().is_ok());
    }
    assert!("taxes".parse::<WizardKind>().is_err());
}
