use std::time::Duration;

use taxwiz::providers::response::{canned_responses, SequenceResponseProvider};
use taxwiz::{provider_from_config, AppConfig, AppError, ChatAssistant, ChatMessage, ResponseMode, Session};
use taxwiz_adapters::{Latency, WizardKind};
use taxwiz_core::{answers, FileDescriptor, StepOutcome, WizardError, WizardMachine, WizardPhase};

#[tokio::test]
async fn configured_latency_keeps_the_wizard_busy_until_the_draft_is_ready() {
    let cfg = AppConfig::from_lookup(|key| match key {
                  "TAXWIZ_GENERATION_LATENCY_MS" => Some("50".to_string()),
                  _ => None,
              }).expect("config");
    let kind = WizardKind::TaxForm;
    let registry = kind.registry().expect("registry");
    let generator = kind.generator(&registry, Latency::of(cfg.generation_latency));
    let session = WizardMachine::builder(registry).into_session(generator);

    session.attach_file("w2Documents", FileDescriptor::new("w2.pdf", 1024)).expect("attach");
    for _ in 0..3 {
        session.submit_step(answers! {}).await.expect("advance");
    }

    let driver = session.clone();
    let pending = tokio::spawn(async move { driver.submit_step(answers! {}).await });
    while session.phase() != WizardPhase::Generating {
        tokio::time::sleep(Duration::from_millis(1)).await;
    }
    assert_eq!(session.go_to_previous_step(), Err(WizardError::Busy));

    let outcome = pending.await.expect("join").expect("draft");
    assert!(matches!(outcome, StepOutcome::Completed(ref a) if a.kind == "draft-summary"));
    assert_eq!(session.event_variants().last(), Some(&"C"));
}

#[tokio::test]
async fn chat_transcript_round_trips_as_json() {
    let mut chat = ChatAssistant::new(SequenceResponseProvider::new());
    chat.send("Business expenses").await.expect("reply");
    let json = serde_json::to_string(chat.transcript()).expect("serialize");
    let back: Vec<ChatMessage> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, chat.transcript());
    assert_eq!(back[2].links, canned_responses()[0].links);
}

#[tokio::test]
async fn seeded_random_provider_is_reproducible_through_config() {
    let cfg = AppConfig { response_mode: ResponseMode::Random,
                          response_seed: Some(3),
                          ..AppConfig::default() };
    let mut a = ChatAssistant::new(provider_from_config(&cfg));
    let mut b = ChatAssistant::new(provider_from_config(&cfg));
    for prompt in ["one", "two", "three"] {
        let ra = a.send(prompt).await.map(|m| m.content.clone());
        let rb = b.send(prompt).await.map(|m| m.content.clone());
        assert_eq!(ra, rb);
    }
}

#[test]
fn wizard_errors_surface_through_app_error() {
    let mut session = Session::init();
    let err = session.login("ab", "1234").unwrap_err();
    assert!(matches!(err, AppError::Auth(_)));

    let registry = WizardKind::Booking.registry().expect("registry");
    let mut m = WizardMachine::new(registry);
    let err: AppError = m.go_to_previous_step().unwrap_err().into();
    assert!(matches!(err, AppError::Wizard(WizardError::Boundary(_))));
}
