use serde_json::json;
use std::sync::Arc;

use taxwiz_core::{answers, FieldDefinition, FileDescriptor, FnGenerator, GenerationError, ResultArtifact, StepDefinition,
                  StepOutcome, StepRegistry, Submission, ValidationError, WizardError, WizardEventKind, WizardMachine,
                  WizardPhase, WizardSnapshot};

fn registry() -> Arc<StepRegistry> {
    let reg = StepRegistry::builder().step(StepDefinition::new("a", "A", "").field(FieldDefinition::text("x").required()))
                                     .step(StepDefinition::new("b", "B", "").field(FieldDefinition::text("y").required()))
                                     .build()
                                     .expect("registry");
    Arc::new(reg)
}

fn upload_registry() -> Arc<StepRegistry> {
    let reg = StepRegistry::builder().step(StepDefinition::new("docs", "Documents", "").field(FieldDefinition::file("w2").required()))
                                     .step(StepDefinition::new("review", "Review", ""))
                                     .build()
                                     .expect("registry");
    Arc::new(reg)
}

fn echo_generator() -> FnGenerator<impl Fn(&WizardSnapshot) -> Result<ResultArtifact, GenerationError> + Send + Sync> {
    FnGenerator::new("echo", |snap: &WizardSnapshot| Ok(ResultArtifact::new("echo", json!({ "answers": snap.answers }))))
}

#[test]
fn two_step_wizard_reaches_complete_with_merged_answers() {
    let mut m = WizardMachine::new(registry());
    let gen = echo_generator();

    let out = tokio_test::block_on(m.submit_step_with(answers! { "x" => "1" }, &gen)).expect("step a");
    assert_eq!(out, StepOutcome::Advanced { step_index: 1 });
    assert_eq!(m.current_step_index(), 1);

    let out = tokio_test::block_on(m.submit_step_with(answers! { "y" => "2" }, &gen)).expect("step b");
    let artifact = out.artifact().expect("artifact");
    assert_eq!(artifact.payload, json!({ "answers": { "x": "1", "y": "2" } }));
    assert_eq!(m.phase(), WizardPhase::Complete);
    assert_eq!(m.artifact(), Some(artifact));
}

#[test]
fn rejected_step_leaves_state_untouched() {
    let mut m = WizardMachine::new(registry());
    let before = m.snapshot();
    let err = m.submit_step(answers! { "x" => "   " }).unwrap_err();
    assert_eq!(err, WizardError::Validation(vec![ValidationError::MissingRequiredField("x".into())]));
    assert_eq!(m.snapshot(), before);
    assert_eq!(m.phase(), WizardPhase::Collecting);
    assert_eq!(m.event_variants(), vec!["I", "X"]);
}

#[test]
fn later_submission_overwrites_same_field() {
    let mut m = WizardMachine::new(registry());
    m.submit_step(answers! { "x" => "first" }).expect("a");
    m.go_to_previous_step().expect("back");
    assert_eq!(m.answers().get("x").map(|v| v.to_string()), Some("first".into()));
    m.submit_step(answers! { "x" => "second" }).expect("a again");
    assert_eq!(m.answers().get("x").map(|v| v.to_string()), Some("second".into()));
    assert_eq!(m.current_step_index(), 1);
}

#[test]
fn required_upload_gates_the_step() {
    let mut m = WizardMachine::new(upload_registry());
    let err = m.submit_step(answers! {}).unwrap_err();
    assert_eq!(err.validation_errors(), Some(&[ValidationError::MissingRequiredField("w2".into())][..]));

    let rec = m.attach_file("w2", FileDescriptor::new("w2.pdf", 2048).with_mime_type("application/pdf"))
               .expect("attach");
    assert_eq!(rec.owner_field_id, "w2");
    assert_eq!(rec.size_kb(), 2.0);
    assert!(matches!(m.submit_step(answers! {}), Ok(Submission::Advanced { step_index: 1 })));
}

#[test]
fn attach_file_appends_exactly_one_record() {
    let mut m = WizardMachine::new(upload_registry());
    let before = m.uploaded_files().len();
    let rec = m.attach_file("w2", FileDescriptor::new("w2.pdf", 1024)).expect("attach");
    assert_eq!(m.uploaded_files().len(), before + 1);
    assert_eq!(rec.name, "w2.pdf");
    assert_eq!(rec.size_bytes, 1024);
    assert_eq!(m.uploaded_files().last(), Some(&rec));

    // otro adjunto al mismo campo se agrega, no reemplaza
    m.attach_file("w2", FileDescriptor::new("w2-corrected.pdf", 2048)).expect("attach again");
    assert_eq!(m.uploaded_files().len(), before + 2);
    assert_eq!(m.uploaded_files()[0], rec);
}

#[test]
fn attach_to_unknown_or_non_file_field_is_invalid() {
    let mut m = WizardMachine::new(registry());
    assert_eq!(m.attach_file("x", FileDescriptor::new("a.pdf", 1)).unwrap_err(), WizardError::InvalidField("x".into()));
    assert_eq!(m.attach_file("nope", FileDescriptor::new("a.pdf", 1)).unwrap_err(),
               WizardError::InvalidField("nope".into()));
    assert!(m.uploaded_files().is_empty());
}

#[test]
fn previous_step_on_first_step_is_a_boundary() {
    let mut m = WizardMachine::new(registry());
    assert!(matches!(m.go_to_previous_step(), Err(WizardError::Boundary(_))));
    assert_eq!(m.current_step_index(), 0);
}

#[test]
fn generator_failure_returns_to_collecting_on_final_step() {
    let failing = FnGenerator::new("failing", |_: &WizardSnapshot| Err(GenerationError::new("backend down")));
    let mut m = WizardMachine::new(registry());
    m.submit_step(answers! { "x" => "1" }).expect("a");
    let err = tokio_test::block_on(m.submit_step_with(answers! { "y" => "2" }, &failing)).unwrap_err();
    assert_eq!(err, WizardError::GenerationFailed("backend down".into()));
    assert_eq!(m.phase(), WizardPhase::Collecting);
    assert_eq!(m.current_step_index(), 1);
    assert!(m.artifact().is_none());

    // retry with a working generator
    let out = tokio_test::block_on(m.submit_step_with(answers! { "y" => "2" }, &echo_generator())).expect("retry");
    assert!(out.artifact().is_some());
    assert_eq!(m.event_variants(), vec!["I", "S", "S", "G", "E", "S", "G", "C"]);
}

#[test]
fn manual_generation_protocol() {
    let mut m = WizardMachine::new(registry());
    m.submit_step(answers! { "x" => "1" }).expect("a");
    let snap = match m.submit_step(answers! { "y" => "2" }).expect("b") {
        Submission::Generate(snap) => snap,
        other => panic!("expected Generate, got {other:?}"),
    };
    assert_eq!(m.phase(), WizardPhase::Generating);
    assert_eq!(m.submit_step(answers! { "y" => "3" }).unwrap_err(), WizardError::Busy);
    assert_eq!(m.go_to_previous_step().unwrap_err(), WizardError::Busy);
    assert_eq!(m.restart().unwrap_err(), WizardError::Busy);
    assert_eq!(m.reopen().unwrap_err(), WizardError::Busy);
    assert_eq!(m.attach_file("y", FileDescriptor::new("a.pdf", 1)).unwrap_err(), WizardError::Busy);
    assert_eq!(snap.answers.len(), 2);

    let art = m.complete_generation(Ok(ResultArtifact::new("manual", json!({})))).expect("complete");
    assert_eq!(art.kind, "manual");
    assert!(matches!(m.complete_generation(Ok(art)), Err(WizardError::Internal(_))));
}

#[test]
fn complete_wizard_rejects_mutations_until_restart_or_reopen() {
    let mut m = WizardMachine::new(registry());
    let gen = echo_generator();
    tokio_test::block_on(m.submit_step_with(answers! { "x" => "1" }, &gen)).expect("a");
    tokio_test::block_on(m.submit_step_with(answers! { "y" => "2" }, &gen)).expect("b");

    assert_eq!(m.submit_step(answers! { "y" => "2" }).unwrap_err(), WizardError::AlreadyComplete);
    assert_eq!(m.go_to_previous_step().unwrap_err(), WizardError::AlreadyComplete);

    m.reopen().expect("reopen");
    assert_eq!(m.phase(), WizardPhase::Collecting);
    assert_eq!(m.current_step_index(), 1);
    assert_eq!(m.answers().len(), 2);
    assert!(m.artifact().is_none());
    assert!(matches!(m.reopen(), Err(WizardError::Boundary(_))));

    m.restart().expect("restart");
    assert_eq!(m.current_step_index(), 0);
    assert!(m.answers().is_empty());
    assert!(m.uploaded_files().is_empty());
}

#[test]
fn identical_snapshots_produce_identical_artifacts() {
    let gen = echo_generator();
    let run = || {
        let mut m = WizardMachine::new(registry());
        tokio_test::block_on(m.submit_step_with(answers! { "x" => "1" }, &gen)).expect("a");
        tokio_test::block_on(m.submit_step_with(answers! { "y" => "2" }, &gen)).expect("b")
    };
    let a1 = run().artifact().cloned().expect("a1");
    let a2 = run().artifact().cloned().expect("a2");
    assert_eq!(a1, a2);
    assert_eq!(a1.fingerprint, a2.fingerprint);
}

#[test]
fn fingerprint_ignores_wizard_and_attachment_ids() {
    let snapshot_of = || {
        let mut m = WizardMachine::new(upload_registry());
        m.attach_file("w2", FileDescriptor::new("w2.pdf", 1024).with_mime_type("application/pdf")).expect("attach");
        m.snapshot()
    };
    let (s1, s2) = (snapshot_of(), snapshot_of());
    assert_ne!(s1.wizard_id, s2.wizard_id);
    assert_ne!(s1.uploaded_files[0].id, s2.uploaded_files[0].id);
    assert_eq!(s1.fingerprint(), s2.fingerprint());

    let mut m = WizardMachine::new(upload_registry());
    m.attach_file("w2", FileDescriptor::new("w2.pdf", 2048).with_mime_type("application/pdf")).expect("attach");
    assert_ne!(m.snapshot().fingerprint(), s1.fingerprint());
}

#[test]
fn generation_started_carries_snapshot_fingerprint() {
    let mut m = WizardMachine::new(registry());
    m.submit_step(answers! { "x" => "1" }).expect("a");
    let Submission::Generate(snap) = m.submit_step(answers! { "y" => "2" }).expect("b") else {
        panic!("expected Generate");
    };
    let started = m.events()
                   .into_iter()
                   .find_map(|e| match e.kind {
                       WizardEventKind::GenerationStarted { snapshot_fingerprint } => Some(snapshot_fingerprint),
                       _ => None,
                   })
                   .expect("GenerationStarted");
    assert_eq!(started, snap.fingerprint());
}

#[test]
fn progress_tracks_current_step() {
    let mut m = WizardMachine::new(registry());
    assert_eq!(m.progress().step_number, 1);
    assert_eq!(m.progress().percent, 50);
    m.submit_step(answers! { "x" => "1" }).expect("a");
    assert_eq!(m.progress().percent, 100);
}
