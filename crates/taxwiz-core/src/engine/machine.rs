//! Máquina de estados del wizard.
//!
//! Dueña exclusiva del estado (`current_step_index`, respuestas, archivos,
//! fase). Es síncrona: el paso final no ejecuta el generador sino que devuelve
//! `Submission::Generate(snapshot)` y deja la fase en `Generating`; quien la
//! conduce ejecuta el generador y entrega el resultado con
//! `complete_generation`. `WizardSession` hace esto sobre tokio.
use log::{debug, info, warn};
use std::sync::Arc;
use uuid::Uuid;

use super::{Progress, StepOutcome, Submission, WizardBuilder};
use crate::errors::{GenerationError, WizardError};
use crate::event::{EventStore, InMemoryEventStore, WizardEvent, WizardEventKind};
use crate::generator::ResultGenerator;
use crate::model::{Answers, FileDescriptor, ResultArtifact, UploadedFileRecord, WizardSnapshot};
use crate::step::{StepDefinition, StepRegistry, WizardPhase};
use crate::validation::validate_step;

#[derive(Debug)]
pub struct WizardMachine<E: EventStore = InMemoryEventStore> {
    wizard_id: Uuid,
    registry: Arc<StepRegistry>,
    event_store: E,
    current_step_index: usize,
    answers: Answers,
    uploaded_files: Vec<UploadedFileRecord>,
    phase: WizardPhase,
    artifact: Option<ResultArtifact>,
}

impl WizardMachine<InMemoryEventStore> {
    /// Máquina con id aleatorio y store en memoria.
    pub fn new(registry: Arc<StepRegistry>) -> Self {
        Self::with_store(registry, InMemoryEventStore::default(), Uuid::new_v4())
    }

    pub fn builder(registry: Arc<StepRegistry>) -> WizardBuilder<InMemoryEventStore> {
        WizardBuilder::new(registry)
    }
}

impl<E: EventStore> WizardMachine<E> {
    pub fn with_store(registry: Arc<StepRegistry>, mut event_store: E, wizard_id: Uuid) -> Self {
        event_store.append_kind(wizard_id,
                                WizardEventKind::WizardInitialized { registry_hash: registry.definition_hash().to_string(),
                                                                     step_count: registry.step_count() });
        debug!("wizard {wizard_id} initialized with {} step(s)", registry.step_count());
        Self { wizard_id,
               registry,
               event_store,
               current_step_index: 0,
               answers: Answers::new(),
               uploaded_files: Vec::new(),
               phase: WizardPhase::Collecting,
               artifact: None }
    }

    pub fn wizard_id(&self) -> Uuid {
        self.wizard_id
    }

    pub fn registry(&self) -> &Arc<StepRegistry> {
        &self.registry
    }

    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    pub fn current_step_index(&self) -> usize {
        self.current_step_index
    }

    pub fn current_step(&self) -> Result<&StepDefinition, WizardError> {
        self.registry.step_at(self.current_step_index)
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn uploaded_files(&self) -> &[UploadedFileRecord] {
        &self.uploaded_files
    }

    /// Artifact del último ciclo completado (sólo en fase `Complete`).
    pub fn artifact(&self) -> Option<&ResultArtifact> {
        self.artifact.as_ref()
    }

    pub fn is_final_step(&self) -> bool {
        self.current_step_index + 1 == self.registry.step_count()
    }

    pub fn progress(&self) -> Progress {
        Progress::new(self.current_step_index, self.registry.step_count())
    }

    pub fn snapshot(&self) -> WizardSnapshot {
        WizardSnapshot { wizard_id: self.wizard_id,
                         registry_hash: self.registry.definition_hash().to_string(),
                         step_index: self.current_step_index,
                         answers: self.answers.clone(),
                         uploaded_files: self.uploaded_files.clone() }
    }

    fn ensure_collecting(&self) -> Result<(), WizardError> {
        match self.phase {
            WizardPhase::Collecting => Ok(()),
            WizardPhase::Generating => Err(WizardError::Busy),
            WizardPhase::Complete => Err(WizardError::AlreadyComplete),
        }
    }

    fn record(&mut self, kind: WizardEventKind) {
        self.event_store.append_kind(self.wizard_id, kind);
    }

    /// Adjunta un archivo a un campo `FileUpload` del paso actual. No valida
    /// contenido, tamaño ni tipo MIME.
    pub fn attach_file(&mut self, field_id: &str, file: FileDescriptor) -> Result<UploadedFileRecord, WizardError> {
        self.ensure_collecting()?;
        if !self.current_step()?.is_file_field(field_id) {
            return Err(WizardError::InvalidField(field_id.to_string()));
        }
        let record = UploadedFileRecord::from_descriptor(field_id, file);
        self.uploaded_files.push(record.clone());
        self.record(WizardEventKind::FileAttached { step_index: self.current_step_index,
                                                    field_id: field_id.to_string(),
                                                    file_id: record.id });
        debug!("wizard {} attached `{}` ({} bytes) to {field_id}", self.wizard_id, record.name, record.size_bytes);
        Ok(record)
    }

    /// Envía las respuestas del paso actual.
    ///
    /// Si la validación falla el estado no cambia y se devuelven todos los
    /// errores. Si pasa, las respuestas se fusionan (las posteriores
    /// sobreescriben ids repetidos) y el wizard avanza o, en el paso final,
    /// pasa a `Generating` devolviendo el snapshot a generar.
    pub fn submit_step(&mut self, step_answers: Answers) -> Result<Submission, WizardError> {
        self.ensure_collecting()?;
        let step = self.current_step()?;
        let step_id = step.id.clone();
        let errors = validate_step(step, &step_answers, &self.uploaded_files);
        if !errors.is_empty() {
            warn!("wizard {} rejected step `{step_id}`: {} validation error(s)", self.wizard_id, errors.len());
            self.record(WizardEventKind::StepRejected { step_index: self.current_step_index,
                                                        step_id,
                                                        error_count: errors.len() });
            return Err(WizardError::Validation(errors));
        }

        self.answers.extend(step_answers);
        self.record(WizardEventKind::StepSubmitted { step_index: self.current_step_index,
                                                     step_id });

        if !self.is_final_step() {
            self.current_step_index += 1;
            debug!("wizard {} advanced to step {}", self.wizard_id, self.current_step_index);
            return Ok(Submission::Advanced { step_index: self.current_step_index });
        }

        let snapshot = self.snapshot();
        self.phase = WizardPhase::Generating;
        self.record(WizardEventKind::GenerationStarted { snapshot_fingerprint: snapshot.fingerprint() });
        debug!("wizard {} generating result", self.wizard_id);
        Ok(Submission::Generate(snapshot))
    }

    /// Aplica el resultado del generador. Éxito → `Complete`; fallo →
    /// `Collecting` en el mismo paso, sin exponer artifact parcial.
    pub fn complete_generation(&mut self,
                               outcome: Result<ResultArtifact, GenerationError>)
                               -> Result<ResultArtifact, WizardError> {
        if self.phase != WizardPhase::Generating {
            return Err(WizardError::Internal("no generation in progress".into()));
        }
        match outcome {
            Ok(artifact) => {
                self.phase = WizardPhase::Complete;
                self.artifact = Some(artifact.clone());
                self.record(WizardEventKind::WizardCompleted { artifact_fingerprint: artifact.fingerprint.clone() });
                info!("wizard {} completed ({})", self.wizard_id, artifact.kind);
                Ok(artifact)
            }
            Err(e) => {
                self.phase = WizardPhase::Collecting;
                warn!("wizard {} generation failed: {}", self.wizard_id, e.reason);
                self.record(WizardEventKind::GenerationFailed { reason: e.reason.clone() });
                Err(e.into())
            }
        }
    }

    /// Envío con un único dueño: valida, avanza y, en el paso final, ejecuta
    /// el generador en línea.
    pub async fn submit_step_with<G>(&mut self, step_answers: Answers, generator: &G) -> Result<StepOutcome, WizardError>
        where G: ResultGenerator + ?Sized
    {
        match self.submit_step(step_answers)? {
            Submission::Advanced { step_index } => Ok(StepOutcome::Advanced { step_index }),
            Submission::Generate(snapshot) => {
                let outcome = generator.generate(&snapshot).await;
                self.complete_generation(outcome).map(StepOutcome::Completed)
            }
        }
    }

    /// Retrocede un paso. Conserva las respuestas ya fusionadas.
    pub fn go_to_previous_step(&mut self) -> Result<(), WizardError> {
        self.ensure_collecting()?;
        if self.current_step_index == 0 {
            return Err(WizardError::Boundary("already at the first step".into()));
        }
        let from_index = self.current_step_index;
        self.current_step_index -= 1;
        self.record(WizardEventKind::StepReverted { from_index,
                                                    to_index: self.current_step_index });
        Ok(())
    }

    /// Reinicio completo. Rechazado con `Busy` mientras hay una generación en
    /// curso: la generación no es cancelable.
    pub fn restart(&mut self) -> Result<(), WizardError> {
        if self.phase == WizardPhase::Generating {
            return Err(WizardError::Busy);
        }
        self.current_step_index = 0;
        self.answers.clear();
        self.uploaded_files.clear();
        self.artifact = None;
        self.phase = WizardPhase::Collecting;
        self.record(WizardEventKind::WizardRestarted);
        debug!("wizard {} restarted", self.wizard_id);
        Ok(())
    }

    /// Vuelve a edición desde `Complete` en el paso final, conservando
    /// respuestas y archivos.
    pub fn reopen(&mut self) -> Result<(), WizardError> {
        match self.phase {
            WizardPhase::Complete => {}
            WizardPhase::Generating => return Err(WizardError::Busy),
            WizardPhase::Collecting => return Err(WizardError::Boundary("wizard is not complete".into())),
        }
        self.artifact = None;
        self.phase = WizardPhase::Collecting;
        self.record(WizardEventKind::WizardReopened);
        Ok(())
    }

    pub fn event_store(&self) -> &E {
        &self.event_store
    }

    pub fn events(&self) -> Vec<WizardEvent> {
        self.event_store.list(self.wizard_id)
    }

    /// Variante compacta de eventos (una letra por evento).
    pub fn event_variants(&self) -> Vec<&'static str> {
        self.events().iter().map(|e| e.kind.letter()).collect()
    }
}
