//! Handle asíncrono y clonable sobre una `WizardMachine`.
//!
//! Todas las operaciones se serializan con un mutex. La generación del paso
//! final corre en una tarea de tokio sin retener el lock: mientras tanto la
//! fase es `Generating` y cualquier otra mutación desde otro clon se rechaza
//! con `Busy`. La tarea aplica su resultado aunque el llamador deje de
//! esperarla (la generación no es cancelable).
use log::error;
use parking_lot::Mutex;
use std::sync::Arc;
use uuid::Uuid;

use super::{Progress, StepOutcome, Submission, WizardMachine};
use crate::errors::{GenerationError, WizardError};
use crate::event::{EventStore, InMemoryEventStore, WizardEvent};
use crate::generator::ResultGenerator;
use crate::model::{Answers, FileDescriptor, ResultArtifact, UploadedFileRecord, WizardSnapshot};
use crate::step::{StepDefinition, WizardPhase};

pub struct WizardSession<G, E = InMemoryEventStore>
    where G: ResultGenerator + 'static,
          E: EventStore + Send + 'static
{
    machine: Arc<Mutex<WizardMachine<E>>>,
    generator: Arc<G>,
}

impl<G, E> Clone for WizardSession<G, E>
    where G: ResultGenerator + 'static,
          E: EventStore + Send + 'static
{
    fn clone(&self) -> Self {
        Self { machine: Arc::clone(&self.machine),
               generator: Arc::clone(&self.generator) }
    }
}

impl<G, E> WizardSession<G, E>
    where G: ResultGenerator + 'static,
          E: EventStore + Send + 'static
{
    pub fn new(machine: WizardMachine<E>, generator: G) -> Self {
        Self::with_shared_generator(machine, Arc::new(generator))
    }

    /// Variante que comparte un generador entre varias sesiones.
    pub fn with_shared_generator(machine: WizardMachine<E>, generator: Arc<G>) -> Self {
        Self { machine: Arc::new(Mutex::new(machine)),
               generator }
    }

    pub fn wizard_id(&self) -> Uuid {
        self.machine.lock().wizard_id()
    }

    pub fn phase(&self) -> WizardPhase {
        self.machine.lock().phase()
    }

    pub fn current_step_index(&self) -> usize {
        self.machine.lock().current_step_index()
    }

    pub fn current_step(&self) -> Result<StepDefinition, WizardError> {
        self.machine.lock().current_step().cloned()
    }

    pub fn progress(&self) -> Progress {
        self.machine.lock().progress()
    }

    pub fn snapshot(&self) -> WizardSnapshot {
        self.machine.lock().snapshot()
    }

    pub fn uploaded_files(&self) -> Vec<UploadedFileRecord> {
        self.machine.lock().uploaded_files().to_vec()
    }

    pub fn artifact(&self) -> Option<ResultArtifact> {
        self.machine.lock().artifact().cloned()
    }

    pub fn events(&self) -> Vec<WizardEvent> {
        self.machine.lock().events()
    }

    pub fn event_variants(&self) -> Vec<&'static str> {
        self.machine.lock().event_variants()
    }

    pub fn attach_file(&self, field_id: &str, file: FileDescriptor) -> Result<UploadedFileRecord, WizardError> {
        self.machine.lock().attach_file(field_id, file)
    }

    pub fn go_to_previous_step(&self) -> Result<(), WizardError> {
        self.machine.lock().go_to_previous_step()
    }

    pub fn restart(&self) -> Result<(), WizardError> {
        self.machine.lock().restart()
    }

    pub fn reopen(&self) -> Result<(), WizardError> {
        self.machine.lock().reopen()
    }

    /// Envía el paso actual. En el paso final espera a que la generación
    /// termine y devuelve el artifact.
    pub async fn submit_step(&self, step_answers: Answers) -> Result<StepOutcome, WizardError> {
        let submission = self.machine.lock().submit_step(step_answers)?;
        let snapshot = match submission {
            Submission::Advanced { step_index } => return Ok(StepOutcome::Advanced { step_index }),
            Submission::Generate(snapshot) => snapshot,
        };

        let machine = Arc::clone(&self.machine);
        let generator = Arc::clone(&self.generator);
        let task = tokio::spawn(async move {
            let name = generator.name().to_string();
            // El generador corre en su propia tarea: un panic llega como JoinError
            // y la fase se libera aquí, haya o no un llamador esperando.
            let outcome = match tokio::spawn(async move { generator.generate(&snapshot).await }).await {
                Ok(outcome) => outcome,
                Err(join_err) => {
                    error!("generator {name} aborted: {join_err}");
                    Err(GenerationError::new(format!("generation task aborted: {join_err}")))
                }
            };
            machine.lock().complete_generation(outcome)
        });

        match task.await {
            Ok(applied) => applied.map(StepOutcome::Completed),
            Err(join_err) => {
                error!("generation task for {} aborted: {join_err}", self.generator.name());
                let reason = format!("generation task aborted: {join_err}");
                self.machine.lock().complete_generation(Err(GenerationError::new(reason))).map(StepOutcome::Completed)
            }
        }
    }
}
