//! taxwiz-core: motor de formularios por pasos (wizard)
pub mod constants;
pub mod engine;
pub mod errors;
pub mod event;
pub mod generator;
pub mod hashing;
mod macros;
pub mod model;
pub mod step;
pub mod validation;

pub use engine::{Progress, StepOutcome, Submission, WizardBuilder, WizardMachine, WizardSession};
pub use errors::{GenerationError, RegistryError, ValidationError, WizardError};
pub use event::{EventStore, InMemoryEventStore, WizardEvent, WizardEventKind};
pub use generator::{FnGenerator, ResultGenerator};
pub use model::{AnswerValue, Answers, ArtifactSpec, FileDescriptor, ResultArtifact, UploadedFileRecord, WizardSnapshot};
pub use step::{FieldDefinition, FieldKind, StepDefinition, StepRegistry, StepRegistryBuilder, WizardPhase};
pub use validation::{validate_field, validate_step};
