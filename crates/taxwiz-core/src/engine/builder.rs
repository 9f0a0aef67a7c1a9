//! Builder para `WizardMachine` y `WizardSession`.
//!
//! ```ignore
//! let session = WizardMachine::builder(Arc::new(registry))
//!     .wizard_id(id)
//!     .into_session(generator);
//! ```
use std::sync::Arc;
use uuid::Uuid;

use super::{WizardMachine, WizardSession};
use crate::event::{EventStore, InMemoryEventStore};
use crate::generator::ResultGenerator;
use crate::step::StepRegistry;

#[derive(Debug)]
pub struct WizardBuilder<E: EventStore> {
    registry: Arc<StepRegistry>,
    event_store: E,
    wizard_id: Option<Uuid>,
}

impl WizardBuilder<InMemoryEventStore> {
    pub fn new(registry: Arc<StepRegistry>) -> Self {
        Self { registry,
               event_store: InMemoryEventStore::default(),
               wizard_id: None }
    }
}

impl<E: EventStore> WizardBuilder<E> {
    /// Sustituye el store de eventos.
    pub fn event_store<E2: EventStore>(self, event_store: E2) -> WizardBuilder<E2> {
        WizardBuilder { registry: self.registry,
                        event_store,
                        wizard_id: self.wizard_id }
    }

    /// Fija el id del wizard (por defecto uno aleatorio).
    pub fn wizard_id(mut self, wizard_id: Uuid) -> Self {
        self.wizard_id = Some(wizard_id);
        self
    }

    pub fn build(self) -> WizardMachine<E> {
        let id = self.wizard_id.unwrap_or_else(Uuid::new_v4);
        WizardMachine::with_store(self.registry, self.event_store, id)
    }

    pub fn into_session<G>(self, generator: G) -> WizardSession<G, E>
        where G: ResultGenerator + 'static,
              E: Send + 'static
    {
        WizardSession::new(self.build(), generator)
    }
}
