//! Registro inmutable de pasos.
//!
//! El orden de los pasos se fija en la construcción y no cambia. El registro
//! se comparte (`Arc<StepRegistry>`) entre todas las sesiones que lo usan.
use indexmap::IndexMap;
use serde_json::json;
use std::collections::HashSet;

use super::{FieldKind, StepDefinition};
use crate::errors::{RegistryError, WizardError};
use crate::hashing::hash_value;

#[derive(Debug, Clone)]
pub struct StepRegistry {
    steps: IndexMap<String, StepDefinition>,
    definition_hash: String,
}

impl StepRegistry {
    pub fn builder() -> StepRegistryBuilder {
        StepRegistryBuilder::default()
    }

    /// Paso en la posición `index` del orden de construcción.
    pub fn step_at(&self, index: usize) -> Result<&StepDefinition, WizardError> {
        self.steps
            .get_index(index)
            .map(|(_, step)| step)
            .ok_or(WizardError::OutOfRange { index,
                                             step_count: self.steps.len() })
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn index_of(&self, step_id: &str) -> Option<usize> {
        self.steps.get_index_of(step_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StepDefinition> {
        self.steps.values()
    }

    /// Hash estable del catálogo (ids, campos, reglas y textos).
    pub fn definition_hash(&self) -> &str {
        &self.definition_hash
    }
}

#[derive(Debug, Default)]
pub struct StepRegistryBuilder {
    steps: Vec<StepDefinition>,
}

impl StepRegistryBuilder {
    pub fn step(mut self, step: StepDefinition) -> Self {
        self.steps.push(step);
        self
    }

    /// Valida el catálogo y congela el orden.
    pub fn build(self) -> Result<StepRegistry, RegistryError> {
        if self.steps.is_empty() {
            return Err(RegistryError::Empty);
        }
        let mut steps: IndexMap<String, StepDefinition> = IndexMap::with_capacity(self.steps.len());
        for step in self.steps {
            check_fields(&step)?;
            if steps.contains_key(&step.id) {
                return Err(RegistryError::DuplicateStep(step.id));
            }
            steps.insert(step.id.clone(), step);
        }
        let catalogue: Vec<&StepDefinition> = steps.values().collect();
        let definition_hash = hash_value(&json!(catalogue));
        Ok(StepRegistry { steps, definition_hash })
    }
}

fn check_fields(step: &StepDefinition) -> Result<(), RegistryError> {
    let mut seen = HashSet::new();
    for field in &step.fields {
        if !seen.insert(field.id.as_str()) {
            return Err(RegistryError::DuplicateField { step_id: step.id.clone(),
                                                       field_id: field.id.clone() });
        }
        match (field.kind, field.options.is_empty()) {
            (FieldKind::SingleSelect, true) => return Err(RegistryError::MissingOptions(field.id.clone())),
            (FieldKind::SingleSelect, false) | (_, true) => {}
            (_, false) => return Err(RegistryError::UnexpectedOptions(field.id.clone())),
        }
        if let (Some(min), Some(max)) = (field.min_length, field.max_length) {
            if min > max {
                return Err(RegistryError::InvalidLengthBounds(field.id.clone()));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::FieldDefinition;

    fn two_steps() -> StepRegistryBuilder {
        StepRegistry::builder().step(StepDefinition::new("a", "A", "").field(FieldDefinition::text("x").required()))
                               .step(StepDefinition::new("b", "B", "").field(FieldDefinition::text("y").required()))
    }

    #[test]
    fn step_at_follows_construction_order() {
        let reg = two_steps().build().expect("registry");
        assert_eq!(reg.step_count(), 2);
        assert_eq!(reg.step_at(0).map(|s| s.id.as_str()), Ok("a"));
        assert_eq!(reg.step_at(1).map(|s| s.id.as_str()), Ok("b"));
        assert_eq!(reg.index_of("b"), Some(1));
    }

    #[test]
    fn step_at_out_of_range() {
        let reg = two_steps().build().expect("registry");
        assert_eq!(reg.step_at(2).unwrap_err(), WizardError::OutOfRange { index: 2, step_count: 2 });
        assert!(reg.step_at(usize::MAX).is_err());
    }

    #[test]
    fn rejects_duplicate_step_ids() {
        let err = two_steps().step(StepDefinition::new("a", "again", "")).build().unwrap_err();
        assert_eq!(err, RegistryError::DuplicateStep("a".into()));
    }

    #[test]
    fn rejects_duplicate_field_ids_within_a_step() {
        let err = StepRegistry::builder().step(StepDefinition::new("s", "", "").field(FieldDefinition::text("f"))
                                                                         .field(FieldDefinition::number("f")))
                                         .build()
                                         .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateField { .. }));
    }

    #[test]
    fn rejects_empty_registry_and_bad_select() {
        assert_eq!(StepRegistry::builder().build().unwrap_err(), RegistryError::Empty);
        let empty: [&str; 0] = [];
        let err = StepRegistry::builder().step(StepDefinition::new("s", "", "").field(FieldDefinition::select("k", empty)))
                                         .build()
                                         .unwrap_err();
        assert_eq!(err, RegistryError::MissingOptions("k".into()));
    }

    #[test]
    fn rejects_inverted_length_bounds() {
        let err = StepRegistry::builder().step(StepDefinition::new("s", "", "").field(FieldDefinition::text("t").min_length(6)
                                                                                                               .max_length(4)))
                                         .build()
                                         .unwrap_err();
        assert_eq!(err, RegistryError::InvalidLengthBounds("t".into()));
    }

    #[test]
    fn definition_hash_is_stable_and_content_sensitive() {
        let h1 = two_steps().build().expect("r1").definition_hash().to_string();
        let h2 = two_steps().build().expect("r2").definition_hash().to_string();
        assert_eq!(h1, h2);
        let other = StepRegistry::builder().step(StepDefinition::new("a", "A", "").field(FieldDefinition::text("x")))
                                           .build()
                                           .expect("r3");
        assert_ne!(h1, other.definition_hash());
    }
}
