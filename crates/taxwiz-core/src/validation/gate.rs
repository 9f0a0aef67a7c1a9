use crate::errors::ValidationError;
use crate::model::{AnswerValue, Answers, UploadedFileRecord};
use crate::step::{FieldDefinition, FieldKind, StepDefinition};

/// Valida un paso completo. Devuelve todas las violaciones (no sólo la
/// primera), en el orden de definición de los campos. Lista vacía = admisible.
pub fn validate_step(step: &StepDefinition, answers: &Answers, uploads: &[UploadedFileRecord]) -> Vec<ValidationError> {
    step.fields
        .iter()
        .filter_map(|field| validate_field(field, answers.get(&field.id), uploads))
        .collect()
}

/// Valida un campo. Como máximo un error por campo; la ausencia de un campo
/// requerido tiene prioridad sobre los errores de formato.
pub fn validate_field(field: &FieldDefinition,
                      value: Option<&AnswerValue>,
                      uploads: &[UploadedFileRecord])
                      -> Option<ValidationError> {
    if field.kind == FieldKind::FileUpload {
        let attached = uploads.iter().any(|f| f.owner_field_id == field.id);
        return (field.required && !attached).then(|| ValidationError::MissingRequiredField(field.id.clone()));
    }

    let value = match value.filter(|v| !v.is_blank()) {
        Some(v) => v,
        None if field.required => return Some(ValidationError::MissingRequiredField(field.id.clone())),
        None => return None,
    };

    let well_formed = match field.kind {
        FieldKind::Number => value.as_number().is_some(),
        FieldKind::SingleSelect => field.options.iter().any(|o| *o == value.to_string()),
        FieldKind::Text | FieldKind::MultilineText => within_length(field, value),
        FieldKind::FileUpload => true,
    };
    (!well_formed).then(|| ValidationError::InvalidFormat(field.id.clone()))
}

fn within_length(field: &FieldDefinition, value: &AnswerValue) -> bool {
    let len = value.to_string().chars().count();
    field.min_length.map_or(true, |min| len >= min) && field.max_length.map_or(true, |max| len <= max)
}
