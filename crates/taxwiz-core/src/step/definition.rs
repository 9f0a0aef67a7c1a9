use serde::{Deserialize, Serialize};

/// Tipo de un campo. Determina el control que dibuja la presentación y las
/// reglas de formato que aplica la compuerta de validación.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    Text,
    Number,
    MultilineText,
    FileUpload,
    SingleSelect,
}

/// Definición de un campo dentro de un paso.
///
/// `label`, `help_text` y `maps_to` son metadatos de presentación y no
/// participan en la validación.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub id: String,
    pub kind: FieldKind,
    pub required: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maps_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

impl FieldDefinition {
    fn new(id: impl Into<String>, kind: FieldKind) -> Self {
        Self { id: id.into(),
               kind,
               required: false,
               label: String::new(),
               options: Vec::new(),
               help_text: None,
               maps_to: None,
               min_length: None,
               max_length: None }
    }

    pub fn text(id: impl Into<String>) -> Self {
        Self::new(id, FieldKind::Text)
    }

    pub fn number(id: impl Into<String>) -> Self {
        Self::new(id, FieldKind::Number)
    }

    pub fn multiline(id: impl Into<String>) -> Self {
        Self::new(id, FieldKind::MultilineText)
    }

    pub fn file(id: impl Into<String>) -> Self {
        Self::new(id, FieldKind::FileUpload)
    }

    pub fn select<I, S>(id: impl Into<String>, options: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        let mut f = Self::new(id, FieldKind::SingleSelect);
        f.options = options.into_iter().map(Into::into).collect();
        f
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.help_text = Some(text.into());
        self
    }

    pub fn maps_to(mut self, section: impl Into<String>) -> Self {
        self.maps_to = Some(section.into());
        self
    }

    pub fn min_length(mut self, n: usize) -> Self {
        self.min_length = Some(n);
        self
    }

    pub fn max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }
}

/// Paso del wizard: identificador estable, textos de presentación y campos en
/// orden de definición.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDefinition {
    pub id: String,
    pub title: String,
    pub description: String,
    pub fields: Vec<FieldDefinition>,
}

impl StepDefinition {
    pub fn new(id: impl Into<String>, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { id: id.into(),
               title: title.into(),
               description: description.into(),
               fields: Vec::new() }
    }

    pub fn field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }

    pub fn get_field(&self, field_id: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.id == field_id)
    }

    pub fn is_file_field(&self, field_id: &str) -> bool {
        self.get_field(field_id).is_some_and(|f| f.kind == FieldKind::FileUpload)
    }
}
