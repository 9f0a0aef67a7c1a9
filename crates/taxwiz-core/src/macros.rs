//! Macros utilitarias para reducir boilerplate al definir artifacts tipados y
//! respuestas de un paso.
//!
//! Exportadas en la raíz del crate:
//!   use taxwiz_core::{answers, typed_artifact};

/// Declara un artifact tipado con derives y `ArtifactSpec`.
///
/// Formas soportadas:
/// - typed_artifact!(Name { field1: Ty1, field2: Ty2 }); // KIND = "generic-json"
/// - typed_artifact!(Name { field1: Ty1 } kind: "draft-summary");
#[macro_export]
macro_rules! typed_artifact {
    // Con KIND explícito
    ($name:ident { $($fname:ident : $fty:ty),+ $(,)? } kind: $kind:expr) => {
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct $name { $(pub $fname: $fty,)+ pub schema_version: u32 }
        impl $crate::model::ArtifactSpec for $name {
            const KIND: &'static str = $kind;
        }
    };
    // KIND por defecto
    ($name:ident { $($fname:ident : $fty:ty),+ $(,)? }) => {
        $crate::typed_artifact!($name { $($fname : $fty),+ } kind: "generic-json");
    };
}

/// Construye un mapa `Answers` a partir de pares `"id" => valor`.
///
/// ```ignore
/// let a = answers! { "fullName" => "Ada", "income" => 50000 };
/// ```
#[macro_export]
macro_rules! answers {
    () => { $crate::model::Answers::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::model::Answers::new();
        $( map.insert(::std::string::String::from($key), $crate::model::AnswerValue::from($value)); )+
        map
    }};
}
