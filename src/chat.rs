//! Asistente de chat: transcripción de mensajes y proveedor de respuestas
//! inyectado.
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{AppConfig, ResponseMode};
use crate::providers::response::catalogue::WELCOME_MESSAGE;
use crate::providers::response::{RandomResponseProvider, ResponseLink, ResponseProvider, SequenceResponseProvider};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub content: String,
    pub is_user: bool,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<ResponseLink>,
}

impl ChatMessage {
    fn user(content: &str) -> Self {
        Self { id: Uuid::new_v4(),
               content: content.to_string(),
               is_user: true,
               timestamp: Utc::now(),
               links: Vec::new() }
    }

    fn assistant(content: String, links: Vec<ResponseLink>) -> Self {
        Self { id: Uuid::new_v4(),
               content,
               is_user: false,
               timestamp: Utc::now(),
               links }
    }
}

pub struct ChatAssistant<P: ResponseProvider> {
    provider: P,
    transcript: Vec<ChatMessage>,
}

impl<P: ResponseProvider> ChatAssistant<P> {
    /// Asistente nuevo; la transcripción empieza con el mensaje de bienvenida.
    pub fn new(provider: P) -> Self {
        Self { provider,
               transcript: vec![ChatMessage::assistant(WELCOME_MESSAGE.to_string(), Vec::new())] }
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn provider_name(&self) -> &str {
        self.provider.get_name()
    }

    /// Envía un mensaje. Entradas en blanco se ignoran (`None`); si no, agrega
    /// el mensaje del usuario y luego la respuesta, que se devuelve.
    pub async fn send(&mut self, input: &str) -> Option<&ChatMessage> {
        let content = input.trim();
        if content.is_empty() {
            return None;
        }
        self.transcript.push(ChatMessage::user(content));
        let reply = self.provider.next_response(content).await;
        debug!("chat reply from {} with {} link(s)", self.provider.get_name(), reply.links.len());
        self.transcript.push(ChatMessage::assistant(reply.message, reply.links));
        self.transcript.last()
    }
}

/// Proveedor según la configuración (`TAXWIZ_RESPONSE_MODE` / `TAXWIZ_RESPONSE_SEED`).
pub fn provider_from_config(config: &AppConfig) -> Box<dyn ResponseProvider> {
    match (config.response_mode, config.response_seed) {
        (ResponseMode::Sequence, _) => Box::new(SequenceResponseProvider::new()),
        (ResponseMode::Random, Some(seed)) => Box::new(RandomResponseProvider::seeded(seed)),
        (ResponseMode::Random, None) => Box::new(RandomResponseProvider::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::response::canned_responses;

    #[tokio::test]
    async fn blank_input_is_ignored() {
        let mut chat = ChatAssistant::new(SequenceResponseProvider::new());
        assert!(chat.send("   ").await.is_none());
        assert_eq!(chat.transcript().len(), 1);
        assert!(!chat.transcript()[0].is_user);
    }

    #[tokio::test]
    async fn user_message_then_reply() {
        let mut chat = ChatAssistant::new(SequenceResponseProvider::new());
        let reply = chat.send("  Standard deduction ").await.cloned().expect("reply");
        assert_eq!(reply.content, canned_responses()[0].message);
        let t = chat.transcript();
        assert_eq!(t.len(), 3);
        assert!(t[1].is_user);
        assert_eq!(t[1].content, "Standard deduction");
        assert_eq!(t[2], reply);
    }

    #[tokio::test]
    async fn boxed_provider_from_config() {
        let cfg = AppConfig { response_mode: ResponseMode::Sequence,
                              ..AppConfig::default() };
        let mut chat = ChatAssistant::new(provider_from_config(&cfg));
        assert_eq!(chat.provider_name(), "sequence");
        assert!(chat.send("hi").await.is_some());
    }
}
