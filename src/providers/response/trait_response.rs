use async_trait::async_trait;

use super::CannedResponse;

/// Fuente de respuestas del asistente de chat.
#[async_trait]
pub trait ResponseProvider: Send + Sync {
    fn get_name(&self) -> &str;
    fn get_description(&self) -> &str;

    async fn next_response(&mut self, prompt: &str) -> CannedResponse;
}

#[async_trait]
impl<T: ResponseProvider + ?Sized> ResponseProvider for Box<T> {
    fn get_name(&self) -> &str {
        (**self).get_name()
    }

    fn get_description(&self) -> &str {
        (**self).get_description()
    }

    async fn next_response(&mut self, prompt: &str) -> CannedResponse {
        (**self).next_response(prompt).await
    }
}
