use async_trait::async_trait;

use crate::providers::response::{canned_responses, CannedResponse, ResponseProvider};

/// Recorre el catálogo en orden, volviendo al inicio al terminar.
pub struct SequenceResponseProvider {
    responses: Vec<CannedResponse>,
    next: usize,
}

impl SequenceResponseProvider {
    pub fn new() -> Self {
        Self::with_responses(canned_responses())
    }

    pub fn with_responses(responses: Vec<CannedResponse>) -> Self {
        Self { responses, next: 0 }
    }
}

impl Default for SequenceResponseProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResponseProvider for SequenceResponseProvider {
    fn get_name(&self) -> &str {
        "sequence"
    }

    fn get_description(&self) -> &str {
        "Deterministic round-robin over the canned response catalogue"
    }

    async fn next_response(&mut self, _prompt: &str) -> CannedResponse {
        if self.responses.is_empty() {
            return CannedResponse { message: String::new(),
                                    links: Vec::new() };
        }
        let r = self.responses[self.next % self.responses.len()].clone();
        self.next = (self.next + 1) % self.responses.len();
        r
    }
}
