use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::providers::response::{canned_responses, CannedResponse, ResponseProvider};

/// Elige una respuesta del catálogo de forma uniforme. Con semilla, la
/// secuencia es reproducible.
pub struct RandomResponseProvider {
    responses: Vec<CannedResponse>,
    rng: StdRng,
}

impl RandomResponseProvider {
    pub fn new() -> Self {
        Self::with_responses(canned_responses(), StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_responses(canned_responses(), StdRng::seed_from_u64(seed))
    }

    pub fn with_responses(responses: Vec<CannedResponse>, rng: StdRng) -> Self {
        Self { responses, rng }
    }
}

impl Default for RandomResponseProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResponseProvider for RandomResponseProvider {
    fn get_name(&self) -> &str {
        "random"
    }

    fn get_description(&self) -> &str {
        "Uniform random choice over the canned response catalogue"
    }

    async fn next_response(&mut self, _prompt: &str) -> CannedResponse {
        self.responses
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_else(|| CannedResponse { message: String::new(),
                                                links: Vec::new() })
    }
}
