//! Latencia simulada de los generadores (imita una llamada a backend).
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Latency(Option<Duration>);

impl Latency {
    pub fn none() -> Self {
        Latency(None)
    }

    pub fn of(delay: Duration) -> Self {
        Latency((!delay.is_zero()).then_some(delay))
    }

    pub fn duration(&self) -> Option<Duration> {
        self.0
    }

    pub async fn wait(&self) {
        if let Some(d) = self.0 {
            tokio::time::sleep(d).await;
        }
    }
}
