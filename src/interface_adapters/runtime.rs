use std::time::Duration;

use async_trait::async_trait;

use crate::domain::ports::Delay;

// Tokio timer adapter used between polls.
#[derive(Clone, Default)]
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
