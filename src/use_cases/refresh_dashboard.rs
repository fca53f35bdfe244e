use std::time::Duration;

use crate::domain::ports::{DashboardGateway, Delay, StatusView};
use crate::use_cases::poll_status::{PollOutcome, PollStatusUseCase};

// Message shown while the rerun request is in flight.
const RERUN_REQUESTED_MESSAGE: &str = "Requesting that the query be rerun...";

// Refresh use case: ask the service to rerun the query, give it a moment to
// pick the job up, then fall into the regular poll loop.
pub struct RefreshDashboardUseCase<G, D, V> {
    pub poll: PollStatusUseCase<G, D, V>,
    pub trigger_delay: Duration,
}

impl<G, D, V> RefreshDashboardUseCase<G, D, V>
where
    G: DashboardGateway,
    D: Delay,
    V: StatusView,
{
    pub async fn execute(&self) -> Result<PollOutcome, Box<dyn std::error::Error>> {
        // Block re-triggering until a status response comes back; only the
        // poll loop's terminal handling re-enables the control.
        self.poll.view.set_refresh_enabled(false);
        self.poll.view.show_message(RERUN_REQUESTED_MESSAGE);
        self.poll.gateway.trigger_refresh().await?;

        self.poll.delay.wait(self.trigger_delay).await;
        self.poll.execute().await
    }
}
