use std::time::Duration;

use crate::domain::entities::DataTable;
use crate::domain::ports::{DashboardGateway, Delay, StatusView};

// Terminal result of a poll loop.
#[derive(Debug)]
pub enum PollOutcome {
    Completed {
        table: DataTable,
        last_run: Option<String>,
    },
    Failed {
        message: String,
    },
}

// Poll loop use case with injected dependencies: check status, display the
// message, and either schedule another check or stop on a terminal response.
pub struct PollStatusUseCase<G, D, V> {
    pub gateway: G,
    pub delay: D,
    pub view: V,
    pub poll_interval: Duration,
}

impl<G, D, V> PollStatusUseCase<G, D, V>
where
    G: DashboardGateway,
    D: Delay,
    V: StatusView,
{
    pub async fn execute(&self) -> Result<PollOutcome, Box<dyn std::error::Error>> {
        loop {
            let status = self.gateway.fetch_status().await?;
            self.view.show_message(&status.message);

            if !status.is_terminal() {
                self.delay.wait(self.poll_interval).await;
                continue;
            }

            // Any terminal response re-arms the refresh control.
            self.view.set_refresh_enabled(true);

            if let Some(table) = status.table {
                // Results win over the failure flag when both are present.
                if let Some(last_run) = status.last_run.as_deref() {
                    self.view.show_last_run(last_run);
                }
                self.view.render_chart(&table);
                return Ok(PollOutcome::Completed {
                    table,
                    last_run: status.last_run,
                });
            }

            return Ok(PollOutcome::Failed {
                message: status.message,
            });
        }
    }
}
