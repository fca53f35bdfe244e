use std::time::Duration;

use async_trait::async_trait;

use crate::domain::entities::{DataTable, QueryStatus};

// Port for the dashboard service endpoints.
// Use cases depend on this trait, not the concrete reqwest client.
#[async_trait]
pub trait DashboardGateway: Send + Sync {
    // Ask the service to rerun the underlying query.
    async fn trigger_refresh(&self) -> Result<(), Box<dyn std::error::Error>>;
    // Fetch the current query status.
    async fn fetch_status(&self) -> Result<QueryStatus, Box<dyn std::error::Error>>;
}

// Port for timed waits between polls, so tests run without real timers.
#[async_trait]
pub trait Delay: Send + Sync {
    async fn wait(&self, duration: Duration);
}

// Port for everything the client displays to the user.
pub trait StatusView: Send + Sync {
    fn show_message(&self, message: &str);
    fn show_last_run(&self, last_run: &str);
    fn render_chart(&self, table: &DataTable);
    fn set_refresh_enabled(&self, enabled: bool);
}
