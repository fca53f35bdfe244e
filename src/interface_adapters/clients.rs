use crate::domain::entities::QueryStatus;
use crate::domain::ports::DashboardGateway;
use crate::interface_adapters::protocol::StatusResponse;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::fmt;

// Thin wrapper around reqwest for the dashboard service endpoints.
#[derive(Clone)]
pub struct DashboardClient {
    http: Client,
    pub base_url: String,
}

#[derive(Debug)]
pub enum DashboardClientError {
    Transport(reqwest::Error),
    Upstream {
        status: StatusCode,
        message: Option<String>,
    },
    Decode(reqwest::Error),
}

impl fmt::Display for DashboardClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardClientError::Transport(err) => write!(f, "dashboard transport error: {err}"),
            DashboardClientError::Upstream { status, message } => {
                if let Some(message) = message {
                    write!(f, "dashboard upstream error {status}: {message}")
                } else {
                    write!(f, "dashboard upstream error {status}")
                }
            }
            DashboardClientError::Decode(err) => {
                write!(f, "dashboard response decode error: {err}")
            }
        }
    }
}

impl std::error::Error for DashboardClientError {}

impl DashboardClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }
}

// Pull any body text into the upstream error so callers can surface it.
async fn upstream_error(status: StatusCode, res: reqwest::Response) -> DashboardClientError {
    let message = res
        .text()
        .await
        .ok()
        .map(|body| body.trim().to_string())
        .filter(|body| !body.is_empty());
    DashboardClientError::Upstream { status, message }
}

#[async_trait]
impl DashboardGateway for DashboardClient {
    async fn trigger_refresh(&self) -> Result<(), Box<dyn std::error::Error>> {
        // The trigger endpoint takes no body; the POST itself is the signal.
        let res = self
            .http
            .post(&self.base_url)
            .send()
            .await
            .map_err(DashboardClientError::Transport)?;
        let status = res.status();

        if !status.is_success() {
            return Err(Box::new(upstream_error(status, res).await));
        }

        Ok(())
    }

    async fn fetch_status(&self) -> Result<QueryStatus, Box<dyn std::error::Error>> {
        // Compose the data URL and POST an empty status request.
        let url = format!("{}/data", self.base_url);
        let res = self
            .http
            .post(url)
            .send()
            .await
            .map_err(DashboardClientError::Transport)?;
        let status = res.status();

        if !status.is_success() {
            return Err(Box::new(upstream_error(status, res).await));
        }

        // Parse the status payload and map it into the domain shape.
        let payload = res
            .json::<StatusResponse>()
            .await
            .map_err(|err| Box::new(DashboardClientError::Decode(err)) as Box<dyn std::error::Error>)?;

        Ok(payload.into())
    }
}
