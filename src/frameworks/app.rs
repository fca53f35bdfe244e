use std::time::Duration;

use crate::interface_adapters::clients::DashboardClient;
use crate::interface_adapters::runtime::TokioDelay;
use crate::interface_adapters::view::TerminalView;
use crate::use_cases::poll_status::{PollOutcome, PollStatusUseCase};
use crate::use_cases::refresh_dashboard::RefreshDashboardUseCase;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn duration_from_env(name: &str, default_ms: u64) -> Duration {
    let millis = std::env::var(name)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default_ms);
    Duration::from_millis(millis)
}

pub async fn run() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let base_url =
        std::env::var("DASHBOARD_URL").unwrap_or_else(|_| "http://localhost:8080".into());
    let poll_interval = duration_from_env("POLL_INTERVAL_MS", 2000);
    let trigger_delay = duration_from_env("TRIGGER_DELAY_MS", 2000);
    tracing::debug!(base_url = %base_url, ?poll_interval, "dashboard client configured.");

    let poll = PollStatusUseCase {
        gateway: DashboardClient::new(base_url),
        delay: TokioDelay,
        view: TerminalView,
        poll_interval,
    };

    // `refresh` asks for a rerun first; the default just watches the current run.
    let mode = std::env::args().nth(1).unwrap_or_else(|| "watch".into());
    let outcome = match mode.as_str() {
        "watch" => poll.execute().await,
        "refresh" => {
            let refresh = RefreshDashboardUseCase {
                poll,
                trigger_delay,
            };
            refresh.execute().await
        }
        other => {
            tracing::error!(mode = %other, "unknown mode; expected watch or refresh");
            return;
        }
    };

    match outcome {
        Ok(PollOutcome::Completed { table, .. }) => {
            tracing::info!(rows = table.rows.len(), "query results rendered");
        }
        Ok(PollOutcome::Failed { message }) => {
            tracing::error!(%message, "query failed");
        }
        Err(error) => {
            tracing::error!(%error, "dashboard request failed");
        }
    }
}
