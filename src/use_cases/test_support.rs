use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::entities::{Column, ColumnType, DataTable, QueryStatus};
use crate::domain::ports::{DashboardGateway, Delay, StatusView};

// Single ordered log shared by all fakes, so tests can assert ordering
// across the gateway, the view, and the delay.
pub(crate) type EventLog = Arc<Mutex<Vec<Event>>>;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Event {
    Triggered,
    StatusFetched,
    MessageShown(String),
    LastRunShown(String),
    ChartRendered { rows: usize },
    RefreshToggled(bool),
    Waited(Duration),
}

pub(crate) fn new_event_log() -> EventLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub(crate) fn recorded_events(events: &EventLog) -> Vec<Event> {
    events.lock().expect("event log mutex poisoned").clone()
}

// Gateway fake that replays a scripted sequence of status responses.
#[derive(Clone)]
pub(crate) struct ScriptedGateway {
    script: Arc<Mutex<VecDeque<QueryStatus>>>,
    events: EventLog,
    // Toggles used by negative-path tests to simulate transport failure.
    fail_trigger: bool,
    fail_fetch: bool,
}

impl ScriptedGateway {
    pub(crate) fn new(events: EventLog, statuses: Vec<QueryStatus>) -> Self {
        Self {
            script: Arc::new(Mutex::new(statuses.into())),
            events,
            fail_trigger: false,
            fail_fetch: false,
        }
    }

    pub(crate) fn with_trigger_failure(mut self) -> Self {
        self.fail_trigger = true;
        self
    }

    pub(crate) fn with_fetch_failure(mut self) -> Self {
        self.fail_fetch = true;
        self
    }

    fn record(&self, event: Event) {
        let mut events = self.events.lock().expect("event log mutex poisoned");
        events.push(event);
    }
}

#[async_trait]
impl DashboardGateway for ScriptedGateway {
    async fn trigger_refresh(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.record(Event::Triggered);
        if self.fail_trigger {
            return Err("trigger failed".into());
        }
        Ok(())
    }

    async fn fetch_status(&self) -> Result<QueryStatus, Box<dyn std::error::Error>> {
        self.record(Event::StatusFetched);
        if self.fail_fetch {
            return Err("fetch failed".into());
        }
        let mut script = self.script.lock().expect("script mutex poisoned");
        // An exhausted script means the use case polled more than the test
        // expected; fail loudly instead of looping forever.
        script.pop_front().ok_or_else(|| "status script exhausted".into())
    }
}

// View fake that records everything it is asked to display.
#[derive(Clone)]
pub(crate) struct RecordingView {
    events: EventLog,
}

impl RecordingView {
    pub(crate) fn new(events: EventLog) -> Self {
        Self { events }
    }

    fn record(&self, event: Event) {
        let mut events = self.events.lock().expect("event log mutex poisoned");
        events.push(event);
    }
}

impl StatusView for RecordingView {
    fn show_message(&self, message: &str) {
        self.record(Event::MessageShown(message.to_string()));
    }

    fn show_last_run(&self, last_run: &str) {
        self.record(Event::LastRunShown(last_run.to_string()));
    }

    fn render_chart(&self, table: &DataTable) {
        self.record(Event::ChartRendered {
            rows: table.rows.len(),
        });
    }

    fn set_refresh_enabled(&self, enabled: bool) {
        self.record(Event::RefreshToggled(enabled));
    }
}

// Delay fake that records the requested wait and returns immediately.
#[derive(Clone)]
pub(crate) struct InstantDelay {
    events: EventLog,
}

impl InstantDelay {
    pub(crate) fn new(events: EventLog) -> Self {
        Self { events }
    }
}

#[async_trait]
impl Delay for InstantDelay {
    async fn wait(&self, duration: Duration) {
        let mut events = self.events.lock().expect("event log mutex poisoned");
        events.push(Event::Waited(duration));
    }
}

// Status builders shared by the use case tests.

pub(crate) fn pending_status(message: &str) -> QueryStatus {
    QueryStatus {
        message: message.to_string(),
        table: None,
        failed: false,
        last_run: None,
    }
}

pub(crate) fn failed_status(message: &str) -> QueryStatus {
    QueryStatus {
        message: message.to_string(),
        table: None,
        failed: true,
        last_run: None,
    }
}

pub(crate) fn completed_status(message: &str, last_run: Option<&str>) -> QueryStatus {
    QueryStatus {
        message: message.to_string(),
        table: Some(sample_table()),
        failed: false,
        last_run: last_run.map(str::to_string),
    }
}

pub(crate) fn sample_table() -> DataTable {
    DataTable {
        columns: vec![
            Column {
                id: "state".to_string(),
                label: "State".to_string(),
                column_type: ColumnType::Text,
            },
            Column {
                id: "year".to_string(),
                label: "Year".to_string(),
                column_type: ColumnType::Number,
            },
        ],
        rows: vec![
            vec!["Ohio".to_string(), "2006".to_string()],
            vec!["Utah".to_string(), "2007".to_string()],
        ],
    }
}
