use chrono::NaiveTime;
use fleet_types::{AggregateCounts, FetchError, ServerState};

pub const LOADING_MESSAGE: &str = "// Fetching server data...";

#[derive(Clone, Debug, PartialEq)]
pub enum Phase {
    Loading,
    Success(Vec<ServerState>),
    Failure(FetchError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Loading,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl StatusMessage {
    pub fn class(&self) -> &'static str {
        match self.kind {
            MessageKind::Loading => "loading-msg",
            MessageKind::Error => "error",
        }
    }
}

/// State behind the dashboard page.
///
/// Moves to `Loading` only through `begin_refresh`. Every fetch result is
/// applied through `resolve` in arrival order, so when two refreshes overlap
/// the response that resolves last decides what is shown. Counts and the
/// timestamp keep their last successful values across loading and failure.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    phase: Phase,
    counts: AggregateCounts,
    updated_at: Option<NaiveTime>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            phase: Phase::Loading,
            counts: AggregateCounts::default(),
            updated_at: None,
        }
    }
}

impl DashboardState {
    pub fn begin_refresh(&mut self) {
        self.phase = Phase::Loading;
    }

    pub fn resolve(&mut self, result: Result<Vec<ServerState>, FetchError>, now: NaiveTime) {
        self.phase = match result {
            Ok(servers) => {
                self.counts = AggregateCounts::tally(&servers);
                self.updated_at = Some(now);
                Phase::Success(servers)
            }
            Err(e) => Phase::Failure(e),
        };
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn refresh_enabled(&self) -> bool {
        !self.is_loading()
    }

    /// Cards to show, in fetched order. Empty unless the last fetch succeeded.
    pub fn cards(&self) -> &[ServerState] {
        match &self.phase {
            Phase::Success(servers) => servers,
            _ => &[],
        }
    }

    pub fn counts(&self) -> AggregateCounts {
        self.counts
    }

    pub fn last_updated_label(&self) -> String {
        self.updated_at
            .map(|t| format!("Updated {}", t.format("%H:%M:%S")))
            .unwrap_or_default()
    }

    /// `None` means the message region is hidden.
    pub fn status_message(&self) -> Option<StatusMessage> {
        match &self.phase {
            Phase::Loading => Some(StatusMessage {
                kind: MessageKind::Loading,
                text: LOADING_MESSAGE.to_string(),
            }),
            Phase::Success(_) => None,
            Phase::Failure(e) => Some(StatusMessage {
                kind: MessageKind::Error,
                text: format!("\u{26A0} Failed to load servers \u{2014} {e}"),
            }),
        }
    }
}
