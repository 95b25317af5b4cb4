//! Visual state for a single server card.
//!
//! `render` is a pure function of a [`ServerState`]: the same record always
//! produces the same [`CardView`], and nothing from a previous render is
//! carried over. The Leptos component in `components::server_card` only lays
//! out what this module computes.

use fleet_types::{ServerState, ServerStatus};

/// Shown instead of the uptime of an offline server.
pub const OFFLINE_UPTIME: &str = "\u{2014}";

const GREEN: &str = "#00ff87";
const AMBER: &str = "#ffb800";
const GRAY: &str = "#4a6080";
const RED: &str = "#ff4560";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CpuBand {
    Low,
    Medium,
    High,
}

impl CpuBand {
    pub fn classify(cpu: i32) -> Self {
        if cpu < 50 {
            CpuBand::Low
        } else if cpu < 80 {
            CpuBand::Medium
        } else {
            CpuBand::High
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            CpuBand::Low => "low",
            CpuBand::Medium => "medium",
            CpuBand::High => "high",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            CpuBand::Low => GREEN,
            CpuBand::Medium => AMBER,
            CpuBand::High => RED,
        }
    }
}

/// Animation of the badge dot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pulse {
    Static,
    Slow,
    Fast,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub class: &'static str,
    pub color: &'static str,
    pub pulse: Pulse,
}

impl Badge {
    fn for_status(status: ServerStatus) -> Self {
        match status {
            ServerStatus::Online => Badge {
                label: "Online",
                class: "online",
                color: GREEN,
                pulse: Pulse::Slow,
            },
            ServerStatus::Offline => Badge {
                label: "Offline",
                class: "offline",
                color: GRAY,
                pulse: Pulse::Static,
            },
            ServerStatus::Error => Badge {
                label: "Error",
                class: "error",
                color: RED,
                pulse: Pulse::Fast,
            },
        }
    }
}

/// Everything a card shows regardless of status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardFace {
    pub id: String,
    pub name: String,
    pub region: String,
    pub uptime: String,
    pub badge: Badge,
}

impl CardFace {
    /// Accent class of the card root; matches the badge class.
    pub fn accent(&self) -> &'static str {
        self.badge.class
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CpuBar {
    /// Reported value, shown as the label.
    pub cpu: i32,
    /// Fill width in percent of the track, always within 0..=100.
    pub width_pct: i32,
    pub band: CpuBand,
}

impl CpuBar {
    fn for_cpu(cpu: i32) -> Self {
        Self {
            cpu,
            width_pct: cpu.clamp(0, 100),
            band: CpuBand::classify(cpu),
        }
    }

    pub fn label(&self) -> String {
        format!("{}%", self.cpu)
    }

    pub fn style(&self) -> String {
        format!("width: {}%", self.width_pct)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardView {
    WithCpuBar(CardFace, CpuBar),
    WithoutCpuBar(CardFace),
}

impl CardView {
    pub fn face(&self) -> &CardFace {
        match self {
            CardView::WithCpuBar(face, _) => face,
            CardView::WithoutCpuBar(face) => face,
        }
    }

    pub fn cpu_bar(&self) -> Option<&CpuBar> {
        match self {
            CardView::WithCpuBar(_, bar) => Some(bar),
            CardView::WithoutCpuBar(_) => None,
        }
    }
}

pub fn render(state: &ServerState) -> CardView {
    let isOffline = state.status == ServerStatus::Offline;
    let uptime = if isOffline {
        OFFLINE_UPTIME.to_string()
    } else {
        state.uptime.clone()
    };

    let face = CardFace {
        id: state.id.clone(),
        name: state.name.clone(),
        region: state.region.clone(),
        uptime,
        badge: Badge::for_status(state.status),
    };

    if isOffline {
        CardView::WithoutCpuBar(face)
    } else {
        CardView::WithCpuBar(face, CpuBar::for_cpu(state.cpu))
    }
}
