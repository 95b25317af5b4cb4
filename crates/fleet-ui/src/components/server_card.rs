use fleet_types::ServerState;
use leptos::prelude::*;

use crate::card::{render, CardView, CpuBar, Pulse};

/// Card for one server: status badge, region/uptime meta and, unless the
/// server is offline, a CPU bar colored by load band.
///
/// Takes the record by value; the dashboard rebuilds every card from the
/// latest fetch, so each card reflects exactly one record.
#[component]
pub fn ServerCard(state: ServerState) -> impl IntoView {
    let cardView = render(&state);
    let face = cardView.face().clone();
    let accent = face.accent();

    let dotClass = match face.badge.pulse {
        Pulse::Static => "dot",
        Pulse::Slow => "dot pulse-slow",
        Pulse::Fast => "dot pulse-fast",
    };

    let cpuSection = match cardView {
        CardView::WithCpuBar(_, bar) => Some(view! { <CpuBarView bar=bar /> }),
        CardView::WithoutCpuBar(_) => None,
    };

    view! {
        <div
            class=format!("card {accent}")
            style=format!("--accent: {}", face.badge.color)
            data-cy="server-card"
            data-status=accent
        >
            <div class="card-header">
                <div>
                    <div class="server-id">{face.id}</div>
                    <div class="server-name">{face.name}</div>
                </div>
                <div
                    class=format!("status-badge {}", face.badge.class)
                    data-cy="status-badge"
                >
                    <div class=dotClass></div>
                    {face.badge.label}
                </div>
            </div>

            <div class="meta">
                <div class="meta-item">
                    "Region"
                    <span>{face.region}</span>
                </div>
                <div class="meta-item">
                    "Uptime"
                    <span>{face.uptime}</span>
                </div>
            </div>

            {cpuSection}
        </div>
    }
}

#[component]
fn CpuBarView(bar: CpuBar) -> impl IntoView {
    view! {
        <div class="cpu-bar">
            <div class="cpu-label">
                <span>"CPU"</span>
                <span>{bar.label()}</span>
            </div>
            <div class="cpu-track">
                <div
                    class=format!("cpu-fill {}", bar.band.class())
                    style=format!("{}; background: {}", bar.style(), bar.band.color())
                    data-cy="cpu-bar"
                ></div>
            </div>
        </div>
    }
}
