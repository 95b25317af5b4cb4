use fleet_types::{FetchError, ServerState};
use leptos::prelude::*;

use crate::components::server_card::ServerCard;
use crate::controller::DashboardState;

#[server]
async fn get_servers() -> Result<Vec<ServerState>, ServerFnError> {
    use fleet_types::FixtureSource;

    let source = use_context::<FixtureSource>()
        .ok_or_else(|| ServerFnError::new("fixture context unavailable"))?;

    fleet_providers::collect(source.path()).await.map_err(|e| {
        tracing::warn!("get_servers failed: {e}");
        ServerFnError::new(e)
    })
}

/// Server functions answer handler failures with a 500 carrying the error
/// text as `ServerError`; everything else never reached a handler.
pub fn fetch_error(e: ServerFnError) -> FetchError {
    match e {
        ServerFnError::ServerError(message) => FetchError::Response {
            status: 500,
            message,
        },
        other => FetchError::Transport(other.to_string()),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    #[allow(unused_variables)]
    let (dashboard, setDashboard) = signal(DashboardState::default());

    let refresh = move || {
        setDashboard.update(|d| d.begin_refresh());

        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                let result = get_servers().await.map_err(fetch_error);
                let now = chrono::Local::now().time();
                setDashboard.update(|d| d.resolve(result, now));
            });
        }
    };

    // Initial load on mount; afterwards only the button refreshes
    #[cfg(feature = "hydrate")]
    refresh();

    let isLoading = move || dashboard.with(|d| d.is_loading());

    view! {
        <div class="dashboard-header">
            <h1>"Cloud Server Dashboard"</h1>
            <p class="subtitle">"Live status across regions"</p>
        </div>

        <div class="toolbar">
            <div class="status-counts">
                <span id="count-online" class="count online">
                    {move || dashboard.with(|d| d.counts().online_label())}
                </span>
                <span id="count-offline" class="count offline">
                    {move || dashboard.with(|d| d.counts().offline_label())}
                </span>
                <span id="count-error" class="count error">
                    {move || dashboard.with(|d| d.counts().error_label())}
                </span>
            </div>
            <span id="last-updated" class="last-updated">
                {move || dashboard.with(|d| d.last_updated_label())}
            </span>
            <button
                id="refresh-btn"
                data-cy="refresh-btn"
                class=move || if isLoading() { "btn btn-primary loading" } else { "btn btn-primary" }
                disabled=isLoading
                on:click=move |_| refresh()
            >
                "Refresh"
            </button>
        </div>

        {move || {
            match dashboard.with(|d| d.status_message()) {
                Some(message) => {
                    let messageClass = message.class();
                    view! {
                        <div id="status-message" class=messageClass>
                            {message.text}
                        </div>
                    }
                        .into_any()
                }
                None => {
                    view! { <div id="status-message" style="display: none"></div> }.into_any()
                }
            }
        }}

        <div id="server-grid" class="server-grid">
            {move || {
                dashboard
                    .with(|d| d.cards().to_vec())
                    .into_iter()
                    .map(|server| view! { <ServerCard state=server /> })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_keeps_cause() {
        let err = fetch_error(ServerFnError::ServerError(
            "failed to read fixture /srv/servers.json: No such file or directory".into(),
        ));
        assert_eq!(
            err,
            FetchError::Response {
                status: 500,
                message: "failed to read fixture /srv/servers.json: No such file or directory"
                    .into(),
            }
        );
        assert!(err.to_string().contains("/srv/servers.json"));
    }

    #[test]
    fn test_request_error_maps_to_transport() {
        let err = fetch_error(ServerFnError::Request("network down".into()));
        match err {
            FetchError::Transport(reason) => assert!(reason.contains("network down")),
            other => panic!("expected transport error, got {other:?}"),
        }
    }
}

#[cfg(all(test, feature = "ssr"))]
mod render_tests {
    use super::*;
    use crate::controller::LOADING_MESSAGE;

    #[test]
    fn test_page_renders_host_regions_while_loading() {
        let owner = Owner::new();
        owner.set();
        let html = view! { <DashboardPage /> }.to_html();

        for region in [
            r#"id="count-online""#,
            r#"id="count-offline""#,
            r#"id="count-error""#,
            r#"id="last-updated""#,
            r#"id="status-message""#,
            r#"id="server-grid""#,
            r#"data-cy="refresh-btn""#,
        ] {
            assert!(html.contains(region), "missing {region} in {html}");
        }

        assert!(html.contains("0 online"));
        assert!(html.contains("0 offline"));
        assert!(html.contains("0 errors"));
        assert!(html.contains(r#"class="loading-msg""#));
        assert!(html.contains(LOADING_MESSAGE));
        assert!(html.contains("btn btn-primary loading"));
        assert!(html.contains("disabled"));
        assert!(!html.contains(r#"data-cy="server-card""#));
    }
}
