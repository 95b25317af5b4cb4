use fleet_types::{ServerState, ServerStatus};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("failed to read fixture {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse fixture {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Load the server collection, preserving fixture order.
///
/// With no path configured the built-in fleet is served.
pub async fn collect(path: Option<&str>) -> Result<Vec<ServerState>, FixtureError> {
    match path {
        Some(path) => {
            let servers = read_fixture(path).await?;
            debug!("loaded {} servers from {path}", servers.len());
            Ok(servers)
        }
        None => Ok(builtin_servers()),
    }
}

async fn read_fixture(path: &str) -> Result<Vec<ServerState>, FixtureError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| FixtureError::Read {
            path: path.to_string(),
            source,
        })?;

    serde_json::from_str(&contents).map_err(|source| FixtureError::Parse {
        path: path.to_string(),
        source,
    })
}

fn builtin_server(
    id: &str,
    name: &str,
    region: &str,
    status: ServerStatus,
    cpu: i32,
    uptime: &str,
) -> ServerState {
    ServerState {
        id: id.into(),
        name: name.into(),
        region: region.into(),
        status,
        cpu,
        uptime: uptime.into(),
    }
}

pub fn builtin_servers() -> Vec<ServerState> {
    vec![
        builtin_server("srv-001", "Primary API Gateway", "af-south-1", ServerStatus::Online, 34, "99.98%"),
        builtin_server("srv-002", "Auth Service", "eu-west-1", ServerStatus::Online, 52, "99.95%"),
        builtin_server("srv-003", "Payment Processor", "us-east-1", ServerStatus::Error, 89, "97.40%"),
        builtin_server("srv-004", "Media CDN Node", "ap-southeast-1", ServerStatus::Offline, 0, "\u{2014}"),
        builtin_server("srv-005", "Analytics Worker", "eu-central-1", ServerStatus::Online, 18, "99.99%"),
        builtin_server("srv-006", "ML Inference Engine", "us-west-2", ServerStatus::Online, 77, "99.85%"),
    ]
}
