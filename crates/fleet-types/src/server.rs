use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ServerState {
    pub id: String,
    pub name: String,
    pub region: String,
    pub status: ServerStatus,
    #[serde(deserialize_with = "deserialize_cpu")]
    pub cpu: i32,
    pub uptime: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCpu {
    Int(i64),
    Float(f64),
}

/// Accepts any JSON number: fractions are rounded and values beyond `i32`
/// saturate, so one odd reading never rejects the whole collection.
fn deserialize_cpu<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let cpu = match RawCpu::deserialize(deserializer)? {
        RawCpu::Int(v) => v.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
        RawCpu::Float(v) => v.round() as i32,
    };
    Ok(cpu)
}

/// Reported health of a server.
///
/// Any status string other than `online` or `offline` deserializes to
/// `Error`, so unexpected values from the data source render as errors.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ServerStatus {
    Online,
    Offline,
    #[serde(other)]
    Error,
}

impl ServerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerStatus::Online => "online",
            ServerStatus::Offline => "offline",
            ServerStatus::Error => "error",
        }
    }
}

impl Default for ServerStatus {
    fn default() -> Self {
        ServerStatus::Error
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            region: String::new(),
            status: ServerStatus::default(),
            cpu: 0,
            uptime: String::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AggregateCounts {
    pub online: usize,
    pub offline: usize,
    pub error: usize,
}

impl AggregateCounts {
    pub fn tally(servers: &[ServerState]) -> Self {
        servers.iter().fold(Self::default(), |mut counts, server| {
            match server.status {
                ServerStatus::Online => counts.online += 1,
                ServerStatus::Offline => counts.offline += 1,
                ServerStatus::Error => counts.error += 1,
            }
            counts
        })
    }

    pub fn total(&self) -> usize {
        self.online + self.offline + self.error
    }

    pub fn online_label(&self) -> String {
        format!("{} online", self.online)
    }

    pub fn offline_label(&self) -> String {
        format!("{} offline", self.offline)
    }

    pub fn error_label(&self) -> String {
        format!("{} errors", self.error)
    }
}

/// Failure while fetching the server collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum FetchError {
    #[error("{0}")]
    Transport(String),
    #[error("Server responded with status {status}: {message}")]
    Response { status: u16, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server(id: &str, status: ServerStatus) -> ServerState {
        ServerState {
            id: id.into(),
            status,
            ..ServerState::default()
        }
    }

    #[test]
    fn test_status_parses_lowercase() {
        let parsed: Vec<ServerStatus> =
            serde_json::from_str(r#"["online", "offline", "error"]"#).unwrap();
        assert_eq!(
            parsed,
            vec![ServerStatus::Online, ServerStatus::Offline, ServerStatus::Error]
        );
    }

    #[test]
    fn test_unknown_status_falls_back_to_error() {
        let state: ServerState = serde_json::from_str(
            r#"{"id":"srv-9","name":"x","region":"eu-west-1","status":"degraded","cpu":12,"uptime":"1%"}"#,
        )
        .unwrap();
        assert_eq!(state.status, ServerStatus::Error);
    }

    #[test]
    fn test_out_of_range_cpu_is_accepted() {
        let state: ServerState = serde_json::from_str(
            r#"{"id":"a","name":"b","region":"c","status":"online","cpu":-7,"uptime":"d"}"#,
        )
        .unwrap();
        assert_eq!(state.cpu, -7);
    }

    #[test]
    fn test_cpu_beyond_i32_saturates() {
        let state: ServerState = serde_json::from_str(
            r#"{"id":"a","name":"b","region":"c","status":"online","cpu":4294967296,"uptime":"d"}"#,
        )
        .unwrap();
        assert_eq!(state.cpu, i32::MAX);

        let state: ServerState = serde_json::from_str(
            r#"{"id":"a","name":"b","region":"c","status":"online","cpu":-99999999999,"uptime":"d"}"#,
        )
        .unwrap();
        assert_eq!(state.cpu, i32::MIN);
    }

    #[test]
    fn test_fractional_cpu_is_rounded() {
        let state: ServerState = serde_json::from_str(
            r#"{"id":"a","name":"b","region":"c","status":"error","cpu":45.5,"uptime":"d"}"#,
        )
        .unwrap();
        assert_eq!(state.cpu, 46);
    }

    #[test]
    fn test_odd_cpu_keeps_rest_of_collection() {
        let servers: Vec<ServerState> = serde_json::from_str(
            r#"[
                {"id":"srv-001","name":"A","region":"r1","status":"online","cpu":45.5,"uptime":"99%"},
                {"id":"srv-002","name":"B","region":"r2","status":"online","cpu":4294967296,"uptime":"98%"},
                {"id":"srv-003","name":"C","region":"r3","status":"offline","cpu":12,"uptime":"-"}
            ]"#,
        )
        .unwrap();
        let cpus: Vec<i32> = servers.iter().map(|s| s.cpu).collect();
        assert_eq!(cpus, vec![46, i32::MAX, 12]);
    }

    #[test]
    fn test_tally_partitions_by_status() {
        let servers = vec![
            server("a", ServerStatus::Online),
            server("b", ServerStatus::Online),
            server("c", ServerStatus::Offline),
            server("d", ServerStatus::Error),
            server("e", ServerStatus::Online),
        ];
        let counts = AggregateCounts::tally(&servers);
        assert_eq!(counts.online, 3);
        assert_eq!(counts.offline, 1);
        assert_eq!(counts.error, 1);
        assert_eq!(counts.total(), servers.len());
    }

    #[test]
    fn test_tally_empty() {
        let counts = AggregateCounts::tally(&[]);
        assert_eq!(counts, AggregateCounts::default());
        assert_eq!(counts.error_label(), "0 errors");
    }

    #[test]
    fn test_count_labels() {
        let counts = AggregateCounts {
            online: 4,
            offline: 1,
            error: 1,
        };
        assert_eq!(counts.online_label(), "4 online");
        assert_eq!(counts.offline_label(), "1 offline");
        assert_eq!(counts.error_label(), "1 errors");
    }

    #[test]
    fn test_fetch_error_messages() {
        let err = FetchError::Response {
            status: 500,
            message: "failed to read fixture servers.json".into(),
        };
        assert_eq!(
            err.to_string(),
            "Server responded with status 500: failed to read fixture servers.json"
        );
        assert_eq!(
            FetchError::Transport("connection refused".into()).to_string(),
            "connection refused"
        );
    }
}
