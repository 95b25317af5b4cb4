#![allow(non_snake_case)]

#[cfg(feature = "ssr")]
mod config {
    use serde::Deserialize;

    #[derive(Deserialize, Clone, Debug, PartialEq)]
    pub struct Config {
        #[serde(default)]
        pub server: ServerConfig,
        #[serde(default)]
        pub fixture: FixtureConfig,
    }

    #[derive(Deserialize, Clone, Debug, PartialEq)]
    pub struct ServerConfig {
        pub bind: String,
        pub port: u16,
    }

    /// Without a path the built-in fleet is served.
    #[derive(Deserialize, Clone, Debug, Default, PartialEq)]
    pub struct FixtureConfig {
        pub path: Option<String>,
    }

    impl Default for ServerConfig {
        fn default() -> Self {
            Self {
                bind: "0.0.0.0".into(),
                port: 3000,
            }
        }
    }

    impl Default for Config {
        fn default() -> Self {
            Self {
                server: ServerConfig::default(),
                fixture: FixtureConfig::default(),
            }
        }
    }

    impl ServerConfig {
        pub fn addr(&self) -> String {
            format!("{}:{}", self.bind, self.port)
        }
    }

    pub fn load(path: &str) -> Config {
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("failed to parse config {path}: {e}, using defaults");
                    Config::default()
                }
            },
            Err(e) => {
                tracing::warn!("failed to read config {path}: {e}, using defaults");
                Config::default()
            }
        }
    }

}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use fleet_api::state::AppState;
    use fleet_types::FixtureSource;
    use fleet_ui::{shell, App};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{fmt, EnvFilter};

    // Initialize tracing
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse config path from args
    let args: Vec<String> = std::env::args().collect();
    let configPath = if let Some(idx) = args.iter().position(|a| a == "--config") {
        args.get(idx + 1)
            .cloned()
            .unwrap_or_else(|| "config.example.toml".into())
    } else {
        "config.example.toml".into()
    };

    let appConfig = config::load(&configPath);
    let addr = appConfig.server.addr();
    match &appConfig.fixture.path {
        Some(path) => tracing::info!("loaded config from {configPath}: serving fixture {path}"),
        None => tracing::info!("loaded config from {configPath}: serving built-in fleet"),
    }

    let fixtureSource = FixtureSource(appConfig.fixture.path.clone());
    let appState = AppState {
        fixture: fixtureSource.clone(),
    };

    let conf = get_configuration(None).expect("failed to load Leptos configuration");
    let leptosOptions = conf.leptos_options;

    let routes = generate_route_list(App);

    // The API router carries its own AppState; the Leptos routes use LeptosOptions
    let apiRouter = fleet_api::api_router(appState);

    let app = Router::new()
        .leptos_routes_with_context(
            &leptosOptions,
            routes,
            {
                let fixtureSource = fixtureSource.clone();
                move || {
                    leptos::prelude::provide_context(fixtureSource.clone());
                }
            },
            {
                let leptosOptions = leptosOptions.clone();
                move || shell(leptosOptions.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptosOptions)
        .merge(apiRouter)
        .layer(TraceLayer::new_for_http());

    tracing::info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server exited with error");
}

#[cfg(not(feature = "ssr"))]
fn main() {}
