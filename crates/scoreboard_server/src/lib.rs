mod server;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use scoreboard::Roster;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

pub use server::{AppState, build_router};

pub const DEFAULT_PORT: u16 = 3010;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub data_path: PathBuf,
    pub static_dir: PathBuf,
    pub pages_dir: PathBuf,
}

impl ServerConfig {
    pub fn default_data_path() -> PathBuf {
        current_dir().join("data.json")
    }

    pub fn default_static_dir() -> PathBuf {
        current_dir().join("static")
    }

    pub fn default_pages_dir() -> PathBuf {
        current_dir().join("pages")
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            data_path: Self::default_data_path(),
            static_dir: Self::default_static_dir(),
            pages_dir: Self::default_pages_dir(),
        }
    }
}

fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Loads the dataset named by the config. Failure here must stop the
/// process before any request is served.
pub fn load_state(config: &ServerConfig) -> Result<AppState> {
    let roster = Roster::load(&config.data_path)
        .inspect_err(|err| tracing::error!("error reading or parsing dataset: {}", err))
        .context("failed to load student dataset")?;
    tracing::info!(
        "loaded {} student records from {}",
        roster.len(),
        config.data_path.display()
    );
    Ok(AppState::new(roster))
}

pub async fn bind_listener(addr: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .inspect_err(|err| tracing::error!("failed to bind {}: {}", addr, err))
        .context("failed to bind port")
}

pub async fn run(config: ServerConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let state = load_state(&config)?;
    let app = build_router(state, &config);
    let addr = config.addr();

    let listener = bind_listener(addr).await?;
    tracing::info!("scoreboard server listening on http://{}", addr);
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_documented_layout() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 3010);
        assert_eq!(config.addr().to_string(), "127.0.0.1:3010");
        assert!(config.data_path.ends_with("data.json"));
        assert!(config.static_dir.ends_with("static"));
        assert!(config.pages_dir.ends_with("pages"));
    }
}
