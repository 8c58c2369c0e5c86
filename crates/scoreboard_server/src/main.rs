use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use scoreboard_server::{DEFAULT_PORT, ServerConfig, run};

#[derive(Parser)]
#[command(name = "scoreboard-server")]
#[command(version, about = "Student score threshold API server")]
struct Cli {
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,
    /// JSON array of student records, read once at startup
    #[arg(long)]
    data: Option<PathBuf>,
    #[arg(long)]
    static_dir: Option<PathBuf>,
    /// Directory holding the landing page (index.html)
    #[arg(long)]
    pages_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
        data_path: cli.data.unwrap_or_else(ServerConfig::default_data_path),
        static_dir: cli.static_dir.unwrap_or_else(ServerConfig::default_static_dir),
        pages_dir: cli.pages_dir.unwrap_or_else(ServerConfig::default_pages_dir),
    };
    run(config).await
}
