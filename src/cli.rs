use anyhow::Result;
use clap::Parser;

use crate::{cfg::Cfg, notify::LogNotifyGW};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Parser)]
#[command(name = "volunteerhub", about = "VolunteerHub backend", version)]
pub struct Args {
    /// Database file, overrides DATABASE_URL.
    #[arg(long = "db-url")]
    pub db_url: Option<String>,

    /// Allow cross-origin requests, e.g. for a SPA dev server.
    #[arg(long = "enable-cors")]
    pub enable_cors: bool,
}

pub async fn run(args: Args) -> Result<()> {
    let mut cfg = Cfg::from_env_or_default();
    if let Some(db_url) = args.db_url {
        cfg.db_url = db_url;
    }

    log::info!("Opening database {}", cfg.db_url);
    let connections =
        vhub_db_sqlite::Connections::init(&cfg.db_url, cfg.db_connection_pool_size)?;
    vhub_db_sqlite::run_embedded_database_migrations(connections.exclusive()?);

    vhub_webserver::run(connections, args.enable_cors, Box::new(LogNotifyGW), VERSION).await;
    Ok(())
}
