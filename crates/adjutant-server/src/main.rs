/*
 *  Copyright 2025-2026 Adjutant Contributors
 *
 *  Licensed under the Apache License, Version 2.0 (the "License");
 *  you may not use this file except in compliance with the License.
 *  You may obtain a copy of the License at
 *
 *      http://www.apache.org/licenses/LICENSE-2.0
 *
 *  Unless required by applicable law or agreed to in writing, software
 *  distributed under the License is distributed on an "AS IS" BASIS,
 *  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *  See the License for the specific language governing permissions and
 *  limitations under the License.
 */

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use adjutant::dal::DAL;
use adjutant::database::connection::Database;
use adjutant_server::config::ServerConfig;
use adjutant_server::routes::router;
use adjutant_server::state::AppState;
use adjutant_server::sysmon::SystemStats;
use adjutant_server::uploads::UploadStore;

/// Adjutant dashboard API server.
#[derive(Debug, Parser)]
#[command(name = "adjutant-server", version, about)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long, env = "ADJUTANT_SERVER_CONFIG")]
    config: Option<PathBuf>,

    /// Listen address override.
    #[arg(long)]
    bind: Option<String>,

    /// Database path override.
    #[arg(long, env = "ADJUTANT_DATABASE_URL")]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut config = ServerConfig::load(args.config.as_deref())
        .context("Failed to load server configuration")?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(database_url) = args.database_url {
        config.database_url = database_url;
    }

    let database = Database::new(&config.database_url);
    database
        .run_migrations()
        .await
        .context("Failed to run migrations")?;
    let dal = DAL::new(database);

    let uploads = UploadStore::new(config.upload_dir.clone());
    let stats = SystemStats::new();
    let _stats_ticker = stats.spawn_refresher(Duration::from_secs(config.stats_refresh_secs));

    let bind_addr = config.bind_addr.clone();
    info!(bind_addr = %bind_addr, database = %config.database_url, "Starting dashboard API server");

    let app = router(AppState::new(dal, uploads, stats, config));
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;
    axum::serve(listener, app)
        .await
        .context("Server terminated")?;

    Ok(())
}
