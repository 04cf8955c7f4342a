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

mod cli;
mod config;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use adjutant::dal::DAL;
use adjutant::database::connection::Database;
use adjutant::mailbox::{EmailMonitor, RestMailbox};
use adjutant::notifier::{DiscordMessenger, DrainLoop};
use adjutant::shutdown::ShutdownSignal;
use adjutant::watcher::{CursorStore, Watcher};

use cli::{Cli, Commands};
use config::MonitorFileConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())),
        )
        .init();

    let file_config = MonitorFileConfig::load(cli.config.as_deref())
        .context("Failed to load monitor configuration")?;
    let monitor_config = file_config.monitor_config();

    let database = Database::new(&file_config.database_url);
    database
        .run_migrations()
        .await
        .context("Failed to run migrations")?;
    let dal = DAL::new(database);

    match cli.command {
        Commands::Scan => {
            let cursors = CursorStore::new(file_config.cursor_state_path());
            let mut watcher = Watcher::new(dal, cursors, monitor_config.poll_interval());
            let records = watcher.poll().await;
            info!(count = records.len(), "Scan complete");
        }
        Commands::Drain => {
            let drain = DrainLoop::new(
                dal,
                build_messenger(&file_config, &monitor_config)?,
                &monitor_config,
            );
            let delivered = drain.drain_once().await;
            info!(delivered, "Drain complete");
        }
        Commands::Run => {
            let shutdown = ShutdownSignal::new();
            let mut handles = Vec::new();

            let cursors = CursorStore::new(file_config.cursor_state_path());
            let watcher = Watcher::new(dal.clone(), cursors, monitor_config.poll_interval());
            handles.push(tokio::spawn(watcher.run(shutdown.clone())));

            let drain = DrainLoop::new(
                dal.clone(),
                build_messenger(&file_config, &monitor_config)?,
                &monitor_config,
            );
            handles.push(tokio::spawn(drain.run(shutdown.clone())));

            if let Some(mail) = &file_config.mail {
                let mailbox = RestMailbox::new(
                    mail.api_base.clone(),
                    mail.inbox_id.clone(),
                    mail.api_key.clone(),
                    monitor_config.request_timeout(),
                )
                .context("Failed to construct mail client")?;
                let monitor = EmailMonitor::new(
                    dal.clone(),
                    Arc::new(mailbox),
                    file_config.email_state_path(),
                    mail.own_address.clone(),
                    Duration::from_secs(mail.poll_interval_secs),
                );
                handles.push(tokio::spawn(monitor.run(shutdown.clone())));
            }

            info!("Monitors running; press Ctrl-C to stop");
            tokio::signal::ctrl_c()
                .await
                .context("Failed to listen for shutdown signal")?;
            info!("Shutting down");
            shutdown.trigger();

            for handle in handles {
                let _ = handle.await;
            }
        }
    }

    Ok(())
}

fn build_messenger(
    file_config: &MonitorFileConfig,
    monitor_config: &adjutant::config::MonitorConfig,
) -> Result<Arc<DiscordMessenger>> {
    let token = file_config
        .chat_token()
        .context("Chat delivery requires a token")?;
    let messenger = DiscordMessenger::new(token, monitor_config.request_timeout())
        .context("Failed to construct chat client")?;
    Ok(Arc::new(messenger))
}
