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

//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Adjutant monitor daemon.
#[derive(Debug, Parser)]
#[command(name = "adjutant-monitor", version, about)]
pub struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, global = true, env = "ADJUTANT_MONITOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Verbose logging (debug level).
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Quiet logging (errors only).
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run all monitor loops until interrupted.
    Run,
    /// Run one change-detection pass and exit.
    Scan,
    /// Run one drain pass and exit.
    Drain,
}

impl Cli {
    /// The tracing filter directive implied by the verbosity flags.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
