//! Server configuration from command-line flags and environment variables.

use crate::task::services::SeedPolicy;
use camino::Utf8PathBuf;
use clap::Parser;
use std::net::SocketAddr;

/// Default listen address.
pub const DEFAULT_ADDR: &str = "127.0.0.1:3001";

/// Default task file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "tasks.json";

/// Runtime configuration for the task server.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "taskboard-server",
    version,
    about = "Task store served as JSON over HTTP"
)]
pub struct ServerConfig {
    /// Socket address to listen on
    #[arg(long, env = "TASKBOARD_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: SocketAddr,

    /// JSON file holding the task collection
    #[arg(long, env = "TASKBOARD_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    pub data_file: Utf8PathBuf,

    /// Start with no tasks instead of the example tasks when the file is missing
    #[arg(long, env = "TASKBOARD_NO_SEED")]
    pub no_seed: bool,
}

impl ServerConfig {
    /// Returns how an absent task file is seeded.
    #[must_use]
    pub const fn seed_policy(&self) -> SeedPolicy {
        if self.no_seed {
            SeedPolicy::Empty
        } else {
            SeedPolicy::Examples
        }
    }
}
