use std::process::ExitStatus;

use thiserror::Error;

pub mod executor;

pub use executor::{Captured, ProcessExecutor};

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("command not found: {0}")]
    CommandNotFound(String),
    #[error("failed to spawn {name}: {source}")]
    Spawn {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{name} exited with {status}")]
    Failed { name: String, status: ExitStatus },
}
