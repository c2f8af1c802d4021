use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not determine the home directory")]
    HomeDirUnavailable,

    #[error("could not determine the working directory")]
    WorkingDir(#[source] std::io::Error),

    #[error("toolchain '{binary}' not found on PATH")]
    ToolchainNotFound {
        binary: String,
        #[source]
        source: which::Error,
    },

    #[error("failed to start '{binary}'")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to provision global module at {}", path.display())]
    Provision {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
