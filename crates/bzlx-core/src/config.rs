use std::path::PathBuf;

use crate::error::{Error, Result};

/// Toolchain used when `BZLX_BAZEL` is unset.
pub const DEFAULT_BAZEL: &str = "bazel";

/// Hidden directory under the home directory that hosts the global module.
pub const GLOBAL_DIR_NAME: &str = ".bzlx";

/// Everything bzlx reads from the process environment, resolved up front so
/// the rest of the crate never touches global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Home directory; the global module lives under it. Only needed once a
    /// label has to run globally.
    pub home_dir: Option<PathBuf>,
    /// Directory the local workspace lookup and local runs happen in.
    pub working_dir: PathBuf,
    /// Name or path of the Bazel executable.
    pub bazel: String,
}

impl Config {
    pub fn new(home_dir: impl Into<PathBuf>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            home_dir: Some(home_dir.into()),
            working_dir: working_dir.into(),
            bazel: DEFAULT_BAZEL.to_string(),
        }
    }

    pub fn from_env() -> Result<Self> {
        let home_dir = dirs::home_dir();
        let working_dir = std::env::current_dir().map_err(Error::WorkingDir)?;
        let bazel = std::env::var("BZLX_BAZEL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BAZEL.to_string());

        Ok(Self {
            home_dir,
            working_dir,
            bazel,
        })
    }

    #[must_use]
    pub fn with_bazel(mut self, bazel: impl Into<String>) -> Self {
        self.bazel = bazel.into();
        self
    }

    pub fn global_root(&self) -> Result<PathBuf> {
        self.home_dir
            .as_ref()
            .map(|home| home.join(GLOBAL_DIR_NAME))
            .ok_or(Error::HomeDirUnavailable)
    }
}
