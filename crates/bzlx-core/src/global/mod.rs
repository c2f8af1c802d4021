mod module_file;
mod versions;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub use module_file::{
    render_module_file, Dependency, GLOBAL_MODULE_NAME, MODULE_FILE_NAME,
};
pub use versions::{pinned_version, KNOWN_VERSIONS};

/// A per-user Bazel module that declares a single dependency so targets from
/// that dependency can be run outside any workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalEnvironment {
    pub root: PathBuf,
    pub module_file: PathBuf,
    pub dependency: Dependency,
}

impl GlobalEnvironment {
    /// Create `root` if needed and (re)write its module file to declare
    /// `module`.
    ///
    /// Safe to repeat: an existing or half-initialized directory is reused
    /// and the module file is replaced with identical content for the same
    /// module.
    pub fn provision(root: &Path, module: &str) -> Result<Self> {
        fs::create_dir_all(root).map_err(|source| Error::Provision {
            path: root.to_path_buf(),
            source,
        })?;

        let dependency = Dependency::for_module(module);
        if !dependency.is_pinned() {
            tracing::warn!("no pinned version known for module '{module}'; declaring it unversioned");
        }

        let module_file = root.join(MODULE_FILE_NAME);
        fs::write(&module_file, render_module_file(&dependency)).map_err(|source| {
            Error::Provision {
                path: module_file.clone(),
                source,
            }
        })?;
        tracing::info!("provisioned global module for '{module}' at {}", root.display());

        Ok(Self {
            root: root.to_path_buf(),
            module_file,
            dependency,
        })
    }
}
