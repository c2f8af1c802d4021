use std::ffi::OsString;

use crate::config::Config;
use crate::error::Result;
use crate::global::GlobalEnvironment;
use crate::label::Label;
use crate::toolchain::Toolchain;

/// Which environment ended up running the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Found by the enclosing workspace.
    Local,
    /// Run from the per-user global module.
    Global,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub resolution: Resolution,
    pub exit_code: i32,
}

/// Decides where a label runs and runs it there.
pub struct Dispatcher<'a, T: Toolchain> {
    toolchain: &'a T,
    config: &'a Config,
}

impl<'a, T: Toolchain> Dispatcher<'a, T> {
    pub const fn new(toolchain: &'a T, config: &'a Config) -> Self {
        Self { toolchain, config }
    }

    /// True when the working directory's workspace can resolve `label`.
    ///
    /// A failed query counts as "not here" whatever the reason: a missing
    /// target and a broken workspace look the same.
    pub fn is_locally_resolvable(&self, label: &Label) -> Result<bool> {
        let code = self.toolchain.query(label, &self.config.working_dir)?;
        tracing::debug!(%label, code, "local query finished");
        Ok(code == 0)
    }

    pub fn run_local(&self, label: &Label, args: &[OsString]) -> Result<i32> {
        tracing::info!(%label, "running from local workspace");
        self.toolchain.run(label, args, &self.config.working_dir)
    }

    pub fn ensure_global_environment(&self, label: &Label) -> Result<GlobalEnvironment> {
        GlobalEnvironment::provision(&self.config.global_root()?, &label.module)
    }

    /// Fetch `label` inside `env`, then run it there. A failed fetch skips
    /// the run and its exit code is returned instead.
    pub fn run_global(
        &self,
        label: &Label,
        args: &[OsString],
        env: &GlobalEnvironment,
    ) -> Result<i32> {
        let code = self.toolchain.fetch(label, &env.root)?;
        if code != 0 {
            tracing::warn!(%label, code, "fetching global module failed");
            return Ok(code);
        }

        tracing::info!(%label, root = %env.root.display(), "running from global module");
        self.toolchain.run(label, args, &env.root)
    }

    /// Run `label` locally when the workspace knows it, otherwise through the
    /// global module.
    ///
    /// `label` must be valid; callers reject module-less labels before
    /// getting here.
    pub fn dispatch(&self, label: &Label, args: &[OsString]) -> Result<Outcome> {
        debug_assert!(label.is_valid(), "dispatching label without a module");

        if self.is_locally_resolvable(label)? {
            let exit_code = self.run_local(label, args)?;
            return Ok(Outcome {
                resolution: Resolution::Local,
                exit_code,
            });
        }

        let env = self.ensure_global_environment(label)?;
        let exit_code = self.run_global(label, args, &env)?;
        Ok(Outcome {
            resolution: Resolution::Global,
            exit_code,
        })
    }
}
