use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{Error, Result};
use crate::label::Label;

use super::{exit_code, Toolchain};

/// Keep Bazel's own chatter off the terminal so only the target's output shows.
const QUIET_FLAGS: &[&str] = &["--ui_event_filters=-info,-stdout,-stderr", "--noshow_progress"];

/// Separates Bazel's arguments from the ones handed to the target.
const ARGS_SEPARATOR: &str = "--";

/// Bazel (or a compatible launcher such as bazelisk) found on `PATH`.
#[derive(Debug, Clone)]
pub struct Bazel {
    program: PathBuf,
}

impl Bazel {
    /// Resolve `binary` through `PATH`. Absolute and relative paths are
    /// checked as-is.
    pub fn locate(binary: &str) -> Result<Self> {
        let program = which::which(binary).map_err(|source| Error::ToolchainNotFound {
            binary: binary.to_string(),
            source,
        })?;
        tracing::debug!("using toolchain at {}", program.display());
        Ok(Self { program })
    }

    fn command(&self, verb: &str, label: &Label, workdir: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.current_dir(workdir);
        cmd.arg(verb);
        cmd.args(QUIET_FLAGS);
        cmd.arg(label.canonical());
        cmd
    }

    fn status(&self, cmd: &mut Command) -> Result<i32> {
        let argv: Vec<OsString> = cmd.get_args().map(ToOwned::to_owned).collect();
        tracing::debug!(
            program = %self.program.display(),
            workdir = ?cmd.get_current_dir(),
            ?argv,
            "invoking toolchain"
        );

        let status = cmd.status().map_err(|source| Error::Spawn {
            binary: self.program.display().to_string(),
            source,
        })?;

        let code = exit_code(status);
        tracing::debug!(code, "toolchain exited");
        Ok(code)
    }
}

impl Toolchain for Bazel {
    fn query(&self, label: &Label, workdir: &Path) -> Result<i32> {
        let mut cmd = self.command("query", label, workdir);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        self.status(&mut cmd)
    }

    fn fetch(&self, label: &Label, workdir: &Path) -> Result<i32> {
        let mut cmd = self.command("fetch", label, workdir);
        cmd.stdin(Stdio::null());
        self.status(&mut cmd)
    }

    fn run(&self, label: &Label, args: &[OsString], workdir: &Path) -> Result<i32> {
        let mut cmd = self.command("run", label, workdir);
        cmd.arg(ARGS_SEPARATOR);
        cmd.args(args);
        self.status(&mut cmd)
    }
}
