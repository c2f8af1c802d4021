mod bazel;

use std::ffi::OsString;
use std::path::Path;
use std::process::ExitStatus;

use crate::error::Result;
use crate::label::Label;

pub use bazel::Bazel;

/// Exit code reported for a child that did not exit normally and carries no
/// signal number.
pub const ABNORMAL_EXIT: i32 = 1;

/// The external build tool bzlx drives.
///
/// Every method blocks until the child exits and returns its exit code.
/// Implementations only fail when the child could not be started at all.
pub trait Toolchain {
    /// Read-only lookup of `label` from `workdir`. Zero means resolvable.
    fn query(&self, label: &Label, workdir: &Path) -> Result<i32>;

    /// Download whatever `label` needs so a later `run` can start.
    fn fetch(&self, label: &Label, workdir: &Path) -> Result<i32>;

    /// Build and run `label` from `workdir`, forwarding `args` to it with the
    /// caller's stdio attached.
    fn run(&self, label: &Label, args: &[OsString], workdir: &Path) -> Result<i32>;
}

pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    ABNORMAL_EXIT
}
