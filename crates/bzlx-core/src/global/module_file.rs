use std::fmt::Write as _;

use super::versions::pinned_version;

pub const MODULE_FILE_NAME: &str = "MODULE.bazel";

/// Name of the root module bzlx generates.
pub const GLOBAL_MODULE_NAME: &str = "bzlx_global";

const PREAMBLE: &str = "\
# Generated by bzlx. Overwritten on every run; do not edit.
";

/// One `bazel_dep` line of the generated module file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub name: String,
    pub version: Option<String>,
}

impl Dependency {
    /// Declare `module`, pinned if it is in the known-versions table.
    pub fn for_module(module: &str) -> Self {
        Self {
            name: module.to_string(),
            version: pinned_version(module).map(str::to_string),
        }
    }

    pub fn is_pinned(&self) -> bool {
        self.version.is_some()
    }
}

pub fn render_module_file(dep: &Dependency) -> String {
    let mut out = String::from(PREAMBLE);
    let _ = writeln!(out, "module(name = \"{GLOBAL_MODULE_NAME}\")");
    out.push('\n');
    match &dep.version {
        Some(version) => {
            let _ = writeln!(
                out,
                "bazel_dep(name = \"{}\", version = \"{version}\")",
                dep.name
            );
        }
        None => {
            let _ = writeln!(out, "bazel_dep(name = \"{}\")", dep.name);
        }
    }
    out
}
