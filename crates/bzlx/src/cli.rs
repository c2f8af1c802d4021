use std::ffi::OsString;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "bzlx",
    about = "Run a Bazel module target from anywhere",
    long_about = "Run a Bazel module target from anywhere.\n\n\
        The label is looked up in the current workspace first. When the \
        workspace does not know it, bzlx declares the module in a per-user \
        global module (~/.bzlx) and runs it from there. Every argument after \
        the label is passed to the target unchanged.",
    version
)]
pub struct Cli {
    /// Log every toolchain invocation
    #[arg(short, long)]
    pub verbose: bool,

    /// Bazel label, e.g. @example, @example//package/path or @example//package/path:target
    pub label: Option<OsString>,
}

/// Split the command line into bzlx's own arguments and the ones forwarded
/// to the target.
///
/// The first argument that is not a flag is the label. It stays with bzlx;
/// everything after it belongs to the target, even if it looks like a flag
/// or is not valid UTF-8.
pub fn split_invocation(args: &[OsString]) -> (Vec<OsString>, Vec<OsString>) {
    let label_at = args
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, arg)| !arg.to_string_lossy().starts_with('-'))
        .map(|(i, _)| i);

    match label_at {
        Some(i) => (args[..=i].to_vec(), args[i + 1..].to_vec()),
        None => (args.to_vec(), Vec::new()),
    }
}
