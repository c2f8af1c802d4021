mod cli;

use std::env;
use std::ffi::OsString;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use console::style;

use bzlx_core::{parse_label, Bazel, Config, Dispatcher, Label};

use crate::cli::{split_invocation, Cli};

const EXIT_FAILURE: i32 = 1;

const EXAMPLES: &str = concat!(
    "        examples: bzlx @example\n",
    "                  bzlx @example//package/path\n",
    "                  bzlx @example//package/path:target\n",
);

fn main() {
    std::process::exit(real_main());
}

fn real_main() -> i32 {
    let args: Vec<OsString> = env::args_os().collect();
    let (own_args, forwarded) = split_invocation(&args);

    let cli = match Cli::try_parse_from(own_args) {
        Ok(cli) => cli,
        Err(e) => return report_clap_error(&e),
    };

    init_tracing(cli.verbose);

    let Some(raw_label) = cli.label else {
        usage_error("expected bazel label as first argument");
        return EXIT_FAILURE;
    };
    let Some(raw_label) = raw_label.to_str() else {
        usage_error("bazel label must be valid UTF-8");
        return EXIT_FAILURE;
    };

    let label = parse_label(raw_label);
    if !label.is_valid() {
        usage_error("bazel label must have module name");
        return EXIT_FAILURE;
    }

    match run(&label, &forwarded) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", style("[ERROR]").red().bold());
            EXIT_FAILURE
        }
    }
}

fn run(label: &Label, forwarded: &[OsString]) -> Result<i32> {
    let config = Config::from_env().context("failed to load configuration")?;
    let bazel = Bazel::locate(&config.bazel)?;
    let dispatcher = Dispatcher::new(&bazel, &config);

    let outcome = dispatcher
        .dispatch(label, forwarded)
        .with_context(|| format!("failed to run {label}"))?;
    tracing::debug!(
        resolution = ?outcome.resolution,
        exit_code = outcome.exit_code,
        "finished"
    );

    Ok(outcome.exit_code)
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("bzlx=debug,bzlx_core=debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn usage_error(message: &str) {
    eprintln!("{} {message}\n", style("[ERROR]").red().bold());
    eprintln!("{EXAMPLES}");
}

fn report_clap_error(e: &clap::Error) -> i32 {
    let _ = e.print();
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => EXIT_FAILURE,
    }
}
