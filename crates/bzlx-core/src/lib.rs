#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod dispatch;
pub mod error;
pub mod global;
pub mod label;
pub mod toolchain;

pub use config::Config;
pub use dispatch::{Dispatcher, Outcome, Resolution};
pub use error::{Error, Result};
pub use global::GlobalEnvironment;
pub use label::{parse_label, Label};
pub use toolchain::{Bazel, Toolchain};
