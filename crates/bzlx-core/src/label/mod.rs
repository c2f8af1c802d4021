mod parse;
mod types;

pub use parse::parse_label;
pub use types::Label;
