use std::fmt;

/// A Bazel label split into the module it lives in, its package and its
/// target.
///
/// Labels are built once by [`parse_label`](super::parse_label) and never
/// mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Label {
    pub module: String,
    pub package: String,
    pub target: String,
}

impl Label {
    /// A label without a module cannot be queried or run.
    pub fn is_valid(&self) -> bool {
        !self.module.is_empty()
    }

    /// `@module//package:target`
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}//{}:{}", self.module, self.package, self.target)
    }
}
