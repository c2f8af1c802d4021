/// Modules whose version bzlx pins when it has to declare them itself.
///
/// Anything not listed here is declared without a version. Bazel then falls
/// back to its own resolution, which is not guaranteed to pick a release.
pub const KNOWN_VERSIONS: &[(&str, &str)] = &[
    ("buildifier_prebuilt", "6.4.0"),
    ("buildozer", "7.1.2"),
];

pub fn pinned_version(module: &str) -> Option<&'static str> {
    KNOWN_VERSIONS
        .iter()
        .find(|(name, _)| *name == module)
        .map(|(_, version)| *version)
}
