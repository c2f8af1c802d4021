use super::types::Label;

const MODULE_PREFIX: char = '@';
const PACKAGE_SEPARATOR: &str = "//";
const TARGET_SEPARATOR: char = ':';

/// Split a raw label such as `@module//pkg/path:target` into its parts.
///
/// Never fails. Input that does not look like a label produces a [`Label`]
/// with an empty module, which callers reject through [`Label::is_valid`].
pub fn parse_label(input: &str) -> Label {
    let (module, working_package) = split_module(input);
    let (package, explicit_target) = split_target(working_package);

    let target = explicit_target
        .filter(|target| !target.is_empty())
        .or_else(|| last_segment(package))
        .unwrap_or(module);

    Label {
        module: module.to_string(),
        package: package.to_string(),
        target: target.to_string(),
    }
}

/// Only a leading `@` introduces a module. `foo//bar` is not read as module
/// `oo`; it yields no module and is rejected as invalid.
fn split_module(input: &str) -> (&str, &str) {
    let rest = input.strip_prefix(MODULE_PREFIX);
    match (input.find(PACKAGE_SEPARATOR), rest) {
        (None, Some(module)) => (module, ""),
        (None, None) => ("", ""),
        (Some(sep), rest) => {
            let package = &input[sep + PACKAGE_SEPARATOR.len()..];
            // `sep >= 1` whenever the prefix is present.
            let module = rest.map_or("", |_| &input[1..sep]);
            (module, package)
        }
    }
}

fn split_target(package: &str) -> (&str, Option<&str>) {
    match package.split_once(TARGET_SEPARATOR) {
        Some((package, target)) => (package, Some(target)),
        None => (package, None),
    }
}

fn last_segment(package: &str) -> Option<&str> {
    package.rsplit('/').next().filter(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(module: &str, package: &str, target: &str) -> Label {
        Label {
            module: module.to_string(),
            package: package.to_string(),
            target: target.to_string(),
        }
    }

    #[test]
    fn parse_module_only() {
        assert_eq!(parse_label("@example"), label("example", "", "example"));
    }

    #[test]
    fn parse_package_path() {
        assert_eq!(
            parse_label("@example//pkg/path"),
            label("example", "pkg/path", "path")
        );
    }

    #[test]
    fn parse_package_and_target() {
        assert_eq!(
            parse_label("@example//pkg/path:target"),
            label("example", "pkg/path", "target")
        );
    }

    #[test]
    fn parse_single_segment_package() {
        assert_eq!(parse_label("@foo//bar"), label("foo", "bar", "bar"));
    }

    #[test]
    fn parse_root_package_target() {
        assert_eq!(parse_label("@foo//:baz"), label("foo", "", "baz"));
    }

    #[test]
    fn parse_root_package_without_target() {
        assert_eq!(parse_label("@foo//"), label("foo", "", "foo"));
    }

    #[test]
    fn parse_deep_package_uses_last_segment() {
        assert_eq!(
            parse_label("@foo//a/b/c/d"),
            label("foo", "a/b/c/d", "d")
        );
    }

    #[test]
    fn parse_trailing_colon_falls_back_to_package() {
        assert_eq!(parse_label("@foo//bar/baz:"), label("foo", "bar/baz", "baz"));
    }

    #[test]
    fn parse_trailing_slash_falls_back_to_module() {
        assert_eq!(parse_label("@foo//bar/"), label("foo", "bar/", "foo"));
    }

    #[test]
    fn parse_target_keeps_later_colons() {
        assert_eq!(parse_label("@foo//bar:baz:qux"), label("foo", "bar", "baz:qux"));
    }

    #[test]
    fn parse_plain_string_is_empty() {
        let parsed = parse_label("plainstring");
        assert_eq!(parsed, Label::default());
        assert!(!parsed.is_valid());
    }

    #[test]
    fn parse_empty_string_is_empty() {
        assert_eq!(parse_label(""), Label::default());
    }

    #[test]
    fn parse_main_repo_label_has_no_module() {
        let parsed = parse_label("//pkg:target");
        assert_eq!(parsed, label("", "pkg", "target"));
        assert!(!parsed.is_valid());
    }

    #[test]
    fn parse_without_prefix_has_no_module() {
        let parsed = parse_label("foo//bar:baz");
        assert_eq!(parsed, label("", "bar", "baz"));
        assert!(!parsed.is_valid());
    }

    #[test]
    fn parse_bare_prefix() {
        let parsed = parse_label("@");
        assert_eq!(parsed, Label::default());
        assert!(!parsed.is_valid());
    }

    #[test]
    fn module_only_labels_default_target_to_module() {
        for module in ["a", "rules_go", "buildifier_prebuilt", "x.y-z", "ü"] {
            let parsed = parse_label(&format!("@{module}"));
            assert_eq!(parsed.module, module);
            assert_eq!(parsed.target, parsed.module);
            assert_eq!(parsed.package, "");
        }
    }

    #[test]
    fn full_labels_recover_every_part() {
        let cases = [
            ("ns", "group", "unit"),
            ("rules_foo", "tools/gen", "gen_bin"),
            ("m", "a/b/c", "d"),
            ("with-dash", "pkg_1", "t.sh"),
        ];
        for (module, package, target) in cases {
            let raw = format!("@{module}//{package}:{target}");
            assert_eq!(parse_label(&raw), label(module, package, target), "{raw}");
        }
    }

    #[test]
    fn nested_packages_take_last_segment() {
        let cases = [("a/b", "b"), ("x/y/z", "z"), ("tools/cmd/fmt", "fmt")];
        for (package, expected) in cases {
            let parsed = parse_label(&format!("@ns//{package}"));
            assert_eq!(parsed.target, expected);
            assert_eq!(parsed.package, package);
        }
    }

    #[test]
    fn parsing_is_pure() {
        for raw in ["@a", "@a//b/c", "@a//b:c", "junk", "//x"] {
            assert_eq!(parse_label(raw), parse_label(raw));
        }
    }

    #[test]
    fn canonical_form_reparses_to_same_label() {
        let parsed = parse_label("@example//pkg/path");
        assert_eq!(parse_label(&parsed.canonical()), parsed);
    }
}
