//! Version token helpers.
//!
//! The walk never compares or solves versions. It only needs to pull the
//! clean `vMAJOR.MINOR.PATCH` prefix out of a declared token so that it can
//! guess at a module cache directory name.
//!
//! | Declared token                          | [`extract_semver`] |
//! |-----------------------------------------|--------------------|
//! | `v1.2.3`                                | `v1.2.3`           |
//! | `v1.2.3+incompatible`                   | `v1.2.3`           |
//! | `v0.0.0-20210101000000-abcdefabcdef`    | `v0.0.0`           |
//! | `master`                                | (empty)            |

use regex::Regex;
use std::sync::OnceLock;

fn semver_regex() -> &'static Regex {
    static SEMVER: OnceLock<Regex> = OnceLock::new();
    SEMVER.get_or_init(|| Regex::new(r"v\d+\.\d+\.\d+").expect("semver pattern is valid"))
}

/// Return the first `vMAJOR.MINOR.PATCH` substring of `version`, or an empty
/// string when there is none.
pub fn extract_semver(version: &str) -> &str {
    semver_regex().find(version).map_or("", |m| m.as_str())
}

/// Drop everything from the first `" //"` onward.
///
/// Identity strings built from raw manifest lines can still carry a trailing
/// comment such as `// indirect`; output never shows it.
pub fn strip_inline_comment(line: &str) -> &str {
    line.split(" //").next().unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_semver() {
        assert_eq!(extract_semver("v1.2.3"), "v1.2.3");
        assert_eq!(extract_semver("v1.2.3+incompatible"), "v1.2.3");
        assert_eq!(extract_semver("v0.0.0-20210101000000-abcdefabcdef"), "v0.0.0");
        assert_eq!(extract_semver("v2.10.11-rc.1"), "v2.10.11");
    }

    #[test]
    fn test_extract_semver_none() {
        assert_eq!(extract_semver(""), "");
        assert_eq!(extract_semver("master"), "");
        assert_eq!(extract_semver("1.2.3"), "");
    }

    #[test]
    fn test_strip_inline_comment() {
        assert_eq!(strip_inline_comment("github.com/a/b v1.2.3 // indirect"), "github.com/a/b v1.2.3");
        assert_eq!(strip_inline_comment("v1.2.3 // indirect"), "v1.2.3");
        assert_eq!(strip_inline_comment("github.com/a/b v1.2.3"), "github.com/a/b v1.2.3");
    }
}
