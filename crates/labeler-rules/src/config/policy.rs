//! Tunable policies read from the optional sections of the config document

use serde::{Deserialize, Serialize};

/// `true` when `path` lies below the top-level directory `root`.
pub(crate) fn under_root(path: &str, root: &str) -> bool {
    let root = root.trim_end_matches('/');
    path.strip_prefix(root)
        .is_some_and(|rest| rest.starts_with('/'))
}

/// Label-count safety valve for changes that fan out across many areas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapPolicy {
    /// Number of distinct rule labels tolerated before collapsing.
    pub limit: usize,
    /// The cap only applies when some path is under one of these roots.
    pub broad_roots: Vec<String>,
    /// Label that replaces the collapsed ones.
    pub aggregate_label: String,
    /// Labels that survive a collapse.
    pub always_keep: Vec<String>,
}

impl Default for CapPolicy {
    fn default() -> Self {
        Self {
            limit: 4,
            broad_roots: vec!["lib".to_string(), "src".to_string()],
            aggregate_label: "lib / src".to_string(),
            always_keep: vec!["c++".to_string(), "needs-ci".to_string()],
        }
    }
}

impl CapPolicy {
    pub fn covers(&self, path: &str) -> bool {
        self.broad_roots.iter().any(|root| under_root(path, root))
    }

    pub fn keeps(&self, label: &str) -> bool {
        self.always_keep.iter().any(|kept| kept == label)
    }
}

/// Which paths need continuous integration, and the label marking them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CiPolicy {
    /// Empty disables the label.
    pub roots: Vec<String>,
    pub label: String,
}

impl Default for CiPolicy {
    fn default() -> Self {
        Self {
            roots: ["deps", "lib", "src", "test"]
                .into_iter()
                .map(String::from)
                .collect(),
            label: "needs-ci".to_string(),
        }
    }
}

impl CiPolicy {
    pub fn requires_ci(&self, path: &str) -> bool {
        self.roots.iter().any(|root| under_root(path, root))
    }
}

/// Knobs for the documentation collapse applied to exclusive matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExclusivityPolicy {
    /// Labels starting with this prefix are meta labels (e.g. `dont-land-on-v14.x`).
    pub suppress_prefix: String,
    pub doc_label: String,
    pub doc_root: String,
    pub tests_root: String,
}

impl Default for ExclusivityPolicy {
    fn default() -> Self {
        Self {
            suppress_prefix: "dont-".to_string(),
            doc_label: "doc".to_string(),
            doc_root: "doc".to_string(),
            tests_root: "test".to_string(),
        }
    }
}

impl ExclusivityPolicy {
    pub fn is_meta(&self, label: &str) -> bool {
        !self.suppress_prefix.is_empty() && label.starts_with(&self.suppress_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("lib/fs.js", "lib", true)]
    #[case("lib/internal/fs.js", "lib/", true)]
    #[case("libuv/fs.c", "lib", false)]
    #[case("lib", "lib", false)]
    #[case("tools/lib/x.js", "lib", false)]
    #[case("doc/api/fs.md", "doc/api", true)]
    fn test_under_root(#[case] path: &str, #[case] root: &str, #[case] expected: bool) {
        assert_eq!(under_root(path, root), expected);
    }

    #[test]
    fn test_defaults() {
        let cap = CapPolicy::default();
        assert_eq!(cap.limit, 4);
        assert!(cap.covers("src/node.cc"));
        assert!(!cap.covers("deps/v8/x.cc"));
        assert!(cap.keeps("c++"));
        assert!(cap.keeps("needs-ci"));
        assert!(!cap.keeps("fs"));

        let ci = CiPolicy::default();
        assert!(ci.requires_ci("deps/uv/src/unix/core.c"));
        assert!(ci.requires_ci("test/parallel/test-fs.js"));
        assert!(!ci.requires_ci("doc/api/fs.md"));
        assert!(!ci.requires_ci("benchmark/fs/read.js"));
    }

    #[test]
    fn test_empty_ci_roots_disable_label() {
        let ci = CiPolicy {
            roots: vec![],
            ..CiPolicy::default()
        };
        assert!(!ci.requires_ci("lib/fs.js"));
    }

    #[test]
    fn test_meta_prefix() {
        let policy = ExclusivityPolicy::default();
        assert!(policy.is_meta("dont-land-on-v14.x"));
        assert!(!policy.is_meta("doc"));

        let disabled = ExclusivityPolicy {
            suppress_prefix: String::new(),
            ..ExclusivityPolicy::default()
        };
        assert!(!disabled.is_meta("dont-land-on-v14.x"));
    }
}
