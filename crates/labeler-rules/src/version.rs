//! Release line labels derived from the target branch

use crate::label_set::LabelSet;
use regex::Regex;
use std::sync::LazyLock;

/// `v14.x`, `v14.3`, optionally followed by `-staging`.
static VERSION_BRANCH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(v\d+\.(?:\d+|x))(?:-staging|$)").unwrap());

/// The release line label for `base_branch`, if it is a version branch.
pub fn version_label(base_branch: &str) -> Option<&str> {
    VERSION_BRANCH
        .captures(base_branch)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Append the release line label of `base_branch` to `labels`.
pub fn with_version_label(mut labels: LabelSet, base_branch: &str) -> LabelSet {
    if let Some(label) = version_label(base_branch) {
        labels.insert(label);
    }
    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("v14.x", Some("v14.x"))]
    #[case("v14.3", Some("v14.3"))]
    #[case("v14.x-staging", Some("v14.x"))]
    #[case("v14.3-staging", Some("v14.3"))]
    #[case("v8.10", Some("v8.10"))]
    #[case("master", None)]
    #[case("main", None)]
    #[case("v14", None)]
    #[case("v14.x-proposal", None)]
    #[case("release/v14.x", None)]
    #[case("v14.3.1", None)]
    fn test_version_label(#[case] branch: &str, #[case] expected: Option<&str>) {
        assert_eq!(version_label(branch), expected);
    }

    #[test]
    fn test_appends_after_existing_labels() {
        let labels: LabelSet = ["doc"].into_iter().collect();
        let labels = with_version_label(labels, "v12.x-staging");
        assert_eq!(labels.to_vec(), vec!["doc", "v12.x"]);
    }

    #[test]
    fn test_no_duplicate_when_already_present() {
        let labels: LabelSet = ["v12.x"].into_iter().collect();
        assert_eq!(with_version_label(labels, "v12.x").len(), 1);
    }
}
