//! Exclusive rule set resolution
//!
//! The exclusive rules only apply when every changed path matches one of
//! them. A multi-file documentation change that also names several
//! subsystems is collapsed to the documentation label alone, or to nothing
//! when it is ambiguous.

use crate::config::{Config, under_root};
use crate::label_set::LabelSet;
use crate::matcher::match_subsystems;

/// Whether every path matches at least one exclusive rule.
pub fn is_exclusive<S: AsRef<str>>(paths: &[S], config: &Config) -> bool {
    paths
        .iter()
        .all(|path| config.exclusive().matches_any(path.as_ref()))
}

/// Labels from the exclusive rule set, or an empty set when the change is
/// not exclusive.
pub fn match_exclusive<S: AsRef<str>>(paths: &[S], config: &Config) -> LabelSet {
    if !is_exclusive(paths, config) {
        return LabelSet::new();
    }

    let labels = match_subsystems(paths, config.exclusive(), config.ci(), config.cap()).labels;
    let policy = config.exclusivity();
    let doc = policy.doc_label.as_str();

    let non_meta: Vec<&str> = labels.iter().filter(|label| !policy.is_meta(label)).collect();
    let all_under = |root: &str| paths.iter().all(|path| under_root(path.as_ref(), root));

    if non_meta.contains(&doc) && non_meta.len() > 2 && !all_under(&policy.tests_root) {
        let only_subsystems = non_meta
            .iter()
            .filter(|label| **label != doc)
            .all(|label| config.subsystem_names().contains(*label));

        return if only_subsystems || all_under(&policy.doc_root) {
            tracing::debug!(?labels, "Multiple documentation areas, keeping only {doc}");
            LabelSet::from_iter([doc])
        } else {
            tracing::debug!(?labels, "Ambiguous documentation change, dropping exclusive labels");
            LabelSet::new()
        };
    }

    labels
}
