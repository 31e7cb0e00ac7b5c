//! Subsystem matching with the label-count cap
//!
//! Paths are folded in input order into a [`MatchOutcome`]. Each path adds
//! the CI label when it sits under a CI root, then the labels of the first
//! rule that matches it.
//!
//! When the change set touches a broad root (`lib/`, `src/` by default) the
//! distinct rule labels are counted. The first new label arriving once the
//! count has reached the cap limit collapses the result to the always-keep
//! labels and the CI label plus the aggregate label; from then on only those
//! kept labels are added.

use crate::config::{CapPolicy, CiPolicy};
use crate::label_set::LabelSet;
use crate::rule::RuleSet;
use std::collections::HashSet;

/// Result of matching a change set against a rule set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchOutcome {
    pub labels: LabelSet,
    /// Whether the cap collapsed the labels.
    pub capped: bool,
}

/// Match every path against `rules`.
pub fn match_subsystems<S: AsRef<str>>(
    paths: &[S],
    rules: &RuleSet,
    ci: &CiPolicy,
    cap: &CapPolicy,
) -> MatchOutcome {
    let ctx = FoldContext {
        rules,
        ci,
        cap,
        cap_applies: paths.iter().any(|path| cap.covers(path.as_ref())),
    };

    let tally = paths
        .iter()
        .fold(Tally::default(), |tally, path| tally.visit(path.as_ref(), &ctx));

    if tally.capped {
        tracing::debug!(
            limit = cap.limit,
            counted = tally.counted.len(),
            "Label cap reached, collapsed to {}",
            cap.aggregate_label
        );
    }

    MatchOutcome {
        labels: tally.labels,
        capped: tally.capped,
    }
}

struct FoldContext<'a> {
    rules: &'a RuleSet,
    ci: &'a CiPolicy,
    cap: &'a CapPolicy,
    cap_applies: bool,
}

impl FoldContext<'_> {
    /// The CI label survives a collapse whether or not it is listed in `always_keep`.
    fn keeps(&self, label: &str) -> bool {
        self.cap.keeps(label) || label == self.ci.label
    }
}

#[derive(Default)]
struct Tally {
    labels: LabelSet,
    counted: HashSet<String>,
    capped: bool,
}

impl Tally {
    fn visit(mut self, path: &str, ctx: &FoldContext<'_>) -> Self {
        if ctx.ci.requires_ci(path) {
            self.labels.insert(ctx.ci.label.as_str());
        }

        let Some(found) = ctx.rules.labels_for(path) else {
            return self;
        };

        for label in found {
            if !self.capped && ctx.cap_applies && !self.counted.contains(label) {
                if self.counted.len() >= ctx.cap.limit {
                    self = self.collapse(ctx);
                } else {
                    self.counted.insert(label.to_string());
                }
            }

            if !self.capped || ctx.keeps(label) {
                self.labels.insert(label);
            }
        }

        self
    }

    /// Replace everything but the always-keep labels with the aggregate label.
    fn collapse(self, ctx: &FoldContext<'_>) -> Self {
        let labels = self
            .labels
            .into_iter()
            .filter(|label| ctx.keeps(label))
            .chain(std::iter::once(ctx.cap.aggregate_label.clone()))
            .collect();

        Self {
            labels,
            counted: self.counted,
            capped: true,
        }
    }
}
