//! Pattern rules and ordered rule sets
//!
//! Rules are written in the config document as `/regex/: label, label`.
//! A [`RuleSet`] keeps them in declaration order; for any path only the
//! first matching rule contributes labels.

use crate::template::{LabelTemplate, parse_templates};
use crate::{Error, Result};
use regex::Regex;

/// A compiled pattern paired with the labels it produces.
#[derive(Debug, Clone)]
pub struct PatternRule {
    pattern: Regex,
    templates: Vec<LabelTemplate>,
}

impl PatternRule {
    /// Compile one `pattern -> labels` entry.
    ///
    /// Wrapping slashes are stripped; the text between them is handed to
    /// the regex engine verbatim.
    pub fn compile(pattern: &str, labels: &str) -> Result<Self> {
        let source = strip_delimiters(pattern);
        let regex = Regex::new(source).map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            pattern: regex,
            templates: parse_templates(pattern, labels)?,
        })
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn templates(&self) -> &[LabelTemplate] {
        &self.templates
    }

    /// Labels this rule produces for `path`, or `None` if it does not match.
    ///
    /// A match that resolves to no labels yields `Some(vec![])`.
    pub fn apply<'a>(&'a self, path: &'a str) -> Option<Vec<&'a str>> {
        let captures = self.pattern.captures(path)?;
        Some(
            self.templates
                .iter()
                .filter_map(|template| template.resolve(&captures))
                .collect(),
        )
    }
}

/// Ordered list of rules. Order is precedence.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<PatternRule>,
}

impl RuleSet {
    /// Compile entries in the order given.
    pub fn compile<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let rules = entries
            .into_iter()
            .map(|(pattern, labels)| PatternRule::compile(pattern.as_ref(), labels.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// Labels of the first rule matching `path`.
    pub fn labels_for<'a>(&'a self, path: &'a str) -> Option<Vec<&'a str>> {
        self.rules.iter().find_map(|rule| rule.apply(path))
    }

    /// Whether any rule matches `path`.
    pub fn matches_any(&self, path: &str) -> bool {
        self.rules.iter().any(|rule| rule.pattern.is_match(path))
    }

    pub fn iter(&self) -> impl Iterator<Item = &PatternRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn strip_delimiters(pattern: &str) -> &str {
    pattern
        .strip_prefix('/')
        .and_then(|rest| rest.strip_suffix('/'))
        .unwrap_or(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("/^doc\\//", "^doc\\/")]
    #[case("^doc/", "^doc/")]
    #[case("/", "/")]
    #[case("//", "")]
    #[case("/a", "/a")]
    fn test_strip_delimiters(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(strip_delimiters(raw), expected);
    }

    #[test]
    fn test_compile_rejects_bad_regex() {
        let err = PatternRule::compile("/^lib\\/(unclosed/", "lib").unwrap_err();
        match err {
            Error::InvalidPattern { pattern, .. } => assert_eq!(pattern, "/^lib\\/(unclosed/"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_pattern_is_unanchored_unless_written_so() {
        let rule = PatternRule::compile("/http/", "http").unwrap();
        assert_eq!(rule.apply("lib/_http_agent.js"), Some(vec!["http"]));

        let anchored = PatternRule::compile("/^http/", "http").unwrap();
        assert_eq!(anchored.apply("lib/_http_agent.js"), None);
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let rules = RuleSet::compile([
            ("/^doc\\/api\\/modules\\.md$/", "doc, module"),
            ("/^doc\\/api\\/(\\w+)\\.md$/", "doc, $1"),
            ("/^doc\\//", "doc"),
        ])
        .unwrap();

        assert_eq!(rules.labels_for("doc/api/modules.md"), Some(vec!["doc", "module"]));
        assert_eq!(rules.labels_for("doc/api/fs.md"), Some(vec!["doc", "fs"]));
        assert_eq!(rules.labels_for("doc/guides/x.md"), Some(vec!["doc"]));
        assert_eq!(rules.labels_for("lib/fs.js"), None);
    }

    #[test]
    fn test_match_without_labels_is_still_a_match() {
        let rules = RuleSet::compile([("/^misc\\/(foo)?/", "$1")]).unwrap();
        assert_eq!(rules.labels_for("misc/bar"), Some(vec![]));
        assert!(rules.matches_any("misc/bar"));
    }

    #[test]
    fn test_compile_keeps_declaration_order() {
        let rules = RuleSet::compile([("/b/", "b"), ("/a/", "a"), ("/c/", "c")]).unwrap();
        let sources: Vec<&str> = rules.iter().map(|r| r.pattern().as_str()).collect();
        assert_eq!(sources, vec!["b", "a", "c"]);
        assert_eq!(rules.len(), 3);
    }
}
