//! Label templates attached to a pattern rule
//!
//! A rule's label list is written as a comma separated string such as
//! `"doc, $1"`. Entries starting with `$` refer to a capture group of the
//! rule's pattern and are filled in from the match of a concrete path.

use crate::{Error, Result};
use regex::Captures;

const GROUP_SIGIL: char = '$';

/// One entry of a rule's label list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelTemplate {
    /// Emitted as written.
    Literal(String),
    /// Taken from the capture group with this name. Purely numeric names
    /// address groups by position (`$1`).
    CaptureGroup(String),
}

impl LabelTemplate {
    /// Parse a single trimmed template entry.
    pub fn parse(pattern: &str, raw: &str) -> Result<Self> {
        match raw.strip_prefix(GROUP_SIGIL) {
            Some("") => Err(Error::InvalidTemplate {
                pattern: pattern.to_string(),
                template: raw.to_string(),
            }),
            Some(group) => Ok(Self::CaptureGroup(group.to_string())),
            None => Ok(Self::Literal(raw.to_string())),
        }
    }

    /// Resolve against the match produced for one path.
    ///
    /// Returns `None` when the referenced group did not participate in the
    /// match or matched the empty string.
    pub fn resolve<'a>(&'a self, captures: &Captures<'a>) -> Option<&'a str> {
        let label = match self {
            Self::Literal(text) => text.as_str(),
            Self::CaptureGroup(group) => {
                let found = match group.parse::<usize>() {
                    Ok(index) => captures.get(index),
                    Err(_) => captures.name(group),
                };
                found?.as_str()
            }
        };

        (!label.is_empty()).then_some(label)
    }
}

/// Split a comma separated label list into templates.
///
/// Empty entries (`"a,,b"`, a trailing comma, an empty string) are skipped.
pub fn parse_templates(pattern: &str, raw: &str) -> Result<Vec<LabelTemplate>> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| LabelTemplate::parse(pattern, entry))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_parse_splits_and_trims() {
        let templates = parse_templates("/x/", " doc ,  $1,c++ ").unwrap();
        assert_eq!(
            templates,
            vec![
                LabelTemplate::Literal("doc".into()),
                LabelTemplate::CaptureGroup("1".into()),
                LabelTemplate::Literal("c++".into()),
            ]
        );
    }

    #[test]
    fn test_parse_keeps_spaces_inside_labels() {
        let templates = parse_templates("/x/", "lib / src, v8 engine").unwrap();
        assert_eq!(
            templates,
            vec![
                LabelTemplate::Literal("lib / src".into()),
                LabelTemplate::Literal("v8 engine".into()),
            ]
        );
    }

    #[test]
    fn test_parse_skips_empty_entries() {
        assert!(parse_templates("/x/", "").unwrap().is_empty());
        assert_eq!(parse_templates("/x/", "a,,b,").unwrap().len(), 2);
    }

    #[test]
    fn test_bare_sigil_is_rejected() {
        let err = parse_templates("/^lib/", "doc, $").unwrap_err();
        assert!(matches!(err, Error::InvalidTemplate { .. }));
        assert!(err.to_string().contains("/^lib/"));
    }

    #[test]
    fn test_resolve_positional_and_named_groups() {
        let rx = Regex::new(r"^lib/(?<kind>internal/)?(\w+)\.js$").unwrap();
        let caps = rx.captures("lib/internal/fs.js").unwrap();

        let positional = LabelTemplate::CaptureGroup("2".into());
        let named = LabelTemplate::CaptureGroup("kind".into());
        assert_eq!(positional.resolve(&caps), Some("fs"));
        assert_eq!(named.resolve(&caps), Some("internal/"));
    }

    #[test]
    fn test_resolve_drops_absent_and_empty_groups() {
        let rx = Regex::new(r"^misc/(foo)?bar(\d*)").unwrap();
        let caps = rx.captures("misc/bar").unwrap();

        assert_eq!(LabelTemplate::CaptureGroup("1".into()).resolve(&caps), None);
        assert_eq!(LabelTemplate::CaptureGroup("2".into()).resolve(&caps), None);
        assert_eq!(LabelTemplate::CaptureGroup("7".into()).resolve(&caps), None);
        assert_eq!(LabelTemplate::CaptureGroup("nope".into()).resolve(&caps), None);
    }

    #[test]
    fn test_resolve_literal() {
        let rx = Regex::new("x").unwrap();
        let caps = rx.captures("x").unwrap();
        let literal = LabelTemplate::Literal("meta".into());
        assert_eq!(literal.resolve(&caps), Some("meta"));
    }
}
