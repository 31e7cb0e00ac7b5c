//! Top-level label resolution

use crate::config::Config;
use crate::exclusive::match_exclusive;
use crate::label_set::LabelSet;
use crate::matcher::match_subsystems;
use crate::version::with_version_label;

/// Resolve the labels for a change.
///
/// Exclusive rules are tried first; when they yield nothing the subsystem
/// rules apply. The release line label of `base_branch` is appended last.
/// Pure and infallible: the same inputs always give the same labels.
pub fn resolve<S: AsRef<str>>(paths: &[S], base_branch: &str, config: &Config) -> LabelSet {
    let mut labels = match_exclusive(paths, config);

    if labels.is_empty() {
        let outcome = match_subsystems(paths, config.subsystem(), config.ci(), config.cap());
        tracing::debug!(capped = outcome.capped, "Resolved labels from subsystem rules");
        labels = outcome.labels;
    } else {
        tracing::debug!("Resolved labels from exclusive rules");
    }

    with_version_label(labels, base_branch)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
exclusive:
  /^doc\//: doc
subsystem:
  /^doc\//: doc
  /^lib\/(\w+)\.js$/: $1
subsystem_names: [fs]
"#;

    #[test]
    fn test_exclusive_first_then_subsystem() {
        let config = Config::from_yaml_str(CONFIG).unwrap();

        assert_eq!(resolve(&["doc/a.md"], "master", &config).to_vec(), vec!["doc"]);
        assert_eq!(
            resolve(&["doc/a.md", "lib/fs.js"], "master", &config).to_vec(),
            vec!["doc", "needs-ci", "fs"]
        );
    }

    #[test]
    fn test_version_label_even_without_paths_matching() {
        let config = Config::from_yaml_str(CONFIG).unwrap();
        assert_eq!(
            resolve(&["README.md"], "v18.x", &config).to_vec(),
            vec!["v18.x"]
        );
    }

    #[test]
    fn test_empty_changeset() {
        let config = Config::from_yaml_str(CONFIG).unwrap();
        let empty: Vec<String> = Vec::new();
        assert!(resolve(&empty, "master", &config).is_empty());
    }
}
