//! Implementation of `pr-labeler resolve`

use crate::error::{CliError, Result};
use labeler_rules::{Config, LabelSet, resolve};
use std::io::{BufRead, IsTerminal};
use std::path::Path;

/// Resolve labels for `paths` (or stdin) and print them.
pub fn run_resolve(
    config_path: &Path,
    base: &str,
    max_labels: Option<usize>,
    json: bool,
    paths: Vec<String>,
) -> Result<()> {
    let config = with_limit_override(Config::load(config_path)?, max_labels)?;

    let paths = if paths.is_empty() {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(CliError::user(
                "no paths given; pass them as arguments or pipe them on stdin",
            ));
        }
        read_paths(stdin.lock())?
    } else {
        paths
    };
    tracing::debug!(paths = paths.len(), base, "Resolving labels");

    let labels = resolve(&paths, base, &config);
    let output = render(&labels, json)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// Apply the `--max-labels` / `MAX_LABELS_LIMIT` override, if any.
pub(crate) fn with_limit_override(config: Config, max_labels: Option<usize>) -> Result<Config> {
    match max_labels {
        Some(limit) => {
            tracing::debug!(limit, "Overriding label cap");
            Ok(config.with_cap_limit(limit)?)
        }
        None => Ok(config),
    }
}

/// One path per line; blank lines are skipped.
fn read_paths(input: impl BufRead) -> Result<Vec<String>> {
    let mut paths = Vec::new();
    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            paths.push(trimmed.to_string());
        }
    }
    Ok(paths)
}

fn render(labels: &LabelSet, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string(labels)?);
    }
    Ok(labels.iter().collect::<Vec<_>>().join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use labeler_test_utils::node_config;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_paths_skips_blank_lines() {
        let input = "lib/fs.js\n\n  doc/api/fs.md  \r\n\n";
        assert_eq!(
            read_paths(input.as_bytes()).unwrap(),
            vec!["lib/fs.js", "doc/api/fs.md"]
        );
    }

    #[test]
    fn test_render_plain_and_json() {
        let labels: LabelSet = ["needs-ci", "fs"].into_iter().collect();
        assert_eq!(render(&labels, false).unwrap(), "needs-ci\nfs");
        assert_eq!(render(&labels, true).unwrap(), r#"["needs-ci","fs"]"#);
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&LabelSet::new(), false).unwrap(), "");
        assert_eq!(render(&LabelSet::new(), true).unwrap(), "[]");
    }

    #[test]
    fn test_limit_override() {
        let config = with_limit_override(node_config(), Some(10)).unwrap();
        assert_eq!(config.cap().limit, 10);

        let config = with_limit_override(node_config(), None).unwrap();
        assert_eq!(config.cap().limit, 4);

        assert!(matches!(
            with_limit_override(node_config(), Some(0)),
            Err(CliError::Rules(_))
        ));
    }
}
