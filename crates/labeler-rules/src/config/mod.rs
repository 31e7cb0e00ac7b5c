//! Label configuration
//!
//! A [`Config`] is compiled once per run from a [`ConfigDocument`] and then
//! shared read-only by every resolution. All pattern and template errors
//! surface here, never during resolution.

mod document;
mod policy;

pub use document::{ConfigDocument, RuleEntries};
pub use policy::{CapPolicy, CiPolicy, ExclusivityPolicy};
pub(crate) use policy::under_root;

use crate::rule::RuleSet;
use crate::{Error, Result};
use std::collections::BTreeSet;
use std::path::Path;

/// Compiled, immutable label configuration.
#[derive(Debug, Clone)]
pub struct Config {
    exclusive: RuleSet,
    subsystem: RuleSet,
    subsystem_names: BTreeSet<String>,
    cap: CapPolicy,
    ci: CiPolicy,
    exclusivity: ExclusivityPolicy,
}

impl Config {
    /// Compile a parsed document.
    pub fn from_document(document: ConfigDocument) -> Result<Self> {
        if document.cap.limit == 0 {
            return Err(Error::invalid_config("cap.limit must be at least 1"));
        }

        let exclusive = RuleSet::compile(document.exclusive.iter())?;
        let subsystem = RuleSet::compile(document.subsystem.iter())?;
        tracing::debug!(
            exclusive = exclusive.len(),
            subsystem = subsystem.len(),
            "Compiled label rules"
        );

        Ok(Self {
            exclusive,
            subsystem,
            subsystem_names: document.subsystem_names.into_iter().collect(),
            cap: document.cap,
            ci: document.ci,
            exclusivity: document.exclusivity,
        })
    }

    /// Parse and compile a YAML document held in memory.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Self::parse(content, "YAML", "<memory>")
    }

    /// Load a config file, picking the format from its extension:
    ///
    /// - `.yml`, `.yaml` -> YAML
    /// - `.json` -> JSON
    /// - `.toml` -> TOML
    pub fn load(path: &Path) -> Result<Self> {
        let format = format_for(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let origin = path.display().to_string();

        tracing::debug!(path = %origin, format, "Loading label config");
        Self::parse(&content, format, &origin)
    }

    /// Parse a document fetched from elsewhere, picking the format from `name`
    /// the same way [`Config::load`] does.
    pub fn from_named_str(name: &str, content: &str) -> Result<Self> {
        let format = format_for(Path::new(name))?;
        Self::parse(content, format, name)
    }

    fn parse(content: &str, format: &str, origin: &str) -> Result<Self> {
        let parse_error = |message: String| Error::ConfigParse {
            origin: origin.to_string(),
            format: format.to_string(),
            message,
        };

        let document: ConfigDocument = match format {
            "YAML" => serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?,
            "JSON" => serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?,
            _ => toml::from_str(content).map_err(|e| parse_error(e.to_string()))?,
        };
        Self::from_document(document)
    }

    /// Same config with a different cap limit.
    pub fn with_cap_limit(mut self, limit: usize) -> Result<Self> {
        if limit == 0 {
            return Err(Error::invalid_config("cap limit must be at least 1"));
        }
        self.cap.limit = limit;
        Ok(self)
    }

    pub fn exclusive(&self) -> &RuleSet {
        &self.exclusive
    }

    pub fn subsystem(&self) -> &RuleSet {
        &self.subsystem
    }

    pub fn subsystem_names(&self) -> &BTreeSet<String> {
        &self.subsystem_names
    }

    pub fn cap(&self) -> &CapPolicy {
        &self.cap
    }

    pub fn ci(&self) -> &CiPolicy {
        &self.ci
    }

    pub fn exclusivity(&self) -> &ExclusivityPolicy {
        &self.exclusivity
    }
}

fn format_for(path: &Path) -> Result<&'static str> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "yml" | "yaml" => Ok("YAML"),
        "json" => Ok("JSON"),
        "toml" => Ok("TOML"),
        _ => Err(Error::UnsupportedFormat { extension }),
    }
}
