//! Raw, uncompiled shape of the label configuration document

use super::policy::{CapPolicy, CiPolicy, ExclusivityPolicy};
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// The document as written, before any pattern is compiled.
///
/// ```yaml
/// exclusive:
///   /^doc\/api\/(\w+)\.md$/: doc, $1
/// subsystem:
///   /^lib\/(\w+)\.js$/: $1
/// subsystem_names: [fs, http]
/// cap:
///   limit: 4
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConfigDocument {
    #[serde(alias = "exclusiveLabels", alias = "exlusiveLabels")]
    pub exclusive: RuleEntries,

    #[serde(alias = "subSystemLabels")]
    pub subsystem: RuleEntries,

    #[serde(alias = "allJsSubSystems")]
    pub subsystem_names: Vec<String>,

    #[serde(default)]
    pub cap: CapPolicy,

    #[serde(default)]
    pub ci: CiPolicy,

    #[serde(default)]
    pub exclusivity: ExclusivityPolicy,
}

/// `pattern -> labels` pairs in document order.
///
/// Deserialized through a map visitor so the order the entries were
/// written in survives regardless of the source format. A null value
/// (`/^lib\/sys\.js$/:` in YAML) means the rule matches but adds nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleEntries(pub Vec<(String, String)>);

impl RuleEntries {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<'de> Deserialize<'de> for RuleEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = RuleEntries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a mapping of patterns to comma separated labels")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RuleEntries, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((pattern, labels)) = map.next_entry::<String, Option<String>>()? {
                    if entries.iter().any(|(seen, _): &(String, String)| *seen == pattern) {
                        return Err(de::Error::custom(format!("duplicate pattern {pattern}")));
                    }
                    entries.push((pattern, labels.unwrap_or_default()));
                }
                Ok(RuleEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

impl Serialize for RuleEntries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
