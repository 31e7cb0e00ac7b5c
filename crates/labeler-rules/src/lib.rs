//! Path-to-label resolution engine for pull request labeling.
//!
//! Given the paths a pull request touches and the branch it targets, this
//! crate decides which category labels apply. The decision is driven by a
//! [`Config`] built once from a rule document:
//!
//! - **Exclusive rules**: used when every path matches one of them
//! - **Subsystem rules**: the general fallback, with a label-count cap
//! - **Version branches**: `v14.x` / `v14.3-staging` add a release line label
//!
//! ```text
//!   paths, base branch, Config
//!              |
//!      exclusive rules ---(empty)---> subsystem rules + cap
//!              |                              |
//!              +-------------+----------------+
//!                            |
//!                  version branch label
//!                            |
//!                        LabelSet
//! ```
//!
//! # Example
//!
//! ```
//! use labeler_rules::{Config, resolve};
//!
//! let config = Config::from_yaml_str(
//!     "exclusive: {}\nsubsystem:\n  /^lib\\/(\\w+)\\.js$/: $1\nsubsystem_names: []\n",
//! )?;
//! let labels = resolve(&["lib/http.js"], "v20.x", &config);
//! assert_eq!(labels.to_vec(), vec!["needs-ci", "http", "v20.x"]);
//! # Ok::<(), labeler_rules::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod exclusive;
pub mod label_set;
pub mod matcher;
pub mod resolve;
pub mod rule;
pub mod template;
pub mod version;

pub use config::{CapPolicy, CiPolicy, Config, ConfigDocument, ExclusivityPolicy, RuleEntries};
pub use error::{Error, Result};
pub use exclusive::{is_exclusive, match_exclusive};
pub use label_set::LabelSet;
pub use matcher::{MatchOutcome, match_subsystems};
pub use resolve::resolve;
pub use rule::{PatternRule, RuleSet};
pub use template::LabelTemplate;
pub use version::{version_label, with_version_label};
