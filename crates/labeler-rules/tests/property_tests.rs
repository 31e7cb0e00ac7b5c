//! Property tests: uniqueness and order independence of resolved labels

use labeler_rules::resolve;
use labeler_test_utils::node_config;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashSet};

const SAMPLE_PATHS: &[&str] = &[
    "doc/api/fs.md",
    "doc/api/http.md",
    "doc/api/_toc.md",
    "doc/guides/backporting.md",
    "test/parallel/test-fs-read.js",
    "test/doctool/test-make-doc.js",
    "test/addons/hello/binding.cc",
    "benchmark/fs/readfile.js",
    "lib/http.js",
    "lib/fs.js",
    "lib/net.js",
    "lib/constants.js",
    "lib/internal/process/next_tick.js",
    "src/node_file.cc",
    "src/node_os.cc",
    "src/gen_headers.py",
    "deps/v8/src/api.cc",
    "tools/lint-md.js",
    "LICENSE",
    "README.md",
];

fn sample_changeset() -> impl Strategy<Value = Vec<&'static str>> {
    prop::sample::subsequence(SAMPLE_PATHS.to_vec(), 0..=SAMPLE_PATHS.len()).prop_shuffle()
}

fn arbitrary_path() -> impl Strategy<Value = String> {
    "(lib|src|doc/api|test|deps|tools|benchmark)/[a-z_]{1,8}(/[a-z_]{1,8})?\\.(js|cc|h|md|py)"
}

proptest! {
    #[test]
    fn resolved_labels_are_unique(paths in prop::collection::vec(arbitrary_path(), 0..12)) {
        let labels = resolve(&paths, "v14.x", &node_config()).into_vec();
        let unique: HashSet<&String> = labels.iter().collect();
        prop_assert_eq!(unique.len(), labels.len());
    }

    #[test]
    fn membership_ignores_path_order(paths in sample_changeset()) {
        let config = node_config();
        let mut reversed = paths.clone();
        reversed.reverse();

        let forward: BTreeSet<String> = resolve(&paths, "master", &config).into_iter().collect();
        let backward: BTreeSet<String> = resolve(&reversed, "master", &config).into_iter().collect();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn membership_ignores_order_of_arbitrary_paths(
        paths in prop::collection::vec(arbitrary_path(), 0..12).prop_shuffle()
    ) {
        let config = node_config();
        let mut sorted = paths.clone();
        sorted.sort();

        let shuffled: BTreeSet<String> = resolve(&paths, "master", &config).into_iter().collect();
        let ordered: BTreeSet<String> = resolve(&sorted, "master", &config).into_iter().collect();
        prop_assert_eq!(shuffled, ordered);
    }

    #[test]
    fn resolution_is_deterministic(paths in sample_changeset(), branch in "(master|v[0-9]{1,2}\\.(x|[0-9])(-staging)?)") {
        let config = node_config();
        prop_assert_eq!(resolve(&paths, &branch, &config), resolve(&paths, &branch, &config));
    }
}
