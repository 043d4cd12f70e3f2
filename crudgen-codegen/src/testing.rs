//! Test utilities for generator backends.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use crudgen_manifest::Workflow;
use tempfile::TempDir;

use crate::compiler::CompileOptions;

/// The two-entity shop: `order` belongs to `user`.
pub const SHOP_JSON: &str = r#"{
  "name": "Shop",
  "workflows": [
    {
      "name": "user",
      "props": [{ "name": "age", "type": "number", "nullable": false }]
    },
    {
      "name": "order",
      "relations": [
        { "targetEntityName": "user", "cardinality": "one-to-many", "isParent": false }
      ]
    }
  ]
}"#;

pub fn shop() -> Workflow {
    SHOP_JSON.parse().expect("shop fixture parses")
}

/// Compile options writing into a fresh temporary directory.
///
/// The directory is removed when the returned guard drops.
pub fn temp_output() -> (TempDir, CompileOptions) {
    let dir = TempDir::new().expect("create temp dir");
    let options = CompileOptions::new(dir.path());
    (dir, options)
}

/// Every file below `root`, keyed by relative path.
pub fn read_tree(root: &Path) -> BTreeMap<PathBuf, String> {
    let mut files = BTreeMap::new();
    collect(root, root, &mut files);
    files
}

fn collect(root: &Path, dir: &Path, files: &mut BTreeMap<PathBuf, String>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(root, &path, files);
        } else if let Ok(content) = std::fs::read_to_string(&path) {
            let relative = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
            files.insert(relative, content);
        }
    }
}

/// Assert that two strings are equal, with a line diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected == actual {
        return;
    }

    let expected_lines: Vec<&str> = expected.lines().collect();
    let actual_lines: Vec<&str> = actual.lines().collect();
    let mut diff = String::new();
    for i in 0..expected_lines.len().max(actual_lines.len()) {
        let exp = expected_lines.get(i).copied();
        let act = actual_lines.get(i).copied();
        if exp != act {
            diff.push_str(&format!("line {}:\n", i + 1));
            diff.push_str(&format!("  - {}\n", exp.unwrap_or("<missing>")));
            diff.push_str(&format!("  + {}\n", act.unwrap_or("<missing>")));
        }
    }

    panic!("content mismatch:\n{}", diff);
}
