//! Test utilities for building trees and tree documents.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

use crate::tree::Node;

pub const FILE_PERMISSIONS: &str = "-rw-r--r--";
pub const DIR_PERMISSIONS: &str = "drwxr-xr-x";

/// Build a file node.
pub fn file(name: &str, size: u64, modified_at: i64) -> Node {
    Node::File {
        name: name.to_string(),
        size,
        modified_at,
        permissions: FILE_PERMISSIONS.to_string(),
    }
}

/// Build a directory node of 4096 bytes.
pub fn dir(name: &str, modified_at: i64, children: Vec<Node>) -> Node {
    Node::Dir {
        name: name.to_string(),
        size: 4096,
        modified_at,
        permissions: DIR_PERMISSIONS.to_string(),
        children,
    }
}

/// The reference `interpreter` tree as a JSON document.
pub fn sample_document() -> Value {
    json!({
        "name": "interpreter",
        "size": 4096,
        "time_modified": 1699957865,
        "permissions": "drwxr-xr-x",
        "contents": [
            {"name": ".gitignore", "size": 8911, "time_modified": 1699941437, "permissions": "-rw-r--r--"},
            {"name": "LICENSE", "size": 1071, "time_modified": 1699941437, "permissions": "-rw-r--r--"},
            {"name": "README.md", "size": 83, "time_modified": 1699941437, "permissions": "-rw-r--r--"},
            {
                "name": "ast", "size": 4096, "time_modified": 1699957739, "permissions": "drwxr-xr-x",
                "contents": [
                    {"name": "go.mod", "size": 225, "time_modified": 1699957780, "permissions": "-rw-r--r--"}
                ]
            },
            {"name": "lexer", "size": 4096, "time_modified": 1699957740, "permissions": "drwxr-xr-x", "contents": []},
            {"name": "main.go", "size": 3456, "time_modified": 1699957790, "permissions": "-rw-r--r--"},
            {
                "name": "parser", "size": 4096, "time_modified": 1699957740, "permissions": "drwxr-xr-x",
                "contents": [
                    {"name": "token", "size": 1234, "time_modified": 1699957795, "permissions": "-rw-r--r--"}
                ]
            }
        ]
    })
}

/// The reference `interpreter` tree, parsed.
pub fn sample_tree() -> Node {
    serde_json::from_value(sample_document()).expect("sample document is a valid tree")
}

/// A wide and deep generated tree for benchmarks.
pub fn generated_tree(breadth: usize, depth: usize) -> Node {
    fn level(prefix: &str, breadth: usize, depth: usize) -> Vec<Node> {
        (0..breadth)
            .map(|i| {
                let name = format!("{prefix}{i}");
                let mtime = (i * 7919 % 1000) as i64;
                if depth > 0 && i % 2 == 0 {
                    dir(&name, mtime, level(&format!("{name}_"), breadth, depth - 1))
                } else {
                    file(&name, (i as u64) * 1024, mtime)
                }
            })
            .collect()
    }
    dir("root", 0, level("n", breadth, depth))
}

/// A temporary directory holding a tree document.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Create a temporary directory with `directory.json` holding the sample tree.
    pub fn with_sample() -> Self {
        let tree = Self::new();
        tree.write_document("directory.json", &sample_document());
        tree
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a JSON document, creating parent directories as needed.
    pub fn write_document(&self, path: &str, document: &Value) -> PathBuf {
        self.write_raw(path, &document.to_string())
    }

    /// Write arbitrary text, for malformed documents.
    pub fn write_raw(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write document");
        full_path
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
