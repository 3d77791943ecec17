//! Mapping a slash-separated path onto a node of the tree

use tracing::trace;

use crate::error::{ListingError, NotFoundSnafu};

use super::node::Node;

/// Result of a successful resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub node: &'a Node,
    /// False only when the final segment named a file.
    pub is_dir: bool,
}

/// Find the node addressed by `path`, relative to `root`.
///
/// `""` and `"."` address the root, which counts as a directory whatever its
/// own shape. Otherwise the path is split on `/` with no normalization, so
/// `..`, empty segments and leading or trailing slashes simply fail to match.
/// A file reached before the last segment is reported as not found.
pub fn resolve<'a>(root: &'a Node, path: &str) -> Result<Resolved<'a>, ListingError> {
    if path.is_empty() || path == "." {
        return Ok(Resolved {
            node: root,
            is_dir: true,
        });
    }

    let mut current = root;
    let mut segments = path.split('/').peekable();

    while let Some(segment) = segments.next() {
        let Some(entry) = current.child(segment) else {
            trace!(path, segment, "no matching entry");
            return NotFoundSnafu { path }.fail();
        };

        if entry.is_dir() {
            current = entry;
        } else if segments.peek().is_none() {
            return Ok(Resolved {
                node: entry,
                is_dir: false,
            });
        } else {
            trace!(path, segment, "file in the middle of a path");
            return NotFoundSnafu { path }.fail();
        }
    }

    Ok(Resolved {
        node: current,
        is_dir: true,
    })
}
