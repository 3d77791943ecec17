//! TreeLister - turns a directory node into ordered listing lines

use std::fmt;

use tracing::debug;

use crate::output::long_details;

use super::config::ListingConfig;
use super::node::Node;

const INDENT_WIDTH: usize = 4;

/// One formatted line of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingLine {
    /// Recursion level, rendered as four spaces each
    pub depth: usize,
    /// Long-format columns, if requested
    pub details: Option<String>,
    /// Path shown before the `/`
    pub parent: String,
    pub name: String,
    pub is_dir: bool,
}

impl ListingLine {
    /// Indentation plus long-format columns, everything before the path.
    pub fn lead(&self) -> String {
        let indent = " ".repeat(self.depth * INDENT_WIDTH);
        match &self.details {
            Some(details) => format!("{}{} ", indent, details),
            None => indent,
        }
    }
}

impl fmt::Display for ListingLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}/{}", self.lead(), self.parent, self.name)
    }
}

/// Lists directory nodes according to a fixed configuration.
pub struct TreeLister<'a> {
    config: &'a ListingConfig,
}

impl<'a> TreeLister<'a> {
    pub fn new(config: &'a ListingConfig) -> Self {
        Self { config }
    }

    /// List the children of `dir`, shown under `display_path`.
    pub fn list(&self, dir: &Node, display_path: &str) -> Vec<ListingLine> {
        let mut lines = Vec::new();
        self.list_level(dir, 0, display_path, &mut lines);
        debug!(
            dir = dir.name(),
            display_path,
            lines = lines.len(),
            "listed directory"
        );
        lines
    }

    /// The single line for a file named directly on the command line.
    pub fn describe_file(&self, file: &Node, path: &str) -> ListingLine {
        ListingLine {
            depth: 0,
            details: self.details(file),
            parent: ".".to_string(),
            name: path.to_string(),
            is_dir: false,
        }
    }

    fn list_level(
        &self,
        dir: &Node,
        depth: usize,
        display_path: &str,
        lines: &mut Vec<ListingLine>,
    ) {
        for entry in self.ordered_children(dir) {
            if !self.config.show_hidden && entry.is_hidden() {
                continue;
            }
            if !self.config.admits_kind(entry.is_dir()) {
                continue;
            }

            lines.push(ListingLine {
                depth,
                details: self.details(entry),
                parent: self.parent_column(display_path).to_string(),
                name: entry.name().to_string(),
                is_dir: entry.is_dir(),
            });

            if self.config.recursive && entry.is_dir() {
                let child_path = format!("{}/{}", display_path, entry.name());
                self.list_level(entry, depth + 1, &child_path, lines);
            }
        }
    }

    /// Children after the optional time sort and reversal.
    fn ordered_children<'n>(&self, dir: &'n Node) -> Vec<&'n Node> {
        let mut children: Vec<&Node> = dir.children().iter().collect();
        if self.config.sort_by_time {
            children.sort_by_key(|c| c.modified_at());
        }
        if self.config.reverse {
            children.reverse();
        }
        children
    }

    fn details(&self, node: &Node) -> Option<String> {
        self.config.long_format.then(|| long_details(node))
    }

    /// Short format drops the leading `/` that recursion adds at the root.
    fn parent_column<'p>(&self, display_path: &'p str) -> &'p str {
        if self.config.long_format {
            display_path
        } else {
            display_path.strip_prefix('/').unwrap_or(display_path)
        }
    }
}
