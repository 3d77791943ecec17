//! Listing whatever a command-line path points at

use tracing::debug;

use crate::error::{ListingError, NotADirectorySnafu};

use super::config::{FilterBy, ListingConfig};
use super::node::Node;
use super::resolve::resolve;
use super::walker::{ListingLine, TreeLister};

/// Resolve `path` under `root` and produce its listing.
///
/// A directory is listed with `path` as display path, except that `.` in the
/// short format shows like the bare root. A file yields a single line, unless
/// only directories were requested.
pub fn list_target(
    root: &Node,
    path: &str,
    config: &ListingConfig,
) -> Result<Vec<ListingLine>, ListingError> {
    let resolved = resolve(root, path)?;
    let lister = TreeLister::new(config);

    if resolved.is_dir {
        let display_path = if path == "." && !config.long_format {
            ""
        } else {
            path
        };
        return Ok(lister.list(resolved.node, display_path));
    }

    debug!(path, "target is a file");
    if config.filter_by == Some(FilterBy::Dir) {
        return NotADirectorySnafu { path }.fail();
    }
    Ok(vec![lister.describe_file(resolved.node, path)])
}
