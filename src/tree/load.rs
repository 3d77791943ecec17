//! Loading the tree document

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use snafu::ResultExt;
use tracing::debug;

use crate::error::{LoadError, ParseSnafu, ReadSnafu};

use super::node::Node;

/// Read and parse the tree document at `path`.
pub fn load_tree(path: &Path) -> Result<Node, LoadError> {
    let file = File::open(path).context(ReadSnafu { path })?;
    let root: Node = serde_json::from_reader(BufReader::new(file)).context(ParseSnafu {
        origin: format!("'{}'", path.display()),
    })?;
    debug!(path = %path.display(), nodes = root.count(), "loaded tree document");
    Ok(root)
}

/// Parse a tree document from any reader.
pub fn parse_tree<R: Read>(reader: R) -> Result<Node, LoadError> {
    serde_json::from_reader(reader).context(ParseSnafu { origin: "<input>" })
}
