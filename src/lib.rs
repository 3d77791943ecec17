//! treels - ls for a directory tree described by a JSON document

pub mod error;
pub mod logging;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{InvalidFilter, ListingError, LoadError};
pub use output::{ListingPrinter, OutputConfig, format_size, format_time};
pub use tree::{
    FilterBy, ListingConfig, ListingLine, Node, Resolved, TreeLister, list_target, load_tree,
    parse_tree, resolve,
};
