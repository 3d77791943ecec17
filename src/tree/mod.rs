//! The simulated directory tree and the listing engine
//!
//! - `Node`: one entry of the tree, loaded once from a JSON document
//! - `resolve`: maps a slash-separated path onto a node
//! - `TreeLister`: produces the ordered, formatted lines for a directory

mod config;
mod load;
mod node;
mod resolve;
mod target;
mod walker;

// Re-export public types
pub use config::{FilterBy, ListingConfig};
pub use load::{load_tree, parse_tree};
pub use node::Node;
pub use resolve::{Resolved, resolve};
pub use target::list_target;
pub use walker::{ListingLine, TreeLister};
