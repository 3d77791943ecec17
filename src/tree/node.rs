//! In-memory tree node types and their JSON representation

use serde::Deserialize;

/// One entry of the simulated filesystem.
///
/// The document marks directories only by the presence of a `contents` array,
/// so deserialization goes through [`RawNode`] and the discriminator becomes
/// the enum variant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawNode")]
pub enum Node {
    File {
        name: String,
        size: u64,
        modified_at: i64,
        permissions: String,
    },
    Dir {
        name: String,
        size: u64,
        modified_at: i64,
        permissions: String,
        children: Vec<Node>,
    },
}

/// Node as it appears in the JSON document.
#[derive(Debug, Deserialize)]
struct RawNode {
    name: String,
    #[serde(default)]
    size: u64,
    #[serde(default)]
    time_modified: i64,
    #[serde(default)]
    permissions: String,
    contents: Option<Vec<Node>>,
}

impl From<RawNode> for Node {
    fn from(raw: RawNode) -> Self {
        match raw.contents {
            Some(children) => Node::Dir {
                name: raw.name,
                size: raw.size,
                modified_at: raw.time_modified,
                permissions: raw.permissions,
                children,
            },
            None => Node::File {
                name: raw.name,
                size: raw.size,
                modified_at: raw.time_modified,
                permissions: raw.permissions,
            },
        }
    }
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::File { name, .. } | Node::Dir { name, .. } => name,
        }
    }

    pub fn size(&self) -> u64 {
        match self {
            Node::File { size, .. } | Node::Dir { size, .. } => *size,
        }
    }

    /// Modification time in epoch seconds.
    pub fn modified_at(&self) -> i64 {
        match self {
            Node::File { modified_at, .. } | Node::Dir { modified_at, .. } => *modified_at,
        }
    }

    pub fn permissions(&self) -> &str {
        match self {
            Node::File { permissions, .. } | Node::Dir { permissions, .. } => permissions,
        }
    }

    /// Children in document order. Files have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::File { .. } => &[],
            Node::Dir { children, .. } => children,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Dir { .. })
    }

    /// Dotfiles are hidden unless `-A` is given.
    pub fn is_hidden(&self) -> bool {
        self.name().starts_with('.')
    }

    /// First child with the given name.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children().iter().find(|c| c.name() == name)
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children().iter().map(Node::count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Node {
        serde_json::from_str(json).expect("valid node json")
    }

    #[test]
    fn test_contents_marks_directory() {
        let node = parse(
            r#"{"name": "lexer", "size": 4096, "time_modified": 1699957740,
                "permissions": "drwxr-xr-x", "contents": []}"#,
        );
        assert!(node.is_dir());
        assert!(node.children().is_empty());
        assert_eq!(node.permissions(), "drwxr-xr-x");
    }

    #[test]
    fn test_missing_contents_is_file() {
        let node = parse(
            r#"{"name": "main.go", "size": 3456, "time_modified": 1699957790,
                "permissions": "-rw-r--r--"}"#,
        );
        assert!(!node.is_dir());
        assert_eq!(node.name(), "main.go");
        assert_eq!(node.size(), 3456);
        assert_eq!(node.modified_at(), 1699957790);
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_nested_children_keep_document_order() {
        let node = parse(
            r#"{"name": "root", "contents": [
                {"name": "b"}, {"name": "a", "contents": [{"name": "x"}]}, {"name": "c"}
            ]}"#,
        );
        let names: Vec<_> = node.children().iter().map(Node::name).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert!(node.children()[1].is_dir());
        assert_eq!(node.count(), 5);
    }

    #[test]
    fn test_child_lookup_first_match_wins() {
        let node = parse(
            r#"{"name": "root", "contents": [
                {"name": "dup", "size": 1}, {"name": "dup", "size": 2}
            ]}"#,
        );
        assert_eq!(node.child("dup").map(Node::size), Some(1));
        assert!(node.child("missing").is_none());
    }

    #[test]
    fn test_is_hidden() {
        assert!(parse(r#"{"name": ".gitignore"}"#).is_hidden());
        assert!(!parse(r#"{"name": "LICENSE"}"#).is_hidden());
    }
}
