//! In-memory filesystem store
//!
//! One canonical node representation: a tagged union of file and directory,
//! owned strictly tree-shaped from the root. Rust ownership enforces the
//! no-cycles/single-parent invariant; child names are unique per directory by
//! construction of the map.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use super::path::VPath;
use crate::error::{Error, Result};

/// A node in the virtual filesystem tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    File {
        content: String,
        size: u64,
        created_at: DateTime<Utc>,
    },
    Directory {
        children: BTreeMap<String, Node>,
    },
}

impl Node {
    /// Fresh file node with recomputed size and creation time.
    pub fn file(content: impl Into<String>) -> Self {
        let content = content.into();
        Node::File {
            size: content.len() as u64,
            created_at: Utc::now(),
            content,
        }
    }

    /// Fresh empty directory node.
    pub fn dir() -> Self {
        Node::Directory {
            children: BTreeMap::new(),
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Node::File { .. })
    }
}

/// Node kind for external introspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Directory,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::File => f.write_str("file"),
            NodeKind::Directory => f.write_str("directory"),
        }
    }
}

/// External representation of a node, as reported by `stat`.
///
/// `size` is content bytes for files and child count for directories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeInfo {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub size: u64,
}

/// In-memory filesystem: a root directory owning the whole tree.
///
/// All operations take already-resolved [`VPath`]s; path resolution happens
/// in [`super::path`] before the store is consulted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    root: Node,
}

impl MemoryStore {
    /// Create an empty store: a bare root directory.
    pub fn new() -> Self {
        Self { root: Node::dir() }
    }

    /// Look up the node at `path`.
    ///
    /// Absence is a first-class outcome, not an error: a missing child name
    /// or a file in an intermediate position both yield `None`.
    pub fn lookup(&self, path: &VPath) -> Option<&Node> {
        let mut node = &self.root;
        for segment in path.segments() {
            match node {
                Node::Directory { children } => node = children.get(segment)?,
                Node::File { .. } => return None,
            }
        }
        Some(node)
    }

    pub fn exists(&self, path: &VPath) -> bool {
        self.lookup(path).is_some()
    }

    /// Insert or overwrite a file leaf, creating missing intermediate
    /// directories along the way.
    pub fn write(&mut self, path: &VPath, content: impl Into<String>) -> Result<()> {
        self.attach(path, Node::file(content))
    }

    /// Attach an arbitrary node at `path` (mkdir -p for the parents),
    /// overwriting whatever occupied the slot. Used by write and by `mv`.
    pub fn attach(&mut self, path: &VPath, node: Node) -> Result<()> {
        if path.is_root() {
            return Err(Error::NotAFile("/".to_string()));
        }
        let name = path.file_name().unwrap_or_default().to_string();
        let children = self.parent_children_mut(path)?;
        children.insert(name, node);
        Ok(())
    }

    /// Create a directory at `path`, with implicit parents.
    ///
    /// No-op when a directory is already there; `AlreadyExists` when the path
    /// is occupied by a file.
    pub fn mkdir(&mut self, path: &VPath) -> Result<()> {
        if path.is_root() {
            return Ok(());
        }
        let name = path.file_name().unwrap_or_default().to_string();
        let children = self.parent_children_mut(path)?;
        match children.get(&name) {
            Some(Node::Directory { .. }) => Ok(()),
            Some(Node::File { .. }) => Err(Error::AlreadyExists(path.as_str().to_string())),
            None => {
                children.insert(name, Node::dir());
                Ok(())
            }
        }
    }

    /// Detach and return the node at `path`, file or whole subtree.
    ///
    /// Returns `None` when the parent chain is missing or the name is absent.
    pub fn detach(&mut self, path: &VPath) -> Option<Node> {
        let name = path.file_name()?.to_string();
        match self.node_mut(&path.parent())? {
            Node::Directory { children } => children.remove(&name),
            Node::File { .. } => None,
        }
    }

    /// Remove the node at `path`; silent no-op when there is nothing there.
    /// Directory removal is recursive - the subtree is discarded.
    pub fn remove(&mut self, path: &VPath) {
        let _ = self.detach(path);
    }

    /// Child names at `path`, sorted.
    pub fn list(&self, path: &VPath) -> Result<Vec<String>> {
        match self.lookup(path) {
            Some(Node::Directory { children }) => Ok(children.keys().cloned().collect()),
            Some(Node::File { .. }) => Err(Error::NotADirectory(path.as_str().to_string())),
            None => Err(Error::NoSuchEntry(path.as_str().to_string())),
        }
    }

    /// File content at `path`.
    pub fn read(&self, path: &VPath) -> Result<&str> {
        match self.lookup(path) {
            Some(Node::File { content, .. }) => Ok(content),
            Some(Node::Directory { .. }) => Err(Error::NotAFile(path.as_str().to_string())),
            None => Err(Error::NoSuchEntry(path.as_str().to_string())),
        }
    }

    /// External representation of the node at `path`.
    pub fn stat(&self, path: &VPath) -> Result<NodeInfo> {
        match self.lookup(path) {
            Some(Node::File { size, .. }) => Ok(NodeInfo {
                path: path.as_str().to_string(),
                kind: NodeKind::File,
                size: *size,
            }),
            Some(Node::Directory { children }) => Ok(NodeInfo {
                path: path.as_str().to_string(),
                kind: NodeKind::Directory,
                size: children.len() as u64,
            }),
            None => Err(Error::NoSuchEntry(path.as_str().to_string())),
        }
    }

    fn node_mut(&mut self, path: &VPath) -> Option<&mut Node> {
        let mut node = &mut self.root;
        for segment in path.segments() {
            match node {
                Node::Directory { children } => node = children.get_mut(segment)?,
                Node::File { .. } => return None,
            }
        }
        Some(node)
    }

    /// Walk to the parent of `path`, creating missing directories, and
    /// return its child map. Fails `NotADirectory` when a file occupies an
    /// intermediate position.
    fn parent_children_mut(&mut self, path: &VPath) -> Result<&mut BTreeMap<String, Node>> {
        let segments: Vec<&str> = path.segments().collect();
        let mut node = &mut self.root;
        let mut prefix = VPath::root();
        for segment in &segments[..segments.len().saturating_sub(1)] {
            match node {
                Node::Directory { children } => {
                    node = children
                        .entry(segment.to_string())
                        .or_insert_with(Node::dir);
                    prefix = prefix.child(segment);
                }
                Node::File { .. } => {
                    return Err(Error::NotADirectory(prefix.as_str().to_string()));
                }
            }
        }
        match node {
            Node::Directory { children } => Ok(children),
            Node::File { .. } => Err(Error::NotADirectory(prefix.as_str().to_string())),
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::path::resolve;
    use pretty_assertions::assert_eq;

    fn p(s: &str) -> VPath {
        VPath::new(s)
    }

    #[test]
    fn test_write_then_lookup() {
        let mut store = MemoryStore::new();
        store.write(&p("/notes.txt"), "hi").unwrap();
        match store.lookup(&p("/notes.txt")) {
            Some(Node::File { content, size, .. }) => {
                assert_eq!(content, "hi");
                assert_eq!(*size, 2);
            }
            other => panic!("expected file, got {other:?}"),
        }
    }

    #[test]
    fn test_write_creates_intermediates() {
        let mut store = MemoryStore::new();
        store.write(&p("/a/b/c.txt"), "hi").unwrap();
        assert_eq!(store.list(&p("/a/b")).unwrap(), vec!["c.txt"]);
        assert_eq!(store.list(&p("/a")).unwrap(), vec!["b"]);
    }

    #[test]
    fn test_write_through_file_fails() {
        let mut store = MemoryStore::new();
        store.write(&p("/a"), "file").unwrap();
        let err = store.write(&p("/a/b"), "x").unwrap_err();
        assert!(matches!(err, Error::NotADirectory(path) if path == "/a"));
    }

    #[test]
    fn test_lookup_through_file_is_absent() {
        let mut store = MemoryStore::new();
        store.write(&p("/a"), "file").unwrap();
        assert!(store.lookup(&p("/a/b")).is_none());
        assert!(!store.exists(&p("/a/b")));
    }

    #[test]
    fn test_mkdir_idempotent_for_directories() {
        let mut store = MemoryStore::new();
        store.mkdir(&p("/a/b")).unwrap();
        store.mkdir(&p("/a/b")).unwrap();
        assert!(store.lookup(&p("/a/b")).unwrap().is_dir());
    }

    #[test]
    fn test_mkdir_over_file_fails() {
        let mut store = MemoryStore::new();
        store.write(&p("/a"), "file").unwrap();
        let err = store.mkdir(&p("/a")).unwrap_err();
        assert!(matches!(err, Error::AlreadyExists(path) if path == "/a"));
    }

    #[test]
    fn test_remove_is_recursive() {
        let mut store = MemoryStore::new();
        store.write(&p("/dir/sub/leaf.txt"), "x").unwrap();
        store.write(&p("/dir/top.txt"), "y").unwrap();
        store.remove(&p("/dir"));
        assert!(!store.exists(&p("/dir")));
        assert!(!store.exists(&p("/dir/sub")));
        assert!(!store.exists(&p("/dir/sub/leaf.txt")));
        assert!(!store.exists(&p("/dir/top.txt")));
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut store = MemoryStore::new();
        store.remove(&p("/no/such/thing"));
        assert!(store.exists(&VPath::root()));
    }

    #[test]
    fn test_list_sorted() {
        let mut store = MemoryStore::new();
        store.write(&p("/d/zeta"), "").unwrap();
        store.write(&p("/d/alpha"), "").unwrap();
        assert_eq!(store.list(&p("/d")).unwrap(), vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_list_errors() {
        let mut store = MemoryStore::new();
        store.write(&p("/f"), "x").unwrap();
        assert!(matches!(
            store.list(&p("/f")).unwrap_err(),
            Error::NotADirectory(_)
        ));
        assert!(matches!(
            store.list(&p("/missing")).unwrap_err(),
            Error::NoSuchEntry(_)
        ));
    }

    #[test]
    fn test_stat_file_and_directory() {
        let mut store = MemoryStore::new();
        store.write(&p("/d/file.txt"), "abcde").unwrap();
        let file = store.stat(&p("/d/file.txt")).unwrap();
        assert_eq!(file.kind, NodeKind::File);
        assert_eq!(file.size, 5);
        let dir = store.stat(&p("/d")).unwrap();
        assert_eq!(dir.kind, NodeKind::Directory);
        assert_eq!(dir.size, 1);
    }

    #[test]
    fn test_detach_and_attach_moves_subtree() {
        let mut store = MemoryStore::new();
        store.write(&p("/src/a.txt"), "a").unwrap();
        let node = store.detach(&p("/src")).unwrap();
        store.attach(&p("/dest"), node).unwrap();
        assert!(!store.exists(&p("/src")));
        assert_eq!(store.read(&p("/dest/a.txt")).unwrap(), "a");
    }

    #[test]
    fn test_overwrite_refreshes_size() {
        let mut store = MemoryStore::new();
        store.write(&p("/f"), "first").unwrap();
        store.write(&p("/f"), "second!").unwrap();
        assert_eq!(store.stat(&p("/f")).unwrap().size, 7);
    }

    #[test]
    fn test_node_info_json_shape() {
        let mut store = MemoryStore::new();
        store.write(&p("/d/file.txt"), "abcde").unwrap();
        let json = serde_json::to_value(store.stat(&p("/d/file.txt")).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"path": "/d/file.txt", "type": "file", "size": 5})
        );
    }

    #[test]
    fn test_resolved_paths_round_trip() {
        let mut store = MemoryStore::new();
        let cwd = VPath::new("/home/user");
        store.write(&resolve("notes/./today.txt", &cwd), "x").unwrap();
        assert!(store.exists(&p("/home/user/notes/today.txt")));
    }
}
