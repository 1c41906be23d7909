//! Path resolution and normalization
//!
//! Paths in the virtual filesystem are plain strings with `/` separators; the
//! resolver turns whatever the user typed into a normalized absolute
//! [`VPath`]. Resolution never fails - it only produces a (possibly
//! nonexistent) path for the store to judge.

use std::fmt;

/// A normalized absolute path in the virtual filesystem.
///
/// Invariants: starts with `/`, no empty segments, no `.`/`..` segments, no
/// trailing separator except the root itself. Two paths are equal iff their
/// strings are equal (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VPath(String);

impl VPath {
    /// The root directory `/`.
    pub fn root() -> Self {
        VPath("/".to_string())
    }

    /// Normalize `raw` as an absolute path, regardless of leading separator.
    pub fn new(raw: &str) -> Self {
        VPath(normalize(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Path segments, root-first. Empty for the root itself.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// Parent path. The root's parent is the root.
    pub fn parent(&self) -> VPath {
        match self.0.rfind('/') {
            Some(0) | None => VPath::root(),
            Some(idx) => VPath(self.0[..idx].to_string()),
        }
    }

    /// Final segment, `None` for the root.
    pub fn file_name(&self) -> Option<&str> {
        self.segments().last()
    }

    /// Child path under this one. `name` must be a single clean segment.
    pub fn child(&self, name: &str) -> VPath {
        if self.is_root() {
            VPath(format!("/{name}"))
        } else {
            VPath(format!("{}/{name}", self.0))
        }
    }
}

impl fmt::Display for VPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolve a user-supplied path against the current working directory.
///
/// Empty input and `.` are the cwd unchanged; absolute input normalizes on
/// its own; relative input is joined onto the cwd first. `..` segments climb
/// toward the root and stop there.
pub fn resolve(raw: &str, cwd: &VPath) -> VPath {
    if raw.is_empty() || raw == "." {
        return cwd.clone();
    }
    if raw.starts_with('/') {
        VPath(normalize(raw))
    } else {
        VPath(normalize(&format!("{}/{}", cwd.as_str(), raw)))
    }
}

/// Collapse repeated separators, strip the trailing separator (root
/// excepted), and resolve `.`/`..` segments. Idempotent.
fn normalize(input: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in input.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}
