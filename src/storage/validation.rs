//! Path confinement
//!
//! Resolves client-supplied relative names to absolute paths that can
//! never escape the served root.

use std::path::{Path, PathBuf};

use crate::path;

/// Join `name` under `root` after lexically cleaning it; `..` segments
/// collapse against the name itself, never against the root.
pub fn confine(root: &Path, name: &str) -> PathBuf {
    let cleaned = path::clean(name);
    if cleaned.is_empty() {
        root.to_path_buf()
    } else {
        root.join(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confine_plain_names() {
        let root = Path::new("a");
        assert_eq!(confine(root, "toto"), PathBuf::from("a/toto"));
        assert_eq!(confine(root, "a/toto"), PathBuf::from("a/a/toto"));
    }

    #[test]
    fn test_confine_traversal_attempts() {
        let root = Path::new("a");
        assert_eq!(confine(root, "../b/toto"), PathBuf::from("a/b/toto"));
        assert_eq!(
            confine(root, "../b/../../../../toto"),
            PathBuf::from("a/toto")
        );
        assert_eq!(confine(root, "../../.."), PathBuf::from("a"));
    }

    #[test]
    fn test_confine_stays_under_root() {
        let root = Path::new("/srv/files");
        for name in ["..", "../..", "x/../../etc/passwd", "/../../etc"] {
            let resolved = confine(root, name);
            assert!(resolved.starts_with(root), "{name} escaped to {resolved:?}");
        }
    }
}
