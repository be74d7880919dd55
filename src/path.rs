//! Principal-prefixed path names
//!
//! Every path served by this crate starts with a principal segment
//! (an owner identity such as `a@x.com`) followed by a relative path
//! under that principal's root.

use crate::error::PathError;

/// A parsed path: owning principal plus the relative path under their root.
///
/// The relative part is stored cleaned (no `.`, `..` or empty segments)
/// and without a leading slash; the principal's root is the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathName {
    principal: String,
    relative: String,
}

impl PathName {
    /// Parse a slash-separated name into principal and relative parts.
    pub fn parse(name: &str) -> Result<Self, PathError> {
        let name = name.trim_matches('/');
        if name.is_empty() {
            return Err(PathError::Empty);
        }

        let (principal, rest) = match name.split_once('/') {
            Some((principal, rest)) => (principal, rest),
            None => (name, ""),
        };

        if !principal.contains('@') {
            return Err(PathError::MissingPrincipal(principal.to_string()));
        }

        Ok(Self {
            principal: principal.to_string(),
            relative: clean(rest),
        })
    }

    pub fn principal(&self) -> &str {
        &self.principal
    }

    /// Relative path under the principal's root; empty at the root itself.
    pub fn relative(&self) -> &str {
        &self.relative
    }

    pub fn is_root(&self) -> bool {
        self.relative.is_empty()
    }

    /// The enclosing directory, or `None` at the principal's root.
    pub fn parent(&self) -> Option<PathName> {
        parent_of(&self.relative).map(|rel| PathName {
            principal: self.principal.clone(),
            relative: rel.to_string(),
        })
    }

    /// Full protocol name: principal + "/" + relative path.
    pub fn full(&self) -> String {
        format!("{}/{}", self.principal, self.relative)
    }
}

/// Lexically normalize a relative path: drops empty and `.` segments and
/// resolves `..` without ever climbing above the (implicit) root.
pub fn clean(name: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in name.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            segment => segments.push(segment),
        }
    }
    segments.join("/")
}

/// Parent of a cleaned relative path; `None` once the root is reached.
pub fn parent_of(relative: &str) -> Option<&str> {
    if relative.is_empty() {
        return None;
    }
    match relative.rfind('/') {
        Some(split) => Some(&relative[..split]),
        None => Some(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_resolves_traversal() {
        assert_eq!(clean("toto"), "toto");
        assert_eq!(clean("a/toto"), "a/toto");
        assert_eq!(clean("../b/toto"), "b/toto");
        assert_eq!(clean("../b/../../../../toto"), "toto");
        assert_eq!(clean("a//b/./c"), "a/b/c");
        assert_eq!(clean(""), "");
        assert_eq!(clean("../.."), "");
    }

    #[test]
    fn test_parse_file_path() {
        let path = PathName::parse("a@x.com/docs/report.bin").unwrap();
        assert_eq!(path.principal(), "a@x.com");
        assert_eq!(path.relative(), "docs/report.bin");
        assert!(!path.is_root());
        assert_eq!(path.full(), "a@x.com/docs/report.bin");
    }

    #[test]
    fn test_parse_root() {
        for name in ["a@x.com", "a@x.com/"] {
            let path = PathName::parse(name).unwrap();
            assert_eq!(path.principal(), "a@x.com");
            assert_eq!(path.relative(), "");
            assert!(path.is_root());
            assert_eq!(path.full(), "a@x.com/");
        }
    }

    #[test]
    fn test_parse_cleans_relative_part() {
        let path = PathName::parse("a@x.com/docs/../secret/./file").unwrap();
        assert_eq!(path.relative(), "secret/file");
    }

    #[test]
    fn test_parse_rejects_bad_names() {
        assert!(matches!(PathName::parse(""), Err(PathError::Empty)));
        assert!(matches!(PathName::parse("/"), Err(PathError::Empty)));
        assert!(matches!(
            PathName::parse("nouser/docs"),
            Err(PathError::MissingPrincipal(_))
        ));
    }

    #[test]
    fn test_parent_chain() {
        let path = PathName::parse("a@x.com/a/b/c").unwrap();
        let parent = path.parent().unwrap();
        assert_eq!(parent.relative(), "a/b");
        let grandparent = parent.parent().unwrap();
        assert_eq!(grandparent.relative(), "a");
        let root = grandparent.parent().unwrap();
        assert!(root.is_root());
        assert!(root.parent().is_none());
    }

    #[test]
    fn test_parent_of() {
        assert_eq!(parent_of("a/b/c"), Some("a/b"));
        assert_eq!(parent_of("a"), Some(""));
        assert_eq!(parent_of(""), None);
    }
}
