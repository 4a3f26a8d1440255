//! Positional paths through the materialized outline.
//!
//! A path lists, from the root down, the position of each node among its
//! parent's *sorted* children. The root has the empty path. Paths order
//! lexicographically, so every descendant of a path sorts directly after it.

use core::fmt;
use core::str::FromStr;

use crate::error::SvError;

#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TreePath(Vec<u32>);

impl TreePath {
    /// The root path.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn from_positions(positions: impl IntoIterator<Item = u32>) -> Self {
        Self(positions.into_iter().collect())
    }

    /// Path of the `position`-th child of this path.
    pub fn child(&self, position: u32) -> Self {
        let mut positions = Vec::with_capacity(self.0.len() + 1);
        positions.extend_from_slice(&self.0);
        positions.push(position);
        Self(positions)
    }

    /// Path of the parent, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, head) = self.0.split_last()?;
        Some(Self(head.to_vec()))
    }

    pub fn positions(&self) -> &[u32] {
        &self.0
    }

    /// Number of edges from the root.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// True when `self` lies strictly below `ancestor`.
    pub fn is_descendant_of(&self, ancestor: &TreePath) -> bool {
        self.0.len() > ancestor.0.len() && self.0.starts_with(&ancestor.0)
    }

    /// Every proper ancestor, root first.
    pub fn ancestors(&self) -> impl Iterator<Item = TreePath> + '_ {
        (0..self.0.len()).map(|len| Self(self.0[..len].to_vec()))
    }
}

/// Rendered as `root/0/3`.
impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("root")?;
        for position in &self.0 {
            write!(f, "/{}", position)?;
        }
        Ok(())
    }
}

impl fmt::Debug for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TreePath({})", self)
    }
}

/// Accepts `root/0/3`, `0/3`, `/0/3`, `root` and the empty string.
impl FromStr for TreePath {
    type Err = SvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let rest = trimmed.strip_prefix("root").unwrap_or(trimmed);
        rest.split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                segment.parse::<u32>().map_err(|_| SvError::InvalidArg {
                    what: "path segments must be non-negative integers",
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse_agree() {
        let path = TreePath::root().child(0).child(3);
        assert_eq!(path.to_string(), "root/0/3");
        assert_eq!("root/0/3".parse::<TreePath>().unwrap(), path);
        assert_eq!("0/3".parse::<TreePath>().unwrap(), path);
        assert_eq!("".parse::<TreePath>().unwrap(), TreePath::root());
        assert!("root/x".parse::<TreePath>().is_err());
    }

    #[test]
    fn descendants_sort_after_ancestor() {
        let a = TreePath::from_positions([1]);
        let below = TreePath::from_positions([1, 0, 4]);
        let sibling = TreePath::from_positions([2]);
        assert!(a < below && below < sibling);
        assert!(below.is_descendant_of(&a));
        assert!(!a.is_descendant_of(&a));
        assert!(!sibling.is_descendant_of(&a));
    }

    #[test]
    fn ancestors_root_first() {
        let path = TreePath::from_positions([2, 5]);
        let ancestors: Vec<String> = path.ancestors().map(|p| p.to_string()).collect();
        assert_eq!(ancestors, vec!["root", "root/2"]);
        assert_eq!(path.parent(), Some(TreePath::from_positions([2])));
        assert_eq!(TreePath::root().parent(), None);
    }
}
