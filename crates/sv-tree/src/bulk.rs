//! Whole-outline operations built on single-node toggles.

use std::collections::VecDeque;

use sv_core::{PresId, SvError, SvResult, TreePath};
use tracing::debug;

use crate::outline::{Outline, Source};

impl Outline {
    /// Expand breadth-first until `budget` presentation nodes are attached.
    ///
    /// A node is only expanded when all of its children fit, so the outline
    /// never holds a partially hydrated level. Returns how many nodes were
    /// attached.
    pub fn expand_all(&mut self, source: &Source<'_>, budget: usize) -> SvResult<usize> {
        let mut queue: VecDeque<PresId> = self.root().into_iter().collect();
        let mut attached = 0;
        while let Some(id) = queue.pop_front() {
            let Some(node) = self.get(id) else { continue };
            if !node.has_children() {
                continue;
            }
            if !node.is_hydrated() {
                let incoming = source.graph.children(node.node()).len();
                if self.len() + incoming > budget {
                    debug!(budget, attached, "expand-all budget reached");
                    break;
                }
            }
            attached += self.expand(id, source)?;
            if let Some(node) = self.get(id) {
                queue.extend(node.children().iter().copied());
            }
        }
        Ok(attached)
    }

    /// Collapse everything below the root. The root ends up open, even if it
    /// was collapsed before, and every structure panel closes. Returns how
    /// many nodes were freed.
    pub fn collapse_all(&mut self, source: &Source<'_>) -> SvResult<usize> {
        let Some(root) = self.root() else {
            return Ok(0);
        };
        let children: Vec<PresId> = self
            .get(root)
            .map(|n| n.children().to_vec())
            .unwrap_or_default();
        let mut freed = 0;
        for &child in &children {
            freed += self.collapse(child)?;
            self.hide_structure(child)?;
        }
        self.hide_structure(root)?;
        self.expand(root, source)?;
        Ok(freed)
    }

    /// Expand every ancestor of `path` and return the node shown there.
    pub fn reveal(&mut self, path: &TreePath, source: &Source<'_>) -> SvResult<PresId> {
        for ancestor in path.ancestors() {
            let id = self.find(&ancestor).ok_or_else(|| not_found(&ancestor))?;
            self.expand(id, source)?;
        }
        self.find(path).ok_or_else(|| not_found(path))
    }
}

fn not_found(path: &TreePath) -> SvError {
    SvError::PathNotFound {
        path: path.to_string(),
    }
}
