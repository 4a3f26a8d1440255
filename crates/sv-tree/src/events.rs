use sv_core::{PresId, TreePath};

/// Change notifications for rendering collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutlineEvent {
    /// A presentation node was created under `parent` at `position`
    /// (`parent` is `None` for the root).
    Attached {
        node: PresId,
        parent: Option<PresId>,
        path: TreePath,
        position: usize,
    },
    /// A presentation node was discarded.
    Detached { node: PresId, path: TreePath },
    /// A structure panel was populated.
    StructureShown { node: PresId },
    /// A structure panel was emptied.
    StructureHidden { node: PresId },
    /// Every presentation node was discarded (new document).
    Cleared,
}
