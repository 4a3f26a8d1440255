pub mod inspect_view;
pub mod outline_view;

pub use inspect_view::InspectView;
pub use outline_view::{OutlineActions, OutlineView};
