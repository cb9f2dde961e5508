pub mod selection;
pub mod transform;

pub use selection::{EDGE_MARGIN, SCROLL_UNIT, SelectionState, SelectionTracker, edge_scroll};
pub use transform::ViewTransform;
