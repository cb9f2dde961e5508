use crate::interaction::ViewTransform;
use crate::model::SelectionRect;

/// What the canvas should show for the active image right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderFrame {
    pub image_index: usize,
    pub transform: ViewTransform,
    pub selection: Option<SelectionRect>,
}
