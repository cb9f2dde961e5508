/// Everything the window can ask the session to do. Widgets push these while
/// drawing and the app applies them once the frame is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    LoadImages,
    CropAll,
    SaveResults,
    SelectImage(usize),
}
