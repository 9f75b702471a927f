use crate::{FileInfo, ToastId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked a file with the chooser.
    FileChosen(FileInfo),
    /// The chooser reported no file (selection cancelled or input emptied).
    FileSelectionCleared,
    /// A drag entered or moved over the drop zone.
    DragEntered,
    /// The drag left the drop zone without dropping.
    DragLeft,
    /// Files dropped on the drop zone, in drop order.
    FilesDropped(Vec<FileInfo>),
    /// User submitted the analyze form; carries the textarea value at submit time.
    SubmitAttempted { description: String },
    /// User clicked the theme toggle.
    ThemeToggled,
    /// The dismiss timer of one toast fired.
    ToastElapsed(ToastId),
    /// Fallback for placeholder wiring.
    NoOp,
}
