pub mod editor;
pub mod pending;
pub mod types;

pub use editor::{ApprovalBoard, ApprovalEditor, ApprovalRow, EditorState};
pub use pending::PendingEdits;
pub use types::{ApprovalEntry, ApprovalStatus, SubmitPolicy};
