//! UI Components
//!
//! Leptos components mounted into the server-rendered pages.

mod feedback_view;
mod recent_uploads;
mod upload_panel;
mod shortlist_panel;

pub use feedback_view::FeedbackView;
pub use recent_uploads::RecentUploadsList;
pub use upload_panel::UploadPanel;
pub use shortlist_panel::ShortlistPanel;
