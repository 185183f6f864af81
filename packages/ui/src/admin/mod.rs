//! Admin page components for question paper management.

mod admin_page;
mod exam_badge;
mod paper_lister;
mod paper_row;

pub use admin_page::AdminPage;
pub use exam_badge::ExamBadge;
pub use paper_lister::PaperLister;
pub use paper_row::PaperRow;
