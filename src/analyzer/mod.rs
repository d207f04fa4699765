pub mod classifier;
pub mod mark;
pub mod stats;
pub mod tickets;
pub mod view;

pub use classifier::{classify_rows, Classification};
pub use mark::extract_mark;
pub use stats::{compute_statistics, render_report, MarkCount, Statistics};
pub use tickets::{Ticket, COLUMN_LABELS};
pub use view::{derive_view, FilterState, MarkFilter, OperatorFilter, View};
