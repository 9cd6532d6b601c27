//! Link directory engine
//!
//! Pure data and pure functions: the record model, filter/sort criteria, the
//! owned store, the derive pipeline and the display projection. Nothing in
//! here performs I/O.

pub mod criteria;
pub mod engine;
pub mod model;
pub mod store;
pub mod view;

pub use criteria::{FilterCriteria, FilterUpdate, SortCriteria, SortDirection, SortField};
pub use engine::derive;
pub use model::LinkRecord;
pub use store::DirectoryStore;
pub use view::{DirectoryView, HeaderView, RowView};
