//! Host registry.
//!
//! Keeps the ordered, deduplicated list of scan targets and its flat-file
//! persistence.

mod list;

pub use list::HostsList;
