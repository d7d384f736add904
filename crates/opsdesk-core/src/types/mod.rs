//! Shared value types.

pub mod filter;
pub mod pagination;

pub use filter::DateRange;
pub use pagination::{PageRequest, PageResponse};
