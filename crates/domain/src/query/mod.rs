//! Query engine: request parameters in, filtered/sorted/paginated players out.
//!
//! - `params` - string map into a typed [`PlayerQuery`] directive
//! - `predicate` - directive filters into a [`PlayerPredicate`]
//! - `executor` - predicate, order and window applied to a record scan

pub mod executor;
pub mod params;
pub mod predicate;

pub use params::{keys, PageWindow, PlayerFilter, PlayerOrder, PlayerQuery, DEFAULT_PAGE_SIZE};
pub use predicate::{Condition, PlayerPredicate};
