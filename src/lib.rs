//! Pure pagination for ordered in-memory collections.
//!
//! Given the full collection and paging parameters, [`paginate`] returns the
//! slice of items belonging to the requested page together with the facts a
//! caller needs to render paging controls: total page count, a bounded
//! window of nearby page numbers, and previous/next availability. Callers
//! supply an already-ordered collection; this crate never fetches, sorts, or
//! renders anything.

pub mod errors;
pub mod pagination;

pub use errors::{PaginationError, PaginationResult};
pub use pagination::{Paginated, paginate};
