use thiserror::Error;

/// Failures produced when paging parameters cannot yield a page.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    /// The named paging parameter is outside its valid domain.
    #[error("{0} must be greater than zero")]
    InvalidArgument(&'static str),

    /// Requested page lies past the end of a non-empty collection.
    #[error("page {current_page} is out of range: only {total_pages} pages available")]
    PageOutOfRange {
        current_page: usize,
        total_pages: usize,
    },
}

pub type PaginationResult<T> = Result<T, PaginationError>;
