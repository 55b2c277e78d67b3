use serde::Serialize;

use crate::errors::{PaginationError, PaginationResult};

/// Computes the consecutive run of page numbers surrounding `current_page`,
/// clamped to `[1, total_pages]`.
fn page_window(total_pages: usize, current_page: usize, mid_size: usize) -> Vec<usize> {
    if total_pages == 0 {
        return vec![];
    }

    let start = current_page.saturating_sub(mid_size).max(1);
    let end = current_page.saturating_add(mid_size).min(total_pages);

    (start..=end).collect()
}

/// A single page of a larger ordered collection together with the facts
/// needed to render paging controls around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paginated<T> {
    pub current_page: usize,
    pub total_pages: usize,
    pub page_window: Vec<usize>,
    pub has_previous_page: bool,
    pub has_next_page: bool,
    pub items: Vec<T>,
}

/// Splits `items` into pages of `items_per_page` and returns the page at
/// `current_page` (1-indexed) plus a window of up to `mid_size` neighboring
/// page numbers on each side.
///
/// An empty collection succeeds with `total_pages == 0` and empty `items`
/// and `page_window`; for a non-empty collection a `current_page` past the
/// last page is rejected with [`PaginationError::PageOutOfRange`].
pub fn paginate<T: Clone>(
    items: &[T],
    current_page: usize,
    items_per_page: usize,
    mid_size: usize,
) -> PaginationResult<Paginated<T>> {
    if current_page == 0 {
        return Err(PaginationError::InvalidArgument("current_page"));
    }
    if items_per_page == 0 {
        return Err(PaginationError::InvalidArgument("items_per_page"));
    }

    let total_pages = items.len().div_ceil(items_per_page);

    if current_page > total_pages && total_pages > 0 {
        return Err(PaginationError::PageOutOfRange {
            current_page,
            total_pages,
        });
    }

    // current_page <= total_pages here, so the slice bounds stay within the
    // collection whenever it is non-empty.
    let page_items = if total_pages == 0 {
        Vec::new()
    } else {
        let start_index = (current_page - 1) * items_per_page;
        let end_index = (start_index + items_per_page).min(items.len());
        items[start_index..end_index].to_vec()
    };

    Ok(Paginated {
        current_page,
        total_pages,
        page_window: page_window(total_pages, current_page, mid_size),
        has_previous_page: current_page > 1,
        has_next_page: current_page < total_pages,
        items: page_items,
    })
}
