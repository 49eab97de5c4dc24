//! Fixed-size pagination over filtered results.
//!
//! # Responsibility
//! - Slice a sequence into 1-indexed pages and compute the page count.
//! - Coerce raw page input to a usable page number.
//!
//! # Invariants
//! - `total_pages` is 0 exactly when the sequence is empty.
//! - Requesting a page past the end yields an empty slice, never an error.
//! - No upper bound is enforced on the requested page.

/// Slices `items` into the requested 1-indexed page.
///
/// Returns the page slice and the total page count,
/// `(len + page_size - 1) / page_size`. `page` must already be normalized
/// to >= 1 (see [`parse_page`]).
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> (&[T], usize) {
    let total_pages = (items.len() + page_size - 1) / page_size;
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return (&[], total_pages);
    }
    let end = (start + page_size).min(items.len());
    (&items[start..end], total_pages)
}

/// Coerces raw page input to a 1-indexed page number.
///
/// Absent, unparsable, or non-positive input defaults to page 1; malformed
/// numeric input is never reported back to the caller.
pub fn parse_page(raw: Option<&str>) -> usize {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|page| *page > 0)
        .map(|page| page as usize)
        .unwrap_or(1)
}
