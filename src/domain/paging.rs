/// Listings shown per page, matching the browse grid.
pub const PAGE_SIZE: u32 = 12;

/// A bounded, ordered slice of the filtered listing set.
#[derive(Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based.
    pub page: u32,
    pub total_pages: u32,
}

/// Total page count for a filtered set. Never below 1, so an empty result
/// still renders as "page 1 of 1".
pub fn total_pages(total_count: u32) -> u32 {
    total_count.div_ceil(PAGE_SIZE).max(1)
}

/// Page numbers shown in the pagination strip: a window of at most 5,
/// centered on the current page where possible. The "1 ..." and "... N"
/// shortcuts around the window are the template's job, not this function's.
pub fn visible_pages(current_page: u32, total_pages: u32) -> Vec<u32> {
    let range = |from: u32, to: u32| (from..=to).collect();

    if total_pages <= 5 {
        range(1, total_pages)
    } else if current_page <= 3 {
        range(1, 5)
    } else if current_page >= total_pages - 2 {
        range(total_pages - 4, total_pages)
    } else {
        range(current_page - 2, current_page + 2)
    }
}

/// Percentage drop from the first-round price to the second-round price,
/// rounded to the nearest whole percent. Zero or negative means no drop;
/// callers hide those. A zero original price yields 0 rather than a
/// division fault.
pub fn discount_percent(original: f64, current: f64) -> i64 {
    if original == 0.0 {
        return 0;
    }
    (((original - current) / original) * 100.0).round() as i64
}
