//! Page-number window for the pagination bar.

/// One slot in the rendered pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Page numbers to render for `current` of `total` pages (both 1-based).
///
/// Always includes page 1 and page `total`, plus every page within ±2 of the
/// current one; a single ellipsis marks each gap. A single page (or none)
/// renders no controls at all. An out-of-range `current` is clamped.
pub fn page_window(current: u32, total: u32) -> Vec<PageItem> {
    if total <= 1 {
        return Vec::new();
    }
    let current = current.clamp(1, total);

    let mut out = Vec::new();
    let mut last = 0u32;
    for n in 1..=total {
        let near_current = n + 2 >= current && n <= current.saturating_add(2);
        if n != 1 && n != total && !near_current {
            continue;
        }
        if last != 0 && n - last > 1 {
            out.push(PageItem::Ellipsis);
        }
        out.push(PageItem::Page(n));
        last = n;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    #[test]
    fn window_in_the_middle() {
        assert_eq!(
            page_window(7, 20),
            vec![
                Page(1),
                Ellipsis,
                Page(5),
                Page(6),
                Page(7),
                Page(8),
                Page(9),
                Ellipsis,
                Page(20)
            ]
        );
    }

    #[test]
    fn single_page_renders_nothing() {
        assert_eq!(page_window(1, 1), Vec::new());
        assert_eq!(page_window(1, 0), Vec::new());
    }

    #[test]
    fn window_at_the_edges() {
        assert_eq!(
            page_window(1, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
        assert_eq!(
            page_window(10, 10),
            vec![Page(1), Ellipsis, Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn no_ellipsis_for_adjacent_gaps() {
        // 1..=6 with current 3: every page is within reach, no gaps.
        assert_eq!(
            page_window(3, 6),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6)]
        );
    }

    #[test]
    fn out_of_range_current_clamps() {
        assert_eq!(
            page_window(99, 3),
            vec![Page(1), Page(2), Page(3)]
        );
    }
}
