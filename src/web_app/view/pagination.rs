// web_app/view/pagination.rs - Pagination controls as data
//
// A window of at most five page links centered on the current page,
// clamped to the available pages, framed by Previous/Next controls.

/// Most page-number links shown at once
pub const MAX_PAGE_LINKS: u32 = 5;

/// A numbered page link
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageLink {
    pub number: u32,
    pub active: bool,
}

/// Previous or Next control
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub target: u32,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginationView {
    pub current: u32,
    pub total_pages: u32,
    pub previous: NavLink,
    pub pages: Vec<PageLink>,
    pub next: NavLink,
}

impl PaginationView {
    /// Controls for `current` out of `total_pages`; `None` for a single page
    pub fn build(current: u32, total_pages: u32) -> Option<Self> {
        if total_pages <= 1 {
            return None;
        }

        let (start, end) = page_window(current, total_pages);
        let pages = (start..=end)
            .map(|number| PageLink {
                number,
                active: number == current,
            })
            .collect();

        Some(Self {
            current,
            total_pages,
            previous: NavLink {
                target: current.saturating_sub(1),
                disabled: current <= 1,
            },
            pages,
            next: NavLink {
                target: current.saturating_add(1),
                disabled: current >= total_pages,
            },
        })
    }

    /// Whether clicking a link to `page` should load anything
    pub fn accepts(&self, page: u32) -> bool {
        page >= 1 && page <= self.total_pages && page != self.current
    }
}

/// First and last page number of the visible window, inclusive
pub fn page_window(current: u32, total_pages: u32) -> (u32, u32) {
    let span = MAX_PAGE_LINKS - 1;
    let total = total_pages.max(1);
    let current = current.clamp(1, total);
    let mut start = current.saturating_sub(2).max(1);
    let end = start.saturating_add(span).min(total);
    if end - start < span {
        start = end.saturating_sub(span).max(1);
    }
    (start, end)
}
