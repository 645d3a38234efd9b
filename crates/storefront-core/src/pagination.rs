//! Pagination
//!
//! Page math for the testimonials list and the pager control model.

/// Upper bound on the page count a listing may report
pub const MAX_PAGES: u32 = 10_000;

/// Number of pages needed to show `total` entries, `limit` per page
pub fn total_pages(total: u64, limit: u32) -> u32 {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(limit as u64).min(u32::MAX as u64) as u32
}

/// Collection offset of the first row on `page` (1-based)
pub fn page_offset(page: u32, limit: u32) -> u64 {
    (page.max(1) as u64 - 1) * limit as u64
}

/// One clickable control of the pager, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PagerControl {
    Previous { disabled: bool },
    Page { number: u32, active: bool },
    Next { disabled: bool },
}

/// What the user clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerAction {
    Previous,
    Next,
    Page(u32),
}

/// Pager state for the page currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub current: u32,
    pub total_pages: u32,
}

impl Pager {
    pub fn new(current: u32, total: u64, limit: u32) -> Self {
        Self {
            current: current.max(1),
            total_pages: total_pages(total, limit),
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total_pages
    }

    /// Controls in display order: previous, one per page, next
    pub fn controls(&self) -> Vec<PagerControl> {
        let mut controls = Vec::with_capacity(self.total_pages.min(MAX_PAGES) as usize + 2);
        controls.push(PagerControl::Previous { disabled: !self.has_previous() });
        controls.extend((1..=self.total_pages).map(|number| PagerControl::Page {
            number,
            active: number == self.current,
        }));
        controls.push(PagerControl::Next { disabled: !self.has_next() });
        controls
    }

    /// Page to load for `action`, or `None` when the control is inert
    pub fn apply(&self, action: PagerAction) -> Option<u32> {
        match action {
            PagerAction::Previous => self.has_previous().then(|| self.current - 1),
            PagerAction::Next => self.has_next().then(|| self.current + 1),
            PagerAction::Page(number) => (1..=self.total_pages).contains(&number).then_some(number),
        }
    }
}
