//! Scroll position of a screen's result area.

use std::cell::Cell;

/// Offset into a result listing, in rendered rows from the top.
///
/// The renderer records the listing height and visible rows after every
/// draw; key handlers clamp against that, the same way the offset is
/// clamped at render time.
#[derive(Debug, Clone, Default)]
pub struct ResultScroll {
    offset: u16,
    /// Rows the listing took on the last draw
    total_rows: Cell<u16>,
    /// Rows that fit in the result area on the last draw
    visible_rows: Cell<u16>,
}

impl ResultScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Largest offset that still fills the viewport.
    pub fn max_offset(&self) -> u16 {
        self.total_rows.get().saturating_sub(self.visible_rows.get())
    }

    /// Effective offset, clamped to the last recorded viewport.
    pub fn offset(&self) -> u16 {
        self.offset.min(self.max_offset())
    }

    pub fn total_rows(&self) -> u16 {
        self.total_rows.get()
    }

    pub fn visible_rows(&self) -> u16 {
        self.visible_rows.get()
    }

    /// Called by the renderer with the listing's size on this draw.
    pub fn record_viewport(&self, total_rows: u16, visible_rows: u16) {
        self.total_rows.set(total_rows);
        self.visible_rows.set(visible_rows);
    }

    /// One page is the visible height minus one row of overlap.
    pub fn page_size(&self) -> u16 {
        self.visible_rows.get().saturating_sub(1).max(1)
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.offset = self.offset().saturating_sub(rows);
    }

    pub fn scroll_down(&mut self, rows: u16) {
        self.offset = self.offset().saturating_add(rows).min(self.max_offset());
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.page_size());
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.page_size());
    }

    pub fn to_top(&mut self) {
        self.offset = 0;
    }

    pub fn to_bottom(&mut self) {
        self.offset = self.max_offset();
    }
}
