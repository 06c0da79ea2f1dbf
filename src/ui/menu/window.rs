/// The slice of the item list currently on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    /// Number of visible rows, never more than the item count.
    pub rows: usize,
    /// Index of the topmost visible item.
    pub start: usize,
}

impl Window {
    /// Fit as many rows of `font_height` as `height` allows and centre the
    /// cursor in them, keeping the window inside the list.
    pub fn compute(height: i32, font_height: u32, len: usize, selected: usize) -> Self {
        let fit = match font_height {
            0 => 0,
            h => (height.max(0) as u32 / h) as usize,
        };
        let rows = fit.min(len);
        let start = selected.saturating_sub(rows / 2).min(len - rows);
        Self { rows, start }
    }

    /// Index one past the bottom visible item.
    pub fn end(&self) -> usize {
        self.start + self.rows
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end()
    }

    /// More items exist above the window.
    pub fn has_above(&self) -> bool {
        self.start > 0
    }

    /// More items exist below the window.
    pub fn has_below(&self, len: usize) -> bool {
        self.end() < len
    }
}
