use std::ops::Range;

/// Inclusive `[left, right]` index range of the visible tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowState {
    pub left: usize,
    pub right: usize,
}

impl WindowState {
    pub fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }

    /// Number of indices spanned, ignoring the sequence length.
    /// An inverted state (`left > right`) counts as a single index.
    pub fn width(&self) -> usize {
        self.right.saturating_sub(self.left) + 1
    }
}

/// Fixed-width sliding window with clamped navigation.
///
/// The right edge never drops below `size - 1`, so on sequences shorter than
/// the window the state stays wider than the data and rendering truncates it.
#[derive(Debug, Clone)]
pub struct CarouselWindow {
    size: usize,
    state: WindowState,
}

impl CarouselWindow {
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        Self {
            size,
            state: WindowState::new(0, size - 1),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    pub fn step_back(&mut self) {
        let next = WindowState::new(
            self.state.left.saturating_sub(1),
            self.state.right.saturating_sub(1).max(self.size - 1),
        );
        tracing::debug!(from = ?self.state, to = ?next, "Carousel step back");
        self.state = next;
    }

    pub fn step_forward(&mut self, len: usize) {
        let next = WindowState::new(
            (self.state.left + 1).min(len.saturating_sub(self.size)),
            (self.state.right + 1)
                .min(len.saturating_sub(1))
                .max(self.size - 1),
        );
        tracing::debug!(from = ?self.state, to = ?next, len, "Carousel step forward");
        self.state = next;
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.state.left <= index && index <= self.state.right
    }

    pub fn show_back(&self) -> bool {
        self.state.left > 0
    }

    pub fn show_forward(&self, len: usize) -> bool {
        self.state.right + 1 < len
    }

    /// Indices that actually render for a sequence of `len` items
    pub fn visible_range(&self, len: usize) -> Range<usize> {
        let end = (self.state.right + 1).min(len);
        self.state.left.min(end)..end
    }

    /// Realign a window left stale by a shrunken sequence
    pub fn clamp_to_len(&mut self, len: usize) {
        let next = if len >= self.size {
            let left = self.state.left.min(len - self.size);
            WindowState::new(left, left + self.size - 1)
        } else {
            WindowState::new(0, self.size - 1)
        };
        if next != self.state {
            tracing::debug!(from = ?self.state, to = ?next, len, "Carousel window re-clamped");
            self.state = next;
        }
    }
}
