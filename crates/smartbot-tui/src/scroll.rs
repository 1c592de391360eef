//! Scroll position of the message list.
//!
//! In follow mode the list stays pinned to the newest message. Scrolling up
//! leaves follow mode; reaching the bottom again or any change to the
//! message list restores it.

use std::cell::Cell;

/// Lines scrolled per mouse wheel tick.
pub const SCROLL_SPEED: usize = 3;

/// Scroll state for the message list.
///
/// The renderer records the largest valid offset on every draw, so scroll
/// commands between draws clamp against what is actually on screen.
#[derive(Debug)]
pub struct TranscriptScroll {
    offset: usize,
    follow: bool,
    max_offset: Cell<usize>,
    viewport: Cell<usize>,
}

impl Default for TranscriptScroll {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptScroll {
    /// Create a scroll state in follow mode.
    pub fn new() -> Self {
        Self {
            offset: 0,
            follow: true,
            max_offset: Cell::new(0),
            viewport: Cell::new(1),
        }
    }

    /// Check if follow mode is enabled.
    pub fn is_following(&self) -> bool {
        self.follow
    }

    /// Pin the view to the newest message.
    pub fn follow_latest(&mut self) {
        self.follow = true;
        self.offset = self.max_offset.get();
    }

    /// Scroll towards older messages.
    pub fn scroll_up(&mut self, lines: usize) {
        if self.follow {
            self.offset = self.max_offset.get();
            self.follow = false;
        }
        self.offset = self.offset.saturating_sub(lines);
    }

    /// Scroll towards newer messages. Re-enters follow mode at the bottom.
    pub fn scroll_down(&mut self, lines: usize) {
        if self.follow {
            return;
        }
        let max = self.max_offset.get();
        self.offset = (self.offset + lines).min(max);
        if self.offset == max {
            self.follow = true;
        }
    }

    /// Scroll up by one viewport.
    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport.get().max(1));
    }

    /// Scroll down by one viewport.
    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport.get().max(1));
    }

    /// Offset of the first visible line for content of `total_lines` shown
    /// in `viewport` lines. Records both for later scroll commands.
    pub fn resolve(&self, total_lines: usize, viewport: usize) -> usize {
        let max = total_lines.saturating_sub(viewport);
        self.max_offset.set(max);
        self.viewport.set(viewport);
        if self.follow {
            max
        } else {
            self.offset.min(max)
        }
    }
}
