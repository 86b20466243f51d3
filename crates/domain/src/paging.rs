//! Position tracking for horizontally paged lists.
//!
//! Three event sources update the current page: touch gestures, resting scroll offsets reported
//! by the host list, and explicit jumps (e.g. a tapped dot indicator). A swipe moves at most one
//! page. A settled scroll offset always overrides the page derived from a gesture, as it reflects
//! what is actually visible.

use log::{debug, trace};

/// Minimal gesture distance in layout units that counts as a swipe instead of a tap.
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// Request for the host to scroll its view to the given page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollCommand {
    pub index: usize,
}

impl ScrollCommand {
    /// Scroll offset of the page, or `None` if `page_extent` is not a positive finite number.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn offset(self, page_extent: f64) -> Option<f64> {
        valid_extent(page_extent).then(|| self.index as f64 * page_extent)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PagedIndexController {
    page_count: usize,
    current_index: usize,
    pending_gesture: Option<f64>,
    swipe_threshold: f64,
}

impl PagedIndexController {
    #[must_use]
    pub fn new(page_count: usize) -> Self {
        Self::with_swipe_threshold(page_count, SWIPE_THRESHOLD)
    }

    /// Non-finite or negative thresholds fall back to [`SWIPE_THRESHOLD`].
    #[must_use]
    pub fn with_swipe_threshold(page_count: usize, swipe_threshold: f64) -> Self {
        Self {
            page_count,
            current_index: 0,
            pending_gesture: None,
            swipe_threshold: if swipe_threshold.is_finite() && swipe_threshold >= 0.0 {
                swipe_threshold
            } else {
                SWIPE_THRESHOLD
            },
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The current page, or `None` if there is nothing to render.
    #[must_use]
    pub fn current_page(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.current_index)
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.page_count == 0
    }

    #[must_use]
    pub fn pending_gesture(&self) -> Option<f64> {
        self.pending_gesture
    }

    #[must_use]
    pub fn swipe_threshold(&self) -> f64 {
        self.swipe_threshold
    }

    /// Starts tracking a touch. A restarted gesture replaces the previous start coordinate.
    pub fn on_gesture_start(&mut self, coordinate: f64) {
        if !coordinate.is_finite() {
            debug!("ignored gesture start at {coordinate}");
            return;
        }
        self.pending_gesture = Some(coordinate);
    }

    /// Returns the drag distance since the gesture start. The current index stays unchanged
    /// while dragging.
    #[must_use]
    pub fn on_gesture_move(&self, coordinate: f64) -> Option<f64> {
        let distance = self.pending_gesture? - coordinate;
        distance.is_finite().then_some(distance)
    }

    /// Finishes the pending gesture and moves at most one page. If `page_extent` is valid, the
    /// returned command snaps the host view to the resulting page.
    pub fn on_gesture_end(
        &mut self,
        end_coordinate: f64,
        page_extent: f64,
    ) -> Option<ScrollCommand> {
        let start = self.pending_gesture.take()?;
        let distance = start - end_coordinate;

        if !distance.is_finite() {
            debug!("ignored gesture end at {end_coordinate}");
            return None;
        }

        if distance.abs() >= self.swipe_threshold {
            let index = if distance > 0.0 {
                self.current_index.saturating_add(1)
            } else {
                self.current_index.saturating_sub(1)
            };
            self.set_index(index);
        }

        valid_extent(page_extent).then_some(ScrollCommand {
            index: self.current_index,
        })
    }

    /// Synchronizes the index with the resting scroll offset of the host view.
    pub fn on_scroll_settle(&mut self, offset: f64, page_extent: f64) {
        if !offset.is_finite() || !valid_extent(page_extent) {
            debug!("ignored scroll settle at {offset} with page extent {page_extent}");
            return;
        }

        let page = (offset / page_extent).round();

        if !page.is_finite() {
            debug!("ignored scroll settle at {offset} with page extent {page_extent}");
            return;
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = if page <= 0.0 { 0 } else { page as usize };
        self.set_index(index);
    }

    /// Moves to the given page immediately. The host is expected to scroll its view according to
    /// the returned command.
    pub fn jump_to(&mut self, index: usize) -> ScrollCommand {
        self.set_index(index);
        ScrollCommand {
            index: self.current_index,
        }
    }

    /// Changes the number of pages and keeps the index within the new bounds.
    pub fn resize(&mut self, page_count: usize) {
        self.page_count = page_count;
        self.set_index(self.current_index);
    }

    /// Switches to a different collection and starts at its first page.
    pub fn reset(&mut self, page_count: usize) {
        self.page_count = page_count;
        self.current_index = 0;
        self.pending_gesture = None;
    }

    fn set_index(&mut self, index: usize) {
        let index = index.min(self.page_count.saturating_sub(1));
        if index != self.current_index {
            trace!("changed page from {} to {index}", self.current_index);
            self.current_index = index;
        }
    }
}

fn valid_extent(page_extent: f64) -> bool {
    page_extent.is_finite() && page_extent > 0.0
}
