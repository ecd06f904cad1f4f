use std::fmt;

use crate::scroll::ScrollSync;
use crate::utils::move_item;
use crate::DropResult;

type CommitHook<T> = Box<dyn FnMut(usize, &[T])>;

/// Items of a carousel and the index of the active one.
///
/// Every update that changes anything is committed: the [`ScrollSync`] is moved to the new index
/// and the hooks registered with [`CarouselState::on_commit`] are called with the new index and
/// items, in registration order.
pub struct CarouselState<T> {
    items: Vec<T>,
    current_index: usize,
    scroll: ScrollSync,
    hooks: Vec<CommitHook<T>>,
}

impl<T> CarouselState<T> {
    /// `stride` is the scroll distance between two cards, see [`crate::CarouselConfig::stride`].
    pub fn new(items: Vec<T>, stride: f32) -> Self {
        let mut state = Self {
            items,
            current_index: 0,
            scroll: ScrollSync::new(stride),
            hooks: Vec::new(),
        };
        state.commit();
        state
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.current_index)
    }

    pub fn scroll(&self) -> &ScrollSync {
        &self.scroll
    }

    pub fn set_stride(&mut self, stride: f32) {
        self.scroll.set_stride(stride);
    }

    /// Register a hook called after every commit.
    pub fn on_commit(&mut self, hook: impl FnMut(usize, &[T]) + 'static) {
        self.hooks.push(Box::new(hook));
    }

    pub fn has_next(&self) -> bool {
        self.current_index + 1 < self.items.len()
    }

    pub fn has_previous(&self) -> bool {
        self.current_index > 0
    }

    /// Move the item at `source` to `destination`, and make it the current one. A drop without a
    /// destination, a drop onto the item's own position or a position outside of the list does
    /// nothing. Returns `true` if the items changed.
    pub fn reorder(&mut self, drop: DropResult) -> bool {
        let Some(destination) = drop.destination else {
            tracing::debug!(source = drop.source, "drop cancelled");
            return false;
        };
        if destination == drop.source {
            return false;
        }
        if !move_item(drop.source, destination, &mut self.items) {
            tracing::debug!(?drop, len = self.items.len(), "ignoring drop outside of the list");
            return false;
        }

        tracing::debug!(source = drop.source, destination, "reordered");
        self.current_index = destination;
        self.commit();
        true
    }

    /// Step to the next item. Does nothing on the last one.
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current_index += 1;
        tracing::debug!(index = self.current_index, "next");
        self.commit();
        true
    }

    /// Step to the previous item. Does nothing on the first one.
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.current_index -= 1;
        tracing::debug!(index = self.current_index, "previous");
        self.commit();
        true
    }

    /// Jump to `index`. Out of range or already current is a no-op.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.items.len() || index == self.current_index {
            return false;
        }
        self.current_index = index;
        tracing::debug!(index, "selected");
        self.commit();
        true
    }

    /// Insert `item` at `index`, appending if `index` is past the end.
    pub fn insert(&mut self, index: usize, item: T) {
        let index = index.min(self.items.len());
        self.items.insert(index, item);
        self.clamp_current_index();
        self.commit();
    }

    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        let item = self.items.remove(index);
        self.clamp_current_index();
        self.commit();
        Some(item)
    }

    fn clamp_current_index(&mut self) {
        self.current_index = self.current_index.min(self.items.len().saturating_sub(1));
    }

    fn commit(&mut self) {
        self.scroll.sync(self.current_index);
        for hook in &mut self.hooks {
            hook(self.current_index, &self.items);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CarouselState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselState")
            .field("items", &self.items)
            .field("current_index", &self.current_index)
            .field("scroll", &self.scroll)
            .field("hooks", &self.hooks.len())
            .finish()
    }
}
