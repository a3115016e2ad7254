use egui::Id;

use super::item::SortableItem;
use super::types::{Outcome, SortableError};
use super::SortableBoard;

/// A grip widget that owns the right to start dragging its item.
///
/// It holds no drag state of its own; it only forwards the gesture to the item it belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortableHandle {
    pub element: Id,
}

impl SortableHandle {
    pub fn new(element: Id) -> Self {
        Self { element }
    }

    /// Starts dragging `item` through this handle.
    ///
    /// # Errors
    /// Same as [`SortableBoard::drag_start`].
    pub fn drag_start<T: Clone, D: Clone>(
        &self,
        board: &mut SortableBoard<T, D>,
        item: &SortableItem<D>,
    ) -> Result<Outcome, SortableError> {
        board.begin_drag(item, Some(self.element))
    }
}
