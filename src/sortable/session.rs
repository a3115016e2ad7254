use egui::Id;

use super::ContainerId;

/// Where the dragged item currently sits, and which element is highlighted as the drop target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveDrag {
    pub id: u64,

    /// The element the gesture started on. Receives the final `DragEnd`.
    pub source_element: Id,

    /// Container that currently holds the dragged item's position pointer.
    pub container: ContainerId,

    /// Position of the dragged item inside [`Self::container`].
    pub index: usize,

    /// Element currently marked as the hovered drop target.
    pub marked: Option<Id>,
}

/// State of the one drag gesture a board tracks at a time.
///
/// Populated by `drag_start`, moved by `drag_over`/`drag_enter`, cleared by `drag_end`.
#[derive(Debug, Default)]
pub(super) struct DragSession {
    next_id: u64,
    active: Option<ActiveDrag>,
}

impl DragSession {
    pub(super) fn start(&mut self, source_element: Id, container: ContainerId, index: usize) -> u64 {
        let id = self.next_id.max(1);
        self.next_id = id.saturating_add(1);
        self.active = Some(ActiveDrag {
            id,
            source_element,
            container,
            index,
            marked: Some(source_element),
        });
        id
    }

    #[inline]
    pub(super) fn is_dragged(&self) -> bool {
        self.active.is_some()
    }

    #[inline]
    pub(super) fn active(&self) -> Option<&ActiveDrag> {
        self.active.as_ref()
    }

    /// Moves the position pointer. Does nothing when no drag is active.
    pub(super) fn point_at(&mut self, container: ContainerId, index: usize) {
        if let Some(active) = &mut self.active {
            active.container = container;
            active.index = index;
        }
    }

    pub(super) fn mark(&mut self, element: Option<Id>) {
        if let Some(active) = &mut self.active {
            active.marked = element;
        }
    }

    pub(super) fn clear(&mut self) -> Option<ActiveDrag> {
        self.active.take()
    }

    pub(super) fn current_id(&self) -> u64 {
        self.active.map_or(0, |active| active.id)
    }
}
