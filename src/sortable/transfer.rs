use egui::Id;

use super::drop_policy::DropZones;

/// What the dragged item hands to whichever component ends up receiving the drop.
#[derive(Debug)]
pub(super) struct DragTransfer<D> {
    pub(super) data: Option<D>,

    /// Element whose drag-success notification fires when a drop lands.
    pub(super) success_element: Option<Id>,

    pub(super) allowed_zones: DropZones,
}

impl<D> Default for DragTransfer<D> {
    fn default() -> Self {
        Self {
            data: None,
            success_element: None,
            allowed_zones: DropZones::default(),
        }
    }
}

impl<D> DragTransfer<D> {
    pub(super) fn stash(&mut self, data: D, success_element: Id, allowed_zones: DropZones) {
        self.data = Some(data);
        self.success_element = Some(success_element);
        self.allowed_zones = allowed_zones;
    }

    /// Empties the slot and returns the payload it held.
    pub(super) fn clear(&mut self) -> Option<D> {
        self.success_element = None;
        self.allowed_zones = DropZones::default();
        self.data.take()
    }
}
