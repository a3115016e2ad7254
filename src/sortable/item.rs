use egui::Id;

use super::container::Relocation;
use super::types::{ContainerId, Outcome, Rejection, SortableError, SortableEvent};
use super::SortableBoard;

/// One draggable, droppable entry of a container, as rendered this frame.
///
/// The UI layer rebuilds these every frame from its own widgets and hands them to the board
/// together with the lifecycle event they received.
#[derive(Clone, Debug, PartialEq)]
pub struct SortableItem<D> {
    /// The widget the item is drawn as.
    pub element: Id,

    pub container: ContainerId,

    /// Position of the item within [`Self::container`].
    pub index: usize,

    pub drag_data: D,

    pub drag_enabled: bool,

    pub drop_enabled: bool,

    /// If set, dragging can only begin through this handle (see [`super::SortableHandle`]).
    pub handle: Option<Id>,
}

impl<D> SortableItem<D> {
    pub fn new(element: Id, container: ContainerId, index: usize, drag_data: D) -> Self {
        Self {
            element,
            container,
            index,
            drag_data,
            drag_enabled: true,
            drop_enabled: true,
            handle: None,
        }
    }

    pub fn with_drag_enabled(mut self, drag_enabled: bool) -> Self {
        self.drag_enabled = drag_enabled;
        self
    }

    pub fn with_drop_enabled(mut self, drop_enabled: bool) -> Self {
        self.drop_enabled = drop_enabled;
        self
    }

    pub fn with_handle(mut self, handle: Id) -> Self {
        self.handle = Some(handle);
        self
    }
}

impl<T: Clone, D: Clone> SortableBoard<T, D> {
    /// The user started dragging `item`.
    ///
    /// Items with a [`SortableItem::handle`] must be started through
    /// [`super::SortableHandle::drag_start`] instead.
    ///
    /// If a previous gesture never received its `drag_end`, it is aborted (and reverted) first.
    ///
    /// # Errors
    /// Fails if the item's container is unknown or its index is out of range.
    pub fn drag_start(&mut self, item: &SortableItem<D>) -> Result<Outcome, SortableError> {
        self.begin_drag(item, None)
    }

    pub(super) fn begin_drag(
        &mut self,
        item: &SortableItem<D>,
        via_handle: Option<Id>,
    ) -> Result<Outcome, SortableError> {
        if !item.drag_enabled {
            return Ok(self.ignore("drag start", Rejection::DragDisabled));
        }
        if item.handle.is_some() && item.handle != via_handle {
            return Ok(self.ignore("drag start", Rejection::HandleRequired));
        }

        self.container_ref(item.container)?;
        if let Some(stale) = self.session.active().copied() {
            log::warn!(
                "drag {} on {:?} never ended; aborting it before starting a new one",
                stale.id,
                stale.source_element
            );
            self.finish_drag(stale.source_element);
        }

        // Snapshot after the abort above, which may have restored this container.
        let container = self.container_ref(item.container)?;
        container.item_at(item.index)?;
        let zones = container.config().drop_zones.clone();
        let snapshot = container.snapshot();

        let id = self.session.start(item.element, item.container, item.index);
        self.transfer
            .stash(item.drag_data.clone(), item.element, zones);
        self.emit(SortableEvent::DragStart {
            element: item.element,
            data: item.drag_data.clone(),
        });

        self.ledger.commit();
        self.ledger.record_source(item.container, snapshot);

        self.debug_log_event(format!(
            "drag {id} START {}[{}] element={:?}",
            item.container, item.index, item.element
        ));
        Ok(Outcome::Applied)
    }

    /// The drag hovers over `item`: it becomes the considered position, without moving
    /// anything.
    ///
    /// # Errors
    /// Fails if the item's container is unknown.
    pub fn drag_over(&mut self, item: &SortableItem<D>) -> Result<Outcome, SortableError> {
        self.container_ref(item.container)?;
        if let Err(rejection) = self.drop_permission(item.container, item.drop_enabled) {
            return Ok(self.ignore("drag over", rejection));
        }
        if self.marked_element() == Some(item.element) {
            return Ok(Outcome::Ignored(Rejection::SamePosition));
        }

        self.session.point_at(item.container, item.index);
        self.session.mark(Some(item.element));
        self.emit(SortableEvent::DragOver {
            element: item.element,
            data: self.transfer.data.clone(),
        });
        self.debug_log_event(format!(
            "drag {} OVER {}[{}]",
            self.session.current_id(),
            item.container,
            item.index
        ));
        Ok(Outcome::Applied)
    }

    /// The drag entered `item`: the dragged item moves into `item`'s slot.
    ///
    /// # Errors
    /// Fails if a container involved is unknown, or if the session points past the end of its
    /// container.
    pub fn drag_enter(&mut self, item: &SortableItem<D>) -> Result<Outcome, SortableError> {
        let enable_drop = self.container_ref(item.container)?.config().enable_drop;
        if let Err(rejection) = self.drop_permission(item.container, item.drop_enabled) {
            return Ok(self.ignore("drag enter", rejection));
        }
        if !enable_drop {
            return Ok(self.ignore("drag enter", Rejection::DropDisabled));
        }
        let Some(active) = self.session.active().copied() else {
            return Ok(self.ignore("drag enter", Rejection::NoActiveDrag));
        };

        if active.index == item.index && active.container == item.container {
            return Ok(Outcome::Ignored(Rejection::SamePosition));
        }
        if !self
            .container_ref(item.container)?
            .is_hover_valid(active.container)
        {
            return Ok(self.ignore("drag enter", Rejection::CapacityExceeded));
        }

        let relocation = Relocation {
            from: active.container,
            from_index: active.index,
            to: item.container,
            to_index: item.index,
        };
        let (moved, source_changed) = self.relocate(&relocation)?;

        let target = self.container_mut(item.container)?;
        if target.drop_enabled() {
            target.set_drop_enabled(false);
        }
        self.emit(SortableEvent::ItemAdded {
            container: item.container,
            item: moved,
        });
        self.session.point_at(item.container, item.index);
        self.session.mark(Some(item.element));
        self.refresh_relocated(&relocation, source_changed);

        self.debug_log_event(format!(
            "drag {} ENTER {}[{}] -> {}[{}]",
            active.id, active.container, active.index, item.container, item.index
        ));
        Ok(Outcome::Applied)
    }

    /// The dragged item was released over `item`. Commits the gesture: nothing is reverted
    /// when it ends.
    ///
    /// # Errors
    /// Fails if the item's container is unknown.
    pub fn drop_on(&mut self, item: &SortableItem<D>) -> Result<Outcome, SortableError> {
        self.container_ref(item.container)?;
        if let Err(rejection) = self.drop_permission(item.container, item.drop_enabled) {
            return Ok(self.ignore("drop", rejection));
        }
        let Some(active) = self.session.active().copied() else {
            return Ok(self.ignore("drop", Rejection::NoActiveDrag));
        };
        if !self
            .container_ref(item.container)?
            .is_hover_valid(active.container)
        {
            return Ok(self.ignore("drop", Rejection::CapacityExceeded));
        }

        let staged = self.ledger.is_staged();
        self.ledger.commit();

        let data = self.transfer.data.clone();
        self.emit(SortableEvent::DropSuccess {
            element: item.element,
            data: data.clone(),
        });
        if let Some(source) = self.transfer.success_element {
            self.emit(SortableEvent::DragSuccess {
                element: source,
                data,
            });
        }
        self.emit(SortableEvent::Refresh {
            container: item.container,
        });

        self.debug_log_event(format!(
            "drag {} DROP {}[{}] staged_move_committed={staged}",
            active.id, item.container, item.index
        ));
        Ok(Outcome::Applied)
    }

    /// The gesture of `item` ended, with or without a drop.
    ///
    /// Always clears the session. If a cross-container move was staged and never dropped, both
    /// containers are restored to their pre-drag contents.
    pub fn drag_end(&mut self, item: &SortableItem<D>) -> Outcome {
        self.finish_drag(item.element);
        Outcome::Applied
    }

    pub(super) fn finish_drag(&mut self, element: Id) {
        let ended = self.session.clear();
        let data = self.transfer.clear();
        self.emit(SortableEvent::DragEnd { element, data });

        let id = ended.map_or(0, |ended| ended.id);
        let Some(((source, source_items), (destination, destination_items))) =
            self.ledger.take_staged()
        else {
            self.debug_log_event(format!("drag {id} END"));
            return;
        };

        if !self.options.revert_on_abort {
            self.debug_log_event(format!(
                "drag {id} END keeping staged move {source} -> {destination}"
            ));
            return;
        }

        for (container, items) in [(source, source_items), (destination, destination_items)] {
            if let Some(target) = self.containers.get_mut(&container) {
                target.restore(items);
                self.emit(SortableEvent::Refresh { container });
            } else {
                log::warn!("cannot revert {container}: no longer registered");
            }
        }
        self.debug_log_event(format!(
            "drag {id} END reverted {source} and {destination}"
        ));
    }
}
