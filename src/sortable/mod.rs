use std::collections::{BTreeMap, VecDeque};

use egui::Id;

mod collection;
mod container;
mod debug;
mod drop_policy;
mod form_array;
mod handle;
mod item;
mod options;
mod revert;
mod session;
mod transfer;
mod types;

#[cfg(test)]
mod revert_tests;

pub use collection::{Shared, SortableCollection};
pub use container::{AllowDrop, SortableContainer};
pub use drop_policy::DropZones;
pub use form_array::{ControlId, FormArray, FormControl};
pub use handle::SortableHandle;
pub use item::SortableItem;
pub use options::{ContainerConfig, SortableOptions};
pub use session::ActiveDrag;
pub use types::{ContainerId, Outcome, Rejection, SortableError, SortableEvent};

use revert::RevertLedger;
use session::DragSession;
use transfer::DragTransfer;

/// Drag-and-drop reordering across any number of ordered containers.
///
/// The board is the explicit context for one drag gesture at a time: it owns the containers,
/// the drag session, the payload handed from the dragged item to the drop target, and the
/// revert ledger that undoes a cross-container move when the gesture ends without a drop.
///
/// The UI layer delivers lifecycle events (`drag_start`, `drag_over`, `drag_enter`, `drop`,
/// `drag_end`, `container_drag_enter`) synchronously as they happen, then renders each
/// container's items and reacts to [`Self::take_events`].
///
/// `T` is the item type stored in the containers; `D` is the payload attached to each draggable
/// item.
#[derive(Debug)]
pub struct SortableBoard<T, D = T> {
    pub options: SortableOptions,

    containers: BTreeMap<ContainerId, SortableContainer<T, D>>,
    next_container_serial: u64,

    session: DragSession,
    transfer: DragTransfer<D>,
    ledger: RevertLedger<T>,

    events: Vec<SortableEvent<T, D>>,
    debug_log: VecDeque<String>,
}

impl<T, D> Default for SortableBoard<T, D> {
    fn default() -> Self {
        Self::new(SortableOptions::default())
    }
}

impl<T, D> SortableBoard<T, D> {
    pub fn new(options: SortableOptions) -> Self {
        Self {
            options,
            containers: BTreeMap::new(),
            next_container_serial: 1,
            session: DragSession::default(),
            transfer: DragTransfer::default(),
            ledger: RevertLedger::default(),
            events: Vec::new(),
            debug_log: VecDeque::new(),
        }
    }

    /// Registers a container over `collection`.
    ///
    /// The collection type picks the backend: a `Vec<T>` for plain lists, a [`FormArray`] for
    /// form controls, or any other [`SortableCollection`].
    pub fn add_container<C>(&mut self, config: ContainerConfig, collection: C) -> ContainerId
    where
        C: SortableCollection<T> + 'static,
    {
        let id = ContainerId::from_serial(self.next_container_serial);
        self.next_container_serial += 1;
        self.containers
            .insert(id, SortableContainer::new(id, config, Box::new(collection)));
        id
    }

    /// Unregisters a container, handing back its final contents.
    ///
    /// # Errors
    /// Fails if the container is unknown or still referenced by the ongoing drag.
    pub fn remove_container(&mut self, id: ContainerId) -> Result<Vec<T>, SortableError>
    where
        T: Clone,
    {
        self.ensure_not_in_use(id)?;
        let container = self
            .containers
            .remove(&id)
            .ok_or(SortableError::UnknownContainer(id))?;
        Ok(container.snapshot())
    }

    /// Binds new data to an existing container. Drops become enabled again if it is empty.
    ///
    /// # Errors
    /// Fails if the container is unknown or still referenced by the ongoing drag.
    pub fn set_collection<C>(&mut self, id: ContainerId, collection: C) -> Result<(), SortableError>
    where
        C: SortableCollection<T> + 'static,
    {
        self.ensure_not_in_use(id)?;
        self.container_mut(id)?.rebind(Box::new(collection));
        self.emit(SortableEvent::Refresh { container: id });
        Ok(())
    }

    /// # Errors
    /// Fails if the container is unknown.
    pub fn set_config(&mut self, id: ContainerId, config: ContainerConfig) -> Result<(), SortableError> {
        self.container_mut(id)?.set_config(config);
        Ok(())
    }

    /// Installs (or with `None`, removes) a payload predicate that replaces the drop-zone check
    /// for this container.
    ///
    /// # Errors
    /// Fails if the container is unknown.
    pub fn set_allow_drop(
        &mut self,
        id: ContainerId,
        allow_drop: Option<AllowDrop<D>>,
    ) -> Result<(), SortableError> {
        self.container_mut(id)?.set_allow_drop(allow_drop);
        Ok(())
    }

    pub fn container(&self, id: ContainerId) -> Option<&SortableContainer<T, D>> {
        self.containers.get(&id)
    }

    pub fn containers(&self) -> impl Iterator<Item = &SortableContainer<T, D>> + '_ {
        self.containers.values()
    }

    /// Current contents of a container, in order.
    ///
    /// # Errors
    /// Fails if the container is unknown.
    pub fn items(&self, id: ContainerId) -> Result<Vec<T>, SortableError>
    where
        T: Clone,
    {
        Ok(self.container_ref(id)?.snapshot())
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.session.is_dragged()
    }

    pub fn active_drag(&self) -> Option<ActiveDrag> {
        self.session.active().copied()
    }

    /// Payload of the item being dragged.
    pub fn drag_data(&self) -> Option<&D> {
        self.transfer.data.as_ref()
    }

    /// Element to highlight as the current drop target.
    pub fn marked_element(&self) -> Option<Id> {
        self.session.active().and_then(|active| active.marked)
    }

    /// Notifications produced since the last call, oldest first.
    pub fn take_events(&mut self) -> Vec<SortableEvent<T, D>> {
        std::mem::take(&mut self.events)
    }

    pub(super) fn emit(&mut self, event: SortableEvent<T, D>) {
        self.events.push(event);
    }

    pub(super) fn container_ref(
        &self,
        id: ContainerId,
    ) -> Result<&SortableContainer<T, D>, SortableError> {
        self.containers
            .get(&id)
            .ok_or(SortableError::UnknownContainer(id))
    }

    pub(super) fn container_mut(
        &mut self,
        id: ContainerId,
    ) -> Result<&mut SortableContainer<T, D>, SortableError> {
        self.containers
            .get_mut(&id)
            .ok_or(SortableError::UnknownContainer(id))
    }

    fn ensure_not_in_use(&self, id: ContainerId) -> Result<(), SortableError> {
        let active = self
            .session
            .active()
            .is_some_and(|active| active.container == id);
        if active || self.ledger.references(id) {
            return Err(SortableError::ContainerInUse(id));
        }
        Ok(())
    }

    /// Whether the live drag may enter or drop onto a target that belongs to `container`.
    ///
    /// `target_drop_enabled` is the drop flag of the target element itself (the container, or
    /// one of its items).
    pub(super) fn drop_permission(
        &self,
        container: ContainerId,
        target_drop_enabled: bool,
    ) -> Result<(), Rejection> {
        if !self.session.is_dragged() {
            return Err(Rejection::NoActiveDrag);
        }
        if !target_drop_enabled {
            return Err(Rejection::DropDisabled);
        }
        let Some(target) = self.containers.get(&container) else {
            return Err(Rejection::DropDisabled);
        };

        if let Some(allow_drop) = target.allow_drop() {
            return match &self.transfer.data {
                Some(data) if allow_drop(data) => Ok(()),
                _ => Err(Rejection::DropNotAllowed),
            };
        }

        if target.config().drop_zones.accepts(&self.transfer.allowed_zones) {
            Ok(())
        } else {
            Err(Rejection::DropZoneMismatch)
        }
    }
}
