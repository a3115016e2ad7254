//! Drag-and-drop reordering and cross-list transfer for `egui`.
//!
//! A [`SortableBoard`] owns any number of ordered containers and tracks one drag gesture at a
//! time. Your UI code draws the items, forwards the drag lifecycle it observes
//! (`drag_start`, `drag_over`, `drag_enter`, `drop_on`, `drag_end`, `container_drag_enter`), and
//! re-renders whatever the board's containers hold afterwards.
//!
//! A move into another container that is never dropped (the user pressed escape, or released
//! outside any target) is rolled back when the gesture ends.

#![forbid(unsafe_code)]

pub mod sortable;

pub use sortable::{
    ActiveDrag, AllowDrop, ContainerConfig, ContainerId, ControlId, DropZones, FormArray,
    FormControl, Outcome, Rejection, Shared, SortableBoard, SortableCollection, SortableContainer,
    SortableError, SortableEvent, SortableHandle, SortableItem, SortableOptions,
};
