use egui::Id;

/// Handle to a container registered on a [`super::SortableBoard`].
///
/// The drag session and the revert ledger only ever hold these handles, never the container
/// itself, so a container's lifetime is owned by the board alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ContainerId(u64);

impl ContainerId {
    pub(super) fn from_serial(serial: u64) -> Self {
        Self(serial)
    }

    #[inline]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ContainerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "container#{}", self.0)
    }
}

/// Notifications produced by the board for the UI layer.
///
/// Drained with [`super::SortableBoard::take_events`].
#[derive(Clone, Debug, PartialEq)]
pub enum SortableEvent<T, D> {
    /// An item was inserted into `container` by a drag-enter.
    ItemAdded { container: ContainerId, item: T },

    /// A drag began on `element`.
    DragStart { element: Id, data: D },

    /// The drag moved over `element`, which is now the considered position.
    DragOver { element: Id, data: Option<D> },

    /// The drag gesture of `element` ended, with or without a drop.
    DragEnd { element: Id, data: Option<D> },

    /// A drop landed on `element`. Always precedes the matching [`Self::DragSuccess`].
    DropSuccess { element: Id, data: Option<D> },

    /// The dragged `element` was dropped successfully.
    DragSuccess { element: Id, data: Option<D> },

    /// The contents of `container` changed and should be re-rendered.
    Refresh { container: ContainerId },
}

/// Why a drag lifecycle event was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// No drag gesture is active.
    NoActiveDrag,

    /// The item (or its container) does not allow dragging.
    DragDisabled,

    /// The target does not currently accept drops.
    DropDisabled,

    /// The target's drop zones do not intersect the dragged item's zones.
    DropZoneMismatch,

    /// The container's `allow_drop` predicate refused the payload.
    DropNotAllowed,

    /// The item can only be dragged through its handle.
    HandleRequired,

    /// The hovered slot is the one the session already points at.
    SamePosition,

    /// The container already holds the dragged item.
    AlreadyContained,

    /// The target container is full for drops from other containers.
    CapacityExceeded,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::NoActiveDrag => "no active drag",
            Self::DragDisabled => "drag disabled",
            Self::DropDisabled => "drop disabled",
            Self::DropZoneMismatch => "drop zone mismatch",
            Self::DropNotAllowed => "drop not allowed",
            Self::HandleRequired => "drag must start from handle",
            Self::SamePosition => "same position",
            Self::AlreadyContained => "already contained",
            Self::CapacityExceeded => "capacity exceeded",
        };
        f.write_str(text)
    }
}

/// Result of delivering one drag lifecycle event.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The event changed board state.
    Applied,

    /// A guard fired; the board is exactly as it was before the event.
    Ignored(Rejection),
}

impl Outcome {
    #[inline]
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }

    #[inline]
    pub fn rejection(self) -> Option<Rejection> {
        match self {
            Self::Applied => None,
            Self::Ignored(rejection) => Some(rejection),
        }
    }
}

/// Caller-contract violations.
///
/// Validation failures during a drag are never errors; they surface as
/// [`Outcome::Ignored`]. These variants mean the caller handed the board a handle or an index
/// that does not exist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SortableError {
    UnknownContainer(ContainerId),
    IndexOutOfRange {
        container: ContainerId,
        index: usize,
        len: usize,
    },
    ContainerInUse(ContainerId),
}

impl std::fmt::Display for SortableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownContainer(id) => write!(f, "unknown container: {id}"),
            Self::IndexOutOfRange {
                container,
                index,
                len,
            } => {
                write!(f, "index {index} out of range for {container} (len {len})")
            }
            Self::ContainerInUse(id) => {
                write!(f, "{id} is referenced by the active drag")
            }
        }
    }
}

impl std::error::Error for SortableError {}
