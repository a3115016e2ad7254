use super::drop_policy::DropZones;

/// Options for [`super::SortableBoard`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SortableOptions {
    /// If true, restore the source and destination containers when a gesture that staged a
    /// cross-container move ends without a successful drop.
    ///
    /// If false, the staged move is kept as if it had been dropped.
    pub revert_on_abort: bool,

    /// If true, record every drag transition in a small ring buffer, readable with
    /// [`super::SortableBoard::debug_log`].
    pub debug_event_log: bool,

    /// Maximum number of debug log lines to keep (ring buffer).
    pub debug_event_log_capacity: usize,
}

impl Default for SortableOptions {
    fn default() -> Self {
        Self {
            revert_on_abort: true,
            debug_event_log: false,
            debug_event_log_capacity: 200,
        }
    }
}

/// Per-container configuration, set when the container is registered.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ContainerConfig {
    /// Zones this container (and every item in it) belongs to.
    pub drop_zones: DropZones,

    /// Items dragged out to another container stay here as well (copy instead of move).
    pub keep_on_drop: bool,

    /// Whether drags may enter this container or its items at all.
    pub enable_drop: bool,

    /// Upper bound on the number of items for drops coming from other containers.
    ///
    /// `None` means unbounded.
    pub max_container_size: Option<usize>,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            drop_zones: DropZones::default(),
            keep_on_drop: false,
            enable_drop: true,
            max_container_size: None,
        }
    }
}

impl ContainerConfig {
    pub fn with_drop_zones(mut self, drop_zones: DropZones) -> Self {
        self.drop_zones = drop_zones;
        self
    }

    pub fn with_keep_on_drop(mut self, keep_on_drop: bool) -> Self {
        self.keep_on_drop = keep_on_drop;
        self
    }

    pub fn with_enable_drop(mut self, enable_drop: bool) -> Self {
        self.enable_drop = enable_drop;
        self
    }

    pub fn with_max_container_size(mut self, max: usize) -> Self {
        self.max_container_size = Some(max);
        self
    }
}
