use ahash::HashSet;

use super::ContainerId;

/// Named drop zones of a container. Items inherit the zones of their container.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DropZones(HashSet<String>);

impl DropZones {
    pub fn new<I, S>(zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(zones.into_iter().map(Into::into).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, zone: &str) -> bool {
        self.0.contains(zone)
    }

    pub fn insert(&mut self, zone: impl Into<String>) {
        self.0.insert(zone.into());
    }

    /// A target accepts a drag when neither side names any zone, or when they share one.
    pub fn accepts(&self, allowed: &Self) -> bool {
        if self.is_empty() && allowed.is_empty() {
            return true;
        }
        !self.0.is_disjoint(&allowed.0)
    }
}

impl<S: Into<String>> FromIterator<S> for DropZones {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// `max_size` only caps drops coming from *other* containers; reordering inside a full
/// container is always valid.
pub(super) fn is_hover_valid(
    target: ContainerId,
    target_len: usize,
    max_size: Option<usize>,
    source: ContainerId,
) -> bool {
    match max_size {
        Some(max) if source != target => target_len < max,
        _ => true,
    }
}

/// The item is removed from its previous container unless that container keeps its items on
/// drop and the move crosses containers.
pub(super) fn should_remove_from_source(
    source: ContainerId,
    source_keeps_on_drop: bool,
    target: ContainerId,
) -> bool {
    !source_keeps_on_drop || source == target
}
