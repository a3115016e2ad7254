use super::ContainerId;

pub(super) type Snapshot<T> = (ContainerId, Vec<T>);

/// Pre-drag contents of the containers a gesture touches, so an uncommitted move can be undone.
#[derive(Debug)]
pub(super) struct RevertLedger<T> {
    source: Option<Snapshot<T>>,
    destination: Option<Snapshot<T>>,
}

impl<T> Default for RevertLedger<T> {
    fn default() -> Self {
        Self {
            source: None,
            destination: None,
        }
    }
}

impl<T> RevertLedger<T> {
    pub(super) fn record_source(&mut self, container: ContainerId, snapshot: Vec<T>) {
        self.source = Some((container, snapshot));
    }

    /// Whether `container` should be snapshotted as the destination before it is mutated.
    ///
    /// Only a container other than the source qualifies, and only once per distinct destination.
    pub(super) fn wants_destination(&self, container: ContainerId) -> bool {
        let is_source = self.source.as_ref().is_some_and(|(id, _)| *id == container);
        let is_destination = self
            .destination
            .as_ref()
            .is_some_and(|(id, _)| *id == container);
        !is_source && !is_destination
    }

    pub(super) fn record_destination(&mut self, container: ContainerId, snapshot: Vec<T>) {
        self.destination = Some((container, snapshot));
    }

    /// Both sides recorded means a cross-container move was staged.
    pub(super) fn is_staged(&self) -> bool {
        self.source.is_some() && self.destination.is_some()
    }

    pub(super) fn references(&self, container: ContainerId) -> bool {
        [&self.source, &self.destination]
            .into_iter()
            .flatten()
            .any(|(id, _)| *id == container)
    }

    /// Drops both snapshots. Called on a successful drop.
    pub(super) fn commit(&mut self) {
        *self = Self::default();
    }

    /// Empties the ledger, handing back the `(source, destination)` snapshots when a move was
    /// staged.
    pub(super) fn take_staged(&mut self) -> Option<(Snapshot<T>, Snapshot<T>)> {
        let ledger = std::mem::take(self);
        match (ledger.source, ledger.destination) {
            (Some(source), Some(destination)) => Some((source, destination)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u64) -> ContainerId {
        ContainerId::from_serial(n)
    }

    #[test]
    fn source_is_never_a_destination() {
        let mut ledger = RevertLedger::default();
        ledger.record_source(id(1), vec![1, 2, 3]);
        assert!(!ledger.wants_destination(id(1)));
        assert!(ledger.wants_destination(id(2)));

        ledger.record_destination(id(2), vec![]);
        assert!(!ledger.wants_destination(id(2)));
        assert!(ledger.wants_destination(id(3)));
        assert!(ledger.is_staged());
    }

    #[test]
    fn source_only_ledger_is_not_staged() {
        let mut ledger = RevertLedger::default();
        ledger.record_source(id(1), vec![1]);
        assert!(!ledger.is_staged());
        assert_eq!(ledger.take_staged(), None);
        assert!(!ledger.references(id(1)));
    }

    #[test]
    fn take_staged_resets() {
        let mut ledger = RevertLedger::default();
        ledger.record_source(id(1), vec![1, 2]);
        ledger.record_destination(id(2), vec![9]);
        assert!(ledger.references(id(2)));

        let ((src, src_items), (dst, dst_items)) =
            ledger.take_staged().expect("move was staged");
        assert_eq!((src, src_items), (id(1), vec![1, 2]));
        assert_eq!((dst, dst_items), (id(2), vec![9]));
        assert!(!ledger.references(id(1)));
        assert!(!ledger.references(id(2)));
    }

    #[test]
    fn commit_forgets_everything() {
        let mut ledger = RevertLedger::default();
        ledger.record_source(id(1), vec![1]);
        ledger.record_destination(id(2), vec![]);
        ledger.commit();
        assert!(!ledger.is_staged());
        assert!(!ledger.references(id(1)));
    }
}
