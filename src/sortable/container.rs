use super::collection::SortableCollection;
use super::drop_policy::{is_hover_valid, should_remove_from_source};
use super::options::ContainerConfig;
use super::types::{ContainerId, Outcome, Rejection, SortableError, SortableEvent};
use super::SortableBoard;

/// Predicate deciding whether a drag payload may be dropped into a container.
///
/// When installed it replaces the drop-zone check for that container.
pub type AllowDrop<D> = Box<dyn Fn(&D) -> bool>;

/// An ordered collection bound to a drop target.
pub struct SortableContainer<T, D> {
    id: ContainerId,
    config: ContainerConfig,
    items: Box<dyn SortableCollection<T>>,

    /// Whether the container element itself currently accepts drops.
    ///
    /// Starts out true only for an empty collection: a non-empty container receives drops
    /// through its items instead.
    drop_enabled: bool,

    allow_drop: Option<AllowDrop<D>>,
}

impl<T, D> std::fmt::Debug for SortableContainer<T, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortableContainer")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("len", &self.items.len())
            .field("drop_enabled", &self.drop_enabled)
            .field("allow_drop", &self.allow_drop.is_some())
            .finish()
    }
}

impl<T, D> SortableContainer<T, D> {
    pub(super) fn new(
        id: ContainerId,
        config: ContainerConfig,
        items: Box<dyn SortableCollection<T>>,
    ) -> Self {
        Self {
            id,
            config,
            items,
            drop_enabled: true,
            allow_drop: None,
        }
    }

    #[inline]
    pub fn id(&self) -> ContainerId {
        self.id
    }

    #[inline]
    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    pub fn collection(&self) -> &dyn SortableCollection<T> {
        self.items.as_ref()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.items.index_of(item)
    }

    #[inline]
    pub fn drop_enabled(&self) -> bool {
        self.drop_enabled
    }

    /// Whether a drag whose item currently sits in `source` may hover (and drop) here.
    ///
    /// Always true for reorders inside this container, regardless of
    /// [`ContainerConfig::max_container_size`].
    pub fn is_hover_valid(&self, source: ContainerId) -> bool {
        is_hover_valid(
            self.id,
            self.items.len(),
            self.config.max_container_size,
            source,
        )
    }

    pub(super) fn set_config(&mut self, config: ContainerConfig) {
        self.config = config;
    }

    pub(super) fn set_allow_drop(&mut self, allow_drop: Option<AllowDrop<D>>) {
        self.allow_drop = allow_drop;
    }

    pub(super) fn allow_drop(&self) -> Option<&AllowDrop<D>> {
        self.allow_drop.as_ref()
    }

    pub(super) fn set_drop_enabled(&mut self, drop_enabled: bool) {
        self.drop_enabled = drop_enabled;
    }

    pub(super) fn rebind(&mut self, items: Box<dyn SortableCollection<T>>) {
        self.drop_enabled = true;
        self.items = items;
    }

    pub(super) fn item_at(&self, index: usize) -> Result<T, SortableError>
    where
        T: Clone,
    {
        self.items
            .get(index)
            .cloned()
            .ok_or(SortableError::IndexOutOfRange {
                container: self.id,
                index,
                len: self.items.len(),
            })
    }

    pub(super) fn remove_at(&mut self, index: usize) -> Option<T> {
        let removed = self.items.remove_at(index);
        if removed.is_some() && self.items.is_empty() {
            self.drop_enabled = true;
        }
        removed
    }

    pub(super) fn insert_at(&mut self, item: T, index: usize) {
        self.items.insert_at(item, index);
    }

    /// Puts back a snapshot taken earlier in the gesture.
    pub(super) fn restore(&mut self, items: Vec<T>) {
        self.items.replace_all(items);
        self.drop_enabled = true;
    }

    pub(super) fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.to_vec()
    }
}

/// A move of the dragged item from its current slot into a target container.
pub(super) struct Relocation {
    pub(super) from: ContainerId,
    pub(super) from_index: usize,
    pub(super) to: ContainerId,
    pub(super) to_index: usize,
}

impl<T: Clone, D: Clone> SortableBoard<T, D> {
    /// A drag entered the container element itself (typically an empty list).
    ///
    /// Moves the dragged item to the head of this container unless it is already here.
    ///
    /// # Errors
    /// Fails if `container` is not registered, or if the session points past the end of its
    /// container.
    pub fn container_drag_enter(&mut self, container: ContainerId) -> Result<Outcome, SortableError> {
        let (enable_drop, drop_enabled) = {
            let target = self.container_ref(container)?;
            (target.config().enable_drop, target.drop_enabled())
        };
        let Some(active) = self.session.active().copied() else {
            return Ok(self.ignore("container enter", Rejection::NoActiveDrag));
        };
        if !enable_drop {
            return Ok(self.ignore("container enter", Rejection::DropDisabled));
        }
        if let Err(rejection) = self.drop_permission(container, drop_enabled) {
            return Ok(self.ignore("container enter", rejection));
        }

        let item = self.container_ref(active.container)?.item_at(active.index)?;
        let (contained, hover_valid) = {
            let target = self.container_ref(container)?;
            (
                target.index_of(&item).is_some(),
                target.is_hover_valid(active.container),
            )
        };
        if contained {
            return Ok(self.ignore("container enter", Rejection::AlreadyContained));
        }
        if !hover_valid {
            return Ok(self.ignore("container enter", Rejection::CapacityExceeded));
        }

        let relocation = Relocation {
            from: active.container,
            from_index: active.index,
            to: container,
            to_index: 0,
        };
        let (item, source_changed) = self.relocate(&relocation)?;
        self.session.point_at(container, 0);
        self.emit(SortableEvent::ItemAdded { container, item });
        self.refresh_relocated(&relocation, source_changed);
        self.debug_log_event(format!(
            "enter {container} from {}[{}] -> index 0",
            active.container, active.index
        ));
        Ok(Outcome::Applied)
    }

    /// Moves the item at `from[from_index]` into `to[to_index]`, snapshotting the destination
    /// first. Returns the moved item and whether the source lost it.
    pub(super) fn relocate(&mut self, relocation: &Relocation) -> Result<(T, bool), SortableError> {
        let &Relocation {
            from,
            from_index,
            to,
            to_index,
        } = relocation;

        let source = self.container_ref(from)?;
        let item = source.item_at(from_index)?;
        let remove = should_remove_from_source(from, source.config().keep_on_drop, to);
        // Both ends must exist before anything is mutated.
        self.container_ref(to)?;

        if self.ledger.wants_destination(to) {
            let snapshot = self.container_ref(to)?.snapshot();
            self.ledger.record_destination(to, snapshot);
        }

        if remove {
            self.container_mut(from)?.remove_at(from_index);
        }
        self.container_mut(to)?.insert_at(item.clone(), to_index);
        Ok((item, remove))
    }

    pub(super) fn refresh_relocated(&mut self, relocation: &Relocation, source_changed: bool) {
        if source_changed && relocation.from != relocation.to {
            self.emit(SortableEvent::Refresh {
                container: relocation.from,
            });
        }
        self.emit(SortableEvent::Refresh {
            container: relocation.to,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::super::SortableItem;
    use super::*;

    fn board_with(a: Vec<i32>, b: Vec<i32>) -> (SortableBoard<i32>, ContainerId, ContainerId) {
        let mut board = SortableBoard::default();
        let a = board.add_container(ContainerConfig::default(), a);
        let b = board.add_container(ContainerConfig::default(), b);
        (board, a, b)
    }

    fn start(board: &mut SortableBoard<i32>, container: ContainerId, index: usize) {
        let value = board.items(container).expect("registered")[index];
        let item = SortableItem::new(
            egui::Id::new(("item", container, index)),
            container,
            index,
            value,
        );
        assert!(board.drag_start(&item).expect("valid start").is_applied());
        board.take_events();
    }

    #[test]
    fn every_bound_container_accepts_drops() {
        let (mut board, a, b) = board_with(vec![1], vec![]);
        assert!(board.container(a).expect("a").drop_enabled());
        assert!(board.container(b).expect("b").drop_enabled());

        board.set_collection(b, vec![4, 5]).expect("b");
        assert!(board.container(b).expect("b").drop_enabled());
    }

    #[test]
    fn enter_inserts_ahead_of_existing_items() {
        let (mut board, a, b) = board_with(vec![1, 2, 3], vec![5]);
        start(&mut board, a, 1);

        assert_eq!(board.container_drag_enter(b), Ok(Outcome::Applied));
        assert_eq!(board.items(a).expect("a"), vec![1, 3]);
        assert_eq!(board.items(b).expect("b"), vec![2, 5]);
        let active = board.active_drag().expect("still dragging");
        assert_eq!((active.container, active.index), (b, 0));
    }

    #[test]
    fn enter_moves_item_to_head() {
        let (mut board, a, b) = board_with(vec![1, 2, 3], vec![]);
        start(&mut board, a, 1);

        let outcome = board.container_drag_enter(b).expect("known container");
        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(board.items(a).expect("a"), vec![1, 3]);
        assert_eq!(board.items(b).expect("b"), vec![2]);

        let active = board.active_drag().expect("still dragging");
        assert_eq!((active.container, active.index), (b, 0));
        assert_eq!(
            board.take_events(),
            vec![
                SortableEvent::ItemAdded {
                    container: b,
                    item: 2
                },
                SortableEvent::Refresh { container: a },
                SortableEvent::Refresh { container: b },
            ]
        );
    }

    #[test]
    fn enter_ignores_item_already_present() {
        let (mut board, a, b) = board_with(vec![1, 2], vec![]);
        start(&mut board, a, 0);
        assert!(board.container_drag_enter(b).expect("b").is_applied());

        let again = board.container_drag_enter(b).expect("b");
        assert_eq!(again, Outcome::Ignored(Rejection::AlreadyContained));
        assert_eq!(board.items(b).expect("b"), vec![1]);
    }

    #[test]
    fn enter_without_drag_is_ignored() {
        let (mut board, _a, b) = board_with(vec![1], vec![]);
        assert_eq!(
            board.container_drag_enter(b).expect("b"),
            Outcome::Ignored(Rejection::NoActiveDrag)
        );
    }

    #[test]
    fn enter_respects_enable_drop() {
        let mut board = SortableBoard::<i32>::default();
        let a = board.add_container(ContainerConfig::default(), vec![1]);
        let closed = board.add_container(
            ContainerConfig::default().with_enable_drop(false),
            Vec::new(),
        );
        start(&mut board, a, 0);
        assert_eq!(
            board.container_drag_enter(closed).expect("closed"),
            Outcome::Ignored(Rejection::DropDisabled)
        );
        assert_eq!(board.items(a).expect("a"), vec![1]);
    }

    #[test]
    fn emptied_source_accepts_drops_again() {
        let (mut board, a, b) = board_with(vec![7], vec![]);
        start(&mut board, a, 0);
        assert!(board.container_drag_enter(b).expect("b").is_applied());
        assert!(board.items(a).expect("a").is_empty());
        assert!(board.container(a).expect("a").drop_enabled());
    }

    #[test]
    fn keep_on_drop_copies_across_containers() {
        let mut board = SortableBoard::<i32>::default();
        let palette = board.add_container(
            ContainerConfig::default().with_keep_on_drop(true),
            vec![1, 2],
        );
        let b = board.add_container(ContainerConfig::default(), Vec::new());
        start(&mut board, palette, 1);

        assert!(board.container_drag_enter(b).expect("b").is_applied());
        assert_eq!(board.items(palette).expect("palette"), vec![1, 2]);
        assert_eq!(board.items(b).expect("b"), vec![2]);
    }

    #[test]
    fn unknown_container_is_an_error() {
        let (mut board, a, _b) = board_with(vec![1], vec![]);
        board.remove_container(a).expect("idle board");
        assert_eq!(
            board.container_drag_enter(a),
            Err(SortableError::UnknownContainer(a))
        );
    }
}
