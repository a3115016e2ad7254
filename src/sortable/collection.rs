use std::rc::Rc;

/// Ordered storage behind a sortable container.
///
/// The board only ever talks to a container's items through this trait, so any backing store
/// works as long as it keeps insertion order and splice-style index semantics:
///
/// - `insert_at` with `index >= len` appends.
/// - `remove_at` out of range does nothing and returns `None`.
/// - `replace_all` empties the store, then inserts `items` in the given order.
pub trait SortableCollection<T> {
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<&T>;

    /// Position of `item`, using whatever identity the backend defines.
    fn index_of(&self, item: &T) -> Option<usize>;

    fn remove_at(&mut self, index: usize) -> Option<T>;

    fn insert_at(&mut self, item: T, index: usize);

    fn replace_all(&mut self, items: Vec<T>);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of the current contents, in order.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        (0..self.len())
            .filter_map(|index| self.get(index).cloned())
            .collect()
    }
}

impl<T: PartialEq> SortableCollection<T> for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|x| x == item)
    }

    fn remove_at(&mut self, index: usize) -> Option<T> {
        (index < Vec::len(self)).then(|| self.remove(index))
    }

    fn insert_at(&mut self, item: T, index: usize) {
        let index = index.min(Vec::len(self));
        self.insert(index, item);
    }

    fn replace_all(&mut self, items: Vec<T>) {
        self.clear();
        for (index, item) in items.into_iter().enumerate() {
            self.insert_at(item, index);
        }
    }
}

/// Reference-identity wrapper: two `Shared` are equal only if they point at the same allocation.
///
/// Use it as the item type when distinct items may hold equal values and a plain `Vec<T>`
/// would confuse them in [`SortableCollection::index_of`].
#[derive(Debug, Default)]
pub struct Shared<T>(pub Rc<T>);

impl<T> Shared<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(value))
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> PartialEq for Shared<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Eq for Shared<T> {}

impl<T> std::ops::Deref for Shared<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}
