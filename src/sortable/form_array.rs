use super::collection::SortableCollection;

/// Stable identity of a [`FormControl`], independent of its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ControlId(pub u64);

/// One editable entry of a [`FormArray`].
#[derive(Clone, Debug)]
pub struct FormControl<V> {
    id: ControlId,
    pub value: V,
}

impl<V> FormControl<V> {
    pub fn new(id: ControlId, value: V) -> Self {
        Self { id, value }
    }

    #[inline]
    pub fn id(&self) -> ControlId {
        self.id
    }
}

/// Controls compare by identity, not by value: two controls holding equal values are still
/// different items.
impl<V> PartialEq for FormControl<V> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<V> Eq for FormControl<V> {}

/// A reactive array of form controls.
///
/// Every structural change bumps [`Self::version`], which the form layer polls to know when to
/// re-validate and re-render.
#[derive(Clone, Debug)]
pub struct FormArray<V> {
    controls: Vec<FormControl<V>>,
    version: u64,
}

impl<V> Default for FormArray<V> {
    fn default() -> Self {
        Self {
            controls: Vec::new(),
            version: 0,
        }
    }
}

impl<V> FormArray<V> {
    pub fn new(controls: Vec<FormControl<V>>) -> Self {
        Self {
            controls,
            version: 0,
        }
    }

    pub fn controls(&self) -> &[FormControl<V>] {
        &self.controls
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.controls.iter().map(|control| &control.value)
    }

    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn push(&mut self, control: FormControl<V>) {
        self.controls.push(control);
        self.mark_changed();
    }

    fn mark_changed(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}

impl<V> SortableCollection<FormControl<V>> for FormArray<V> {
    fn len(&self) -> usize {
        self.controls.len()
    }

    fn get(&self, index: usize) -> Option<&FormControl<V>> {
        self.controls.get(index)
    }

    fn index_of(&self, item: &FormControl<V>) -> Option<usize> {
        self.controls.iter().position(|control| control.id == item.id)
    }

    fn remove_at(&mut self, index: usize) -> Option<FormControl<V>> {
        if index >= self.controls.len() {
            return None;
        }
        let removed = self.controls.remove(index);
        self.mark_changed();
        Some(removed)
    }

    fn insert_at(&mut self, item: FormControl<V>, index: usize) {
        let index = index.min(self.controls.len());
        self.controls.insert(index, item);
        self.mark_changed();
    }

    fn replace_all(&mut self, items: Vec<FormControl<V>>) {
        self.controls.clear();
        self.mark_changed();
        for (index, item) in items.into_iter().enumerate() {
            self.insert_at(item, index);
        }
    }
}
