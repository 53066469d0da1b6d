use std::collections::HashMap;

/// Named attribute columns over dense key indices.
///
/// Both vertex and edge attributes of the overlap graph are non-negative
/// lengths, so values are plain `usize`. A column must be registered with
/// [`AttributeStore::new_attr`] before any value is set. Slots start unset;
/// reading an unset slot is an error at the caller's level, never a silent
/// default.
#[derive(Debug, Clone, Default)]
pub struct AttributeStore {
    columns: HashMap<String, Vec<Option<usize>>>,
    keys: usize,
}

/// Outcome of an attribute lookup, before being mapped onto a vertex- or
/// edge-flavored [`crate::GraphError`] by the owning container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AttrLookup {
    Found(usize),
    /// The column exists but the slot is unset, or the column was never
    /// registered.
    NoAttribute,
    /// The key index is beyond the registered key count.
    NoKey,
}

impl AttributeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an attribute column. Registering the same name twice is a
    /// no-op that keeps existing values.
    pub fn new_attr(&mut self, name: &str) {
        let keys = self.keys;
        self.columns
            .entry(name.to_string())
            .or_insert_with(|| vec![None; keys]);
    }

    /// True if a column with this name has been registered.
    pub fn has_attr(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Grow every column by `count` unset slots.
    pub fn add_keys(&mut self, count: usize) {
        self.keys += count;
        for column in self.columns.values_mut() {
            column.resize(self.keys, None);
        }
    }

    /// Number of key slots (vertices or edges) currently tracked.
    pub fn keys(&self) -> usize {
        self.keys
    }

    /// Set `name` for key `index`. Returns false if the column is not
    /// registered or the index is out of range.
    #[must_use]
    pub fn set(&mut self, index: usize, name: &str, value: usize) -> bool {
        match self.columns.get_mut(name) {
            Some(column) if index < column.len() => {
                column[index] = Some(value);
                true
            }
            _ => false,
        }
    }

    pub(crate) fn get(&self, index: usize, name: &str) -> AttrLookup {
        if index >= self.keys {
            return AttrLookup::NoKey;
        }
        match self.columns.get(name).and_then(|column| column[index]) {
            Some(value) => AttrLookup::Found(value),
            None => AttrLookup::NoAttribute,
        }
    }

    /// Iterate over the set attributes of one key.
    pub fn attrs(&self, index: usize) -> impl Iterator<Item = (&str, usize)> {
        self.columns.iter().filter_map(move |(name, column)| {
            column
                .get(index)
                .copied()
                .flatten()
                .map(|value| (name.as_str(), value))
        })
    }
}
