use std::{collections::HashMap, hash::Hash};

use mcdata_registry::Record;

/// One family: records in file order plus lookups by id and by name.
#[derive(Debug, Clone)]
pub struct Index<T> {
    records: Vec<T>,
    by_id: HashMap<u32, usize>,
    by_name: HashMap<String, usize>,
}

impl<T> Default for Index<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            by_id: HashMap::new(),
            by_name: HashMap::new(),
        }
    }
}

impl<T: Record> Index<T> {
    pub fn new(records: Vec<T>) -> Self {
        let by_id = key_positions(&records, |record| Some(record.id()));
        let by_name = key_positions(&records, |record| Some(record.name().to_string()));
        Self {
            records,
            by_id,
            by_name,
        }
    }
}

impl<T> Index<T> {
    pub fn get(&self, id: u32) -> Option<&T> {
        self.by_id.get(&id).map(|&index| &self.records[index])
    }

    pub fn by_name(&self, name: &str) -> Option<&T> {
        self.by_name.get(name).map(|&index| &self.records[index])
    }

    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Secondary lookup over the same records, resolved through `positions`.
    pub(crate) fn lookup<K: Hash + Eq>(&self, positions: &HashMap<K, usize>, key: &K) -> Option<&T> {
        positions.get(key).map(|&index| &self.records[index])
    }
}

impl<'a, T> IntoIterator for &'a Index<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Position of each key in `records`. Later records win on duplicate keys.
pub(crate) fn key_positions<T, K, F>(records: &[T], mut key: F) -> HashMap<K, usize>
where
    K: Hash + Eq,
    F: FnMut(&T) -> Option<K>,
{
    records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| key(record).map(|key| (key, index)))
        .collect()
}

/// Hashable stand-in for the float columns foods are looked up by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct FloatKey(u64);

impl From<f64> for FloatKey {
    fn from(value: f64) -> Self {
        // -0.0 and 0.0 compare equal in the tables
        let value = if value == 0.0 { 0.0 } else { value };
        Self(value.to_bits())
    }
}
