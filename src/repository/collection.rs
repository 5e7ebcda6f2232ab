//! Insertion-ordered record collection keyed by id

use indexmap::IndexMap;
use uuid::Uuid;

/// A stored entity with a unique string id
pub trait Record: Clone {
    /// Id prefix, e.g. `printer` for `printer_<token>`
    const PREFIX: &'static str;

    fn id(&self) -> &str;
}

#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: IndexMap<String, T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: IndexMap::new(),
        }
    }
}

impl<T: Record> Collection<T> {
    /// Build from a list, rejecting duplicate ids
    pub fn from_records(records: Vec<T>) -> Result<Self, String> {
        let mut map = IndexMap::with_capacity(records.len());
        for record in records {
            let id = record.id().to_string();
            if id.is_empty() {
                return Err(format!("{} record with empty id", T::PREFIX));
            }
            if map.insert(id.clone(), record).is_some() {
                return Err(format!("duplicate {} id '{}'", T::PREFIX, id));
            }
        }
        Ok(Self { records: map })
    }

    /// Fresh id, unique within this collection
    pub fn next_id(&self) -> String {
        loop {
            let id = format!("{}_{}", T::PREFIX, Uuid::new_v4().simple());
            if !self.records.contains_key(&id) {
                return id;
            }
        }
    }

    pub fn insert(&mut self, record: T) {
        self.records.insert(record.id().to_string(), record);
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.records.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Remove keeping the order of the remaining records
    pub fn remove(&mut self, id: &str) -> Option<T> {
        self.records.shift_remove(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.values()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.records.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
