use std::{collections::HashMap, sync::Arc};

use mcdata_versions::DataKey;
use parking_lot::{Mutex, RwLock};

use crate::{DataError, IndexedData};

type Slot = Arc<Mutex<Option<Arc<IndexedData>>>>;

/// Built stores by dataset. Entries are never evicted.
///
/// Each key has its own slot: requests for a key that is being built wait
/// for that build, requests for other keys do not.
#[derive(Default)]
pub struct DataCache {
    slots: RwLock<HashMap<DataKey, Slot>>,
}

impl DataCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The published store for `key`, without waiting on a build in progress.
    pub fn get(&self, key: &DataKey) -> Option<Arc<IndexedData>> {
        let slot = self.slots.read().get(key)?.clone();
        let store = slot.try_lock()?.clone();
        store
    }

    /// Returns the store for `key`, running `build` if nobody has published
    /// one yet. A failed build publishes nothing, so the next caller retries.
    pub fn get_or_try_build<F>(&self, key: &DataKey, build: F) -> Result<Arc<IndexedData>, DataError>
    where
        F: FnOnce() -> Result<IndexedData, DataError>,
    {
        let slot = self.slot(key);
        let mut published = slot.lock();
        if let Some(store) = published.as_ref() {
            return Ok(store.clone());
        }
        let store = Arc::new(build()?);
        *published = Some(store.clone());
        Ok(store)
    }

    /// Datasets with a published store.
    pub fn keys(&self) -> Vec<DataKey> {
        self.slots
            .read()
            .iter()
            .filter(|(_, slot)| slot.try_lock().is_some_and(|store| store.is_some()))
            .map(|(key, _)| key.clone())
            .collect()
    }

    fn slot(&self, key: &DataKey) -> Slot {
        if let Some(slot) = self.slots.read().get(key) {
            return slot.clone();
        }
        self.slots.write().entry(key.clone()).or_default().clone()
    }
}

#[cfg(test)]
mod test {
    use std::{
        sync::{
            atomic::{AtomicUsize, Ordering},
            Arc,
        },
        thread,
    };

    use mcdata_core::{Platform, Version};
    use mcdata_versions::{DataKey, VersionCatalog};

    use super::DataCache;
    use crate::{DataError, IndexBuilder, IndexedData, MemoryDataProvider};

    fn key(version: &str) -> DataKey {
        DataKey {
            platform: Platform::Pc,
            version: version.to_string(),
        }
    }

    fn empty_store(key: &DataKey) -> Result<IndexedData, DataError> {
        let provider = MemoryDataProvider::new(VersionCatalog::new());
        IndexBuilder::new(&provider, key).build(&Version::named(key.version.as_str()))
    }

    #[test]
    fn builds_once_per_key() {
        let cache = DataCache::new();
        let builds = AtomicUsize::new(0);
        let build = |key: &DataKey| {
            builds.fetch_add(1, Ordering::SeqCst);
            empty_store(key)
        };

        let first = cache.get_or_try_build(&key("1.8"), || build(&key("1.8"))).unwrap();
        let second = cache.get_or_try_build(&key("1.8"), || build(&key("1.8"))).unwrap();
        let other = cache.get_or_try_build(&key("1.9"), || build(&key("1.9"))).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert!(!Arc::ptr_eq(&first, &other));
        assert_eq!(builds.load(Ordering::SeqCst), 2);
        assert!(cache.get(&key("1.8")).is_some());
        assert!(cache.get(&key("1.10")).is_none());
    }

    #[test]
    fn failed_builds_are_not_published() {
        let cache = DataCache::new();
        let err = cache
            .get_or_try_build(&key("1.8"), || Err(DataError::NotFound("stone".to_string())))
            .unwrap_err();
        assert!(matches!(err, DataError::NotFound(_)));
        assert!(cache.get(&key("1.8")).is_none());
        assert!(cache.keys().is_empty());

        assert!(cache
            .get_or_try_build(&key("1.8"), || empty_store(&key("1.8")))
            .is_ok());
        assert_eq!(cache.keys(), vec![key("1.8")]);
    }

    #[test]
    fn concurrent_requests_share_one_build() {
        let cache = DataCache::new();
        let builds = AtomicUsize::new(0);

        let stores: Vec<_> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(|| {
                        cache
                            .get_or_try_build(&key("1.16.4"), || {
                                builds.fetch_add(1, Ordering::SeqCst);
                                empty_store(&key("1.16.4"))
                            })
                            .unwrap()
                    })
                })
                .collect();
            handles.into_iter().map(|handle| handle.join().unwrap()).collect()
        });

        assert_eq!(builds.load(Ordering::SeqCst), 1);
        assert!(stores.windows(2).all(|pair| Arc::ptr_eq(&pair[0], &pair[1])));
    }
}
