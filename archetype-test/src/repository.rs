use std::sync::Arc;

use archetype_data::{DataError, Entity, Repository};
use dashmap::DashMap;

/// How an [`InMemoryRepository`] reacts to writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Writes are stored.
    #[default]
    Store,
    /// Writes report success but are silently dropped.
    Reject,
    /// Every call fails with a `DataError::Database`.
    Fail,
}

#[derive(Debug)]
struct Unavailable;

impl std::fmt::Display for Unavailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("in-memory store unavailable")
    }
}

impl std::error::Error for Unavailable {}

/// `Repository` over a `DashMap` keyed by `id.to_string()`.
///
/// Clones share the same rows, so a test can keep a handle while the router
/// owns another.
pub struct InMemoryRepository<T> {
    rows: Arc<DashMap<String, T>>,
    mode: WriteMode,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::with_mode(WriteMode::Store)
    }

    pub fn with_mode(mode: WriteMode) -> Self {
        Self {
            rows: Arc::new(DashMap::new()),
            mode,
        }
    }

    /// A repository whose writes never land.
    pub fn rejecting() -> Self {
        Self::with_mode(WriteMode::Reject)
    }

    /// A repository whose every call errors.
    pub fn failing() -> Self {
        Self::with_mode(WriteMode::Fail)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn check(&self) -> Result<(), DataError> {
        match self.mode {
            WriteMode::Fail => Err(DataError::database(Unavailable)),
            WriteMode::Store | WriteMode::Reject => Ok(()),
        }
    }
}

impl<T: Entity + Clone> InMemoryRepository<T> {
    /// Seed a row directly, bypassing the write mode.
    pub fn insert(&self, entity: T) {
        self.rows.insert(entity.id().to_string(), entity);
    }

    pub fn get(&self, id: &T::Id) -> Option<T> {
        self.rows.get(&id.to_string()).map(|row| row.value().clone())
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for InMemoryRepository<T> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
            mode: self.mode,
        }
    }
}

impl<T: Entity + Clone> Repository<T, T::Id> for InMemoryRepository<T> {
    async fn persist(&self, entity: &T) -> Result<(), DataError> {
        self.check()?;
        if self.mode == WriteMode::Store {
            self.rows.insert(entity.id().to_string(), entity.clone());
        }
        Ok(())
    }

    async fn is_persistent(&self, entity: &T) -> Result<bool, DataError> {
        self.check()?;
        Ok(self.rows.contains_key(&entity.id().to_string()))
    }

    async fn find_by_id(&self, id: &T::Id) -> Result<Option<T>, DataError> {
        self.check()?;
        Ok(self.get(id))
    }

    async fn delete(&self, entity: &T) -> Result<bool, DataError> {
        self.check()?;
        if self.mode == WriteMode::Reject {
            return Ok(false);
        }
        Ok(self.rows.remove(&entity.id().to_string()).is_some())
    }
}
