//! Project persistence
//!
//! Auto-save treats persistence as an opaque collaborator: the form hands a
//! full record to [`ProjectStore::update_project`] and never inspects what
//! the store does with it.

use crate::error::StoreError;
use crate::record::{EditableRecord, ProjectId};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Persistence seam used by the auto-save form
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Overwrite the stored record with the same id
    async fn update_project(&self, record: &EditableRecord) -> Result<(), StoreError>;

    /// Fetch a record by id
    async fn get_project(&self, id: ProjectId) -> Result<Option<EditableRecord>, StoreError>;

    /// Create a record with a freshly allocated id
    async fn create_project(
        &self,
        title: &str,
        subhead: &str,
        description: &str,
    ) -> Result<EditableRecord, StoreError>;

    /// All records ordered by id
    async fn list_projects(&self) -> Result<Vec<EditableRecord>, StoreError>;
}

/// In-memory store
///
/// Keeps every record passed to `update_project`, in call order, so callers
/// can observe how many saves actually reached persistence.
#[derive(Debug)]
pub struct MemoryStore {
    records: RwLock<BTreeMap<ProjectId, EditableRecord>>,
    updates: RwLock<Vec<EditableRecord>>,
    next_id: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
            updates: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Seed the store with an existing record
    pub fn insert(&self, record: EditableRecord) {
        let id = record.id();
        self.next_id.fetch_max(id.0.saturating_add(1), Ordering::SeqCst);
        self.records.write().insert(id, record);
    }

    /// Every record received by `update_project`, oldest first
    pub fn updates(&self) -> Vec<EditableRecord> {
        self.updates.read().clone()
    }

    pub fn update_count(&self) -> usize {
        self.updates.read().len()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectStore for MemoryStore {
    async fn update_project(&self, record: &EditableRecord) -> Result<(), StoreError> {
        let mut records = self.records.write();
        let slot = records
            .get_mut(&record.id())
            .ok_or(StoreError::NotFound(record.id()))?;
        *slot = record.clone();
        self.updates.write().push(record.clone());
        Ok(())
    }

    async fn get_project(&self, id: ProjectId) -> Result<Option<EditableRecord>, StoreError> {
        Ok(self.records.read().get(&id).cloned())
    }

    async fn create_project(
        &self,
        title: &str,
        subhead: &str,
        description: &str,
    ) -> Result<EditableRecord, StoreError> {
        let id = ProjectId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let record = EditableRecord::new(id, title, subhead, description);
        self.records.write().insert(id, record.clone());
        Ok(record)
    }

    async fn list_projects(&self) -> Result<Vec<EditableRecord>, StoreError> {
        Ok(self.records.read().values().cloned().collect())
    }
}

/// Store backed by a sled database
///
/// Records live in the `projects` tree, keyed by big-endian id so iteration
/// follows id order, with bincode-encoded values.
pub struct SledStore {
    db: sled::Db,
    projects: sled::Tree,
}

impl SledStore {
    /// Open or create a store in the given directory
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        let projects = db.open_tree("projects")?;
        debug!("Opened project store at {}", path.display());
        Ok(Self { db, projects })
    }

    fn key(id: ProjectId) -> [u8; 8] {
        id.0.to_be_bytes()
    }

    fn write(&self, record: &EditableRecord) -> Result<(), StoreError> {
        let value = bincode::serialize(record)?;
        self.projects.insert(Self::key(record.id()), value)?;
        self.projects.flush()?;
        Ok(())
    }
}

#[async_trait]
impl ProjectStore for SledStore {
    async fn update_project(&self, record: &EditableRecord) -> Result<(), StoreError> {
        if !self.projects.contains_key(Self::key(record.id()))? {
            return Err(StoreError::NotFound(record.id()));
        }
        self.write(record)?;
        debug!("Updated project {}", record.id());
        Ok(())
    }

    async fn get_project(&self, id: ProjectId) -> Result<Option<EditableRecord>, StoreError> {
        match self.projects.get(Self::key(id))? {
            Some(value) => Ok(Some(bincode::deserialize(&value)?)),
            None => Ok(None),
        }
    }

    async fn create_project(
        &self,
        title: &str,
        subhead: &str,
        description: &str,
    ) -> Result<EditableRecord, StoreError> {
        // sled ids start at 0; keep 0 free
        let id = ProjectId(self.db.generate_id()? + 1);
        let record = EditableRecord::new(id, title, subhead, description);
        self.write(&record)?;
        Ok(record)
    }

    async fn list_projects(&self) -> Result<Vec<EditableRecord>, StoreError> {
        let mut records = Vec::new();
        for item in self.projects.iter() {
            let (_, value) = item?;
            records.push(bincode::deserialize(&value)?);
        }
        Ok(records)
    }
}
