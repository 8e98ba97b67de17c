//! Storage seam between the CRUD workflow and wherever records live.

mod memory;
mod remote;

pub use memory::InMemoryRepository;
pub use remote::{RemoteRepository, SyncEvent, SyncOp};

use thiserror::Error;
use ustr::Ustr;

use crate::management::crud::Record;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("No record with id {0}")]
    NotFound(Ustr),
    #[error("A record with id {0} already exists")]
    DuplicateId(Ustr),
    #[error("Remote sync failed: {0}")]
    Remote(String),
}

/// Ordered collection of records keyed by id.
///
/// Newly created records go to the front, matching how the tables show the
/// latest addition first.
pub trait Repository<T: Record> {
    fn list(&self) -> &[T];

    fn get(&self, id: Ustr) -> Option<&T> {
        self.list().iter().find(|record| record.id() == id)
    }

    fn create(&mut self, record: T) -> Result<(), RepositoryError>;

    /// Replaces the record with the same id, keeping its position.
    fn update(&mut self, record: T) -> Result<(), RepositoryError>;

    fn remove(&mut self, id: Ustr) -> Result<T, RepositoryError>;

    /// Drains finished background writes. Local stores have none.
    fn poll_sync(&mut self) -> Vec<SyncEvent> {
        Vec::new()
    }
}

impl<T: Record, R: Repository<T> + ?Sized> Repository<T> for Box<R> {
    fn list(&self) -> &[T] {
        (**self).list()
    }

    fn create(&mut self, record: T) -> Result<(), RepositoryError> {
        (**self).create(record)
    }

    fn update(&mut self, record: T) -> Result<(), RepositoryError> {
        (**self).update(record)
    }

    fn remove(&mut self, id: Ustr) -> Result<T, RepositoryError> {
        (**self).remove(id)
    }

    fn poll_sync(&mut self) -> Vec<SyncEvent> {
        (**self).poll_sync()
    }
}
