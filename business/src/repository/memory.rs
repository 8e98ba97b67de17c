use ustr::Ustr;

use super::{Repository, RepositoryError};
use crate::management::crud::Record;

/// Vec-backed repository seeded from fixtures.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    records: Vec<T>,
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Record> InMemoryRepository<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }

    fn position(&self, id: Ustr) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }
}

impl<T: Record> Repository<T> for InMemoryRepository<T> {
    fn list(&self) -> &[T] {
        &self.records
    }

    fn create(&mut self, record: T) -> Result<(), RepositoryError> {
        let id = record.id();
        if self.position(id).is_some() {
            return Err(RepositoryError::DuplicateId(id));
        }
        self.records.insert(0, record);
        Ok(())
    }

    fn update(&mut self, record: T) -> Result<(), RepositoryError> {
        let id = record.id();
        let index = self.position(id).ok_or(RepositoryError::NotFound(id))?;
        self.records[index] = record;
        Ok(())
    }

    fn remove(&mut self, id: Ustr) -> Result<T, RepositoryError> {
        let index = self.position(id).ok_or(RepositoryError::NotFound(id))?;
        Ok(self.records.remove(index))
    }
}
