//! Management pages: one searchable table plus the shared CRUD workflow,
//! instantiated per entity type.

pub mod crud;
pub mod form;
pub mod ids;
pub mod list;

use std::any::Any;

use log::info;
use serde::Serialize;
use syc_states::State;

use crate::BusinessConfig;
use crate::export::ExportTable;
use crate::repository::{InMemoryRepository, RemoteRepository, Repository, SyncEvent};
use crud::{CrudOrchestrator, Record};
use list::{ListConfig, ListState, ManagementRow};

/// Records that render as a management table row.
pub trait Tabular: Record + Serialize {
    const LIST: ListConfig;

    /// Collection segment used for remote sync, e.g. `locksmiths`.
    const RESOURCE: &'static str;

    /// Cells aligned with [`ListConfig::columns`].
    fn to_row(&self) -> ManagementRow;
}

pub type DynRepository<T> = Box<dyn Repository<T>>;

/// Everything one management page owns.
pub struct EntityModule<T: Record> {
    pub crud: CrudOrchestrator<T, DynRepository<T>>,
    pub list: ListState,
}

impl<T: Record> std::fmt::Debug for EntityModule<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityModule")
            .field("crud", &self.crud)
            .field("list", &self.list)
            .finish()
    }
}

impl<T: Tabular> EntityModule<T> {
    pub fn new(repo: impl Repository<T> + 'static) -> Self {
        Self {
            crud: CrudOrchestrator::new(Box::new(repo)),
            list: ListState::default(),
        }
    }

    pub fn in_memory(seed: Vec<T>) -> Self {
        Self::new(InMemoryRepository::new(seed))
    }

    /// Local fixtures, mirrored to the backend when `remote_sync` is on.
    pub fn open(config: &BusinessConfig, seed: Vec<T>) -> Self {
        if config.remote_sync {
            let url = config.resource_url(T::RESOURCE);
            info!("{} syncing to {url}", T::LIST.title);
            Self::new(RemoteRepository::new(url, seed))
        } else {
            Self::in_memory(seed)
        }
    }

    pub fn config(&self) -> ListConfig {
        T::LIST
    }

    pub fn rows(&self) -> Vec<ManagementRow> {
        self.crud.records().iter().map(Tabular::to_row).collect()
    }

    pub fn count_line(&self) -> String {
        T::LIST.count_line(self.crud.records().len())
    }

    /// The filtered rows the table is showing right now.
    pub fn visible_rows(&self) -> Vec<ManagementRow> {
        self.list
            .visible(&self.rows())
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn export(&self) -> ExportTable {
        let rows = self.visible_rows();
        ExportTable::from_cells(
            T::LIST.title,
            T::LIST.columns,
            rows.iter().map(|row| row.cells.as_slice()),
        )
    }

    pub fn poll_sync(&mut self) -> Vec<SyncEvent> {
        self.crud.repository_mut().poll_sync()
    }
}

impl<T: Record> State for EntityModule<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
