//! Everything the SYC admin dashboard knows, minus the pixels.
//!
//! The UI crate only reads these states and forwards user intent; filtering,
//! CRUD transitions, aggregation and export all live here.

pub mod config;
pub mod dashboard;
pub mod entities;
pub mod export;
pub mod format;
pub mod login_state;
pub mod management;
pub mod notifications;
pub mod profile;
pub mod reports;
pub mod repository;
pub mod route;

pub use config::{BusinessConfig, ConfigError};
pub use dashboard::Dashboard;
pub use export::{ExportError, ExportFormat, ExportTable, PDF_UNAVAILABLE};
pub use login_state::{AdminUser, AuthState, AuthStatus, LoginInput};
pub use management::EntityModule;
pub use notifications::NotificationCenter;
pub use profile::AdminProfile;
pub use repository::{InMemoryRepository, RemoteRepository, Repository, RepositoryError, SyncEvent};
pub use route::Route;
