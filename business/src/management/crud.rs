//! Add / edit / delete workflow shared by every management page.
//!
//! The orchestrator is a small state machine:
//!
//! ```text
//! Idle ──add/edit──▶ DrawerOpen ──submit/cancel──▶ Idle
//! Idle ──delete────▶ ConfirmingDelete ──confirm/cancel──▶ Idle
//! ```
//!
//! Intents that do not fit the current phase are dropped with a debug log,
//! so a stray click while a dialog is open never mutates data.

use std::any::Any;
use std::fmt::Debug;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use syc_states::State;
use ustr::Ustr;

use super::ids::IdGenerator;
use super::list::ListEvent;
use crate::repository::{Repository, RepositoryError};

/// Text of a confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub message: String,
    pub confirm_label: &'static str,
    pub cancel_label: &'static str,
}

impl ConfirmPrompt {
    pub fn delete(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            confirm_label: "Delete",
            cancel_label: "Cancel",
        }
    }
}

/// Anything a repository can hold.
pub trait Record: Clone + Debug + 'static {
    /// Editable fields collected by the form. Delete-only records use `()`.
    type Draft: Clone + Default + Debug + PartialEq;

    fn id(&self) -> Ustr;

    fn display_name(&self) -> &str;

    fn delete_prompt(&self) -> ConfirmPrompt;
}

/// Records that can be created and edited through a form.
pub trait Editable: Record {
    /// Prefix of generated ids, e.g. `ls` for `ls-1765000000123`.
    const ID_PREFIX: &'static str;

    /// Lowercase noun used in form titles, e.g. `locksmith`.
    const NOUN: &'static str;

    /// Builds a new record with owner defaults for fields the form omits.
    fn create(id: Ustr, draft: Self::Draft) -> Self;

    /// Applies `draft` over `self`, keeping `id` and owner-only fields.
    fn merge(&self, draft: Self::Draft) -> Self;

    fn to_draft(&self) -> Self::Draft;
}

#[derive(Debug, Clone, PartialEq)]
pub enum CrudPhase<T: Record> {
    Idle,
    DrawerOpen {
        /// `None` when adding.
        editing: Option<T>,
        draft: T::Draft,
    },
    ConfirmingDelete(T),
}

impl<T: Record> Default for CrudPhase<T> {
    fn default() -> Self {
        Self::Idle
    }
}

/// What a submit or confirm did to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrudOutcome {
    Created(Ustr),
    Updated(Ustr),
    Deleted(Ustr),
}

pub struct CrudOrchestrator<T: Record, R: Repository<T>> {
    repo: R,
    phase: CrudPhase<T>,
    ids: IdGenerator,
}

impl<T: Record, R: Repository<T>> Debug for CrudOrchestrator<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrudOrchestrator")
            .field("records", &self.repo.list().len())
            .field("phase", &self.phase)
            .finish()
    }
}

impl<T: Record, R: Repository<T>> CrudOrchestrator<T, R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            phase: CrudPhase::Idle,
            ids: IdGenerator::new(),
        }
    }

    pub fn records(&self) -> &[T] {
        self.repo.list()
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn repository_mut(&mut self) -> &mut R {
        &mut self.repo
    }

    pub fn phase(&self) -> &CrudPhase<T> {
        &self.phase
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, CrudPhase::Idle)
    }

    pub fn find(&self, id: Ustr) -> Option<&T> {
        self.repo.get(id)
    }

    /// The record awaiting delete confirmation.
    pub fn delete_target(&self) -> Option<&T> {
        match &self.phase {
            CrudPhase::ConfirmingDelete(target) => Some(target),
            _ => None,
        }
    }

    /// `Idle → ConfirmingDelete`. Returns whether the phase changed.
    pub fn request_delete(&mut self, id: Ustr) -> bool {
        if !self.is_idle() {
            debug!("Ignoring delete of {id}: orchestrator busy");
            return false;
        }
        let Some(target) = self.repo.get(id).cloned() else {
            debug!("Ignoring delete of unknown id {id}");
            return false;
        };
        self.phase = CrudPhase::ConfirmingDelete(target);
        true
    }

    pub fn cancel_delete(&mut self) {
        if matches!(self.phase, CrudPhase::ConfirmingDelete(_)) {
            self.phase = CrudPhase::Idle;
        }
    }

    /// Removes the pending target and returns to `Idle`.
    ///
    /// The phase resets even when the repository refuses, so a failed delete
    /// never traps the user in the dialog.
    pub fn confirm_delete(&mut self) -> Result<Option<CrudOutcome>, RepositoryError> {
        let CrudPhase::ConfirmingDelete(target) = std::mem::take(&mut self.phase) else {
            debug!("Ignoring delete confirmation outside ConfirmingDelete");
            return Ok(None);
        };
        let id = target.id();
        match self.repo.remove(id) {
            Ok(_) => {
                info!("Deleted {id}");
                Ok(Some(CrudOutcome::Deleted(id)))
            }
            Err(err) => {
                warn!("Failed to delete {id}: {err}");
                Err(err)
            }
        }
    }
}

impl<T: Editable, R: Repository<T>> CrudOrchestrator<T, R> {
    /// `Idle → DrawerOpen(None)` with a default draft.
    pub fn open_add(&mut self) -> bool {
        if !self.is_idle() {
            debug!("Ignoring add: orchestrator busy");
            return false;
        }
        self.phase = CrudPhase::DrawerOpen {
            editing: None,
            draft: T::Draft::default(),
        };
        true
    }

    /// `Idle → DrawerOpen(Some(record))` with the record's fields as draft.
    pub fn open_edit(&mut self, id: Ustr) -> bool {
        if !self.is_idle() {
            debug!("Ignoring edit of {id}: orchestrator busy");
            return false;
        }
        let Some(record) = self.repo.get(id).cloned() else {
            debug!("Ignoring edit of unknown id {id}");
            return false;
        };
        self.phase = CrudPhase::DrawerOpen {
            draft: record.to_draft(),
            editing: Some(record),
        };
        true
    }

    pub fn is_drawer_open(&self) -> bool {
        matches!(self.phase, CrudPhase::DrawerOpen { .. })
    }

    pub fn editing(&self) -> Option<&T> {
        match &self.phase {
            CrudPhase::DrawerOpen { editing, .. } => editing.as_ref(),
            _ => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut T::Draft> {
        match &mut self.phase {
            CrudPhase::DrawerOpen { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Closes the drawer and discards the draft.
    pub fn cancel_drawer(&mut self) {
        if self.is_drawer_open() {
            self.phase = CrudPhase::Idle;
        }
    }

    /// `"Add locksmith"` or `"Edit locksmith"`.
    pub fn form_title(&self) -> String {
        if self.editing().is_some() {
            format!("Edit {}", T::NOUN)
        } else {
            format!("Add {}", T::NOUN)
        }
    }

    pub fn submit_label(&self) -> String {
        if self.editing().is_some() {
            "Save changes →".to_owned()
        } else {
            format!("Create {} →", T::NOUN)
        }
    }

    /// Applies the open draft: merge over the edited record, or prepend a new
    /// one with a fresh id. Always returns to `Idle`.
    pub fn submit(&mut self, now: DateTime<Utc>) -> Result<Option<CrudOutcome>, RepositoryError> {
        let CrudPhase::DrawerOpen { editing, draft } = std::mem::take(&mut self.phase) else {
            debug!("Ignoring submit outside DrawerOpen");
            return Ok(None);
        };

        match editing {
            Some(existing) => {
                let updated = existing.merge(draft);
                let id = updated.id();
                self.repo.update(updated)?;
                info!("Updated {id}");
                Ok(Some(CrudOutcome::Updated(id)))
            }
            None => {
                let id = self.ids.next(T::ID_PREFIX, now);
                self.repo.create(T::create(id, draft))?;
                info!("Created {id}");
                Ok(Some(CrudOutcome::Created(id)))
            }
        }
    }

    /// Routes a table intent to the matching transition.
    pub fn handle(&mut self, event: ListEvent) -> bool {
        match event {
            ListEvent::Add => self.open_add(),
            ListEvent::Edit(id) => self.open_edit(id),
            ListEvent::Delete(id) => self.request_delete(id),
        }
    }
}

impl<T: Record, R: Repository<T> + 'static> State for CrudOrchestrator<T, R> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
