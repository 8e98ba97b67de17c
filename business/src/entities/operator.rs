use serde::{Deserialize, Serialize};
use ustr::Ustr;

use super::options;
use crate::management::Tabular;
use crate::management::crud::{ConfirmPrompt, Editable, Record};
use crate::management::form::{FormDraft, FormField, Options as _, Status};
use crate::management::list::{Capabilities, Cell, ListConfig, ManagementRow, Tone};

options! {
    pub enum Shift {
        Morning => "Morning",
        Evening => "Evening",
        Night => "Night",
    }
}

options! {
    pub enum OperatorStatus {
        Online => "Online",
        Away => "Away",
        Offline => "Offline",
    }
}

impl Status for OperatorStatus {
    fn tone(self) -> Tone {
        match self {
            Self::Online => Tone::Positive,
            Self::Away => Tone::Warning,
            Self::Offline => Tone::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operator {
    pub id: Ustr,
    pub name: String,
    pub phone: String,
    pub shift: Shift,
    pub active_jobs: u32,
    pub status: OperatorStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperatorDraft {
    pub name: String,
    pub phone: String,
    pub shift: Shift,
    pub status: OperatorStatus,
}

impl FormDraft for OperatorDraft {
    fn fields(&mut self) -> Vec<FormField<'_>> {
        vec![
            FormField::text("Full name", &mut self.name, "Olivia Martin"),
            FormField::text("Phone number", &mut self.phone, "+44 7700 910001"),
            FormField::choice("Shift", &mut self.shift),
            FormField::choice("Status", &mut self.status),
        ]
    }
}

impl Record for Operator {
    type Draft = OperatorDraft;

    fn id(&self) -> Ustr {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn delete_prompt(&self) -> ConfirmPrompt {
        ConfirmPrompt::delete(
            "Delete operator?",
            format!("Are you sure you want to remove {} from operators?", self.name),
        )
    }
}

impl Editable for Operator {
    const ID_PREFIX: &'static str = "op";
    const NOUN: &'static str = "operator";

    fn create(id: Ustr, draft: OperatorDraft) -> Self {
        Self {
            id,
            name: draft.name,
            phone: draft.phone,
            shift: draft.shift,
            active_jobs: 0,
            status: draft.status,
        }
    }

    fn merge(&self, draft: OperatorDraft) -> Self {
        Self {
            name: draft.name,
            phone: draft.phone,
            shift: draft.shift,
            status: draft.status,
            ..self.clone()
        }
    }

    fn to_draft(&self) -> OperatorDraft {
        OperatorDraft {
            name: self.name.clone(),
            phone: self.phone.clone(),
            shift: self.shift,
            status: self.status,
        }
    }
}

impl Tabular for Operator {
    const LIST: ListConfig = ListConfig {
        title: "Operators list",
        description: Some("Overview of all operators and their current workload."),
        entity_label: "Operator",
        columns: &["Name", "Phone", "Shift", "Active jobs", "Status"],
        capabilities: Capabilities::ALL,
    };
    const RESOURCE: &'static str = "operators";

    fn to_row(&self) -> ManagementRow {
        ManagementRow::new(
            self.id,
            vec![
                Cell::text(&self.name),
                Cell::text(&self.phone),
                Cell::text(self.shift.label()),
                Cell::from(self.active_jobs),
                Cell::Badge(self.status.badge()),
            ],
        )
    }
}

impl Operator {
    pub fn seed() -> Vec<Self> {
        [
            ("op-1", "Olivia Martin", "+44 7700 910001", Shift::Morning, 5, OperatorStatus::Online),
            ("op-2", "James Scott", "+44 7700 910002", Shift::Evening, 3, OperatorStatus::Online),
            ("op-3", "Isabella Lee", "+44 7700 910003", Shift::Night, 1, OperatorStatus::Away),
            ("op-4", "Daniel Clark", "+44 7700 910004", Shift::Morning, 0, OperatorStatus::Offline),
        ]
        .into_iter()
        .map(|(id, name, phone, shift, active_jobs, status)| Self {
            id: Ustr::from(id),
            name: name.to_owned(),
            phone: phone.to_owned(),
            shift,
            active_jobs,
            status,
        })
        .collect()
    }
}
