use serde::{Deserialize, Serialize};
use ustr::Ustr;

use super::options;
use crate::management::Tabular;
use crate::management::crud::{ConfirmPrompt, Editable, Record};
use crate::management::form::{FormDraft, FormField, Status};
use crate::management::list::{Capabilities, Cell, ListConfig, ManagementRow, Tone};

options! {
    pub enum LocksmithStatus {
        Active => "Active",
        OnBreak => "On break",
        Inactive => "Inactive",
    }
}

impl Status for LocksmithStatus {
    fn tone(self) -> Tone {
        match self {
            Self::Active => Tone::Positive,
            Self::OnBreak => Tone::Warning,
            Self::Inactive => Tone::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locksmith {
    pub id: Ustr,
    pub name: String,
    pub phone: String,
    pub city: String,
    /// Assigned by dispatch, never edited here.
    pub jobs_today: u32,
    pub status: LocksmithStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocksmithDraft {
    pub name: String,
    pub phone: String,
    pub city: String,
    pub status: LocksmithStatus,
}

impl FormDraft for LocksmithDraft {
    fn fields(&mut self) -> Vec<FormField<'_>> {
        vec![
            FormField::text("Full name", &mut self.name, "John Carter"),
            FormField::text("Phone number", &mut self.phone, "+44 7700 900001"),
            FormField::text("City", &mut self.city, "London"),
            FormField::choice("Status", &mut self.status),
        ]
    }
}

impl Record for Locksmith {
    type Draft = LocksmithDraft;

    fn id(&self) -> Ustr {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn delete_prompt(&self) -> ConfirmPrompt {
        ConfirmPrompt::delete(
            "Delete locksmith?",
            format!("Are you sure you want to remove {} from locksmiths?", self.name),
        )
    }
}

impl Editable for Locksmith {
    const ID_PREFIX: &'static str = "ls";
    const NOUN: &'static str = "locksmith";

    fn create(id: Ustr, draft: LocksmithDraft) -> Self {
        Self {
            id,
            name: draft.name,
            phone: draft.phone,
            city: draft.city,
            jobs_today: 0,
            status: draft.status,
        }
    }

    fn merge(&self, draft: LocksmithDraft) -> Self {
        Self {
            name: draft.name,
            phone: draft.phone,
            city: draft.city,
            status: draft.status,
            ..self.clone()
        }
    }

    fn to_draft(&self) -> LocksmithDraft {
        LocksmithDraft {
            name: self.name.clone(),
            phone: self.phone.clone(),
            city: self.city.clone(),
            status: self.status,
        }
    }
}

impl Tabular for Locksmith {
    const LIST: ListConfig = ListConfig {
        title: "Locksmiths list",
        description: Some("Overview of all locksmiths connected to SYC Mobile."),
        entity_label: "Locksmith",
        columns: &["Name", "Phone", "City", "Jobs today", "Status"],
        capabilities: Capabilities::ALL,
    };
    const RESOURCE: &'static str = "locksmiths";

    fn to_row(&self) -> ManagementRow {
        ManagementRow::new(
            self.id,
            vec![
                Cell::text(&self.name),
                Cell::text(&self.phone),
                Cell::text(&self.city),
                Cell::from(self.jobs_today),
                Cell::Badge(self.status.badge()),
            ],
        )
    }
}

impl Locksmith {
    fn fixture(id: &str, name: &str, phone: &str, city: &str, jobs_today: u32, status: LocksmithStatus) -> Self {
        Self {
            id: Ustr::from(id),
            name: name.to_owned(),
            phone: phone.to_owned(),
            city: city.to_owned(),
            jobs_today,
            status,
        }
    }

    pub fn seed() -> Vec<Self> {
        vec![
            Self::fixture("ls-1", "John Carter", "+44 7700 900001", "London", 6, LocksmithStatus::Active),
            Self::fixture("ls-2", "Emily Brown", "+44 7700 900002", "Manchester", 4, LocksmithStatus::Active),
            Self::fixture("ls-3", "Liam Wilson", "+44 7700 900003", "Birmingham", 0, LocksmithStatus::Inactive),
            Self::fixture("ls-4", "Sophia Green", "+44 7700 900004", "Leeds", 2, LocksmithStatus::OnBreak),
        ]
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone as _, Utc};

    use super::*;
    use crate::management::EntityModule;

    #[test]
    fn test_row_matches_columns() {
        let row = Locksmith::seed()[3].to_row();

        assert_eq!(row.cells.len(), Locksmith::LIST.columns.len());
        assert_eq!(row.cells[3], Cell::Number(2));
        assert_eq!(row.cells[4].display_text(), "On break");
    }

    #[test]
    fn test_status_serializes_as_label() {
        let json = serde_json::to_value(&Locksmith::seed()[3]).unwrap();
        assert_eq!(json["status"], "On break");
        assert_eq!(json["id"], "ls-4");
    }

    #[test]
    fn test_add_defaults_jobs_today() {
        let mut module = EntityModule::in_memory(Locksmith::seed());
        module.crud.open_add();
        *module.crud.draft_mut().unwrap() = LocksmithDraft {
            name: "Ada Lock".to_owned(),
            phone: "+44 7700 900009".to_owned(),
            city: "York".to_owned(),
            status: LocksmithStatus::OnBreak,
        };
        module
            .crud
            .submit(Utc.timestamp_millis_opt(1_765_000_000_000).unwrap())
            .unwrap();

        let added = &module.crud.records()[0];
        assert_eq!(added.id.as_str(), "ls-1765000000000");
        assert_eq!(added.jobs_today, 0);
        assert_eq!(module.count_line(), "5 Locksmiths in total");
    }

    #[test]
    fn test_edit_keeps_jobs_today() {
        let mut module = EntityModule::in_memory(Locksmith::seed());
        module.crud.open_edit(Ustr::from("ls-1"));
        module.crud.draft_mut().unwrap().city = "Oxford".to_owned();
        module.crud.submit(Utc::now()).unwrap();

        let edited = &module.crud.records()[0];
        assert_eq!(edited.city, "Oxford");
        assert_eq!(edited.jobs_today, 6);
    }

    #[test]
    fn test_search_by_city() {
        let mut module = EntityModule::in_memory(Locksmith::seed());
        module.list.search = "leeds".to_owned();

        let visible = module.visible_rows();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id.as_str(), "ls-4");
    }

    #[test]
    fn test_delete_prompt_names_locksmith() {
        let prompt = Locksmith::seed()[0].delete_prompt();
        assert_eq!(prompt.title, "Delete locksmith?");
        assert_eq!(
            prompt.message,
            "Are you sure you want to remove John Carter from locksmiths?"
        );
    }
}
