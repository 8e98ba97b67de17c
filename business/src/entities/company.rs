use serde::{Deserialize, Serialize};
use ustr::Ustr;

use super::options;
use crate::management::Tabular;
use crate::management::crud::{ConfirmPrompt, Editable, Record};
use crate::management::form::{FormDraft, FormField, Status};
use crate::management::list::{Capabilities, Cell, ListConfig, ManagementRow, Tone};

options! {
    pub enum CompanyStatus {
        Active => "Active",
        Pending => "Pending",
        Inactive => "Inactive",
    }
}

impl Status for CompanyStatus {
    fn tone(self) -> Tone {
        match self {
            Self::Active => Tone::Positive,
            Self::Pending => Tone::Warning,
            Self::Inactive => Tone::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: Ustr,
    pub name: String,
    pub contact: String,
    pub active_jobs: u32,
    pub city: String,
    pub status: CompanyStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyDraft {
    pub name: String,
    pub contact: String,
    pub city: String,
    pub status: CompanyStatus,
}

impl FormDraft for CompanyDraft {
    fn fields(&mut self) -> Vec<FormField<'_>> {
        vec![
            FormField::text("Company name", &mut self.name, "SafeKeys Ltd"),
            FormField::text("Contact person", &mut self.contact, "Emma Johnson"),
            FormField::text("City", &mut self.city, "London"),
            FormField::choice("Status", &mut self.status),
        ]
    }
}

impl Record for Company {
    type Draft = CompanyDraft;

    fn id(&self) -> Ustr {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn delete_prompt(&self) -> ConfirmPrompt {
        ConfirmPrompt::delete(
            "Delete company?",
            format!("Are you sure you want to remove {}?", self.name),
        )
    }
}

impl Editable for Company {
    const ID_PREFIX: &'static str = "co";
    const NOUN: &'static str = "company";

    fn create(id: Ustr, draft: CompanyDraft) -> Self {
        Self {
            id,
            name: draft.name,
            contact: draft.contact,
            active_jobs: 0,
            city: draft.city,
            status: draft.status,
        }
    }

    fn merge(&self, draft: CompanyDraft) -> Self {
        Self {
            name: draft.name,
            contact: draft.contact,
            city: draft.city,
            status: draft.status,
            ..self.clone()
        }
    }

    fn to_draft(&self) -> CompanyDraft {
        CompanyDraft {
            name: self.name.clone(),
            contact: self.contact.clone(),
            city: self.city.clone(),
            status: self.status,
        }
    }
}

impl Tabular for Company {
    const LIST: ListConfig = ListConfig {
        title: "Companies list",
        description: Some("Onboard, review and maintain company accounts."),
        entity_label: "Company",
        columns: &["Company", "Contact", "Active jobs", "City", "Status"],
        capabilities: Capabilities::ALL,
    };
    const RESOURCE: &'static str = "companies";

    fn to_row(&self) -> ManagementRow {
        ManagementRow::new(
            self.id,
            vec![
                Cell::text(&self.name),
                Cell::text(&self.contact),
                Cell::from(self.active_jobs),
                Cell::text(&self.city),
                Cell::Badge(self.status.badge()),
            ],
        )
    }
}

impl Company {
    pub fn seed() -> Vec<Self> {
        [
            ("co-1", "SafeKeys Ltd", "Emma Johnson", 12, "London", CompanyStatus::Active),
            ("co-2", "DoorFix Solutions", "Adam Brown", 7, "Manchester", CompanyStatus::Active),
            ("co-3", "Rapid Locks UK", "Chloe Evans", 0, "Bristol", CompanyStatus::Pending),
            ("co-4", "City Access Services", "Robert Harris", 0, "Leeds", CompanyStatus::Inactive),
        ]
        .into_iter()
        .map(|(id, name, contact, active_jobs, city, status)| Self {
            id: Ustr::from(id),
            name: name.to_owned(),
            contact: contact.to_owned(),
            active_jobs,
            city: city.to_owned(),
            status,
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::management::EntityModule;

    #[test]
    fn test_leeds_search_matches_city_only_rows() {
        let mut module = EntityModule::in_memory(Company::seed());
        module.list.search = "leeds".to_owned();

        let visible = module.visible_rows();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].cells[3], Cell::text("Leeds"));
    }

    #[test]
    fn test_count_line_appends_plain_s() {
        let module = EntityModule::in_memory(Company::seed());
        assert_eq!(module.count_line(), "4 Companys in total");
    }

    #[test]
    fn test_delete_removes_by_id() {
        let mut module = EntityModule::in_memory(Company::seed());
        assert!(module.crud.request_delete(Ustr::from("co-2")));
        module.crud.confirm_delete().unwrap();

        assert_eq!(module.crud.records().len(), 3);
        assert!(module.crud.find(Ustr::from("co-2")).is_none());
    }
}
