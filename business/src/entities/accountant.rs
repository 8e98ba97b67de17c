use serde::{Deserialize, Serialize};
use ustr::Ustr;

use super::options;
use crate::management::Tabular;
use crate::management::crud::{ConfirmPrompt, Editable, Record};
use crate::management::form::{FormDraft, FormField, Status};
use crate::management::list::{Capabilities, Cell, ListConfig, ManagementRow, Tone};

/// Shown until the first sign-in is recorded.
pub const NEVER_LOGGED_IN: &str = "Never";

options! {
    pub enum AccountantStatus {
        Active => "Active",
        Suspended => "Suspended",
    }
}

impl Status for AccountantStatus {
    fn tone(self) -> Tone {
        match self {
            Self::Active => Tone::Positive,
            Self::Suspended => Tone::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accountant {
    pub id: Ustr,
    pub name: String,
    pub email: String,
    pub role: String,
    pub last_login: String,
    pub status: AccountantStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountantDraft {
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: AccountantStatus,
}

impl FormDraft for AccountantDraft {
    fn fields(&mut self) -> Vec<FormField<'_>> {
        vec![
            FormField::text("Full name", &mut self.name, "Sarah Collins"),
            FormField::text("Email address", &mut self.email, "sarah.collins@company.com"),
            FormField::text("Role", &mut self.role, "Lead Accountant"),
            FormField::choice("Status", &mut self.status),
        ]
    }
}

impl Record for Accountant {
    type Draft = AccountantDraft;

    fn id(&self) -> Ustr {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn delete_prompt(&self) -> ConfirmPrompt {
        ConfirmPrompt::delete(
            "Delete accountant?",
            format!("Are you sure you want to remove {} from accountants?", self.name),
        )
    }
}

impl Editable for Accountant {
    const ID_PREFIX: &'static str = "ac";
    const NOUN: &'static str = "accountant";

    fn create(id: Ustr, draft: AccountantDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            role: draft.role,
            last_login: NEVER_LOGGED_IN.to_owned(),
            status: draft.status,
        }
    }

    fn merge(&self, draft: AccountantDraft) -> Self {
        Self {
            name: draft.name,
            email: draft.email,
            role: draft.role,
            status: draft.status,
            ..self.clone()
        }
    }

    fn to_draft(&self) -> AccountantDraft {
        AccountantDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
            status: self.status,
        }
    }
}

impl Tabular for Accountant {
    const LIST: ListConfig = ListConfig {
        title: "Accountants list",
        description: Some("Control access to financial reporting and exports."),
        entity_label: "Accountant",
        columns: &["Name", "Email", "Role", "Last login", "Status"],
        capabilities: Capabilities::ALL,
    };
    const RESOURCE: &'static str = "accountants";

    fn to_row(&self) -> ManagementRow {
        ManagementRow::new(
            self.id,
            vec![
                Cell::text(&self.name),
                Cell::text(&self.email),
                Cell::text(&self.role),
                Cell::text(&self.last_login),
                Cell::Badge(self.status.badge()),
            ],
        )
    }
}

impl Accountant {
    pub fn seed() -> Vec<Self> {
        [
            (
                "ac-1",
                "Sarah Collins",
                "sarah.collins@company.com",
                "Lead Accountant",
                "Today, 09:14",
                AccountantStatus::Active,
            ),
            (
                "ac-2",
                "Michael Turner",
                "michael.turner@company.com",
                "Revenue Analyst",
                "Yesterday, 17:42",
                AccountantStatus::Active,
            ),
            (
                "ac-3",
                "Laura Fisher",
                "laura.fisher@company.com",
                "Junior Accountant",
                "3 days ago",
                AccountantStatus::Suspended,
            ),
        ]
        .into_iter()
        .map(|(id, name, email, role, last_login, status)| Self {
            id: Ustr::from(id),
            name: name.to_owned(),
            email: email.to_owned(),
            role: role.to_owned(),
            last_login: last_login.to_owned(),
            status,
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accountant_never_logged_in() {
        let created = Accountant::create(Ustr::from("ac-9"), AccountantDraft::default());
        assert_eq!(created.last_login, "Never");
    }

    #[test]
    fn test_merge_keeps_last_login() {
        let original = &Accountant::seed()[1];
        let mut draft = original.to_draft();
        draft.status = AccountantStatus::Suspended;

        let merged = original.merge(draft);

        assert_eq!(merged.id, original.id);
        assert_eq!(merged.last_login, "Yesterday, 17:42");
        assert_eq!(merged.status, AccountantStatus::Suspended);
    }
}
