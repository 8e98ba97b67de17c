use serde::{Deserialize, Serialize};
use ustr::Ustr;

use super::options;
use crate::management::Tabular;
use crate::management::crud::{ConfirmPrompt, Editable, Record};
use crate::management::form::{FormDraft, FormField, Status};
use crate::management::list::{Capabilities, Cell, ListConfig, ManagementRow, Tone};

options! {
    pub enum EmailStatus {
        Active => "Active",
        Limited => "Limited",
        Disabled => "Disabled",
    }
}

impl Status for EmailStatus {
    fn tone(self) -> Tone {
        match self {
            Self::Active => Tone::Positive,
            Self::Limited => Tone::Warning,
            Self::Disabled => Tone::Neutral,
        }
    }
}

/// A mailbox that receives alerts or reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddress {
    pub id: Ustr,
    pub label: String,
    pub email: String,
    /// Free text such as `System`, `Support` or `Reports`.
    #[serde(rename = "type")]
    pub kind: String,
    pub linked_to: String,
    pub status: EmailStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddressDraft {
    pub label: String,
    pub email: String,
    pub kind: String,
    pub linked_to: String,
    pub status: EmailStatus,
}

impl Default for EmailAddressDraft {
    fn default() -> Self {
        Self {
            label: String::new(),
            email: String::new(),
            kind: "System".to_owned(),
            linked_to: String::new(),
            status: EmailStatus::Active,
        }
    }
}

impl FormDraft for EmailAddressDraft {
    fn fields(&mut self) -> Vec<FormField<'_>> {
        vec![
            FormField::text("Label", &mut self.label, "System notifications"),
            FormField::text("Email address", &mut self.email, "no-reply@sycmobile.com"),
            FormField::text("Type", &mut self.kind, "System / Support / Reports"),
            FormField::text("Linked to", &mut self.linked_to, "Platform, Support team, Accounting..."),
            FormField::choice("Status", &mut self.status),
        ]
    }
}

impl Record for EmailAddress {
    type Draft = EmailAddressDraft;

    fn id(&self) -> Ustr {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.label
    }

    fn delete_prompt(&self) -> ConfirmPrompt {
        ConfirmPrompt::delete(
            "Delete email address?",
            format!("Are you sure you want to remove {}?", self.label),
        )
    }
}

impl Editable for EmailAddress {
    const ID_PREFIX: &'static str = "em";
    const NOUN: &'static str = "email address";

    fn create(id: Ustr, draft: EmailAddressDraft) -> Self {
        Self {
            id,
            label: draft.label,
            email: draft.email,
            kind: draft.kind,
            linked_to: draft.linked_to,
            status: draft.status,
        }
    }

    fn merge(&self, draft: EmailAddressDraft) -> Self {
        Self::create(self.id, draft)
    }

    fn to_draft(&self) -> EmailAddressDraft {
        EmailAddressDraft {
            label: self.label.clone(),
            email: self.email.clone(),
            kind: self.kind.clone(),
            linked_to: self.linked_to.clone(),
            status: self.status,
        }
    }
}

impl Tabular for EmailAddress {
    const LIST: ListConfig = ListConfig {
        title: "Email addresses list",
        description: Some("Control where system alerts and reports are delivered."),
        entity_label: "Email address",
        columns: &["Label", "Email", "Type", "Linked to", "Status"],
        capabilities: Capabilities::ALL,
    };
    const RESOURCE: &'static str = "email-addresses";

    fn to_row(&self) -> ManagementRow {
        ManagementRow::new(
            self.id,
            vec![
                Cell::text(&self.label),
                Cell::text(&self.email),
                Cell::text(&self.kind),
                Cell::text(&self.linked_to),
                Cell::Badge(self.status.badge()),
            ],
        )
    }
}

impl EmailAddress {
    pub fn seed() -> Vec<Self> {
        [
            ("em-1", "System notifications", "no-reply@sycmobile.com", "System", "Platform", EmailStatus::Active),
            ("em-2", "Finance reports", "finance-reports@sycmobile.com", "Reports", "Accounting", EmailStatus::Active),
            ("em-3", "Support inbox", "support@sycmobile.com", "Support", "Support team", EmailStatus::Limited),
            ("em-4", "Legacy alerts", "legacy-alerts@sycmobile.com", "System", "Old system", EmailStatus::Disabled),
        ]
        .into_iter()
        .map(|(id, label, email, kind, linked_to, status)| Self {
            id: Ustr::from(id),
            label: label.to_owned(),
            email: email.to_owned(),
            kind: kind.to_owned(),
            linked_to: linked_to.to_owned(),
            status,
        })
        .collect()
    }
}
