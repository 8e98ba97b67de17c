use serde::{Deserialize, Serialize};
use ustr::Ustr;

use super::CompanyStatus;
use crate::format::pounds;
use crate::management::Tabular;
use crate::management::crud::{ConfirmPrompt, Editable, Record};
use crate::management::form::{FormDraft, FormField, Status};
use crate::management::list::{Capabilities, Cell, ListConfig, ManagementRow};

/// A company as seen by the company-report section, with lifetime totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyAccount {
    pub id: Ustr,
    pub name: String,
    pub city: String,
    pub contact_name: String,
    pub billing_email: String,
    pub total_jobs: u32,
    pub cancelled_jobs: u32,
    /// Whole pounds.
    pub revenue: i64,
    pub status: CompanyStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyAccountDraft {
    pub name: String,
    pub city: String,
    pub contact_name: String,
    pub billing_email: String,
    pub status: CompanyStatus,
}

impl FormDraft for CompanyAccountDraft {
    fn fields(&mut self) -> Vec<FormField<'_>> {
        vec![
            FormField::text("Company name", &mut self.name, "SafeKeys Ltd"),
            FormField::text("City", &mut self.city, "London"),
            FormField::text("Contact person", &mut self.contact_name, "Emma Johnson"),
            FormField::text("Billing email", &mut self.billing_email, "billing@company.co.uk"),
            FormField::choice("Status", &mut self.status),
        ]
    }
}

impl Record for CompanyAccount {
    type Draft = CompanyAccountDraft;

    fn id(&self) -> Ustr {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn delete_prompt(&self) -> ConfirmPrompt {
        ConfirmPrompt::delete(
            "Remove company?",
            format!(
                "Are you sure you want to remove {} from company reports?",
                self.name
            ),
        )
    }
}

impl Editable for CompanyAccount {
    const ID_PREFIX: &'static str = "rep-co";
    const NOUN: &'static str = "company";

    fn create(id: Ustr, draft: CompanyAccountDraft) -> Self {
        Self {
            id,
            name: draft.name,
            city: draft.city,
            contact_name: draft.contact_name,
            billing_email: draft.billing_email,
            total_jobs: 0,
            cancelled_jobs: 0,
            revenue: 0,
            status: draft.status,
        }
    }

    fn merge(&self, draft: CompanyAccountDraft) -> Self {
        Self {
            name: draft.name,
            city: draft.city,
            contact_name: draft.contact_name,
            billing_email: draft.billing_email,
            status: draft.status,
            ..self.clone()
        }
    }

    fn to_draft(&self) -> CompanyAccountDraft {
        CompanyAccountDraft {
            name: self.name.clone(),
            city: self.city.clone(),
            contact_name: self.contact_name.clone(),
            billing_email: self.billing_email.clone(),
            status: self.status,
        }
    }
}

impl Tabular for CompanyAccount {
    const LIST: ListConfig = ListConfig {
        title: "Company list",
        description: Some(
            "High-level overview of companies using SYC Mobile with aggregated stats.",
        ),
        entity_label: "Company",
        columns: &[
            "Company",
            "Contact",
            "Total jobs",
            "Cancellations",
            "Revenue",
            "Status",
        ],
        capabilities: Capabilities::ALL,
    };
    const RESOURCE: &'static str = "company-accounts";

    fn to_row(&self) -> ManagementRow {
        ManagementRow::new(
            self.id,
            vec![
                Cell::stacked(&self.name, &self.city),
                Cell::stacked(&self.contact_name, &self.billing_email),
                Cell::from(self.total_jobs),
                Cell::from(self.cancelled_jobs),
                Cell::text(pounds(self.revenue)),
                Cell::Badge(self.status.badge()),
            ],
        )
    }
}

impl CompanyAccount {
    pub fn seed() -> Vec<Self> {
        [
            ("rep-co-1", "SafeKeys Ltd", "London", "Emma Johnson", "emma@safekeys.co.uk", 320, 14, 18_250, CompanyStatus::Active),
            ("rep-co-2", "DoorFix Solutions", "Manchester", "Adam Brown", "adam@doorfix.co.uk", 210, 9, 12_680, CompanyStatus::Active),
            ("rep-co-3", "Rapid Locks UK", "Bristol", "Chloe Evans", "chloe@rapidlocks.uk", 95, 7, 6_540, CompanyStatus::Pending),
            ("rep-co-4", "City Access Services", "Leeds", "Robert Harris", "robert@cityaccess.co.uk", 40, 6, 2_800, CompanyStatus::Inactive),
        ]
        .into_iter()
        .map(
            |(id, name, city, contact_name, billing_email, total_jobs, cancelled_jobs, revenue, status)| Self {
                id: Ustr::from(id),
                name: name.to_owned(),
                city: city.to_owned(),
                contact_name: contact_name.to_owned(),
                billing_email: billing_email.to_owned(),
                total_jobs,
                cancelled_jobs,
                revenue,
                status,
            },
        )
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone as _, Utc};

    use super::*;
    use crate::management::EntityModule;
    use crate::management::list::CardView;

    #[test]
    fn test_add_company_defaults_totals_and_prepends() {
        let mut module = EntityModule::in_memory(CompanyAccount::seed());
        module.crud.open_add();
        *module.crud.draft_mut().unwrap() = CompanyAccountDraft {
            name: "Acme".to_owned(),
            city: "Leeds".to_owned(),
            contact_name: "X".to_owned(),
            billing_email: "x@acme.com".to_owned(),
            status: CompanyStatus::Active,
        };
        module
            .crud
            .submit(Utc.timestamp_millis_opt(1_765_432_100_000).unwrap())
            .unwrap();

        let added = &module.crud.records()[0];
        assert_eq!(added.id.as_str(), "rep-co-1765432100000");
        assert_eq!(added.name, "Acme");
        assert_eq!((added.total_jobs, added.cancelled_jobs, added.revenue), (0, 0, 0));
        assert_eq!(module.crud.records().len(), 5);
    }

    #[test]
    fn test_revenue_renders_as_pounds() {
        let row = CompanyAccount::seed()[0].to_row();
        assert_eq!(row.cells[4], Cell::text("£18,250"));
    }

    #[test]
    fn test_search_reaches_stacked_city() {
        let mut module = EntityModule::in_memory(CompanyAccount::seed());
        module.list.search = "leeds".to_owned();

        let visible = module.visible_rows();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id.as_str(), "rep-co-4");
    }

    #[test]
    fn test_card_uses_contact_as_subtitle() {
        let rows = EntityModule::in_memory(CompanyAccount::seed()).rows();
        let has_status = CompanyAccount::LIST.has_status_column(&rows);
        let card: CardView<'_> = CompanyAccount::LIST.card(&rows[0], has_status);

        assert!(has_status);
        assert_eq!(card.subtitle.map(|cell| cell.display_text().into_owned()), Some("Emma Johnson · emma@safekeys.co.uk".to_owned()));
        assert_eq!(
            card.details.iter().map(|(label, _)| *label).collect::<Vec<_>>(),
            ["Total jobs", "Cancellations", "Revenue"]
        );
    }
}
