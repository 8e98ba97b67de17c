//! Admin alerts, grouped by day label.

use std::any::Any;

use log::warn;
use serde::{Deserialize, Serialize};
use syc_states::State;
use ustr::Ustr;

use crate::management::crud::{ConfirmPrompt, CrudOrchestrator, CrudOutcome, Record};
use crate::management::list::Tone;
use crate::repository::InMemoryRepository;

pub const EMPTY_TITLE: &str = "No Notifications Yet";
pub const EMPTY_BODY: &str =
    "You’ll see admin alerts here when reports are generated or activity needs your attention.";

/// Group label used when a notification carries no date label.
pub const OTHER_GROUP: &str = "Other";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    #[default]
    Info,
    Success,
    Warning,
}

impl NotificationVariant {
    pub fn tone(self) -> Tone {
        match self {
            Self::Info => Tone::Neutral,
            Self::Success => Tone::Positive,
            Self::Warning => Tone::Warning,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Ustr,
    pub title: String,
    pub body: String,
    /// `Today`, `Yesterday`, `This week` or free text. Blank means `Other`.
    pub date_label: String,
    pub time_label: String,
    /// Avatar letter.
    pub initial: char,
    pub variant: NotificationVariant,
}

impl Record for Notification {
    type Draft = ();

    fn id(&self) -> Ustr {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn delete_prompt(&self) -> ConfirmPrompt {
        ConfirmPrompt::delete(
            "Delete this notification?",
            format!("Are you sure you want to delete “{}”?", self.title),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationGroup<'a> {
    pub label: &'a str,
    pub items: Vec<&'a Notification>,
}

fn group_priority(label: &str) -> u8 {
    match label {
        "Today" => 0,
        "Yesterday" => 1,
        "This week" => 2,
        _ => 3,
    }
}

/// Groups by date label in first-seen order, then moves `Today`,
/// `Yesterday` and `This week` to the front. The sort is stable, so other
/// labels keep the order they first appeared in.
pub fn group_by_day(notifications: &[Notification]) -> Vec<NotificationGroup<'_>> {
    let mut groups: Vec<NotificationGroup<'_>> = Vec::new();
    for notification in notifications {
        let label = match notification.date_label.trim() {
            "" => OTHER_GROUP,
            _ => notification.date_label.as_str(),
        };
        match groups.iter_mut().find(|group| group.label == label) {
            Some(group) => group.items.push(notification),
            None => groups.push(NotificationGroup {
                label,
                items: vec![notification],
            }),
        }
    }
    groups.sort_by_key(|group| group_priority(group.label));
    groups
}

/// Notification feed with the delete-confirm workflow.
pub struct NotificationCenter {
    pub crud: CrudOrchestrator<Notification, InMemoryRepository<Notification>>,
}

impl std::fmt::Debug for NotificationCenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationCenter")
            .field("crud", &self.crud)
            .finish()
    }
}

impl NotificationCenter {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self {
            crud: CrudOrchestrator::new(InMemoryRepository::new(notifications)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed())
    }

    pub fn is_empty(&self) -> bool {
        self.crud.records().is_empty()
    }

    pub fn groups(&self) -> Vec<NotificationGroup<'_>> {
        group_by_day(self.crud.records())
    }

    pub fn request_delete(&mut self, id: Ustr) -> bool {
        self.crud.request_delete(id)
    }

    pub fn confirm_delete(&mut self) -> Option<CrudOutcome> {
        self.crud.confirm_delete().unwrap_or_else(|err| {
            warn!("Notification was not deleted: {err}");
            None
        })
    }
}

impl State for NotificationCenter {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

pub fn seed() -> Vec<Notification> {
    [
        (
            "n-1",
            "Daily company report ready",
            "The daily company report for today has been generated.",
            "Today",
            "09:12",
            'R',
            NotificationVariant::Success,
        ),
        (
            "n-2",
            "New company pending approval",
            "SafeKeys Ltd submitted onboarding documents for review.",
            "Today",
            "08:40",
            'C',
            NotificationVariant::Info,
        ),
        (
            "n-3",
            "Cancellation spike",
            "Customer no-shows are up 18% compared to last week.",
            "Yesterday",
            "17:05",
            'W',
            NotificationVariant::Warning,
        ),
        (
            "n-4",
            "Operator shift change",
            "Operator 02 moved from the morning to the evening shift.",
            "This week",
            "Mon 14:20",
            'O',
            NotificationVariant::Info,
        ),
        (
            "n-5",
            "Payout export completed",
            "Locksmith revenue export for last month is available.",
            "Earlier",
            "02 Dec",
            'P',
            NotificationVariant::Success,
        ),
    ]
    .into_iter()
    .map(|(id, title, body, date_label, time_label, initial, variant)| Notification {
        id: Ustr::from(id),
        title: title.to_owned(),
        body: body.to_owned(),
        date_label: date_label.to_owned(),
        time_label: time_label.to_owned(),
        initial,
        variant,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: &str, date_label: &str) -> Notification {
        Notification {
            id: Ustr::from(id),
            title: id.to_owned(),
            body: String::new(),
            date_label: date_label.to_owned(),
            time_label: String::new(),
            initial: 'N',
            variant: NotificationVariant::Info,
        }
    }

    #[test]
    fn test_groups_are_ordered_by_priority_then_first_seen() {
        let notes = [
            note("a", "Last month"),
            note("b", "This week"),
            note("c", ""),
            note("d", "Today"),
            note("e", "Yesterday"),
            note("f", "Today"),
        ];
        let groups = group_by_day(&notes);

        let labels: Vec<_> = groups.iter().map(|group| group.label).collect();
        assert_eq!(labels, ["Today", "Yesterday", "This week", "Last month", "Other"]);
        let today: Vec<_> = groups[0].items.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(today, ["d", "f"]);
    }

    #[test]
    fn test_delete_goes_through_confirmation() {
        let mut center = NotificationCenter::seeded();
        assert!(center.request_delete(Ustr::from("n-3")));

        let prompt = center.crud.delete_target().unwrap().delete_prompt();
        assert_eq!(prompt.message, "Are you sure you want to delete “Cancellation spike”?");

        assert_eq!(
            center.confirm_delete(),
            Some(CrudOutcome::Deleted(Ustr::from("n-3")))
        );
        let labels: Vec<_> = center.groups().iter().map(|group| group.label).collect();
        assert_eq!(labels, ["Today", "This week", "Earlier"]);
    }

    #[test]
    fn test_empty_center() {
        let center = NotificationCenter::new(Vec::new());

        assert!(center.is_empty());
        assert!(center.groups().is_empty());
    }

    #[test]
    fn test_variant_serializes_lowercase() {
        let json = serde_json::to_string(&NotificationVariant::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
    }
}
