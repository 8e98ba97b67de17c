//! Admin profile page state.

use std::any::Any;

use log::info;
use syc_states::State;

use crate::entities::options;
use crate::management::crud::ConfirmPrompt;
use crate::management::form::{FormDraft, FormField};

options! {
    pub enum Language {
        English => "English",
        Arabic => "Arabic",
        French => "French",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: String,
    pub email: String,
}

impl FormDraft for ProfileDraft {
    fn fields(&mut self) -> Vec<FormField<'_>> {
        vec![
            FormField::text("Full name", &mut self.name, "Full name"),
            FormField::text("Email", &mut self.email, "you@example.com"),
        ]
    }
}

/// Change-password form. There is no auth service, so a submit only
/// records that a change was requested.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PasswordDraft {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

impl std::fmt::Debug for PasswordDraft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordDraft").finish_non_exhaustive()
    }
}

impl FormDraft for PasswordDraft {
    fn fields(&mut self) -> Vec<FormField<'_>> {
        vec![
            FormField::secret("Current password", &mut self.current, "Current password"),
            FormField::secret("New password", &mut self.new, "New password"),
            FormField::secret("Confirm new password", &mut self.confirm, "Repeat new password"),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Overlay {
    None,
    Editing,
    ChangingPassword,
    ConfirmingLogout,
}

#[derive(Debug, Clone)]
pub struct AdminProfile {
    pub name: String,
    pub email: String,
    pub language: Language,
    overlay: Overlay,
    draft: ProfileDraft,
    password: PasswordDraft,
}

impl Default for AdminProfile {
    fn default() -> Self {
        Self {
            name: "Admin User".to_owned(),
            email: "admin@example.com".to_owned(),
            language: Language::English,
            overlay: Overlay::None,
            draft: ProfileDraft::default(),
            password: PasswordDraft::default(),
        }
    }
}

impl AdminProfile {
    pub fn logout_prompt() -> ConfirmPrompt {
        ConfirmPrompt {
            title: "Log out?".to_owned(),
            message: "You will be signed out of the admin panel and returned to the login page."
                .to_owned(),
            confirm_label: "Yes, log out",
            cancel_label: "Cancel",
        }
    }

    /// First letter of the name, for the avatar.
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .map_or('A', |ch| ch.to_ascii_uppercase())
    }

    pub fn open_edit(&mut self) {
        if self.overlay == Overlay::None {
            self.draft = ProfileDraft {
                name: self.name.clone(),
                email: self.email.clone(),
            };
            self.overlay = Overlay::Editing;
        }
    }

    pub fn is_editing(&self) -> bool {
        self.overlay == Overlay::Editing
    }

    pub fn draft_mut(&mut self) -> Option<&mut ProfileDraft> {
        self.is_editing().then_some(&mut self.draft)
    }

    pub fn cancel_edit(&mut self) {
        if self.is_editing() {
            self.overlay = Overlay::None;
        }
    }

    pub fn save_edit(&mut self) {
        if self.is_editing() {
            let draft = std::mem::take(&mut self.draft);
            self.name = draft.name;
            self.email = draft.email;
            self.overlay = Overlay::None;
            info!("Profile updated for {}", self.email);
        }
    }

    pub fn open_change_password(&mut self) {
        if self.overlay == Overlay::None {
            self.password = PasswordDraft::default();
            self.overlay = Overlay::ChangingPassword;
        }
    }

    pub fn is_changing_password(&self) -> bool {
        self.overlay == Overlay::ChangingPassword
    }

    pub fn password_draft_mut(&mut self) -> Option<&mut PasswordDraft> {
        self.is_changing_password().then_some(&mut self.password)
    }

    /// Closes the form and forgets whatever was typed.
    pub fn cancel_change_password(&mut self) {
        if self.is_changing_password() {
            self.password = PasswordDraft::default();
            self.overlay = Overlay::None;
        }
    }

    /// Logs the request and closes the form. The typed values are dropped,
    /// never logged.
    pub fn submit_change_password(&mut self) {
        if self.is_changing_password() {
            let draft = std::mem::take(&mut self.password);
            info!(
                "Password change requested for {} (confirmation matches: {})",
                self.email,
                draft.new == draft.confirm
            );
            self.overlay = Overlay::None;
        }
    }

    pub fn request_logout(&mut self) {
        if self.overlay == Overlay::None {
            self.overlay = Overlay::ConfirmingLogout;
        }
    }

    pub fn is_confirming_logout(&self) -> bool {
        self.overlay == Overlay::ConfirmingLogout
    }

    pub fn cancel_logout(&mut self) {
        if self.is_confirming_logout() {
            self.overlay = Overlay::None;
        }
    }

    /// Closes the dialog; returns whether the caller should sign out.
    pub fn confirm_logout(&mut self) -> bool {
        let confirmed = self.is_confirming_logout();
        if confirmed {
            self.overlay = Overlay::None;
        }
        confirmed
    }
}

impl State for AdminProfile {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_then_save() {
        let mut profile = AdminProfile::default();
        profile.open_edit();
        profile.draft_mut().unwrap().name = "Sam Carter".to_owned();
        profile.save_edit();

        assert_eq!(profile.name, "Sam Carter");
        assert_eq!(profile.email, "admin@example.com");
        assert_eq!(profile.initial(), 'S');
        assert!(!profile.is_editing());
    }

    #[test]
    fn test_cancel_edit_discards_draft() {
        let mut profile = AdminProfile::default();
        profile.open_edit();
        profile.draft_mut().unwrap().email = "x@y.z".to_owned();
        profile.cancel_edit();

        assert_eq!(profile.email, "admin@example.com");
        assert!(profile.draft_mut().is_none());
    }

    #[test]
    fn test_change_password_closes_and_clears() {
        let mut profile = AdminProfile::default();
        assert!(profile.password_draft_mut().is_none());

        profile.open_change_password();
        assert!(profile.is_changing_password());
        let draft = profile.password_draft_mut().unwrap();
        draft.current = "old".to_owned();
        draft.new = "fresh".to_owned();
        draft.confirm = "fresh".to_owned();

        profile.submit_change_password();
        assert!(!profile.is_changing_password());

        profile.open_change_password();
        assert_eq!(*profile.password_draft_mut().unwrap(), PasswordDraft::default());
    }

    #[test]
    fn test_overlays_are_exclusive() {
        let mut profile = AdminProfile::default();
        profile.open_change_password();
        profile.open_edit();
        profile.request_logout();

        assert!(profile.is_changing_password());
        assert!(!profile.is_editing());
        assert!(!profile.is_confirming_logout());

        profile.cancel_change_password();
        profile.open_edit();
        assert!(profile.is_editing());
    }

    #[test]
    fn test_password_draft_debug_hides_values() {
        let draft = PasswordDraft {
            current: "hunter2".to_owned(),
            ..PasswordDraft::default()
        };
        assert!(!format!("{draft:?}").contains("hunter2"));
    }

    #[test]
    fn test_logout_needs_confirmation() {
        let mut profile = AdminProfile::default();
        assert!(!profile.confirm_logout());

        profile.request_logout();
        assert!(profile.is_confirming_logout());
        profile.cancel_logout();
        assert!(!profile.is_confirming_logout());

        profile.request_logout();
        assert!(profile.confirm_logout());
        assert_eq!(AdminProfile::logout_prompt().confirm_label, "Yes, log out");
    }
}
