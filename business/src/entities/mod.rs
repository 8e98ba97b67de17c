//! Entity records behind the management tables, with their fixtures.

/// Declares a closed option set whose serialized form is its label.
///
/// The first variant is the default.
macro_rules! options {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $first:ident => $first_label:literal
            $(, $variant:ident => $label:literal)* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
        )]
        pub enum $name {
            #[default]
            #[serde(rename = $first_label)]
            $first,
            $(
                #[serde(rename = $label)]
                $variant,
            )*
        }

        impl $crate::management::form::Options for $name {
            const ALL: &'static [Self] = &[Self::$first $(, Self::$variant)*];

            fn label(self) -> &'static str {
                match self {
                    Self::$first => $first_label,
                    $(Self::$variant => $label,)*
                }
            }
        }
    };
}

pub(crate) use options;

mod accountant;
mod company;
mod company_account;
mod email_address;
mod locksmith;
mod operator;

pub use accountant::{Accountant, AccountantDraft, AccountantStatus};
pub use company::{Company, CompanyDraft, CompanyStatus};
pub use company_account::{CompanyAccount, CompanyAccountDraft};
pub use email_address::{EmailAddress, EmailAddressDraft, EmailStatus};
pub use locksmith::{Locksmith, LocksmithDraft, LocksmithStatus};
pub use operator::{Operator, OperatorDraft, OperatorStatus, Shift};
