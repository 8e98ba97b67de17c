//! Form description for the add/edit slide-over.
//!
//! Drafts list their fields as borrowed inputs so one egui widget can render
//! every entity form.

use super::list::{Badge, Tone};

/// A closed set of options shown as a dropdown.
pub trait Options: Copy + PartialEq + 'static {
    const ALL: &'static [Self];

    fn label(self) -> &'static str;
}

/// Options that double as a status badge.
pub trait Status: Options {
    fn tone(self) -> Tone;

    fn badge(self) -> Badge {
        Badge::new(self.label(), self.tone())
    }
}

/// Object-safe view of an [`Options`] value.
pub trait Choice {
    fn labels(&self) -> Vec<&'static str>;

    fn selected(&self) -> usize;

    /// Out-of-range indices are ignored.
    fn select(&mut self, index: usize);
}

impl<O: Options> Choice for O {
    fn labels(&self) -> Vec<&'static str> {
        O::ALL.iter().map(|option| option.label()).collect()
    }

    fn selected(&self) -> usize {
        O::ALL.iter().position(|option| option == self).unwrap_or(0)
    }

    fn select(&mut self, index: usize) {
        if let Some(option) = O::ALL.get(index) {
            *self = *option;
        }
    }
}

pub enum FieldInput<'a> {
    Text {
        value: &'a mut String,
        placeholder: &'static str,
    },
    /// Masked text, for passwords.
    Secret {
        value: &'a mut String,
        placeholder: &'static str,
    },
    Choice(&'a mut dyn Choice),
}

pub struct FormField<'a> {
    pub label: &'static str,
    pub input: FieldInput<'a>,
}

impl<'a> FormField<'a> {
    pub fn text(label: &'static str, value: &'a mut String, placeholder: &'static str) -> Self {
        Self {
            label,
            input: FieldInput::Text { value, placeholder },
        }
    }

    pub fn secret(label: &'static str, value: &'a mut String, placeholder: &'static str) -> Self {
        Self {
            label,
            input: FieldInput::Secret { value, placeholder },
        }
    }

    pub fn choice(label: &'static str, value: &'a mut dyn Choice) -> Self {
        Self {
            label,
            input: FieldInput::Choice(value),
        }
    }
}

pub trait FormDraft {
    fn fields(&mut self) -> Vec<FormField<'_>>;
}
