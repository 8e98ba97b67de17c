//! Headless model of the searchable management table.
//!
//! Every management page renders the same component: a count line, a search
//! box, an optional add button and either a card list (narrow) or a table
//! (wide). This module holds everything about that component that is not
//! pixels, so the egui widget stays a thin renderer.

use std::borrow::Cow;

use ustr::Ustr;

/// Widths below this render as cards instead of a table.
pub const CARD_LAYOUT_BREAKPOINT: f32 = 720.0;

/// Cards show at most this many label/value pairs.
pub const MAX_CARD_DETAILS: usize = 6;

/// Colour family of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Positive,
    Warning,
    Neutral,
    Danger,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub tone: Tone,
}

impl Badge {
    pub fn new(label: impl Into<String>, tone: Tone) -> Self {
        Self {
            label: label.into(),
            tone,
        }
    }
}

/// One displayable value in a row.
///
/// `Text`, `Number` and `Stacked` are plain values: they take part in search
/// and may act as a card subtitle. A `Badge` is pre-rendered decoration and
/// is never matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Number(i64),
    /// Two-line text, e.g. a company name over its city.
    Stacked { primary: String, secondary: String },
    Badge(Badge),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn stacked(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self::Stacked {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }

    pub fn is_primitive(&self) -> bool {
        !matches!(self, Self::Badge(_))
    }

    /// Flat text for exports and card values.
    pub fn display_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text),
            Self::Number(number) => Cow::Owned(number.to_string()),
            Self::Stacked { primary, secondary } if secondary.is_empty() => {
                Cow::Borrowed(primary)
            }
            Self::Stacked { primary, secondary } => Cow::Owned(format!("{primary} · {secondary}")),
            Self::Badge(badge) => Cow::Borrowed(&badge.label),
        }
    }

    /// `needle` must already be lowercase.
    fn matches(&self, needle: &str) -> bool {
        match self {
            Self::Text(text) => text.to_lowercase().contains(needle),
            Self::Number(number) => number.to_string().contains(needle),
            Self::Stacked { primary, secondary } => {
                primary.to_lowercase().contains(needle)
                    || secondary.to_lowercase().contains(needle)
            }
            Self::Badge(_) => false,
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for Cell {
    fn from(value: u32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl From<Badge> for Cell {
    fn from(value: Badge) -> Self {
        Self::Badge(value)
    }
}

/// A row as the table sees it: an id plus cells aligned with the columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagementRow {
    pub id: Ustr,
    pub cells: Vec<Cell>,
}

impl ManagementRow {
    pub fn new(id: Ustr, cells: Vec<Cell>) -> Self {
        Self { id, cells }
    }

    /// The cell under column `index`, if the row is long enough.
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }
}

/// Which affordances the owner wired up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub add: bool,
    pub edit: bool,
    pub delete: bool,
}

impl Capabilities {
    pub const ALL: Self = Self {
        add: true,
        edit: true,
        delete: true,
    };

    pub const READ_ONLY: Self = Self {
        add: false,
        edit: false,
        delete: false,
    };

    /// Whether the table grows a trailing `Actions` column.
    pub fn has_actions(self) -> bool {
        self.edit || self.delete
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::ALL
    }
}

/// Static description of one management table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListConfig {
    pub title: &'static str,
    pub description: Option<&'static str>,
    /// Singular, capitalised, e.g. `"Locksmith"`.
    pub entity_label: &'static str,
    pub columns: &'static [&'static str],
    pub capabilities: Capabilities,
}

impl ListConfig {
    /// `"4 Locksmiths in total"`, singular only for exactly one.
    pub fn count_line(&self, total: usize) -> String {
        if total == 1 {
            format!("{total} {} in total", self.entity_label)
        } else {
            format!("{total} {}s in total", self.entity_label)
        }
    }

    pub fn search_placeholder(&self) -> String {
        format!("Search {}s...", self.entity_label.to_lowercase())
    }

    pub fn add_label(&self) -> String {
        format!("Add {}", self.entity_label)
    }

    pub fn edit_label(&self) -> String {
        format!("Edit {}", self.entity_label)
    }

    pub fn delete_label(&self) -> String {
        format!("Delete {}", self.entity_label)
    }

    pub fn empty_message(&self) -> String {
        format!("No {}s match your search.", self.entity_label.to_lowercase())
    }

    /// Status extraction applies only when the last column is `Status` and
    /// the first row is exactly as wide as the header.
    pub fn has_status_column(&self, rows: &[ManagementRow]) -> bool {
        let Some(last) = self.columns.last() else {
            return false;
        };
        last.eq_ignore_ascii_case("status")
            && rows
                .first()
                .is_some_and(|row| row.cells.len() == self.columns.len())
    }

    pub fn card<'a>(&self, row: &'a ManagementRow, has_status: bool) -> CardView<'a> {
        CardView::build(self.columns, row, has_status)
    }
}

/// Rows whose plain cells contain `search`, case-insensitively.
///
/// A blank query returns every row in its original order. Otherwise the
/// query is matched as typed, surrounding spaces included.
pub fn filter_rows<'a>(rows: &'a [ManagementRow], search: &str) -> Vec<&'a ManagementRow> {
    if search.trim().is_empty() {
        return rows.iter().collect();
    }
    let needle = search.to_lowercase();
    rows.iter()
        .filter(|row| row.cells.iter().any(|cell| cell.matches(&needle)))
        .collect()
}

/// Card rendering of one row for narrow layouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView<'a> {
    pub title: Option<&'a Cell>,
    pub subtitle: Option<&'a Cell>,
    pub status: Option<&'a Cell>,
    /// Column label with the matching cell; `None` when the row is short.
    pub details: Vec<(&'static str, Option<&'a Cell>)>,
}

impl<'a> CardView<'a> {
    fn build(columns: &'static [&'static str], row: &'a ManagementRow, has_status: bool) -> Self {
        let cells = &row.cells;
        let status = if has_status { cells.last() } else { None };
        let subtitle = cells.get(1).filter(|cell| cell.is_primitive());

        let start = if subtitle.is_some() { 2 } else { 1 };
        let end = if has_status {
            cells.len().saturating_sub(1)
        } else {
            cells.len()
        };
        let end = end.min(columns.len());

        let details = if start < end {
            columns[start..end]
                .iter()
                .enumerate()
                .take(MAX_CARD_DETAILS)
                .map(|(offset, label)| (*label, cells.get(start + offset)))
                .collect()
        } else {
            Vec::new()
        };

        Self {
            title: cells.first(),
            subtitle,
            status,
            details,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListLayout {
    Cards,
    Table,
}

impl ListLayout {
    pub fn for_width(width: f32) -> Self {
        if width < CARD_LAYOUT_BREAKPOINT {
            Self::Cards
        } else {
            Self::Table
        }
    }
}

/// User intent reported by the table. The table never mutates rows itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    Add,
    Edit(Ustr),
    Delete(Ustr),
}

/// Per-table UI state owned by the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    pub search: String,
}

impl ListState {
    pub fn visible<'a>(&self, rows: &'a [ManagementRow]) -> Vec<&'a ManagementRow> {
        filter_rows(rows, &self.search)
    }
}
