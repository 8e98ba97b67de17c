//! Read-only report modules.
//!
//! Each module follows the same pipeline: a filter picks the visible
//! lines, [`aggregate`] reduces them to a summary strip, the lines render as
//! a table, and one line at a time can be opened in a detail slide-over.
//! The [`Report`] trait is that pipeline; the UI renders any implementor.

pub mod aggregate;
pub mod cancellations;
pub mod company_daily;
pub mod company_weekly;
pub mod filters;
pub mod locksmith_daily;
pub mod locksmith_weekly;
pub mod movement;
pub mod operators;
pub mod revenue;
mod suite;

use std::fmt::Debug;

use ustr::Ustr;

use crate::export::ExportTable;
use crate::management::list::Cell;

pub use suite::ReportSuite;

/// Label/value pair in a detail slide-over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

impl DetailField {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// One figure in the summary strip, e.g. `768` over `jobs completed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryStat {
    pub value: String,
    pub label: &'static str,
}

impl SummaryStat {
    pub fn new(value: impl Into<String>, label: &'static str) -> Self {
        Self {
            value: value.into(),
            label,
        }
    }
}

/// One line of a report table.
pub trait ReportItem: Clone + Debug + 'static {
    fn row_id(&self) -> Ustr;

    /// Heading of the detail slide-over.
    fn heading(&self) -> &str;

    /// Cells aligned with [`Report::columns`].
    fn cells(&self) -> Vec<Cell>;

    fn details(&self) -> Vec<DetailField>;
}

pub trait Report {
    type Item: ReportItem;

    fn title(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn columns(&self) -> &'static [&'static str];

    /// Shown instead of the table when the filter matches nothing.
    fn empty_message(&self) -> &'static str;

    fn visible(&self) -> Vec<&Self::Item>;

    fn summary(&self) -> Vec<SummaryStat>;

    /// Current filter value, appended to export file names.
    fn export_suffix(&self) -> String;

    fn detail(&self) -> &DetailSelection;

    fn detail_mut(&mut self) -> &mut DetailSelection;

    /// The visible lines as an export table.
    fn export(&self) -> ExportTable {
        let cells: Vec<Vec<Cell>> = self.visible().iter().map(|item| item.cells()).collect();
        ExportTable::from_cells(self.title(), self.columns(), cells.iter().map(Vec::as_slice))
            .with_suffix(&self.export_suffix())
    }

    /// The visible line currently open in the slide-over.
    fn selected(&self) -> Option<&Self::Item> {
        let id = self.detail().selected()?;
        self.visible().into_iter().find(|item| item.row_id() == id)
    }
}

/// Which line, if any, is open in the detail slide-over.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DetailSelection {
    selected: Option<Ustr>,
}

impl DetailSelection {
    pub fn open(&mut self, id: Ustr) {
        self.selected = Some(id);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<Ustr> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }
}
