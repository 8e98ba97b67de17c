//! Searchable management table.
//!
//! Renders a count line, a search box, an optional add button and either a
//! card list (narrow) or a bordered grid (wide). The widget never mutates
//! rows; clicks come back as a [`ListEvent`] for the page to apply.

use egui::{Align, Frame, Grid, Layout, ScrollArea, TextEdit, Ui};
use syc_business::management::list::{
    CardView, Capabilities, ListConfig, ListEvent, ListLayout, ListState, ManagementRow,
};
use ustr::Ustr;

use super::table::{bordered, cell, data_cell, header_cell};

const EDIT_ICON: &str = "✏";
const DELETE_ICON: &str = "🗑";

/// Draws the list and returns at most one user intent for this frame.
pub fn management_list(
    ui: &mut Ui,
    config: &ListConfig,
    rows: &[ManagementRow],
    state: &mut ListState,
) -> Option<ListEvent> {
    let mut event = None;

    ui.heading(config.title);
    if let Some(description) = config.description {
        ui.weak(description);
    }
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.label(config.count_line(rows.len()));
        if config.capabilities.add {
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button(config.add_label()).clicked() {
                    event = Some(ListEvent::Add);
                }
            });
        }
    });

    ui.add(
        TextEdit::singleline(&mut state.search)
            .hint_text(config.search_placeholder())
            .desired_width(f32::INFINITY),
    );
    ui.add_space(8.0);

    let visible = state.visible(rows);
    if visible.is_empty() {
        ui.weak(config.empty_message());
        return event;
    }

    let row_event = match ListLayout::for_width(ui.available_width()) {
        ListLayout::Cards => cards(ui, config, rows, &visible),
        ListLayout::Table => table(ui, config, &visible),
    };

    event.or(row_event)
}

fn table(ui: &mut Ui, config: &ListConfig, visible: &[&ManagementRow]) -> Option<ListEvent> {
    let mut event = None;
    let with_actions = config.capabilities.has_actions();
    let num_columns = config.columns.len() + usize::from(with_actions);

    bordered(ui, |ui| {
        ScrollArea::horizontal().show(ui, |ui| {
            Grid::new(config.title)
                .num_columns(num_columns)
                .striped(true)
                .spacing([16.0, 0.0])
                .min_col_width(60.0)
                .show(ui, |ui| {
                    for column in config.columns {
                        header_cell(ui, |ui| {
                            ui.strong(*column);
                        });
                    }
                    if with_actions {
                        header_cell(ui, |ui| {
                            ui.strong("Actions");
                        });
                    }
                    ui.end_row();

                    for row in visible {
                        for index in 0..config.columns.len() {
                            data_cell(ui, |ui| cell(ui, row.cell(index)));
                        }
                        if with_actions {
                            data_cell(ui, |ui| {
                                if let Some(clicked) = row_actions(ui, config, row.id) {
                                    event = Some(clicked);
                                }
                            });
                        }
                        ui.end_row();
                    }
                });
        });
    });

    event
}

fn cards(
    ui: &mut Ui,
    config: &ListConfig,
    rows: &[ManagementRow],
    visible: &[&ManagementRow],
) -> Option<ListEvent> {
    let mut event = None;
    // Status extraction is decided on the unfiltered table.
    let has_status = config.has_status_column(rows);

    for row in visible {
        let card = config.card(row, has_status);
        Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            card_body(ui, row.id, &card);

            if config.capabilities.has_actions() {
                ui.add_space(4.0);
                if let Some(clicked) = row_actions(ui, config, row.id) {
                    event = Some(clicked);
                }
            }
        });
        ui.add_space(6.0);
    }

    event
}

fn card_body(ui: &mut Ui, id: Ustr, card: &CardView<'_>) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            if let Some(title) = card.title {
                ui.strong(title.display_text().into_owned());
            }
            if let Some(subtitle) = card.subtitle {
                ui.weak(subtitle.display_text().into_owned());
            }
        });
        if card.status.is_some() {
            ui.with_layout(Layout::right_to_left(Align::Min), |ui| cell(ui, card.status));
        }
    });

    if card.details.is_empty() {
        return;
    }
    Grid::new(("card_details", id))
        .num_columns(2)
        .spacing([12.0, 2.0])
        .show(ui, |ui| {
            for (label, value) in &card.details {
                ui.weak(*label);
                cell(ui, *value);
                ui.end_row();
            }
        });
}

fn row_actions(ui: &mut Ui, config: &ListConfig, id: Ustr) -> Option<ListEvent> {
    let Capabilities { edit, delete, .. } = config.capabilities;
    let mut event = None;

    ui.horizontal(|ui| {
        if edit && ui.button(EDIT_ICON).on_hover_text(config.edit_label()).clicked() {
            event = Some(ListEvent::Edit(id));
        }
        if delete
            && ui
                .button(DELETE_ICON)
                .on_hover_text(config.delete_label())
                .clicked()
        {
            event = Some(ListEvent::Delete(id));
        }
    });

    event
}
