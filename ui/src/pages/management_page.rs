//! One management page per entity, all drawn by the same generic page.

use egui::{Align, Layout, Ui};
use log::warn;
use syc_business::EntityModule;
use syc_business::management::crud::{CrudOrchestrator, Editable, Record as _};
use syc_business::management::form::FormDraft;
use syc_business::management::{DynRepository, Tabular};

use crate::state::State;
use crate::utils::export::deliver;
use crate::widgets::{
    ConfirmChoice, FormAction, confirm_dialog, entity_form, export_buttons, management_list,
    slide_over,
};

/// List, add/edit slide-over and delete confirmation for `T`.
pub fn management_page<T>(state: &mut State, ui: &mut Ui)
where
    T: Tabular + Editable,
    T::Draft: FormDraft,
{
    let now = state.now();
    let module = state.ctx.state_mut::<EntityModule<T>>();
    let rows = module.rows();

    let mut export = None;
    ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
        export = export_buttons(ui);
    });

    if let Some(event) = management_list(ui, &T::LIST, &rows, &mut module.list) {
        module.crud.handle(event);
    }

    let mut notice = None;
    if let Some(action) = drawer(ui, &mut module.crud) {
        match action {
            FormAction::Submit => {
                if let Err(err) = module.crud.submit(now) {
                    warn!("{} form not saved: {err}", T::NOUN);
                    notice = Some(err.to_string());
                }
            }
            FormAction::Cancel => module.crud.cancel_drawer(),
        }
    }

    if let Some(prompt) = module.crud.delete_target().map(|target| target.delete_prompt()) {
        match confirm_dialog(ui.ctx(), &prompt) {
            Some(ConfirmChoice::Confirm) => {
                if let Err(err) = module.crud.confirm_delete() {
                    notice = Some(err.to_string());
                }
            }
            Some(ConfirmChoice::Cancel) => module.crud.cancel_delete(),
            None => {}
        }
    }

    let table = export.map(|format| (module.export(), format));
    if let Some((table, format)) = table {
        notice = deliver(state.export_sink.as_ref(), ui.ctx(), &table, format);
    }
    if notice.is_some() {
        state.notice = notice;
    }
}

fn drawer<T>(ui: &Ui, crud: &mut CrudOrchestrator<T, DynRepository<T>>) -> Option<FormAction>
where
    T: Editable,
    T::Draft: FormDraft,
{
    let title = crud.form_title();
    let submit_label = crud.submit_label();
    let draft = crud.draft_mut()?;

    let response = slide_over(ui.ctx(), &title, |ui| {
        entity_form(ui, draft.fields(), &submit_label)
    });
    if response.closed {
        return Some(FormAction::Cancel);
    }
    response.inner.flatten()
}

