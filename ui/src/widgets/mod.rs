mod confirm_dialog;
mod export_buttons;
mod login;
mod management_list;
mod report_view;
mod sidebar;
mod slide_over;
mod stat_card;
pub mod table;

pub use confirm_dialog::{ConfirmChoice, confirm_dialog};
pub use export_buttons::export_buttons;
pub use login::login_widget;
pub use management_list::management_list;
pub use report_view::{ReportAction, report_view};
pub use sidebar::sidebar;
pub use slide_over::{FormAction, SlideOverResponse, detail_fields, entity_form, slide_over};
pub use stat_card::stat_card;
