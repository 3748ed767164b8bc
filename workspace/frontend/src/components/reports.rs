mod download;
mod parameters;
mod selector;
mod sql_modal;
mod table;
mod view;

pub use download::download_csv;
pub use parameters::ParameterForm;
pub use selector::ReportSelector;
pub use sql_modal::SqlModal;
pub use table::ReportTableView;
pub use view::Reports;
