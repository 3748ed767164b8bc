use common::presentation::EMPTY_STATE_MESSAGE;
use common::{ReportResult, ReportTable};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ReportTableViewProps {
    pub result: ReportResult,
}

/// Translated headers from the first row, formatted cells, or the empty-state text.
#[function_component(ReportTableView)]
pub fn report_table_view(props: &ReportTableViewProps) -> Html {
    let table = use_memo(props.result.clone(), ReportTable::from_result);

    if table.is_empty() {
        return html! {
            <div class="flex flex-col items-center py-12 gap-3 text-gray-500">
                <i class="fas fa-inbox text-4xl"></i>
                <p>{EMPTY_STATE_MESSAGE}</p>
            </div>
        };
    }

    html! {
        <>
            <div class="overflow-x-auto">
                <table class="table table-zebra table-sm">
                    <thead>
                        <tr>
                            {for table.columns.iter().map(|column| html! {
                                <th key={column.key.clone()} title={column.key.clone()}>{&column.label}</th>
                            })}
                        </tr>
                    </thead>
                    <tbody>
                        {for table.rows.iter().enumerate().map(|(index, cells)| html! {
                            <tr key={index}>
                                {for cells.iter().map(|cell| html! { <td>{cell}</td> })}
                            </tr>
                        })}
                    </tbody>
                </table>
            </div>
            <div class="flex justify-between text-xs text-gray-500 mt-2">
                <span>{format!("{} kayıt", table.rows.len())}</span>
                {if table.dropped_columns.is_empty() {
                    html! {}
                } else {
                    html! {
                        <span class="text-warning">
                            {format!("Gösterilmeyen sütunlar: {}", table.dropped_columns.join(", "))}
                        </span>
                    }
                }}
            </div>
        </>
    }
}
