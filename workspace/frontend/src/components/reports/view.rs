use chrono::Datelike;
use common::{ReportDescriptor, ReportResult};
use yew::prelude::*;

use super::{download_csv, ParameterForm, ReportSelector, ReportTableView, SqlModal};
use crate::common::error::ErrorDisplay;
use crate::common::loading::Loading;
use crate::common::toast::ToastContext;
use crate::hooks::{use_report, FetchState};

/// Initial values for a parameterised report: the current year and month, clamped
/// into each parameter's range.
fn default_parameter_values(descriptor: &ReportDescriptor) -> Vec<i32> {
    let today = chrono::Local::now().date_naive();
    descriptor
        .parameters
        .iter()
        .map(|parameter| {
            let guess = match parameter.name {
                "year" => today.year(),
                "month" => today.month() as i32,
                _ => parameter.min,
            };
            guess.clamp(parameter.min, parameter.max)
        })
        .collect()
}

#[function_component(Reports)]
pub fn reports() -> Html {
    let report = use_report();
    let selected = use_state(|| None::<&'static ReportDescriptor>);
    let parameter_values = use_state(Vec::<i32>::new);
    let show_sql = use_state(|| false);
    let toast_ctx = use_context::<ToastContext>();

    let on_select = {
        let selected = selected.clone();
        let parameter_values = parameter_values.clone();
        let load = report.load.clone();
        Callback::from(move |descriptor: &'static ReportDescriptor| {
            log::debug!("Report selected: {}", descriptor.id);
            let values = default_parameter_values(descriptor);
            selected.set(Some(descriptor));
            load.emit(descriptor.path_with(&values));
            parameter_values.set(values);
        })
    };

    let on_run = {
        let selected = selected.clone();
        let parameter_values = parameter_values.clone();
        let load = report.load.clone();
        Callback::from(move |_| {
            if let Some(descriptor) = *selected {
                load.emit(descriptor.path_with(&parameter_values));
            }
        })
    };

    let on_parameters_change = {
        let parameter_values = parameter_values.clone();
        Callback::from(move |values: Vec<i32>| parameter_values.set(values))
    };

    let result: Option<&ReportResult> = report.state.data();

    let on_download = {
        let result = result.cloned();
        let path = report.path.clone();
        let toast_ctx = toast_ctx.clone();
        Callback::from(move |_| {
            let (Some(result), Some(path)) = (&result, &path) else {
                return;
            };
            match download_csv(result, path) {
                Ok(file_name) => {
                    if let Some(toast_ctx) = &toast_ctx {
                        toast_ctx.show_success(format!("{} indirildi", file_name));
                    }
                }
                Err(e) => {
                    log::error!("CSV export failed: {:?}", e);
                    if let Some(toast_ctx) = &toast_ctx {
                        toast_ctx.show_error("CSV dışa aktarılamadı".to_string());
                    }
                }
            }
        })
    };

    let open_sql = {
        let show_sql = show_sql.clone();
        Callback::from(move |_| show_sql.set(true))
    };
    let close_sql = {
        let show_sql = show_sql.clone();
        Callback::from(move |_| show_sql.set(false))
    };

    let body = match &report.state {
        FetchState::NotStarted => html! {
            <p class="text-gray-500 py-8 text-center">{"Görüntülemek için bir rapor seçin."}</p>
        },
        FetchState::Loading => html! { <Loading text={"Rapor yükleniyor..."} /> },
        FetchState::Success(result) => html! { <ReportTableView result={result.clone()} /> },
        FetchState::Error(message) => html! {
            <>
                <ErrorDisplay message={message.clone()} on_retry={Some(on_run.clone())} />
                <ReportTableView result={ReportResult::empty()} />
            </>
        },
    };

    let has_rows = result.map(|r| !r.is_empty()).unwrap_or(false);
    let query_text = result.map(|r| r.query_text.clone()).unwrap_or_default();

    html! {
        <div class="flex flex-col gap-6">
            <ReportSelector selected={(*selected).map(|d| d.id)} {on_select} />

            {if let Some(descriptor) = *selected {
                html! {
                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <div class="flex flex-wrap items-center justify-between gap-2 mb-2">
                                <h2 class="card-title">
                                    <i class={descriptor.icon}></i>
                                    {descriptor.name}
                                </h2>
                                <div class="flex gap-2">
                                    <button class="btn btn-sm btn-outline" onclick={open_sql}
                                        disabled={result.is_none()}>
                                        <i class="fas fa-code"></i>
                                        {" SQL"}
                                    </button>
                                    <button class="btn btn-sm btn-outline" onclick={on_download}
                                        disabled={!has_rows || report.state.is_loading()}>
                                        <i class="fas fa-file-csv"></i>
                                        {" CSV"}
                                    </button>
                                </div>
                            </div>
                            {if descriptor.is_parameterized() {
                                html! {
                                    <ParameterForm
                                        {descriptor}
                                        values={(*parameter_values).clone()}
                                        on_change={on_parameters_change}
                                        on_run={on_run.clone()}
                                    />
                                }
                            } else {
                                html! {}
                            }}
                            {body}
                        </div>
                    </div>
                }
            } else {
                body
            }}

            <SqlModal
                show={*show_sql}
                title={(*selected).map(|d| d.name).unwrap_or_default().to_string()}
                query={query_text}
                on_close={close_sql}
            />
        </div>
    }
}
