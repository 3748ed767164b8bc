use common::{reports_in, ReportCategory, ReportDescriptor, ReportKind};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ReportSelectorProps {
    #[prop_or_default]
    pub selected: Option<&'static str>,
    pub on_select: Callback<&'static ReportDescriptor>,
}

fn kind_badge(kind: ReportKind) -> &'static str {
    match kind {
        ReportKind::Query => "badge-ghost",
        ReportKind::View => "badge-info",
        ReportKind::Procedure => "badge-secondary",
    }
}

/// Report cards grouped by category.
#[function_component(ReportSelector)]
pub fn report_selector(props: &ReportSelectorProps) -> Html {
    html! {
        <div class="flex flex-col gap-6">
            {for ReportCategory::ALL.iter().map(|category| html! {
                <section key={category.label()}>
                    <h3 class="text-sm font-semibold uppercase text-gray-500 mb-2">{category.label()}</h3>
                    <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-3">
                        {for reports_in(*category).map(|descriptor| {
                            let is_selected = props.selected == Some(descriptor.id);
                            let onclick = {
                                let on_select = props.on_select.clone();
                                Callback::from(move |_| on_select.emit(descriptor))
                            };
                            html! {
                                <button
                                    key={descriptor.id}
                                    class={classes!(
                                        "card", "card-compact", "bg-base-100", "shadow", "text-left",
                                        "hover:shadow-md", is_selected.then_some("ring-2 ring-primary")
                                    )}
                                    {onclick}
                                >
                                    <div class="card-body">
                                        <div class="flex items-center gap-2">
                                            <i class={classes!(descriptor.icon, "text-primary")}></i>
                                            <span class="font-semibold">{descriptor.name}</span>
                                        </div>
                                        <div class="flex items-center justify-between gap-2">
                                            <span class="text-xs text-gray-500">{descriptor.technique_hint}</span>
                                            <span class={classes!("badge", "badge-sm", kind_badge(descriptor.kind))}>
                                                {descriptor.kind.as_str()}
                                            </span>
                                        </div>
                                    </div>
                                </button>
                            }
                        })}
                    </div>
                </section>
            })}
        </div>
    }
}
