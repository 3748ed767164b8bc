use common::ReportDescriptor;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ParameterFormProps {
    pub descriptor: &'static ReportDescriptor,
    pub values: Vec<i32>,
    pub on_change: Callback<Vec<i32>>,
    pub on_run: Callback<()>,
}

/// Integer inputs for the positional parameters of a procedure report.
#[function_component(ParameterForm)]
pub fn parameter_form(props: &ParameterFormProps) -> Html {
    let all_valid = props
        .descriptor
        .parameters
        .iter()
        .zip(props.values.iter())
        .all(|(parameter, value)| parameter.accepts(*value));

    let on_submit = {
        let on_run = props.on_run.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_run.emit(());
        })
    };

    html! {
        <form class="flex flex-wrap items-end gap-4 mb-4" onsubmit={on_submit}>
            {for props.descriptor.parameters.iter().enumerate().map(|(index, parameter)| {
                let value = props.values.get(index).copied().unwrap_or(parameter.min);
                let oninput = {
                    let values = props.values.clone();
                    let on_change = props.on_change.clone();
                    Callback::from(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        if let Ok(parsed) = input.value().parse::<i32>() {
                            let mut values = values.clone();
                            if let Some(slot) = values.get_mut(index) {
                                *slot = parsed;
                            }
                            on_change.emit(values);
                        }
                    })
                };
                html! {
                    <label key={parameter.name} class="form-control w-32">
                        <div class="label"><span class="label-text">{parameter.label}</span></div>
                        <input
                            type="number"
                            class={classes!("input", "input-bordered", "input-sm",
                                (!parameter.accepts(value)).then_some("input-error"))}
                            min={parameter.min.to_string()}
                            max={parameter.max.to_string()}
                            value={value.to_string()}
                            {oninput}
                        />
                    </label>
                }
            })}
            <button type="submit" class="btn btn-primary btn-sm" disabled={!all_valid}>
                <i class="fas fa-play"></i>
                {" Çalıştır"}
            </button>
        </form>
    }
}
