use common::EventLog;
use std::rc::Rc;
use yew::prelude::*;

use crate::settings;

#[derive(Clone, Debug, PartialEq)]
pub enum ToastType {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastType {
    fn alert_class(&self) -> &'static str {
        match self {
            ToastType::Info => "alert-info",
            ToastType::Success => "alert-success",
            ToastType::Warning => "alert-warning",
            ToastType::Error => "alert-error",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastType::Info => "fas fa-info-circle",
            ToastType::Success => "fas fa-check-circle",
            ToastType::Warning => "fas fa-exclamation-triangle",
            ToastType::Error => "fas fa-exclamation-circle",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub toast_type: ToastType,
    /// Local time the toast was raised, `HH:MM:SS`
    pub raised_at: String,
}

/// Toasts currently on screen plus the bounded notification history.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastState {
    pub active: Vec<Toast>,
    pub history: EventLog<Toast>,
}

impl ToastState {
    pub fn with_history_cap(cap: usize) -> Self {
        Self {
            active: Vec::new(),
            history: EventLog::with_capacity(cap),
        }
    }
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(usize),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = (*self).clone();
        match action {
            ToastAction::Push(toast) => {
                state.history.append(toast.clone());
                state.active.push(toast);
            }
            ToastAction::Dismiss(id) => state.active.retain(|t| t.id != id),
        }
        Rc::new(state)
    }
}

#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub toasts: Vec<Toast>,
    /// Oldest first, capped by the `notification_history_cap` setting
    pub history: EventLog<Toast>,
    pub add_toast: Callback<(String, ToastType)>,
    pub remove_toast: Callback<usize>,
}

impl ToastContext {
    pub fn show_success(&self, message: String) {
        self.add_toast.emit((message, ToastType::Success));
    }

    pub fn show_warning(&self, message: String) {
        self.add_toast.emit((message, ToastType::Warning));
    }

    pub fn show_error(&self, message: String) {
        self.add_toast.emit((message, ToastType::Error));
    }
}

fn local_time() -> String {
    String::from(js_sys::Date::new_0().to_locale_time_string("tr-TR"))
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let settings = settings::get_settings();
    let state = use_reducer(|| ToastState::with_history_cap(settings.notification_history_cap));
    let next_id = use_mut_ref(|| 0usize);
    let duration_ms = settings.toast_duration_ms;

    let add_toast = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(message, toast_type): (String, ToastType)| {
            let id = {
                let mut next_id = next_id.borrow_mut();
                *next_id += 1;
                *next_id
            };
            dispatcher.dispatch(ToastAction::Push(Toast {
                id,
                message,
                toast_type,
                raised_at: local_time(),
            }));

            let dispatcher = dispatcher.clone();
            gloo_timers::callback::Timeout::new(duration_ms, move || {
                dispatcher.dispatch(ToastAction::Dismiss(id));
            })
            .forget();
        })
    };

    let remove_toast = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: usize| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    let context = ToastContext {
        toasts: state.active.clone(),
        history: state.history.clone(),
        add_toast,
        remove_toast: remove_toast.clone(),
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-50">
                {for state.active.iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let remove_toast = remove_toast.clone();
                        Callback::from(move |_| remove_toast.emit(id))
                    };

                    html! {
                        <div key={id} class={classes!("alert", toast.toast_type.alert_class(), "shadow-lg")}>
                            <i class={toast.toast_type.icon()}></i>
                            <span>{&toast.message}</span>
                            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}
