use std::cell::RefCell;
use std::rc::Rc;

use common::{descriptor_label, ReportResult};
use yew::prelude::*;

use crate::api_client::reports::fetch_report;
use crate::common::toast::ToastContext;

/// API fetch state enum
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    NotStarted,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }
}

/// Monotonic stamp handed to each report request.
///
/// Only the response carrying the latest stamp may update the view; anything older
/// belongs to a report the user has already navigated away from.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    current: u64,
}

impl RequestGeneration {
    pub fn advance(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    pub fn is_current(&self, stamp: u64) -> bool {
        self.current == stamp
    }
}

#[derive(Clone, PartialEq)]
pub struct ReportHandle {
    /// Path of the report last requested
    pub path: Option<String>,
    pub state: FetchState<ReportResult>,
    /// Requests a report path; the previous request, if still running, is superseded
    pub load: Callback<String>,
}

/// One report at a time, fetched on demand.
///
/// Failures raise an error toast and leave the view with an empty result.
#[hook]
pub fn use_report() -> ReportHandle {
    let state = use_state(FetchState::<ReportResult>::default);
    let path = use_state(|| None::<String>);
    let generation: Rc<RefCell<RequestGeneration>> = use_mut_ref(RequestGeneration::default);
    let toast_ctx = use_context::<ToastContext>();

    let load = {
        let state = state.clone();
        let path = path.clone();

        use_callback(toast_ctx, move |report_path: String, toast_ctx| {
            let stamp = generation.borrow_mut().advance();
            log::debug!("Loading report {} (request #{})", report_path, stamp);

            path.set(Some(report_path.clone()));
            state.set(FetchState::Loading);

            let state = state.clone();
            let generation = generation.clone();
            let toast_ctx = toast_ctx.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let outcome = fetch_report(&report_path).await;

                if !generation.borrow().is_current(stamp) {
                    log::debug!("Discarding stale response for {} (request #{})", report_path, stamp);
                    return;
                }

                match outcome {
                    Ok(result) => state.set(FetchState::Success(result)),
                    Err(err) => {
                        let report_id = report_path.split('/').next().unwrap_or_default();
                        let label = match descriptor_label(report_id) {
                            "" => report_path.as_str(),
                            label => label,
                        };
                        if let Some(toast_ctx) = &toast_ctx {
                            toast_ctx.show_error(format!("{}: {}", label, err));
                        }
                        state.set(FetchState::Error(err));
                    }
                }
            });
        })
    };

    ReportHandle {
        path: (*path).clone(),
        state: (*state).clone(),
        load,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_request_is_current() {
        let mut generation = RequestGeneration::default();
        let first = generation.advance();
        let second = generation.advance();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }
}
