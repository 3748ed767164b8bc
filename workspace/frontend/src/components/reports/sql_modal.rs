use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use yew::prelude::*;

use crate::common::toast::ToastContext;

#[derive(Properties, PartialEq)]
pub struct SqlModalProps {
    pub show: bool,
    pub title: String,
    /// Shown verbatim
    pub query: String,
    pub on_close: Callback<()>,
}

/// `navigator.clipboard.writeText(text)`, looked up dynamically so insecure
/// contexts without a clipboard report an error instead of panicking.
fn write_clipboard(text: &str) -> Result<Promise, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let navigator = Reflect::get(window.as_ref(), &JsValue::from_str("navigator"))?;
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() {
        return Err(JsValue::from_str("clipboard is not available"));
    }
    let write_text: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))?.dyn_into()?;
    write_text.call1(&clipboard, &JsValue::from_str(text))?.dyn_into()
}

#[function_component(SqlModal)]
pub fn sql_modal(props: &SqlModalProps) -> Html {
    let toast_ctx = use_context::<ToastContext>();

    let on_copy = {
        let query = props.query.clone();
        Callback::from(move |_| {
            let toast_ctx = toast_ctx.clone();
            let outcome = write_clipboard(&query);
            wasm_bindgen_futures::spawn_local(async move {
                let copied = match outcome {
                    Ok(promise) => JsFuture::from(promise).await,
                    Err(e) => Err(e),
                };
                let Some(toast_ctx) = toast_ctx else { return };
                match copied {
                    Ok(_) => toast_ctx.show_success("SQL panoya kopyalandı".to_string()),
                    Err(e) => {
                        log::warn!("Clipboard write failed: {:?}", e);
                        toast_ctx.show_warning("SQL panoya kopyalanamadı".to_string());
                    }
                }
            });
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    if !props.show {
        return html! {};
    }

    html! {
        <div class="modal modal-open">
            <div class="modal-box max-w-4xl">
                <h3 class="font-bold text-lg mb-4">
                    <i class="fas fa-database mr-2"></i>
                    {&props.title}
                </h3>
                {if props.query.is_empty() {
                    html! { <p class="text-sm text-gray-500">{"Bu rapor için sorgu metni yok."}</p> }
                } else {
                    html! {
                        <pre class="bg-base-200 rounded p-4 text-sm overflow-x-auto whitespace-pre-wrap"><code>{&props.query}</code></pre>
                    }
                }}
                <div class="modal-action">
                    <button class="btn btn-primary btn-sm" onclick={on_copy} disabled={props.query.is_empty()}>
                        <i class="fas fa-copy"></i>
                        {" Kopyala"}
                    </button>
                    <button class="btn btn-sm" onclick={on_close.clone()}>{"Kapat"}</button>
                </div>
            </div>
            <div class="modal-backdrop" onclick={on_close}></div>
        </div>
    }
}
