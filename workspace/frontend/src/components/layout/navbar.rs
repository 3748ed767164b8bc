use yew::prelude::*;

use crate::common::toast::ToastContext;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let toast_ctx = use_context::<ToastContext>();
    let history = toast_ctx.map(|ctx| ctx.history).unwrap_or_else(|| common::EventLog::with_capacity(1));

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-none lg:hidden">
                <label aria-label="open sidebar" class="btn btn-square btn-ghost" for="app-drawer">
                    <i class="fas fa-bars text-xl"></i>
                </label>
            </div>
            <div class="flex-1 px-4">
                <h1 class="text-xl font-bold">{ &props.title }</h1>
            </div>
            <div class="flex-none dropdown dropdown-end">
                <div tabindex="0" role="button" class="btn btn-ghost btn-circle">
                    <div class="indicator">
                        <i class="fas fa-bell text-lg"></i>
                        {if history.is_empty() {
                            html! {}
                        } else {
                            html! { <span class="badge badge-xs badge-primary indicator-item">{history.len()}</span> }
                        }}
                    </div>
                </div>
                <ul tabindex="0" class="dropdown-content menu menu-sm bg-base-100 rounded-box shadow w-96 max-h-96 overflow-y-auto z-50">
                    {if history.is_empty() {
                        html! { <li class="disabled"><span>{"Bildirim yok"}</span></li> }
                    } else {
                        html! {
                            <>
                            {for history.iter().rev().map(|toast| html! {
                                <li key={toast.id}>
                                    <span class="flex gap-2">
                                        <i class={toast.toast_type.icon()}></i>
                                        <span class="text-xs text-gray-500">{&toast.raised_at}</span>
                                        <span>{&toast.message}</span>
                                    </span>
                                </li>
                            })}
                            </>
                        }
                    }}
                </ul>
            </div>
        </div>
    }
}
