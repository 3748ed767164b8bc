use yew::prelude::*;
use yew_router::prelude::*;

use crate::settings;
use crate::Route;

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let settings = settings::get_settings();
    let protocol = if settings.api_use_https { "https" } else { "http" };
    let swagger_url = format!("{}://{}:{}/swagger-ui", protocol, settings.api_host, settings.api_port);

    html! {
        <div class="drawer-side z-50">
            <label aria-label="close sidebar" class="drawer-overlay" for="app-drawer"></label>
            <ul class="menu p-4 w-72 min-h-full bg-base-100 text-base-content border-r border-base-300">
                <li class="mb-4">
                    <div class="flex items-center gap-3 px-2">
                        <div class="w-10 h-10 rounded-lg bg-primary flex items-center justify-center text-primary-content text-xl">
                            <i class="fas fa-hard-hat"></i>
                        </div>
                        <span class="text-2xl font-bold tracking-tight">{"SiteBook"}</span>
                    </div>
                </li>

                <li><Link<Route> to={Route::Reports}><i class="fas fa-chart-line w-5"></i> {"Raporlar"}</Link<Route>></li>

                <div class="divider"></div>

                <li><a href={swagger_url} target="_blank"><i class="fas fa-book w-5"></i> {"API Belgeleri"}</a></li>
            </ul>
        </div>
    }
}
