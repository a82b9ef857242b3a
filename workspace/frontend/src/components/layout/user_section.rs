use navigation::style::user_section_classes;
use navigation::{Icon, NavigationUiState};
use yew::prelude::*;

use crate::components::to_classes;
use crate::settings;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub state: NavigationUiState,
    pub on_logout: Callback<()>,
}

#[function_component(UserSection)]
pub fn user_section(props: &Props) -> Html {
    let settings = settings::get_settings();
    let on_logout = props.on_logout.reform(|_: MouseEvent| ());

    html! {
        <div class="absolute bottom-0 left-0 right-0 p-3 border-t border-slate-100 bg-white">
            <div class={to_classes(&user_section_classes(&props.state))}>
                <div class="avatar placeholder">
                    <div class="w-9 h-9 rounded-full bg-slate-100 text-slate-600 text-sm flex items-center justify-center">
                        <span>{settings.admin_initial()}</span>
                    </div>
                </div>
                if props.state.shows_labels() {
                    <div class="flex-1 min-w-0">
                        <p class="text-sm font-medium text-slate-800 truncate">{&settings.admin_name}</p>
                        <p class="text-xs text-slate-400 truncate">{&settings.admin_email}</p>
                    </div>
                    <button
                        class="btn btn-ghost btn-square btn-sm text-slate-400 hover:text-red-500"
                        aria-label="logout"
                        onclick={on_logout}
                    >
                        <i class={Icon::Logout.css_class()}></i>
                    </button>
                }
            </div>
        </div>
    }
}
