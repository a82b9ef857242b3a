use navigation::NavigationUiState;
use navigation::style::mobile_toggle_icon;
use yew::prelude::*;

use super::{BRAND_INITIAL, BRAND_NAME};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub state: NavigationUiState,
    pub on_toggle: Callback<()>,
}

#[function_component(MobileHeader)]
pub fn mobile_header(props: &Props) -> Html {
    let onclick = props.on_toggle.reform(|_: MouseEvent| ());

    html! {
        <div class="lg:hidden fixed top-0 left-0 right-0 z-50 bg-white border-b border-slate-200 px-4 py-3 flex items-center justify-between">
            <button class="btn btn-ghost btn-square btn-sm" aria-label="toggle menu" {onclick}>
                <i class={classes!(mobile_toggle_icon(&props.state).css_class(), "text-xl")}></i>
            </button>
            <div class="flex items-center gap-2">
                <div class="w-8 h-8 bg-gradient-to-br from-blue-600 to-indigo-600 rounded-lg flex items-center justify-center">
                    <span class="text-white font-bold text-sm">{BRAND_INITIAL}</span>
                </div>
                <span class="font-bold text-slate-800">{BRAND_NAME}</span>
            </div>
            <div class="w-10"></div>
        </div>
    }
}
