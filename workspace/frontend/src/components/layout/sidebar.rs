use navigation::style::{collapse_chevron_classes, sidebar_classes};
use navigation::{NavAction, NavItemView, NavigationUiState, PendingCounts, nav_items};
use yew::prelude::*;
use yew_router::prelude::*;

use super::user_section::UserSection;
use super::{BRAND_INITIAL, BRAND_NAME, BRAND_SUBTITLE};
use crate::components::to_classes;
use crate::router::{Route, resolve_url};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub state: NavigationUiState,
    pub current_page: String,
    pub pending_counts: PendingCounts,
    pub on_action: Callback<NavAction>,
    pub on_logout: Callback<()>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &Props) -> Html {
    let navigator = use_navigator();
    let items = nav_items(&props.state, &props.current_page, &props.pending_counts);

    let on_collapse = props.on_action.reform(|_: MouseEvent| NavAction::ToggleSidebar);

    let render_item = |item: NavItemView| {
        let route = Route::from(item.page_key);
        let onclick = {
            let on_action = props.on_action.clone();
            let navigator = navigator.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                log::debug!("Menu entry selected: {:?}", route);
                on_action.emit(NavAction::SelectEntry);
                match &navigator {
                    Some(navigator) => navigator.push(&route),
                    None => log::warn!("No router in scope, cannot navigate to {:?}", route),
                }
            })
        };

        html! {
            <a
                key={item.page_key.as_str()}
                href={resolve_url(item.page_key)}
                class={to_classes(&item.link_classes)}
                aria-current={item.active.then_some("page")}
                title={item.label}
                {onclick}
            >
                <i class={to_classes(&item.icon_classes)}></i>
                if item.show_label {
                    <span class="font-medium text-sm">{item.label}</span>
                }
                if let Some(badge) = item.badge {
                    <span class="mr-auto min-w-5 h-5 px-1.5 rounded-full bg-emerald-500 text-white text-xs flex items-center justify-center">
                        {badge}
                    </span>
                }
            </a>
        }
    };

    html! {
        <aside class={to_classes(&sidebar_classes(&props.state))}>
            <div class="h-16 flex items-center justify-between px-4 border-b border-slate-100">
                <div class="flex items-center gap-3">
                    <div class="w-10 h-10 bg-gradient-to-br from-blue-600 to-indigo-600 rounded-xl flex items-center justify-center shadow-lg shadow-blue-500/20">
                        <span class="text-white font-bold text-lg">{BRAND_INITIAL}</span>
                    </div>
                    if props.state.shows_labels() {
                        <div>
                            <h1 class="font-bold text-slate-800">{BRAND_NAME}</h1>
                            <p class="text-xs text-slate-400">{BRAND_SUBTITLE}</p>
                        </div>
                    }
                </div>
                <button
                    class="hidden lg:flex btn btn-ghost btn-square btn-sm"
                    aria-label="toggle sidebar"
                    onclick={on_collapse}
                >
                    <i class={to_classes(&collapse_chevron_classes(&props.state))}></i>
                </button>
            </div>

            <nav class="p-3 space-y-1 overflow-y-auto h-[calc(100vh-8rem)]">
                { for items.into_iter().map(render_item) }
            </nav>

            <UserSection state={props.state} on_logout={props.on_logout.clone()} />
        </aside>
    }
}
