use navigation::style::content_classes;
use navigation::{Breakpoint, NavAction, NavigationUiState, PendingCounts, request_logout};
use yew::prelude::*;

use super::mobile_header::MobileHeader;
use super::sidebar::Sidebar;
use crate::components::to_classes;
use crate::session::SessionContext;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    /// Identifier of the page being shown, matched exactly against menu page keys
    pub current_page: String,
    #[prop_or_default]
    pub pending_counts: PendingCounts,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    let ui_state = use_state(NavigationUiState::default);
    let session = use_context::<SessionContext>();

    let on_action = {
        let ui_state = ui_state.clone();
        Callback::from(move |action: NavAction| {
            ui_state.set((*ui_state).apply(action));
        })
    };

    let on_logout = Callback::from(move |_: ()| match &session {
        Some(ctx) => request_logout(ctx.client.as_ref()),
        None => log::warn!("No session client in context, logout ignored"),
    });

    let on_dismiss = on_action.reform(|_: MouseEvent| NavAction::DismissOverlay);

    html! {
        <div class="min-h-screen bg-slate-50" dir="rtl">
            <MobileHeader
                state={*ui_state}
                on_toggle={on_action.reform(|_: ()| NavAction::ToggleMobileMenu)}
            />

            // `lg:hidden` suppresses the overlay on desktop
            if ui_state.overlay_visible(Breakpoint::Compact) {
                <div class="lg:hidden fixed inset-0 bg-black/50 z-40" onclick={on_dismiss}></div>
            }

            <Sidebar
                state={*ui_state}
                current_page={props.current_page.clone()}
                pending_counts={props.pending_counts.clone()}
                on_action={on_action.clone()}
                {on_logout}
            />

            <main class={to_classes(&content_classes(&ui_state))}>
                <div class="p-4 lg:p-6">
                    { for props.children.iter() }
                </div>
            </main>
        </div>
    }
}
