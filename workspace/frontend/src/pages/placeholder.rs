use navigation::{PageKey, active_entry};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub page: PageKey,
}

/// Body shown for pages whose content lives outside this application.
#[function_component(PagePlaceholder)]
pub fn page_placeholder(props: &Props) -> Html {
    let title = active_entry(props.page.as_str())
        .map(|entry| entry.label)
        .unwrap_or(props.page.as_str());

    html! {
        <div class="flex flex-col gap-4">
            <h1 class="text-2xl font-bold text-slate-800">{title}</h1>
            <div class="rounded-xl border border-dashed border-slate-300 bg-white p-12 text-center text-slate-400">
                {props.page.as_str()}
            </div>
        </div>
    }
}
