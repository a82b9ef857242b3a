use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod pages;
pub mod router;
pub mod session;
pub mod settings;

pub use router::Route;
use router::switch;
use session::SessionContext;

#[function_component(App)]
pub fn app() -> Html {
    let session = use_memo((), |_| SessionContext::from_settings());

    html! {
        <ContextProvider<SessionContext> context={(*session).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<SessionContext>>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Alma Admin Dashboard Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Session service URL: {}", settings.auth_base_url());
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
