use navigation::PageKey;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::Layout;
use crate::pages::placeholder::PagePlaceholder;

#[derive(Debug, Clone, Copy, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[at("/orders")]
    Orders,
    #[at("/products")]
    Products,
    #[at("/categories")]
    Categories,
    #[at("/offers")]
    Offers,
    #[at("/dailymenu")]
    DailyMenu,
    #[at("/drivers")]
    Drivers,
    #[at("/livemap")]
    LiveMap,
    #[at("/services")]
    Services,
    #[at("/customers")]
    Customers,
    #[at("/workers")]
    Workers,
    #[at("/branches")]
    Branches,
    #[at("/notifications")]
    Notifications,
    #[at("/messages")]
    Messages,
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<PageKey> for Route {
    fn from(page: PageKey) -> Self {
        match page {
            PageKey::Dashboard => Route::Dashboard,
            PageKey::Orders => Route::Orders,
            PageKey::Products => Route::Products,
            PageKey::Categories => Route::Categories,
            PageKey::Offers => Route::Offers,
            PageKey::DailyMenu => Route::DailyMenu,
            PageKey::Drivers => Route::Drivers,
            PageKey::LiveMap => Route::LiveMap,
            PageKey::Services => Route::Services,
            PageKey::Customers => Route::Customers,
            PageKey::Workers => Route::Workers,
            PageKey::Branches => Route::Branches,
            PageKey::Notifications => Route::Notifications,
            PageKey::Messages => Route::Messages,
            PageKey::Settings => Route::Settings,
        }
    }
}

impl Route {
    /// Page shown for this route; the root path lands on the dashboard.
    pub fn page_key(&self) -> Option<PageKey> {
        match self {
            Route::Home | Route::Dashboard => Some(PageKey::Dashboard),
            Route::NotFound => None,
            other => PageKey::ALL.into_iter().find(|key| Route::from(*key) == *other),
        }
    }
}

/// Destination URL for a menu entry.
pub fn resolve_url(page: PageKey) -> String {
    Route::from(page).to_path()
}

pub fn switch(route: Route) -> Html {
    log::debug!("Routing to: {:?}", route);
    match route.page_key() {
        Some(page) => {
            log::trace!("Rendering {} page", page);
            html! {
                <Layout current_page={page.as_str()}>
                    <PagePlaceholder page={page} />
                </Layout>
            }
        }
        None => {
            log::warn!("404 - Route not found");
            html! {
                <Layout current_page="NotFound">
                    <h1 class="text-2xl font-bold">{"404"}</h1>
                </Layout>
            }
        }
    }
}
