use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod error;
mod navigation;
mod reveal;
mod visibility;

mod components {
    pub mod card;
    pub mod footer;
    pub mod header;
    pub mod layout;
    pub mod section;
}
mod pages {
    pub mod home;
    pub mod media;
}

use pages::{home::Home, media::Media};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/media")]
    Media,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Media => {
            info!("Rendering Media page");
            html! { <Media /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::STUDIO_NAME);
    yew::Renderer::<App>::new().render();
}
