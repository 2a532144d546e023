//! Landing page with scroll-driven reveals.
//!
//! The reveal logic in [`reveal`] is plain Rust and runs anywhere; the Yew
//! components in [`components`] bind it to the browser.

use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod reveal;
pub mod utils;

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    let level = config::get_reveal_config()
        .log_level()
        .unwrap_or(log::Level::Info);
    wasm_logger::init(wasm_logger::Config::new(level));
    if let Some(e) = config::rejected_override() {
        log::warn!("Ignoring REVEAL_CONFIG override: {}", e);
    }
    log::info!("Mounting landing page");
    yew::Renderer::<App>::new().render();
}
