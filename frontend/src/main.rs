use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod dom;
mod error;
mod scheduler;
mod components {
    pub mod notification;
}
mod enhancer {
    pub mod download;
    pub mod menu;
    pub mod navbar;
    pub mod navigation;
    pub mod page;
    pub mod pointer;
    pub mod reveal;
}
mod pages {
    pub mod landing;
}
#[cfg(test)]
mod testing;

use pages::landing::Landing;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"404"}</h1>
                    <Link<Route> to={Route::Home}>{"Back to QAPlay"}</Link<Route>>
                </div>
            }
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


#[cfg(debug_assertions)]
const LOG_LEVEL: Level = Level::Debug;

#[cfg(not(debug_assertions))]
const LOG_LEVEL: Level = Level::Info;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(LOG_LEVEL).expect("error initializing log");

    info!("Starting QAPlay landing");
    yew::Renderer::<App>::new().render();
}
