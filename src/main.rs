use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod scroll {
    pub mod easing;
    pub mod engine;
    pub mod history;
    pub mod provider;
    pub mod tween;
}
mod components {
    pub mod animated;
    pub mod navbar;
    pub mod navbar_state;
}
mod pages {
    pub mod home;
    pub mod termsprivacy;
}

use pages::home::Home;
use pages::termsprivacy::{PrivacyPolicy, TermsAndConditions};
use scroll::provider::SmoothScrollProvider;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[at("/terms")]
    Terms,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsAndConditions /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <SmoothScrollProvider>
                <Switch<Route> render={switch} />
            </SmoothScrollProvider>
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
