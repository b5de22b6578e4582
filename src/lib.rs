use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod config;
pub mod pages;

use components::footer::Footer;
use components::navigation::Navigation;
use pages::landing::Landing;
use pages::signin::SignIn;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/signin")]
    SignIn,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing /> },
        Route::SignIn => html! { <SignIn /> },
        Route::NotFound => html! {
            <div style="min-height: 60vh; display: flex; flex-direction: column; align-items: center; justify-content: center; padding-top: 8rem;">
                <h1 style="font-size: 3rem; margin-bottom: 1rem;">{"404"}</h1>
                <p style="color: #9ca3af;">{"This page does not exist."}</p>
            </div>
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Navigation />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
    }
}
