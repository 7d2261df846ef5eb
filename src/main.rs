use std::rc::Rc;

use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod catalog;
mod motion;
mod storefront;
mod styles;

mod components {
    pub mod collection;
    pub mod reveal;
    pub mod watch_card;
}
mod pages {
    pub mod home;
    pub mod watch_details;
}

use catalog::Catalog;
use pages::{home::Home, watch_details::WatchDetails};
use styles::GlobalStyles;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/watch/:id")]
    WatchDetails { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::WatchDetails { id } => {
            info!("Rendering WatchDetails page for '{}'", id);
            html! { <WatchDetails id={id} /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <main class="details-page not-found">
                    <div class="container">
                        <h2>{"Lost in time"}</h2>
                        <p>{"The page you are looking for does not exist."}</p>
                        <Link<Route> to={Route::Home} classes="back-link">
                            {"← Back to the boutique"}
                        </Link<Route>>
                    </div>
                </main>
            }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    // Switch styles once the hero is mostly gone
                    is_scrolled.set(scroll_top > 400);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"MORCO AURA"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <a href="/#craftsmanship" class="nav-link">{"Craftsmanship"}</a>
                    </div>
                    <div onclick={close_menu}>
                        <a href="/#latest-collection" class="nav-link">{"Collections"}</a>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let catalog = use_memo(|_| Catalog::new(storefront::collections()), ());

    html! {
        <BrowserRouter>
            <GlobalStyles />
            <ContextProvider<Rc<Catalog>> context={Rc::clone(&catalog)}>
                <Nav />
                <Switch<Route> render={switch} />
            </ContextProvider<Rc<Catalog>>>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting storefront");
    yew::Renderer::<App>::new().render();
}
