use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod reveal;
mod scroll;
mod storage;
mod visibility;
mod contact {
    pub mod controller;
    pub mod form;
    pub mod submission;
}
mod components {
    pub mod contact_form;
    pub mod notification;
    pub mod theme_toggle;
}
mod pages {
    pub mod catalog;
    pub mod home;
}

use components::notification::Toaster;
use components::theme_toggle::ThemeToggle;
use config::SiteConfig;
use pages::catalog::COMPANY_NAME;
use pages::home::Home;
use scroll::Section;

/// Past this many pixels the nav bar gets its solid background.
const NAV_SCROLL_THRESHOLD: i32 = 16;

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
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
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
                let window = web_sys::window();
                let scroll_callback = {
                    let window = window.clone();
                    Closure::wrap(Box::new(move || {
                        let scroll_top = window
                            .as_ref()
                            .and_then(|w| w.document())
                            .and_then(|d| d.document_element())
                            .map(|root| root.scroll_top())
                            .unwrap_or(0);
                        is_scrolled.set(scroll_top > NAV_SCROLL_THRESHOLD);
                    }) as Box<dyn FnMut()>)
                };

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }

                move || {
                    if let Some(window) = &window {
                        let _ = window
                            .remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                    }
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

    let nav_link = |section: Section| {
        let menu_open = menu_open.clone();
        let jump = scroll::on_click(section);
        let onclick = Callback::from(move |e: MouseEvent| {
            menu_open.set(false);
            jump.emit(e);
        });
        html! {
            <button class="nav-link" {onclick}>{ section.label() }</button>
        }
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <button class="nav-logo" onclick={scroll::on_click(Section::Home)}>
                    { COMPANY_NAME }
                </button>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for Section::ALL.into_iter().map(nav_link) }
                    <ThemeToggle />
                </div>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: SiteConfig,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <ContextProvider<SiteConfig> context={props.config.clone()}>
            <Toaster>
                <BrowserRouter>
                    <Nav />
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </Toaster>
        </ContextProvider<SiteConfig>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    let (config, revision_error) = match SiteConfig::from_env() {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };

    console_log::init_with_level(config.log_level).expect("error initializing log");
    if let Some(err) = revision_error {
        warn!("{err}, using the current revision");
    }

    info!("Starting {COMPANY_NAME} site ({:?} revision)", config.revision);
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
