use log::{info, Level};
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod components {
    pub mod collapse;
    pub mod countdown;
    pub mod course_grid;
    pub mod faq;
    pub mod syllabus_modal;
}
mod data {
    pub mod backend;
    pub mod frontend;
    pub mod laravel;
}
mod pages {
    pub mod backend;
    pub mod frontend;
    pub mod laravel;

    use yew::prelude::*;

    /// Hero and page chrome shared by the three track pages.
    pub fn track_style() -> Html {
        html! {
            <style>
                {r#"
                .track-page {
                    background: #0d0e12;
                    color: #ddd;
                    min-height: 100vh;
                    padding-top: 4rem;
                }

                .hero {
                    max-width: 760px;
                    margin: 0 auto;
                    padding: 5rem 1.5rem 3rem;
                    text-align: center;
                }

                .hero-badge {
                    display: inline-block;
                    background: rgba(255, 209, 102, 0.12);
                    color: #ffd166;
                    border: 1px solid rgba(255, 209, 102, 0.4);
                    border-radius: 999px;
                    padding: 0.3rem 1rem;
                    font-size: 0.8rem;
                    letter-spacing: 0.08em;
                    text-transform: uppercase;
                    margin-bottom: 1.25rem;
                }

                .hero h1 {
                    color: #fff;
                    font-size: 2.6rem;
                    line-height: 1.2;
                    margin-bottom: 1rem;
                }

                .hero-sub {
                    color: #aaa;
                    font-size: 1.1rem;
                    line-height: 1.7;
                }

                .hero-cta {
                    background: #ffd166;
                    color: #1a1a1a;
                    border: none;
                    border-radius: 10px;
                    padding: 0.9rem 2.2rem;
                    font-size: 1.05rem;
                    font-weight: 700;
                    cursor: pointer;
                }

                .hero-cta:hover {
                    filter: brightness(1.08);
                }

                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2rem;
                    }
                }
                "#}
            </style>
        }
    }
}
mod syllabus {
    pub mod accordion;
    pub mod catalog;
    pub mod modal;
}

use pages::backend::BackendTrack;
use pages::frontend::FrontendTrack;
use pages::laravel::LaravelTrack;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/frontend")]
    Frontend,
    #[at("/backend")]
    Backend,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Laravel track page");
            html! { <LaravelTrack /> }
        }
        Route::Frontend => {
            info!("Rendering Frontend track page");
            html! { <FrontendTrack /> }
        }
        Route::Backend => {
            info!("Rendering Backend track page");
            html! { <BackendTrack /> }
        }
    }
}

/// Smooth-scrolls to an in-page section; silently does nothing when the
/// section is not on the current page.
pub fn scroll_to_section(id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(target) = document.get_element_by_id(id) {
        let mut options = web_sys::ScrollIntoViewOptions::new();
        options.behavior(web_sys::ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_e: MouseEvent| {
            menu_open.set(false);
        })
    };

    let scroll_link = |section: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_section(section);
        })
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"kelaskoding"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">
                            {"Laravel AI"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Frontend} classes="nav-link">
                            {"Frontend"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Backend} classes="nav-link">
                            {"Backend"}
                        </Link<Route>>
                    </div>
                    <button class="nav-link nav-anchor" onclick={scroll_link("courses")}>
                        {"Kelas"}
                    </button>
                    <button class="nav-link nav-anchor" onclick={scroll_link("faq")}>
                        {"FAQ"}
                    </button>
                </div>
            </div>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: rgba(13, 14, 18, 0.9);
                    backdrop-filter: blur(8px);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.06);
                }

                .nav-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 0.9rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    color: #fff;
                    font-weight: 700;
                    font-size: 1.2rem;
                    text-decoration: none;
                }

                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 1.25rem;
                }

                .nav-link {
                    color: #bbb;
                    text-decoration: none;
                    font-size: 0.95rem;
                    cursor: pointer;
                }

                .nav-link:hover {
                    color: #fff;
                }

                .nav-anchor {
                    background: none;
                    border: none;
                    padding: 0;
                    font: inherit;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }

                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: #fff;
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }

                    .nav-links {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        background: rgba(13, 14, 18, 0.98);
                        padding: 1rem 1.5rem;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.06);
                    }

                    .nav-links.mobile-menu-open {
                        display: flex;
                        align-items: flex-start;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Navbar />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
