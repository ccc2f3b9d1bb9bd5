use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod story {
    pub mod api;
    pub mod error;
    pub mod models;
    pub mod progress;
}
mod pages {
    pub mod dashboard;
    pub mod landing;
}

use pages::dashboard::Dashboard;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        }
        Route::Dashboard => {
            info!("Rendering dashboard");
            html! { <Dashboard /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_top = document.document_element().unwrap().scroll_top();
                is_scrolled.set(scroll_top > 80);
            }) as Box<dyn FnMut()>);

            window
                .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                .unwrap();

            move || {
                window
                    .remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
            }
        }, ());
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
        Callback::from(move |_: MouseEvent| {
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
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 1rem;
                        left: 50%;
                        transform: translateX(-50%);
                        width: min(90%, 1100px);
                        z-index: 100;
                        background: rgba(255, 255, 255, 0.12);
                        border: 1px solid rgba(255, 255, 255, 0.25);
                        border-radius: 999px;
                        backdrop-filter: blur(12px);
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(40, 24, 8, 0.85);
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.25);
                    }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 0.75rem 1.5rem;
                    }
                    .nav-logo {
                        font-size: 1.4rem;
                        font-weight: 900;
                        color: #fff;
                        text-decoration: none;
                        letter-spacing: 0.02em;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .nav-link {
                        color: #fff;
                        text-decoration: none;
                        font-weight: 700;
                        font-size: 0.9rem;
                        padding: 0.5rem 1rem;
                        border-radius: 999px;
                        transition: background 0.3s ease, color 0.3s ease;
                    }
                    .nav-link:hover {
                        background: rgba(255, 255, 255, 0.2);
                        color: #ffd9a0;
                    }
                    .nav-cta {
                        background: linear-gradient(90deg, #f97316, #dc2626);
                        color: #fff;
                        font-weight: 700;
                        font-size: 0.85rem;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        text-decoration: none;
                        padding: 0.6rem 1.3rem;
                        border-radius: 999px;
                        box-shadow: 0 4px 14px rgba(220, 38, 38, 0.4);
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .nav-cta:hover {
                        transform: scale(1.05);
                        box-shadow: 0 6px 18px rgba(220, 38, 38, 0.5);
                    }
                    .burger-menu {
                        display: none;
                        background: rgba(255, 255, 255, 0.2);
                        border: none;
                        border-radius: 50%;
                        width: 2.5rem;
                        height: 2.5rem;
                        cursor: pointer;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 4px;
                    }
                    .burger-menu span {
                        display: block;
                        width: 16px;
                        height: 2px;
                        background: #fff;
                        border-radius: 1px;
                    }
                    @media (max-width: 860px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-right {
                            display: none;
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            position: absolute;
                            top: calc(100% + 0.5rem);
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            background: rgba(40, 24, 8, 0.95);
                            border-radius: 1.5rem;
                            padding: 1rem;
                            gap: 0.75rem;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Taleweaver"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <a href="#features" class="nav-link" onclick={close_menu.clone()}>
                        {"Features"}
                    </a>
                    <a href="#testimonials" class="nav-link" onclick={close_menu.clone()}>
                        {"Testimonials"}
                    </a>
                    <a href="#how-it-works" class="nav-link" onclick={close_menu.clone()}>
                        {"How It Works"}
                    </a>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Dashboard} classes="nav-cta">
                            {"Start Creating"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
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
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
