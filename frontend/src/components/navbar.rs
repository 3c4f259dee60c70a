use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::models::NavLink;

const SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub logo: String,
    pub links: Vec<NavLink>,
    pub contact_phone: String,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    let scroll_y = window
                        .as_ref()
                        .and_then(|w| w.scroll_y().ok())
                        .unwrap_or(0.0);
                    is_scrolled.set(scroll_y > SCROLL_THRESHOLD);
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = &window {
                if window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .is_err()
                {
                    gloo_console::error!("Failed to attach scroll listener");
                }
            }

            move || {
                if let Some(window) = window {
                    if window
                        .remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                        .is_err()
                    {
                        gloo_console::error!("Failed to detach scroll listener");
                    }
                }
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

    // Anchor navigation still happens, only the menu closes.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let phone_href = format!("tel:{}", props.contact_phone.replace(' ', ""));

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: rgba(0, 0, 0, 0.3);
                        backdrop-filter: blur(4px);
                        transition: all 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: #fff;
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        height: 80px;
                        padding: 0 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #fff;
                        text-decoration: none;
                    }
                    .top-nav.scrolled .nav-logo,
                    .top-nav.scrolled .nav-link {
                        color: #111;
                    }
                    .nav-links {
                        display: flex;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: rgba(255, 255, 255, 0.9);
                        font-size: 0.9rem;
                        font-weight: 500;
                        text-decoration: none;
                    }
                    .nav-phone {
                        padding: 0.6rem 1.2rem;
                        border-radius: 6px;
                        border: 1px solid rgba(255, 255, 255, 0.4);
                        background: rgba(255, 255, 255, 0.2);
                        color: #fff;
                        text-decoration: none;
                    }
                    .top-nav.scrolled .nav-phone {
                        background: #111;
                        border-color: #111;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        display: block;
                        width: 24px;
                        height: 2px;
                        margin: 5px 0;
                        background: #fff;
                    }
                    .top-nav.scrolled .burger-menu span {
                        background: #111;
                    }
                    .mobile-menu {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 1rem 1.5rem;
                        background: #fff;
                        box-shadow: 0 8px 16px rgba(0, 0, 0, 0.1);
                    }
                    .mobile-menu a {
                        color: #222;
                        font-size: 1.1rem;
                        text-decoration: none;
                    }
                    @media (max-width: 768px) {
                        .nav-links, .nav-phone { display: none; }
                        .burger-menu { display: block; }
                    }
                "#}
            </style>
            <div class="nav-content">
                <a href="#" class="nav-logo">{ &props.logo }</a>
                <nav class="nav-links">
                    { for props.links.iter().map(|link| html! {
                        <a class="nav-link" href={link.href.clone()}>{ &link.label }</a>
                    }) }
                </nav>
                <a class="nav-phone" href={phone_href.clone()}>{ format!("☎ {}", props.contact_phone) }</a>
                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            if *menu_open {
                <nav class="mobile-menu">
                    { for props.links.iter().map(|link| html! {
                        <a href={link.href.clone()} onclick={close_menu.clone()}>{ &link.label }</a>
                    }) }
                    <a href={phone_href}>{ format!("☎ {}", props.contact_phone) }</a>
                </nav>
            }
        </header>
    }
}
