use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::components::whatsapp::{whatsapp_onclick, WhatsappButton};
use crate::content::NavbarConfig;
use crate::context::use_content;
use crate::navigation::{link_onclick, nav_visible, use_window_event, viewport_height};

#[function_component(StickyNavbar)]
pub fn sticky_navbar() -> Html {
    let content = use_content();
    let visible = use_state_eq(|| false);
    let menu_open = use_state(|| false);

    {
        let visible = visible.clone();
        use_window_event("scroll", move || {
            let scroll_y = web_sys::window()
                .and_then(|window| window.scroll_y().ok())
                .unwrap_or(0.0);
            visible.set(nav_visible(scroll_y, viewport_height()));
        });
    }

    if !content.navbar.enabled {
        return html! {};
    }

    let navbar = &content.navbar;
    let infos = &content.infos;
    let menu = navbar.menu();

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };
    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let logo = match content.images.logo() {
        Some(src) => html! { <img class="nav-logo-img" src={src.to_string()} alt={infos.name.clone()} /> },
        None => html! {
            <>
                <span class="nav-logo-mark"><IconView icon={Icon::Tooth} size={20} /></span>
                if navbar.show_logo {
                    <span class="nav-logo-text">{&navbar.logo_text}</span>
                }
            </>
        },
    };

    html! {
        <header class={classes!("sticky-nav", (*visible).then_some("shown"))}>
            <style>
                {r#"
                .sticky-nav {
                    position: fixed;
                    top: 0.5rem;
                    left: 0;
                    right: 0;
                    margin: 0 auto;
                    width: 90%;
                    max-width: 64rem;
                    z-index: 1000;
                    pointer-events: none;
                    opacity: 0;
                    transform: translateY(-100px);
                    transition: opacity 0.4s ease-in-out, transform 0.4s ease-in-out;
                }
                .sticky-nav.shown {
                    opacity: 1;
                    transform: translateY(0);
                }
                .sticky-nav.shown .nav-bar {
                    pointer-events: auto;
                }
                .nav-bar {
                    background: #1f1f1f;
                    border-radius: 1rem;
                    padding: 0.75rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                }
                .nav-row {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    text-decoration: none;
                }
                .nav-logo:hover {
                    opacity: 0.8;
                }
                .nav-logo-img {
                    height: 1.5rem;
                    filter: brightness(0) invert(1);
                }
                .nav-logo-mark {
                    width: 2.5rem;
                    height: 2.5rem;
                    background: white;
                    color: black;
                    border-radius: 0.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .nav-logo-text {
                    font-family: var(--font-display);
                    font-size: 2.25rem;
                    color: white;
                    letter-spacing: 0.03em;
                }
                .nav-links {
                    display: none;
                    gap: 1rem;
                }
                .nav-links a, .nav-mobile a {
                    font-family: var(--font-headings);
                    font-weight: 700;
                    text-decoration: none;
                    transition: color 0.2s;
                }
                .nav-links a {
                    font-size: 0.875rem;
                    color: #9ca3af;
                }
                .nav-links a:hover {
                    color: var(--color-primary);
                }
                .nav-cta.whatsapp-button {
                    display: none;
                    background: white;
                    color: black;
                    padding: 0.625rem 1.5rem;
                    border-radius: 0.75rem;
                    font-size: 0.875rem;
                }
                .nav-cta.whatsapp-button:hover {
                    background: var(--color-whatsapp-hover);
                    color: var(--color-whatsapp-text);
                }
                .nav-toggle {
                    width: 2.5rem;
                    height: 2.5rem;
                    background: white;
                    border: none;
                    border-radius: 0.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: black;
                    cursor: pointer;
                }
                .nav-mobile {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    padding: 1rem 0 0.5rem 0.5rem;
                    margin-top: 0.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                }
                .nav-mobile a {
                    color: #d1d5db;
                    padding: 0.5rem 0;
                }
                .nav-mobile a:hover {
                    color: white;
                }
                @media (min-width: 768px) {
                    .sticky-nav {
                        top: 1.5rem;
                    }
                    .nav-links {
                        display: flex;
                    }
                    .nav-cta.whatsapp-button {
                        display: inline-flex;
                    }
                    .nav-toggle, .nav-mobile {
                        display: none;
                    }
                }
                "#}
            </style>
            <div class="nav-bar">
                <div class="nav-row">
                    <a class="nav-logo" href="#hero" onclick={link_onclick("#hero", close_menu.clone())}>
                        { logo }
                    </a>
                    <nav class="nav-links">
                        { for menu.iter().filter(|link| link.href != NavbarConfig::CONTACT_HREF).map(|link| html! {
                            <a href={link.href.clone()} onclick={link_onclick(&link.href, close_menu.clone())}>
                                {&link.label}
                            </a>
                        }) }
                    </nav>
                    <WhatsappButton
                        class="nav-cta"
                        text={navbar.cta_button_text.clone()}
                        onclick={whatsapp_onclick(&infos.whatsapp, Some(infos.default_whatsapp_message.clone()))}
                    />
                    <button class="nav-toggle" onclick={toggle_menu} aria-label="Menu">
                        <IconView icon={if *menu_open { Icon::Close } else { Icon::Menu }} />
                    </button>
                </div>
                if *menu_open {
                    <nav class="nav-mobile">
                        { for menu.iter().map(|link| html! {
                            <a href={link.href.clone()} onclick={link_onclick(&link.href, close_menu.clone())}>
                                {&link.label}
                            </a>
                        }) }
                    </nav>
                }
            </div>
        </header>
    }
}
