use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod carousel;
mod config;
mod consent;
mod content;
mod context;
mod navigation;
mod seo;
mod stacking;
mod theme;
mod components {
    pub mod cookie_consent;
    pub mod error_fallback;
    pub mod icons;
    pub mod nav;
    pub mod scroll_reveal;
    pub mod section_header;
    pub mod whatsapp;
}
mod pages {
    pub mod home;
    pub mod legal;
    pub mod sections {
        pub mod about;
        pub mod before_after;
        pub mod faq;
        pub mod features;
        pub mod footer;
        pub mod hero;
        pub mod location;
        pub mod team;
        pub mod testimonials;
    }
}

use components::cookie_consent::CookieConsent;
use components::error_fallback::{ErrorFallback, ErrorFallbackProps};
use content::{ContentConfig, LegalPage};
use context::ThemeRoot;
use navigation::scroll_to_top;
use pages::{
    home::Home,
    legal::{PrivacyPolicy, TermsOfUse},
};
use theme::Theme;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[at("/terms")]
    Terms,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<LegalPage> for Route {
    fn from(page: LegalPage) -> Self {
        match page {
            LegalPage::Privacy => Route::Privacy,
            LegalPage::Terms => Route::Terms,
        }
    }
}

/// Route switch plus the cookie banner, which stays up on every view.
#[function_component(Pages)]
fn page_switch() -> Html {
    let navigator = use_navigator();

    let go = Callback::from(move |route: Route| {
        match &navigator {
            Some(navigator) => navigator.push(&route),
            None => error!("no router available to open {:?}", route),
        }
        scroll_to_top();
    });

    let switch = {
        let on_legal = go.reform(|page: LegalPage| Route::from(page));
        let on_back = go.reform(|_: ()| Route::Home);
        move |route: Route| match route {
            Route::Home | Route::NotFound => {
                info!("Rendering Home page");
                html! { <Home on_legal={on_legal.clone()} /> }
            }
            Route::Privacy => {
                info!("Rendering Privacy page");
                html! { <PrivacyPolicy on_back={on_back.clone()} /> }
            }
            Route::Terms => {
                info!("Rendering Terms page");
                html! { <TermsOfUse on_back={on_back.clone()} /> }
            }
        }
    };

    html! {
        <>
            <Switch<Route> render={switch} />
            <CookieConsent on_privacy={go.reform(|_: ()| Route::Privacy)} />
        </>
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    content: Rc<ContentConfig>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let theme = Theme::from_content(&props.content);

    html! {
        <BrowserRouter>
            <ContextProvider<Rc<ContentConfig>> context={props.content.clone()}>
                <ContextProvider<Theme> context={theme}>
                    <ThemeRoot>
                        <style>
                            {r#"
                            html {
                                scroll-behavior: smooth;
                            }
                            body {
                                margin: 0;
                                -webkit-font-smoothing: antialiased;
                            }
                            .site-root {
                                font-family: var(--font-body, Inter, sans-serif);
                                color: var(--color-text, #1e293b);
                                background: var(--color-background, #ffffff);
                                overflow-x: clip;
                            }
                            .site-root ::selection {
                                background: var(--color-primary);
                                color: white;
                            }
                            .container {
                                width: 100%;
                                max-width: 80rem;
                                margin: 0 auto;
                                padding: 0 1.5rem;
                                box-sizing: border-box;
                            }
                            .section-pill-row {
                                display: flex;
                                align-items: center;
                                gap: 1rem;
                                margin-bottom: 3rem;
                            }
                            .section-pill {
                                border: 1px solid var(--color-primary);
                                border-radius: 9999px;
                                padding: 0.5rem 1.25rem;
                                font-family: var(--font-headings);
                                font-size: 0.875rem;
                                font-weight: 500;
                                color: #262626;
                                background: #fafafa;
                                white-space: nowrap;
                            }
                            .pill-dot {
                                width: 6px;
                                height: 6px;
                                flex-shrink: 0;
                                border-radius: 9999px;
                                background: black;
                            }
                            .pill-line {
                                flex: 1;
                                height: 1px;
                                background: #e5e5e5;
                            }
                            .section-pill-row.dark .section-pill {
                                color: white;
                                background: rgba(255, 255, 255, 0.05);
                            }
                            .section-pill-row.dark .pill-dot {
                                background: white;
                            }
                            .section-pill-row.dark .pill-line {
                                background: rgba(255, 255, 255, 0.15);
                            }
                            .reveal {
                                opacity: 0;
                                transition: opacity 0.8s cubic-bezier(0.22, 1, 0.36, 1), transform 0.8s cubic-bezier(0.22, 1, 0.36, 1);
                            }
                            .reveal-up { transform: translateY(40px); }
                            .reveal-left { transform: translateX(-40px); }
                            .reveal-right { transform: translateX(40px); }
                            .reveal.revealed {
                                opacity: 1;
                                transform: none;
                            }
                            @media (min-width: 768px) {
                                .container { padding: 0 3rem; }
                            }
                            @media (prefers-reduced-motion: reduce) {
                                .reveal { transition: none; transform: none; opacity: 1; }
                            }
                            "#}
                        </style>
                        <Pages />
                    </ThemeRoot>
                </ContextProvider<Theme>>
            </ContextProvider<Rc<ContentConfig>>>
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    match content::load() {
        Ok(content) => {
            info!("Loaded content with {} visible sections", content.visible_sections().len());
            yew::Renderer::<App>::with_props(AppProps {
                content: Rc::new(content),
            })
            .render();
        }
        Err(e) => {
            error!("Failed to load site content: {}", e);
            yew::Renderer::<ErrorFallback>::with_props(ErrorFallbackProps { message: e.to_string() }).render();
        }
    }
}
