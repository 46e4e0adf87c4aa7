use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::components::scroll_reveal::ScrollReveal;
use crate::content::{Cta, SectionId, Stat};
use crate::context::use_content;
use crate::navigation::link_onclick;

fn cta_link(cta: &Cta, class: &'static str) -> Html {
    html! {
        <a class={classes!("hero-cta", class)} href={cta.link.clone()} onclick={link_onclick(&cta.link, Callback::noop())}>
            {&cta.text}
            <IconView icon={Icon::ChevronRight} size={18} />
        </a>
    }
}

fn stat_block(stat: &Stat, class: &'static str) -> Html {
    html! {
        <div class={classes!("hero-stat", class)}>
            <span class="hero-stat-value">{&stat.value}</span>
            <span class="hero-stat-label">{&stat.label}</span>
        </div>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let content = use_content();

    if !content.is_enabled(SectionId::Hero) {
        return html! {};
    }

    let hero = &content.hero;
    let backgrounds = &content.images.hero;
    let avatars: Vec<&str> = content
        .testimonials
        .items
        .iter()
        .map(|item| item.image.as_str())
        .take(hero.badge.avatars)
        .collect();

    html! {
        <section id={SectionId::Hero.anchor()} class="hero">
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100dvh;
                    width: 100%;
                    overflow: hidden;
                    display: flex;
                    align-items: flex-end;
                    color: white;
                    background: #0a0a0a;
                }
                .hero-bg {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .hero-bg.desktop { display: none; }
                .hero-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.85) 0%, rgba(0, 0, 0, 0.35) 50%, rgba(0, 0, 0, 0.1) 100%);
                }
                .hero-inner {
                    position: relative;
                    z-index: 1;
                    width: 100%;
                    padding-top: 7rem;
                    padding-bottom: 3rem;
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 0.5rem 1rem 0.5rem 0.5rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(12px);
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    width: fit-content;
                }
                .hero-avatars {
                    display: flex;
                }
                .hero-avatars img {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 9999px;
                    object-fit: cover;
                    border: 2px solid white;
                    margin-left: -0.5rem;
                }
                .hero-avatars img:first-child {
                    margin-left: 0;
                }
                .hero-badge-text {
                    display: flex;
                    flex-direction: column;
                    line-height: 1.1;
                }
                .hero-badge-rating {
                    display: flex;
                    align-items: center;
                    gap: 0.25rem;
                    font-weight: 700;
                    font-size: 0.875rem;
                }
                .hero-badge-rating .icon {
                    color: #facc15;
                }
                .hero-badge-subtitle {
                    font-size: 10px;
                    letter-spacing: 0.1em;
                    opacity: 0.7;
                }
                .hero-headline {
                    font-family: var(--font-display);
                    font-size: 3.5rem;
                    line-height: 0.9;
                    margin: 0;
                    letter-spacing: 0.01em;
                }
                .hero-headline span {
                    display: block;
                }
                .hero-headline .accent {
                    color: var(--color-primary);
                }
                .hero-floating {
                    display: none;
                }
                .hero-stat {
                    display: flex;
                    flex-direction: column;
                }
                .hero-stat-value {
                    font-family: var(--font-display);
                    font-size: 2.5rem;
                    line-height: 1;
                }
                .hero-stat-label {
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    opacity: 0.7;
                }
                .hero-floating .hero-stat {
                    position: absolute;
                    padding: 1rem 1.5rem;
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(12px);
                    border: 1px solid rgba(255, 255, 255, 0.15);
                }
                .hero-stat.left { left: 4%; top: 45%; }
                .hero-stat.top-right { right: 4%; top: 18%; }
                .hero-bottom {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                .hero-bottom-stats {
                    display: flex;
                    gap: 2.5rem;
                }
                .hero-ctas {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .hero-cta {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    padding: 1rem 2rem;
                    border-radius: 0.75rem;
                    font-family: var(--font-headings);
                    font-weight: 700;
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    text-decoration: none;
                    transition: transform 0.2s, background 0.2s, color 0.2s;
                }
                .hero-cta:hover {
                    transform: translateY(-2px);
                }
                .hero-cta.primary {
                    background: var(--color-primary);
                    color: white;
                }
                .hero-cta.primary:hover {
                    background: var(--color-primary-dark);
                }
                .hero-cta.secondary {
                    background: rgba(255, 255, 255, 0.1);
                    color: white;
                    border: 1px solid rgba(255, 255, 255, 0.3);
                }
                .hero-cta.secondary:hover {
                    background: white;
                    color: black;
                }
                @media (min-width: 768px) {
                    .hero-bg.mobile { display: none; }
                    .hero-bg.desktop { display: block; }
                    .hero-headline { font-size: 7rem; }
                    .hero-floating { display: block; }
                    .hero-bottom {
                        flex-direction: row;
                        justify-content: space-between;
                        align-items: flex-end;
                    }
                    .hero-ctas { flex-direction: row; }
                }
                "#}
            </style>
            <img class="hero-bg mobile" src={backgrounds.background_mobile.clone()} alt="" />
            <img class="hero-bg desktop" src={backgrounds.background_desktop.clone()} alt="" />
            <div class="hero-shade"></div>

            <div class="hero-floating">
                <ScrollReveal delay_ms={600}>
                    { stat_block(&hero.floating_stats.left, "left") }
                </ScrollReveal>
                <ScrollReveal delay_ms={700}>
                    { stat_block(&hero.floating_stats.top_right, "top-right") }
                </ScrollReveal>
            </div>

            <div class="container hero-inner">
                <ScrollReveal>
                    <div class="hero-badge">
                        <div class="hero-avatars">
                            { for avatars.iter().map(|src| html! { <img src={src.to_string()} alt="" /> }) }
                        </div>
                        <div class="hero-badge-text">
                            <span class="hero-badge-rating">
                                <IconView icon={Icon::Star} size={14} filled={true} />
                                {&hero.badge.member_count}
                            </span>
                            <span class="hero-badge-subtitle">{&hero.badge.subtitle}</span>
                        </div>
                    </div>
                </ScrollReveal>

                <ScrollReveal delay_ms={150}>
                    <h1 class="hero-headline">
                        <span>{&hero.headline.line1}</span>
                        <span class="accent">{&hero.headline.line2}</span>
                        <span>{&hero.headline.line3}</span>
                    </h1>
                </ScrollReveal>

                <ScrollReveal delay_ms={300} class="hero-bottom">
                    <div class="hero-bottom-stats">
                        { for hero.bottom_stats.iter().map(|stat| stat_block(stat, "bottom")) }
                    </div>
                    <div class="hero-ctas">
                        { cta_link(&hero.cta_primary, "primary") }
                        { cta_link(&hero.cta_secondary, "secondary") }
                    </div>
                </ScrollReveal>
            </div>
        </section>
    }
}
