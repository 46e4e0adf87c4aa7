use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::components::scroll_reveal::{RevealFrom, ScrollReveal};
use crate::components::section_header::SectionPill;
use crate::content::SectionId;
use crate::context::use_content;

#[function_component(About)]
pub fn about() -> Html {
    let content = use_content();

    if !content.is_enabled(SectionId::About) {
        return html! {};
    }

    let about = &content.about;
    let infos = &content.infos;

    html! {
        <section id={SectionId::About.anchor()} class="about">
            <style>
                {r#"
                .about {
                    width: 100%;
                    background: white;
                    padding: 4rem 0;
                }
                .about-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                    align-items: stretch;
                }
                .about-copy {
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                }
                .about-copy h2 {
                    font-family: var(--font-headings);
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: black;
                    line-height: 1.1;
                    text-transform: uppercase;
                    letter-spacing: -0.02em;
                    margin: 0 0 2rem;
                }
                .about-copy > div > p {
                    color: var(--color-text-muted);
                    font-size: 1.125rem;
                    line-height: 1.6;
                    margin: 0 0 2.5rem;
                    max-width: 42rem;
                }
                .about-features {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                .about-feature {
                    display: flex;
                    gap: 1.25rem;
                }
                .about-feature-icon {
                    flex-shrink: 0;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: var(--color-primary);
                    background: color-mix(in srgb, var(--color-primary) 10%, transparent);
                    transition: transform 0.2s;
                }
                .about-feature-icon:hover {
                    transform: scale(1.1);
                }
                .about-feature h4 {
                    font-family: var(--font-headings);
                    font-weight: 700;
                    font-size: 1.25rem;
                    color: black;
                    text-transform: uppercase;
                    letter-spacing: 0.03em;
                    margin: 0 0 0.5rem;
                }
                .about-feature p {
                    color: var(--color-text-muted);
                    line-height: 1.6;
                    margin: 0;
                }
                .about-media {
                    position: relative;
                    min-height: 500px;
                }
                .about-media > div {
                    height: 100%;
                }
                .about-frame {
                    position: relative;
                    width: 100%;
                    height: 100%;
                    min-height: 500px;
                    border-radius: 32px;
                    overflow: hidden;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .about-frame img {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s;
                }
                .about-frame:hover img {
                    transform: scale(1.05);
                }
                .about-frame-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.8), rgba(0, 0, 0, 0.1) 50%, transparent);
                }
                .about-caption {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    width: 100%;
                    box-sizing: border-box;
                    padding: 2rem;
                    text-align: center;
                }
                .about-caption h3 {
                    font-family: var(--font-display);
                    font-size: 2.25rem;
                    color: white;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    margin: 0 0 0.5rem;
                }
                .about-caption p {
                    font-family: var(--font-headings);
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    margin: 0;
                }
                @media (min-width: 768px) {
                    .about { padding: 6rem 0; }
                    .about-copy h2 { font-size: 3rem; }
                    .about-copy > div > p { font-size: 1.25rem; }
                    .about-caption { padding: 2.5rem; }
                    .about-caption h3 { font-size: 3rem; }
                }
                @media (min-width: 1024px) {
                    .about-grid { grid-template-columns: 1fr 1fr; gap: 5rem; }
                    .about-copy h2 { font-size: 3.75rem; }
                    .about-media, .about-frame { min-height: 600px; }
                }
                "#}
            </style>
            <div class="container">
                <ScrollReveal>
                    <SectionPill label={about.pill.clone()} />
                </ScrollReveal>
                <div class="about-grid">
                    <div class="about-copy">
                        <ScrollReveal>
                            <h2>{&about.headline}</h2>
                            <p>{&about.description}</p>
                        </ScrollReveal>
                        <div class="about-features">
                            { for about.features.iter().enumerate().map(|(index, feature)| html! {
                                <ScrollReveal key={index} delay_ms={100 * (index as u32 + 1)}>
                                    <div class="about-feature">
                                        <div class="about-feature-icon">
                                            <IconView icon={Icon::lookup(feature.icon.as_deref(), Icon::Smile)} size={24} />
                                        </div>
                                        <div>
                                            <h4>{&feature.title}</h4>
                                            <p>{&feature.description}</p>
                                        </div>
                                    </div>
                                </ScrollReveal>
                            }) }
                        </div>
                    </div>
                    <div class="about-media">
                        <ScrollReveal from={RevealFrom::Right} delay_ms={200}>
                            <div class="about-frame">
                                <img src={content.images.about.main.clone()} alt={about.headline.clone()} />
                                <div class="about-frame-shade"></div>
                                <div class="about-caption">
                                    <h3>{&infos.name}</h3>
                                    <p>{&infos.mini_address}</p>
                                </div>
                            </div>
                        </ScrollReveal>
                    </div>
                </div>
            </div>
        </section>
    }
}
