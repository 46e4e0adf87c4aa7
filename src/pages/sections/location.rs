use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::components::scroll_reveal::{RevealFrom, ScrollReveal};
use crate::components::section_header::SectionPill;
use crate::content::SectionId;
use crate::context::use_content;

#[function_component(Location)]
pub fn location() -> Html {
    let content = use_content();

    if !content.is_enabled(SectionId::Location) {
        return html! {};
    }

    let location = &content.location;
    let infos = &content.infos;

    html! {
        <section id={SectionId::Location.anchor()} class="location">
            <style>
                {r#"
                .location {
                    width: 100%;
                    background: white;
                    padding: 4rem 0;
                }
                .location-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                    align-items: stretch;
                }
                .location-info {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                .location-info h2 {
                    font-family: var(--font-headings);
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: black;
                    text-transform: uppercase;
                    letter-spacing: -0.02em;
                    line-height: 1.1;
                    margin: 0;
                }
                .location-info > p {
                    color: var(--color-text-muted);
                    line-height: 1.6;
                    margin: 0;
                }
                .location-row {
                    display: flex;
                    gap: 1rem;
                    align-items: flex-start;
                }
                .location-row-icon {
                    flex-shrink: 0;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: var(--color-primary);
                    background: color-mix(in srgb, var(--color-primary) 10%, transparent);
                }
                .location-row h4 {
                    font-family: var(--font-headings);
                    font-weight: 700;
                    text-transform: uppercase;
                    color: black;
                    margin: 0 0 0.5rem;
                }
                .location-address {
                    color: var(--color-text-muted);
                    text-decoration: none;
                    line-height: 1.6;
                }
                .location-address:hover {
                    color: var(--color-primary);
                }
                .location-hours {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.25rem;
                    min-width: 14rem;
                }
                .location-hours li {
                    display: flex;
                    justify-content: space-between;
                    gap: 2rem;
                    color: var(--color-text-muted);
                }
                .location-hours li span:first-child {
                    font-weight: 600;
                    color: black;
                }
                .location-map {
                    width: 100%;
                    min-height: 400px;
                    height: 100%;
                    border: 0;
                    border-radius: 32px;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
                }
                @media (min-width: 768px) {
                    .location { padding: 6rem 0; }
                    .location-info h2 { font-size: 3rem; }
                }
                @media (min-width: 1024px) {
                    .location-grid { grid-template-columns: 5fr 7fr; gap: 5rem; }
                    .location-map { min-height: 500px; }
                }
                "#}
            </style>
            <div class="container">
                <ScrollReveal>
                    <SectionPill label={location.pill.clone()} />
                </ScrollReveal>
                <div class="location-grid">
                    <ScrollReveal class="location-info">
                        <h2>{&location.title}</h2>
                        if !location.description.is_empty() {
                            <p>{&location.description}</p>
                        }
                        <div class="location-row">
                            <span class="location-row-icon"><IconView icon={Icon::MapPin} size={22} /></span>
                            <div>
                                <h4>{"Endereço"}</h4>
                                <a class="location-address" href={infos.maps_link.clone()} target="_blank" rel="noopener noreferrer">
                                    {&infos.address}
                                </a>
                            </div>
                        </div>
                        if !location.hours.is_empty() {
                            <div class="location-row">
                                <span class="location-row-icon"><IconView icon={Icon::Clock} size={22} /></span>
                                <div>
                                    <h4>{"Horário de Atendimento"}</h4>
                                    <ul class="location-hours">
                                        { for location.hours.iter().map(|slot| html! {
                                            <li><span>{&slot.label}</span><span>{&slot.time}</span></li>
                                        }) }
                                    </ul>
                                </div>
                            </div>
                        }
                    </ScrollReveal>
                    <ScrollReveal from={RevealFrom::Right} delay_ms={200}>
                        <iframe
                            class="location-map"
                            src={infos.maps_embed.clone()}
                            title={format!("Mapa - {}", infos.name)}
                            loading="lazy"
                            referrerpolicy="no-referrer-when-downgrade"
                            allowfullscreen=true
                        />
                    </ScrollReveal>
                </div>
            </div>
        </section>
    }
}
