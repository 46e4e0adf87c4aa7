use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::components::scroll_reveal::ScrollReveal;
use crate::components::section_header::SectionPill;
use crate::content::{SectionId, Testimonial};
use crate::context::use_content;

#[derive(Properties, PartialEq)]
struct TestimonialCardProps {
    item: Testimonial,
}

#[function_component(TestimonialCard)]
fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let item = &props.item;
    let stars = item.stars();
    html! {
        <article class="testimonial">
            <span class="testimonial-quote"><IconView icon={Icon::Quote} size={32} /></span>
            <div class="testimonial-stars" aria-label={format!("{} de {} estrelas", stars, Testimonial::MAX_RATING)}>
                { for (0..Testimonial::MAX_RATING).map(|i| html! {
                    <IconView icon={Icon::Star} size={16} filled={i < stars} class={classes!((i < stars).then_some("lit"))} />
                }) }
            </div>
            <p class="testimonial-content">{&item.content}</p>
            <div class="testimonial-author">
                <img src={item.image.clone()} alt={item.name.clone()} />
                <div>
                    <h4>{&item.name}</h4>
                    <span>{&item.role}</span>
                </div>
            </div>
        </article>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let content = use_content();

    if !content.is_enabled(SectionId::Testimonials) {
        return html! {};
    }

    let section = &content.testimonials;

    html! {
        <section id={SectionId::Testimonials.anchor()} class="testimonials">
            <style>
                {r#"
                .testimonials {
                    width: 100%;
                    padding: 4rem 0;
                    background: #0a0a0a;
                    color: white;
                }
                .testimonials-heading {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    margin-bottom: 3rem;
                }
                .testimonials-heading h2 {
                    font-family: var(--font-headings);
                    font-size: 2.25rem;
                    font-weight: 700;
                    line-height: 1.1;
                    text-transform: uppercase;
                    letter-spacing: -0.02em;
                    max-width: 48rem;
                    margin: 0;
                }
                .testimonials-heading h2 .highlight {
                    color: var(--color-primary);
                }
                .testimonials-heading p {
                    color: #a3a3a3;
                    font-size: 1.125rem;
                    line-height: 1.6;
                    max-width: 36rem;
                    margin: 0;
                }
                .testimonial-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                }
                .testimonial {
                    position: relative;
                    height: 100%;
                    box-sizing: border-box;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    padding: 2rem;
                    border-radius: 24px;
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    transition: border-color 0.3s, transform 0.3s;
                }
                .testimonial:hover {
                    border-color: color-mix(in srgb, var(--color-primary) 50%, transparent);
                    transform: translateY(-4px);
                }
                .testimonial-quote {
                    position: absolute;
                    top: 1.5rem;
                    right: 1.5rem;
                    color: var(--color-primary);
                    opacity: 0.3;
                    display: flex;
                }
                .testimonial-stars {
                    display: flex;
                    gap: 0.25rem;
                    color: #404040;
                }
                .testimonial-stars .lit {
                    color: #facc15;
                }
                .testimonial-content {
                    flex: 1;
                    color: #d4d4d4;
                    line-height: 1.7;
                    margin: 0;
                }
                .testimonial-author {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding-top: 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.08);
                }
                .testimonial-author img {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    object-fit: cover;
                }
                .testimonial-author h4 {
                    font-family: var(--font-headings);
                    font-weight: 700;
                    text-transform: uppercase;
                    margin: 0;
                }
                .testimonial-author span {
                    font-size: 0.875rem;
                    color: #a3a3a3;
                }
                @media (min-width: 768px) {
                    .testimonials { padding: 6rem 0; }
                    .testimonials-heading h2 { font-size: 3rem; }
                    .testimonial-grid { grid-template-columns: repeat(2, 1fr); }
                }
                @media (min-width: 1024px) {
                    .testimonials-heading h2 { font-size: 3.75rem; }
                    .testimonial-grid { grid-template-columns: repeat(3, 1fr); }
                }
                "#}
            </style>
            <div class="container">
                <ScrollReveal>
                    <SectionPill label={section.pill.clone()} dark={true} />
                    <div class="testimonials-heading">
                        <h2>
                            {&section.headline}
                            if !section.headline_highlight.is_empty() {
                                {" "}<span class="highlight">{&section.headline_highlight}</span>
                            }
                        </h2>
                        <p>{&section.subtitle}</p>
                    </div>
                </ScrollReveal>
                <div class="testimonial-grid">
                    { for section.items.iter().enumerate().map(|(index, item)| html! {
                        <ScrollReveal key={item.id} delay_ms={100 * (index as u32 % 3)}>
                            <TestimonialCard item={item.clone()} />
                        </ScrollReveal>
                    }) }
                </div>
            </div>
        </section>
    }
}
