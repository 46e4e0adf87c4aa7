use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::carousel::{drag_release, Carousel, CarouselAction};
use crate::components::icons::{Icon, IconView};
use crate::components::scroll_reveal::ScrollReveal;
use crate::components::section_header::SectionPill;
use crate::config::CAROUSEL_INTERVAL_MS;
use crate::content::SectionId;
use crate::context::use_content;

const DISCLAIMER: &str = "Resultados podem variar de acordo com as condições individuais de cada paciente.";

#[function_component(BeforeAfter)]
pub fn before_after() -> Html {
    let content = use_content();
    let section = &content.before_after;
    let image_count = section.images.len();

    let carousel = use_reducer(|| Carousel::new(image_count));
    let drag_start = use_mut_ref(|| None::<f64>);
    let drag_offset = use_state(|| 0.0_f64);
    let dragging = use_state(|| false);

    {
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(CAROUSEL_INTERVAL_MS, move || {
                    carousel.dispatch(CarouselAction::Advance);
                });
                move || drop(interval)
            },
            image_count,
        );
    }

    if !content.is_enabled(SectionId::BeforeAfter) {
        return html! {};
    }

    let step = |action: CarouselAction| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(action))
    };

    let on_pointer_down = {
        let drag_start = drag_start.clone();
        let dragging = dragging.clone();
        Callback::from(move |e: PointerEvent| {
            e.prevent_default();
            *drag_start.borrow_mut() = Some(e.client_x() as f64);
            dragging.set(true);
        })
    };
    let on_pointer_move = {
        let drag_start = drag_start.clone();
        let drag_offset = drag_offset.clone();
        Callback::from(move |e: PointerEvent| {
            if let Some(start) = *drag_start.borrow() {
                drag_offset.set(e.client_x() as f64 - start);
            }
        })
    };
    let on_pointer_end = {
        let drag_start = drag_start.clone();
        let drag_offset = drag_offset.clone();
        let dragging = dragging.clone();
        let carousel = carousel.clone();
        Callback::from(move |e: PointerEvent| {
            let Some(start) = drag_start.borrow_mut().take() else {
                return;
            };
            if let Some(action) = drag_release(e.client_x() as f64 - start) {
                carousel.dispatch(action);
            }
            drag_offset.set(0.0);
            dragging.set(false);
        })
    };

    let slide_style = format!("transform: translateX({:.1}px);", *drag_offset);
    let current = section.images.get(carousel.index()).cloned().unwrap_or_default();
    let slide_key = carousel.index().to_string();

    let disclaimer = html! {
        <div class="ba-disclaimer">
            <span class="ba-disclaimer-icon"><IconView icon={Icon::ChevronRight} size={22} /></span>
            <p>{DISCLAIMER}</p>
        </div>
    };

    html! {
        <section id={SectionId::BeforeAfter.anchor()} class="before-after">
            <style>
                {r#"
                .before-after {
                    background: white;
                    padding: 4rem 0;
                    overflow: hidden;
                }
                .ba-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .ba-title-mobile { order: 1; }
                .ba-media { order: 2; display: flex; flex-direction: column; gap: 1.5rem; }
                .ba-text { display: none; }
                .ba-text-mobile { order: 3; padding: 0 1rem; }
                .ba-headline {
                    font-family: var(--font-headings);
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: black;
                    line-height: 1.1;
                    text-transform: uppercase;
                    letter-spacing: -0.02em;
                    margin: 0;
                }
                .ba-frame {
                    position: relative;
                    aspect-ratio: 1 / 1;
                    width: 100%;
                    border-radius: 24px;
                    overflow: hidden;
                    background: #f5f5f5;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    touch-action: pan-y;
                }
                .ba-track {
                    position: absolute;
                    inset: 0;
                }
                .ba-slide {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    cursor: grab;
                    user-select: none;
                    -webkit-user-drag: none;
                }
                .ba-frame.dragging .ba-slide {
                    cursor: grabbing;
                }
                .ba-frame:not(.dragging) .ba-slide {
                    transition: transform 0.3s ease-out;
                }
                .slide-from-right { animation: ba-from-right 0.45s ease-out; }
                .slide-from-left { animation: ba-from-left 0.45s ease-out; }
                @keyframes ba-from-right {
                    from { translate: 100% 0; opacity: 0; scale: 0.95; }
                    to { translate: 0 0; opacity: 1; scale: 1; }
                }
                @keyframes ba-from-left {
                    from { translate: -100% 0; opacity: 0; scale: 0.95; }
                    to { translate: 0 0; opacity: 1; scale: 1; }
                }
                .ba-dots {
                    position: absolute;
                    bottom: 1.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    gap: 0.5rem;
                    z-index: 2;
                }
                .ba-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border: none;
                    padding: 0;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.4);
                    cursor: pointer;
                    transition: all 0.3s;
                }
                .ba-dot:hover { background: rgba(255, 255, 255, 0.6); }
                .ba-dot.active { background: white; width: 1.5rem; }
                .ba-arrows { display: flex; gap: 1rem; }
                .ba-arrow {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    border: 2px solid black;
                    background: none;
                    color: black;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    cursor: pointer;
                    transition: all 0.2s;
                }
                .ba-arrow:hover { background: black; color: white; }
                .ba-arrow:active { transform: scale(0.95); }
                .ba-description {
                    color: var(--color-text-muted);
                    font-size: 0.875rem;
                    line-height: 1.6;
                    margin: 0 0 2rem;
                }
                .ba-disclaimer {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.5rem 0;
                    border-top: 1px solid #f5f5f5;
                }
                .ba-disclaimer-icon {
                    width: 3rem;
                    height: 3rem;
                    flex-shrink: 0;
                    border-radius: 9999px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: var(--color-primary);
                    background: color-mix(in srgb, var(--color-primary) 10%, transparent);
                }
                .ba-disclaimer p {
                    margin: 0;
                    color: black;
                    font-family: var(--font-headings);
                    font-weight: 700;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                }
                @media (min-width: 768px) {
                    .before-after { padding: 6rem 0; }
                    .ba-frame { border-radius: 32px; }
                }
                @media (min-width: 1024px) {
                    .ba-grid { grid-template-columns: 1fr 1fr; gap: 5rem; }
                    .ba-title-mobile, .ba-text-mobile { display: none; }
                    .ba-media { order: 1; }
                    .ba-text { display: flex; flex-direction: column; gap: 2rem; order: 2; }
                    .ba-text .ba-headline { font-size: 3.5rem; }
                    .ba-text .ba-description { font-size: 1.25rem; margin: 0; max-width: 36rem; }
                    .ba-disclaimer p { font-size: 0.875rem; }
                }
                "#}
            </style>
            <div class="container">
                <ScrollReveal>
                    <SectionPill label={section.pill.clone()} />
                </ScrollReveal>
                <div class="ba-grid">
                    <div class="ba-title-mobile">
                        <ScrollReveal>
                            <h2 class="ba-headline">{&section.headline}</h2>
                        </ScrollReveal>
                    </div>

                    <div class="ba-media">
                        <ScrollReveal delay_ms={200}>
                            <div
                                class={classes!("ba-frame", (*dragging).then_some("dragging"))}
                                onpointerdown={on_pointer_down}
                                onpointermove={on_pointer_move}
                                onpointerup={on_pointer_end.clone()}
                                onpointerleave={on_pointer_end.clone()}
                                onpointercancel={on_pointer_end}
                            >
                                <div class="ba-track">
                                    <img
                                        key={slide_key}
                                        class={classes!("ba-slide", carousel.direction().enter_class())}
                                        style={slide_style}
                                        src={current}
                                        alt={format!("Resultado {}", carousel.index() + 1)}
                                        draggable="false"
                                    />
                                </div>
                                <div class="ba-dots">
                                    { for (0..image_count).map(|idx| html! {
                                        <button
                                            class={classes!("ba-dot", (idx == carousel.index()).then_some("active"))}
                                            onclick={step(CarouselAction::JumpTo(idx))}
                                            aria-label={format!("Ir para o resultado {}", idx + 1)}
                                        />
                                    }) }
                                </div>
                            </div>
                        </ScrollReveal>
                        <ScrollReveal delay_ms={300} class="ba-arrows">
                            <button class="ba-arrow" onclick={step(CarouselAction::Retreat)} aria-label="Anterior">
                                <IconView icon={Icon::ChevronLeft} size={24} />
                            </button>
                            <button class="ba-arrow" onclick={step(CarouselAction::Advance)} aria-label="Próximo">
                                <IconView icon={Icon::ChevronRight} size={24} />
                            </button>
                        </ScrollReveal>
                    </div>

                    <div class="ba-text">
                        <ScrollReveal>
                            <h2 class="ba-headline">{&section.headline}</h2>
                        </ScrollReveal>
                        <ScrollReveal delay_ms={100}>
                            <p class="ba-description">{&section.description}</p>
                        </ScrollReveal>
                        <ScrollReveal delay_ms={200}>
                            { disclaimer.clone() }
                        </ScrollReveal>
                    </div>

                    <div class="ba-text-mobile">
                        <ScrollReveal delay_ms={400}>
                            <p class="ba-description">{&section.description}</p>
                            { disclaimer }
                        </ScrollReveal>
                    </div>
                </div>
            </div>
        </section>
    }
}
