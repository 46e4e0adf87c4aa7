use web_sys::Element;
use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::components::scroll_reveal::ScrollReveal;
use crate::components::section_header::SectionPill;
use crate::components::whatsapp::whatsapp_onclick;
use crate::config::NARROW_VIEWPORT_PX;
use crate::content::{CardData, SecondaryService, SectionId};
use crate::context::use_content;
use crate::navigation::{use_window_event, viewport_height, viewport_width};
use crate::stacking::{compute_card_style, header_style, panel_layer, scroll_progress};

const CARD_CTA: &str = "Agendar Consulta";
const DEFAULT_CARD_COLOR: &str = "#FFFFFF";

fn card_color(card: &CardData) -> &str {
    card.color.as_deref().unwrap_or(DEFAULT_CARD_COLOR)
}

#[function_component(ArrowGlyph)]
fn arrow_glyph() -> Html {
    html! {
        <svg class="cta-arrow" width="18" height="10" viewBox="0 0 22 12" fill="none">
            <path
                d="M21.5303 6.53033C21.8232 6.23744 21.8232 5.76256 21.5303 5.46967L16.7574 0.696699C16.4645 0.403806 15.9896 0.403806 15.6967 0.696699C15.4038 0.989592 15.4038 1.46447 15.6967 1.75736L19.9393 6L15.6967 10.2426C15.4038 10.5355 15.4038 11.0104 15.6967 11.3033C15.9896 11.5962 16.4645 11.5962 16.7574 11.3033L21.5303 6.53033ZM0 6.75L21 6.75V5.25L0 5.25L0 6.75Z"
                fill="currentColor"
            />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
struct CardTagProps {
    index: usize,
    tag: String,
}

#[function_component(CardTag)]
fn card_tag(props: &CardTagProps) -> Html {
    html! {
        <div class="card-tag">
            <span class="card-tag-icon"><IconView icon={Icon::main_card(props.index)} /></span>
            <span class="card-tag-text">{&props.tag}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct StackingCardProps {
    index: usize,
    total: usize,
    progress: f64,
    card: CardData,
    phone: String,
}

#[function_component(StackingCard)]
fn stacking_card(props: &StackingCardProps) -> Html {
    let card = &props.card;
    let style = format!(
        "{} background-color: {};",
        compute_card_style(props.progress, props.index, props.total).to_css(props.index),
        card_color(card)
    );

    html! {
        <div class="stacking-card" style={style}>
            <div class="stacking-card-text">
                <div>
                    <CardTag index={props.index} tag={card.tag().to_string()} />
                    <h2>{&card.title}</h2>
                    <p>{&card.description}</p>
                </div>
                <button class="card-cta" onclick={whatsapp_onclick(&props.phone, Some(card.booking_message()))}>
                    {CARD_CTA}
                    <ArrowGlyph />
                </button>
            </div>
            <div class="stacking-card-media">
                <img src={card.image.clone()} alt={card.title.clone()} />
                <div class="media-shade"></div>
            </div>
        </div>
    }
}

#[function_component(FeaturesHeading)]
fn features_heading() -> Html {
    let content = use_content();
    let features = &content.features;
    html! {
        <>
            <SectionPill label={features.pill.clone()} />
            <div class="features-heading">
                <h2>{&features.headline}</h2>
                <p>{&features.sub_headline}</p>
            </div>
        </>
    }
}

#[function_component(DesktopFeatures)]
fn desktop_features() -> Html {
    let content = use_content();
    let container = use_node_ref();
    let progress = use_state_eq(|| 0.0_f64);

    {
        let container = container.clone();
        let progress = progress.clone();
        use_window_event("scroll", move || {
            if let Some(element) = container.cast::<Element>() {
                let rect = element.get_bounding_client_rect();
                progress.set(scroll_progress(rect.top(), rect.height(), viewport_height()));
            }
        });
    }

    let cards = content.features.cards.main_cards();
    let total = cards.len();

    html! {
        <section id={SectionId::Features.anchor()} class="features desktop">
            <div ref={container} class="stack-scroll">
                <div class="stack-viewport">
                    <div class="container stack-header" style={header_style(*progress)}>
                        <FeaturesHeading />
                    </div>
                    { for cards.iter().enumerate().map(|(index, card)| html! {
                        <StackingCard
                            key={index}
                            index={index}
                            total={total}
                            progress={*progress}
                            card={(*card).clone()}
                            phone={content.infos.whatsapp.clone()}
                        />
                    }) }
                </div>
            </div>
            <SecondaryServices />
        </section>
    }
}

#[function_component(MobileFeatures)]
fn mobile_features() -> Html {
    let content = use_content();
    let cards = content.features.cards.main_cards();
    let last = cards.len().saturating_sub(1);
    let phone = &content.infos.whatsapp;

    html! {
        <section id={SectionId::Features.anchor()} class="features narrow">
            <div class="container mobile-header">
                <FeaturesHeading />
            </div>
            <div class="sticky-stack">
                { for cards.iter().enumerate().map(|(index, card)| html! {
                    <div
                        key={index}
                        class={classes!("sticky-panel", (index > 0).then_some("raised"))}
                        style={format!("z-index: {}; background-color: {};", panel_layer(index), card_color(card))}
                    >
                        <div class="sticky-panel-body">
                            <CardTag index={index} tag={card.tag().to_string()} />
                            <h2>{&card.title}</h2>
                            <p>{&card.description}</p>
                            <button class="card-cta" onclick={whatsapp_onclick(phone, Some(card.booking_message()))}>
                                {CARD_CTA}
                                <ArrowGlyph />
                            </button>
                            <div class={classes!("sticky-panel-media", (index == last).then_some("last"))}>
                                <img src={card.image.clone()} alt={card.title.clone()} />
                                <div class="media-shade"></div>
                            </div>
                        </div>
                    </div>
                }) }
            </div>
            <SecondaryServices />
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ServiceAccordionItemProps {
    service: SecondaryService,
    icon: Icon,
    phone: String,
}

#[function_component(ServiceAccordionItem)]
fn service_accordion_item(props: &ServiceAccordionItemProps) -> Html {
    let is_open = use_state(|| false);
    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };
    let service = &props.service;

    html! {
        <div class={classes!("service-item", (*is_open).then_some("open"))}>
            <button class="service-toggle" onclick={toggle}>
                <span class="service-title">
                    <span class="service-icon"><IconView icon={props.icon} size={22} /></span>
                    <h4>{&service.title}</h4>
                </span>
                <span class="service-chevron"><IconView icon={Icon::ChevronDown} /></span>
            </button>
            <div class="service-body">
                <div class="service-body-inner">
                    <p>{&service.description}</p>
                    <button class="card-cta small" onclick={whatsapp_onclick(&props.phone, Some(service.inquiry_message()))}>
                        {"Chamar no WhatsApp"}
                        <IconView icon={Icon::ChevronRight} size={14} />
                    </button>
                </div>
            </div>
        </div>
    }
}

#[function_component(SecondaryServices)]
fn secondary_services() -> Html {
    let content = use_content();
    let expanded = use_state(|| false);
    let toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };
    let features = &content.features;
    let phone = &content.infos.whatsapp;

    html! {
        <div class="secondary-services">
            <div class="container">
                <ScrollReveal class="expand-row">
                    <button class={classes!("expand-toggle", (*expanded).then_some("expanded"))} onclick={toggle}>
                        <span class="expand-label">
                            {features.toggle_label(*expanded)}
                            <span class="expand-chevron"><IconView icon={Icon::ChevronDown} size={28} /></span>
                        </span>
                    </button>
                </ScrollReveal>
                if *expanded {
                    <div class="service-list">
                        { for features.listed_services(*expanded).iter().enumerate().map(|(index, service)| html! {
                            <ServiceAccordionItem
                                key={index}
                                service={service.clone()}
                                icon={Icon::secondary_service(index)}
                                phone={phone.clone()}
                            />
                        }) }
                        <div class="consultant-cta">
                            <div class="consultant-text">
                                <span class="consultant-icon"><IconView icon={Icon::Plus} size={28} /></span>
                                <div>
                                    <h4>{"Precisa de outro tratamento?"}</h4>
                                    <p>{"Nossa equipe está pronta para avaliar seu caso clinicamente."}</p>
                                </div>
                            </div>
                            <button class="card-cta" onclick={whatsapp_onclick(phone, None)}>
                                {"Falar com Consultor"}
                            </button>
                        </div>
                    </div>
                }
            </div>
        </div>
    }
}

/// Service cards: a scroll-driven stack on wide screens, sticky panels on narrow ones.
#[function_component(Features)]
pub fn features() -> Html {
    let content = use_content();
    let narrow = use_state_eq(|| false);

    {
        let narrow = narrow.clone();
        use_window_event("resize", move || {
            narrow.set(viewport_width() < NARROW_VIEWPORT_PX);
        });
    }

    if !content.is_enabled(SectionId::Features) {
        return html! {};
    }

    html! {
        <>
            <style>
                {r#"
                .features {
                    position: relative;
                    width: 100%;
                    background: #f8fafc;
                }
                .stack-scroll {
                    position: relative;
                    width: 100%;
                    height: 400vh;
                }
                .stack-viewport {
                    position: sticky;
                    top: 0;
                    height: 100dvh;
                    width: 100%;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .stack-header {
                    position: absolute;
                    top: 16vh;
                    left: 0;
                    right: 0;
                    z-index: 0;
                }
                .features-heading {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .features-heading h2 {
                    font-family: var(--font-headings);
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: black;
                    line-height: 1.05;
                    text-transform: uppercase;
                    letter-spacing: -0.04em;
                    max-width: 42rem;
                    margin: 0;
                }
                .features-heading p {
                    color: var(--color-text-muted);
                    font-size: 1rem;
                    line-height: 1.6;
                    max-width: 28rem;
                    margin: 0;
                }
                .stacking-card {
                    position: absolute;
                    left: 50%;
                    display: flex;
                    height: 450px;
                    width: 1000px;
                    max-width: 92%;
                    box-sizing: border-box;
                    padding: 3rem;
                    border-radius: 32px;
                    transform-origin: top;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    border: 1px solid rgba(0, 0, 0, 0.05);
                    will-change: transform, opacity, filter;
                }
                .stacking-card-text {
                    width: 48%;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    text-align: left;
                }
                .stacking-card h2, .sticky-panel h2 {
                    font-family: var(--font-headings);
                    font-size: 2.25rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    line-height: 1.15;
                    margin: 0 0 1.5rem;
                }
                .stacking-card p, .sticky-panel p {
                    opacity: 0.7;
                    line-height: 1.6;
                    max-width: 400px;
                    margin: 0;
                }
                .stacking-card-media {
                    position: relative;
                    width: 52%;
                    height: 100%;
                    border-radius: 24px;
                    overflow: hidden;
                    border: 1px solid rgba(0, 0, 0, 0.05);
                }
                .stacking-card-media img, .sticky-panel-media img {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .media-shade {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.15), transparent);
                }
                .card-tag {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 1.5rem;
                }
                .card-tag-icon {
                    color: var(--color-primary);
                    display: flex;
                }
                .card-tag-text {
                    font-family: var(--font-headings);
                    font-size: 10px;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    opacity: 0.6;
                }
                .card-cta {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    width: fit-content;
                    padding: 1rem 2rem;
                    border: none;
                    border-radius: 0.75rem;
                    background: var(--color-primary);
                    color: white;
                    font-family: var(--font-headings);
                    font-weight: 700;
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    cursor: pointer;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    transition: filter 0.2s, transform 0.2s;
                }
                .card-cta:hover {
                    filter: brightness(1.1);
                }
                .card-cta:hover .cta-arrow {
                    transform: translateX(4px);
                }
                .cta-arrow {
                    transition: transform 0.2s;
                }
                .card-cta.small {
                    padding: 0.75rem 1.5rem;
                    font-size: 0.75rem;
                    gap: 0.5rem;
                }
                .mobile-header {
                    padding-top: 5rem;
                    padding-bottom: 3rem;
                }
                .sticky-panel {
                    position: sticky;
                    top: 0;
                    width: 100%;
                    height: 100dvh;
                    display: flex;
                    flex-direction: column;
                    overflow: hidden;
                }
                .sticky-panel.raised {
                    border-radius: 32px 32px 0 0;
                    box-shadow: 0 -10px 40px -5px rgba(0, 0, 0, 0.2);
                }
                .sticky-panel-body {
                    flex: 1;
                    display: flex;
                    flex-direction: column;
                    padding: 6rem 1.5rem 0;
                }
                .sticky-panel h2 {
                    font-size: 1.875rem;
                    margin-bottom: 1rem;
                }
                .sticky-panel p {
                    font-size: 0.875rem;
                    margin-bottom: 2rem;
                }
                .sticky-panel .card-cta {
                    padding: 0.75rem 1.5rem;
                    font-size: 0.75rem;
                    margin-bottom: 2rem;
                }
                .sticky-panel-media {
                    position: relative;
                    flex: 1;
                    width: 100%;
                    margin-top: auto;
                    border-radius: 32px 32px 0 0;
                    overflow: hidden;
                    border: 1px solid rgba(0, 0, 0, 0.05);
                    border-bottom: none;
                }
                .sticky-panel-media.last {
                    border-radius: 32px;
                    margin-bottom: 1.5rem;
                    border: none;
                }
                .secondary-services {
                    position: relative;
                    z-index: 110;
                    padding: 6rem 0;
                    background: #f8fafc;
                }
                .expand-row {
                    display: flex;
                    justify-content: center;
                    margin-bottom: 4rem;
                }
                .expand-toggle {
                    position: relative;
                    overflow: hidden;
                    padding: 1.25rem 2.5rem;
                    border: none;
                    border-radius: 0.75rem;
                    background: black;
                    color: white;
                    font-family: var(--font-headings);
                    font-weight: 700;
                    font-size: 1.125rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    cursor: pointer;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    transition: transform 0.2s;
                }
                .expand-toggle:hover {
                    transform: scale(1.05);
                }
                .expand-toggle::before {
                    content: "";
                    position: absolute;
                    inset: 0;
                    background: var(--color-primary);
                    transform: translateY(100%);
                    transition: transform 0.5s;
                }
                .expand-toggle:hover::before {
                    transform: translateY(0);
                }
                .expand-label {
                    position: relative;
                    z-index: 1;
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .expand-chevron {
                    display: flex;
                    transition: transform 0.3s;
                }
                .expand-toggle.expanded .expand-chevron {
                    transform: rotate(180deg);
                }
                .service-list {
                    max-width: 56rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    animation: services-in 0.5s cubic-bezier(0.22, 1, 0.36, 1);
                }
                @keyframes services-in {
                    from { opacity: 0; transform: translateY(10px) scale(0.98); }
                    to { opacity: 1; transform: none; }
                }
                .service-item {
                    background: white;
                    border: 1px solid #f5f5f5;
                    border-radius: 1rem;
                    overflow: hidden;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    transition: box-shadow 0.2s;
                }
                .service-item:hover {
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.08);
                }
                .service-toggle {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1.25rem;
                    background: none;
                    border: none;
                    text-align: left;
                    cursor: pointer;
                }
                .service-title {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .service-title h4 {
                    margin: 0;
                    font-family: var(--font-headings);
                    font-size: 1.125rem;
                    font-weight: 700;
                    color: black;
                    text-transform: uppercase;
                }
                .service-icon {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 0.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #fafafa;
                    color: var(--color-primary);
                    transition: background 0.2s, color 0.2s;
                }
                .service-item.open .service-icon {
                    background: var(--color-primary);
                    color: white;
                }
                .service-chevron {
                    display: flex;
                    color: #a3a3a3;
                    transition: transform 0.3s;
                }
                .service-item.open .service-chevron {
                    transform: rotate(180deg);
                }
                .service-body {
                    display: grid;
                    grid-template-rows: 0fr;
                    opacity: 0;
                    transition: grid-template-rows 0.3s ease-in-out, opacity 0.3s ease-in-out;
                }
                .service-item.open .service-body {
                    grid-template-rows: 1fr;
                    opacity: 1;
                }
                .service-body-inner {
                    overflow: hidden;
                    padding: 0 1.25rem;
                }
                .service-item.open .service-body-inner {
                    padding-bottom: 1.25rem;
                }
                .service-body-inner p {
                    color: var(--color-text-muted);
                    font-size: 0.875rem;
                    line-height: 1.6;
                    margin: 0 0 1.5rem;
                    max-width: 42rem;
                }
                .consultant-cta {
                    margin-top: 2rem;
                    padding: 1.5rem;
                    border-radius: 32px;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1.5rem;
                    background: color-mix(in srgb, var(--color-primary) 5%, transparent);
                    border: 1px solid color-mix(in srgb, var(--color-primary) 10%, transparent);
                }
                .consultant-text {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    text-align: left;
                }
                .consultant-icon {
                    width: 3.5rem;
                    height: 3.5rem;
                    flex-shrink: 0;
                    border-radius: 9999px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: var(--color-primary);
                    color: white;
                }
                .consultant-text h4 {
                    margin: 0;
                    font-family: var(--font-headings);
                    font-size: 1.25rem;
                    text-transform: uppercase;
                    color: black;
                }
                .consultant-text p {
                    margin: 0.25rem 0 0;
                    font-size: 0.875rem;
                    color: var(--color-text-muted);
                }
                .features.narrow .secondary-services {
                    padding-top: 6rem;
                }
                .features.desktop .secondary-services {
                    padding-top: 0;
                }
                @media (min-width: 768px) {
                    .features-heading {
                        flex-direction: row;
                        justify-content: space-between;
                        align-items: flex-start;
                    }
                    .features-heading h2 {
                        font-size: 4.5rem;
                    }
                    .features-heading p {
                        font-size: 1.125rem;
                        padding-top: 0.5rem;
                    }
                    .service-toggle {
                        padding: 1.5rem;
                    }
                    .service-body-inner {
                        padding-left: 4.5rem;
                    }
                    .consultant-cta {
                        flex-direction: row;
                        justify-content: space-between;
                        padding: 2rem;
                    }
                    .sticky-panel-body {
                        padding: 8rem 3rem 0;
                    }
                    .sticky-panel h2 {
                        font-size: 3rem;
                    }
                }
                "#}
            </style>
            if *narrow {
                <MobileFeatures />
            } else {
                <DesktopFeatures />
            }
        </>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_card_color_defaults_to_white() {
        let mut card = CardData::default();
        assert_eq!(card_color(&card), "#FFFFFF");
        card.color = Some("#F0F9FF".to_string());
        assert_eq!(card_color(&card), "#F0F9FF");
    }
}
