use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::components::scroll_reveal::ScrollReveal;
use crate::components::section_header::SectionPill;
use crate::components::whatsapp::{whatsapp_onclick, WhatsappButton};
use crate::content::SectionId;
use crate::context::use_content;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then_some("open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon"><IconView icon={Icon::Plus} size={18} /></span>
            </button>
            <div class="faq-answer">
                <div class="faq-answer-inner">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let content = use_content();

    if !content.is_enabled(SectionId::Faq) {
        return html! {};
    }

    let faq = &content.faq;
    let infos = &content.infos;

    html! {
        <section id={SectionId::Faq.anchor()} class="faq">
            <style>
                {r#"
                .faq {
                    width: 100%;
                    background: #f8fafc;
                    padding: 4rem 0;
                }
                .faq-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                }
                .faq-intro {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .faq-intro h2 {
                    font-family: var(--font-headings);
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: black;
                    line-height: 1.1;
                    text-transform: uppercase;
                    letter-spacing: -0.02em;
                    margin: 0;
                }
                .faq-intro h2 .highlight {
                    color: var(--color-primary);
                }
                .faq-intro p {
                    color: var(--color-text-muted);
                    font-size: 1.125rem;
                    line-height: 1.6;
                    margin: 0 0 1rem;
                }
                .faq-intro .whatsapp-button {
                    width: fit-content;
                    padding: 1rem 2rem;
                    border-radius: 0.75rem;
                    font-size: 0.875rem;
                    background: var(--color-whatsapp);
                    color: white;
                }
                .faq-intro .whatsapp-button:hover {
                    background: var(--color-whatsapp-hover);
                    color: var(--color-whatsapp-text);
                }
                .faq-list {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .faq-item {
                    background: white;
                    border: 1px solid #f5f5f5;
                    border-radius: 1rem;
                    overflow: hidden;
                    transition: box-shadow 0.2s;
                }
                .faq-item:hover {
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.06);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.25rem 1.5rem;
                    background: none;
                    border: none;
                    text-align: left;
                    cursor: pointer;
                }
                .question-text {
                    font-family: var(--font-headings);
                    font-weight: 700;
                    font-size: 1rem;
                    color: black;
                }
                .toggle-icon {
                    flex-shrink: 0;
                    width: 2rem;
                    height: 2rem;
                    border-radius: 9999px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #f5f5f5;
                    color: black;
                    transition: transform 0.3s, background 0.3s, color 0.3s;
                }
                .faq-item.open .toggle-icon {
                    transform: rotate(45deg);
                    background: var(--color-primary);
                    color: white;
                }
                .faq-answer {
                    display: grid;
                    grid-template-rows: 0fr;
                    transition: grid-template-rows 0.3s ease-in-out;
                }
                .faq-item.open .faq-answer {
                    grid-template-rows: 1fr;
                }
                .faq-answer-inner {
                    overflow: hidden;
                    padding: 0 1.5rem;
                }
                .faq-item.open .faq-answer-inner {
                    padding-bottom: 1.25rem;
                }
                .faq-answer p {
                    color: var(--color-text-muted);
                    line-height: 1.6;
                    margin: 0;
                }
                @media (min-width: 768px) {
                    .faq { padding: 6rem 0; }
                    .faq-intro h2 { font-size: 3rem; }
                    .question-text { font-size: 1.125rem; }
                }
                @media (min-width: 1024px) {
                    .faq-grid { grid-template-columns: 5fr 7fr; gap: 5rem; }
                    .faq-intro { position: sticky; top: 8rem; align-self: start; }
                }
                "#}
            </style>
            <div class="container">
                <ScrollReveal>
                    <SectionPill label={faq.pill.clone()} />
                </ScrollReveal>
                <div class="faq-grid">
                    <ScrollReveal class="faq-intro">
                        <h2>
                            {&faq.headline}
                            if !faq.headline_highlight.is_empty() {
                                {" "}<span class="highlight">{&faq.headline_highlight}</span>
                            }
                        </h2>
                        <p>{&faq.sub_headline}</p>
                        <WhatsappButton
                            text={faq.button_text.clone()}
                            onclick={whatsapp_onclick(&infos.whatsapp, Some(infos.default_whatsapp_message.clone()))}
                        />
                    </ScrollReveal>
                    <div class="faq-list">
                        { for faq.items.iter().enumerate().map(|(index, entry)| html! {
                            <ScrollReveal key={index} delay_ms={50 * index as u32}>
                                <FaqItem question={entry.question.clone()}>
                                    <p>{&entry.answer}</p>
                                </FaqItem>
                            </ScrollReveal>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
