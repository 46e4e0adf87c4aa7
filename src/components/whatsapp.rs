use log::{debug, warn};
use yew::prelude::*;

use crate::components::icons::{Icon, IconView};

/// Deep link into a WhatsApp chat. Non-digits in `phone` are dropped.
pub fn whatsapp_url(phone: &str, message: Option<&str>) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    match message.filter(|m| !m.is_empty()) {
        Some(text) => format!("https://wa.me/{}?text={}", digits, urlencoding::encode(text)),
        None => format!("https://wa.me/{}", digits),
    }
}

/// Opens the chat in a new browsing context.
pub fn open_whatsapp(phone: &str, message: Option<&str>) {
    let url = whatsapp_url(phone, message);
    debug!("opening {}", url);
    let opened = web_sys::window().map(|window| window.open_with_url_and_target(&url, "_blank"));
    if !matches!(opened, Some(Ok(_))) {
        warn!("could not open {}", url);
    }
}

/// Click callback opening WhatsApp with a fixed message.
pub fn whatsapp_onclick(phone: &str, message: Option<String>) -> Callback<MouseEvent> {
    let phone = phone.to_string();
    Callback::from(move |_: MouseEvent| open_whatsapp(&phone, message.as_deref()))
}

#[derive(Properties, PartialEq)]
pub struct WhatsappButtonProps {
    pub text: String,
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(WhatsappButton)]
pub fn whatsapp_button(props: &WhatsappButtonProps) -> Html {
    html! {
        <button class={classes!("whatsapp-button", props.class.clone())} onclick={props.onclick.clone()}>
            <style>
                {r#"
                .whatsapp-button {
                    position: relative;
                    overflow: hidden;
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    border: none;
                    cursor: pointer;
                    font-family: var(--font-headings);
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    box-shadow: 0 10px 20px rgba(0, 0, 0, 0.15);
                    transition: transform 0.3s ease, box-shadow 0.3s ease, background 0.3s ease, color 0.3s ease;
                }
                .whatsapp-button:active {
                    transform: scale(0.95);
                }
                .whatsapp-button:hover {
                    box-shadow: 0 14px 28px rgba(0, 0, 0, 0.2);
                }
                .whatsapp-button .wa-icon {
                    display: none;
                    transition: transform 0.3s ease;
                }
                .whatsapp-button:hover .wa-icon {
                    transform: translateY(-2px);
                }
                .whatsapp-button .wa-text {
                    transition: transform 0.3s ease;
                }
                .whatsapp-button:hover .wa-text {
                    transform: translateX(4px);
                }
                .whatsapp-button::after {
                    content: "";
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.2), transparent);
                    transform: translateX(-100%) skewX(-12deg);
                    transition: transform 1s ease-out;
                }
                .whatsapp-button:hover::after {
                    transform: translateX(100%) skewX(-12deg);
                }
                @media (min-width: 768px) {
                    .whatsapp-button .wa-icon {
                        display: inline-flex;
                    }
                }
                "#}
            </style>
            <span class="wa-icon"><IconView icon={Icon::Whatsapp} /></span>
            <span class="wa-text">{&props.text}</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case("551932729019", Some("Olá! Quero agendar"), "https://wa.me/551932729019?text=Ol%C3%A1%21%20Quero%20agendar")]
    #[case("+55 (19) 3272-9019", None, "https://wa.me/551932729019")]
    #[case("551932729019", Some(""), "https://wa.me/551932729019")]
    #[case("55", Some("a&b=c"), "https://wa.me/55?text=a%26b%3Dc")]
    fn test_whatsapp_url(#[case] phone: &str, #[case] message: Option<&str>, #[case] expected: &str) {
        assert_eq!(whatsapp_url(phone, message), expected);
    }
}
