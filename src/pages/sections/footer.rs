use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::content::{LegalPage, SocialNetwork};
use crate::context::use_content;
use crate::navigation::link_onclick;

fn social_icon(network: SocialNetwork) -> Icon {
    match network {
        SocialNetwork::Instagram => Icon::Instagram,
        SocialNetwork::Facebook => Icon::Facebook,
        SocialNetwork::Youtube => Icon::Youtube,
        SocialNetwork::Linkedin => Icon::Linkedin,
    }
}

fn copyright_line(year: i32, name: &str, copyright: &str) -> String {
    format!("© {} {}. {}", year, name, copyright)
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_legal: Callback<LegalPage>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let content = use_content();

    if !content.footer.enabled {
        return html! {};
    }

    let footer = &content.footer;
    let infos = &content.infos;

    let logo = match content.images.logo() {
        Some(src) => html! { <img class="footer-logo-img" src={src.to_string()} alt={infos.name.clone()} /> },
        None => html! {
            <>
                <span class="footer-logo-mark"><IconView icon={Icon::Tooth} size={20} /></span>
                <span class="footer-logo-text">{&content.navbar.logo_text}</span>
            </>
        },
    };

    html! {
        <footer id="contact" class="site-footer">
            <style>
                {r#"
                .site-footer {
                    position: relative;
                    z-index: 10;
                    width: 100%;
                    background: black;
                    color: white;
                    padding: 4rem 0 2rem;
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                    margin-bottom: 3rem;
                }
                .footer-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1.5rem;
                    text-decoration: none;
                    transition: opacity 0.2s;
                }
                .footer-logo:hover {
                    opacity: 0.8;
                }
                .footer-logo-img {
                    height: 2rem;
                    object-fit: contain;
                }
                .footer-logo-mark {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 0.5rem;
                    background: white;
                    color: black;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .footer-logo-text {
                    font-family: var(--font-display);
                    font-size: 2.25rem;
                    color: white;
                    letter-spacing: 0.03em;
                }
                .footer-description {
                    color: #a3a3a3;
                    line-height: 1.6;
                    max-width: 28rem;
                    margin: 0 0 1.5rem;
                }
                .footer-social {
                    display: flex;
                    gap: 1rem;
                }
                .footer-social a {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 9999px;
                    background: #262626;
                    color: white;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transition: background 0.2s, color 0.2s;
                }
                .footer-social a:hover {
                    background: var(--color-primary);
                    color: black;
                }
                .site-footer h4 {
                    font-family: var(--font-headings);
                    font-weight: 700;
                    font-size: 1.125rem;
                    margin: 0 0 1.5rem;
                }
                .footer-list {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .footer-list a {
                    color: #a3a3a3;
                    text-decoration: none;
                    transition: color 0.2s;
                }
                .footer-list a:hover, .footer-policies a:hover, .footer-credit a:hover {
                    color: var(--color-primary);
                }
                .footer-contact li {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                    font-size: 0.875rem;
                }
                .footer-contact .icon {
                    flex-shrink: 0;
                    color: var(--color-primary);
                }
                .footer-bottom {
                    padding-top: 2rem;
                    border-top: 1px solid #262626;
                }
                .footer-bottom-row {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }
                .footer-copyright {
                    color: #737373;
                    font-size: 0.875rem;
                    text-align: center;
                    margin: 0;
                }
                .footer-policies {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1.5rem;
                    font-size: 0.875rem;
                }
                .footer-policies a {
                    color: #737373;
                    text-decoration: none;
                    cursor: pointer;
                    transition: color 0.2s;
                }
                .footer-credit {
                    margin-top: 1.5rem;
                    text-align: center;
                    color: #525252;
                    font-size: 0.75rem;
                    font-weight: 500;
                }
                .footer-credit a {
                    color: #525252;
                    font-weight: 700;
                    text-decoration: none;
                    transition: color 0.2s;
                }
                @media (min-width: 768px) {
                    .footer-grid { grid-template-columns: repeat(2, 1fr); }
                    .footer-bottom-row { flex-direction: row; }
                    .footer-copyright { text-align: left; }
                }
                @media (min-width: 1024px) {
                    .footer-grid { grid-template-columns: 2fr 1fr 1fr; }
                }
                "#}
            </style>
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <a class="footer-logo" href="#hero" onclick={link_onclick("#hero", Callback::noop())}>
                            { logo }
                        </a>
                        <p class="footer-description">{&footer.description}</p>
                        <div class="footer-social">
                            { for footer.social_links.entries().into_iter().map(|(network, url)| html! {
                                <a
                                    key={network.label()}
                                    href={url.to_string()}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label={network.label()}
                                >
                                    <IconView icon={social_icon(network)} />
                                </a>
                            }) }
                        </div>
                    </div>

                    <div>
                        <h4>{"Links Rápidos"}</h4>
                        <ul class="footer-list">
                            { for footer.quick_links.iter().map(|link| html! {
                                <li>
                                    <a href={link.href.clone()} onclick={link_onclick(&link.href, Callback::noop())}>
                                        {&link.label}
                                    </a>
                                </li>
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h4>{"Contato"}</h4>
                        <ul class="footer-list footer-contact">
                            <li>
                                <IconView icon={Icon::MapPin} />
                                <a href={infos.maps_link.clone()} target="_blank" rel="noopener noreferrer">
                                    {&infos.address}
                                </a>
                            </li>
                            <li>
                                <IconView icon={Icon::Phone} />
                                <a href={format!("tel:{}", infos.phone_digits())}>{&infos.phone}</a>
                            </li>
                            <li>
                                <IconView icon={Icon::Mail} />
                                <a href={format!("mailto:{}", infos.email)}>{&infos.email}</a>
                            </li>
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    <div class="footer-bottom-row">
                        <p class="footer-copyright">
                            { copyright_line(Utc::now().year(), &infos.name, &footer.copyright) }
                        </p>
                        <div class="footer-policies">
                            { for footer.policies.iter().map(|policy| {
                                let page = policy.page;
                                let onclick = props.on_legal.reform(move |e: MouseEvent| {
                                    e.prevent_default();
                                    page
                                });
                                html! { <a href="#" onclick={onclick}>{&policy.label}</a> }
                            }) }
                        </div>
                    </div>
                    <div class="footer-credit">
                        {&footer.developed_by}
                        <a href={footer.developer_url.clone()} target="_blank" rel="noopener noreferrer">
                            {&footer.developer_name}
                        </a>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright_line(2026, "Odonto Rodacki", "Todos os direitos reservados."),
            "© 2026 Odonto Rodacki. Todos os direitos reservados."
        );
    }

    #[test]
    fn test_every_network_has_its_icon() {
        assert_eq!(social_icon(SocialNetwork::Instagram), Icon::Instagram);
        assert_eq!(social_icon(SocialNetwork::Linkedin), Icon::Linkedin);
    }
}
