use chrono::Utc;
use log::{error, info};
use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::consent::{
    load_consent, save_consent, BrowserStore, ConsentAction, ConsentCategory, ConsentFlow, ConsentView,
};

#[derive(Properties, PartialEq)]
pub struct CookieConsentProps {
    pub on_privacy: Callback<()>,
}

#[derive(Properties, PartialEq)]
struct CategoryRowProps {
    title: &'static str,
    description: &'static str,
    checked: bool,
    #[prop_or_default]
    locked: bool,
    #[prop_or_default]
    ontoggle: Option<Callback<MouseEvent>>,
}

#[function_component(CategoryRow)]
fn category_row(props: &CategoryRowProps) -> Html {
    html! {
        <div
            class={classes!("consent-category", props.locked.then_some("locked"))}
            onclick={props.ontoggle.clone()}
        >
            <div class={classes!("consent-check", props.checked.then_some("checked"))}>
                if props.checked {
                    <IconView icon={Icon::Check} size={14} />
                }
            </div>
            <div class="consent-category-text">
                <div class="consent-category-head">
                    <h4>{props.title}</h4>
                    if props.locked {
                        <span class="consent-always">{"Sempre Ativo"}</span>
                    }
                </div>
                <p>{props.description}</p>
            </div>
        </div>
    }
}

#[function_component(CookieConsent)]
pub fn cookie_consent(props: &CookieConsentProps) -> Html {
    let flow = use_reducer(|| ConsentFlow::mount(load_consent(&BrowserStore::default()).as_ref()));

    use_effect_with_deps(
        |decision| {
            if let Some(categories) = *decision {
                match save_consent(&BrowserStore::default(), categories, Utc::now()) {
                    Ok(_) => info!("Cookie consent recorded"),
                    Err(e) => error!("Failed to store cookie consent: {}", e),
                }
            }
            || ()
        },
        flow.decision,
    );

    let dispatcher = flow.dispatcher();
    let on = |action: ConsentAction| {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(action))
    };
    let panel = flow.panel;

    if !panel.is_visible() {
        return html! {};
    }

    let open_privacy = {
        let on_privacy = props.on_privacy.clone();
        Callback::from(move |_: MouseEvent| on_privacy.emit(()))
    };
    let toggles = panel.toggles;

    html! {
        <div class="consent-overlay">
            <style>
                {r#"
                .consent-overlay {
                    position: fixed;
                    bottom: 0;
                    left: 0;
                    width: 100%;
                    z-index: 9999;
                    padding: 1rem;
                    display: flex;
                    justify-content: center;
                    align-items: flex-end;
                    pointer-events: none;
                    box-sizing: border-box;
                }
                .consent-card {
                    pointer-events: auto;
                    width: 100%;
                    max-width: 56rem;
                    max-height: 90vh;
                    display: flex;
                    flex-direction: column;
                    background: white;
                    border-radius: 1rem;
                    border: 1px solid #e5e5e5;
                    box-shadow: 0 8px 40px rgba(0, 0, 0, 0.12);
                    overflow: hidden;
                    animation: consent-in 0.3s ease-out;
                }
                @keyframes consent-in {
                    from { transform: translateY(50px) scale(0.95); opacity: 0; }
                    to { transform: none; opacity: 1; }
                }
                .consent-banner {
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .consent-message {
                    display: flex;
                    gap: 1.25rem;
                    flex: 1;
                }
                .consent-badge {
                    width: 3rem;
                    height: 3rem;
                    flex-shrink: 0;
                    border-radius: 0.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: var(--color-primary);
                    background: color-mix(in srgb, var(--color-primary) 10%, transparent);
                }
                .consent-message h3, .consent-prefs-head h3 {
                    margin: 0 0 0.5rem;
                    font-family: var(--font-headings);
                    font-size: 1.125rem;
                    color: #111827;
                }
                .consent-message p, .consent-prefs-body > p {
                    margin: 0;
                    color: #6b7280;
                    font-size: 0.875rem;
                    line-height: 1.6;
                }
                .consent-link {
                    background: none;
                    border: none;
                    padding: 0;
                    color: var(--color-primary);
                    font-weight: 500;
                    cursor: pointer;
                    font-size: inherit;
                }
                .consent-link:hover {
                    text-decoration: underline;
                }
                .consent-actions {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    flex-shrink: 0;
                }
                .consent-btn {
                    border: none;
                    border-radius: 0.75rem;
                    padding: 0.75rem 1.5rem;
                    font-size: 0.875rem;
                    font-weight: 700;
                    cursor: pointer;
                    color: #4b5563;
                    background: #f3f4f6;
                    transition: background 0.2s;
                }
                .consent-btn:hover {
                    background: #e5e7eb;
                }
                .consent-btn.primary {
                    color: white;
                    background: var(--color-primary);
                    padding: 0.75rem 2rem;
                    box-shadow: 0 10px 15px color-mix(in srgb, var(--color-primary) 25%, transparent);
                }
                .consent-btn.primary:hover {
                    background: var(--color-primary-dark);
                }
                .consent-btn.quiet {
                    background: none;
                }
                .consent-prefs-head {
                    padding: 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    border-bottom: 1px solid #f3f4f6;
                    background: #fafafa;
                }
                .consent-prefs-head h3 {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin: 0;
                }
                .consent-close {
                    background: none;
                    border: none;
                    color: #9ca3af;
                    cursor: pointer;
                }
                .consent-prefs-body {
                    padding: 1.5rem;
                    overflow-y: auto;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .consent-category {
                    display: flex;
                    gap: 1rem;
                    padding: 1rem;
                    border: 1px solid #e5e7eb;
                    border-radius: 0.75rem;
                    cursor: pointer;
                }
                .consent-category.locked {
                    background: #f9fafb;
                    opacity: 0.8;
                    cursor: not-allowed;
                }
                .consent-check {
                    width: 1.25rem;
                    height: 1.25rem;
                    flex-shrink: 0;
                    border-radius: 0.25rem;
                    border: 1px solid #d1d5db;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: white;
                }
                .consent-check.checked {
                    background: var(--color-primary);
                    border-color: var(--color-primary);
                }
                .consent-category-head {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .consent-category h4 {
                    margin: 0 0 0.25rem;
                    font-size: 0.875rem;
                    color: #111827;
                }
                .consent-category p {
                    margin: 0;
                    font-size: 0.75rem;
                    color: #6b7280;
                }
                .consent-always {
                    font-size: 10px;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    background: #e5e7eb;
                    color: #4b5563;
                    padding: 0.125rem 0.5rem;
                    border-radius: 0.25rem;
                }
                .consent-prefs-foot {
                    padding: 1.5rem;
                    display: flex;
                    justify-content: flex-end;
                    gap: 0.75rem;
                    border-top: 1px solid #f3f4f6;
                }
                @media (min-width: 640px) {
                    .consent-actions {
                        flex-direction: row;
                    }
                }
                @media (min-width: 768px) {
                    .consent-overlay {
                        padding-bottom: 2.5rem;
                    }
                    .consent-banner {
                        padding: 2rem;
                        flex-direction: row;
                        align-items: center;
                        gap: 2rem;
                    }
                }
                "#}
            </style>
            <div class="consent-card">
                if panel.view == ConsentView::Preferences {
                    <div class="consent-prefs-head">
                        <h3><IconView icon={Icon::Settings} size={18} />{"Preferências de Cookies"}</h3>
                        <button class="consent-close" onclick={on(ConsentAction::ClosePreferences)} aria-label="Fechar">
                            <IconView icon={Icon::Close} />
                        </button>
                    </div>
                    <div class="consent-prefs-body">
                        <p>{"Gerencie suas preferências de consentimento por categoria. Cookies essenciais são necessários para o funcionamento básico do site e não podem ser desativados."}</p>
                        <CategoryRow
                            title="Estritamente Necessários"
                            description="Obrigatórios para o site funcionar (segurança, login, consentimento)."
                            checked={toggles.allows(ConsentCategory::Necessary)}
                            locked={true}
                        />
                        <CategoryRow
                            title="Marketing & Publicidade"
                            description="Usados para exibir anúncios relevantes e medir eficácia de campanhas."
                            checked={toggles.allows(ConsentCategory::Marketing)}
                            ontoggle={on(ConsentAction::Toggle(ConsentCategory::Marketing))}
                        />
                        <CategoryRow
                            title="Estatísticas & Analytics"
                            description="Nos ajudam a entender como os visitantes interagem com o site."
                            checked={toggles.allows(ConsentCategory::Statistics)}
                            ontoggle={on(ConsentAction::Toggle(ConsentCategory::Statistics))}
                        />
                    </div>
                    <div class="consent-prefs-foot">
                        <button class="consent-btn quiet" onclick={on(ConsentAction::Deny)}>{"Rejeitar"}</button>
                        <button class="consent-btn primary" onclick={on(ConsentAction::Save)}>{"Salvar"}</button>
                    </div>
                } else {
                    <div class="consent-banner">
                        <div class="consent-message">
                            <div class="consent-badge"><IconView icon={Icon::ShieldCheck} size={24} /></div>
                            <div>
                                <h3>{"Sua privacidade é nossa prioridade"}</h3>
                                <p>
                                    {"Utilizamos cookies para melhorar sua experiência, analisar o tráfego e fornecer conteúdo personalizado. \
                                      Você pode aceitar todos ou gerenciar suas preferências abaixo. Leia nossa "}
                                    <button class="consent-link" onclick={open_privacy}>{"Política de Privacidade"}</button>
                                    {"."}
                                </p>
                            </div>
                        </div>
                        <div class="consent-actions">
                            <button class="consent-btn primary" onclick={on(ConsentAction::AcceptAll)}>{"Aceitar Todos"}</button>
                            <button class="consent-btn" onclick={on(ConsentAction::Deny)}>{"Negar"}</button>
                            <button class="consent-btn" onclick={on(ConsentAction::OpenPreferences)}>{"Preferências"}</button>
                        </div>
                    </div>
                }
            </div>
        </div>
    }
}
