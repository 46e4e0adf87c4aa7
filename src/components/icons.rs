use yew::prelude::*;

/// Inline SVG icons. Content refers to them by name; unknown names fall back
/// to a caller-chosen default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Tooth,
    Teeth,
    Smile,
    ShieldCheck,
    ShieldCross,
    Sparkles,
    Stars,
    Wand,
    HeartPulse,
    Microscope,
    Stethoscope,
    HandsClean,
    Baby,
    Scissors,
    Droplet,
    StarSmile,
    // interface
    Star,
    ChevronLeft,
    ChevronRight,
    ChevronDown,
    ArrowLeft,
    ArrowUp,
    Plus,
    Check,
    Menu,
    Close,
    Settings,
    Phone,
    Mail,
    MapPin,
    Clock,
    Quote,
    Instagram,
    Facebook,
    Youtube,
    Linkedin,
    Whatsapp,
}

/// Icons of the five main service cards, in card order.
pub const MAIN_CARD_ICONS: [&str; 5] = ["Implantes", "Ortodontia", "Clareamento", "Lentes", "Reabilitacao"];

/// Icons of the secondary services, by position in the list.
pub const SECONDARY_SERVICE_ICONS: [&str; 8] = [
    "Canal",
    "Limpeza",
    "Proteses",
    "Odontopediatria",
    "Cirurgia",
    "Bruxismo",
    "Periodontia",
    "Harmonizacao",
];

impl Icon {
    pub fn named(name: &str) -> Option<Icon> {
        let icon = match name {
            "Implantes" | "Default" | "Dna" | "Tooth" => Icon::Tooth,
            "Ortodontia" | "Proteses" => Icon::Teeth,
            "Clareamento" | "Diamond" => Icon::Stars,
            "Lentes" => Icon::Wand,
            "Reabilitacao" | "HeartPulse" => Icon::HeartPulse,
            "Canal" | "Zap" => Icon::Microscope,
            "Limpeza" => Icon::HandsClean,
            "Odontopediatria" | "Baby" => Icon::Baby,
            "Cirurgia" | "Scissors" => Icon::Scissors,
            "Bruxismo" | "Moon" => Icon::ShieldCross,
            "Periodontia" => Icon::Droplet,
            "Harmonizacao" | "Star" => Icon::StarSmile,
            "Smile" => Icon::Smile,
            "ShieldCheck" => Icon::ShieldCheck,
            "Sparkles" => Icon::Sparkles,
            "Stethoscope" => Icon::Stethoscope,
            _ => return None,
        };
        Some(icon)
    }

    pub fn lookup(name: Option<&str>, fallback: Icon) -> Icon {
        name.and_then(Icon::named).unwrap_or(fallback)
    }

    pub fn main_card(index: usize) -> Icon {
        Icon::lookup(MAIN_CARD_ICONS.get(index).copied(), Icon::Tooth)
    }

    pub fn secondary_service(index: usize) -> Icon {
        Icon::lookup(SECONDARY_SERVICE_ICONS.get(index).copied(), Icon::Tooth)
    }

    fn shapes(self) -> Html {
        match self {
            Icon::Tooth => html! {
                <path d="M7 3c-2.2 0-4 1.8-4 4.2 0 2 .7 3.3 1.4 5.1.6 1.6.8 3.4 1.1 5.2.2 1.3.6 3.5 1.9 3.5 1.6 0 1.6-3 2.2-4.7.3-.8.7-1.3 1.4-1.3s1.1.5 1.4 1.3c.6 1.7.6 4.7 2.2 4.7 1.3 0 1.7-2.2 1.9-3.5.3-1.8.5-3.6 1.1-5.2.7-1.8 1.4-3.1 1.4-5.1C21 4.8 19.2 3 17 3c-1.9 0-2.9 1-5 1S8.9 3 7 3z" />
            },
            Icon::Teeth => html! {
                <>
                    <path d="M4 9c0-3 2-5 4-5 1.5 0 2.5 1 4 1s2.5-1 4-1c2 0 4 2 4 5v1H4z" />
                    <path d="M4 14h16v1c0 3-2 5-4 5-1.5 0-2.5-1-4-1s-2.5 1-4 1c-2 0-4-2-4-5z" />
                    <path d="M9 10v4M15 10v4" />
                </>
            },
            Icon::Smile => html! {
                <>
                    <circle cx="12" cy="12" r="10" />
                    <path d="M8 14s1.5 2 4 2 4-2 4-2" />
                    <line x1="9" x2="9.01" y1="9" y2="9" />
                    <line x1="15" x2="15.01" y1="9" y2="9" />
                </>
            },
            Icon::ShieldCheck => html! {
                <>
                    <path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z" />
                    <path d="m9 12 2 2 4-4" />
                </>
            },
            Icon::ShieldCross => html! {
                <>
                    <path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z" />
                    <path d="M12 8v8M8 12h8" />
                </>
            },
            Icon::Sparkles => html! {
                <>
                    <path d="M9.94 15.5A2 2 0 0 0 8.5 14.06l-6.14-1.58a.5.5 0 0 1 0-.96L8.5 9.94A2 2 0 0 0 9.94 8.5l1.58-6.14a.5.5 0 0 1 .96 0L14.06 8.5A2 2 0 0 0 15.5 9.94l6.14 1.58a.5.5 0 0 1 0 .96L15.5 14.06a2 2 0 0 0-1.44 1.44l-1.58 6.14a.5.5 0 0 1-.96 0z" />
                    <path d="M20 3v4M22 5h-4" />
                </>
            },
            Icon::Stars => html! {
                <>
                    <path d="M12 3l1.9 5.1L19 10l-5.1 1.9L12 17l-1.9-5.1L5 10l5.1-1.9z" />
                    <path d="M5 3v3M3.5 4.5h3M19 17v4M17 19h4" />
                </>
            },
            Icon::Wand => html! {
                <>
                    <path d="m21.64 3.64-1.28-1.28a1.21 1.21 0 0 0-1.72 0L2.36 18.64a1.21 1.21 0 0 0 0 1.72l1.28 1.28a1.2 1.2 0 0 0 1.72 0L21.64 5.36a1.2 1.2 0 0 0 0-1.72" />
                    <path d="m14 7 3 3M5 6v4M19 14v4M10 2v2M7 8H3M21 16h-4M11 3H9" />
                </>
            },
            Icon::HeartPulse => html! {
                <>
                    <path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z" />
                    <path d="M3.22 12H9.5l.5-1 2 4.5 2-7 1.5 3.5h5.27" />
                </>
            },
            Icon::Microscope => html! {
                <>
                    <path d="M6 18h8M3 22h18M14 22a7 7 0 1 0 0-14h-1M9 14h2" />
                    <path d="M9 12a2 2 0 0 1-2-2V6h6v4a2 2 0 0 1-2 2Z" />
                    <path d="M12 6V3a1 1 0 0 0-1-1H9a1 1 0 0 0-1 1v3" />
                </>
            },
            Icon::Stethoscope => html! {
                <>
                    <path d="M11 2v2M5 2v2M5 3H4a2 2 0 0 0-2 2v4a6 6 0 0 0 12 0V5a2 2 0 0 0-2-2h-1" />
                    <path d="M8 15a6 6 0 0 0 12 0v-3" />
                    <circle cx="20" cy="10" r="2" />
                </>
            },
            Icon::HandsClean => html! {
                <>
                    <path d="M11 12h2a2 2 0 1 0 0-4h-3c-.6 0-1.1.2-1.4.6L3 14" />
                    <path d="m7 18 1.6-1.4c.3-.4.8-.6 1.4-.6h4c1.1 0 2.1-.4 2.8-1.2l4.6-4.4a2 2 0 0 0-2.75-2.91l-4.2 3.9" />
                    <path d="m2 13 6 6M18 2v3M16.5 3.5h3" />
                </>
            },
            Icon::Baby => html! {
                <>
                    <path d="M9 12h.01M15 12h.01M10 16c.5.3 1.2.5 2 .5s1.5-.2 2-.5" />
                    <path d="M19 6.3a9 9 0 0 1 1.8 3.9 2 2 0 0 1 0 3.6 9 9 0 0 1-17.6 0 2 2 0 0 1 0-3.6A9 9 0 0 1 12 3c2 0 3.5 1.1 3.5 2.5s-.9 2.5-2 2.5c-.8 0-1.5-.4-1.5-1" />
                </>
            },
            Icon::Scissors => html! {
                <>
                    <circle cx="6" cy="6" r="3" />
                    <path d="M8.12 8.12 12 12M20 4 8.12 15.88" />
                    <circle cx="6" cy="18" r="3" />
                    <path d="M14.8 14.8 20 20" />
                </>
            },
            Icon::Droplet => html! {
                <path d="M12 22a7 7 0 0 0 7-7c0-2-1-3.9-3-5.5s-3.5-4-4-6.5c-.5 2.5-2 4.9-4 6.5C6 11.1 5 13 5 15a7 7 0 0 0 7 7z" />
            },
            Icon::StarSmile => html! {
                <>
                    <circle cx="12" cy="12" r="10" />
                    <path d="M8 14s1.5 2 4 2 4-2 4-2" />
                    <path d="m9 7 .6 1.4L11 9l-1.4.6L9 11l-.6-1.4L7 9l1.4-.6zM15 7l.6 1.4L17 9l-1.4.6L15 11l-.6-1.4L13 9l1.4-.6z" />
                </>
            },
            Icon::Star => html! {
                <path d="M11.525 2.295a.53.53 0 0 1 .95 0l2.31 4.679a2.123 2.123 0 0 0 1.595 1.16l5.166.756a.53.53 0 0 1 .294.904l-3.736 3.638a2.123 2.123 0 0 0-.611 1.878l.882 5.14a.53.53 0 0 1-.771.56l-4.618-2.428a2.122 2.122 0 0 0-1.973 0L6.396 21.01a.53.53 0 0 1-.77-.56l.881-5.139a2.122 2.122 0 0 0-.611-1.879L2.16 9.795a.53.53 0 0 1 .294-.906l5.165-.755a2.122 2.122 0 0 0 1.597-1.16z" />
            },
            Icon::ChevronLeft => html! { <path d="m15 18-6-6 6-6" /> },
            Icon::ChevronRight => html! { <path d="m9 18 6-6-6-6" /> },
            Icon::ChevronDown => html! { <path d="m6 9 6 6 6-6" /> },
            Icon::ArrowLeft => html! { <path d="m12 19-7-7 7-7M19 12H5" /> },
            Icon::ArrowUp => html! { <path d="m5 12 7-7 7 7M12 19V5" /> },
            Icon::Plus => html! { <path d="M5 12h14M12 5v14" /> },
            Icon::Check => html! { <path d="M20 6 9 17l-5-5" /> },
            Icon::Menu => html! { <path d="M4 12h16M4 6h16M4 18h16" /> },
            Icon::Close => html! { <path d="M18 6 6 18M6 6l12 12" /> },
            Icon::Settings => html! {
                <>
                    <path d="M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z" />
                    <circle cx="12" cy="12" r="3" />
                </>
            },
            Icon::Phone => html! {
                <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" />
            },
            Icon::Mail => html! {
                <>
                    <rect width="20" height="16" x="2" y="4" rx="2" />
                    <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
                </>
            },
            Icon::MapPin => html! {
                <>
                    <path d="M20 10c0 4.99-5.54 10.19-7.4 11.8a1 1 0 0 1-1.2 0C9.54 20.19 4 14.99 4 10a8 8 0 0 1 16 0" />
                    <circle cx="12" cy="10" r="3" />
                </>
            },
            Icon::Clock => html! {
                <>
                    <circle cx="12" cy="12" r="10" />
                    <path d="M12 6v6l4 2" />
                </>
            },
            Icon::Quote => html! {
                <>
                    <path d="M16 3a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2 1 1 0 0 1 1 1v1a2 2 0 0 1-2 2 1 1 0 0 0-1 1v2a1 1 0 0 0 1 1 6 6 0 0 0 6-6V5a2 2 0 0 0-2-2z" />
                    <path d="M5 3a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2 1 1 0 0 1 1 1v1a2 2 0 0 1-2 2 1 1 0 0 0-1 1v2a1 1 0 0 0 1 1 6 6 0 0 0 6-6V5a2 2 0 0 0-2-2z" />
                </>
            },
            Icon::Instagram => html! {
                <>
                    <rect width="20" height="20" x="2" y="2" rx="5" ry="5" />
                    <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" />
                    <line x1="17.5" x2="17.51" y1="6.5" y2="6.5" />
                </>
            },
            Icon::Facebook => html! {
                <path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z" />
            },
            Icon::Youtube => html! {
                <>
                    <path d="M2.5 17a24.12 24.12 0 0 1 0-10 2 2 0 0 1 1.4-1.4 49.56 49.56 0 0 1 16.2 0A2 2 0 0 1 21.5 7a24.12 24.12 0 0 1 0 10 2 2 0 0 1-1.4 1.4 49.55 49.55 0 0 1-16.2 0A2 2 0 0 1 2.5 17" />
                    <path d="m10 15 5-3-5-3z" />
                </>
            },
            Icon::Linkedin => html! {
                <>
                    <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" />
                    <rect width="4" height="12" x="2" y="9" />
                    <circle cx="4" cy="4" r="2" />
                </>
            },
            Icon::Whatsapp => html! {
                <>
                    <path d="M3 21l1.65-3.8a9 9 0 1 1 3.4 2.9z" />
                    <path d="M9 10a.5.5 0 0 0 1 0V9a.5.5 0 0 0-1 0v1a5 5 0 0 0 5 5h1a.5.5 0 0 0 0-1h-1a.5.5 0 0 0 0 1" />
                </>
            },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconViewProps {
    pub icon: Icon,
    #[prop_or(20)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(false)]
    pub filled: bool,
}

#[function_component(IconView)]
pub fn icon_view(props: &IconViewProps) -> Html {
    let size = props.size.to_string();
    let fill = if props.filled { "currentColor" } else { "none" };
    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill={fill}
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { props.icon.shapes() }
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case(Some("Smile"), Icon::Smile)]
    #[case(Some("ShieldCheck"), Icon::ShieldCheck)]
    #[case(Some("Unicorn"), Icon::Smile)]
    #[case(None, Icon::Smile)]
    fn test_about_lookup_falls_back_to_smile(#[case] name: Option<&str>, #[case] expected: Icon) {
        assert_eq!(Icon::lookup(name, Icon::Smile), expected);
    }

    #[test]
    fn test_main_cards_have_fixed_icons() {
        let icons: Vec<_> = (0..5).map(Icon::main_card).collect();
        assert_eq!(
            icons,
            vec![Icon::Tooth, Icon::Teeth, Icon::Stars, Icon::Wand, Icon::HeartPulse]
        );
    }

    #[test]
    fn test_every_listed_service_icon_resolves() {
        for name in MAIN_CARD_ICONS.iter().chain(SECONDARY_SERVICE_ICONS.iter()) {
            assert!(Icon::named(name).is_some(), "{}", name);
        }
    }

    #[test]
    fn test_extra_secondary_services_get_the_tooth() {
        assert_eq!(Icon::secondary_service(8), Icon::Tooth);
        assert_eq!(Icon::secondary_service(1), Icon::HandsClean);
    }
}
