//! Site content: every text, image path, link and section toggle.
//!
//! The content lives in `content/site.json` and is compiled into the binary.
//! Every section struct is `#[serde(default)]`, so a disabled section may
//! leave out all of its other fields.

use serde::Deserialize;
use thiserror::Error;

const SITE_CONTENT: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content file is not valid: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{section}: image path is empty")]
    MissingImage { section: &'static str },
    #[error("{section}: image path `{path}` must be absolute")]
    RelativeImage { section: &'static str, path: String },
    #[error("beforeAfter is enabled but lists no images")]
    EmptyCarousel,
}

/// Loads the content compiled into the binary.
pub fn load() -> Result<ContentConfig, ContentError> {
    ContentConfig::from_json(SITE_CONTENT)
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentConfig {
    pub colors: ColorsConfig,
    pub fonts: FontsConfig,
    pub seo: SeoConfig,
    pub infos: InfosConfig,
    pub images: ImagesConfig,
    pub navbar: NavbarConfig,
    pub hero: HeroConfig,
    pub about: AboutConfig,
    pub before_after: BeforeAfterConfig,
    pub features: FeaturesConfig,
    pub team: TeamConfig,
    pub testimonials: TestimonialsConfig,
    pub faq: FaqConfig,
    pub location: LocationConfig,
    pub footer: FooterConfig,
}

/// Page sections in reading order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionId {
    Hero,
    BeforeAfter,
    About,
    Features,
    Team,
    Testimonials,
    Faq,
    Location,
}

impl SectionId {
    pub const ALL: [SectionId; 8] = [
        SectionId::Hero,
        SectionId::BeforeAfter,
        SectionId::About,
        SectionId::Features,
        SectionId::Team,
        SectionId::Testimonials,
        SectionId::Faq,
        SectionId::Location,
    ];

    /// Element id used as the in-page anchor target.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::BeforeAfter => "results",
            SectionId::About => "about",
            SectionId::Features => "features",
            SectionId::Team => "team",
            SectionId::Testimonials => "testimonials",
            SectionId::Faq => "faq",
            SectionId::Location => "location",
        }
    }
}

impl ContentConfig {
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: ContentConfig = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    pub fn is_enabled(&self, section: SectionId) -> bool {
        match section {
            SectionId::Hero => self.hero.enabled,
            SectionId::BeforeAfter => self.before_after.enabled,
            SectionId::About => self.about.enabled,
            SectionId::Features => self.features.enabled,
            SectionId::Team => self.team.enabled && !self.team.members.is_empty(),
            SectionId::Testimonials => self.testimonials.enabled,
            SectionId::Faq => self.faq.enabled,
            SectionId::Location => self.location.enabled,
        }
    }

    pub fn visible_sections(&self) -> Vec<SectionId> {
        SectionId::ALL
            .into_iter()
            .filter(|section| self.is_enabled(*section))
            .collect()
    }

    /// Image paths referenced by the sections that will render.
    fn image_refs(&self) -> Vec<(&'static str, &str)> {
        let mut refs = vec![("seo", self.seo.preview_image(&self.images))];
        if let Some(logo) = self.images.logo() {
            refs.push(("images.logo", logo));
        }
        if self.hero.enabled {
            refs.push(("hero", self.images.hero.background_mobile.as_str()));
            refs.push(("hero", self.images.hero.background_desktop.as_str()));
        }
        if self.about.enabled {
            refs.push(("about", self.images.about.main.as_str()));
        }
        if self.before_after.enabled {
            refs.extend(self.before_after.images.iter().map(|i| ("beforeAfter", i.as_str())));
        }
        if self.features.enabled {
            refs.extend(
                self.features
                    .cards
                    .main_cards()
                    .iter()
                    .map(|card| ("features", card.image.as_str())),
            );
        }
        if self.is_enabled(SectionId::Team) {
            refs.extend(self.team.members.iter().map(|m| ("team", m.image.as_str())));
        }
        if self.testimonials.enabled {
            refs.extend(
                self.testimonials
                    .items
                    .iter()
                    .map(|t| ("testimonials", t.image.as_str())),
            );
        }
        refs
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.before_after.enabled && self.before_after.images.is_empty() {
            return Err(ContentError::EmptyCarousel);
        }
        for (section, path) in self.image_refs() {
            if path.trim().is_empty() {
                return Err(ContentError::MissingImage { section });
            }
            if !(path.starts_with('/') || path.starts_with("https://") || path.starts_with("http://")) {
                return Err(ContentError::RelativeImage {
                    section,
                    path: path.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorsConfig {
    pub primary: String,
    pub primary_dark: String,
    pub secondary: String,
    pub background: String,
    pub text: String,
    pub text_muted: String,
    pub accent: String,
    pub whatsapp: String,
    pub whatsapp_hover: String,
    pub whatsapp_text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FontsConfig {
    pub display: String,
    pub headings: String,
    pub body: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeoConfig {
    pub title: String,
    pub description: String,
    pub domain: String,
    pub path: String,
    pub theme_color: String,
    pub keywords: String,
    pub og: OpenGraph,
    pub twitter: TwitterCard,
}

impl SeoConfig {
    /// Domain without its scheme, as shown in running text.
    pub fn display_domain(&self) -> &str {
        self.domain
            .strip_prefix("https://")
            .or_else(|| self.domain.strip_prefix("http://"))
            .unwrap_or(&self.domain)
    }

    /// Link preview image: the Open Graph image, else the shared preview asset.
    pub fn preview_image<'a>(&'a self, images: &'a ImagesConfig) -> &'a str {
        if self.og.image.trim().is_empty() {
            images.seo.preview.as_str()
        } else {
            self.og.image.as_str()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub site_name: String,
    pub image: String,
    pub locale: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TwitterCard {
    pub card: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InfosConfig {
    pub name: String,
    pub cnpj: String,
    pub phone: String,
    /// Phone number in international format, digits only.
    pub whatsapp: String,
    pub email: String,
    pub address: String,
    pub mini_address: String,
    pub maps_link: String,
    pub maps_embed: String,
    pub default_whatsapp_message: String,
}

impl InfosConfig {
    pub fn phone_digits(&self) -> String {
        self.phone.chars().filter(char::is_ascii_digit).collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImagesConfig {
    logo: Option<String>,
    pub seo: SeoImages,
    pub hero: HeroImages,
    pub about: AboutImages,
}

impl ImagesConfig {
    /// Custom logo, if one is configured. An empty string means "use the default mark".
    pub fn logo(&self) -> Option<&str> {
        self.logo.as_deref().filter(|logo| !logo.is_empty())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SeoImages {
    pub preview: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroImages {
    pub background_mobile: String,
    pub background_desktop: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AboutImages {
    pub main: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavbarConfig {
    pub enabled: bool,
    pub logo_text: String,
    pub show_logo: bool,
    pub menu_items: Vec<Link>,
    pub cta_button_text: String,
    pub cta_button_link: String,
}

impl NavbarConfig {
    pub const CONTACT_HREF: &'static str = "#contact";

    /// Configured menu, or the standard section anchors when none is set.
    pub fn menu(&self) -> Vec<Link> {
        if !self.menu_items.is_empty() {
            return self.menu_items.clone();
        }
        vec![
            Link::new("Home", "#hero"),
            Link::new("Sobre Nós", "#about"),
            Link::new("Serviços", "#features"),
            Link::new("Equipe", "#team"),
            Link::new("Localização", "#location"),
            Link::new("Contato", Self::CONTACT_HREF),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Cta {
    pub text: String,
    pub link: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroBadge {
    pub member_count: String,
    pub subtitle: String,
    pub avatars: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeroHeadline {
    pub line1: String,
    pub line2: String,
    pub line3: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FloatingStats {
    pub left: Stat,
    pub top_right: Stat,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroConfig {
    pub enabled: bool,
    pub badge: HeroBadge,
    pub headline: HeroHeadline,
    pub floating_stats: FloatingStats,
    pub bottom_stats: Vec<Stat>,
    pub cta_primary: Cta,
    pub cta_secondary: Cta,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AboutFeature {
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AboutConfig {
    pub enabled: bool,
    pub pill: String,
    pub headline: String,
    pub description: String,
    pub features: Vec<AboutFeature>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BeforeAfterConfig {
    pub enabled: bool,
    pub pill: String,
    pub headline: String,
    pub description: String,
    pub images: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardData {
    pub title: String,
    pub description: String,
    pub subtitle: Option<String>,
    pub image: String,
    pub color: Option<String>,
    pub tag_text: Option<String>,
    pub price: Option<String>,
    pub text: Option<String>,
    pub whatsapp_message: Option<String>,
}

impl CardData {
    pub fn tag(&self) -> &str {
        self.tag_text.as_deref().unwrap_or("Especialidade")
    }

    pub fn booking_message(&self) -> String {
        self.whatsapp_message.clone().unwrap_or_else(|| {
            format!("Olá! Vim pelo site e quero agendar um(a) {}.", self.title)
        })
    }
}

/// The five headline services, always shown in this order.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FeatureCards {
    pub card1: CardData,
    pub card2: CardData,
    pub card3: CardData,
    pub card4: CardData,
    pub card5: CardData,
}

impl FeatureCards {
    pub fn main_cards(&self) -> [&CardData; 5] {
        [&self.card1, &self.card2, &self.card3, &self.card4, &self.card5]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SecondaryService {
    pub title: String,
    pub description: String,
    pub whatsapp_message: Option<String>,
}

impl SecondaryService {
    pub fn inquiry_message(&self) -> String {
        self.whatsapp_message.clone().unwrap_or_else(|| {
            format!("Olá! Vim pelo site e gostaria de saber mais sobre {}.", self.title)
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeaturesConfig {
    pub enabled: bool,
    pub pill: String,
    pub headline: String,
    pub sub_headline: String,
    pub cards: FeatureCards,
    pub secondary_services: Vec<SecondaryService>,
    pub view_more_text: String,
    pub view_less_text: String,
}

impl FeaturesConfig {
    pub fn toggle_label(&self, expanded: bool) -> &str {
        if expanded {
            &self.view_less_text
        } else {
            &self.view_more_text
        }
    }

    /// Services shown under the toggle. Collapsed shows none.
    pub fn listed_services(&self, expanded: bool) -> &[SecondaryService] {
        if expanded {
            &self.secondary_services
        } else {
            &[]
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub image: String,
    pub cro: Option<String>,
    pub social_url: Option<String>,
    pub bio: Option<String>,
}

const DEFAULT_BIO: &str = "Especialista dedicada a oferecer o melhor tratamento odontológico, \
combinando técnica apurada e tecnologia avançada para transformar sorrisos e vidas.";

impl TeamMember {
    /// Bio split on blank lines.
    pub fn bio_paragraphs(&self) -> Vec<&str> {
        match self.bio.as_deref() {
            Some(bio) if !bio.trim().is_empty() => bio
                .split("\n\n")
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .collect(),
            _ => vec![DEFAULT_BIO],
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamConfig {
    pub enabled: bool,
    pub pill: String,
    pub headline: String,
    pub sub_headline: String,
    pub members: Vec<TeamMember>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: u8,
    pub image: String,
}

impl Testimonial {
    pub const MAX_RATING: u8 = 5;

    pub fn stars(&self) -> u8 {
        self.rating.min(Self::MAX_RATING)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TestimonialsConfig {
    pub enabled: bool,
    pub pill: String,
    pub headline: String,
    pub headline_highlight: String,
    pub subtitle: String,
    pub items: Vec<Testimonial>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FaqConfig {
    pub enabled: bool,
    pub pill: String,
    pub headline: String,
    pub headline_highlight: String,
    pub sub_headline: String,
    pub button_text: String,
    pub items: Vec<FaqEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OpeningHours {
    pub label: String,
    pub time: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    pub enabled: bool,
    pub pill: String,
    pub title: String,
    pub description: String,
    pub hours: Vec<OpeningHours>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialNetwork {
    Instagram,
    Facebook,
    Youtube,
    Linkedin,
}

impl SocialNetwork {
    pub fn label(self) -> &'static str {
        match self {
            SocialNetwork::Instagram => "instagram",
            SocialNetwork::Facebook => "facebook",
            SocialNetwork::Youtube => "youtube",
            SocialNetwork::Linkedin => "linkedin",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub youtube: Option<String>,
    pub linkedin: Option<String>,
}

impl SocialLinks {
    /// Configured networks only, in display order.
    pub fn entries(&self) -> Vec<(SocialNetwork, &str)> {
        [
            (SocialNetwork::Instagram, &self.instagram),
            (SocialNetwork::Facebook, &self.facebook),
            (SocialNetwork::Youtube, &self.youtube),
            (SocialNetwork::Linkedin, &self.linkedin),
        ]
        .into_iter()
        .filter_map(|(network, url)| {
            url.as_deref()
                .filter(|u| !u.is_empty())
                .map(|u| (network, u))
        })
        .collect()
    }
}

/// Legal view a footer policy link opens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegalPage {
    #[default]
    Privacy,
    Terms,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PolicyLink {
    pub label: String,
    pub page: LegalPage,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterConfig {
    pub enabled: bool,
    pub description: String,
    pub social_links: SocialLinks,
    pub quick_links: Vec<Link>,
    pub policies: Vec<PolicyLink>,
    pub copyright: String,
    pub developed_by: String,
    pub developer_name: String,
    pub developer_url: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[fixture]
    fn site() -> ContentConfig {
        load().expect("shipped content must be valid")
    }

    fn minimal(extra: &str) -> String {
        format!(
            r#"{{
                "hero": {{ "enabled": false }},
                "beforeAfter": {{ "enabled": false }},
                "about": {{ "enabled": false }},
                "features": {{ "enabled": false }},
                "team": {{ "enabled": false }},
                "testimonials": {{ "enabled": false }},
                "faq": {{ "enabled": false }},
                "location": {{ "enabled": false }},
                "seo": {{ "og": {{ "image": "/images/preview.webp" }} }}
                {extra}
            }}"#
        )
    }

    #[rstest]
    fn test_shipped_content_renders_every_section(site: ContentConfig) {
        assert_eq!(site.visible_sections(), SectionId::ALL.to_vec());
        assert!(site.footer.enabled);
        assert_eq!(site.features.cards.main_cards().len(), 5);
    }

    #[rstest]
    fn test_shipped_content_details(site: ContentConfig) {
        assert_eq!(site.features.view_more_text, "Ver Mais Serviços");
        assert_eq!(site.features.secondary_services.len(), 8);
        assert_eq!(site.before_after.images.len(), 3);
        assert_eq!(site.infos.phone_digits(), "1932729019");
        assert_eq!(site.seo.display_domain(), "odontorodacki.netlify.app");
        assert_eq!(site.images.logo(), None);
    }

    #[test]
    fn test_disabled_sections_need_no_fields() {
        let content = ContentConfig::from_json(&minimal("")).unwrap();
        assert!(content.visible_sections().is_empty());
    }

    #[rstest]
    fn test_disabling_a_section_removes_it(mut site: ContentConfig) {
        site.features.enabled = false;
        site.testimonials.enabled = false;
        let visible = site.visible_sections();
        assert!(!visible.contains(&SectionId::Features));
        assert!(!visible.contains(&SectionId::Testimonials));
        assert_eq!(visible.len(), SectionId::ALL.len() - 2);
    }

    #[rstest]
    fn test_team_without_members_is_hidden(mut site: ContentConfig) {
        site.team.members.clear();
        assert!(!site.is_enabled(SectionId::Team));
    }

    #[test]
    fn test_empty_carousel_is_rejected() {
        let raw = minimal(r#", "beforeAfter": { "enabled": true, "images": [] }"#).replace(
            r#""beforeAfter": { "enabled": false },"#,
            "",
        );
        assert!(matches!(
            ContentConfig::from_json(&raw),
            Err(ContentError::EmptyCarousel)
        ));
    }

    #[rstest]
    fn test_relative_image_is_rejected(mut site: ContentConfig) {
        site.features.cards.card3.image = "images/service3.avif".to_string();
        match site.validate() {
            Err(ContentError::RelativeImage { section, path }) => {
                assert_eq!(section, "features");
                assert_eq!(path, "images/service3.avif");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[rstest]
    fn test_disabled_section_images_are_not_checked(mut site: ContentConfig) {
        site.team.enabled = false;
        site.team.members[0].image.clear();
        assert!(site.validate().is_ok());
    }

    #[rstest]
    fn test_missing_image_is_rejected(mut site: ContentConfig) {
        site.testimonials.items[0].image.clear();
        assert!(matches!(
            site.validate(),
            Err(ContentError::MissingImage { section: "testimonials" })
        ));
    }

    #[rstest]
    fn test_empty_og_image_falls_back_to_preview(mut site: ContentConfig) {
        site.seo.og.image.clear();
        site.images.seo.preview = "/images/preview.webp".to_string();
        assert_eq!(site.seo.preview_image(&site.images), "/images/preview.webp");
        assert!(site.validate().is_ok());
    }

    #[rstest]
    fn test_missing_preview_everywhere_is_rejected(mut site: ContentConfig) {
        site.seo.og.image.clear();
        site.images.seo.preview.clear();
        assert!(matches!(
            site.validate(),
            Err(ContentError::MissingImage { section: "seo" })
        ));
    }

    #[rstest]
    fn test_relative_fallback_preview_is_rejected(mut site: ContentConfig) {
        site.seo.og.image.clear();
        site.images.seo.preview = "preview.webp".to_string();
        assert!(matches!(
            site.validate(),
            Err(ContentError::RelativeImage { section: "seo", .. })
        ));
    }

    #[test]
    fn test_service_icon_names_are_ignored() {
        let card: CardData =
            serde_json::from_str(r#"{ "title": "Implantes", "icon": "Dna", "image": "/images/s1.avif" }"#).unwrap();
        assert_eq!(card.title, "Implantes");
        let service: SecondaryService =
            serde_json::from_str(r#"{ "title": "Clareamento", "icon": "Sparkles" }"#).unwrap();
        assert_eq!(service.inquiry_message(), "Olá! Vim pelo site e gostaria de saber mais sobre Clareamento.");
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        assert!(matches!(
            ContentConfig::from_json("{ \"hero\": "),
            Err(ContentError::Parse(_))
        ));
    }

    #[rstest]
    #[case(false, "Ver Mais Serviços")]
    #[case(true, "Ocultar Serviços")]
    fn test_toggle_label(site: ContentConfig, #[case] expanded: bool, #[case] expected: &str) {
        assert_eq!(site.features.toggle_label(expanded), expected);
    }

    #[rstest]
    fn test_one_expand_click_lists_services(site: ContentConfig) {
        let features = &site.features;
        let expanded = false;
        assert!(features.listed_services(expanded).is_empty());
        assert_eq!(features.toggle_label(expanded), "Ver Mais Serviços");

        let expanded = !expanded;
        assert_eq!(features.listed_services(expanded).len(), 8);
        assert_eq!(features.toggle_label(expanded), "Ocultar Serviços");
    }

    #[test]
    fn test_card_defaults() {
        let card = CardData {
            title: "CLAREAMENTO".to_string(),
            ..Default::default()
        };
        assert_eq!(card.tag(), "Especialidade");
        assert_eq!(
            card.booking_message(),
            "Olá! Vim pelo site e quero agendar um(a) CLAREAMENTO."
        );
    }

    #[test]
    fn test_service_inquiry_prefers_configured_message() {
        let service = SecondaryService {
            title: "PERIODONTIA".to_string(),
            whatsapp_message: Some("Quero tratar a gengiva".to_string()),
            ..Default::default()
        };
        assert_eq!(service.inquiry_message(), "Quero tratar a gengiva");
    }

    #[rstest]
    #[case(Some("Primeiro.\n\nSegundo.\n\n"), vec!["Primeiro.", "Segundo."])]
    #[case(Some("Uma linha só"), vec!["Uma linha só"])]
    #[case(None, vec![DEFAULT_BIO])]
    #[case(Some("   "), vec![DEFAULT_BIO])]
    fn test_bio_paragraphs(#[case] bio: Option<&str>, #[case] expected: Vec<&str>) {
        let member = TeamMember {
            bio: bio.map(str::to_string),
            ..Default::default()
        };
        assert_eq!(member.bio_paragraphs(), expected);
    }

    #[test]
    fn test_menu_falls_back_to_section_anchors() {
        let navbar = NavbarConfig::default();
        let hrefs: Vec<_> = navbar.menu().into_iter().map(|l| l.href).collect();
        assert_eq!(
            hrefs,
            vec!["#hero", "#about", "#features", "#team", "#location", "#contact"]
        );
    }

    #[rstest]
    fn test_social_links_skip_unset(site: ContentConfig) {
        let networks: Vec<_> = site
            .footer
            .social_links
            .entries()
            .into_iter()
            .map(|(network, _)| network)
            .collect();
        assert_eq!(
            networks,
            vec![
                SocialNetwork::Instagram,
                SocialNetwork::Facebook,
                SocialNetwork::Youtube
            ]
        );
    }

    #[rstest]
    fn test_policies_map_to_legal_pages(site: ContentConfig) {
        let pages: Vec<_> = site.footer.policies.iter().map(|p| p.page).collect();
        assert_eq!(pages, vec![LegalPage::Terms, LegalPage::Privacy]);
    }

    #[test]
    fn test_rating_is_capped() {
        let testimonial = Testimonial {
            rating: 9,
            ..Default::default()
        };
        assert_eq!(testimonial.stars(), 5);
    }
}
