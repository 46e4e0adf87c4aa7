use log::warn;
use web_sys::Document;

use crate::content::{ImagesConfig, SeoConfig};

/// Which attribute identifies a meta tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetaKey {
    Name,
    Property,
}

impl MetaKey {
    fn attribute(self) -> &'static str {
        match self {
            MetaKey::Name => "name",
            MetaKey::Property => "property",
        }
    }
}

/// Meta tags for the home view, in the order they are written.
pub fn meta_tags(seo: &SeoConfig, images: &ImagesConfig) -> Vec<(MetaKey, &'static str, String)> {
    let page_url = format!("{}{}", seo.domain.trim_end_matches('/'), seo.path);
    let preview = seo.preview_image(images);
    let image_url = if preview.starts_with('/') {
        format!("{}{}", seo.domain.trim_end_matches('/'), preview)
    } else {
        preview.to_string()
    };
    vec![
        (MetaKey::Name, "description", seo.description.clone()),
        (MetaKey::Name, "keywords", seo.keywords.clone()),
        (MetaKey::Name, "theme-color", seo.theme_color.clone()),
        (MetaKey::Property, "og:title", seo.og.title.clone()),
        (MetaKey::Property, "og:description", seo.og.description.clone()),
        (MetaKey::Property, "og:type", seo.og.kind.clone()),
        (MetaKey::Property, "og:site_name", seo.og.site_name.clone()),
        (MetaKey::Property, "og:locale", seo.og.locale.clone()),
        (MetaKey::Property, "og:url", page_url),
        (MetaKey::Property, "og:image", image_url.clone()),
        (MetaKey::Name, "twitter:card", seo.twitter.card.clone()),
        (MetaKey::Name, "twitter:title", seo.og.title.clone()),
        (MetaKey::Name, "twitter:description", seo.og.description.clone()),
        (MetaKey::Name, "twitter:image", image_url),
    ]
}

fn upsert_meta(document: &Document, key: MetaKey, name: &str, content: &str) -> Option<()> {
    let selector = format!("meta[{}=\"{}\"]", key.attribute(), name);
    let meta = match document.query_selector(&selector).ok()? {
        Some(existing) => existing,
        None => {
            let created = document.create_element("meta").ok()?;
            created.set_attribute(key.attribute(), name).ok()?;
            document.head()?.append_child(&created).ok()?;
            created
        }
    };
    meta.set_attribute("content", content).ok()
}

/// Sets the document title and writes every meta tag, reusing tags already in the head.
pub fn apply(seo: &SeoConfig, images: &ImagesConfig) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    document.set_title(&seo.title);
    for (key, name, content) in meta_tags(seo, images) {
        if content.is_empty() {
            continue;
        }
        if upsert_meta(&document, key, name, &content).is_none() {
            warn!("could not write meta tag `{}`", name);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn tag<'a>(tags: &'a [(MetaKey, &'static str, String)], name: &str) -> Option<&'a str> {
        tags.iter()
            .find(|(_, n, _)| *n == name)
            .map(|(_, _, content)| content.as_str())
    }

    #[test]
    fn test_meta_tags_from_shipped_content() {
        let content = crate::content::load().unwrap();
        let tags = meta_tags(&content.seo, &content.images);
        assert_eq!(tag(&tags, "og:url"), Some("https://odontorodacki.netlify.app/"));
        assert_eq!(
            tag(&tags, "og:image"),
            Some("https://odontorodacki.netlify.app/images/preview.webp")
        );
        assert_eq!(tag(&tags, "twitter:card"), Some("summary_large_image"));
        assert_eq!(tag(&tags, "theme-color"), Some("#0ea5e9"));
    }

    #[test]
    fn test_og_image_falls_back_to_preview() {
        let seo = SeoConfig {
            domain: "https://example.com/".to_string(),
            path: "/".to_string(),
            ..Default::default()
        };
        let mut images = ImagesConfig::default();
        images.seo.preview = "/images/p.webp".to_string();
        let tags = meta_tags(&seo, &images);
        assert_eq!(tag(&tags, "og:image"), Some("https://example.com/images/p.webp"));
    }

    #[test]
    fn test_og_tags_use_property_attribute() {
        let tags = meta_tags(&SeoConfig::default(), &ImagesConfig::default());
        for (key, name, _) in tags {
            let expected = if name.starts_with("og:") {
                MetaKey::Property
            } else {
                MetaKey::Name
            };
            assert_eq!(key, expected, "{}", name);
        }
    }
}
