use crate::content::{ColorsConfig, ContentConfig, FontsConfig};

/// Palette and font stacks handed down the tree through a context.
/// The root element turns it into CSS custom properties once.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Theme {
    pub colors: ColorsConfig,
    pub fonts: FontsConfig,
}

impl Theme {
    pub fn from_content(content: &ContentConfig) -> Self {
        Self {
            colors: content.colors.clone(),
            fonts: content.fonts.clone(),
        }
    }

    fn variables(&self) -> [(&'static str, &str); 13] {
        let c = &self.colors;
        let f = &self.fonts;
        [
            ("--color-primary", c.primary.as_str()),
            ("--color-primary-dark", c.primary_dark.as_str()),
            ("--color-secondary", c.secondary.as_str()),
            ("--color-background", c.background.as_str()),
            ("--color-text", c.text.as_str()),
            ("--color-text-muted", c.text_muted.as_str()),
            ("--color-accent", c.accent.as_str()),
            ("--color-whatsapp", c.whatsapp.as_str()),
            ("--color-whatsapp-hover", c.whatsapp_hover.as_str()),
            ("--color-whatsapp-text", c.whatsapp_text.as_str()),
            ("--font-display", f.display.as_str()),
            ("--font-headings", f.headings.as_str()),
            ("--font-body", f.body.as_str()),
        ]
    }

    /// Inline `style` value for the root element. Empty entries are skipped
    /// so the stylesheet fallbacks apply.
    pub fn style_vars(&self) -> String {
        self.variables()
            .iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_style_vars_from_shipped_content() {
        let content = crate::content::load().unwrap();
        let vars = Theme::from_content(&content).style_vars();
        assert!(vars.starts_with("--color-primary: #0ea5e9; --color-primary-dark: #0284c7;"));
        assert!(vars.contains("--font-display: Bebas Neue, sans-serif;"));
        assert!(vars.ends_with("--font-body: Inter, sans-serif;"));
    }

    #[test]
    fn test_empty_values_are_skipped() {
        let theme = Theme {
            colors: ColorsConfig {
                primary: "#111111".to_string(),
                accent: "  ".to_string(),
                ..Default::default()
            },
            fonts: FontsConfig::default(),
        };
        assert_eq!(theme.style_vars(), "--color-primary: #111111;");
    }

    #[test]
    fn test_default_theme_sets_nothing() {
        assert_eq!(Theme::default().style_vars(), "");
    }
}
