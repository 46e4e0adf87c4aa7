use std::rc::Rc;

use yew::prelude::*;

use crate::content::ContentConfig;
use crate::theme::Theme;

/// Site content shared by every section. Outside a provider every section
/// reads as disabled.
#[hook]
pub fn use_content() -> Rc<ContentConfig> {
    use_context::<Rc<ContentConfig>>().unwrap_or_default()
}

#[hook]
pub fn use_theme() -> Theme {
    use_context::<Theme>().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct ThemeRootProps {
    #[prop_or_default]
    pub children: Children,
}

/// Wraps the page and exposes the theme as CSS custom properties.
#[function_component(ThemeRoot)]
pub fn theme_root(props: &ThemeRootProps) -> Html {
    let theme = use_theme();
    html! {
        <div class="site-root" style={theme.style_vars()}>
            { for props.children.iter() }
        </div>
    }
}
