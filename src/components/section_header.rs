use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PillProps {
    pub label: String,
    #[prop_or_default]
    pub dark: bool,
}

/// Pill label followed by a rule with a dot at each end.
#[function_component(SectionPill)]
pub fn section_pill(props: &PillProps) -> Html {
    html! {
        <div class={classes!("section-pill-row", props.dark.then_some("dark"))}>
            <span class="section-pill">{&props.label}</span>
            <span class="pill-dot"></span>
            <span class="pill-line"></span>
            <span class="pill-dot"></span>
        </div>
    }
}
