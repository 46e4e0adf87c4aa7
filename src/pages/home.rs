use log::debug;
use yew::prelude::*;

use crate::components::nav::StickyNavbar;
use crate::content::{LegalPage, SectionId};
use crate::context::use_content;
use crate::pages::sections::{
    about::About, before_after::BeforeAfter, faq::Faq, features::Features, footer::Footer, hero::Hero,
    location::Location, team::Team, testimonials::Testimonials,
};
use crate::seo;

fn section_view(section: SectionId) -> Html {
    match section {
        SectionId::Hero => html! { <Hero /> },
        SectionId::BeforeAfter => html! { <BeforeAfter /> },
        SectionId::About => html! { <About /> },
        SectionId::Features => html! { <Features /> },
        SectionId::Team => html! { <Team /> },
        SectionId::Testimonials => html! { <Testimonials /> },
        SectionId::Faq => html! { <Faq /> },
        SectionId::Location => html! { <Location /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_legal: Callback<LegalPage>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let content = use_content();

    {
        let content = content.clone();
        use_effect_with_deps(
            move |_| {
                seo::apply(&content.seo, &content.images);
                debug!("page metadata applied");
                || ()
            },
            (),
        );
    }

    let sections = content.visible_sections();

    html! {
        <div class="home">
            <StickyNavbar />
            <main>
                { for sections.into_iter().map(section_view) }
            </main>
            <Footer on_legal={props.on_legal.clone()} />
        </div>
    }
}
