use yew::prelude::*;

use crate::components::scroll_reveal::ScrollReveal;
use crate::components::section_header::SectionPill;
use crate::content::{SectionId, TeamMember};
use crate::context::use_content;

#[derive(Properties, PartialEq)]
struct MemberProfileProps {
    member: TeamMember,
}

#[function_component(MemberProfile)]
fn member_profile(props: &MemberProfileProps) -> Html {
    let member = &props.member;
    html! {
        <div class="member">
            <div class="member-photo">
                <ScrollReveal>
                    <div class="member-frame">
                        <img src={member.image.clone()} alt={member.name.clone()} />
                        <div class="member-frame-edge"></div>
                    </div>
                </ScrollReveal>
            </div>
            <div class="member-text">
                <ScrollReveal delay_ms={200}>
                    <div class="member-heading">
                        <h3>{&member.name}</h3>
                        <p class="member-role">{&member.role}</p>
                    </div>
                    <div class="member-bio">
                        { for member.bio_paragraphs().into_iter().map(|paragraph| html! { <p>{paragraph}</p> }) }
                    </div>
                    if let Some(cro) = &member.cro {
                        <div class="member-cro"><p>{cro}</p></div>
                    }
                </ScrollReveal>
            </div>
        </div>
    }
}

#[function_component(Team)]
pub fn team() -> Html {
    let content = use_content();

    if !content.is_enabled(SectionId::Team) {
        return html! {};
    }

    let team = &content.team;

    html! {
        <section id={SectionId::Team.anchor()} class="team">
            <style>
                {r#"
                .team {
                    width: 100%;
                    background: white;
                    padding: 4rem 0;
                }
                .team-heading {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    margin-bottom: 4rem;
                    max-width: 56rem;
                }
                .team-heading h2 {
                    font-family: var(--font-headings);
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: black;
                    line-height: 1.1;
                    text-transform: uppercase;
                    letter-spacing: -0.02em;
                    white-space: pre-line;
                    margin: 0;
                }
                .team-heading p {
                    color: var(--color-text-muted);
                    font-size: 1.125rem;
                    line-height: 1.6;
                    max-width: 42rem;
                    margin: 0;
                }
                .team-members {
                    display: flex;
                    flex-direction: column;
                    gap: 5rem;
                }
                .member {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                    align-items: center;
                }
                .member-frame {
                    position: relative;
                    width: 100%;
                    aspect-ratio: 3 / 4;
                    border-radius: 32px;
                    overflow: hidden;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .member-frame img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s;
                }
                .member-frame:hover img {
                    transform: scale(1.05);
                }
                .member-frame-edge {
                    position: absolute;
                    inset: 0;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 32px;
                    pointer-events: none;
                }
                .member-heading h3 {
                    font-family: var(--font-headings);
                    font-weight: 700;
                    font-size: 1.875rem;
                    color: black;
                    text-transform: uppercase;
                    letter-spacing: -0.02em;
                    margin: 0 0 0.5rem;
                }
                .member-role {
                    font-family: var(--font-headings);
                    font-size: 1.25rem;
                    color: var(--color-primary);
                    font-weight: 500;
                    text-transform: uppercase;
                    letter-spacing: 0.03em;
                    margin: 0;
                }
                .member-bio {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    margin-top: 2rem;
                }
                .member-bio p {
                    color: #525252;
                    font-size: 1.125rem;
                    line-height: 1.6;
                    margin: 0;
                }
                .member-cro {
                    margin-top: 2rem;
                    padding-top: 1rem;
                    border-top: 1px solid #f5f5f5;
                }
                .member-cro p {
                    font-family: var(--font-headings);
                    color: #a3a3a3;
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    margin: 0;
                }
                @media (min-width: 768px) {
                    .team { padding: 6rem 0; }
                    .team-heading h2 { font-size: 3rem; }
                    .member { grid-template-columns: 1fr 1fr; }
                    .member-heading h3 { font-size: 3rem; }
                    .member-role { font-size: 1.5rem; }
                }
                @media (min-width: 1024px) {
                    .team-heading h2 { font-size: 3.75rem; }
                    .member { grid-template-columns: 5fr 7fr; gap: 5rem; }
                }
                "#}
            </style>
            <div class="container">
                <ScrollReveal>
                    <SectionPill label={team.pill.clone()} />
                    <div class="team-heading">
                        <h2>{&team.headline}</h2>
                        <p>{&team.sub_headline}</p>
                    </div>
                </ScrollReveal>
                <div class="team-members">
                    { for team.members.iter().enumerate().map(|(index, member)| html! {
                        <MemberProfile key={index} member={member.clone()} />
                    }) }
                </div>
            </div>
        </section>
    }
}
