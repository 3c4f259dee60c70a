use yew::prelude::*;

use crate::components::dynamic_text::DynamicText;
use crate::config::Timings;
use crate::models::{CompanyValue, TeamMember};

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub values: Vec<CompanyValue>,
    pub team: Vec<TeamMember>,
    #[prop_or_default]
    pub timings: Timings,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    html! {
        <section id="about" class="about">
            <style>
                {r#"
                    .about {
                        padding: 5rem 1rem;
                        background: #fff;
                    }
                    .about-inner {
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .about-header {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .about-header h2 {
                        font-size: 2.75rem;
                        font-weight: 700;
                        color: #111827;
                        margin-bottom: 1rem;
                    }
                    .about-subtitle {
                        font-size: 1.25rem;
                        color: #4b5563;
                        margin-bottom: 1.5rem;
                    }
                    .about-description {
                        max-width: 48rem;
                        margin: 0 auto 2rem;
                        color: #374151;
                        line-height: 1.7;
                    }
                    .about hr {
                        margin: 4rem 0;
                        border: none;
                        border-top: 1px solid #e5e7eb;
                    }
                    .about h3 {
                        font-size: 1.9rem;
                        font-weight: 700;
                        text-align: center;
                        color: #111827;
                        margin-bottom: 3rem;
                    }
                    .values-grid, .team-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                        margin-bottom: 5rem;
                    }
                    .value-card {
                        background: #f9fafb;
                        padding: 1.5rem;
                        border-radius: 8px;
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                        transition: box-shadow 0.3s ease;
                    }
                    .value-card:hover {
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);
                    }
                    .value-icon {
                        font-size: 2.5rem;
                        margin-bottom: 1rem;
                    }
                    .value-card h4, .team-card h4 {
                        font-size: 1.25rem;
                        font-weight: 600;
                        color: #111827;
                        margin-bottom: 0.5rem;
                    }
                    .team-card {
                        text-align: center;
                    }
                    .team-card img {
                        width: 10rem;
                        height: 10rem;
                        border-radius: 50%;
                        object-fit: cover;
                        background: #f3f4f6;
                        margin-bottom: 1rem;
                    }
                    .team-card p {
                        color: #4b5563;
                    }
                    @media (max-width: 1024px) {
                        .values-grid, .team-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (max-width: 640px) {
                        .values-grid, .team-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="about-inner">
                <div class="about-header">
                    <h2>{ &props.title }</h2>
                    <p class="about-subtitle">{ &props.subtitle }</p>
                    <p class="about-description">{ &props.description }</p>
                    <DynamicText timings={props.timings.clone()} />
                </div>
                <hr />
                <h3>{ "Our Values" }</h3>
                <div class="values-grid">
                    { for props.values.iter().map(|value| html! {
                        <div class="value-card">
                            <div class="value-icon" aria-hidden="true">{ value.icon.glyph() }</div>
                            <h4>{ &value.title }</h4>
                            <p>{ &value.description }</p>
                        </div>
                    }) }
                </div>
                <h3>{ "Meet Our Team" }</h3>
                <div class="team-grid">
                    { for props.team.iter().map(|member| html! {
                        <div class="team-card">
                            <img src={member.image.clone()} alt={member.name.clone()} />
                            <h4>{ &member.name }</h4>
                            <p>{ &member.role }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
