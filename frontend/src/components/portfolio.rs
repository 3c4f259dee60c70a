use yew::prelude::*;

use crate::components::case_study_modal::CaseStudyModal;
use crate::controllers::modal::{CaseStudyViewer, ModalEvent};
use crate::hooks::use_controller;
use crate::models::PortfolioProject;

#[derive(Properties, PartialEq)]
pub struct PortfolioItemProps {
    pub project: PortfolioProject,
    pub on_open: Callback<String>,
}

fn item_classes(hovered: bool) -> Classes {
    classes!("portfolio-item", hovered.then(|| "hovered"))
}

#[function_component(PortfolioItem)]
pub fn portfolio_item(props: &PortfolioItemProps) -> Html {
    let hovered = use_state(|| false);
    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let onclick = {
        let on_open = props.on_open.clone();
        let id = props.project.id.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(id.clone()))
    };
    let project = &props.project;

    html! {
        <div class={item_classes(*hovered)} {onclick} {onmouseenter} {onmouseleave}>
            <img src={project.thumbnail.clone()} alt={project.title.clone()} />
            <div class="portfolio-overlay">
                <div class="portfolio-meta">
                    <span class="portfolio-category">{ &project.category }</span>
                    <span>{ "↗" }</span>
                </div>
                <h3>{ &project.title }</h3>
                <p>{ &project.summary }</p>
                <span class="portfolio-cta">{ "View Case Study" }</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PortfolioGridProps {
    pub title: String,
    pub subtitle: String,
    pub projects: Vec<PortfolioProject>,
}

#[function_component(PortfolioGrid)]
pub fn portfolio_grid(props: &PortfolioGridProps) -> Html {
    let projects = props.projects.clone();
    let viewer = use_controller(move || CaseStudyViewer::new(projects), Callback::default());

    let on_open = viewer.callback(ModalEvent::Open);
    let on_close = viewer.callback(|_: ()| ModalEvent::Close);
    let on_next = viewer.callback(|_: ()| ModalEvent::NextImage);
    let on_previous = viewer.callback(|_: ()| ModalEvent::PreviousImage);
    let on_show = viewer.callback(ModalEvent::ShowImage);

    html! {
        <section id="portfolio" class="portfolio">
            <style>
                {r#"
                    .portfolio {
                        padding: 6rem 1rem;
                        background: #f9fafb;
                    }
                    .portfolio-header {
                        max-width: 48rem;
                        margin: 0 auto 4rem;
                        text-align: center;
                    }
                    .portfolio-header h2 {
                        font-size: 2.5rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .portfolio-header p {
                        font-size: 1.1rem;
                        color: #4b5563;
                    }
                    .portfolio-grid {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(340px, 1fr));
                        gap: 2rem;
                        justify-items: center;
                    }
                    .portfolio-item {
                        position: relative;
                        width: 100%;
                        max-width: 380px;
                        height: 380px;
                        overflow: hidden;
                        border-radius: 8px;
                        background: #f3f4f6;
                        cursor: pointer;
                        transition: transform 0.3s ease;
                    }
                    .portfolio-item img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.5s ease;
                    }
                    .portfolio-overlay {
                        position: absolute;
                        inset: 0;
                        padding: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        justify-content: flex-end;
                        color: #fff;
                        background: rgba(0, 0, 0, 0.7);
                        opacity: 0;
                        transform: translateY(20px);
                        transition: all 0.3s ease;
                    }
                    .portfolio-item.hovered {
                        transform: translateY(-5px);
                    }
                    .portfolio-item.hovered img {
                        transform: scale(1.1);
                    }
                    .portfolio-item.hovered .portfolio-overlay {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .portfolio-meta {
                        display: flex;
                        justify-content: space-between;
                    }
                    .portfolio-category {
                        font-size: 0.85rem;
                        color: #d1d5db;
                    }
                    .portfolio-overlay h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        margin: 0.5rem 0;
                    }
                    .portfolio-overlay p {
                        font-size: 0.85rem;
                        color: #d1d5db;
                    }
                    .portfolio-cta {
                        margin-top: 1rem;
                        font-weight: 600;
                        text-decoration: underline;
                    }
                "#}
            </style>
            <div class="portfolio-header">
                <h2>{ &props.title }</h2>
                <p>{ &props.subtitle }</p>
            </div>
            <div class="portfolio-grid">
                { for viewer.projects().iter().map(|project| html! {
                    <PortfolioItem key={project.id.clone()} project={project.clone()} on_open={on_open.clone()} />
                }) }
            </div>
            <CaseStudyModal
                is_open={viewer.is_open()}
                case_study={viewer.case_study().cloned()}
                image_index={viewer.image_index()}
                {on_close}
                {on_next}
                {on_previous}
                {on_show}
            />
        </section>
    }
}
