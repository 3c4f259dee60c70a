use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::models::CaseStudy;

#[derive(Properties, PartialEq)]
pub struct CaseStudyModalProps {
    pub is_open: bool,
    pub case_study: Option<CaseStudy>,
    pub image_index: usize,
    pub on_close: Callback<()>,
    pub on_next: Callback<()>,
    pub on_previous: Callback<()>,
    pub on_show: Callback<usize>,
}

fn overlay_classes(is_open: bool) -> Classes {
    classes!("modal-overlay", if is_open { "open" } else { "closing" })
}

#[function_component(CaseStudyModal)]
pub fn case_study_modal(props: &CaseStudyModalProps) -> Html {
    {
        let is_open = props.is_open;
        let on_close = props.on_close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if is_open && e.key() == "Escape" {
                on_close.emit(());
            }
        });
    }

    // The last study stays rendered after closing so the overlay can fade out.
    let Some(study) = props.case_study.as_ref() else {
        return html! {};
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    // Clicks inside the dialog must not reach the overlay.
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());
    let previous = {
        let on_previous = props.on_previous.clone();
        Callback::from(move |_: MouseEvent| on_previous.emit(()))
    };
    let next = {
        let on_next = props.on_next.clone();
        Callback::from(move |_: MouseEvent| on_next.emit(()))
    };
    let has_gallery = study.images.len() > 1;

    html! {
        <div class={overlay_classes(props.is_open)} onclick={close.clone()} aria-hidden={(!props.is_open).to_string()}>
            <style>
                {r#"
                    .modal-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(0, 0, 0, 0.8);
                        transition: opacity 0.3s ease, visibility 0s linear 0s;
                    }
                    .modal-overlay.closing {
                        opacity: 0;
                        visibility: hidden;
                        pointer-events: none;
                        transition: opacity 0.3s ease, visibility 0s linear 0.3s;
                    }
                    .modal-content {
                        position: relative;
                        width: 90vw;
                        max-width: 56rem;
                        max-height: 90vh;
                        overflow-y: auto;
                        background: #fff;
                        border-radius: 8px;
                    }
                    .modal-close {
                        position: absolute;
                        top: 0.75rem;
                        right: 0.75rem;
                        z-index: 20;
                        background: rgba(0, 0, 0, 0.4);
                        color: #fff;
                        border: none;
                        border-radius: 999px;
                        width: 2rem;
                        height: 2rem;
                        cursor: pointer;
                    }
                    .modal-gallery {
                        position: relative;
                        height: 50vh;
                        overflow: hidden;
                        background: #f3f4f6;
                    }
                    .modal-image {
                        position: absolute;
                        inset: 0;
                        opacity: 0;
                        transition: opacity 0.5s ease;
                    }
                    .modal-image.active {
                        opacity: 1;
                        z-index: 10;
                    }
                    .modal-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .modal-arrow {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        z-index: 15;
                        background: rgba(0, 0, 0, 0.2);
                        color: #fff;
                        border: none;
                        border-radius: 999px;
                        width: 2.5rem;
                        height: 2.5rem;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .modal-arrow:hover { background: rgba(0, 0, 0, 0.4); }
                    .modal-arrow.prev { left: 0.5rem; }
                    .modal-arrow.next { right: 0.5rem; }
                    .modal-dots {
                        position: absolute;
                        bottom: 1rem;
                        left: 0;
                        right: 0;
                        z-index: 15;
                        display: flex;
                        justify-content: center;
                        gap: 0.5rem;
                    }
                    .modal-dots button {
                        width: 8px;
                        height: 8px;
                        padding: 0;
                        border: none;
                        border-radius: 999px;
                        background: rgba(255, 255, 255, 0.5);
                        cursor: pointer;
                    }
                    .modal-dots button.active { background: #fff; }
                    .modal-body { padding: 1.5rem; }
                    .modal-body h2 { font-size: 1.9rem; font-weight: 700; }
                    .modal-client { font-size: 1.1rem; color: #4b5563; margin-top: 0.25rem; }
                    .modal-body h3 { font-size: 1.25rem; font-weight: 600; margin: 1.5rem 0 0.5rem; }
                    .modal-body p { color: #374151; }
                    .modal-columns {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.5rem;
                    }
                    .modal-footer { padding: 0 1.5rem 1.5rem; }
                    .modal-footer button {
                        padding: 0.75rem 1.5rem;
                        border: none;
                        border-radius: 6px;
                        background: #111;
                        color: #fff;
                        cursor: pointer;
                    }
                    @media (max-width: 768px) {
                        .modal-columns { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="modal-content" role="dialog" aria-modal="true" onclick={swallow}>
                <button class="modal-close" onclick={close.clone()} aria-label="Close">{ "✕" }</button>
                <div class="modal-gallery">
                    { for study.images.iter().enumerate().map(|(index, image)| html! {
                        <div class={classes!("modal-image", (index == props.image_index).then(|| "active"))}>
                            <img src={image.clone()} alt={format!("{} - image {}", study.title, index + 1)} />
                        </div>
                    }) }
                    if has_gallery {
                        <div class="modal-dots">
                            { for (0..study.images.len()).map(|index| {
                                let on_show = props.on_show.clone();
                                html! {
                                    <button
                                        class={classes!((index == props.image_index).then(|| "active"))}
                                        onclick={Callback::from(move |_: MouseEvent| on_show.emit(index))}
                                        aria-label={format!("Go to image {}", index + 1)}
                                    />
                                }
                            }) }
                        </div>
                        <button class="modal-arrow prev" onclick={previous} aria-label="Previous image">{ "‹" }</button>
                        <button class="modal-arrow next" onclick={next} aria-label="Next image">{ "›" }</button>
                    }
                </div>
                <div class="modal-body">
                    <h2>{ &study.title }</h2>
                    <p class="modal-client">{ &study.client }</p>
                    <h3>{ "Overview" }</h3>
                    <p>{ &study.description }</p>
                    <div class="modal-columns">
                        <div>
                            <h3>{ "Challenge" }</h3>
                            <p>{ &study.challenge }</p>
                        </div>
                        <div>
                            <h3>{ "Solution" }</h3>
                            <p>{ &study.solution }</p>
                        </div>
                    </div>
                    <h3>{ "Results" }</h3>
                    <p>{ &study.results }</p>
                </div>
                <div class="modal-footer">
                    <button onclick={close}>{ "Close Case Study" }</button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_overlay_fades_instead_of_vanishing() {
        assert_eq!(overlay_classes(true).to_string(), "modal-overlay open");
        assert_eq!(overlay_classes(false).to_string(), "modal-overlay closing");
    }
}
