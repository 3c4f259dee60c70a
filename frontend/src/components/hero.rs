use std::rc::Rc;

use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlVideoElement;
use yew::prelude::*;

use crate::components::dynamic_text::DynamicHeartText;
use crate::config::Timings;
use crate::controllers::carousel::{Carousel, CarouselEvent, CarouselOutput};
use crate::hooks::{use_controller, ControllerDispatcher};
use crate::models::MediaItem;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub headline: String,
    pub subheadline: String,
    pub cta_text: String,
    #[prop_or_default]
    pub on_cta_click: Callback<()>,
    pub items: Vec<MediaItem>,
    #[prop_or_default]
    pub timings: Timings,
}

pub fn scroll_to_section(id: &str) {
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match target {
        Some(element) => element.scroll_into_view(),
        None => gloo_console::warn!(format!("No section with id {}", id)),
    }
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let onclick_cta = {
        let on_cta_click = props.on_cta_click.clone();
        Callback::from(move |_: MouseEvent| on_cta_click.emit(()))
    };
    let onclick_scroll = Callback::from(|_: MouseEvent| scroll_to_section("portfolio"));

    let background = match Carousel::new(props.items.clone(), props.timings.carousel_interval_ms) {
        Ok(carousel) => html! { <HeroBackground {carousel} /> },
        Err(err) => {
            log::error!("Hero carousel disabled: {}", err);
            html! {}
        }
    };

    html! {
        <section class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        width: 100%;
                        height: 800px;
                        overflow: hidden;
                        background: #000;
                    }
                    .hero-layer {
                        position: absolute;
                        inset: 0;
                        opacity: 0;
                        z-index: 0;
                        transition: opacity 1.5s ease;
                    }
                    .hero-layer.active {
                        opacity: 1;
                        z-index: 10;
                    }
                    .hero-layer img,
                    .hero-layer video {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        z-index: 20;
                        background: linear-gradient(to bottom, rgba(0, 0, 0, 0.6), rgba(0, 0, 0, 0.4), rgba(0, 0, 0, 0.7));
                    }
                    .hero-content {
                        position: relative;
                        z-index: 30;
                        height: 100%;
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 0 1rem;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        align-items: center;
                        text-align: center;
                        color: #fff;
                    }
                    .hero-content h1 {
                        font-size: 3.5rem;
                        font-weight: 700;
                        line-height: 1.2;
                        margin-bottom: 1.5rem;
                    }
                    .hero-content p {
                        font-size: 1.25rem;
                        color: #e5e7eb;
                        max-width: 48rem;
                        margin-bottom: 2rem;
                    }
                    .hero-cta {
                        padding: 1.2rem 2rem;
                        border: none;
                        border-radius: 999px;
                        background: #fff;
                        color: #000;
                        font-size: 1.1rem;
                        font-weight: 500;
                        cursor: pointer;
                    }
                    .hero-cta:hover {
                        background: #e5e7eb;
                    }
                    .hero-scroll {
                        position: absolute;
                        bottom: 2.5rem;
                        left: 50%;
                        transform: translateX(-50%);
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 2rem;
                        cursor: pointer;
                        animation: hero-bob 2s ease-in-out 1s infinite;
                    }
                    @keyframes hero-bob {
                        0%, 100% { transform: translate(-50%, 0); }
                        50% { transform: translate(-50%, 10px); }
                    }
                    .hero-indicators {
                        position: absolute;
                        bottom: 2.5rem;
                        right: 2.5rem;
                        z-index: 30;
                        display: flex;
                        gap: 0.5rem;
                    }
                    .hero-indicators button {
                        width: 8px;
                        height: 8px;
                        padding: 0;
                        border: none;
                        border-radius: 999px;
                        background: rgba(255, 255, 255, 0.5);
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .hero-indicators button.active {
                        width: 24px;
                        background: #fff;
                    }
                    @media (max-width: 768px) {
                        .hero-content h1 { font-size: 2.25rem; }
                    }
                "#}
            </style>
            { background }
            <div class="hero-content">
                <h1>{ &props.headline }</h1>
                <p>{ &props.subheadline }</p>
                <button class="hero-cta" onclick={onclick_cta}>
                    { format!("{} ▶", props.cta_text) }
                </button>
                <DynamicHeartText timings={props.timings.clone()} />
                <button class="hero-scroll" onclick={onclick_scroll} aria-label="Scroll to portfolio">
                    { "⌄" }
                </button>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct HeroBackgroundProps {
    carousel: Carousel,
}

fn play_video(node: &NodeRef, index: usize, carousel: ControllerDispatcher<Carousel>) {
    let Some(video) = node.cast::<HtmlVideoElement>() else {
        carousel.dispatch(CarouselEvent::PlaybackFailed {
            index,
            reason: "video element is not mounted".to_string(),
        });
        return;
    };
    // Autoplay is only allowed for muted media.
    video.set_muted(true);
    match video.play() {
        Ok(promise) => spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => carousel.dispatch(CarouselEvent::PlaybackStarted { index }),
                Err(err) => {
                    gloo_console::error!("Video playback failed:", err.clone());
                    let reason = err.as_string().unwrap_or_else(|| format!("{:?}", err));
                    carousel.dispatch(CarouselEvent::PlaybackFailed { index, reason });
                }
            }
        }),
        Err(err) => carousel.dispatch(CarouselEvent::PlaybackFailed {
            index,
            reason: format!("{:?}", err),
        }),
    }
}

fn stop_video(node: &NodeRef) {
    if let Some(video) = node.cast::<HtmlVideoElement>() {
        if let Err(err) = video.pause() {
            gloo_console::error!("Failed to pause video:", err);
        }
    }
}

/// Crossfading layers plus the slide indicators.
#[function_component(HeroBackground)]
fn hero_background(props: &HeroBackgroundProps) -> Html {
    let videos: Rc<Vec<NodeRef>> = use_memo(
        |count| (0..*count).map(|_| NodeRef::default()).collect(),
        props.carousel.items().len(),
    );

    let on_output = {
        let videos = videos.clone();
        Callback::from(
            move |(output, carousel): (CarouselOutput, ControllerDispatcher<Carousel>)| {
                match output {
                    CarouselOutput::PlayVideo { index } => match videos.get(index) {
                        Some(node) => play_video(node, index, carousel),
                        None => log::warn!("No video slot for slide {}", index),
                    },
                    CarouselOutput::StopVideo { index } => {
                        if let Some(node) = videos.get(index) {
                            stop_video(node);
                        }
                    }
                }
            },
        )
    };
    let initial = props.carousel.clone();
    let carousel = use_controller(move || initial, on_output);
    let current = carousel.current_index();

    html! {
        <>
            <div class="hero-layers">
                { for carousel.items().iter().enumerate().map(|(index, item)| {
                    let media = if item.is_video() {
                        let onended = carousel.callback(move |_: Event| CarouselEvent::PlaybackEnded { index });
                        html! {
                            <video
                                ref={videos[index].clone()}
                                src={item.source.clone()}
                                muted=true
                                playsinline=true
                                {onended}
                            />
                        }
                    } else {
                        html! {
                            <img
                                src={item.source.clone()}
                                alt={item.alt_text.clone().unwrap_or_else(|| "Background image".to_string())}
                            />
                        }
                    };
                    html! {
                        <div key={item.id.clone()} class={classes!("hero-layer", (index == current).then(|| "active"))}>
                            { media }
                        </div>
                    }
                }) }
                <div class="hero-overlay"></div>
            </div>
            <div class="hero-indicators">
                { for (0..carousel.items().len()).map(|index| {
                    let onclick = carousel.callback(move |_: MouseEvent| CarouselEvent::Select(index));
                    html! {
                        <button
                            class={classes!((index == current).then(|| "active"))}
                            aria-label={format!("Go to slide {}", index + 1)}
                            {onclick}
                        />
                    }
                }) }
            </div>
        </>
    }
}
