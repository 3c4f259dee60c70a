use yew::prelude::*;

use crate::components::heart::{Heart, PulsingHeart};
use crate::config::Timings;
use crate::controllers::reveal::StagedReveal;
use crate::hooks::use_controller;

pub const FRAGMENTS: [&str; 4] = ["Me", "+", "You", "="];

/// Fragments shown at `phase` when they appear one at a time and stay.
pub fn shown_fragments(phase: u32) -> &'static [&'static str] {
    let count = (phase as usize + 1).min(FRAGMENTS.len());
    &FRAGMENTS[..count]
}

#[derive(Properties, PartialEq)]
pub struct DynamicTextProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub timings: Timings,
}

#[function_component(DynamicText)]
pub fn dynamic_text(props: &DynamicTextProps) -> Html {
    let max_phase = FRAGMENTS.len() as u32 - 1;
    let (step_ms, fade_ms) = (props.timings.reveal_step_ms, props.timings.fade_in_ms);
    let reveal = use_controller(
        move || StagedReveal::new(max_phase, step_ms).with_fade_in(fade_ms),
        Callback::default(),
    );

    html! {
        <div
            class={classes!("dynamic-text", reveal.is_visible().then(|| "visible"), props.class.clone())}
            aria-label="Me plus You equals Heart"
        >
            <style>
                {r#"
                    .dynamic-text {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.4rem;
                        font-size: 2rem;
                        font-weight: 500;
                        opacity: 0;
                        transition: opacity 0.7s ease;
                    }
                    .dynamic-text.visible {
                        opacity: 1;
                    }
                    .dynamic-text span {
                        animation: fragment-in 0.5s ease;
                    }
                    @keyframes fragment-in {
                        from { opacity: 0; transform: scale(0.95); }
                        to { opacity: 1; transform: scale(1); }
                    }
                "#}
            </style>
            { for shown_fragments(reveal.phase()).iter().map(|part| html! { <span>{ *part }</span> }) }
            if reveal.is_complete() {
                <Heart size={40} timings={props.timings.clone()} />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DynamicHeartTextProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub timings: Timings,
}

#[function_component(DynamicHeartText)]
pub fn dynamic_heart_text(props: &DynamicHeartTextProps) -> Html {
    let max_phase = FRAGMENTS.len() as u32;
    let step_ms = props.timings.reveal_step_ms;
    let reveal = use_controller(move || StagedReveal::new(max_phase, step_ms), Callback::default());
    let phase = reveal.phase();

    html! {
        <div class={classes!("heart-text", props.class.clone())}>
            <style>
                {r#"
                    .heart-text {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        margin: 1.5rem 0;
                        font-size: 1.75rem;
                        font-weight: 500;
                    }
                    .heart-text .fragment {
                        opacity: 0;
                        transform: translateY(1rem);
                        transition: all 0.5s ease;
                    }
                    .heart-text .fragment.shown {
                        opacity: 1;
                        transform: translateY(0);
                    }
                "#}
            </style>
            { for FRAGMENTS.iter().enumerate().map(|(i, part)| html! {
                <span
                    class={classes!("fragment", (phase > i as u32).then(|| "shown"))}
                    style={format!("transition-delay: {}ms", i * 200)}
                >
                    { *part }
                </span>
            }) }
            if reveal.is_complete() {
                <span class="fragment shown" style="transition-delay: 800ms">
                    <PulsingHeart size={36} timings={props.timings.clone()} />
                </span>
            }
        </div>
    }
}
