use stylist::{css, StyleSource};
use yew::prelude::*;

use crate::config::Timings;
use crate::controllers::heartbeat::{
    EggStage, Heartbeat, HeartbeatConfig, HeartbeatEvent, HeartbeatOutput, IDLE_HUES,
};
use crate::hooks::{use_controller, ControllerDispatcher};

/// Colour per beat, cycled.
const PALETTE: [&str; 5] = [
    "hsla(340, 90%, 60%, 0.9)",
    "hsla(40, 90%, 60%, 0.9)",
    "hsla(290, 90%, 60%, 0.9)",
    "hsla(190, 90%, 70%, 0.9)",
    "hsla(120, 90%, 50%, 0.9)",
];
const RESTING: &str = "hsla(190, 70%, 60%, 0.7)";

const HEART_PATH: &str = "M12 21.35l-1.45-1.32C5.4 15.36 2 12.28 2 8.5 2 5.42 4.42 3 7.5 3c1.74 0 3.41.81 4.5 2.09C13.09 3.81 14.76 3 16.5 3 19.58 3 22 5.42 22 8.5c0 3.78-3.4 6.86-8.55 11.54L12 21.35z";
const PULSING_PATH: &str = "M10 30 A20 20 0 0 1 50 30 A20 20 0 0 1 90 30 Q90 60 50 90 Q10 60 10 30 Z";

pub fn heart_colour(heart: &Heartbeat) -> String {
    match heart.beats() {
        0 => heart
            .idle_hue()
            .map(|hue| format!("hsla({}, 70%, 60%, 0.8)", hue))
            .unwrap_or_else(|| RESTING.to_string()),
        n => PALETTE[(n as usize - 1) % PALETTE.len()].to_string(),
    }
}

fn random_idle_hue() -> u16 {
    let span = f64::from(IDLE_HUES.end - IDLE_HUES.start);
    IDLE_HUES.start + (web_sys::js_sys::Math::random() * span).floor() as u16
}

fn is_activation_key(e: &KeyboardEvent) -> bool {
    matches!(e.key().as_str(), "Enter" | " ")
}

fn heart_style() -> StyleSource {
    css!(
        r#"
    display: inline-flex;
    flex-direction: column;
    align-items: center;
    cursor: pointer;
    outline: none;

    svg {
        width: 100%;
        height: 100%;
        filter: drop-shadow(0 0 2px rgba(0, 0, 0, 0.2));
    }
    svg path {
        transition: fill 0.5s ease, stroke 0.3s ease;
    }
    &.idle svg {
        animation: heart-pulse 2s ease-in-out infinite;
    }
    &.beating svg {
        animation: heart-beat 0.8s ease-in-out;
    }
    .heart-egg {
        font-size: 0.75rem;
        margin-top: 0.25rem;
        white-space: nowrap;
        transition: opacity 0.5s ease;
    }
    .heart-egg.fading {
        opacity: 0;
    }

    @keyframes heart-beat {
        0% { transform: scale(1); }
        25% { transform: scale(1.25); }
        50% { transform: scale(1); }
        75% { transform: scale(1.15); }
        100% { transform: scale(1); }
    }
    @keyframes heart-pulse {
        0%, 100% { opacity: 1; }
        50% { opacity: 0.6; }
    }
"#
    )
}

#[derive(Properties, PartialEq)]
pub struct HeartProps {
    #[prop_or(32)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub timings: Timings,
}

/// Clickable heart that shimmers until first touched, then cycles colours.
#[function_component(Heart)]
pub fn heart(props: &HeartProps) -> Html {
    let on_output = Callback::from(
        |(output, dispatcher): (HeartbeatOutput, ControllerDispatcher<Heartbeat>)| match output {
            HeartbeatOutput::Shimmer => {
                dispatcher.dispatch(HeartbeatEvent::SetHue(random_idle_hue()))
            }
            HeartbeatOutput::Beat { count } => log::debug!("heart beat #{}", count),
            HeartbeatOutput::EasterEgg => log::info!("heart easter egg found"),
        },
    );
    let config = HeartbeatConfig::playful(&props.timings);
    let heart = use_controller(move || Heartbeat::new(config), on_output);

    let onclick = heart.callback(|_: MouseEvent| HeartbeatEvent::Trigger);
    let onkeydown = {
        let heart = heart.dispatcher();
        Callback::from(move |e: KeyboardEvent| {
            if is_activation_key(&e) {
                e.prevent_default();
                heart.dispatch(HeartbeatEvent::Trigger);
            }
        })
    };

    let state = if heart.is_active() { "beating" } else { "idle" };
    let egg = match heart.egg() {
        EggStage::Hidden | EggStage::Pending => html! {},
        stage => html! {
            <div class={classes!("heart-egg", (stage == EggStage::Fading).then(|| "fading"))}>
                { "💖 You found me! 💖" }
            </div>
        },
    };

    html! {
        <div
            class={classes!(heart_style(), state, props.class.clone())}
            role="img"
            aria-label="Heart"
            tabindex="0"
            {onclick}
            {onkeydown}
        >
            <div style={format!("width: {0}px; height: {0}px;", props.size)}>
                <svg viewBox="0 0 24 24">
                    <path d={HEART_PATH} fill={heart_colour(&heart)} />
                </svg>
            </div>
            { egg }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PulsingHeartProps {
    #[prop_or(100)]
    pub size: u32,
    #[prop_or(AttrValue::Static("#e74c3c"))]
    pub initial_colour: AttrValue,
    #[prop_or(AttrValue::Static("#c0392b"))]
    pub active_colour: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_heartbeat: Callback<()>,
    #[prop_or_default]
    pub timings: Timings,
}

/// Heart that beats on click, touch, Enter or Space, at most once per window.
#[function_component(PulsingHeart)]
pub fn pulsing_heart(props: &PulsingHeartProps) -> Html {
    let on_output = {
        let on_heartbeat = props.on_heartbeat.clone();
        Callback::from(move |(output, _): (HeartbeatOutput, ControllerDispatcher<Heartbeat>)| {
            if let HeartbeatOutput::Beat { .. } = output {
                on_heartbeat.emit(());
            }
        })
    };
    let config = HeartbeatConfig::pulsing(&props.timings);
    let heart = use_controller(move || Heartbeat::new(config), on_output);

    let onclick = heart.callback(|_: MouseEvent| HeartbeatEvent::Trigger);
    let ontouchstart = heart.callback(|_: TouchEvent| HeartbeatEvent::Trigger);
    let onkeydown = {
        let heart = heart.dispatcher();
        Callback::from(move |e: KeyboardEvent| {
            if is_activation_key(&e) {
                e.prevent_default();
                heart.dispatch(HeartbeatEvent::Trigger);
            }
        })
    };

    let beating = heart.is_active();
    let (fill, stroke) = if beating {
        (props.active_colour.clone(), props.initial_colour.clone())
    } else {
        (props.initial_colour.clone(), props.active_colour.clone())
    };

    html! {
        <span class={classes!(heart_style(), if beating { "beating" } else { "idle" }, props.class.clone())}>
            <svg
                viewBox="0 0 100 100"
                width={props.size.to_string()}
                height={props.size.to_string()}
                role="button"
                aria-label="Interactive heart"
                aria-pressed={beating.to_string()}
                tabindex="0"
                {onclick}
                {ontouchstart}
                {onkeydown}
            >
                <path d={PULSING_PATH} {fill} {stroke} stroke-width="2" />
            </svg>
        </span>
    }
}
