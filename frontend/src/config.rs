use crate::controllers::contact_form::Delivery;

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

pub fn contact_endpoint() -> String {
    format!("{}/api/contact", get_backend_url())
}

#[cfg(feature = "remote-contact")]
pub fn contact_delivery(_timings: &Timings) -> Delivery {
    Delivery::Remote
}

#[cfg(not(feature = "remote-contact"))]
pub fn contact_delivery(timings: &Timings) -> Delivery {
    Delivery::Simulated { delay_ms: timings.submit_delay_ms }
}

/// Every duration the page animates with, in milliseconds.
///
/// Components take this as an optional prop so a composing page can retune
/// the motion without touching the controllers.
#[derive(Clone, Debug, PartialEq)]
pub struct Timings {
    pub carousel_interval_ms: u32,
    pub submit_delay_ms: u32,
    pub pulse_debounce_ms: u32,
    pub heart_debounce_ms: u32,
    pub shimmer_interval_ms: u32,
    pub reveal_step_ms: u32,
    pub fade_in_ms: u32,
    pub egg_delay_ms: u32,
    pub egg_hold_ms: u32,
    pub egg_fade_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            carousel_interval_ms: 6000,
            submit_delay_ms: 1500,
            pulse_debounce_ms: 800,   // matches the heartbeat keyframes
            heart_debounce_ms: 1000,
            shimmer_interval_ms: 3000,
            reveal_step_ms: 700,
            fade_in_ms: 1000,
            egg_delay_ms: 500,
            egg_hold_ms: 3000,
            egg_fade_ms: 500,
        }
    }
}
