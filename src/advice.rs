mod advice_render;
mod advice_state;
mod client;
mod controller;
mod worker;

pub use advice_render::{IDLE_PROMPT, LOADING_TEXT, render_card};
pub use advice_state::{
    AdviceRequest, AdviceResponse, COOLDOWN, Cooldown, FALLBACK_ERROR, FetchState,
};
pub use client::{AdviceClient, AdviceSource, DEFAULT_ENDPOINT, FetchError, parse_advice};
pub use controller::AdviceController;
pub use worker::spawn_worker;
