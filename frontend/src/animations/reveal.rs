use gloo_timers::callback::Timeout;
use log::info;
use wasm_bindgen::prelude::*;
use web_sys::{window, Element};

use crate::config::{AosConfig, AOS_FALLBACK_OBSERVER, REVEAL_OBSERVER};
use crate::utils::dom::query_all;
use crate::utils::viewport::{TriggerMode, ViewportTrigger};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = AOS, js_name = init)]
    fn aos_init(config: JsValue);
}

pub const REVEAL_SELECTORS: &[&str] = &[
    ".fade-in-up",
    ".slide-in-left",
    ".slide-in-right",
    ".stat-number",
    ".progress-bar",
    ".reveal-text",
];

const REVEALED_CLASS: &str = "revealed";
const AOS_SELECTOR: &str = "[data-aos]";
const AOS_DELAY_ATTR: &str = "data-aos-delay";
const AOS_ANIMATE_CLASS: &str = "aos-animate";

/// Who animates the `data-aos` elements. Chosen once at startup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationBackend {
    /// The AOS library is loaded and handles them.
    Library,
    /// No library on the page; elements are revealed by our own observer.
    Builtin,
}

impl AnimationBackend {
    pub fn detect() -> Self {
        let present = window()
            .and_then(|w| web_sys::js_sys::Reflect::get(&w, &JsValue::from_str("AOS")).ok())
            .map_or(false, |aos| !aos.is_undefined() && !aos.is_null());
        if present {
            AnimationBackend::Library
        } else {
            AnimationBackend::Builtin
        }
    }
}

/// Keeps the page-wide observers alive; dropping it stops them.
pub struct RevealAnimations {
    _reveal: Option<ViewportTrigger>,
    _aos_fallback: Option<ViewportTrigger>,
}

impl RevealAnimations {
    pub fn start(backend: AnimationBackend) -> Self {
        let reveal = start_reveal();
        let aos_fallback = match backend {
            AnimationBackend::Library => match init_library() {
                Ok(()) => None,
                Err(err) => {
                    log::error!("AOS init failed, using custom animations: {}", err);
                    start_builtin_aos()
                }
            },
            AnimationBackend::Builtin => {
                info!("AOS library not loaded, using custom animations");
                start_builtin_aos()
            }
        };
        Self {
            _reveal: reveal,
            _aos_fallback: aos_fallback,
        }
    }
}

fn init_library() -> Result<(), serde_wasm_bindgen::Error> {
    let config = serde_wasm_bindgen::to_value(&AosConfig::default())?;
    aos_init(config);
    info!("AOS library initialized");
    Ok(())
}

fn add_class(element: &Element, class: &str) {
    let _ = element.class_list().add_1(class);
}

fn start_reveal() -> Option<ViewportTrigger> {
    let elements = query_all(&REVEAL_SELECTORS.join(","));
    match ViewportTrigger::new(&REVEAL_OBSERVER, TriggerMode::Repeat, |element| {
        add_class(&element, REVEALED_CLASS)
    }) {
        Some(trigger) => {
            for element in &elements {
                trigger.observe(element);
            }
            Some(trigger)
        }
        None => {
            for element in &elements {
                add_class(element, REVEALED_CLASS);
            }
            None
        }
    }
}

/// `data-aos-delay` in ms; missing or malformed values mean no delay.
pub fn parse_delay(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .unwrap_or(0)
}

fn animate_after_delay(element: Element) {
    let delay = parse_delay(element.get_attribute(AOS_DELAY_ATTR).as_deref());
    Timeout::new(delay, move || add_class(&element, AOS_ANIMATE_CLASS)).forget();
}

fn start_builtin_aos() -> Option<ViewportTrigger> {
    let elements = query_all(AOS_SELECTOR);
    match ViewportTrigger::new(&AOS_FALLBACK_OBSERVER, TriggerMode::Once, animate_after_delay) {
        Some(trigger) => {
            for element in &elements {
                trigger.observe(element);
            }
            Some(trigger)
        }
        None => {
            elements.into_iter().for_each(animate_after_delay);
            None
        }
    }
}
