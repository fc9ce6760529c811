use log::Level;
use serde::Serialize;

#[cfg(debug_assertions)]
pub fn get_submit_endpoint() -> &'static str {
    "http://localhost:3001/api/consultation"  // Local mock while developing
}

#[cfg(not(debug_assertions))]
pub fn get_submit_endpoint() -> &'static str {
    "/api/consultation"
}

pub const LOG_LEVEL: Level = Level::Info;

// Counter animation
pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_STEPS: u32 = 60;

// Chart and timeline animations
pub const BAR_ANIMATION_DELAY_MS: u32 = 500;
pub const STEP_STAGGER_MS: u32 = 300;

// Contact form
pub const SUBMIT_DELAY_MS: u32 = 2000;
pub const SUCCESS_OVERLAY_MS: u32 = 5000;

// Scroll handling
pub const SCROLL_THROTTLE_MS: u32 = 16; // ~60fps
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

// Navigation
pub const NAV_HIDE_AFTER: f64 = 100.0;
pub const NAV_SCROLLED_AFTER: f64 = 50.0;
pub const NAV_ANCHOR_OFFSET: f64 = 70.0; // navbar height

// Scroll effects
pub const HERO_PARALLAX_SPEED: f64 = 0.3;
pub const INDICATOR_FADE_DISTANCE: f64 = 300.0;

// Case slider
pub const TOTAL_SLIDES: usize = 20;
pub const WIDE_BREAKPOINT: f64 = 1200.0;
pub const MEDIUM_BREAKPOINT: f64 = 768.0;
pub const NARROW_MAX_WIDTH: f64 = 767.0;
pub const NARROW_MAX_DOTS: usize = 5;

// Gesture thresholds in px
pub const TOUCH_SWIPE_THRESHOLD: f64 = 50.0;
pub const MOUSE_DRAG_THRESHOLD: f64 = 100.0;
pub const PAGE_SWIPE_THRESHOLD: f64 = 50.0;

/// Observer settings shared by the viewport triggers.
#[derive(Clone, Debug, PartialEq)]
pub struct ObserverConfig {
    pub thresholds: &'static [f64],
    pub root_margin: &'static str,
}

pub const REVEAL_OBSERVER: ObserverConfig = ObserverConfig {
    thresholds: &[0.1, 0.3, 0.5, 0.7, 1.0],
    root_margin: "0px 0px -100px 0px",
};

pub const COUNTER_OBSERVER: ObserverConfig = ObserverConfig {
    thresholds: &[0.5],
    root_margin: "0px",
};

pub const PROCESS_OBSERVER: ObserverConfig = ObserverConfig {
    thresholds: &[0.3],
    root_margin: "0px",
};

pub const AOS_FALLBACK_OBSERVER: ObserverConfig = ObserverConfig {
    thresholds: &[0.1],
    root_margin: "0px 0px -50px 0px",
};

/// Settings handed to `AOS.init` when the library is on the page.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AosConfig {
    pub duration: u32,
    pub easing: &'static str,
    pub once: bool,
    pub offset: u32,
    pub delay: u32,
    pub anchor_placement: &'static str,
}

impl Default for AosConfig {
    fn default() -> Self {
        Self {
            duration: 800,
            easing: "ease-out-cubic",
            once: true,
            offset: 50,
            delay: 0,
            anchor_placement: "top-bottom",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aos_config_serializes_with_library_keys() {
        let value = serde_json::to_value(AosConfig::default()).unwrap();
        assert_eq!(value["duration"], 800);
        assert_eq!(value["easing"], "ease-out-cubic");
        assert_eq!(value["once"], true);
        assert_eq!(value["offset"], 50);
        assert_eq!(value["delay"], 0);
        assert_eq!(value["anchorPlacement"], "top-bottom");
    }
}
