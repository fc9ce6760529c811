use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{HERO_PARALLAX_SPEED, INDICATOR_FADE_DISTANCE, SCROLL_THROTTLE_MS};
use crate::utils::dom::{
    document_height, query_all, query_html, scroll_top, set_style, viewport_height,
};
use crate::utils::rate_limit::Throttle;

/// Everything the scroll effects need to paint for one scroll position.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollFrame {
    pub content_offset: f64,
    pub visual_offset: f64,
    pub indicator_opacity: f64,
    pub progress_percent: f64,
}

impl ScrollFrame {
    pub fn compute(scroll_top: f64, document_height: f64, viewport_height: f64) -> Self {
        let content_offset = scroll_top * HERO_PARALLAX_SPEED;
        let scrollable = document_height - viewport_height;
        let progress_percent = if scrollable > 0.0 {
            (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };

        Self {
            content_offset,
            visual_offset: content_offset * 0.5,
            indicator_opacity: (1.0 - scroll_top / INDICATOR_FADE_DISTANCE).max(0.0),
            progress_percent,
        }
    }
}

fn apply_scroll_effects() {
    let frame = ScrollFrame::compute(scroll_top(), document_height(), viewport_height());

    if let (Some(content), Some(visual)) = (
        query_html("#hero .hero-content"),
        query_html("#hero .hero-visual"),
    ) {
        set_style(&content, "transform", &format!("translateY({}px)", frame.content_offset));
        set_style(&visual, "transform", &format!("translateY({}px)", frame.visual_offset));
    }

    if let Some(indicator) = query_html(".scroll-indicator") {
        set_style(&indicator, "opacity", &frame.indicator_opacity.to_string());
    }

    let width = format!("{}%", frame.progress_percent);
    for bar in query_all(".scroll-progress-bar") {
        if let Some(bar) = bar.dyn_ref::<HtmlElement>() {
            set_style(bar, "width", &width);
        }
    }
}

/// Parallax, indicator fade and reading progress, applied once on mount
/// and then on scroll at most every `SCROLL_THROTTLE_MS`.
#[hook]
pub fn use_scroll_effects() {
    let throttled = use_memo(|_| Throttle::new(SCROLL_THROTTLE_MS, apply_scroll_effects), ());

    use_effect_with_deps(
        |_| {
            apply_scroll_effects();
            || ()
        },
        (),
    );

    use_event_with_window("scroll", move |_: Event| throttled.call());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallax_layers_move_at_different_speeds() {
        let frame = ScrollFrame::compute(200.0, 5000.0, 800.0);
        assert!((frame.content_offset - 60.0).abs() < 1e-9);
        assert!((frame.visual_offset - 30.0).abs() < 1e-9);
    }

    #[test]
    fn indicator_fades_out_over_first_300px() {
        assert_eq!(ScrollFrame::compute(0.0, 5000.0, 800.0).indicator_opacity, 1.0);
        assert!((ScrollFrame::compute(150.0, 5000.0, 800.0).indicator_opacity - 0.5).abs() < 1e-9);
        assert_eq!(ScrollFrame::compute(300.0, 5000.0, 800.0).indicator_opacity, 0.0);
        assert_eq!(ScrollFrame::compute(900.0, 5000.0, 800.0).indicator_opacity, 0.0);
    }

    #[test]
    fn progress_tracks_scrollable_height() {
        assert_eq!(ScrollFrame::compute(0.0, 2800.0, 800.0).progress_percent, 0.0);
        assert_eq!(ScrollFrame::compute(1000.0, 2800.0, 800.0).progress_percent, 50.0);
        assert_eq!(ScrollFrame::compute(2000.0, 2800.0, 800.0).progress_percent, 100.0);
    }

    #[test]
    fn page_shorter_than_viewport_has_no_progress() {
        assert_eq!(ScrollFrame::compute(0.0, 600.0, 800.0).progress_percent, 0.0);
        assert_eq!(ScrollFrame::compute(0.0, 800.0, 800.0).progress_percent, 0.0);
    }
}
