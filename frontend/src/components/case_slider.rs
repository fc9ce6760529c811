use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::{Event, MouseEvent, TouchEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{MEDIUM_BREAKPOINT, NARROW_MAX_DOTS, NARROW_MAX_WIDTH, TOTAL_SLIDES, WIDE_BREAKPOINT};
use crate::utils::dom::viewport_width;
use crate::utils::gesture::{GestureState, Modality, SwipeDirection};

/// Slides shown side by side at a given viewport width.
pub fn slides_per_view(width: f64) -> usize {
    if width >= WIDE_BREAKPOINT {
        4
    } else if width >= MEDIUM_BREAKPOINT {
        2
    } else {
        1
    }
}

/// Paging state of the case slider.
#[derive(Clone, Debug, PartialEq)]
pub struct Carousel {
    index: usize,
    per_view: usize,
    total: usize,
    viewport_width: f64,
}

pub enum CarouselAction {
    Slide(SwipeDirection),
    GoTo(usize),
    Resize(f64),
}

impl Carousel {
    pub fn new(total: usize, viewport_width: f64) -> Self {
        Self {
            index: 0,
            per_view: slides_per_view(viewport_width),
            total,
            viewport_width,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn per_view(&self) -> usize {
        self.per_view
    }

    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.per_view).max(1)
    }

    pub fn max_page(&self) -> usize {
        self.page_count() - 1
    }

    /// Moves one page forward or back, wrapping at both ends.
    pub fn slide(&mut self, direction: SwipeDirection) {
        let max_page = self.max_page();
        self.index = match direction {
            SwipeDirection::Forward if self.index >= max_page => 0,
            SwipeDirection::Forward => self.index + 1,
            SwipeDirection::Backward if self.index == 0 => max_page,
            SwipeDirection::Backward => self.index - 1,
        };
    }

    pub fn go_to(&mut self, page: usize) {
        self.index = page.min(self.max_page());
    }

    /// Recomputes the page size and pulls the index back into range.
    pub fn resize(&mut self, viewport_width: f64) {
        self.viewport_width = viewport_width;
        self.per_view = slides_per_view(viewport_width);
        self.index = self.index.min(self.max_page());
    }

    /// Dots to render; narrow screens show at most `NARROW_MAX_DOTS`.
    pub fn indicator_count(&self) -> usize {
        let pages = self.page_count();
        if self.viewport_width <= NARROW_MAX_WIDTH {
            pages.min(NARROW_MAX_DOTS)
        } else {
            pages
        }
    }

    pub fn translate_percent(&self) -> f64 {
        -(self.index as f64) * (100.0 / self.per_view as f64)
    }

    pub fn prev_disabled(&self) -> bool {
        self.index == 0
    }

    pub fn next_disabled(&self) -> bool {
        self.index == self.max_page()
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CarouselAction::Slide(direction) => next.slide(direction),
            CarouselAction::GoTo(page) => next.go_to(page),
            CarouselAction::Resize(width) => next.resize(width),
        }
        next.into()
    }
}

#[derive(Clone, PartialEq)]
pub struct CaseStudy {
    pub industry: &'static str,
    pub headline: &'static str,
    pub result: &'static str,
}

const INDUSTRIES: &[(&str, &str)] = &[
    ("제조업", "운전자금 확보"),
    ("도소매업", "정책자금 승인"),
    ("IT 서비스", "R&D 자금 유치"),
    ("요식업", "시설자금 지원"),
    ("물류업", "보증 한도 확대"),
];

const RESULTS: &[&str] = &["3억 원", "5억 원", "1.5억 원", "8억 원"];

/// Success stories shown in the slider.
pub fn case_studies() -> Vec<CaseStudy> {
    (0..TOTAL_SLIDES)
        .map(|i| {
            let (industry, headline) = INDUSTRIES[i % INDUSTRIES.len()];
            CaseStudy {
                industry,
                headline,
                result: RESULTS[i % RESULTS.len()],
            }
        })
        .collect()
}

fn touch_x(e: &TouchEvent) -> Option<f64> {
    e.touches().get(0).map(|touch| touch.client_x() as f64)
}

/// Autoplay period, ignoring a zero period that would spin the timer.
pub fn autoplay_period(autoplay_ms: Option<u32>) -> Option<u32> {
    autoplay_ms.filter(|ms| *ms > 0)
}

#[derive(Properties, PartialEq)]
pub struct CaseSliderProps {
    pub cases: Vec<CaseStudy>,
    /// Advance automatically every N ms when set.
    #[prop_or_default]
    pub autoplay_ms: Option<u32>,
}

#[function_component(CaseSlider)]
pub fn case_slider(props: &CaseSliderProps) -> Html {
    let total = props.cases.len();
    let carousel = use_reducer(|| Carousel::new(total, viewport_width()));
    let gesture = use_mut_ref(GestureState::default);

    {
        let carousel = carousel.clone();
        use_event_with_window("resize", move |_: Event| {
            carousel.dispatch(CarouselAction::Resize(viewport_width()));
        });
    }

    {
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |autoplay_ms: &Option<u32>| {
                let interval = autoplay_period(*autoplay_ms).map(|ms| {
                    Interval::new(ms, move || {
                        carousel.dispatch(CarouselAction::Slide(SwipeDirection::Forward));
                    })
                });
                move || drop(interval)
            },
            props.autoplay_ms,
        );
    }

    let finish_gesture = {
        let carousel = carousel.clone();
        let gesture = gesture.clone();
        move |modality: Modality| {
            let direction = gesture.borrow_mut().finish(modality);
            if let Some(direction) = direction {
                carousel.dispatch(CarouselAction::Slide(direction));
            }
        }
    };

    let ontouchstart = {
        let gesture = gesture.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(x) = touch_x(&e) {
                gesture.borrow_mut().begin(x);
            }
        })
    };
    let ontouchmove = {
        let gesture = gesture.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(x) = touch_x(&e) {
                gesture.borrow_mut().track(x);
            }
        })
    };
    let ontouchend = {
        let finish_gesture = finish_gesture.clone();
        Callback::from(move |_: TouchEvent| finish_gesture(Modality::Touch))
    };

    let onmousedown = {
        let gesture = gesture.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            gesture.borrow_mut().begin(e.client_x() as f64);
        })
    };
    let onmousemove = {
        let gesture = gesture.clone();
        Callback::from(move |e: MouseEvent| gesture.borrow_mut().track(e.client_x() as f64))
    };
    let onmouseup = Callback::from(move |_: MouseEvent| finish_gesture(Modality::Mouse));
    let onmouseleave = {
        let gesture = gesture.clone();
        Callback::from(move |_: MouseEvent| {
            let mut gesture = gesture.borrow_mut();
            if gesture.is_dragging() {
                gesture.cancel();
            }
        })
    };

    let slide = |direction: SwipeDirection| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Slide(direction)))
    };

    let track_style = format!("transform: translateX({}%);", carousel.translate_percent());
    let card_style = format!("flex: 0 0 {}%;", 100.0 / carousel.per_view() as f64);

    html! {
        <div class="cases-slider-wrapper">
            <div class="cases-slider-container">
                <div
                    id="casesSlider"
                    class="cases-slider"
                    style={track_style}
                    {ontouchstart}
                    {ontouchmove}
                    {ontouchend}
                    {onmousedown}
                    {onmousemove}
                    {onmouseup}
                    {onmouseleave}
                >
                    { for props.cases.iter().map(|case| html! {
                        <article class="case-card" style={card_style.clone()}>
                            <span class="case-industry">{case.industry}</span>
                            <h3>{case.headline}</h3>
                            <p class="case-result">{case.result}</p>
                        </article>
                    }) }
                </div>
            </div>
            <div class="slider-controls">
                <button
                    class="slider-btn prev-btn"
                    disabled={carousel.prev_disabled()}
                    onclick={slide(SwipeDirection::Backward)}
                >
                    {"‹"}
                </button>
                <div id="sliderDots" class="slider-dots">
                    { for (0..carousel.indicator_count()).map(|page| {
                        let onclick = {
                            let carousel = carousel.clone();
                            Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::GoTo(page)))
                        };
                        html! {
                            <div class={classes!("dot", (page == carousel.index()).then_some("active"))} {onclick}></div>
                        }
                    }) }
                </div>
                <button
                    class="slider-btn next-btn"
                    disabled={carousel.next_disabled()}
                    onclick={slide(SwipeDirection::Forward)}
                >
                    {"›"}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slides_per_view_steps_at_breakpoints() {
        assert_eq!(slides_per_view(1920.0), 4);
        assert_eq!(slides_per_view(1000.0), 2);
        assert_eq!(slides_per_view(500.0), 1);
        assert_eq!(slides_per_view(1200.0), 4);
        assert_eq!(slides_per_view(1199.0), 2);
        assert_eq!(slides_per_view(768.0), 2);
        assert_eq!(slides_per_view(767.0), 1);
    }

    #[test]
    fn slide_stays_in_range_from_every_start() {
        for width in [500.0, 1000.0, 1920.0] {
            let base = Carousel::new(TOTAL_SLIDES, width);
            for start in 0..=base.max_page() {
                for direction in [SwipeDirection::Forward, SwipeDirection::Backward] {
                    let mut carousel = base.clone();
                    carousel.go_to(start);
                    carousel.slide(direction);
                    assert!(carousel.index() <= carousel.max_page());
                }
            }
        }
    }

    #[test]
    fn slide_wraps_at_both_ends() {
        let mut carousel = Carousel::new(TOTAL_SLIDES, 1920.0);
        assert_eq!(carousel.max_page(), 4);
        carousel.slide(SwipeDirection::Backward);
        assert_eq!(carousel.index(), 4);
        carousel.slide(SwipeDirection::Forward);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn wide_viewport_scenario() {
        let mut carousel = Carousel::new(TOTAL_SLIDES, 1920.0);
        assert_eq!(carousel.per_view(), 4);
        assert_eq!(carousel.indicator_count(), 5);
        carousel.go_to(2);
        assert_eq!(carousel.index(), 2);
        assert_eq!(carousel.translate_percent(), -50.0);
    }

    #[test]
    fn narrow_viewport_caps_dots() {
        let carousel = Carousel::new(TOTAL_SLIDES, 500.0);
        assert_eq!(carousel.page_count(), 20);
        assert_eq!(carousel.indicator_count(), 5);
        let medium = Carousel::new(TOTAL_SLIDES, 1000.0);
        assert_eq!(medium.indicator_count(), 10);
    }

    #[test]
    fn button_states_follow_index() {
        let mut carousel = Carousel::new(TOTAL_SLIDES, 1920.0);
        assert!(carousel.prev_disabled());
        assert!(!carousel.next_disabled());
        carousel.go_to(4);
        assert!(!carousel.prev_disabled());
        assert!(carousel.next_disabled());
    }

    #[test]
    fn resize_clamps_index_to_new_page_range() {
        let mut carousel = Carousel::new(TOTAL_SLIDES, 500.0);
        carousel.go_to(15);
        carousel.resize(1920.0);
        assert_eq!(carousel.per_view(), 4);
        assert_eq!(carousel.index(), 4);
        assert_eq!(carousel.translate_percent(), -100.0);
    }

    #[test]
    fn resize_keeps_index_when_still_valid() {
        let mut carousel = Carousel::new(TOTAL_SLIDES, 1920.0);
        carousel.go_to(3);
        carousel.resize(500.0);
        assert_eq!(carousel.index(), 3);
        assert_eq!(carousel.translate_percent(), -300.0);
    }

    #[test]
    fn reducer_applies_actions() {
        let carousel = Rc::new(Carousel::new(TOTAL_SLIDES, 1000.0));
        let carousel = carousel.reduce(CarouselAction::GoTo(9));
        assert_eq!(carousel.index(), 9);
        let carousel = carousel.reduce(CarouselAction::Slide(SwipeDirection::Forward));
        assert_eq!(carousel.index(), 0);
        let carousel = carousel.reduce(CarouselAction::Resize(1920.0));
        assert_eq!(carousel.max_page(), 4);
    }

    #[test]
    fn autoplay_ticks_cycle_through_every_page_and_wrap() {
        for width in [500.0, 1000.0, 1920.0] {
            let mut carousel = Rc::new(Carousel::new(TOTAL_SLIDES, width));
            let pages = carousel.page_count();
            let mut seen = Vec::new();
            for _ in 0..pages * 2 {
                seen.push(carousel.index());
                carousel = carousel.reduce(CarouselAction::Slide(SwipeDirection::Forward));
            }
            let expected: Vec<usize> = (0..pages).chain(0..pages).collect();
            assert_eq!(seen, expected, "width {width}");
            assert_eq!(carousel.index(), 0);
        }
    }

    #[test]
    fn autoplay_needs_a_positive_period() {
        assert_eq!(autoplay_period(None), None);
        assert_eq!(autoplay_period(Some(0)), None);
        assert_eq!(autoplay_period(Some(5000)), Some(5000));
    }

    #[test]
    fn empty_slider_has_a_single_page() {
        let mut carousel = Carousel::new(0, 1920.0);
        assert_eq!(carousel.page_count(), 1);
        carousel.slide(SwipeDirection::Forward);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn case_studies_fill_every_slide() {
        assert_eq!(case_studies().len(), TOTAL_SLIDES);
    }
}
