use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::Rc;

use log::{error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::TouchEvent;
use yew::prelude::*;

mod config;
mod utils {
    pub mod dom;
    pub mod gesture;
    pub mod rate_limit;
    pub mod viewport;
}
mod animations {
    pub mod counter;
    pub mod progress;
    pub mod reveal;
    pub mod scroll_effects;
}
mod components {
    pub mod case_slider;
    pub mod floating_cta;
    pub mod nav;
}
mod contact {
    pub mod api;
    pub mod form;
    pub mod overlay;
    pub mod validation;
}
mod pages {
    pub mod landing;
}

use animations::reveal::{AnimationBackend, RevealAnimations};
use components::nav::Nav;
use config::{LOG_LEVEL, RESIZE_DEBOUNCE_MS};
use pages::landing::Landing;
use utils::gesture::{GestureState, Modality, SwipeDirection};
use utils::rate_limit::Debounce;

fn touch_y(e: &TouchEvent) -> Option<f64> {
    e.changed_touches().get(0).map(|touch| touch.screen_y() as f64)
}

fn swipe_message(direction: SwipeDirection) -> &'static str {
    match direction {
        SwipeDirection::Forward => "Swiped up",
        SwipeDirection::Backward => "Swiped down",
    }
}

/// Logs every failed listener registration and returns how many failed.
fn report_registrations<E: Debug>(results: Vec<(&'static str, Result<(), E>)>) -> usize {
    results
        .into_iter()
        .filter_map(|(event, result)| result.err().map(|err| (event, err)))
        .inspect(|(event, err)| error!("Failed to listen for {}: {:?}", event, err))
        .count()
}

/// Logs vertical page swipes and debounced window resizes until dropped.
struct PageListeners {
    document: web_sys::Document,
    window: web_sys::Window,
    touch_start: Closure<dyn FnMut(TouchEvent)>,
    touch_end: Closure<dyn FnMut(TouchEvent)>,
    resize: Closure<dyn FnMut()>,
}

impl PageListeners {
    fn attach() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let gesture = Rc::new(RefCell::new(GestureState::default()));

        let touch_start = {
            let gesture = gesture.clone();
            Closure::wrap(Box::new(move |e: TouchEvent| {
                if let Some(y) = touch_y(&e) {
                    gesture.borrow_mut().begin(y);
                }
            }) as Box<dyn FnMut(TouchEvent)>)
        };
        let touch_end = Closure::wrap(Box::new(move |e: TouchEvent| {
            let mut gesture = gesture.borrow_mut();
            if let Some(y) = touch_y(&e) {
                gesture.track(y);
            }
            if let Some(direction) = gesture.finish(Modality::PageSwipe) {
                info!("{}", swipe_message(direction));
            }
        }) as Box<dyn FnMut(TouchEvent)>);

        let debounced = Debounce::new(RESIZE_DEBOUNCE_MS, false, || info!("Window resized"));
        let resize = Closure::wrap(Box::new(move || debounced.call()) as Box<dyn FnMut()>);

        // The closures live in Self whether or not registration succeeded.
        report_registrations(vec![
            (
                "touchstart",
                document.add_event_listener_with_callback(
                    "touchstart",
                    touch_start.as_ref().unchecked_ref(),
                ),
            ),
            (
                "touchend",
                document
                    .add_event_listener_with_callback("touchend", touch_end.as_ref().unchecked_ref()),
            ),
            (
                "resize",
                window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref()),
            ),
        ]);

        Some(Self {
            document,
            window,
            touch_start,
            touch_end,
            resize,
        })
    }
}

impl Drop for PageListeners {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback(
            "touchstart",
            self.touch_start.as_ref().unchecked_ref(),
        );
        let _ = self.document.remove_event_listener_with_callback(
            "touchend",
            self.touch_end.as_ref().unchecked_ref(),
        );
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.resize.as_ref().unchecked_ref());
    }
}

#[function_component]
fn App() -> Html {
    // Runs after the first render, once every section is in the DOM.
    use_effect_with_deps(
        |_| {
            let backend = AnimationBackend::detect();
            info!("Animation backend: {:?}", backend);
            let reveal = RevealAnimations::start(backend);
            let listeners = PageListeners::attach();
            move || {
                drop(reveal);
                drop(listeners);
            }
        },
        (),
    );

    html! {
        <>
            <Nav />
            <Landing />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if console_log::init_with_level(LOG_LEVEL).is_err() {
        gloo_console::error!("error initializing log");
    }

    info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swipe_messages_name_the_direction() {
        assert_eq!(swipe_message(SwipeDirection::Forward), "Swiped up");
        assert_eq!(swipe_message(SwipeDirection::Backward), "Swiped down");
    }

    #[test]
    fn page_event_logs_pass_the_configured_level() {
        // Swipe, resize and submission payload messages are logged with info!.
        assert!(log::Level::Info <= LOG_LEVEL);
    }

    #[test]
    fn every_failed_registration_is_counted() {
        let results = vec![
            ("touchstart", Ok(())),
            ("touchend", Err("blocked")),
            ("resize", Err("blocked")),
        ];
        assert_eq!(report_registrations(results), 2);
    }

    #[test]
    fn a_failure_does_not_hide_later_registrations() {
        let results: Vec<(&'static str, Result<(), &str>)> =
            vec![("touchstart", Err("blocked")), ("touchend", Ok(())), ("resize", Ok(()))];
        assert_eq!(report_registrations(results), 1);
    }
}
