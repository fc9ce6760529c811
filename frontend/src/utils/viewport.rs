use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::ObserverConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TriggerMode {
    /// Fire once per element, then stop observing it.
    Once,
    /// Fire on every entry into the viewport.
    Repeat,
}

/// Fires a callback when observed elements scroll into view.
/// Observation stops when the trigger is dropped.
pub struct ViewportTrigger {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportTrigger {
    /// Returns `None` when the browser has no IntersectionObserver.
    pub fn new(
        config: &ObserverConfig,
        mode: TriggerMode,
        mut on_enter: impl FnMut(Element) + 'static,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if mode == TriggerMode::Once {
                    observer.unobserve(&target);
                }
                on_enter(target);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let thresholds = Array::new();
        for threshold in config.thresholds {
            thresholds.push(&JsValue::from_f64(*threshold));
        }
        let init = IntersectionObserverInit::new();
        init.set_root_margin(config.root_margin);
        init.set_threshold(&thresholds);

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => Some(Self {
                observer,
                _callback: callback,
            }),
            Err(_) => {
                log::warn!("IntersectionObserver unavailable");
                None
            }
        }
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for ViewportTrigger {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Becomes `true` the first time `node` enters the viewport and stays that way.
/// Without observer support the element counts as visible right away.
#[hook]
pub fn use_viewport_trigger(node: NodeRef, config: ObserverConfig) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let element = node.cast::<Element>();
                let trigger = element.and_then(|element| {
                    let on_enter = {
                        let visible = visible.clone();
                        move |_| visible.set(true)
                    };
                    match ViewportTrigger::new(&config, TriggerMode::Once, on_enter) {
                        Some(trigger) => {
                            trigger.observe(&element);
                            Some(trigger)
                        }
                        None => {
                            visible.set(true);
                            None
                        }
                    }
                });
                move || drop(trigger)
            },
            node,
        );
    }

    *visible
}
