use web_sys::{Event, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::NAV_ANCHOR_OFFSET;
use crate::utils::dom::{html_element_by_id, scroll_to_anchor, scroll_top, viewport_height};

/// Page geometry the floating button is positioned against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CtaLandmarks {
    pub hero_top: f64,
    pub hero_height: f64,
    pub contact_top: f64,
}

impl CtaLandmarks {
    /// Reads the `#hero` and `#contact` sections; `None` if either is missing.
    pub fn read() -> Option<Self> {
        let hero = html_element_by_id("hero")?;
        let contact = html_element_by_id("contact")?;
        Some(Self {
            hero_top: hero.offset_top() as f64,
            hero_height: hero.offset_height() as f64,
            contact_top: contact.offset_top() as f64,
        })
    }

    /// Visible between the end of the hero and one screen above the contact form.
    pub fn cta_visible(&self, scroll_top: f64, viewport_height: f64) -> bool {
        scroll_top > self.hero_top + self.hero_height
            && scroll_top < self.contact_top - viewport_height
    }
}

#[function_component(FloatingCta)]
pub fn floating_cta() -> Html {
    let show = use_state_eq(|| false);

    {
        let show = show.clone();
        use_event_with_window("scroll", move |_: Event| {
            if let Some(landmarks) = CtaLandmarks::read() {
                show.set(landmarks.cta_visible(scroll_top(), viewport_height()));
            }
        });
    }

    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_anchor("contact", NAV_ANCHOR_OFFSET);
    });

    html! {
        <a
            id="floatingCta"
            href="#contact"
            class={classes!("floating-cta", show.then_some("show"))}
            {onclick}
        >
            <span class="floating-cta-icon">{"☎"}</span>
            <span>{"무료 상담"}</span>
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LANDMARKS: CtaLandmarks = CtaLandmarks {
        hero_top: 0.0,
        hero_height: 800.0,
        contact_top: 4000.0,
    };

    #[test]
    fn visible_between_hero_and_contact() {
        assert!(LANDMARKS.cta_visible(1000.0, 800.0));
        assert!(LANDMARKS.cta_visible(3199.0, 800.0));
    }

    #[test]
    fn hidden_over_hero_and_near_contact() {
        assert!(!LANDMARKS.cta_visible(700.0, 800.0));
        assert!(!LANDMARKS.cta_visible(3300.0, 800.0));
    }

    #[test]
    fn range_bounds_are_exclusive() {
        assert!(!LANDMARKS.cta_visible(800.0, 800.0));
        assert!(!LANDMARKS.cta_visible(3200.0, 800.0));
    }
}
