use web_sys::{Event, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{NAV_ANCHOR_OFFSET, NAV_HIDE_AFTER, NAV_SCROLLED_AFTER};
use crate::utils::dom::{scroll_to_anchor, scroll_top};

pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("#hero", "홈"),
    ("#stats", "성과"),
    ("#process", "진행 과정"),
    ("#cases", "성공 사례"),
    ("#contact", "상담 신청"),
];

/// Hidden/scrolled state of the navbar, driven by scroll position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavFacets {
    last_scroll_top: f64,
    pub hidden: bool,
    pub scrolled: bool,
}

impl NavFacets {
    pub fn on_scroll(&mut self, scroll_top: f64) {
        self.hidden = scroll_top > self.last_scroll_top && scroll_top > NAV_HIDE_AFTER;
        self.scrolled = scroll_top > NAV_SCROLLED_AFTER;
        self.last_scroll_top = scroll_top;
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let facets = use_mut_ref(NavFacets::default);
    let view = use_state_eq(NavFacets::default);
    let active = use_state_eq(|| 0usize);
    let menu_open = use_state(|| false);

    {
        let view = view.clone();
        use_event_with_window("scroll", move |_: Event| {
            let mut facets = facets.borrow_mut();
            facets.on_scroll(scroll_top());
            view.set(*facets);
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let menu_class = if *menu_open {
        "nav-menu mobile-menu-open"
    } else {
        "nav-menu"
    };

    html! {
        <nav
            id="navbar"
            class={classes!(
                "navbar",
                view.hidden.then_some("nav-hidden"),
                view.scrolled.then_some("scrolled"),
            )}
        >
            <div class="nav-content">
                <a href="#hero" class="nav-logo">{"시그넘파트너스"}</a>
                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_ITEMS.iter().enumerate().map(|(index, (href, label))| {
                        let onclick = {
                            let active = active.clone();
                            let menu_open = menu_open.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                if scroll_to_anchor(href, NAV_ANCHOR_OFFSET) {
                                    active.set(index);
                                    menu_open.set(false);
                                }
                            })
                        };
                        html! {
                            <a
                                href={*href}
                                class={classes!("nav-item", (*active == index).then_some("active"))}
                                {onclick}
                            >
                                {*label}
                            </a>
                        }
                    }) }
                </div>
            </div>
        </nav>
    }
}
