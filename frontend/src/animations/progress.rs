use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::{BAR_ANIMATION_DELAY_MS, PROCESS_OBSERVER, REVEAL_OBSERVER, STEP_STAGGER_MS};
use crate::utils::viewport::use_viewport_trigger;

/// Delay before each step item lights up, first item included.
pub fn step_delays(count: usize) -> Vec<u32> {
    (0..count)
        .map(|index| STEP_STAGGER_MS * (index as u32 + 1))
        .collect()
}

pub fn bar_width_style(percent: u8) -> String {
    format!("--bar-width: {}%;", percent.min(100))
}

/// Every class of a chart bar. The bar is kept out of the general reveal
/// observer so these are the only classes it ever carries.
pub fn chart_bar_classes(revealed: bool, animated: bool) -> Classes {
    classes!(
        "chart-bar",
        revealed.then_some("revealed"),
        animated.then_some("animated")
    )
}

#[derive(Properties, PartialEq)]
pub struct ChartBarProps {
    pub label: AttrValue,
    /// Target width in percent.
    pub width: u8,
}

#[function_component(ChartBar)]
pub fn chart_bar(props: &ChartBarProps) -> Html {
    let node = use_node_ref();
    let visible = use_viewport_trigger(node.clone(), REVEAL_OBSERVER);
    let animated = use_state_eq(|| false);

    {
        let animated = animated.clone();
        use_effect_with_deps(
            move |visible| {
                let timeout = visible.then(|| {
                    Timeout::new(BAR_ANIMATION_DELAY_MS, move || animated.set(true))
                });
                move || drop(timeout)
            },
            visible,
        );
    }

    let style = animated.then(|| bar_width_style(props.width));

    html! {
        <div class="chart-row">
            <span class="chart-label">{props.label.clone()}</span>
            <div
                ref={node}
                class={chart_bar_classes(visible, *animated)}
                data-width={props.width.to_string()}
                {style}
            >
                <span class="chart-value">{format!("{}%", props.width)}</span>
            </div>
        </div>
    }
}

#[derive(Clone, PartialEq)]
pub struct ProcessStep {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct ProcessTimelineProps {
    pub steps: Vec<ProcessStep>,
}

/// The `#process` section: a progress bar that fills once the section is in
/// view, followed by its step items one after another.
#[function_component(ProcessTimeline)]
pub fn process_timeline(props: &ProcessTimelineProps) -> Html {
    let node = use_node_ref();
    let visible = use_viewport_trigger(node.clone(), PROCESS_OBSERVER);
    let progress_full = use_state_eq(|| false);
    let animated_steps = use_state_eq(|| 0usize);

    {
        let progress_full = progress_full.clone();
        let animated_steps = animated_steps.clone();
        use_effect_with_deps(
            move |(visible, step_count): &(bool, usize)| {
                let mut timers = Vec::new();
                if *visible {
                    timers.push(Timeout::new(BAR_ANIMATION_DELAY_MS, move || {
                        progress_full.set(true);
                    }));
                    for (index, delay) in step_delays(*step_count).into_iter().enumerate() {
                        let animated_steps = animated_steps.clone();
                        timers.push(Timeout::new(delay, move || {
                            animated_steps.set(index + 1);
                        }));
                    }
                }
                move || drop(timers)
            },
            (visible, props.steps.len()),
        );
    }

    let progress_style = if *progress_full { "width: 100%;" } else { "width: 0%;" };

    html! {
        <section id="process" class="process" ref={node}>
            <h2 class="section-title" data-aos="fade-up">{"진행 과정"}</h2>
            <div class="process-track">
                <div class="progress-bar" style={progress_style}></div>
            </div>
            <ol class="step-list">
                { for props.steps.iter().enumerate().map(|(index, step)| html! {
                    <li class={classes!("step-item", (index < *animated_steps).then_some("step-animated"))}>
                        <span class="step-number">{format!("{:02}", index + 1)}</span>
                        <h3>{step.title}</h3>
                        <p>{step.description}</p>
                    </li>
                }) }
            </ol>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_staggered_from_the_first_item() {
        assert_eq!(step_delays(4), vec![300, 600, 900, 1200]);
    }

    #[test]
    fn no_steps_no_delays() {
        assert!(step_delays(0).is_empty());
    }

    #[test]
    fn chart_bar_keeps_revealed_once_animated() {
        assert_eq!(chart_bar_classes(false, false).to_string(), "chart-bar");
        assert_eq!(chart_bar_classes(true, false).to_string(), "chart-bar revealed");
        assert_eq!(
            chart_bar_classes(true, true).to_string(),
            "chart-bar revealed animated"
        );
    }

    #[test]
    fn bar_width_is_capped_at_full() {
        assert_eq!(bar_width_style(72), "--bar-width: 72%;");
        assert_eq!(bar_width_style(140), "--bar-width: 100%;");
    }
}
