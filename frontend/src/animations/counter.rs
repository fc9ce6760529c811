use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config::{COUNTER_DURATION_MS, COUNTER_OBSERVER, COUNTER_STEPS};
use crate::utils::viewport::use_viewport_trigger;

/// Progress of one count-up from zero to `target`.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: f64,
    step_value: f64,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: f64) -> Self {
        Self {
            target,
            step_value: target / COUNTER_STEPS as f64,
            current: 0.0,
            finished: false,
        }
    }

    pub fn step_interval_ms() -> u32 {
        COUNTER_DURATION_MS / COUNTER_STEPS
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances one step and returns the text to show.
    pub fn tick(&mut self) -> String {
        if !self.finished {
            self.current += self.step_value;
            if self.current >= self.target {
                self.current = self.target;
                self.finished = true;
            }
        }
        self.display()
    }

    pub fn display(&self) -> String {
        if self.target.fract() != 0.0 {
            format!("{:.1}", self.current)
        } else if self.finished {
            group_thousands(self.target as i64)
        } else {
            group_thousands(self.current.floor() as i64)
        }
    }
}

pub fn parse_target(raw: &str) -> Option<f64> {
    raw.trim()
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Formats an integer with comma thousands separators.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    /// Raw `data-count` value, integer or decimal.
    pub count: AttrValue,
    #[prop_or_default]
    pub suffix: Option<AttrValue>,
    pub label: AttrValue,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let node = use_node_ref();
    let visible = use_viewport_trigger(node.clone(), COUNTER_OBSERVER);
    let text = use_state(|| "0".to_string());
    // A restart drops the running interval before starting the next one.
    let running = use_mut_ref(|| None::<Interval>);

    {
        let text = text.clone();
        let running = running.clone();
        use_effect_with_deps(
            move |(visible, count): &(bool, AttrValue)| {
                running.borrow_mut().take();
                if *visible {
                    match parse_target(count) {
                        Some(target) => {
                            let mut animation = CounterAnimation::new(target);
                            let handle = running.clone();
                            let interval = Interval::new(CounterAnimation::step_interval_ms(), move || {
                                text.set(animation.tick());
                                if animation.is_finished() {
                                    handle.borrow_mut().take();
                                }
                            });
                            *running.borrow_mut() = Some(interval);
                        }
                        None => {
                            gloo_console::error!("Invalid counter target:", count.to_string());
                        }
                    }
                }
                move || {
                    running.borrow_mut().take();
                }
            },
            (visible, props.count.clone()),
        );
    }

    html! {
        <div class="stat-item">
            <span class="stat-number" data-count={props.count.clone()} ref={node}>
                {(*text).clone()}
            </span>
            {
                if let Some(suffix) = &props.suffix {
                    html! { <span class="stat-suffix">{suffix.clone()}</span> }
                } else {
                    html! {}
                }
            }
            <p class="stat-label">{props.label.clone()}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(target: f64) -> (Vec<String>, CounterAnimation) {
        let mut animation = CounterAnimation::new(target);
        let mut frames = Vec::new();
        while !animation.is_finished() {
            frames.push(animation.tick());
            assert!(frames.len() <= COUNTER_STEPS as usize + 1, "counter never finished");
        }
        (frames, animation)
    }

    #[test]
    fn integer_target_ends_exactly_on_target() {
        let (frames, _) = run_to_end(128.0);
        assert_eq!(frames.last().unwrap(), "128");
    }

    #[test]
    fn decimal_target_ends_exactly_on_target() {
        let (frames, _) = run_to_end(4.5);
        assert_eq!(frames.last().unwrap(), "4.5");
    }

    #[test]
    fn decimal_target_shows_one_decimal_every_step() {
        let (frames, _) = run_to_end(4.5);
        for frame in &frames {
            let (_, decimals) = frame.split_once('.').expect("missing decimal point");
            assert_eq!(decimals.len(), 1, "frame {frame}");
        }
    }

    #[test]
    fn integer_steps_are_floored_and_grouped() {
        let mut animation = CounterAnimation::new(12_000.0);
        assert_eq!(animation.tick(), "200");
        for _ in 0..9 {
            animation.tick();
        }
        assert_eq!(animation.display(), "2,000");
        let (frames, _) = run_to_end(12_000.0);
        assert_eq!(frames.last().unwrap(), "12,000");
    }

    #[test]
    fn intermediate_frames_never_exceed_target() {
        let (frames, _) = run_to_end(97.0);
        for frame in frames {
            let value: f64 = frame.replace(',', "").parse().unwrap();
            assert!(value <= 97.0);
        }
    }

    #[test]
    fn zero_target_finishes_on_first_tick() {
        let mut animation = CounterAnimation::new(0.0);
        assert_eq!(animation.tick(), "0");
        assert!(animation.is_finished());
    }

    #[test]
    fn ticking_after_finish_is_stable() {
        let (_, mut animation) = run_to_end(50.0);
        assert_eq!(animation.tick(), "50");
        assert_eq!(animation.tick(), "50");
    }

    #[test]
    fn parses_integer_and_decimal_targets() {
        assert_eq!(parse_target("128"), Some(128.0));
        assert_eq!(parse_target(" 4.5 "), Some(4.5));
        assert_eq!(parse_target("1,200"), Some(1200.0));
        assert_eq!(parse_target("abc"), None);
        assert_eq!(parse_target("NaN"), None);
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-4500), "-4,500");
    }
}
