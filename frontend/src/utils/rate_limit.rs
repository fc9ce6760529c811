use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

use crate::utils::dom::now_ms;

/// Leading-edge gate: lets one call through, then stays closed for `limit_ms`.
#[derive(Debug, Clone)]
pub struct ThrottleGate {
    limit_ms: f64,
    reopens_at: Option<f64>,
}

impl ThrottleGate {
    pub fn new(limit_ms: u32) -> Self {
        Self {
            limit_ms: limit_ms as f64,
            reopens_at: None,
        }
    }

    pub fn try_pass(&mut self, now: f64) -> bool {
        match self.reopens_at {
            Some(reopens_at) if now < reopens_at => false,
            _ => {
                self.reopens_at = Some(now + self.limit_ms);
                true
            }
        }
    }
}

/// Wraps a callback so it runs at most once per `limit_ms`.
pub struct Throttle {
    gate: RefCell<ThrottleGate>,
    callback: Box<dyn Fn()>,
}

impl Throttle {
    pub fn new(limit_ms: u32, callback: impl Fn() + 'static) -> Self {
        Self {
            gate: RefCell::new(ThrottleGate::new(limit_ms)),
            callback: Box::new(callback),
        }
    }

    pub fn call(&self) {
        let pass = self.gate.borrow_mut().try_pass(now_ms());
        if pass {
            (self.callback)();
        }
    }
}

/// Clock-driven debounce state. Each call pushes the deadline to
/// `now + wait_ms`; the callback belongs on the trailing edge, or on the
/// leading edge of a burst when `immediate` is set.
#[derive(Debug, Clone)]
pub struct DebounceGate {
    wait_ms: f64,
    immediate: bool,
    deadline: Option<f64>,
}

impl DebounceGate {
    pub fn new(wait_ms: u32, immediate: bool) -> Self {
        Self {
            wait_ms: wait_ms as f64,
            immediate,
            deadline: None,
        }
    }

    fn idle(&self, now: f64) -> bool {
        self.deadline.map_or(true, |deadline| now >= deadline)
    }

    /// Records a call. Returns true when the callback should fire right away.
    pub fn call(&mut self, now: f64) -> bool {
        let leading = self.immediate && self.idle(now);
        self.deadline = Some(now + self.wait_ms);
        leading
    }

    /// Returns true once the burst has gone quiet and the trailing call is owed.
    pub fn due(&mut self, now: f64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => self.settle(),
            _ => false,
        }
    }

    /// Ends the current burst without consulting the clock.
    pub fn settle(&mut self) -> bool {
        self.deadline.take().is_some() && !self.immediate
    }
}

/// Delays a callback until calls have stopped for `wait_ms`.
/// With `immediate` set, the callback fires on the leading edge instead.
pub struct Debounce {
    wait_ms: u32,
    gate: Rc<RefCell<DebounceGate>>,
    callback: Rc<dyn Fn()>,
    timeout: RefCell<Option<Timeout>>,
}

impl Debounce {
    pub fn new(wait_ms: u32, immediate: bool, callback: impl Fn() + 'static) -> Self {
        Self {
            wait_ms,
            gate: Rc::new(RefCell::new(DebounceGate::new(wait_ms, immediate))),
            callback: Rc::new(callback),
            timeout: RefCell::new(None),
        }
    }

    pub fn call(&self) {
        let call_now = self.gate.borrow_mut().call(now_ms());

        let gate = self.gate.clone();
        let callback = self.callback.clone();
        // Only the latest timer survives, so its expiry closes the burst.
        let timeout = Timeout::new(self.wait_ms, move || {
            let fire = gate.borrow_mut().settle();
            if fire {
                callback();
            }
        });
        // Replacing the handle cancels the previous timer.
        *self.timeout.borrow_mut() = Some(timeout);

        if call_now {
            (self.callback)();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_lets_first_call_through() {
        let mut gate = ThrottleGate::new(16);
        assert!(gate.try_pass(1000.0));
    }

    #[test]
    fn gate_blocks_within_window_and_reopens_after() {
        let mut gate = ThrottleGate::new(16);
        assert!(gate.try_pass(0.0));
        assert!(!gate.try_pass(5.0));
        assert!(!gate.try_pass(15.9));
        assert!(gate.try_pass(16.0));
        assert!(!gate.try_pass(20.0));
        assert!(gate.try_pass(40.0));
    }

    #[test]
    fn debounce_fires_once_after_the_last_call_in_a_burst() {
        let mut gate = DebounceGate::new(250, false);
        assert!(!gate.call(0.0));
        assert!(!gate.call(100.0));
        assert!(!gate.call(200.0));
        assert!(!gate.due(249.0));
        assert!(!gate.due(449.0));
        assert!(gate.due(450.0));
        assert!(!gate.due(700.0));
    }

    #[test]
    fn debounce_separate_bursts_each_fire() {
        let mut gate = DebounceGate::new(250, false);
        gate.call(0.0);
        assert!(gate.due(250.0));
        gate.call(1000.0);
        assert!(!gate.due(1100.0));
        assert!(gate.due(1250.0));
    }

    #[test]
    fn immediate_debounce_fires_once_on_the_leading_edge() {
        let mut gate = DebounceGate::new(250, true);
        assert!(gate.call(0.0));
        assert!(!gate.call(100.0));
        assert!(!gate.call(200.0));
        assert!(!gate.due(450.0));
        assert!(gate.call(500.0));
    }

    #[test]
    fn immediate_debounce_reopens_without_a_timer() {
        let mut gate = DebounceGate::new(250, true);
        assert!(gate.call(0.0));
        assert!(!gate.call(249.0));
        assert!(gate.call(499.0));
    }

    #[test]
    fn settle_closes_the_burst() {
        let mut trailing = DebounceGate::new(250, false);
        assert!(!trailing.settle());
        trailing.call(0.0);
        assert!(trailing.settle());
        assert!(!trailing.due(1000.0));

        let mut leading = DebounceGate::new(250, true);
        leading.call(0.0);
        assert!(!leading.settle());
        assert!(leading.call(10.0));
    }
}
