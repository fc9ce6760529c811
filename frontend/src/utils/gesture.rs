use crate::config::{MOUSE_DRAG_THRESHOLD, PAGE_SWIPE_THRESHOLD, TOUCH_SWIPE_THRESHOLD};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Modality {
    Touch,
    Mouse,
    PageSwipe,
}

impl Modality {
    pub fn threshold(self) -> f64 {
        match self {
            Modality::Touch => TOUCH_SWIPE_THRESHOLD,
            Modality::Mouse => MOUSE_DRAG_THRESHOLD,
            Modality::PageSwipe => PAGE_SWIPE_THRESHOLD,
        }
    }
}

/// Which way a finished gesture points.
/// `Forward` means the pointer travelled toward smaller coordinates
/// (left for the slider, up for the page).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SwipeDirection {
    Forward,
    Backward,
}

/// One in-progress drag or swipe.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureState {
    start: f64,
    current: f64,
    dragging: bool,
}

impl GestureState {
    pub fn begin(&mut self, coordinate: f64) {
        self.start = coordinate;
        self.current = coordinate;
        self.dragging = true;
    }

    pub fn track(&mut self, coordinate: f64) {
        if self.dragging {
            self.current = coordinate;
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Ends the gesture. Returns a direction only when the travelled
    /// distance exceeds the modality's threshold.
    pub fn finish(&mut self, modality: Modality) -> Option<SwipeDirection> {
        if !self.dragging {
            return None;
        }
        let diff = self.start - self.current;
        self.cancel();

        if diff.abs() > modality.threshold() {
            if diff > 0.0 {
                Some(SwipeDirection::Forward)
            } else {
                Some(SwipeDirection::Backward)
            }
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(modality: Modality, from: f64, to: f64) -> Option<SwipeDirection> {
        let mut gesture = GestureState::default();
        gesture.begin(from);
        gesture.track(to);
        gesture.finish(modality)
    }

    #[test]
    fn touch_swipe_left_advances() {
        assert_eq!(swipe(Modality::Touch, 300.0, 200.0), Some(SwipeDirection::Forward));
    }

    #[test]
    fn touch_swipe_right_retreats() {
        assert_eq!(swipe(Modality::Touch, 100.0, 180.0), Some(SwipeDirection::Backward));
    }

    #[test]
    fn short_touch_swipe_is_ignored() {
        assert_eq!(swipe(Modality::Touch, 100.0, 60.0), None);
        assert_eq!(swipe(Modality::Touch, 100.0, 50.0), None);
    }

    #[test]
    fn mouse_needs_a_longer_drag() {
        assert_eq!(swipe(Modality::Mouse, 400.0, 320.0), None);
        assert_eq!(swipe(Modality::Mouse, 400.0, 299.0), Some(SwipeDirection::Forward));
    }

    #[test]
    fn tap_without_move_never_navigates() {
        let mut gesture = GestureState::default();
        gesture.begin(500.0);
        assert_eq!(gesture.finish(Modality::Touch), None);
    }

    #[test]
    fn finish_always_clears_dragging() {
        let mut gesture = GestureState::default();
        gesture.begin(10.0);
        gesture.track(12.0);
        assert!(gesture.is_dragging());
        gesture.finish(Modality::Mouse);
        assert!(!gesture.is_dragging());
        assert_eq!(gesture.finish(Modality::Mouse), None);
    }

    #[test]
    fn moves_outside_a_gesture_are_ignored() {
        let mut gesture = GestureState::default();
        gesture.track(900.0);
        assert!(!gesture.is_dragging());
        assert_eq!(gesture.finish(Modality::Touch), None);
    }
}
