//! Double tap detection
//!
//! Runs between the input providers and the dispatcher. When a touch begins
//! close to where a recently ended touch started, the new touch is flagged as
//! a double tap and given the time elapsed since the first tap.

use indexmap::IndexMap;
use tactile_core::{Point, Uid};

use crate::config::PostprocConfig;
use crate::motion::MotionEvent;
use crate::profile::{Button, Capability};

/// Stage of a motion event as seen by post-processors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MotionPhase {
    Begin,
    Update,
    End,
}

/// What is remembered about an ended touch
#[derive(Clone, Debug)]
struct Tap {
    time_start: f64,
    origin: Point,
    button: Option<Button>,
    scrolling: bool,
    is_double_tap: bool,
}

/// Flags touches that follow a recent tap at the same spot
#[derive(Debug)]
pub struct DoubleTapDetector {
    /// Maximum time between the two taps, in seconds
    max_time: f64,
    /// Maximum distance between the two taps, in normalized units
    max_distance: f64,
    /// Ended taps, oldest first
    taps: IndexMap<Uid, Tap>,
}

impl DoubleTapDetector {
    /// `max_time` in seconds, `max_distance` in normalized units. A zero
    /// threshold disables detection.
    pub fn new(max_time: f64, max_distance: f64) -> Self {
        Self {
            max_time,
            max_distance,
            taps: IndexMap::new(),
        }
    }

    pub fn from_config(config: &PostprocConfig) -> Self {
        Self::new(config.double_tap_time_secs(), config.double_tap_distance_normalized())
    }

    pub fn is_enabled(&self) -> bool {
        self.max_time > 0.0 && self.max_distance > 0.0
    }

    /// Feed one event. `now` is the current time in seconds, used to forget
    /// taps that are too old to pair with anything.
    pub fn process(&mut self, phase: MotionPhase, event: &mut MotionEvent, now: f64) {
        if !self.is_enabled() {
            return;
        }

        if event.is_touch() {
            match phase {
                MotionPhase::Begin => {
                    if let Some(first_start) = self.find_double_tap(event) {
                        let elapsed = event.time_start() - first_start;
                        event.mark_double_tap(elapsed);
                        tracing::debug!(
                            "Double tap detected on event {} ({:.3}s after first tap)",
                            event.uid(),
                            elapsed
                        );
                    }
                }
                MotionPhase::End => {
                    let origin = event.normalized().origin().xy();
                    self.taps.insert(
                        event.uid(),
                        Tap {
                            time_start: event.time_start(),
                            origin,
                            button: tap_button(event),
                            scrolling: event.is_mouse_scrolling(),
                            is_double_tap: event.is_double_tap(),
                        },
                    );
                }
                MotionPhase::Update => {}
            }
        }

        let max_time = self.max_time;
        self.taps.retain(|_, tap| now - tap.time_start <= max_time);
    }

    /// Number of ended taps still waiting for a partner
    pub fn pending(&self) -> usize {
        self.taps.len()
    }

    /// Start time of the oldest remembered tap that pairs with `event`
    fn find_double_tap(&self, event: &MotionEvent) -> Option<f64> {
        if event.is_mouse_scrolling() {
            return None;
        }
        let spos = Point::from(event.spos());
        let button = tap_button(event);

        self.taps
            .iter()
            .filter(|(uid, tap)| **uid != event.uid() && !tap.is_double_tap && !tap.scrolling)
            .filter(|(_, tap)| tap.button == button)
            .find(|(_, tap)| spos.distance(tap.origin) <= self.max_distance)
            .map(|(_, tap)| tap.time_start)
    }
}

fn tap_button(event: &MotionEvent) -> Option<Button> {
    if event.profile().contains(&Capability::Button) {
        event.button().cloned()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::RawArgs;
    use crate::kind::EventKind;
    use tactile_core::UidSource;

    fn tap(uids: &UidSource, kind: EventKind, args: RawArgs) -> MotionEvent {
        MotionEvent::new(uids, kind, "test", "0", args)
    }

    fn mouse(uids: &UidSource, button: &str) -> MotionEvent {
        tap(uids, EventKind::Mouse, RawArgs::at(0.5, 0.5).with("button", button))
    }

    fn begin(detector: &mut DoubleTapDetector, event: &mut MotionEvent) {
        let now = event.time_start();
        detector.process(MotionPhase::Begin, event, now);
    }

    fn end(detector: &mut DoubleTapDetector, event: &mut MotionEvent) {
        event.update_time_end();
        let now = event.time_start();
        detector.process(MotionPhase::End, event, now);
    }

    #[test]
    fn test_second_tap_nearby_is_double() {
        let uids = UidSource::new();
        let mut detector = DoubleTapDetector::new(0.25, 0.02);

        let mut first = tap(&uids, EventKind::Touch, RawArgs::at(0.5, 0.5));
        begin(&mut detector, &mut first);
        assert!(!first.is_double_tap());
        end(&mut detector, &mut first);
        assert_eq!(detector.pending(), 1);

        let mut second = tap(&uids, EventKind::Touch, RawArgs::at(0.505, 0.5));
        begin(&mut detector, &mut second);
        assert!(second.is_double_tap());
        assert!(second.double_tap_time() >= 0.0);
        assert!(second.double_tap_time() <= 0.25);
    }

    #[test]
    fn test_far_tap_is_not_double() {
        let uids = UidSource::new();
        let mut detector = DoubleTapDetector::new(0.25, 0.02);

        let mut first = tap(&uids, EventKind::Touch, RawArgs::at(0.1, 0.1));
        end(&mut detector, &mut first);

        let mut second = tap(&uids, EventKind::Touch, RawArgs::at(0.9, 0.9));
        begin(&mut detector, &mut second);
        assert!(!second.is_double_tap());
    }

    #[test]
    fn test_old_taps_expire() {
        let uids = UidSource::new();
        let mut detector = DoubleTapDetector::new(0.25, 0.02);

        let mut first = tap(&uids, EventKind::Touch, RawArgs::at(0.5, 0.5));
        end(&mut detector, &mut first);

        let mut idle = tap(&uids, EventKind::Touch, RawArgs::at(0.9, 0.9));
        let later = first.time_start() + 1.0;
        detector.process(MotionPhase::Update, &mut idle, later);
        assert_eq!(detector.pending(), 0);

        let mut second = tap(&uids, EventKind::Touch, RawArgs::at(0.5, 0.5));
        begin(&mut detector, &mut second);
        assert!(!second.is_double_tap());
    }

    #[test]
    fn test_oldest_matching_tap_wins() {
        let uids = UidSource::new();
        let mut detector = DoubleTapDetector::new(0.25, 0.02);

        let mut oldest = tap(&uids, EventKind::Touch, RawArgs::at(0.5, 0.5));
        end(&mut detector, &mut oldest);
        let mut newer = tap(&uids, EventKind::Touch, RawArgs::at(0.501, 0.5));
        end(&mut detector, &mut newer);
        assert_eq!(detector.pending(), 2);

        let mut third = tap(&uids, EventKind::Touch, RawArgs::at(0.5, 0.501));
        begin(&mut detector, &mut third);
        assert!(third.is_double_tap());
        assert_eq!(
            third.double_tap_time(),
            third.time_start() - oldest.time_start()
        );
    }

    #[test]
    fn test_buttons_must_match() {
        let uids = UidSource::new();
        let mut detector = DoubleTapDetector::new(0.25, 0.02);

        let mut left = mouse(&uids, "left");
        end(&mut detector, &mut left);

        let mut right = mouse(&uids, "right");
        begin(&mut detector, &mut right);
        assert!(!right.is_double_tap());

        let mut left_again = mouse(&uids, "left");
        begin(&mut detector, &mut left_again);
        assert!(left_again.is_double_tap());
    }

    #[test]
    fn test_scroll_never_double_taps() {
        let uids = UidSource::new();
        let mut detector = DoubleTapDetector::new(0.25, 0.02);

        let mut wheel = mouse(&uids, "scrollup");
        end(&mut detector, &mut wheel);

        let mut again = mouse(&uids, "scrollup");
        begin(&mut detector, &mut again);
        assert!(!again.is_double_tap());
    }

    #[test]
    fn test_disabled_detector() {
        let uids = UidSource::new();
        let mut detector = DoubleTapDetector::new(0.0, 0.02);
        assert!(!detector.is_enabled());

        let mut first = tap(&uids, EventKind::Touch, RawArgs::at(0.5, 0.5));
        end(&mut detector, &mut first);
        assert_eq!(detector.pending(), 0);
    }
}
