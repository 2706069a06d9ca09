//! One-shot reveal latch for sections fading in as they scroll into view.

/// Visible fraction a section must reach before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.15;
/// Bottom inset so sections reveal slightly after their edge appears.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
/// Reveal anyway if the watcher has not delivered a single callback by then.
pub const REVEAL_FALLBACK_MS: u32 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealEvent {
    Intersection { ratio: f64, is_intersecting: bool },
    FallbackElapsed,
    ObserverUnavailable,
    MotionDisabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Latched just now; the watcher and the fallback timer should be torn down.
    Revealed,
    Unchanged,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealLatch {
    visible: bool,
    watcher_alive: bool,
    threshold: f64,
}

impl Default for RevealLatch {
    fn default() -> Self {
        Self::new(REVEAL_THRESHOLD)
    }
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            visible: false,
            watcher_alive: false,
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// True once the watcher has delivered any callback, intersecting or not.
    /// From then on the fallback timer has nothing left to guard.
    pub fn watcher_alive(&self) -> bool {
        self.watcher_alive
    }

    pub fn handle(&mut self, event: RevealEvent) -> RevealOutcome {
        if self.visible {
            return RevealOutcome::Unchanged;
        }
        let reveal = match event {
            RevealEvent::Intersection {
                ratio,
                is_intersecting,
            } => {
                self.watcher_alive = true;
                is_intersecting && ratio >= self.threshold
            }
            RevealEvent::FallbackElapsed => !self.watcher_alive,
            RevealEvent::ObserverUnavailable
            | RevealEvent::MotionDisabled => true,
        };
        if reveal {
            self.visible = true;
            RevealOutcome::Revealed
        } else {
            RevealOutcome::Unchanged
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(ratio: f64) -> RevealEvent {
        RevealEvent::Intersection {
            ratio,
            is_intersecting: true,
        }
    }

    fn miss() -> RevealEvent {
        RevealEvent::Intersection {
            ratio: 0.0,
            is_intersecting: false,
        }
    }

    #[test]
    fn stays_hidden_below_threshold() {
        let mut latch = RevealLatch::default();
        assert_eq!(latch.handle(hit(0.05)), RevealOutcome::Unchanged);
        assert_eq!(latch.handle(miss()), RevealOutcome::Unchanged);
        assert!(!latch.is_visible());
    }

    #[test]
    fn once_visible_never_hides_again() {
        let mut latch = RevealLatch::default();
        let events = [miss(), hit(0.1), hit(0.3), miss(), hit(0.0), miss()];
        let mut seen_visible = false;
        for event in events {
            latch.handle(event);
            if seen_visible {
                assert!(latch.is_visible());
            }
            seen_visible |= latch.is_visible();
        }
        assert!(latch.is_visible());
    }

    #[test]
    fn latches_only_once() {
        let mut latch = RevealLatch::default();
        assert_eq!(latch.handle(hit(0.5)), RevealOutcome::Revealed);
        assert_eq!(latch.handle(hit(0.9)), RevealOutcome::Unchanged);
        assert_eq!(latch.handle(RevealEvent::FallbackElapsed), RevealOutcome::Unchanged);
    }

    #[test]
    fn ratio_without_intersection_does_not_reveal() {
        let mut latch = RevealLatch::default();
        let event = RevealEvent::Intersection {
            ratio: 0.5,
            is_intersecting: false,
        };
        assert_eq!(latch.handle(event), RevealOutcome::Unchanged);
    }

    #[test]
    fn fallback_timer_reveals_when_watcher_is_silent() {
        let mut latch = RevealLatch::default();
        assert_eq!(latch.handle(RevealEvent::FallbackElapsed), RevealOutcome::Revealed);
        assert!(latch.is_visible());
    }

    #[test]
    fn fallback_is_ignored_once_watcher_has_reported() {
        let mut latch = RevealLatch::default();
        assert_eq!(latch.handle(miss()), RevealOutcome::Unchanged);
        assert!(latch.watcher_alive());
        assert_eq!(latch.handle(RevealEvent::FallbackElapsed), RevealOutcome::Unchanged);
        assert!(!latch.is_visible());
        assert_eq!(latch.handle(hit(0.4)), RevealOutcome::Revealed);
    }

    #[test]
    fn missing_observer_or_motion_shows_content() {
        let mut latch = RevealLatch::default();
        latch.handle(RevealEvent::ObserverUnavailable);
        assert!(latch.is_visible());

        let mut latch = RevealLatch::default();
        latch.handle(RevealEvent::MotionDisabled);
        assert!(latch.is_visible());
    }
}
