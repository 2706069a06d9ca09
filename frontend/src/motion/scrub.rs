//! Scroll-scrubbed hero: opacity and translation as a pure function of how
//! far the hero has scrolled past the top of the viewport.

use super::parallax::ViewportRect;

/// Distance around the viewport within which the hero keeps listening.
pub const SCRUB_MARGIN_PX: f64 = 200.0;
pub const TITLE_TRAVEL_PX: f64 = -60.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrubFrame {
    pub progress: f64,
    pub title_translate_px: f64,
    pub title_opacity: f64,
    pub subtitle_opacity: f64,
    pub background_y_pct: f64,
}

impl ScrubFrame {
    pub fn at(progress: f64) -> Self {
        let progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            progress,
            title_translate_px: progress * TITLE_TRAVEL_PX,
            title_opacity: (1.0 - progress * 1.2).clamp(0.0, 1.0),
            subtitle_opacity: (1.0 - progress * 1.5).clamp(0.0, 1.0),
            background_y_pct: 50.0 + progress * 30.0,
        }
    }

    pub fn title_transform(&self) -> String {
        format!("translate3d(0, {:.2}px, 0)", self.title_translate_px)
    }

    pub fn background_position(&self) -> String {
        format!("center {:.2}%", self.background_y_pct)
    }
}

/// `clamp(-top / viewport_height, 0, 1)`, zero for unusable viewports.
pub fn scrub_progress(element_top: f64, viewport_height: f64) -> f64 {
    if !viewport_height.is_finite() || viewport_height <= 0.0 || !element_top.is_finite() {
        return 0.0;
    }
    (-element_top / viewport_height).clamp(0.0, 1.0)
}

/// What the browser glue should do with the scroll listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerChange {
    Attach,
    Detach,
    Keep,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrubController {
    motion_enabled: bool,
    listening: bool,
    frame: ScrubFrame,
}

impl ScrubController {
    pub fn new(motion_enabled: bool) -> Self {
        Self {
            motion_enabled,
            listening: false,
            frame: ScrubFrame::at(0.0),
        }
    }

    pub fn frame(&self) -> ScrubFrame {
        self.frame
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// The hero entered or left the expanded margin.
    pub fn on_margin_change(&mut self, inside: bool) -> ListenerChange {
        if !self.motion_enabled {
            return ListenerChange::Keep;
        }
        match (inside, self.listening) {
            (true, false) => {
                self.listening = true;
                ListenerChange::Attach
            }
            (false, true) => {
                self.listening = false;
                self.frame = ScrubFrame::at(1.0);
                ListenerChange::Detach
            }
            _ => ListenerChange::Keep,
        }
    }

    /// Recomputes from the current geometry. Returns the frame to paint, or
    /// `None` when nothing should be written.
    pub fn tick(&mut self, rect: ViewportRect) -> Option<ScrubFrame> {
        if !self.motion_enabled || !self.listening {
            return None;
        }
        if !rect.intersects_with_margin(SCRUB_MARGIN_PX) {
            self.on_margin_change(false);
            return Some(self.frame);
        }
        let next = ScrubFrame::at(scrub_progress(rect.top, rect.viewport_height));
        if next == self.frame {
            return None;
        }
        self.frame = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero(top: f64) -> ViewportRect {
        ViewportRect {
            top,
            height: 900.0,
            viewport_height: 900.0,
        }
    }

    #[test]
    fn derived_values_stay_in_unit_range() {
        let tops = [-1e9, -5_000.0, -901.0, -900.0, -450.0, -1.0, 0.0, 1.0, 900.0, 1e9];
        for top in tops {
            let frame = ScrubFrame::at(scrub_progress(top, 900.0));
            assert!((0.0..=1.0).contains(&frame.progress), "progress at {top}");
            assert!((0.0..=1.0).contains(&frame.title_opacity), "title at {top}");
            assert!((0.0..=1.0).contains(&frame.subtitle_opacity), "subtitle at {top}");
        }
        let frame = ScrubFrame::at(f64::NAN);
        assert_eq!(frame.progress, 0.0);
    }

    #[test]
    fn halfway_values() {
        let frame = ScrubFrame::at(scrub_progress(-450.0, 900.0));
        assert_eq!(frame.progress, 0.5);
        assert_eq!(frame.title_translate_px, -30.0);
        assert!((frame.title_opacity - 0.4).abs() < 1e-9);
        assert!((frame.subtitle_opacity - 0.25).abs() < 1e-9);
        assert_eq!(frame.background_position(), "center 65.00%");
    }

    #[test]
    fn bad_viewport_height_yields_zero() {
        assert_eq!(scrub_progress(-100.0, 0.0), 0.0);
        assert_eq!(scrub_progress(-100.0, f64::INFINITY), 0.0);
    }

    #[test]
    fn leaving_margin_pins_progress_and_detaches() {
        let mut scrub = ScrubController::new(true);
        assert_eq!(scrub.on_margin_change(true), ListenerChange::Attach);
        assert!(scrub.tick(hero(-300.0)).is_some());

        let pinned = scrub.tick(hero(-2_000.0)).expect("pinned frame");
        assert_eq!(pinned.progress, 1.0);
        assert!(!scrub.is_listening());
        assert_eq!(scrub.tick(hero(-100.0)), None);

        assert_eq!(scrub.on_margin_change(true), ListenerChange::Attach);
        assert_eq!(scrub.tick(hero(0.0)).map(|f| f.progress), Some(0.0));
    }

    #[test]
    fn repeated_identical_ticks_do_not_repaint() {
        let mut scrub = ScrubController::new(true);
        scrub.on_margin_change(true);
        assert!(scrub.tick(hero(-90.0)).is_some());
        assert_eq!(scrub.tick(hero(-90.0)), None);
    }

    #[test]
    fn disabled_motion_never_listens() {
        let mut scrub = ScrubController::new(false);
        assert_eq!(scrub.on_margin_change(true), ListenerChange::Keep);
        assert_eq!(scrub.tick(hero(-300.0)), None);
        assert_eq!(scrub.frame(), ScrubFrame::at(0.0));
    }
}
