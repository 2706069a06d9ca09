//! Tracks which product section dominates the viewport so the floating
//! "watch demo" button can point at its video.

use std::collections::HashMap;

use super::parallax::ViewportRect;

/// A section must show more than this fraction to be picked by ratio.
pub const MIN_VISIBLE_RATIO: f64 = 0.15;
/// Thresholds handed to the intersection watcher.
pub const OBSERVER_THRESHOLDS: [f64; 6] = [0.0, 0.15, 0.25, 0.5, 0.75, 1.0];
/// The button only exists on desktop-width viewports.
pub const DESKTOP_MIN_WIDTH_PX: f64 = 1024.0;

pub fn is_desktop_width(width: f64) -> bool {
    width.is_finite() && width >= DESKTOP_MIN_WIDTH_PX
}

/// Product section registered with the tracker.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoSection {
    pub product_id: String,
    pub product_name: String,
    pub video_url: Option<String>,
}

/// What the floating button currently points at.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoTarget {
    pub product_id: String,
    pub product_name: String,
    pub video_url: String,
}

#[derive(Debug, Default)]
pub struct MostVisibleTracker {
    sections: Vec<DemoSection>,
    ratios: HashMap<String, f64>,
    current: Option<DemoTarget>,
    visible: bool,
}

impl MostVisibleTracker {
    pub fn new(sections: Vec<DemoSection>) -> Self {
        Self {
            sections,
            ..Self::default()
        }
    }

    pub fn current(&self) -> Option<&DemoTarget> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible && self.current.is_some()
    }

    /// Records one entry of a batched intersection callback.
    pub fn record_ratio(&mut self, product_id: &str, ratio: f64) {
        let ratio = if ratio.is_finite() { ratio.clamp(0.0, 1.0) } else { 0.0 };
        self.ratios.insert(product_id.to_owned(), ratio);
    }

    /// Highest-ratio section with a video, above the minimum.
    pub fn best_by_ratio(&self) -> Option<&DemoSection> {
        self.sections
            .iter()
            .filter(|section| section.video_url.is_some())
            .filter_map(|section| {
                let ratio = self.ratios.get(&section.product_id).copied()?;
                (ratio > MIN_VISIBLE_RATIO).then_some((section, ratio))
            })
            .fold(None, |best: Option<(&DemoSection, f64)>, (section, ratio)| match best {
                Some((_, best_ratio)) if best_ratio >= ratio => best,
                _ => Some((section, ratio)),
            })
            .map(|(section, _)| section)
    }

    /// Runs once per frame. `measure` returns the live geometry of a section
    /// and is only consulted when no section qualifies by ratio. Returns true
    /// when the button's target or visibility changed.
    pub fn evaluate<F>(&mut self, mut measure: F) -> bool
    where
        F: FnMut(&str) -> Option<ViewportRect>,
    {
        let was_visible = self.is_visible();

        if let Some(section) = self.best_by_ratio().cloned() {
            let changed = self.point_at(&section);
            self.visible = true;
            return changed || !was_visible;
        }

        let geometric = self
            .sections
            .iter()
            .filter(|section| section.video_url.is_some())
            .find(|section| {
                measure(&section.product_id)
                    .map(|rect| rect.intersects_viewport())
                    .unwrap_or(false)
            })
            .cloned();

        match geometric {
            Some(section) => {
                let mut changed = false;
                if self.current.is_none() {
                    changed = self.point_at(&section);
                }
                self.visible = true;
                changed || !was_visible
            }
            None => {
                self.visible = false;
                was_visible
            }
        }
    }

    fn point_at(&mut self, section: &DemoSection) -> bool {
        let Some(video_url) = section.video_url.as_ref() else {
            return false;
        };
        if self.current.as_ref().map(|t| &t.video_url) == Some(video_url) {
            return false;
        }
        self.current = Some(DemoTarget {
            product_id: section.product_id.clone(),
            product_name: section.product_name.clone(),
            video_url: video_url.clone(),
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, video: Option<&str>) -> DemoSection {
        DemoSection {
            product_id: id.to_owned(),
            product_name: id.to_uppercase(),
            video_url: video.map(str::to_owned),
        }
    }

    fn tracker() -> MostVisibleTracker {
        MostVisibleTracker::new(vec![
            section("a", Some("https://youtu.be/aaaaaaaaaaa")),
            section("b", Some("https://youtu.be/bbbbbbbbbbb")),
            section("c", Some("https://youtu.be/ccccccccccc")),
            section("d", None),
        ])
    }

    fn off_screen(_: &str) -> Option<ViewportRect> {
        Some(ViewportRect {
            top: 5_000.0,
            height: 600.0,
            viewport_height: 900.0,
        })
    }

    #[test]
    fn picks_highest_ratio() {
        let mut tracker = tracker();
        tracker.record_ratio("a", 0.2);
        tracker.record_ratio("b", 0.5);
        tracker.record_ratio("c", 0.15);
        assert!(tracker.evaluate(off_screen));
        assert_eq!(tracker.current().map(|t| t.product_id.as_str()), Some("b"));
        assert!(tracker.is_visible());
    }

    #[test]
    fn sections_without_video_are_ignored() {
        let mut tracker = tracker();
        tracker.record_ratio("d", 0.9);
        tracker.record_ratio("a", 0.3);
        tracker.evaluate(off_screen);
        assert_eq!(tracker.current().map(|t| t.product_id.as_str()), Some("a"));
    }

    #[test]
    fn same_link_does_not_churn() {
        let mut tracker = tracker();
        tracker.record_ratio("b", 0.5);
        assert!(tracker.evaluate(off_screen));
        tracker.record_ratio("b", 0.7);
        assert!(!tracker.evaluate(off_screen));
        tracker.record_ratio("b", 0.4);
        assert!(!tracker.evaluate(off_screen));
    }

    #[test]
    fn below_threshold_consults_geometry_before_hiding() {
        let mut tracker = tracker();
        tracker.record_ratio("a", 0.6);
        tracker.evaluate(off_screen);
        tracker.record_ratio("a", 0.1);
        tracker.record_ratio("b", 0.05);

        let mut measured = Vec::new();
        let changed = tracker.evaluate(|id| {
            measured.push(id.to_owned());
            (id == "b").then_some(ViewportRect {
                top: 850.0,
                height: 600.0,
                viewport_height: 900.0,
            })
        });
        assert!(!measured.is_empty());
        assert!(!changed);
        assert!(tracker.is_visible());
        assert_eq!(tracker.current().map(|t| t.product_id.as_str()), Some("a"));
    }

    #[test]
    fn hides_when_nothing_is_on_screen() {
        let mut tracker = tracker();
        tracker.record_ratio("c", 0.8);
        tracker.evaluate(off_screen);
        tracker.record_ratio("c", 0.0);
        assert!(tracker.evaluate(off_screen));
        assert!(!tracker.is_visible());
    }

    #[test]
    fn geometry_seeds_a_target_when_none_yet() {
        let mut tracker = tracker();
        tracker.record_ratio("c", 0.1);
        let changed = tracker.evaluate(|id| {
            (id == "c").then_some(ViewportRect {
                top: 100.0,
                height: 600.0,
                viewport_height: 900.0,
            })
        });
        assert!(changed);
        assert_eq!(tracker.current().map(|t| t.product_id.as_str()), Some("c"));
    }

    #[test]
    fn ratio_path_skips_geometry() {
        let mut tracker = tracker();
        tracker.record_ratio("a", 0.3);
        let mut calls = 0;
        tracker.evaluate(|_| {
            calls += 1;
            None
        });
        assert_eq!(calls, 0);
    }

    #[test]
    fn desktop_breakpoint() {
        assert!(!is_desktop_width(1023.0));
        assert!(is_desktop_width(1024.0));
        assert!(!is_desktop_width(f64::NAN));
    }
}
