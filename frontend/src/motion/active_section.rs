//! Which chapter of a long page the jump navigation should highlight.

/// Added to the scroll offset so a chapter counts as active once it slides
/// under the sticky nav bar rather than when it hits the very top.
pub const ACTIVE_LOOKAHEAD_PX: f64 = 150.0;
/// Gap kept between the nav bar and a chapter after a jump.
pub const JUMP_PADDING_PX: f64 = 16.0;

/// Vertical extent of one chapter in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ChapterBand {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl ChapterBand {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Remembers the active chapter between scroll ticks.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ActiveSectionTracker {
    active: Option<String>,
}

impl ActiveSectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Re-evaluates against freshly measured bands, in declaration order.
    /// Chapters that could not be measured are passed as `None` and skipped.
    /// Returns true when the active chapter changed.
    pub fn update(&mut self, bands: &[Option<ChapterBand>], scroll_y: f64) -> bool {
        let next = resolve(bands, scroll_y + ACTIVE_LOOKAHEAD_PX, self.active.as_deref());
        if next != self.active {
            self.active = next;
            true
        } else {
            false
        }
    }
}

fn resolve(bands: &[Option<ChapterBand>], position: f64, previous: Option<&str>) -> Option<String> {
    let measured: Vec<&ChapterBand> = bands.iter().flatten().collect();
    let (Some(first), Some(last)) = (measured.first(), measured.last()) else {
        return previous.map(str::to_owned);
    };

    // Later chapters win when bands overlap.
    if let Some(hit) = measured.iter().rev().find(|band| band.contains(position)) {
        return Some(hit.id.clone());
    }
    if position >= last.top {
        return Some(last.id.clone());
    }
    if position < first.top && previous.is_none() {
        return None;
    }
    // Between two chapters, or back above the first: keep whatever was active.
    previous.map(str::to_owned)
}

/// Scroll destination for a nav click so the chapter lands just under the nav bar.
pub fn jump_target(chapter_top: f64, nav_height: f64) -> f64 {
    (chapter_top - nav_height - JUMP_PADDING_PX).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bands() -> Vec<Option<ChapterBand>> {
        vec![
            Some(ChapterBand::new("wearables", 600.0, 800.0)),
            Some(ChapterBand::new("smart-home", 1400.0, 800.0)),
            Some(ChapterBand::new("mobility", 2200.0, 800.0)),
        ]
    }

    #[test]
    fn nothing_active_before_first_chapter() {
        let mut tracker = ActiveSectionTracker::new();
        assert!(!tracker.update(&bands(), 0.0));
        assert_eq!(tracker.active(), None);
    }

    #[test]
    fn lookahead_activates_chapter_under_nav() {
        let mut tracker = ActiveSectionTracker::new();
        assert!(tracker.update(&bands(), 460.0));
        assert_eq!(tracker.active(), Some("wearables"));
        tracker.update(&bands(), 1300.0);
        assert_eq!(tracker.active(), Some("smart-home"));
    }

    #[test]
    fn later_chapter_wins_overlap() {
        let overlapping = vec![
            Some(ChapterBand::new("one", 0.0, 1000.0)),
            Some(ChapterBand::new("two", 500.0, 1000.0)),
            Some(ChapterBand::new("three", 800.0, 1000.0)),
        ];
        let mut tracker = ActiveSectionTracker::new();
        // position 1050 sits inside "two" and "three" but not "one"
        tracker.update(&overlapping, 1050.0 - ACTIVE_LOOKAHEAD_PX);
        assert_eq!(tracker.active(), Some("three"));
    }

    #[test]
    fn last_chapter_stays_active_past_the_end() {
        let mut tracker = ActiveSectionTracker::new();
        tracker.update(&bands(), 10_000.0);
        assert_eq!(tracker.active(), Some("mobility"));
    }

    #[test]
    fn gap_keeps_previous_chapter() {
        let gapped = vec![
            Some(ChapterBand::new("a", 0.0, 100.0)),
            Some(ChapterBand::new("b", 500.0, 100.0)),
        ];
        let mut tracker = ActiveSectionTracker::new();
        tracker.update(&gapped, 50.0 - ACTIVE_LOOKAHEAD_PX);
        assert_eq!(tracker.active(), Some("a"));
        assert!(!tracker.update(&gapped, 300.0 - ACTIVE_LOOKAHEAD_PX));
        assert_eq!(tracker.active(), Some("a"));
    }

    #[test]
    fn unmeasured_chapters_are_skipped() {
        let partial = vec![
            Some(ChapterBand::new("a", 0.0, 500.0)),
            None,
            Some(ChapterBand::new("c", 1000.0, 500.0)),
        ];
        let mut tracker = ActiveSectionTracker::new();
        tracker.update(&partial, 1100.0 - ACTIVE_LOOKAHEAD_PX);
        assert_eq!(tracker.active(), Some("c"));
    }

    #[test]
    fn no_measurable_chapters_changes_nothing() {
        let mut tracker = ActiveSectionTracker::new();
        tracker.update(&bands(), 1300.0);
        assert!(!tracker.update(&[None, None], 0.0));
        assert_eq!(tracker.active(), Some("smart-home"));
    }

    #[test]
    fn scrolling_back_above_first_chapter_keeps_last_active() {
        let mut tracker = ActiveSectionTracker::new();
        tracker.update(&bands(), 1300.0);
        assert_eq!(tracker.active(), Some("smart-home"));
        assert!(!tracker.update(&bands(), 0.0));
        assert_eq!(tracker.active(), Some("smart-home"));
    }

    #[test]
    fn jump_target_clears_nav_bar() {
        assert_eq!(jump_target(1000.0, 64.0), 920.0);
        assert_eq!(jump_target(20.0, 64.0), 0.0);
    }
}
