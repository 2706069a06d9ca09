/// Largest vertical drift applied to a parallax image.
pub const PARALLAX_MAX_OFFSET_PX: f64 = 15.0;

/// Element geometry relative to the viewport, as reported by
/// `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportRect {
    pub top: f64,
    pub height: f64,
    pub viewport_height: f64,
}

impl ViewportRect {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn intersects_viewport(&self) -> bool {
        self.intersects_with_margin(0.0)
    }

    /// Whether the element is within `margin` pixels of the viewport.
    pub fn intersects_with_margin(&self, margin: f64) -> bool {
        self.bottom() > -margin && self.top < self.viewport_height + margin
    }
}

/// How far an element has travelled from entering at the bottom of the
/// viewport (0) to leaving at the top (1).
pub fn progress_through_viewport(rect: ViewportRect) -> f64 {
    let travel = rect.viewport_height + rect.height;
    if !travel.is_finite() || travel <= 0.0 {
        return 0.0;
    }
    let progress = (rect.viewport_height - rect.top) / travel;
    if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParallaxController {
    motion_enabled: bool,
    max_offset: f64,
    offset: f64,
}

impl ParallaxController {
    pub fn new(motion_enabled: bool) -> Self {
        Self {
            motion_enabled,
            max_offset: PARALLAX_MAX_OFFSET_PX,
            offset: 0.0,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Recomputes the offset. Returns the new value when it changed.
    pub fn update(&mut self, rect: ViewportRect) -> Option<f64> {
        let next = if self.motion_enabled && rect.intersects_viewport() {
            progress_through_viewport(rect) * self.max_offset
        } else {
            0.0
        };
        if (next - self.offset).abs() < f64::EPSILON {
            return None;
        }
        self.offset = next;
        Some(next)
    }

    pub fn transform(&self) -> String {
        format!("translate3d(0, {:.2}px, 0)", self.offset)
    }
}
