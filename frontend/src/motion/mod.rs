//! Scroll-driven visibility and motion.
//!
//! Each controller is a plain state machine next to a Yew hook that feeds it
//! browser events. Nothing in here is allowed to panic or surface an error
//! to the page: the worst case is content shown without animation.

pub mod active_section;
pub mod capabilities;
pub mod dom;
pub mod frame;
pub mod hooks;
pub mod most_visible;
pub mod observer;
pub mod parallax;
pub mod reveal;
pub mod scroll_lock;
pub mod scrub;
pub mod video;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    #[error("element `{0}` is not in the document")]
    MissingElement(String),
    #[error("intersection observer setup failed: {0}")]
    ObserverSetup(String),
    #[error("no window available")]
    NoWindow,
}

pub use capabilities::MotionCapabilities;
pub use hooks::{
    use_active_section, use_desktop_width, use_most_visible, use_motion_capabilities,
    use_parallax, use_reveal, use_scroll_scrub, ScrubNodes,
};
