//! Motion capability detection.
//!
//! Every motion controller takes a [`MotionCapabilities`] value at mount time
//! instead of poking at browser globals on its own. Detection happens through
//! the [`EnvironmentProbe`] trait so the policy can be exercised without a
//! browser.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// CPU core count at or below which the device counts as low-performance.
pub const LOW_CORE_COUNT: u32 = 2;
/// Device memory (GB) at or below which the device counts as low-performance.
pub const LOW_MEMORY_GB: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProbeError {
    #[error("no window available")]
    NoWindow,
    #[error("probe threw: {0}")]
    Threw(String),
}

impl From<JsValue> for ProbeError {
    fn from(value: JsValue) -> Self {
        ProbeError::Threw(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Outcome of one environment probe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Probe<T> {
    Reported(T),
    Unsupported,
    Failed,
}

impl<T> Probe<T> {
    fn from_result(result: Result<Option<T>, ProbeError>, capability: Capability) -> Self {
        match result {
            Ok(Some(value)) => Probe::Reported(value),
            Ok(None) => Probe::Unsupported,
            Err(e) => {
                log::warn!("{:?} probe failed: {}", capability, e);
                Probe::Failed
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    ReducedMotionQuery,
    HardwareConcurrency,
    DeviceMemory,
    IntersectionObserver,
    AnimationFrame,
    SessionStorage,
}

/// What an unsupported capability degrades to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    DisableMotion,
    SkipCheck,
    AssumeVisible,
}

impl Capability {
    /// The single fallback table consulted by every controller. A probe that
    /// failed outright always disables motion; this table only covers probes
    /// the platform simply does not offer.
    pub fn fallback(self) -> Fallback {
        match self {
            Capability::ReducedMotionQuery => Fallback::DisableMotion,
            Capability::HardwareConcurrency => Fallback::SkipCheck,
            Capability::DeviceMemory => Fallback::SkipCheck,
            Capability::IntersectionObserver => Fallback::AssumeVisible,
            Capability::AnimationFrame => Fallback::DisableMotion,
            Capability::SessionStorage => Fallback::SkipCheck,
        }
    }
}

/// Read-only access to the signals the motion layer depends on.
///
/// `Ok(None)` means the platform does not report the signal, `Err` means
/// asking for it blew up.
#[cfg_attr(test, mockall::automock)]
pub trait EnvironmentProbe {
    fn prefers_reduced_motion(&self) -> Result<Option<bool>, ProbeError>;
    fn hardware_concurrency(&self) -> Result<Option<u32>, ProbeError>;
    fn device_memory_gb(&self) -> Result<Option<f64>, ProbeError>;
    fn has_intersection_observer(&self) -> Result<Option<bool>, ProbeError>;
    fn has_animation_frame(&self) -> Result<Option<bool>, ProbeError>;
    fn has_session_storage(&self) -> Result<Option<bool>, ProbeError>;
}

/// Snapshot of the environment, taken once per controller instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionCapabilities {
    pub reduced_motion: Probe<bool>,
    pub hardware_concurrency: Probe<u32>,
    pub device_memory_gb: Probe<f64>,
    pub intersection_observer: Probe<bool>,
    pub animation_frame: Probe<bool>,
    pub session_storage: Probe<bool>,
}

impl MotionCapabilities {
    pub fn detect(probe: &dyn EnvironmentProbe) -> Self {
        Self {
            reduced_motion: Probe::from_result(
                probe.prefers_reduced_motion(),
                Capability::ReducedMotionQuery,
            ),
            hardware_concurrency: Probe::from_result(
                probe.hardware_concurrency(),
                Capability::HardwareConcurrency,
            ),
            device_memory_gb: Probe::from_result(
                probe.device_memory_gb(),
                Capability::DeviceMemory,
            ),
            intersection_observer: Probe::from_result(
                probe.has_intersection_observer(),
                Capability::IntersectionObserver,
            ),
            animation_frame: Probe::from_result(
                probe.has_animation_frame(),
                Capability::AnimationFrame,
            ),
            session_storage: Probe::from_result(
                probe.has_session_storage(),
                Capability::SessionStorage,
            ),
        }
    }

    /// Capabilities of an environment where nothing could be probed.
    pub fn unavailable() -> Self {
        Self {
            reduced_motion: Probe::Failed,
            hardware_concurrency: Probe::Failed,
            device_memory_gb: Probe::Failed,
            intersection_observer: Probe::Failed,
            animation_frame: Probe::Failed,
            session_storage: Probe::Failed,
        }
    }

    /// The gate every motion controller consults.
    pub fn motion_enabled(&self) -> bool {
        match self.reduced_motion {
            Probe::Reported(true) | Probe::Failed => return false,
            Probe::Unsupported => {
                if Capability::ReducedMotionQuery.fallback() == Fallback::DisableMotion {
                    return false;
                }
            }
            Probe::Reported(false) => {}
        }

        let low_cores = match self.hardware_concurrency {
            Probe::Reported(cores) => cores <= LOW_CORE_COUNT,
            Probe::Unsupported => {
                Capability::HardwareConcurrency.fallback() == Fallback::DisableMotion
            }
            Probe::Failed => true,
        };
        let low_memory = match self.device_memory_gb {
            Probe::Reported(gb) => gb <= LOW_MEMORY_GB,
            Probe::Unsupported => Capability::DeviceMemory.fallback() == Fallback::DisableMotion,
            Probe::Failed => true,
        };
        if low_cores || low_memory {
            return false;
        }

        match self.animation_frame {
            Probe::Reported(available) => available,
            Probe::Unsupported => Capability::AnimationFrame.fallback() != Fallback::DisableMotion,
            Probe::Failed => false,
        }
    }

    /// Whether intersection watching can be used. When it cannot, reveal
    /// content is shown straight away.
    pub fn can_observe_intersections(&self) -> bool {
        matches!(self.intersection_observer, Probe::Reported(true))
    }

    pub fn can_use_session_storage(&self) -> bool {
        matches!(self.session_storage, Probe::Reported(true))
    }
}

/// Probe backed by the real browser globals.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserProbe;

impl BrowserProbe {
    fn window() -> Result<web_sys::Window, ProbeError> {
        web_sys::window().ok_or(ProbeError::NoWindow)
    }

    fn has_global(name: &str) -> Result<Option<bool>, ProbeError> {
        let window = Self::window()?;
        let present = js_sys::Reflect::has(&window, &JsValue::from_str(name))?;
        Ok(Some(present))
    }
}

impl EnvironmentProbe for BrowserProbe {
    fn prefers_reduced_motion(&self) -> Result<Option<bool>, ProbeError> {
        let query = Self::window()?.match_media("(prefers-reduced-motion: reduce)")?;
        Ok(query.map(|mq| mq.matches()))
    }

    fn hardware_concurrency(&self) -> Result<Option<u32>, ProbeError> {
        let cores = Self::window()?.navigator().hardware_concurrency();
        if cores.is_finite() && cores > 0.0 {
            Ok(Some(cores as u32))
        } else {
            Ok(None)
        }
    }

    fn device_memory_gb(&self) -> Result<Option<f64>, ProbeError> {
        // Not part of the web-sys bindings, and Firefox/Safari do not expose it.
        let navigator = Self::window()?.navigator();
        let value = js_sys::Reflect::get(&navigator, &JsValue::from_str("deviceMemory"))?;
        Ok(value.as_f64().filter(|gb| gb.is_finite()))
    }

    fn has_intersection_observer(&self) -> Result<Option<bool>, ProbeError> {
        Self::has_global("IntersectionObserver")
    }

    fn has_animation_frame(&self) -> Result<Option<bool>, ProbeError> {
        Self::has_global("requestAnimationFrame")
    }

    fn has_session_storage(&self) -> Result<Option<bool>, ProbeError> {
        // Access throws in some privacy modes.
        let storage = Self::window()?.session_storage()?;
        Ok(Some(storage.is_some()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capable_probe() -> MockEnvironmentProbe {
        let mut probe = MockEnvironmentProbe::new();
        probe.expect_prefers_reduced_motion().returning(|| Ok(Some(false)));
        probe.expect_hardware_concurrency().returning(|| Ok(Some(8)));
        probe.expect_device_memory_gb().returning(|| Ok(Some(8.0)));
        probe.expect_has_intersection_observer().returning(|| Ok(Some(true)));
        probe.expect_has_animation_frame().returning(|| Ok(Some(true)));
        probe.expect_has_session_storage().returning(|| Ok(Some(true)));
        probe
    }

    #[test]
    fn capable_desktop_enables_motion() {
        let caps = MotionCapabilities::detect(&capable_probe());
        assert!(caps.motion_enabled());
        assert!(caps.can_observe_intersections());
        assert!(caps.can_use_session_storage());
    }

    #[test]
    fn reduced_motion_preference_disables() {
        let mut caps = MotionCapabilities::detect(&capable_probe());
        caps.reduced_motion = Probe::Reported(true);
        assert!(!caps.motion_enabled());
    }

    #[test]
    fn low_end_hardware_disables() {
        let mut caps = MotionCapabilities::detect(&capable_probe());
        caps.hardware_concurrency = Probe::Reported(2);
        assert!(!caps.motion_enabled());

        let mut caps = MotionCapabilities::detect(&capable_probe());
        caps.device_memory_gb = Probe::Reported(2.0);
        assert!(!caps.motion_enabled());

        let mut caps = MotionCapabilities::detect(&capable_probe());
        caps.device_memory_gb = Probe::Reported(4.0);
        caps.hardware_concurrency = Probe::Reported(3);
        assert!(caps.motion_enabled());
    }

    #[test]
    fn missing_device_memory_is_skipped() {
        let mut caps = MotionCapabilities::detect(&capable_probe());
        caps.device_memory_gb = Probe::Unsupported;
        caps.hardware_concurrency = Probe::Unsupported;
        assert!(caps.motion_enabled());
    }

    #[test]
    fn unsupported_reduced_motion_query_disables() {
        let mut caps = MotionCapabilities::detect(&capable_probe());
        caps.reduced_motion = Probe::Unsupported;
        assert!(!caps.motion_enabled());
    }

    #[test]
    fn every_probe_throwing_degrades_silently() {
        let mut probe = MockEnvironmentProbe::new();
        probe
            .expect_prefers_reduced_motion()
            .returning(|| Err(ProbeError::Threw("matchMedia".into())));
        probe
            .expect_hardware_concurrency()
            .returning(|| Err(ProbeError::Threw("navigator".into())));
        probe
            .expect_device_memory_gb()
            .returning(|| Err(ProbeError::Threw("deviceMemory".into())));
        probe
            .expect_has_intersection_observer()
            .returning(|| Err(ProbeError::NoWindow));
        probe.expect_has_animation_frame().returning(|| Err(ProbeError::NoWindow));
        probe.expect_has_session_storage().returning(|| Err(ProbeError::NoWindow));

        let caps = MotionCapabilities::detect(&probe);
        assert_eq!(caps, MotionCapabilities::unavailable());
        assert!(!caps.motion_enabled());
        assert!(!caps.can_observe_intersections());
        assert!(!caps.can_use_session_storage());
    }

    #[test]
    fn fallback_table_is_explicit() {
        assert_eq!(Capability::ReducedMotionQuery.fallback(), Fallback::DisableMotion);
        assert_eq!(Capability::IntersectionObserver.fallback(), Fallback::AssumeVisible);
        assert_eq!(Capability::DeviceMemory.fallback(), Fallback::SkipCheck);
    }
}
