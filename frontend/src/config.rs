/// Origin of the backend API. Release builds are served by the backend
/// itself, so requests stay same-origin.
pub fn get_backend_url() -> &'static str {
    if cfg!(debug_assertions) {
        "http://localhost:3000"
    } else {
        ""
    }
}

pub const SITE_NAME: &str = "Showfloor";
pub const SITE_TAGLINE: &str = "The standout consumer tech from this year's show floor";
pub const DEFAULT_SHARE_IMAGE: &str = "/assets/share-card.jpg";

/// Dismiss the intro overlay after this long.
pub const INTRO_DURATION_MS: u32 = 2_400;
pub const INTRO_SESSION_KEY: &str = "showfloor.intro-shown";
