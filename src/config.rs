use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// localStorage key holding the serialized consent record.
pub const CONSENT_STORAGE_KEY: &str = "cookieConsent";

pub const CAROUSEL_INTERVAL_MS: u32 = 5_000;
pub const CAROUSEL_DRAG_THRESHOLD_PX: f64 = 50.0;

pub const NAV_SCROLL_DELAY_MS: u32 = 100;
pub const NAV_HEADER_OFFSET_PX: f64 = -90.0;
pub const NAV_REVEAL_MARGIN_PX: f64 = 100.0;

/// Below this width the features section uses the sticky panel stack.
pub const NARROW_VIEWPORT_PX: f64 = 1024.0;
