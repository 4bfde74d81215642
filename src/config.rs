use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running locally with trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Where every "Apply" call-to-action points.
pub const APPLY_URL: &str =
    "https://careers.atlasassistants.com/jobs/4985570-executive-assistant-fully-remote-global/applications/new";

/// Swatch image shown while the video player script is still loading.
pub fn video_swatch_url(media_id: &str) -> String {
    format!("https://fast.wistia.com/embed/medias/{media_id}/swatch")
}

/// Pretend round-trip for the email capture form, in milliseconds.
pub const EMAIL_SUBMIT_DELAY_MS: u32 = 1000;

/// Scroll offset after which the nav turns solid and the floating apply
/// button may appear.
pub const NAV_SOLID_AFTER_PX: f64 = 50.0;

/// Counter animations run this long, in seconds.
pub const COUNTER_DURATION_SECS: f64 = 2.0;
