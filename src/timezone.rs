//! Timezone Detection

/// Zone reported when the platform gives us nothing usable
pub const FALLBACK_TIMEZONE: &str = "UTC";

/// Normalize whatever the platform reported, falling back to UTC for
/// missing or blank values.
pub fn resolve(detected: Option<&str>) -> String {
    detected
        .map(str::trim)
        .filter(|tz| !tz.is_empty())
        .unwrap_or(FALLBACK_TIMEZONE)
        .to_string()
}

/// Detect the local zone from `TZ` on native targets.
///
/// POSIX allows a leading `:` (`TZ=:Europe/Berlin`), which is stripped.
#[cfg(feature = "native")]
pub fn detect_native() -> String {
    let tz = std::env::var("TZ").ok();
    resolve(tz.as_deref().map(|s| s.trim_start_matches(':')))
}
