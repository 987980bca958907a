//! Coarse user-agent classification for click analytics.
//!
//! Deliberately simple substring matching: analytics only needs category
//! buckets, not an accurate device database. Matches run in a fixed order,
//! so composite user agents resolve to the first listed match.

/// Coarse classification of a requesting client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientInfo {
    pub device_type: &'static str,
    pub browser: &'static str,
    pub os: &'static str,
}

/// Classifies a User-Agent string into device, browser, and OS buckets.
///
/// Unrecognized or empty strings classify as `desktop` / `unknown` /
/// `unknown`.
pub fn parse_user_agent(user_agent: &str) -> ClientInfo {
    let ua = user_agent.to_ascii_lowercase();

    let device_type = if ua.contains("mobile") || ua.contains("android") || ua.contains("iphone") {
        "mobile"
    } else if ua.contains("tablet") || ua.contains("ipad") {
        "tablet"
    } else {
        "desktop"
    };

    let browser = if ua.contains("firefox") {
        "Firefox"
    } else if ua.contains("chrome") {
        "Chrome"
    } else if ua.contains("safari") {
        "Safari"
    } else if ua.contains("edge") {
        "Edge"
    } else {
        "unknown"
    };

    let os = if ua.contains("windows") {
        "Windows"
    } else if ua.contains("mac") {
        "macOS"
    } else if ua.contains("linux") {
        "Linux"
    } else if ua.contains("android") {
        "Android"
    } else if ua.contains("ios") || ua.contains("iphone") || ua.contains("ipad") {
        "iOS"
    } else {
        "unknown"
    };

    ClientInfo {
        device_type,
        browser,
        os,
    }
}
