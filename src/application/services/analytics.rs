//! Click event construction: hashing, classification, and attribution.

use chrono::Utc;
use sha2::{Digest, Sha256};
use url::form_urlencoded;

use crate::domain::click_event::ClickEvent;
use crate::domain::entities::RequestMeta;
use crate::utils::user_agent::parse_user_agent;

/// Builds a click event from request metadata.
///
/// Infallible by design: missing metadata degrades to `unknown`
/// classifications and absent attribution fields. The raw client address is
/// consumed here and replaced by its SHA-256 digest; it appears nowhere in
/// the returned event.
pub fn build_click_event(record_id: i64, meta: &RequestMeta) -> ClickEvent {
    let info = parse_user_agent(meta.user_agent.as_deref().unwrap_or(""));
    let (utm_source, utm_medium, utm_campaign) = extract_utm(meta.query.as_deref());

    ClickEvent {
        record_id,
        clicked_at: Utc::now(),
        ip_hash: hash_client_ip(meta.client_ip.as_deref()),
        device_type: info.device_type.to_string(),
        browser: info.browser.to_string(),
        os: info.os.to_string(),
        referrer: meta.referrer.clone(),
        utm_source,
        utm_medium,
        utm_campaign,
    }
}

/// One-way privacy hash of the client address.
///
/// Deterministic for a given input so repeat visitors can still be counted,
/// without the address itself ever being stored.
pub fn hash_client_ip(ip: Option<&str>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(ip.unwrap_or("unknown").as_bytes());
    hex::encode(hasher.finalize())
}

/// Pulls campaign-attribution parameters out of the raw query string.
fn extract_utm(query: Option<&str>) -> (Option<String>, Option<String>, Option<String>) {
    let mut source = None;
    let mut medium = None;
    let mut campaign = None;

    if let Some(query) = query {
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "utm_source" => source = Some(value.into_owned()),
                "utm_medium" => medium = Some(value.into_owned()),
                "utm_campaign" => campaign = Some(value.into_owned()),
                _ => {}
            }
        }
    }

    (source, medium, campaign)
}
