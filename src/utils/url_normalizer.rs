//! URL normalization and safety checks for the creation flow.
//!
//! Ensures consistent URL representation by defaulting the scheme,
//! lowercasing hostnames, removing fragments and default ports, and
//! rejecting destinations that point back into the local network.

use std::net::Ipv4Addr;

use url::{Host, Url};

/// Maximum accepted destination URL length.
pub const MAX_URL_LENGTH: usize = 2048;

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must be less than {MAX_URL_LENGTH} characters")]
    TooLong,

    #[error("Cannot shorten local or private network URLs")]
    PrivateHost,

    #[error("Failed to normalize URL: {0}")]
    NormalizationFailed(String),
}

/// Normalizes a destination URL to a canonical form.
///
/// # Normalization rules
///
/// 1. **Scheme**: bare `example.com` becomes `https://example.com`; only
///    HTTP and HTTPS are accepted
/// 2. **Hostname**: converted to lowercase
/// 3. **Default ports**: removed (80 for HTTP, 443 for HTTPS)
/// 4. **Fragments**: removed (e.g. `#section`)
/// 5. **Query parameters and path**: preserved as-is
///
/// # Security
///
/// Rejects dangerous schemes (`javascript:`, `data:`, `file:`, ...) and
/// destinations on loopback, unspecified, or private-range hosts.
///
/// # Errors
///
/// Returns [`UrlNormalizationError`] naming the violated rule.
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(UrlNormalizationError::InvalidFormat(
            "URL is required".to_string(),
        ));
    }

    if trimmed.len() > MAX_URL_LENGTH {
        return Err(UrlNormalizationError::TooLong);
    }

    // Scheme defaulting for bare hostnames. Anything that already carries a
    // scheme (even a bad one) is parsed as-is so it fails the scheme check
    // below instead of turning into "https://javascript:...".
    let lower = trimmed.to_ascii_lowercase();
    let candidate = if lower.contains("://") || lower.starts_with("javascript:") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let mut url = Url::parse(&candidate)
        .map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    if is_private_host(url.host()) {
        return Err(UrlNormalizationError::PrivateHost);
    }

    if let Some(host) = url.host_str() {
        let host_lowercase = host.to_ascii_lowercase();
        url.set_host(Some(&host_lowercase)).map_err(|_| {
            UrlNormalizationError::NormalizationFailed("Failed to set normalized host".to_string())
        })?;
    }

    url.set_fragment(None);

    let is_default_port = matches!(
        (url.scheme(), url.port()),
        ("http", Some(80)) | ("https", Some(443))
    );
    if is_default_port {
        url.set_port(None).map_err(|_| {
            UrlNormalizationError::NormalizationFailed("Failed to remove default port".to_string())
        })?;
    }

    Ok(url.to_string())
}

/// Loopback, unspecified, and RFC 1918 hosts must not be shortened.
fn is_private_host(host: Option<Host<&str>>) -> bool {
    match host {
        Some(Host::Domain(domain)) => {
            let domain = domain.to_ascii_lowercase();
            domain == "localhost" || domain.ends_with(".localhost")
        }
        Some(Host::Ipv4(ip)) => {
            ip.is_loopback() || ip.is_unspecified() || ip.is_private() || is_link_local(ip)
        }
        Some(Host::Ipv6(ip)) => ip.is_loopback() || ip.is_unspecified(),
        None => false,
    }
}

fn is_link_local(ip: Ipv4Addr) -> bool {
    ip.octets()[0] == 169 && ip.octets()[1] == 254
}
