//! Core business data structures.
//!
//! The backing store owns the full URL record; the core only ever sees the
//! narrow projections defined here.

/// Destination resolved from a short code.
///
/// Returned by the store's atomic resolve-and-increment operation and held
/// in the redirect cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    pub record_id: i64,
    pub long_url: String,
}

/// Payload for reserving a new short link in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub long_url: String,
    pub is_custom_alias: bool,
    pub owner_id: Option<String>,
}

/// Result of the creation flow: the assigned code plus its record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedLink {
    pub record_id: i64,
    pub code: String,
    pub long_url: String,
}

/// Request metadata handed to the core by the serving layer.
///
/// All fields are optional: missing headers degrade analytics
/// classification, they never fail a redirect.
#[derive(Debug, Clone, Default)]
pub struct RequestMeta {
    /// Raw client address. Hashed before it is stored anywhere; the raw
    /// value never leaves the process.
    pub client_ip: Option<String>,
    pub user_agent: Option<String>,
    pub referrer: Option<String>,
    /// Raw query string of the inbound request, used for UTM attribution.
    pub query: Option<String>,
}
