//! Reserved words that can never be assigned as short codes.
//!
//! These are operational route names and common paths; handing one out as a
//! code would shadow a real endpoint of the serving layer.

/// Deny-list of codes reserved for system use.
pub const RESERVED_WORDS: &[&str] = &[
    // System routes
    "api", "app", "admin", "auth", "callback", "dashboard", "login", "logout", "register",
    "signup", "signin",
    // Pages
    "about", "contact", "help", "support", "terms", "privacy", "policy", "settings", "profile",
    "account", "home",
    // Features
    "result", "results", "analytics", "stats", "statistics", "qr", "qrcode", "export", "import",
    "bulk", "batch",
    // HTTP status codes
    "404", "500", "403", "401",
    // File extensions
    "css", "js", "json", "xml", "html", "txt", "pdf",
    // Common tech terms
    "test", "demo", "example", "sample", "docs", "documentation", "guide",
    // Security
    "hack", "hacked", "security", "exploit",
    // Miscellaneous
    "undefined", "null", "void", "new", "delete", "edit", "update", "create", "list", "view",
    "show",
];

/// Checks whether a word is reserved (case-insensitive).
pub fn is_reserved_word(word: &str) -> bool {
    let lower = word.to_ascii_lowercase();
    RESERVED_WORDS.contains(&lower.as_str())
}
