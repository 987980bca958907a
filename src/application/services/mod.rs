//! Business logic services.

pub mod analytics;
mod link_service;
mod redirect_service;

pub use link_service::LinkService;
pub use redirect_service::RedirectService;
