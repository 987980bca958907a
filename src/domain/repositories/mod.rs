//! External collaborator trait definitions.

mod analytics_sink;
mod link_store;

pub use analytics_sink::AnalyticsSink;
pub use link_store::LinkStore;

#[cfg(test)]
pub use analytics_sink::MockAnalyticsSink;
#[cfg(test)]
pub use link_store::MockLinkStore;
